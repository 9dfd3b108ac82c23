//! Canonical facelet string encoding.
//!
//! Produces the 54-character string the two-phase solver consumes: faces in
//! U, R, F, D, L, B order, each read row-major from its top-left sticker, with
//! every sticker written as the face letter its color belongs to.

use crate::facelet::{FaceletModel, FACELET_COUNT};

/// Encodes the model into the solver's facelet string.
///
/// Total over every model: unassigned stickers encode as `U`.
pub fn encode(model: &FaceletModel) -> String {
    let mut encoded = String::with_capacity(FACELET_COUNT);
    // stickers() is already in canonical face order, row-major per face
    for color in model.stickers() {
        encoded.push(color.face_letter());
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facelet::{Color, Face};
    use crate::validate::validate;
    use proptest::prelude::*;

    /// Paints every non-center sticker with its face's own center color.
    fn solved_model() -> FaceletModel {
        let mut model = FaceletModel::new();
        for face in Face::ALL {
            for row in 0..3 {
                for col in 0..3 {
                    model.set_cell(face, row, col, face.center_color());
                }
            }
        }
        model
    }

    #[test]
    fn test_solved_model_encodes_to_identity_string() {
        assert_eq!(
            encode(&solved_model()),
            "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB"
        );
    }

    #[test]
    fn test_startup_model_defaults_unassigned_to_up() {
        let encoded = encode(&FaceletModel::new());
        assert_eq!(encoded.len(), FACELET_COUNT);
        // only the five non-U centers differ from the default letter
        let expected: String = Face::ALL
            .iter()
            .flat_map(|face| {
                (0..9).map(move |i| if i == 4 { face.letter() } else { 'U' })
            })
            .collect();
        assert_eq!(encoded, expected);
    }

    #[test]
    fn test_row_major_order_within_face() {
        let mut model = solved_model();
        model.set_cell(Face::R, 0, 1, Color::Blue);
        model.set_cell(Face::R, 2, 0, Color::Yellow);
        let encoded = encode(&model);
        let right_face = &encoded[9..18];
        assert_eq!(right_face, "RBRRRRDRR");
    }

    #[test]
    fn test_color_to_face_table() {
        let cases = [
            (Color::White, 'U'),
            (Color::Red, 'R'),
            (Color::Green, 'F'),
            (Color::Yellow, 'D'),
            (Color::Orange, 'L'),
            (Color::Blue, 'B'),
            (Color::Unassigned, 'U'),
        ];
        for (color, letter) in cases {
            let mut model = FaceletModel::new();
            model.set_cell(Face::B, 2, 2, color);
            assert_eq!(encode(&model).chars().last(), Some(letter), "{color:?}");
        }
    }

    fn arbitrary_color() -> impl Strategy<Value = Color> {
        prop::sample::select(vec![
            Color::White,
            Color::Yellow,
            Color::Red,
            Color::Orange,
            Color::Green,
            Color::Blue,
            Color::Unassigned,
        ])
    }

    proptest! {
        #[test]
        fn prop_encoding_is_total_and_deterministic(
            paints in prop::collection::vec((0usize..6, 0usize..3, 0usize..3, arbitrary_color()), 0..80)
        ) {
            let mut model = FaceletModel::new();
            for (face, row, col, color) in paints {
                model.set_cell(Face::ALL[face], row, col, color);
            }

            let first = encode(&model);
            let second = encode(&model);
            prop_assert_eq!(first.chars().count(), FACELET_COUNT);
            prop_assert!(validate(&first).is_ok());
            prop_assert_eq!(first, second);
        }
    }
}
