//! 3D view of the painted cube using kiss3d.

use kiss3d::prelude::*;

use cubesolve::facelet::{Color as StickerColor, Face, FaceletModel};

/// Returns the display color for a sticker.
fn sticker_color(color: StickerColor) -> Color {
    match color {
        StickerColor::White => Color::new(1.0, 1.0, 1.0, 1.0),
        StickerColor::Yellow => Color::new(1.0, 1.0, 0.0, 1.0),
        StickerColor::Red => Color::new(1.0, 0.0, 0.0, 1.0),
        StickerColor::Orange => Color::new(1.0, 0.65, 0.0, 1.0),
        StickerColor::Green => Color::new(0.0, 1.0, 0.0, 1.0),
        StickerColor::Blue => Color::new(0.0, 0.0, 1.0, 1.0),
        StickerColor::Unassigned => Color::new(0.78, 0.78, 0.78, 1.0),
    }
}

/// World-space center of a sticker.
///
/// Each face is read the way it appears in the unfolded net: U with B at the
/// top edge, D with F at the top edge, side faces with U at the top edge.
/// Cubie centers sit at -1, 0 and 1 on each axis.
fn sticker_position(face: Face, row: usize, col: usize, surface: f32) -> Vec3 {
    let row = row as f32 - 1.0;
    let col = col as f32 - 1.0;
    match face {
        Face::U => Vec3::new(col, surface, row),
        Face::D => Vec3::new(col, -surface, -row),
        Face::F => Vec3::new(col, -row, surface),
        Face::B => Vec3::new(-col, -row, -surface),
        Face::R => Vec3::new(surface, -row, -col),
        Face::L => Vec3::new(-surface, -row, col),
    }
}

/// Sticker box dimensions, thin along the face normal.
fn sticker_extent(face: Face) -> (f32, f32, f32) {
    /// Edge length of a sticker (slightly smaller than 1.0 for visible gaps).
    const SIZE: f32 = 0.9;
    /// Thickness along the face normal.
    const DEPTH: f32 = 0.05;

    match face {
        Face::U | Face::D => (SIZE, DEPTH, SIZE),
        Face::F | Face::B => (SIZE, SIZE, DEPTH),
        Face::R | Face::L => (DEPTH, SIZE, SIZE),
    }
}

/// Builds the scene: a dark core with one thin box per sticker.
fn build_scene(scene: &mut SceneNode3d, model: &FaceletModel) -> Vec<SceneNode3d> {
    /// Edge length of the cube body.
    const BODY_SIZE: f32 = 2.96;
    /// Distance from the origin to a sticker's center along the face normal.
    const SURFACE: f32 = 1.5;

    let mut nodes = Vec::new();
    nodes.push(
        scene
            .add_cube(BODY_SIZE, BODY_SIZE, BODY_SIZE)
            .set_color(Color::new(0.05, 0.05, 0.05, 1.0))
            .set_position(Vec3::ZERO),
    );

    for (face, grid) in model.faces() {
        let (width, height, depth) = sticker_extent(face);
        for (row, cells) in grid.iter().enumerate() {
            for (col, &color) in cells.iter().enumerate() {
                let node = scene
                    .add_cube(width, height, depth)
                    .set_color(sticker_color(color))
                    .set_position(sticker_position(face, row, col, SURFACE));
                nodes.push(node);
            }
        }
    }

    nodes
}

fn step_title(instructions: &[String], step: usize) -> String {
    match instructions.get(step) {
        Some(line) => format!(
            "Step {}/{}: {} - [Left/Right] navigate",
            step + 1,
            instructions.len(),
            line
        ),
        None => "Cube Solver - no instructions".to_string(),
    }
}

/// Shows the painted cube in an interactive 3D viewer.
///
/// The window title carries the current solving instruction.
pub fn display(model: FaceletModel, instructions: Vec<String>) {
    pollster::block_on(display_async(model, instructions));
}

async fn display_async(model: FaceletModel, instructions: Vec<String>) {
    let mut step = 0;
    let mut window = Window::new(&step_title(&instructions, step)).await;

    let mut camera = OrbitCamera3d::default();
    camera.set_dist(9.0);

    let mut scene = SceneNode3d::empty();
    scene
        .add_light(Light::point(100.0))
        .set_position(Vec3::new(5.0, 5.0, 5.0));

    let _nodes = build_scene(&mut scene, &model);

    loop {
        let mut step_changed = false;
        for event in window.events().iter() {
            if let kiss3d::event::WindowEvent::Key(key, action, _) = event.value {
                use kiss3d::event::{Action, Key};
                if action == Action::Press && !instructions.is_empty() {
                    match key {
                        Key::Right => {
                            step = (step + 1) % instructions.len();
                            step_changed = true;
                        }
                        Key::Left => {
                            step = step.checked_sub(1).unwrap_or(instructions.len() - 1);
                            step_changed = true;
                        }
                        _ => {}
                    }
                }
            }
        }

        if step_changed {
            window.set_title(&step_title(&instructions, step));
        }

        if !window.render_3d(&mut scene, &mut camera).await {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stickers_sit_on_the_surface_without_overlap() {
        let mut positions = Vec::new();
        for face in Face::ALL {
            for row in 0..3 {
                for col in 0..3 {
                    let position = sticker_position(face, row, col, 1.5);
                    let on_surface = [position.x, position.y, position.z]
                        .iter()
                        .filter(|v| v.abs() == 1.5)
                        .count();
                    assert_eq!(on_surface, 1, "{face:?} ({row},{col}) at {position:?}");
                    positions.push(position);
                }
            }
        }
        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_front_top_left_touches_up_bottom_left() {
        // F row 0 and U row 2 share an edge in the net
        let front = sticker_position(Face::F, 0, 0, 1.5);
        let up = sticker_position(Face::U, 2, 0, 1.5);
        assert_eq!(front.x, up.x);
        assert_eq!(front.y, 1.0);
        assert_eq!(up.z, 1.0);
    }

    #[test]
    fn test_step_title() {
        let instructions = vec!["Turn top layer clockwise once".to_string()];
        assert_eq!(
            step_title(&instructions, 0),
            "Step 1/1: Turn top layer clockwise once - [Left/Right] navigate"
        );
        assert_eq!(step_title(&[], 0), "Cube Solver - no instructions");
    }
}
