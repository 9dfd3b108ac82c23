//! Facelet model for a 3x3x3 cube.
//!
//! Stores the painted color of all 54 stickers as a flat array. Faces are
//! laid out in solver order (U, R, F, D, L, B) and each face is stored
//! row-major, so cell `(face, row, col)` lives at `face * 9 + row * 3 + col`.

use thiserror::Error;

/// Number of stickers on one face.
pub const CELLS_PER_FACE: usize = 9;

/// Total number of stickers on the cube.
pub const FACELET_COUNT: usize = 6 * CELLS_PER_FACE;

/// Row/column of the fixed center sticker on every face.
const CENTER: (usize, usize) = (1, 1);

/// A 3x3 grid of sticker colors for one face.
pub type FaceGrid = [[Color; 3]; 3];

/// Error returned when a face or color symbol is not recognized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown face '{0}', expected one of U R F D L B")]
    Face(char),
    #[error("unknown color '{0}', expected one of W Y R O G B X")]
    Color(char),
}

/// One face of the cube, named by its position rather than its color.
///
/// Declaration order is the order the solver expects faces in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    U,
    R,
    F,
    D,
    L,
    B,
}

impl Face {
    /// All faces in canonical solver order.
    pub const ALL: [Face; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

    pub fn from_char(symbol: char) -> Result<Self, ParseError> {
        match symbol {
            'U' => Ok(Face::U),
            'R' => Ok(Face::R),
            'F' => Ok(Face::F),
            'D' => Ok(Face::D),
            'L' => Ok(Face::L),
            'B' => Ok(Face::B),
            other => Err(ParseError::Face(other)),
        }
    }

    /// Single-letter identifier used in facelet strings and move notation.
    pub const fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::R => 'R',
            Face::F => 'F',
            Face::D => 'D',
            Face::L => 'L',
            Face::B => 'B',
        }
    }

    /// The color permanently fixed to this face's center sticker.
    ///
    /// This pins the color scheme: white up, green front, red right.
    pub const fn center_color(self) -> Color {
        match self {
            Face::U => Color::White,
            Face::R => Color::Red,
            Face::F => Color::Green,
            Face::D => Color::Yellow,
            Face::L => Color::Orange,
            Face::B => Color::Blue,
        }
    }
}

/// A sticker color, or the placeholder for a sticker not yet painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Green,
    Blue,
    Unassigned,
}

impl Color {
    /// The six real colors in palette order.
    pub const PALETTE: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Red,
        Color::Orange,
        Color::Green,
        Color::Blue,
    ];

    pub fn from_char(symbol: char) -> Result<Self, ParseError> {
        match symbol.to_ascii_uppercase() {
            'W' => Ok(Color::White),
            'Y' => Ok(Color::Yellow),
            'R' => Ok(Color::Red),
            'O' => Ok(Color::Orange),
            'G' => Ok(Color::Green),
            'B' => Ok(Color::Blue),
            'X' => Ok(Color::Unassigned),
            _ => Err(ParseError::Color(symbol)),
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Unassigned => 'X',
        }
    }

    /// Face identifier this color stands for in the solver's input format.
    ///
    /// Unpainted stickers map to `U` so a partially painted cube still encodes.
    pub const fn face_letter(self) -> char {
        match self {
            Color::White | Color::Unassigned => 'U',
            Color::Red => 'R',
            Color::Green => 'F',
            Color::Yellow => 'D',
            Color::Orange => 'L',
            Color::Blue => 'B',
        }
    }
}

/// Converts a `(face, row, col)` position to its index in the flat sticker array.
#[inline(always)]
pub const fn cell_index(face: Face, row: usize, col: usize) -> usize {
    face as usize * CELLS_PER_FACE + row * 3 + col
}

/// Returns true if `(row, col)` is the fixed center position of a face.
#[inline]
pub const fn is_center(row: usize, col: usize) -> bool {
    row == CENTER.0 && col == CENTER.1
}

/// The painted state of all 54 stickers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceletModel {
    cells: [Color; FACELET_COUNT],
}

impl Default for FaceletModel {
    fn default() -> Self {
        Self::new()
    }
}

impl FaceletModel {
    /// Creates the startup state: centers colored, everything else unassigned.
    pub fn new() -> Self {
        let mut cells = [Color::Unassigned; FACELET_COUNT];
        for face in Face::ALL {
            cells[cell_index(face, CENTER.0, CENTER.1)] = face.center_color();
        }
        Self { cells }
    }

    /// Paints one sticker.
    ///
    /// Writes to a center cell are ignored without signalling anything, as are
    /// positions outside the 3x3 grid.
    pub fn set_cell(&mut self, face: Face, row: usize, col: usize, color: Color) {
        if row >= 3 || col >= 3 {
            tracing::warn!(face = %face.letter(), row, col, "ignoring paint outside the face grid");
            return;
        }
        if is_center(row, col) {
            tracing::trace!(face = %face.letter(), "ignoring paint on fixed center");
            return;
        }
        self.cells[cell_index(face, row, col)] = color;
        tracing::debug!(face = %face.letter(), row, col, color = %color.symbol(), "painted cell");
    }

    /// Color of one sticker. Panics if `row` or `col` is outside `0..3`.
    pub fn cell(&self, face: Face, row: usize, col: usize) -> Color {
        self.cells[cell_index(face, row, col)]
    }

    /// Copy of one face's grid.
    pub fn face(&self, face: Face) -> FaceGrid {
        let start = face as usize * CELLS_PER_FACE;
        let mut grid = [[Color::Unassigned; 3]; 3];
        for (i, &color) in self.cells[start..start + CELLS_PER_FACE].iter().enumerate() {
            grid[i / 3][i % 3] = color;
        }
        grid
    }

    /// Snapshot of every face in canonical order.
    pub fn faces(&self) -> [(Face, FaceGrid); 6] {
        Face::ALL.map(|face| (face, self.face(face)))
    }

    /// All stickers in canonical order (faces U R F D L B, each row-major).
    pub fn stickers(&self) -> &[Color; FACELET_COUNT] {
        &self.cells
    }

    /// True once no sticker is left unassigned.
    pub fn is_complete(&self) -> bool {
        !self.cells.contains(&Color::Unassigned)
    }
}

/// Renders the unfolded cube as text.
///
/// Uses the T-shaped net: U on top, then L F R B side by side, then D.
/// Each sticker shows its color symbol.
pub fn format_net(model: &FaceletModel) -> String {
    const INDENT: &str = "    ";

    let row_text = |face: Face, row: usize| -> String {
        (0..3).map(|col| model.cell(face, row, col).symbol()).collect()
    };

    let mut output = String::new();
    for row in 0..3 {
        output.push_str(INDENT);
        output.push_str(&row_text(Face::U, row));
        output.push('\n');
    }
    for row in 0..3 {
        let band: Vec<String> = [Face::L, Face::F, Face::R, Face::B]
            .iter()
            .map(|&face| row_text(face, row))
            .collect();
        output.push_str(&band.join(" "));
        output.push('\n');
    }
    for row in 0..3 {
        output.push_str(INDENT);
        output.push_str(&row_text(Face::D, row));
        output.push('\n');
    }

    output
}
