//! Interaction state and the intent dispatcher driven by the front end.
//!
//! A [`Session`] owns everything the user can change: the painted cube, the
//! palette selection, the latest solve result and how far it is scrolled.
//! The front end feeds it one [`Intent`] at a time and reads the accessors
//! back when redrawing.

use crate::encode::encode;
use crate::facelet::{Color, Face, FaceletModel};
use crate::moves::translate;
use crate::solver::{invoke, SolvingAlgorithm};

/// Number of result lines the results view shows at once.
pub const DEFAULT_VISIBLE_LINES: usize = 30;

/// A single user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Paint a sticker with the selected color.
    Paint { face: Face, row: usize, col: usize },
    /// Pick a palette color for subsequent paints.
    SelectColor(Color),
    /// Solve the cube as currently painted.
    Solve,
    /// Move the results view by this many lines; positive scrolls down.
    Scroll(isize),
}

pub struct Session<A> {
    model: FaceletModel,
    selected: Color,
    result: Vec<String>,
    scroll_offset: usize,
    visible_lines: usize,
    algorithm: A,
}

impl<A: SolvingAlgorithm> Session<A> {
    pub fn new(algorithm: A) -> Self {
        Self::with_visible_lines(algorithm, DEFAULT_VISIBLE_LINES)
    }

    pub fn with_visible_lines(algorithm: A, visible_lines: usize) -> Self {
        Self {
            model: FaceletModel::new(),
            selected: Color::White,
            result: Vec::new(),
            scroll_offset: 0,
            visible_lines,
            algorithm,
        }
    }

    /// Applies one intent to completion.
    pub fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::Paint { face, row, col } => self.paint_selected(face, row, col),
            Intent::SelectColor(color) => self.select_color(color),
            Intent::Solve => self.request_solve(),
            Intent::Scroll(delta) => self.scroll(delta),
        }
    }

    pub fn paint(&mut self, face: Face, row: usize, col: usize, color: Color) {
        self.model.set_cell(face, row, col, color);
    }

    pub fn paint_selected(&mut self, face: Face, row: usize, col: usize) {
        self.paint(face, row, col, self.selected);
    }

    pub fn select_color(&mut self, color: Color) {
        self.selected = color;
    }

    /// Runs encode, solve and translate, replacing the current result.
    ///
    /// Failures land in the result as a single message line.
    pub fn request_solve(&mut self) {
        let facelets = encode(&self.model);
        tracing::info!(%facelets, "solve requested");

        self.result = match invoke(&mut self.algorithm, &facelets) {
            Ok(moves) => translate(&moves),
            Err(err) => vec![err.to_string()],
        };
        self.scroll_offset = 0;
    }

    /// Scrolls the results view, clamped so the window never runs past the end.
    pub fn scroll(&mut self, delta: isize) {
        let max_offset = self.result.len().saturating_sub(self.visible_lines);
        let target = self.scroll_offset.saturating_add_signed(delta);
        self.scroll_offset = target.min(max_offset);
    }

    pub fn model(&self) -> &FaceletModel {
        &self.model
    }

    pub fn selected_color(&self) -> Color {
        self.selected
    }

    pub fn result(&self) -> &[String] {
        &self.result
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn visible_lines(&self) -> usize {
        self.visible_lines
    }

    /// The slice of the result currently inside the visible window.
    pub fn visible_result(&self) -> &[String] {
        let end = (self.scroll_offset + self.visible_lines).min(self.result.len());
        &self.result[self.scroll_offset..end]
    }
}
