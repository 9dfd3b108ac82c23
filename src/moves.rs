//! Move notation parsing and human-readable turn instructions.
//!
//! A move token is a face letter followed by an optional modifier:
//! nothing for a clockwise quarter turn, `2` for a half turn, and an
//! apostrophe for a counterclockwise quarter turn.

use std::fmt;

use thiserror::Error;

use crate::facelet::Face;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Invalid move: {0}")]
    Invalid(String),
}

/// How far, and which way, a layer is turned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Clockwise,
    Half,
    CounterClockwise,
}

impl Turn {
    fn from_modifier(modifier: &str) -> Option<Self> {
        match modifier {
            "" => Some(Turn::Clockwise),
            "2" => Some(Turn::Half),
            "'" | "\u{2019}" | "\u{2032}" => Some(Turn::CounterClockwise),
            _ => None,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Turn::Clockwise => "clockwise once",
            Turn::Half => "clockwise twice",
            Turn::CounterClockwise => "counterclockwise once",
        }
    }
}

/// Descriptive name of the layer a face letter turns.
pub const fn layer_name(face: Face) -> &'static str {
    match face {
        Face::U => "top layer",
        Face::R => "right layer",
        Face::F => "front layer",
        Face::D => "bottom layer",
        Face::L => "left layer",
        Face::B => "back layer",
    }
}

/// One parsed move token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

impl Move {
    pub fn parse(token: &str) -> Result<Self, MoveError> {
        let invalid = || MoveError::Invalid(token.to_string());

        let mut chars = token.chars();
        let face = chars
            .next()
            .and_then(|letter| Face::from_char(letter).ok())
            .ok_or_else(invalid)?;
        let turn = Turn::from_modifier(chars.as_str()).ok_or_else(invalid)?;

        Ok(Move { face, turn })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Turn {} {}", layer_name(self.face), self.turn.description())
    }
}

/// Translates a solver move string into one instruction per token.
///
/// Order is preserved. Unrecognized tokens become `Invalid move: <token>`
/// entries instead of aborting the translation.
pub fn translate(moves: &str) -> Vec<String> {
    moves
        .split_whitespace()
        .map(|token| match Move::parse(token) {
            Ok(parsed) => parsed.to_string(),
            Err(err) => err.to_string(),
        })
        .collect()
}
