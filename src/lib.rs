//! Cube Solver Library
//!
//! Holds the painted sticker state of a 3x3x3 cube and turns it into
//! readable solving instructions: validate, encode for the two-phase solver,
//! invoke it, and translate the returned move notation.

pub mod encode;
pub mod facelet;
pub mod kociemba;
pub mod moves;
pub mod session;
pub mod solver;
pub mod validate;

pub use facelet::{Color, Face, FaceletModel};
pub use kociemba::{SolverConfig, TwoPhaseSolver};
pub use session::{Intent, Session};
pub use solver::{invoke, AlgorithmError, SolveError, SolvingAlgorithm};
