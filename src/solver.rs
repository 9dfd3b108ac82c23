//! Solve invocation boundary.
//!
//! The solving algorithm itself is an external collaborator behind the
//! [`SolvingAlgorithm`] trait. [`invoke`] validates the facelet string, calls
//! the algorithm, and folds every way that can go wrong into [`SolveError`],
//! so callers only ever see a move string or a printable failure.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use thiserror::Error;

use crate::validate::{validate, ValidationError};

/// Failure reported by a solving algorithm.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    /// The stickers do not describe a legal, reachable cube.
    #[error("{0}")]
    Rejected(String),
    /// The algorithm broke for reasons unrelated to the input.
    #[error("{0}")]
    Fault(String),
}

/// Anything that can turn a valid facelet string into a move sequence.
pub trait SolvingAlgorithm {
    /// Solves a 54-character `U R F D L B` facelet string.
    ///
    /// Returns whitespace-separated move tokens such as `"R U R' U'"`.
    fn solve(&mut self, facelets: &str) -> Result<String, AlgorithmError>;
}

impl<A: SolvingAlgorithm + ?Sized> SolvingAlgorithm for Box<A> {
    fn solve(&mut self, facelets: &str) -> Result<String, AlgorithmError> {
        (**self).solve(facelets)
    }
}

/// Every reason a solve request can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error(transparent)]
    InvalidInput(#[from] ValidationError),
    #[error("{0}")]
    AlgorithmRejected(String),
    #[error("Solver error: {0}")]
    SolverFault(String),
}

/// Validates `facelets` and hands it to `algorithm`.
///
/// Panics raised inside the algorithm are caught and reported as
/// [`SolveError::SolverFault`].
pub fn invoke<A>(algorithm: &mut A, facelets: &str) -> Result<String, SolveError>
where
    A: SolvingAlgorithm + ?Sized,
{
    validate(facelets)?;

    match catch_unwind(AssertUnwindSafe(|| algorithm.solve(facelets))) {
        Ok(Ok(moves)) => {
            tracing::debug!(%moves, "solver returned");
            Ok(moves)
        }
        Ok(Err(AlgorithmError::Rejected(message))) => {
            tracing::info!(%message, "solver rejected the cube");
            Err(SolveError::AlgorithmRejected(message))
        }
        Ok(Err(AlgorithmError::Fault(cause))) => {
            tracing::error!(%cause, "solver failed");
            Err(SolveError::SolverFault(cause))
        }
        Err(payload) => {
            let cause = panic_message(payload.as_ref());
            tracing::error!(%cause, "solver panicked");
            Err(SolveError::SolverFault(cause))
        }
    }
}

/// Extracts the text of a panic payload, if it carried any.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
