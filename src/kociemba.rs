//! Two-phase solving algorithm backed by the `kewb` crate.
//!
//! Pruning tables take a few seconds to generate, so they are built on the
//! first request that actually reaches the search. Sticker layouts that do
//! not describe a reachable cube are reported as rejections without touching
//! the tables.

use std::time::Instant;

use kewb::{CubieCube, DataTable, FaceCube, Solver};

use crate::facelet::{Face, CELLS_PER_FACE};
use crate::solver::{AlgorithmError, SolvingAlgorithm};

/// Search limits for the two-phase solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Longest solution, in moves, the search will accept.
    pub max_length: u8,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { max_length: 23 }
    }
}

/// Kociemba two-phase solver.
pub struct TwoPhaseSolver {
    config: SolverConfig,
    table: Option<DataTable>,
}

impl TwoPhaseSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            table: None,
        }
    }

    pub fn config(&self) -> SolverConfig {
        self.config
    }

    /// Returns the pruning tables, generating them on first use.
    fn table(&mut self) -> &DataTable {
        self.table.get_or_insert_with(|| {
            let started = Instant::now();
            let table = DataTable::default();
            tracing::info!(elapsed_ms = started.elapsed().as_millis() as u64, "built pruning tables");
            table
        })
    }
}

impl Default for TwoPhaseSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

/// Converts `facelets` into a cubie state, refusing anything that is not a
/// reachable cube.
///
/// `kewb` leaves a cubie at its home position when no sticker pair matches
/// it, so the state is turned back into facelets and compared with the
/// input. Any missing, duplicated, twisted or flipped piece shows up as a
/// difference.
fn cubie_state(facelets: &str) -> Result<CubieCube, AlgorithmError> {
    let rejected = |reason: &str| AlgorithmError::Rejected(format!("Error: {reason}"));

    if Face::ALL.iter().any(|face| {
        facelets.chars().filter(|&symbol| symbol == face.letter()).count() != CELLS_PER_FACE
    }) {
        return Err(rejected("there are not exactly nine facelets of each color"));
    }

    let face_cube = FaceCube::try_from(facelets).map_err(|err| rejected(&err.to_string()))?;
    let state = CubieCube::try_from(&face_cube).map_err(|err| rejected(&err.to_string()))?;
    let rebuilt = FaceCube::try_from(&state)
        .map_err(|_| rejected("some corners or edges are twisted, flipped or swapped"))?;

    if rebuilt.to_string() != facelets {
        return Err(rejected("not every corner and edge appears exactly once"));
    }
    Ok(state)
}

impl SolvingAlgorithm for TwoPhaseSolver {
    fn solve(&mut self, facelets: &str) -> Result<String, AlgorithmError> {
        let state = cubie_state(facelets)?;

        let max_length = self.config.max_length;
        let started = Instant::now();
        let mut search = Solver::new(self.table(), max_length, None);

        match search.solve(state) {
            Some(solution) => {
                tracing::info!(
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    moves = solution.len(),
                    "two-phase search finished"
                );
                Ok(solution.to_string())
            }
            None => Err(AlgorithmError::Fault(format!(
                "no solution of at most {max_length} moves found"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode;
    use crate::facelet::FaceletModel;
    use crate::solver::{invoke, SolveError};
    use kewb::Move;

    const SOLVED: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

    fn parse_moves(moves: &str) -> Vec<Move> {
        moves
            .split_whitespace()
            .map(|token| token.parse::<Move>().unwrap())
            .collect()
    }

    fn swapped(facelets: &str, a: usize, b: usize) -> String {
        let mut chars: Vec<char> = facelets.chars().collect();
        chars.swap(a, b);
        chars.into_iter().collect()
    }

    fn assert_rejected(solver: &mut TwoPhaseSolver, facelets: &str) {
        let result = invoke(solver, facelets);
        assert!(
            matches!(result, Err(SolveError::AlgorithmRejected(_))),
            "unexpected result for {facelets}: {result:?}"
        );
    }

    #[test]
    fn test_default_config() {
        let solver = TwoPhaseSolver::default();
        assert_eq!(solver.config(), SolverConfig { max_length: 23 });
    }

    #[test]
    fn test_startup_cube_is_rejected_without_building_tables() {
        let mut solver = TwoPhaseSolver::default();
        assert_rejected(&mut solver, &encode(&FaceletModel::new()));
        assert!(solver.table.is_none());
    }

    #[test]
    fn test_wrong_color_counts_are_rejected() {
        let mut solver = TwoPhaseSolver::default();

        let all_up = "U".repeat(54);
        assert_rejected(&mut solver, &all_up);

        // one R sticker repainted as U: 10 U, 8 R
        let mut extra_up = SOLVED.to_string();
        extra_up.replace_range(9..10, "U");
        assert_rejected(&mut solver, &extra_up);

        assert!(solver.table.is_none());
    }

    #[test]
    fn test_duplicate_piece_with_balanced_counts_is_rejected() {
        // U sticker of UF traded with R sticker of UR: nine of each color,
        // but UR now reads U/U and FR appears twice
        let facelets = swapped(SOLVED, 7, 10);
        assert_eq!(facelets.matches('U').count(), 9);

        let mut solver = TwoPhaseSolver::default();
        assert_rejected(&mut solver, &facelets);
        assert!(solver.table.is_none());
    }

    #[test]
    fn test_flipped_edge_is_rejected() {
        // both stickers of UF exchanged
        let facelets = swapped(SOLVED, 7, 19);
        let mut solver = TwoPhaseSolver::default();
        assert_rejected(&mut solver, &facelets);
        assert!(solver.table.is_none());
    }

    #[test]
    fn test_solved_cube_needs_no_moves() {
        let mut solver = TwoPhaseSolver::default();
        assert_eq!(invoke(&mut solver, SOLVED), Ok(String::new()));
    }

    #[test]
    fn test_scrambled_cube_is_solved() {
        let scramble = parse_moves("R U2 F' L D B2 R' U' F2 D' L2 B");
        let state = CubieCube::from(&scramble);
        let facelets = FaceCube::try_from(&state).unwrap().to_string();
        assert_ne!(facelets, SOLVED);

        let mut solver = TwoPhaseSolver::default();
        let moves = invoke(&mut solver, &facelets).unwrap();

        let solution = parse_moves(&moves);
        assert!(!solution.is_empty());
        assert!(solution.len() <= 23, "solution too long: {moves}");
        assert_eq!(state.apply_moves(&solution), CubieCube::default());

        // a second request reuses the cached tables
        let again = invoke(&mut solver, &facelets).unwrap();
        assert_eq!(state.apply_moves(&parse_moves(&again)), CubieCube::default());
    }

    #[test]
    fn test_zero_length_limit_reports_fault_for_scrambled_cube() {
        let state = CubieCube::from(&parse_moves("R U"));
        let facelets = FaceCube::try_from(&state).unwrap().to_string();

        let mut solver = TwoPhaseSolver::new(SolverConfig { max_length: 0 });
        let result = invoke(&mut solver, &facelets);
        assert!(
            matches!(result, Err(SolveError::SolverFault(_))),
            "unexpected result: {result:?}"
        );
    }
}
