//! The recursive backtracking engine.

use kudoku_core::{Digit, Grid, Position};

use crate::step::{NoopObserver, SearchStep, StepAction, StepObserver};

/// The permutation of 1-9 attempted at a cell.
///
/// This is the seam between solve mode and fill mode: solving uses the
/// fixed [`Ascending`] order, while the generator supplies an order that
/// reshuffles the digits at every cell. The search calls
/// [`CandidateOrder::order`] exactly once per visited cell.
pub trait CandidateOrder {
    /// Returns the candidate digits to attempt at `position`, in order.
    fn order(&mut self, position: Position) -> [Digit; 9];
}

/// The ascending candidate order `1..=9` used for solving.
///
/// With a fixed candidate order and the row-major empty-cell scan, solving
/// is fully deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ascending;

impl CandidateOrder for Ascending {
    fn order(&mut self, _position: Position) -> [Digit; 9] {
        Digit::ALL
    }
}

/// Recursive backtracking search over a [`Grid`].
///
/// The engine is plain depth-first search over partial assignments: no
/// constraint propagation, no remaining-values ordering, no iteration
/// limit. [`Grid::is_valid`] prunes exactly the placements that violate a
/// hard constraint, and every candidate at a cell is explored before
/// failure propagates upward, so the search is exhaustive. Worst-case
/// time is exponential in the number of empty cells; recursion depth is
/// bounded by the 81 cells.
///
/// The grid is borrowed mutably for the duration of one call and left
/// solved on success; on failure it is restored to the state it was
/// passed in. The engine holds no state of its own and never retains a
/// reference to the grid.
///
/// `false` is the only failure outcome and means "no completion exists
/// from this grid". An inconsistent set of clues is not detected up
/// front; callers that want that run [`Grid::validate`] before solving.
///
/// # Examples
///
/// ```
/// use kudoku_core::Grid;
/// use kudoku_solver::BacktrackingSolver;
///
/// // Ascending search fills an empty grid with the trivially first
/// // valid completion.
/// let mut grid = Grid::new();
/// assert!(BacktrackingSolver::new().solve(&mut grid));
/// assert!(grid.is_full());
/// assert_eq!(grid.validate(), Ok(()));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Solves `grid` in place with ascending candidate order.
    ///
    /// Returns `true` and leaves the grid fully filled if a completion
    /// exists; returns `false` and leaves the grid untouched otherwise.
    /// A grid with no empty cell is already complete and returns `true`
    /// immediately.
    pub fn solve(&self, grid: &mut Grid) -> bool {
        self.search(grid, &mut Ascending, &mut NoopObserver)
    }

    /// Like [`BacktrackingSolver::solve`], reporting every step to `observer`.
    pub fn solve_with_observer(&self, grid: &mut Grid, observer: &mut dyn StepObserver) -> bool {
        self.search(grid, &mut Ascending, observer)
    }

    /// Runs the search with an explicit candidate order and observer.
    ///
    /// This is the single engine behind both solve mode and fill mode:
    ///
    /// 1. Find the first empty cell in row-major order; if none exists the
    ///    grid is complete and the search succeeds.
    /// 2. For each candidate digit in `order` that passes
    ///    [`Grid::is_valid`]: place it, notify [`StepAction::Trying`], and
    ///    recurse. Success propagates immediately, leaving the placement
    ///    in the grid. Otherwise the cell is cleared again and
    ///    [`StepAction::Backtracking`] is reported before the next
    ///    candidate.
    /// 3. If no candidate succeeds the search fails, telling the parent
    ///    level to move on to its own next candidate.
    pub fn search(
        &self,
        grid: &mut Grid,
        order: &mut dyn CandidateOrder,
        observer: &mut dyn StepObserver,
    ) -> bool {
        let Some(position) = grid.first_empty() else {
            return true;
        };

        for digit in order.order(position) {
            if !grid.is_valid(position, digit) {
                continue;
            }

            grid.set(position, digit);
            observer.on_step(SearchStep {
                position,
                digit,
                action: StepAction::Trying,
            });

            if self.search(grid, order, observer) {
                return true;
            }

            grid.clear(position);
            observer.on_step(SearchStep {
                position,
                digit,
                action: StepAction::Backtracking,
            });
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORKED_EXAMPLE: &str = "\
        53__7____\
        6__195___\
        _98____6_\
        8___6___3\
        4__8_3__1\
        7___2___6\
        _6____28_\
        ___419__5\
        ____8__79";

    const WORKED_SOLUTION: &str = "\
        534678912\
        672195348\
        198342567\
        859761423\
        426853791\
        713924856\
        961537284\
        287419635\
        345286179";

    #[test]
    fn test_solves_worked_example() {
        let mut grid: Grid = WORKED_EXAMPLE.parse().unwrap();
        let solver = BacktrackingSolver::new();

        assert!(solver.solve(&mut grid));
        assert_eq!(grid, WORKED_SOLUTION.parse().unwrap());
        assert_eq!(grid.get(Position::new(0, 2)), Some(Digit::D4));
        assert_eq!(grid.get(Position::new(0, 3)), Some(Digit::D6));
    }

    #[test]
    fn test_solved_grid_returns_true_with_no_steps() {
        let mut grid: Grid = WORKED_SOLUTION.parse().unwrap();
        let mut steps = Vec::new();
        let solved = BacktrackingSolver::new()
            .solve_with_observer(&mut grid, &mut |step: SearchStep| steps.push(step));

        assert!(solved);
        assert!(steps.is_empty());
        assert_eq!(grid, WORKED_SOLUTION.parse().unwrap());
    }

    #[test]
    fn test_duplicate_in_row_is_unsolvable() {
        // Duplicate the 6 of (0, 3) at (0, 0), then reopen (1, 0), whose
        // only row candidate is that 6. The search must fail, not panic.
        let mut grid: Grid = WORKED_SOLUTION.parse().unwrap();
        grid.set(Position::new(0, 0), Digit::D6);
        grid.clear(Position::new(1, 0));
        assert!(grid.validate().is_err());

        assert!(!BacktrackingSolver::new().solve(&mut grid));
        // Failure restores the grid to its input state.
        assert_eq!(grid.get(Position::new(1, 0)), None);
    }

    #[test]
    fn test_first_step_is_trying_at_first_empty() {
        let mut grid: Grid = WORKED_EXAMPLE.parse().unwrap();
        let first_empty = grid.first_empty().unwrap();
        let mut steps = Vec::new();
        assert!(
            BacktrackingSolver::new()
                .solve_with_observer(&mut grid, &mut |step: SearchStep| steps.push(step))
        );

        let first = steps[0];
        assert_eq!(first.action, StepAction::Trying);
        assert_eq!(first.position, first_empty);
    }

    #[test]
    fn test_step_counts_balance() {
        let mut grid: Grid = WORKED_EXAMPLE.parse().unwrap();
        let empty_before = 81 - grid.filled_count();
        let mut steps = Vec::new();
        assert!(
            BacktrackingSolver::new()
                .solve_with_observer(&mut grid, &mut |step: SearchStep| steps.push(step))
        );

        let trying = steps
            .iter()
            .filter(|step| step.action == StepAction::Trying)
            .count();
        let backtracking = steps.len() - trying;
        // Every placement that survived is a Trying without a matching
        // Backtracking, one per initially empty cell.
        assert_eq!(trying - backtracking, empty_before);
    }

    #[test]
    fn test_custom_candidate_order() {
        struct Descending;

        impl CandidateOrder for Descending {
            fn order(&mut self, _position: Position) -> [Digit; 9] {
                let mut digits = Digit::ALL;
                digits.reverse();
                digits
            }
        }

        let mut grid = Grid::new();
        let solved =
            BacktrackingSolver::new().search(&mut grid, &mut Descending, &mut NoopObserver);

        assert!(solved);
        assert!(grid.is_full());
        assert_eq!(grid.validate(), Ok(()));
        // Descending order starts the first row with 9.
        assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D9));
    }
}
