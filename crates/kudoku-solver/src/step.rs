//! Search step reporting.
//!
//! The search reports each trial placement and each undo through a
//! [`StepObserver`]. The observer is a capability parameter, not a
//! subtype relationship: the engine always calls one, and callers that
//! do not care pass [`NoopObserver`] (which is what the convenience
//! wrappers do), so the search never branches on "is an observer
//! present".

use std::fmt::{self, Display};

use kudoku_core::{Digit, Position};

/// What the search did at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepAction {
    /// A candidate digit was written into the cell.
    Trying,
    /// The candidate led to a dead end and was cleared again.
    Backtracking,
}

impl Display for StepAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Trying => "Trying",
            Self::Backtracking => "Backtracking",
        };
        f.write_str(label)
    }
}

/// One trial or backtrack step of the search.
///
/// Steps are ephemeral: one exists only for the duration of a single
/// [`StepObserver::on_step`] call and is never persisted by the engine.
///
/// # Examples
///
/// ```
/// use kudoku_core::{Digit, Position};
/// use kudoku_solver::{SearchStep, StepAction};
///
/// let step = SearchStep {
///     position: Position::new(0, 2),
///     digit: Digit::D5,
///     action: StepAction::Trying,
/// };
/// assert_eq!(step.to_string(), "Trying number 5 at (0, 2)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStep {
    /// The cell the search acted on.
    pub position: Position,
    /// The candidate digit involved.
    pub digit: Digit,
    /// Whether the digit was placed or cleared.
    pub action: StepAction,
}

impl Display for SearchStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} number {} at {}", self.action, self.digit, self.position)
    }
}

/// Receives search steps synchronously, in the order the search makes them.
///
/// The callback is invoked in-line on the searching thread, once per trial
/// and once per backtrack. Observers must treat the grid they are shown as
/// read-only; the search relies on its exact state after the callback
/// returns.
///
/// Any `FnMut(SearchStep)` closure is an observer:
///
/// ```
/// use kudoku_core::Grid;
/// use kudoku_solver::{BacktrackingSolver, SearchStep};
///
/// let mut steps = Vec::new();
/// let mut grid = Grid::new();
/// let solved = BacktrackingSolver::new()
///     .solve_with_observer(&mut grid, &mut |step: SearchStep| steps.push(step));
/// assert!(solved);
/// assert!(!steps.is_empty());
/// ```
pub trait StepObserver {
    /// Called once for every trial and every backtrack.
    fn on_step(&mut self, step: SearchStep);
}

impl<F> StepObserver for F
where
    F: FnMut(SearchStep),
{
    fn on_step(&mut self, step: SearchStep) {
        self(step);
    }
}

/// An observer that ignores every step.
///
/// Passing this is behaviorally identical to observing nothing; the search
/// outcome never depends on the observer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn on_step(&mut self, _step: SearchStep) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_display() {
        let step = SearchStep {
            position: Position::new(4, 7),
            digit: Digit::D9,
            action: StepAction::Backtracking,
        };
        assert_eq!(step.to_string(), "Backtracking number 9 at (4, 7)");
    }

    #[test]
    fn test_closure_is_observer() {
        let mut seen = 0;
        let mut observer = |_step: SearchStep| seen += 1;
        observer.on_step(SearchStep {
            position: Position::new(0, 0),
            digit: Digit::D1,
            action: StepAction::Trying,
        });
        drop(observer);
        assert_eq!(seen, 1);
    }
}
