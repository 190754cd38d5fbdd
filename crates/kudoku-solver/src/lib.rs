//! Backtracking search over a kudoku grid.
//!
//! The crate has one engine, [`BacktrackingSolver`], used two ways:
//!
//! - **solve mode**: candidates tried in ascending order ([`Ascending`]),
//!   reproducing the assignment consistent with the pre-filled clues,
//! - **fill mode**: the generator supplies a shuffled [`CandidateOrder`]
//!   to grow a full random grid from an empty one.
//!
//! Every trial placement and every undo can be reported to a
//! [`StepObserver`], which is how a front end animates search progress.
//!
//! # Examples
//!
//! ```
//! use kudoku_core::{Digit, Grid, Position};
//! use kudoku_solver::BacktrackingSolver;
//!
//! let mut grid: Grid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! let solver = BacktrackingSolver::new();
//! assert!(solver.solve(&mut grid));
//! assert_eq!(grid[Position::new(0, 2)], Some(Digit::D4));
//! assert_eq!(grid[Position::new(0, 3)], Some(Digit::D6));
//! # Ok::<(), kudoku_core::ParseGridError>(())
//! ```

pub mod backtracking;
pub mod step;

pub use self::{
    backtracking::{Ascending, BacktrackingSolver, CandidateOrder},
    step::{NoopObserver, SearchStep, StepAction, StepObserver},
};
