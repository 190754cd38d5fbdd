//! Puzzle generation: grid filling and cell removal.

use kudoku_core::{Difficulty, Digit, Grid, Position};
use kudoku_solver::{BacktrackingSolver, CandidateOrder, NoopObserver};
use rand::{Rng, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

use crate::seed::PuzzleSeed;

/// A generated puzzle together with its answer key and seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle grid, with `difficulty.remove_count()` cells cleared.
    pub problem: Grid,
    /// The fully solved grid the problem was derived from.
    ///
    /// Produced once by the fill phase and never mutated afterward. The
    /// problem matches it exactly on every cell that was not cleared.
    pub solution: Grid,
    /// The difficulty the puzzle was generated for.
    pub difficulty: Difficulty,
    /// The seed that reproduces this exact puzzle.
    pub seed: PuzzleSeed,
}

/// A candidate order that reshuffles the digits at every visited cell.
///
/// This is what makes fill mode random: the search still scans cells in
/// row-major order, but each cell tries the digits in a fresh random
/// permutation.
struct Shuffled<'r, R> {
    rng: &'r mut R,
}

impl<R> CandidateOrder for Shuffled<'_, R>
where
    R: Rng,
{
    fn order(&mut self, _position: Position) -> [Digit; 9] {
        let mut digits = Digit::ALL;
        digits.shuffle(self.rng);
        digits
    }
}

/// Generates puzzles by filling a grid and removing cells.
///
/// The generator borrows a [`BacktrackingSolver`] and drives it in fill
/// mode; generation runs to completion on the calling thread.
///
/// # Examples
///
/// ```
/// use kudoku_core::Difficulty;
/// use kudoku_generator::{PuzzleGenerator, PuzzleSeed};
/// use kudoku_solver::BacktrackingSolver;
///
/// let solver = BacktrackingSolver::new();
/// let generator = PuzzleGenerator::new(&solver);
///
/// // The same seed reproduces the same puzzle.
/// let seed = PuzzleSeed::from_bytes([7; 32]);
/// let first = generator.generate_with_seed(Difficulty::Hard, seed);
/// let second = generator.generate_with_seed(Difficulty::Hard, seed);
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator<'a> {
    solver: &'a BacktrackingSolver,
}

impl<'a> PuzzleGenerator<'a> {
    /// Creates a generator backed by the given solver.
    #[must_use]
    pub const fn new(solver: &'a BacktrackingSolver) -> Self {
        Self { solver }
    }

    /// Generates a puzzle for `difficulty` from a fresh random seed.
    ///
    /// The drawn seed is recorded in the returned [`GeneratedPuzzle`].
    #[must_use]
    pub fn generate(&self, difficulty: Difficulty) -> GeneratedPuzzle {
        self.generate_with_seed(difficulty, PuzzleSeed::random())
    }

    /// Generates the puzzle identified by `seed` for `difficulty`.
    ///
    /// The solved grid is produced by running the search over an empty
    /// grid with shuffled candidate orders, then
    /// `difficulty.remove_count()` cells (clamped to the 81 available)
    /// are cleared at uniformly random distinct coordinates.
    ///
    /// # Panics
    ///
    /// Panics if the fill search fails, which cannot happen for an empty
    /// grid under standard sudoku constraints; a panic here indicates a
    /// defect in the constraint checker.
    #[must_use]
    pub fn generate_with_seed(&self, difficulty: Difficulty, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = Pcg64::from_seed(seed.into_bytes());

        let mut solution = Grid::new();
        let mut order = Shuffled { rng: &mut rng };
        let filled = self
            .solver
            .search(&mut solution, &mut order, &mut NoopObserver);
        assert!(filled, "an empty grid always has a valid completion");

        let mut problem = solution.clone();
        let remove_count = difficulty.remove_count().min(81);
        punch_holes(&mut problem, remove_count, &mut rng);

        GeneratedPuzzle {
            problem,
            solution,
            difficulty,
            seed,
        }
    }
}

/// Clears `count` distinct uniformly random cells of `grid`.
///
/// The coordinate list is shuffled once and popped from the end; a popped
/// coordinate that is already empty does not count toward `count`.
fn punch_holes<R>(grid: &mut Grid, count: usize, rng: &mut R)
where
    R: Rng,
{
    let mut cells = Position::ALL.to_vec();
    cells.shuffle(rng);

    let mut removed = 0;
    while removed < count {
        let Some(pos) = cells.pop() else {
            break;
        };
        if grid.get(pos).is_some() {
            grid.clear(pos);
            removed += 1;
        }
    }
}
