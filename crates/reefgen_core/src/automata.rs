//! Cellular automata that sculpt the initial noise into a reef.
//!
//! Each rule maps `(current category, tally)` to the next category and is
//! total: every branch falls through to "unchanged". Artefact cells are never
//! touched. Passes always read a frozen snapshot and write a separate buffer.
//!
//! Coral births pick their colour from a per-cell stream keyed by the pass
//! and the cell position, so no cell's draw depends on which cells were
//! visited before it. A pass gives the same grid in any traversal order,
//! sequential or row-parallel.

use crate::config::AutomatonTuning;
use crate::error::{GenError, Result};
use crate::grid::ReefGrid;
use crate::neighborhood::{analyze_at, Tally};
use crate::rng::{roll_percent, ReefSeed};
use rand::Rng;
use reefgen_data::Category;

/// Parameters every rule evaluation reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleContext {
    pub tuning: AutomatonTuning,
    pub yellow_coral_percent: u8,
}

/// Coral growth: water next to dense coral sprouts coral, starved or
/// overcrowded coral dies back to water.
pub fn grow_coral<R: Rng + ?Sized>(
    current: Category,
    tally: &Tally,
    ctx: &RuleContext,
    rng: &mut R,
) -> Category {
    let t = &ctx.tuning;
    let near = tally.coral_pressure3();
    let far = tally.coral_pressure5();
    match current {
        Category::Water if near >= t.coral_birth_pressure && far <= t.coral_birth_ceiling => {
            if roll_percent(rng, ctx.yellow_coral_percent) {
                Category::YellowCoral
            } else {
                Category::RedCoral
            }
        }
        c if c.is_coral() && (near <= t.coral_starve_pressure || far > t.coral_crowd_ceiling) => {
            Category::Water
        }
        other => other,
    }
}

/// Water-space growth: carves passages by flooding cells surrounded by water.
pub fn grow_water_space(current: Category, tally: &Tally, tuning: &AutomatonTuning) -> Category {
    match current {
        Category::Water | Category::Artefact => current,
        _ if tally.moore3(Category::Water) >= tuning.water_moore3_threshold
            || tally.moore5(Category::Water) >= tuning.water_moore5_threshold =>
        {
            Category::Water
        }
        other => other,
    }
}

/// Seaweed growth: crowded seaweed dies back, water beside seaweed beds
/// becomes seaweed.
pub fn grow_seaweed(current: Category, tally: &Tally, tuning: &AutomatonTuning) -> Category {
    match current {
        Category::Seaweed if tally.von_neumann4(Category::Seaweed) >= tuning.seaweed_dieback => {
            Category::Water
        }
        Category::Water if tally.moore3(Category::Seaweed) >= tuning.seaweed_spread => {
            Category::Seaweed
        }
        other => other,
    }
}

/// The three automata, in the order the pipeline applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Automaton {
    Coral,
    WaterSpace,
    Seaweed,
}

/// Cell visiting order for a sequential sweep. Every order yields the same
/// grid; column-major is the order the pipeline uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    /// `x` outer, `y` inner.
    #[default]
    ColumnMajor,
    RowMajor,
}

impl Automaton {
    pub const ORDER: [Automaton; 3] = [Automaton::Coral, Automaton::WaterSpace, Automaton::Seaweed];

    pub const fn name(self) -> &'static str {
        match self {
            Automaton::Coral => "coral",
            Automaton::WaterSpace => "water-space",
            Automaton::Seaweed => "seaweed",
        }
    }

    /// Only coral growth consumes randomness.
    pub const fn uses_rng(self) -> bool {
        matches!(self, Automaton::Coral)
    }

    /// Key of one pass. Coral takes a single draw from the stage stream per
    /// pass; the other rules draw nothing.
    pub fn pass_seed<R: Rng + ?Sized>(self, rng: &mut R) -> ReefSeed {
        if self.uses_rng() {
            ReefSeed::new(rng.gen())
        } else {
            ReefSeed::new(0)
        }
    }

    /// Next category of `(x, y)` given a frozen snapshot and the pass key.
    pub fn next_category(
        self,
        snapshot: &ReefGrid,
        x: i32,
        y: i32,
        ctx: &RuleContext,
        pass: ReefSeed,
    ) -> Result<Category> {
        if !snapshot.in_bounds(x, y) {
            return Err(GenError::out_of_bounds(
                x,
                y,
                snapshot.width(),
                snapshot.height(),
            ));
        }
        Ok(self.evaluate_at(snapshot, x as u16, y as u16, ctx, pass))
    }

    fn evaluate_at(
        self,
        snapshot: &ReefGrid,
        x: u16,
        y: u16,
        ctx: &RuleContext,
        pass: ReefSeed,
    ) -> Category {
        let current = snapshot.cell(x, y);
        if current.is_artefact() {
            return current;
        }
        let tally = analyze_at(snapshot, x, y);
        match self {
            Automaton::Coral => {
                let mut rng = pass.cell_stream(x, y);
                grow_coral(current, &tally, ctx, &mut rng)
            }
            Automaton::WaterSpace => grow_water_space(current, &tally, &ctx.tuning),
            Automaton::Seaweed => grow_seaweed(current, &tally, &ctx.tuning),
        }
    }
}

fn sweep(
    automaton: Automaton,
    snapshot: &ReefGrid,
    out: &mut ReefGrid,
    ctx: &RuleContext,
    pass: ReefSeed,
    traversal: Traversal,
) {
    let (w, h) = (snapshot.width(), snapshot.height());
    match traversal {
        Traversal::ColumnMajor => {
            for x in 0..w {
                for y in 0..h {
                    out.put(x, y, automaton.evaluate_at(snapshot, x, y, ctx, pass));
                }
            }
        }
        Traversal::RowMajor => {
            for y in 0..h {
                for x in 0..w {
                    out.put(x, y, automaton.evaluate_at(snapshot, x, y, ctx, pass));
                }
            }
        }
    }
}

#[cfg(feature = "parallel")]
fn sweep_rows_parallel(
    automaton: Automaton,
    snapshot: &ReefGrid,
    out: &mut ReefGrid,
    ctx: &RuleContext,
    pass: ReefSeed,
) {
    use rayon::prelude::*;

    let w = snapshot.width() as usize;
    out.cells_mut()
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = automaton.evaluate_at(snapshot, x as u16, y as u16, ctx, pass);
            }
        });
}

/// One full pass over `snapshot`, returned as a new grid.
pub fn apply_pass<R: Rng + ?Sized>(
    automaton: Automaton,
    snapshot: &ReefGrid,
    ctx: &RuleContext,
    rng: &mut R,
    traversal: Traversal,
) -> ReefGrid {
    let pass = automaton.pass_seed(rng);
    let mut out = snapshot.clone();
    sweep(automaton, snapshot, &mut out, ctx, pass, traversal);
    out
}

/// Runs `iterations` double-buffered passes, swapping `grid` and `scratch`
/// after each full sweep. `scratch` is reshaped if it does not match.
pub fn run_passes<R: Rng + ?Sized>(
    automaton: Automaton,
    grid: &mut ReefGrid,
    scratch: &mut ReefGrid,
    iterations: usize,
    ctx: &RuleContext,
    rng: &mut R,
) {
    if !scratch.same_shape(grid) {
        *scratch = grid.clone();
    }
    for pass_index in 0..iterations {
        let pass = automaton.pass_seed(rng);
        #[cfg(feature = "parallel")]
        sweep_rows_parallel(automaton, grid, scratch, ctx, pass);
        #[cfg(not(feature = "parallel"))]
        sweep(automaton, grid, scratch, ctx, pass, Traversal::ColumnMajor);

        tracing::debug!(
            automaton = automaton.name(),
            pass = pass_index,
            changed = grid
                .cells()
                .iter()
                .zip(scratch.cells())
                .filter(|(a, b)| a != b)
                .count(),
            "pass complete"
        );
        std::mem::swap(grid, scratch);
    }
}
