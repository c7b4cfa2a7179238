//! Artefact placement and hand-over between the reef and its explorers.

use crate::error::{GenError, Result};
use crate::grid::ReefGrid;
use rand::Rng;
use reefgen_data::Category;

/// Marks `count` distinct, not-yet-marked cells as [`Category::Artefact`],
/// overwriting whatever terrain was there. Returns the positions in the order
/// they were placed.
///
/// # Termination
///
/// Candidate cells are drawn uniformly and redrawn when already marked; there
/// is no retry cap. Requesting more artefacts than the grid has unmarked cells
/// never returns, and counts close to that limit get slow. Callers own keeping
/// `count` well below `width * height`.
pub fn place_artefacts<R: Rng + ?Sized>(
    grid: &mut ReefGrid,
    count: usize,
    rng: &mut R,
) -> Vec<(u16, u16)> {
    let mut placed = Vec::with_capacity(count);
    let (w, h) = (grid.width(), grid.height());
    while placed.len() < count {
        let x = rng.gen_range(0..w);
        let y = rng.gen_range(0..h);
        if grid.cell(x, y).is_artefact() {
            continue;
        }
        grid.put(x, y, Category::Artefact);
        placed.push((x, y));
    }
    placed
}

pub fn count_artefacts(grid: &ReefGrid) -> usize {
    grid.count(Category::Artefact)
}

/// Picks up the first artefact in the 3x3 window around `(x, y)` (focus
/// included, column-major order), leaving open water behind. At most one
/// artefact moves per call; a crowded window takes several calls to clear.
pub fn pick_up_artefact(grid: &mut ReefGrid, x: i32, y: i32) -> Result<Option<(u16, u16)>> {
    if !grid.in_bounds(x, y) {
        return Err(GenError::out_of_bounds(x, y, grid.width(), grid.height()));
    }
    for i in x - 1..=x + 1 {
        for j in y - 1..=y + 1 {
            if !grid.in_bounds(i, j) {
                continue;
            }
            let (ix, jy) = (i as u16, j as u16);
            if grid.cell(ix, jy).is_artefact() {
                grid.put(ix, jy, Category::Water);
                tracing::debug!("artefact picked up at ({}, {})", ix, jy);
                return Ok(Some((ix, jy)));
            }
        }
    }
    Ok(None)
}

/// Sets an artefact down on `(x, y)`.
pub fn drop_artefact(grid: &mut ReefGrid, x: i32, y: i32) -> Result<()> {
    grid.set(x, y, Category::Artefact)
}
