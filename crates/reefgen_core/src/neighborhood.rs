//! Windowed category tallies around a focus cell.
//!
//! A single sweep over the 5x5 window fills three nested tallies:
//! von Neumann (4) within Moore-3 within Moore-5. The focus cell,
//! out-of-range offsets and artefact cells are never counted.

use crate::error::{GenError, Result};
use crate::grid::ReefGrid;
use reefgen_data::{Category, CATEGORY_COUNT};
use std::fmt;

/// Per-category counts for one focus cell. Produced fresh on every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    /// 3x3 window, focus excluded.
    pub moore3: [u8; CATEGORY_COUNT],
    /// 5x5 window, focus excluded.
    pub moore5: [u8; CATEGORY_COUNT],
    /// The four orthogonal neighbours.
    pub von_neumann4: [u8; CATEGORY_COUNT],
}

impl Tally {
    #[inline]
    pub fn moore3(&self, category: Category) -> u8 {
        self.moore3[category.index()]
    }

    #[inline]
    pub fn moore5(&self, category: Category) -> u8 {
        self.moore5[category.index()]
    }

    #[inline]
    pub fn von_neumann4(&self, category: Category) -> u8 {
        self.von_neumann4[category.index()]
    }

    /// Yellow plus red coral in the 3x3 window.
    #[inline]
    pub fn coral_pressure3(&self) -> u8 {
        self.moore3(Category::YellowCoral) + self.moore3(Category::RedCoral)
    }

    /// Yellow plus red coral in the 5x5 window.
    #[inline]
    pub fn coral_pressure5(&self) -> u8 {
        self.moore5(Category::YellowCoral) + self.moore5(Category::RedCoral)
    }

    /// Number of neighbours that were counted in the 5x5 window.
    pub fn counted5(&self) -> u32 {
        self.moore5.iter().map(|&n| u32::from(n)).sum()
    }

    pub fn counted3(&self) -> u32 {
        self.moore3.iter().map(|&n| u32::from(n)).sum()
    }
}

fn write_counts(f: &mut fmt::Formatter<'_>, label: &str, counts: &[u8]) -> fmt::Result {
    write!(f, "{label} |")?;
    for n in counts {
        write!(f, "{n}|")?;
    }
    Ok(())
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_counts(f, "moore3", &self.moore3)?;
        f.write_str(", ")?;
        write_counts(f, "moore5", &self.moore5)?;
        f.write_str(", ")?;
        write_counts(f, "von_neumann4", &self.von_neumann4)
    }
}

/// Tallies the neighbourhood of `(x, y)`, rejecting out-of-range focus cells.
pub fn analyze(grid: &ReefGrid, x: i32, y: i32) -> Result<Tally> {
    if !grid.in_bounds(x, y) {
        return Err(GenError::out_of_bounds(x, y, grid.width(), grid.height()));
    }
    Ok(analyze_at(grid, x as u16, y as u16))
}

/// In-range fast path used by the automaton passes.
pub(crate) fn analyze_at(grid: &ReefGrid, x: u16, y: u16) -> Tally {
    let mut tally = Tally::default();
    let (cx, cy) = (i32::from(x), i32::from(y));
    let (w, h) = (i32::from(grid.width()), i32::from(grid.height()));

    for dx in -2..=2 {
        let nx = cx + dx;
        if nx < 0 || nx >= w {
            continue;
        }
        for dy in -2..=2 {
            let ny = cy + dy;
            if (dx == 0 && dy == 0) || ny < 0 || ny >= h {
                continue;
            }
            let category = grid.cell(nx as u16, ny as u16);
            if category.is_artefact() {
                continue;
            }
            let slot = category.index();
            tally.moore5[slot] += 1;
            if dx.abs() <= 1 && dy.abs() <= 1 {
                tally.moore3[slot] += 1;
                if dx == 0 || dy == 0 {
                    tally.von_neumann4[slot] += 1;
                }
            }
        }
    }
    tally
}

impl ReefGrid {
    /// See [`analyze`].
    pub fn analyze(&self, x: i32, y: i32) -> Result<Tally> {
        analyze(self, x, y)
    }
}
