//! Read-only questions the reef's consumers ask about a finished grid.

use crate::error::Result;
use crate::grid::ReefGrid;
use crate::neighborhood::analyze_at;
use reefgen_data::Category;

/// 5x5 water count of a cell with nothing but water around it.
pub const FULLY_OPEN_MOORE5: u8 = 24;
/// 3x3 water count of a cell with nothing but water around it.
pub const FULLY_OPEN_MOORE3: u8 = 8;
pub const EXPOSED_MOORE5: u8 = 12;
pub const EXPOSED_MOORE3: u8 = 5;

pub trait FootingLogic {
    /// Swimming speed on this footing with empty hands.
    fn base_speed(&self) -> f32;
    /// Speed lost per carried artefact.
    fn load_penalty(&self) -> f32;

    fn traversal_speed(&self, carried: u32) -> f32 {
        (self.base_speed() - self.load_penalty() * carried as f32).max(0.0)
    }
}

impl FootingLogic for Category {
    fn base_speed(&self) -> f32 {
        match self {
            Category::Water | Category::Artefact => 30.0,
            Category::Seaweed => 20.0,
            Category::YellowCoral => 10.0,
            Category::RedCoral => 1.0,
        }
    }

    fn load_penalty(&self) -> f32 {
        match self {
            Category::Water | Category::Artefact => 3.0,
            Category::Seaweed => 2.0,
            Category::YellowCoral => 1.0,
            Category::RedCoral => 0.0,
        }
    }
}

/// Finds a spawn point in open water.
///
/// Scans in canonical order and returns the first water cell whose whole 5x5
/// window is water. Failing that, the last water cell whose 3x3 window is
/// all water; failing that, `None`.
pub fn find_open_water(grid: &ReefGrid) -> Option<(u16, u16)> {
    let mut backup = None;
    for (x, y) in grid.positions() {
        if grid.cell(x, y) != Category::Water {
            continue;
        }
        let tally = analyze_at(grid, x, y);
        if tally.moore5(Category::Water) >= FULLY_OPEN_MOORE5 {
            return Some((x, y));
        }
        if tally.moore3(Category::Water) >= FULLY_OPEN_MOORE3 {
            backup = Some((x, y));
        }
    }
    backup
}

/// Whether `(x, y)` sits in enough open water to be seen from afar.
pub fn is_open_water(grid: &ReefGrid, x: i32, y: i32) -> Result<bool> {
    let tally = grid.analyze(x, y)?;
    Ok(tally.moore5(Category::Water) >= EXPOSED_MOORE5
        && tally.moore3(Category::Water) >= EXPOSED_MOORE3)
}

/// Footing speed at `(x, y)` for an explorer carrying `carried` artefacts.
pub fn speed_at(grid: &ReefGrid, x: i32, y: i32, carried: u32) -> Result<f32> {
    Ok(grid.get(x, y)?.traversal_speed(carried))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_ordering_and_load() {
        assert!(Category::Water.base_speed() > Category::Seaweed.base_speed());
        assert!(Category::Seaweed.base_speed() > Category::YellowCoral.base_speed());
        assert!(Category::YellowCoral.base_speed() > Category::RedCoral.base_speed());
        assert_eq!(Category::Water.traversal_speed(2), 24.0);
        assert_eq!(Category::RedCoral.traversal_speed(5), 1.0);
        assert_eq!(Category::YellowCoral.traversal_speed(20), 0.0);
        assert_eq!(
            Category::Artefact.traversal_speed(1),
            Category::Water.traversal_speed(1)
        );
    }

    #[test]
    fn test_open_water_prefers_fully_open_cell() {
        let grid = ReefGrid::new(6, 6).unwrap();
        assert_eq!(find_open_water(&grid), Some((2, 2)));
    }

    #[test]
    fn test_open_water_falls_back_to_3x3() {
        let mut grid = ReefGrid::filled(4, 4, Category::RedCoral).unwrap();
        for x in 0..3 {
            for y in 0..3 {
                grid.set(x, y, Category::Water).unwrap();
            }
        }
        assert_eq!(find_open_water(&grid), Some((1, 1)));
    }

    #[test]
    fn test_open_water_none_on_solid_reef() {
        let grid = ReefGrid::filled(8, 8, Category::Seaweed).unwrap();
        assert_eq!(find_open_water(&grid), None);
    }

    #[test]
    fn test_exposure() {
        let mut grid = ReefGrid::new(9, 9).unwrap();
        assert!(is_open_water(&grid, 4, 4).unwrap());
        for x in 2..7 {
            for y in 2..7 {
                if (x, y) != (4, 4) {
                    grid.set(x, y, Category::Seaweed).unwrap();
                }
            }
        }
        assert!(!is_open_water(&grid, 4, 4).unwrap());
        assert!(is_open_water(&grid, 9, 0).is_err());
    }

    #[test]
    fn test_speed_at_reads_grid() {
        let mut grid = ReefGrid::new(2, 2).unwrap();
        grid.set(1, 1, Category::Seaweed).unwrap();
        assert_eq!(speed_at(&grid, 1, 1, 1).unwrap(), 18.0);
        assert!(speed_at(&grid, 2, 2, 0).is_err());
    }
}
