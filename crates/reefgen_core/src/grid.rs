use crate::error::{GenError, Result};
use reefgen_data::Category;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Width x height array of cell categories. Single source of truth for the
/// reef layout; everything else reads or rewrites it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "RawGrid")]
pub struct ReefGrid {
    cells: Vec<Category>,
    width: u16,
    height: u16,
}

#[derive(Deserialize)]
struct RawGrid {
    cells: Vec<Category>,
    width: u16,
    height: u16,
}

impl TryFrom<RawGrid> for ReefGrid {
    type Error = String;

    fn try_from(raw: RawGrid) -> std::result::Result<Self, Self::Error> {
        let expected = raw.width as usize * raw.height as usize;
        if expected == 0 {
            return Err(format!("empty grid {}x{}", raw.width, raw.height));
        }
        if raw.cells.len() != expected {
            return Err(format!(
                "grid {}x{} needs {} cells, found {}",
                raw.width,
                raw.height,
                expected,
                raw.cells.len()
            ));
        }
        Ok(Self {
            cells: raw.cells,
            width: raw.width,
            height: raw.height,
        })
    }
}

impl ReefGrid {
    /// Allocates an all-water grid. Zero-sized dimensions are rejected before
    /// anything is allocated.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        Self::filled(width, height, Category::Water)
    }

    pub fn filled(width: u16, height: u16, category: Category) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GenError::InvalidDimensions { width, height });
        }
        Ok(Self {
            cells: vec![category; width as usize * height as usize],
            width,
            height,
        })
    }

    #[inline(always)]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major storage index. Callers guarantee `x < width` and `y < height`.
    #[inline(always)]
    pub fn index(&self, x: u16, y: u16) -> usize {
        (y as usize * self.width as usize) + x as usize
    }

    #[inline(always)]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    fn checked_index(&self, x: i32, y: i32) -> Result<usize> {
        if !self.in_bounds(x, y) {
            return Err(GenError::out_of_bounds(x, y, self.width, self.height));
        }
        Ok(self.index(x as u16, y as u16))
    }

    pub fn get(&self, x: i32, y: i32) -> Result<Category> {
        let idx = self.checked_index(x, y)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, x: i32, y: i32, category: Category) -> Result<()> {
        let idx = self.checked_index(x, y)?;
        self.cells[idx] = category;
        Ok(())
    }

    /// Unchecked read for coordinates already known to be in range.
    #[inline(always)]
    pub(crate) fn cell(&self, x: u16, y: u16) -> Category {
        self.cells[self.index(x, y)]
    }

    #[inline(always)]
    pub(crate) fn put(&mut self, x: u16, y: u16, category: Category) {
        let idx = self.index(x, y);
        self.cells[idx] = category;
    }

    /// Raw row-major cells.
    pub fn cells(&self) -> &[Category] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Category] {
        &mut self.cells
    }

    pub fn fill(&mut self, category: Category) {
        self.cells.fill(category);
    }

    pub fn count(&self, category: Category) -> usize {
        self.cells.iter().filter(|c| **c == category).count()
    }

    /// Every coordinate in canonical generation order: `x` outer, `y` inner.
    pub fn positions(&self) -> impl Iterator<Item = (u16, u16)> {
        let (w, h) = (self.width, self.height);
        (0..w).flat_map(move |x| (0..h).map(move |y| (x, y)))
    }

    pub fn same_shape(&self, other: &ReefGrid) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// SHA-256 over the row-major category bytes, hex encoded.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.width.to_le_bytes());
        hasher.update(self.height.to_le_bytes());
        let bytes: Vec<u8> = self.cells.iter().map(|c| *c as u8).collect();
        hasher.update(&bytes);
        hex::encode(hasher.finalize())
    }

    /// One symbol per cell, top row (`y = height - 1`) first.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                out.push(self.cell(x, y).symbol());
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            ReefGrid::new(0, 45),
            Err(GenError::InvalidDimensions {
                width: 0,
                height: 45
            })
        );
        assert!(ReefGrid::new(80, 0).is_err());
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut grid = ReefGrid::new(4, 3).unwrap();
        grid.set(3, 2, Category::RedCoral).unwrap();
        assert_eq!(grid.get(3, 2).unwrap(), Category::RedCoral);
        assert_eq!(grid.get(0, 0).unwrap(), Category::Water);
    }

    #[test]
    fn test_out_of_range_is_error_not_clamped() {
        let mut grid = ReefGrid::new(4, 3).unwrap();
        assert_eq!(grid.get(4, 0), Err(GenError::out_of_bounds(4, 0, 4, 3)));
        assert!(grid.get(-1, 0).is_err());
        assert!(grid.get(0, 3).is_err());
        assert!(grid.set(0, -1, Category::Seaweed).is_err());
        assert_eq!(grid.count(Category::Seaweed), 0);
    }

    #[test]
    fn test_positions_are_column_major() {
        let grid = ReefGrid::new(2, 3).unwrap();
        let order: Vec<_> = grid.positions().collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_fingerprint_tracks_content() {
        let mut a = ReefGrid::new(5, 5).unwrap();
        let b = a.clone();
        assert_eq!(a.fingerprint(), b.fingerprint());
        a.set(2, 2, Category::Seaweed).unwrap();
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_ascii_puts_top_row_first() {
        let mut grid = ReefGrid::new(2, 2).unwrap();
        grid.set(0, 1, Category::Artefact).unwrap();
        assert_eq!(grid.to_ascii(), "*~\n~~\n");
    }

    #[test]
    fn test_deserialize_rejects_mismatched_cells() {
        let json = r#"{"cells":["Water"],"width":2,"height":2}"#;
        assert!(serde_json::from_str::<ReefGrid>(json).is_err());

        let grid = ReefGrid::filled(2, 1, Category::Seaweed).unwrap();
        let text = serde_json::to_string(&grid).unwrap();
        assert_eq!(serde_json::from_str::<ReefGrid>(&text).unwrap(), grid);
    }
}
