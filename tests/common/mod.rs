pub mod macros;

use proptest::prelude::*;
use reefgen_core::{GenerationConfig, ReefGrid};
use reefgen_data::Category;

#[allow(dead_code)]
pub struct GridBuilder {
    width: u16,
    height: u16,
    background: Category,
    cells: Vec<(i32, i32, Category)>,
}

#[allow(dead_code)]
impl GridBuilder {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            background: Category::Water,
            cells: Vec::new(),
        }
    }

    pub fn filled_with(mut self, category: Category) -> Self {
        self.background = category;
        self
    }

    pub fn with_cell(mut self, x: i32, y: i32, category: Category) -> Self {
        self.cells.push((x, y, category));
        self
    }

    /// Inclusive rectangle.
    pub fn with_rect(mut self, x0: i32, y0: i32, x1: i32, y1: i32, category: Category) -> Self {
        for x in x0..=x1 {
            for y in y0..=y1 {
                self.cells.push((x, y, category));
            }
        }
        self
    }

    pub fn build(self) -> ReefGrid {
        let mut grid = ReefGrid::filled(self.width, self.height, self.background)
            .expect("builder dimensions must be positive");
        for (x, y, category) in self.cells {
            grid.set(x, y, category).expect("builder cell out of range");
        }
        grid
    }
}

#[allow(dead_code)]
pub fn seeded_config(seed: &str, width: u16, height: u16) -> GenerationConfig {
    GenerationConfig {
        width,
        height,
        ..GenerationConfig::seeded(seed)
    }
}

#[allow(dead_code)]
pub fn grid_from_slots(width: u16, height: u16, slots: &[u8]) -> ReefGrid {
    let mut grid = ReefGrid::new(width, height).expect("dimensions must be positive");
    for (i, slot) in slots.iter().enumerate() {
        let x = (i % width as usize) as i32;
        let y = (i / width as usize) as i32;
        grid.set(x, y, Category::ALL[*slot as usize]).expect("slot index in range");
    }
    grid
}

prop_compose! {
    /// Arbitrary grid up to `max` x `max`, artefacts included.
    pub fn arb_grid(max: u16)(width in 1..=max, height in 1..=max)(
        slots in prop::collection::vec(0u8..5, width as usize * height as usize),
        width in Just(width),
        height in Just(height),
    ) -> ReefGrid {
        grid_from_slots(width, height, &slots)
    }
}

prop_compose! {
    /// Arbitrary grid up to `max` x `max` with terrain only.
    pub fn arb_terrain_grid(max: u16)(width in 1..=max, height in 1..=max)(
        slots in prop::collection::vec(0u8..4, width as usize * height as usize),
        width in Just(width),
        height in Just(height),
    ) -> ReefGrid {
        grid_from_slots(width, height, &slots)
    }
}
