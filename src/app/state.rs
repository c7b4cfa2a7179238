use anyhow::Result;
use serde::Serialize;

use crate::model::config::AppConfig;
use crate::model::grid::ReefGrid;
use crate::model::pipeline::Generator;
use crate::model::queries::find_open_water;
use reefgen_data::{Category, CATEGORY_COUNT};

/// Outcome of one completed generation.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub generation: u64,
    pub seed: u64,
    pub fingerprint: String,
    pub counts: [usize; CATEGORY_COUNT],
    /// First fully open water cell, where an explorer would be dropped in.
    pub spawn: Option<(u16, u16)>,
}

impl RunReport {
    pub fn from_generator(generator: &Generator) -> Self {
        let grid = generator.grid();
        let mut counts = [0usize; CATEGORY_COUNT];
        for category in Category::ALL {
            counts[category.index()] = grid.count(category);
        }
        Self {
            generation: generator.generation(),
            seed: generator.seed().value(),
            fingerprint: grid.fingerprint(),
            counts,
            spawn: find_open_water(grid),
        }
    }
}

pub struct App {
    pub config: AppConfig,
    pub generator: Generator,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        let generator = Generator::new(config.generation.clone())?;
        Ok(Self { config, generator })
    }

    pub fn grid(&self) -> &ReefGrid {
        self.generator.grid()
    }
}
