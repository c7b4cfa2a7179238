//! # Reef generation engine
//!
//! Builds an organic-looking 2D reef from a seed: random fill, three
//! cellular automata (coral growth, water-space carving, seaweed growth)
//! applied in a fixed order with double-buffered passes, then a scatter of
//! collectible artefacts.
//!
//! Same seed and configuration always produce the same grid.
//!
//! ```rust
//! use reefgen_core::{GenerationConfig, Generator};
//!
//! let mut generator = Generator::new(GenerationConfig::seeded("S1")).unwrap();
//! let grid = generator.generate().unwrap();
//! assert_eq!(grid.width(), 80);
//! ```

pub mod artefacts;
pub mod automata;
pub mod config;
pub mod error;
pub mod grid;
pub mod neighborhood;
pub mod pipeline;
pub mod queries;
pub mod rng;

pub use artefacts::{count_artefacts, drop_artefact, pick_up_artefact, place_artefacts};
pub use automata::{apply_pass, run_passes, Automaton, RuleContext, Traversal};
pub use config::{AutomatonTuning, FillPercentages, GenerationConfig};
pub use error::{GenError, Result};
pub use grid::ReefGrid;
pub use neighborhood::{analyze, Tally};
pub use pipeline::{fill_random, GenerationState, Generator, StepCommand};
pub use queries::{find_open_water, is_open_water, speed_at, FootingLogic};
pub use reefgen_data::Category;
pub use rng::{ReefRng, ReefSeed, SeedMode, Stage};
