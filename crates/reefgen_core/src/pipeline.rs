//! Generation pipeline: fill, sculpt, scatter.
//!
//! ```text
//! Uninitialized -> Filled -> AutomataApplied -> ArtefactsPlaced -> Ready
//!        ^            ^                                            |
//!        |            +------------- regenerate() -----------------+
//! ```
//!
//! The grid is only handed out by reference between stage calls, so a
//! consumer never observes a half-finished pass.

use crate::artefacts::place_artefacts;
use crate::automata::{run_passes, Automaton, RuleContext};
use crate::config::{FillPercentages, GenerationConfig};
use crate::error::{GenError, Result};
use crate::grid::ReefGrid;
use crate::neighborhood::Tally;
use crate::rng::{roll_percent, ReefSeed, SeedMode, Stage};
use rand::Rng;
use reefgen_data::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationState {
    Uninitialized,
    Filled,
    AutomataApplied,
    ArtefactsPlaced,
    Ready,
}

impl GenerationState {
    pub const fn name(self) -> &'static str {
        match self {
            GenerationState::Uninitialized => "uninitialized",
            GenerationState::Filled => "filled",
            GenerationState::AutomataApplied => "automata-applied",
            GenerationState::ArtefactsPlaced => "artefacts-placed",
            GenerationState::Ready => "ready",
        }
    }
}

/// Manual stage controls for inspecting generation one automaton at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepCommand {
    /// Fresh random fill (a new seed when seeding randomly).
    Reinitialize,
    Coral(usize),
    WaterSpace(usize),
    /// Seaweed passes followed by artefact placement.
    SeaweedAndArtefacts(usize),
}

impl StepCommand {
    pub const CORAL: StepCommand = StepCommand::Coral(25);
    pub const WATER_SPACE: StepCommand = StepCommand::WaterSpace(10);
    pub const SEAWEED_AND_ARTEFACTS: StepCommand = StepCommand::SeaweedAndArtefacts(25);
}

/// Fills every cell with noise: `fill` percent become occupied, split into
/// seaweed first, then yellow coral from what remains, else red coral.
pub fn fill_random<R: Rng + ?Sized>(grid: &mut ReefGrid, pct: FillPercentages, rng: &mut R) {
    let cells: Vec<(u16, u16)> = grid.positions().collect();
    for (x, y) in cells {
        let category = if roll_percent(rng, pct.fill) {
            if roll_percent(rng, pct.seaweed) {
                Category::Seaweed
            } else if roll_percent(rng, pct.yellow_coral) {
                Category::YellowCoral
            } else {
                Category::RedCoral
            }
        } else {
            Category::Water
        };
        grid.put(x, y, category);
    }
}

/// Owns the grid and drives every stage of a run.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GenerationConfig,
    seed_mode: SeedMode,
    seed: ReefSeed,
    grid: ReefGrid,
    scratch: ReefGrid,
    state: GenerationState,
    generation: u64,
}

impl Generator {
    /// Validates the configuration and allocates both buffers. Zero-sized
    /// dimensions fail here, before any grid exists.
    pub fn new(config: GenerationConfig) -> Result<Self> {
        let seed_mode = config.seed_mode();
        Self::with_seed_mode(config, seed_mode)
    }

    /// Replays a recorded master seed, e.g. one logged by a random run.
    pub fn with_seed(config: GenerationConfig, seed: ReefSeed) -> Result<Self> {
        Self::with_seed_mode(config, SeedMode::Exact(seed))
    }

    fn with_seed_mode(config: GenerationConfig, seed_mode: SeedMode) -> Result<Self> {
        config.validate()?;
        let config = config.sanitized();
        let grid = ReefGrid::new(config.width, config.height)?;
        let scratch = grid.clone();
        let seed = seed_mode.resolve();
        tracing::info!(
            width = config.width,
            height = config.height,
            seed = seed.value(),
            random = seed_mode == SeedMode::Random,
            "generator created"
        );
        Ok(Self {
            config,
            seed_mode,
            seed,
            grid,
            scratch,
            state: GenerationState::Uninitialized,
            generation: 0,
        })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn grid(&self) -> &ReefGrid {
        &self.grid
    }

    /// Mutable access for consumers that move artefacts around.
    pub fn grid_mut(&mut self) -> &mut ReefGrid {
        &mut self.grid
    }

    pub fn into_grid(self) -> ReefGrid {
        self.grid
    }

    pub fn state(&self) -> GenerationState {
        self.state
    }

    /// Master seed of the current run.
    pub fn seed(&self) -> ReefSeed {
        self.seed
    }

    /// Number of completed fills since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True once artefacts are placed and the grid may be populated.
    pub fn is_complete(&self) -> bool {
        matches!(
            self.state,
            GenerationState::ArtefactsPlaced | GenerationState::Ready
        )
    }

    pub fn get_category(&self, x: i32, y: i32) -> Result<Category> {
        self.grid.get(x, y)
    }

    pub fn analyze(&self, x: i32, y: i32) -> Result<Tally> {
        self.grid.analyze(x, y)
    }

    /// Tallies `(x, y)` and logs them at debug level.
    pub fn inspect(&self, x: i32, y: i32) -> Result<Tally> {
        let tally = self.grid.analyze(x, y)?;
        tracing::debug!("({}, {}) {}", x, y, tally);
        Ok(tally)
    }

    fn require_filled(&self) -> Result<()> {
        if self.state == GenerationState::Uninitialized {
            return Err(GenError::InvalidState {
                expected: "filled",
                found: self.state.name(),
            });
        }
        Ok(())
    }

    fn transition(&mut self, next: GenerationState) {
        tracing::debug!("generator {} -> {}", self.state.name(), next.name());
        self.state = next;
    }

    fn rule_context(&self) -> RuleContext {
        RuleContext {
            tuning: self.config.tuning,
            yellow_coral_percent: self.config.percentages().yellow_coral,
        }
    }

    /// Overwrites the whole grid with fresh noise.
    pub fn initialize(&mut self) {
        let mut rng = self.seed.stream(Stage::Initialize);
        fill_random(&mut self.grid, self.config.percentages(), &mut rng);
        self.generation += 1;
        tracing::info!(
            generation = self.generation,
            water = self.grid.count(Category::Water),
            seaweed = self.grid.count(Category::Seaweed),
            coral = self.grid.count(Category::YellowCoral) + self.grid.count(Category::RedCoral),
            "grid filled"
        );
        self.transition(GenerationState::Filled);
    }

    /// Applies coral, then water-space, then seaweed passes.
    pub fn run_automata(
        &mut self,
        coral_iterations: usize,
        water_iterations: usize,
        seaweed_iterations: usize,
    ) -> Result<()> {
        self.require_filled()?;
        let ctx = self.rule_context();
        let mut rng = self.seed.stream(Stage::Automata);
        let schedule = [
            (Automaton::Coral, coral_iterations),
            (Automaton::WaterSpace, water_iterations),
            (Automaton::Seaweed, seaweed_iterations),
        ];
        for (automaton, iterations) in schedule {
            run_passes(
                automaton,
                &mut self.grid,
                &mut self.scratch,
                iterations,
                &ctx,
                &mut rng,
            );
            if iterations > 0 {
                tracing::debug!(automaton = automaton.name(), iterations, "automaton applied");
            }
        }
        self.transition(GenerationState::AutomataApplied);
        Ok(())
    }

    pub fn run_configured_automata(&mut self) -> Result<()> {
        self.run_automata(
            self.config.coral_iterations,
            self.config.water_iterations,
            self.config.seaweed_iterations,
        )
    }

    /// Scatters `count` artefacts. See [`place_artefacts`] for the
    /// termination caveat on counts near the cell total.
    pub fn place_artefacts(&mut self, count: usize) -> Result<Vec<(u16, u16)>> {
        self.require_filled()?;
        let mut rng = self.seed.stream(Stage::Artefacts);
        let placed = place_artefacts(&mut self.grid, count, &mut rng);
        tracing::info!(count = placed.len(), "artefacts placed");
        self.transition(GenerationState::ArtefactsPlaced);
        Ok(placed)
    }

    /// Consumer acknowledgement that the placed grid has been picked up.
    pub fn acknowledge(&mut self) -> Result<()> {
        if self.state != GenerationState::ArtefactsPlaced {
            return Err(GenError::InvalidState {
                expected: GenerationState::ArtefactsPlaced.name(),
                found: self.state.name(),
            });
        }
        self.transition(GenerationState::Ready);
        Ok(())
    }

    /// Full configured run from whatever the current state is.
    pub fn generate(&mut self) -> Result<&ReefGrid> {
        self.initialize();
        self.run_configured_automata()?;
        self.place_artefacts(self.config.artefact_count)?;
        Ok(&self.grid)
    }

    /// Discards the current grid and runs the pipeline again. Random seeding
    /// draws a new master seed; a fixed seed reproduces the same grid.
    pub fn regenerate(&mut self) -> Result<&ReefGrid> {
        self.reseed();
        tracing::info!(seed = self.seed.value(), "regenerating");
        self.generate()
    }

    fn reseed(&mut self) {
        if self.seed_mode == SeedMode::Random {
            self.seed = self.seed_mode.resolve();
        }
    }

    pub fn step(&mut self, command: StepCommand) -> Result<()> {
        match command {
            StepCommand::Reinitialize => {
                self.reseed();
                self.initialize();
            }
            StepCommand::Coral(n) => self.run_automata(n, 0, 0)?,
            StepCommand::WaterSpace(n) => self.run_automata(0, n, 0)?,
            StepCommand::SeaweedAndArtefacts(n) => {
                self.run_automata(0, 0, n)?;
                self.place_artefacts(self.config.artefact_count)?;
            }
        }
        Ok(())
    }
}
