pub mod grid {
    pub use reefgen_core::grid::*;
}
pub mod pipeline {
    pub use reefgen_core::pipeline::*;
}
pub mod queries {
    pub use reefgen_core::queries::*;
}

pub mod config;
