pub mod app;
pub mod model;
pub mod ui;

pub use app::{App, RunReport};
pub use model::config::{AppConfig, OutputFormat};
