pub mod state;

pub use state::{App, RunReport};

use anyhow::Result;

use crate::model::config::OutputFormat;
use crate::ui::export;

impl App {
    /// Generates once, then regenerates `regenerations` more times. Each run
    /// is acknowledged as consumed before the next begins.
    pub fn run(&mut self, regenerations: usize) -> Result<Vec<RunReport>> {
        let mut reports = Vec::with_capacity(regenerations + 1);
        self.generator.generate()?;
        for round in 0..=regenerations {
            if round > 0 {
                self.generator.regenerate()?;
            }
            let report = RunReport::from_generator(&self.generator);
            tracing::info!(
                generation = report.generation,
                fingerprint = %report.fingerprint,
                "reef ready"
            );
            self.generator.acknowledge()?;
            reports.push(report);
        }
        Ok(reports)
    }

    /// Renders the current grid in the configured output format.
    pub fn render(&self, report: &RunReport) -> Result<String> {
        let text = match self.config.output.format {
            OutputFormat::Ascii => export::ascii(self.grid(), self.config.output.legend),
            OutputFormat::Json => export::json(report, self.grid())?,
            OutputFormat::Summary => export::summary(report),
        };
        Ok(text)
    }
}
