use chrono::Utc;
use clap::Args;
use std::path::PathBuf;

use foodlog::export::{filter_by_window, render_report, report_filename, ExportWindow};
use foodlog::store::LogStore;

use crate::config::Config;

#[derive(Args)]
pub struct ExportCommand {
    /// Export window (week, month, all)
    pub period: String,

    /// Directory to write the report into (defaults to the configured
    /// export directory)
    #[arg(long, short)]
    pub dir: Option<PathBuf>,
}

impl ExportCommand {
    pub fn run(&self, store: &LogStore, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let window: ExportWindow = self.period.parse()?;

        let filtered = filter_by_window(store.all(), window, Utc::now());
        let report = render_report(&filtered);

        let dir = self
            .dir
            .clone()
            .unwrap_or_else(|| config.export_dir.value.clone());
        std::fs::create_dir_all(&dir)?;

        let path = dir.join(report_filename(window));
        std::fs::write(&path, &report)?;

        println!("Exported {} entries to {}", filtered.len(), path.display());
        Ok(())
    }
}
