mod config_cmd;
mod export_cmd;
mod log_cmd;
mod settings_cmd;

pub use config_cmd::ConfigCommand;
pub use export_cmd::ExportCommand;
pub use log_cmd::LogCommand;
pub use settings_cmd::SettingsCommand;
