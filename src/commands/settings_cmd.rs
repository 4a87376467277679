use clap::{Args, Subcommand, ValueEnum};

use foodlog::notify::Notifier;
use foodlog::settings::SettingsStore;
use foodlog::theme::{Theme, ThemeMode};

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct SettingsCommand {
    #[command(subcommand)]
    pub command: SettingsSubcommand,
}

#[derive(Subcommand)]
pub enum SettingsSubcommand {
    /// Show current settings and the active theme
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Update settings
    Set {
        /// Dark mode on or off
        #[arg(long)]
        dark_mode: Option<bool>,

        /// Daily calorie goal; pass '' to clear it
        #[arg(long)]
        calorie_goal: Option<String>,

        /// Daily reminder notifications on or off
        #[arg(long)]
        notifications: Option<bool>,
    },
}

impl SettingsCommand {
    pub async fn run(
        &self,
        settings: &mut SettingsStore,
        notifier: &dyn Notifier,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            SettingsSubcommand::Show { format } => {
                self.show(format, settings);
                Ok(())
            }
            SettingsSubcommand::Set {
                dark_mode,
                calorie_goal,
                notifications,
            } => {
                if dark_mode.is_none() && calorie_goal.is_none() && notifications.is_none() {
                    println!("Nothing to update. See `settings set --help` for options.");
                    return Ok(());
                }

                if let Some(on) = dark_mode {
                    settings.set_dark_mode(*on).await?;
                }
                if let Some(goal) = calorie_goal {
                    settings.set_calorie_goal(goal).await?;
                }
                if let Some(on) = notifications {
                    settings.set_notifications(*on).await?;
                    if *on {
                        notifier.schedule_daily_reminder()?;
                    } else {
                        notifier.cancel_all()?;
                    }
                }

                self.show(&OutputFormat::Text, settings);
                Ok(())
            }
        }
    }

    fn show(&self, format: &OutputFormat, settings: &SettingsStore) {
        let current = settings.current();
        let mode = ThemeMode::from_dark_flag(current.dark_mode);
        let theme = Theme::for_mode(mode);

        match format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "settings": current,
                    "theme": { "mode": mode, "colors": theme },
                });
                println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
            }
            OutputFormat::Text => {
                println!("Settings");
                println!("========\n");

                println!("Dark mode: {}", on_off(current.dark_mode));
                match current.calorie_goal {
                    Some(goal) => println!("Calorie goal: {}", goal),
                    None => println!("Calorie goal: (not set)"),
                }
                println!("Notifications: {}", on_off(current.notifications));
                println!();

                println!("Theme ({})", mode);
                println!("  background: {}", theme.background);
                println!("  text: {}", theme.text);
                println!("  card: {}", theme.card);
            }
        }
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}
