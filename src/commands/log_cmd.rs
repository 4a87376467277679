use chrono::Local;
use clap::{Args, Subcommand, ValueEnum};

use foodlog::aggregate::{group_by_meal_type, total_calories};
use foodlog::models::{EntryDraft, MealType};
use foodlog::settings::Settings;
use foodlog::store::LogStore;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct LogCommand {
    #[command(subcommand)]
    pub command: LogSubcommand,
}

#[derive(Subcommand)]
pub enum LogSubcommand {
    /// Record a meal
    Add {
        /// Meal type (breakfast, lunch, dinner, snacks)
        #[arg(long = "type", short = 't', value_name = "TYPE")]
        meal_type: String,

        /// Name of the meal
        #[arg(long, short)]
        name: String,

        /// Calories, as entered
        #[arg(long)]
        calories: String,
    },

    /// Show the dashboard grouped by meal type
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Delete an entry by the position shown in `log list`
    Delete {
        /// Entry position
        index: usize,
    },
}

impl LogCommand {
    pub async fn run(
        &self,
        store: &mut LogStore,
        settings: &Settings,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            LogSubcommand::Add {
                meal_type,
                name,
                calories,
            } => {
                let meal_type: MealType = meal_type.parse()?;
                let entry = store
                    .append(EntryDraft::new(meal_type, name, calories))
                    .await?;
                println!(
                    "Added {}: {} ({} cal)",
                    entry.meal_type.label(),
                    entry.meal_name,
                    entry.calories
                );
                Ok(())
            }
            LogSubcommand::List { format } => {
                self.show_dashboard(format, store, settings);
                Ok(())
            }
            LogSubcommand::Delete { index } => {
                store.delete(*index).await?;
                println!("Deleted entry {}", index);
                Ok(())
            }
        }
    }

    fn show_dashboard(&self, format: &OutputFormat, store: &LogStore, settings: &Settings) {
        let entries = store.all();
        let total = total_calories(entries);

        match format {
            OutputFormat::Json => {
                let groups = group_by_meal_type(entries);
                let json = serde_json::json!({
                    "date": Local::now().format("%Y-%m-%d").to_string(),
                    "groups": groups,
                    "totalCalories": total,
                    "calorieGoal": settings.calorie_goal,
                });
                println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
            }
            OutputFormat::Text => {
                println!("{}", Local::now().format("%Y-%m-%d"));
                println!();

                for meal_type in MealType::ALL {
                    println!("{}", meal_type.label());
                    let mut any = false;
                    for (index, entry) in entries
                        .iter()
                        .enumerate()
                        .filter(|(_, e)| e.meal_type == meal_type)
                    {
                        println!("  [{}] {}", index, entry);
                        any = true;
                    }
                    if !any {
                        println!("  (none)");
                    }
                    println!();
                }

                println!("Total Calories: {}", total);
                if let Some(goal) = settings.calorie_goal {
                    let goal = u64::from(goal);
                    if total <= goal {
                        println!("Calorie goal: {} ({} remaining)", goal, goal - total);
                    } else {
                        println!("Calorie goal: {} ({} over)", goal, total - goal);
                    }
                }
            }
        }
    }
}
