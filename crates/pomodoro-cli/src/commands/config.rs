use clap::Subcommand;
use pomodoro_core::SettingsStore;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as JSON
    Show,
    /// Change durations (minutes) and save
    Set {
        /// Work duration in minutes
        #[arg(long)]
        work: Option<u32>,
        /// Short break duration in minutes
        #[arg(long = "break")]
        short_break: Option<u32>,
        /// Long break duration in minutes
        #[arg(long)]
        long: Option<u32>,
    },
    /// Remove the saved settings record
    Clear,
}

pub fn run(store: SettingsStore, action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = store.load_or_default();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Set {
            work,
            short_break,
            long,
        } => {
            store.update(|config| {
                if let Some(minutes) = work {
                    config.set_work_duration(minutes)?;
                }
                if let Some(minutes) = short_break {
                    config.set_break_duration(minutes)?;
                }
                if let Some(minutes) = long {
                    config.set_long_duration(minutes)?;
                }
                Ok(())
            })?;
            println!("ok");
        }
        ConfigAction::Clear => {
            store.clear()?;
            println!("settings cleared");
        }
    }
    Ok(())
}
