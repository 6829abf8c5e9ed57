use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use dotenv::dotenv;
use slotbook_client::{ClientConfig, HttpScheduleService, schedule_file};
use slotbook_core::{
    editor::ScheduleEditor,
    models::schedule::{Weekday, WeeklySchedule},
    time::{calculate_end_time, format_time},
    validator::validate_schedule,
};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "slotbook")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage a therapist's recurring weekly availability")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a schedule file without contacting the service
    Validate {
        /// JSON file with the days to check
        path: PathBuf,
    },

    /// Print the weekly schedule stored by the service
    Show,

    /// Validate a schedule file and save it as the weekly schedule
    Submit {
        /// JSON file with the days to submit
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { path } => {
            init_logging(Level::INFO)?;
            let days = schedule_file::read_days(&path)?;
            validate_schedule(&days)?;
            println!(
                "Schedule is valid ({} enabled day(s))",
                days.iter().filter(|d| d.enabled).count()
            );
        }
        Commands::Show => {
            let service = connect()?;
            let editor = ScheduleEditor::load(&service).await?;
            match editor.persisted() {
                Some(schedule) => print_schedule(schedule)?,
                None => println!("No weekly schedule created"),
            }
        }
        Commands::Submit { path } => {
            let days = schedule_file::read_days(&path)?;
            let service = connect()?;
            let mut editor = ScheduleEditor::load(&service).await?;
            editor.edit_from(days)?;
            let outcome = editor.save(&service).await?;
            println!("{}", outcome);
            if let Some(schedule) = editor.persisted() {
                print_schedule(schedule)?;
            }
        }
    }

    Ok(())
}

fn init_logging(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn connect() -> Result<HttpScheduleService> {
    let config = ClientConfig::from_env()?;
    init_logging(config.log_level)?;
    info!("Using schedule service at {}", config.api_url);
    HttpScheduleService::new(config)
}

fn print_schedule(schedule: &WeeklySchedule) -> Result<()> {
    for day in Weekday::ALL {
        let Some(entry) = schedule.day(day).filter(|d| d.enabled) else {
            continue;
        };
        println!("{}", day);
        for slot in &entry.slots {
            let modes: Vec<String> = slot.modes.iter().map(ToString::to_string).collect();
            println!(
                "  {} - {}  \u{20b9}{}  {}",
                format_time(&slot.start_time)?,
                format_time(&calculate_end_time(&slot.start_time)?)?,
                slot.price,
                modes.join(", ")
            );
        }
    }
    Ok(())
}
