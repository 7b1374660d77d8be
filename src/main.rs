use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use loan_report::cli::{handle_report_command, resolve_store, ReportArgs};
use loan_report::config::{logging, paths::ReportPaths, settings::Settings};
use loan_report::storage::json_file_valid;

#[derive(Parser)]
#[command(
    name = "loanrep",
    version,
    about = "Monthly equipment-loan report",
    long_about = "loanrep filters equipment-loan records by month and year and \
                  shows them a page at a time, with dates in the Buddhist-era \
                  calendar. Run it without a subcommand to open the interactive view."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui {
        /// Record collection to read instead of the configured one
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Print or export the report for a month and year
    Report(ReportArgs),

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ReportPaths::new()?;

    match cli.command {
        Some(Commands::Tui { file }) => run_tui(&paths, file)?,
        None => run_tui(&paths, None)?,
        Some(Commands::Report(args)) => {
            logging::init_stderr();
            let settings = Settings::load_or_create(&paths)?;
            handle_report_command(&paths, &settings, args)?;
        }
        Some(Commands::Init) => {
            logging::init_stderr();
            let settings = Settings::load_or_create(&paths)?;
            println!("Initializing loan-report at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            let records = settings.records_path(&paths);
            if !records.exists() {
                std::fs::write(&records, "[]\n")?;
            }
            println!("Initialization complete!");
            println!();
            println!("Settings:  {}", paths.settings_file().display());
            println!("Records:   {}", settings.records_path(&paths).display());
            println!();
            println!("Run 'loanrep report' to see this month's loans.");
        }
        Some(Commands::Config) => {
            logging::init_stderr();
            let settings = Settings::load_or_create(&paths)?;
            println!("loan-report Configuration");
            println!("=========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            let records = settings.records_path(&paths);
            println!("Records file:     {}", records.display());
            println!("Records readable: {}", json_file_valid(&records));
            println!("Log file:         {}", paths.log_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Page size:            {}", settings.page_size);
            println!("  Page buttons:         {}", settings.max_visible_buttons);
            println!("  Year offset:          {}", settings.year_offset);
            println!("  Date format:          {}", settings.date_format);
            println!("  Absence marker:       {}", settings.absence_marker);
            println!("  Reset page on filter: {}", settings.reset_page_on_refilter);
        }
    }

    Ok(())
}

fn run_tui(paths: &ReportPaths, file: Option<PathBuf>) -> Result<()> {
    paths.ensure_directories()?;
    logging::init_file(&paths.log_file());
    let settings = Settings::load_or_create(paths)?;
    let store = resolve_store(file, paths, &settings);
    loan_report::tui::run_tui(&store, &settings)
}
