use anyhow::Result;
use clap::{Parser, Subcommand};

use business_center::cli::{
    handle_export_command, handle_insights_command, handle_summary_command, ExportArgs, ItemArgs,
};
use business_center::config::{BusinessPaths, Settings};
use business_center::logging::{init_tracing, LogTarget};

#[derive(Parser)]
#[command(
    name = "business-center",
    author = "Kaylee Beyene",
    version,
    about = "Terminal revenue and expense calculator",
    long_about = "Business Center totals your revenue and expense items, shows \
                  profit or loss with a bar chart, points out your highest \
                  items and exports the data to a spreadsheet."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive calculator
    #[command(alias = "ui")]
    Tui,

    /// Show totals, profit or loss and the bar chart
    Summary(ItemArgs),

    /// Show the highest items and both lists sorted by amount
    Insights(ItemArgs),

    /// Export the items to a spreadsheet, CSV or JSON file
    Export(ExportArgs),

    /// Create the data directory and default settings
    Init,

    /// Show configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BusinessPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Tui) => {
            paths.ensure_directories()?;
            init_tracing(&settings.log_level, LogTarget::File(&paths.log_file()))?;
            business_center::tui::run_tui(&settings, &paths)?;
        }
        Some(Commands::Summary(args)) => {
            init_tracing(&settings.log_level, LogTarget::Stderr)?;
            handle_summary_command(&settings, args)?;
        }
        Some(Commands::Insights(args)) => {
            init_tracing(&settings.log_level, LogTarget::Stderr)?;
            handle_insights_command(&settings, args)?;
        }
        Some(Commands::Export(args)) => {
            init_tracing(&settings.log_level, LogTarget::Stderr)?;
            handle_export_command(&paths, &settings, args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Business Center at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Settings written to: {}", paths.settings_file().display());
            println!("Exports will be saved in: {}", paths.exports_dir().display());
        }
        Some(Commands::Config) => {
            println!("Business Center Configuration");
            println!("=============================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Exports directory: {}", paths.exports_dir().display());
            println!("Log file:          {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency:         {}", settings.currency_code);
            println!(
                "  Items per list:   {} to {}",
                settings.min_items, settings.max_items
            );
            println!("  Export file name: {}", settings.export_file_name);
            println!(
                "  Amount step:      {}",
                settings.amount_step.format_with_code(&settings.currency_code)
            );
            println!("  Log level:        {}", settings.log_level);
            if !paths.is_initialized() {
                println!();
                println!("Not initialized yet. Run 'business-center init' to save these settings.");
            }
        }
        None => {
            println!("Business Center - revenue and expense calculator");
            println!();
            println!("Run 'business-center --help' for usage information.");
            println!("Run 'business-center tui' to launch the interactive calculator.");
        }
    }

    Ok(())
}
