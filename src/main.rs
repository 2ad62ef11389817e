use anyhow::Result;
use clap::{Parser, Subcommand};

use viewkit::cli::{
    handle_date_command, handle_table_command, handle_template_command, DateArgs, TableArgs,
    TemplateArgs,
};
use viewkit::config::{paths::ViewkitPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "viewkit",
    author = "Kaylee Beyene",
    version,
    about = "Presentation utilities: date patterns, templates, toasts and tables",
    long_about = "viewkit formats dates with token patterns, fills {N} string templates, \
                  shows self-dismissing toast notifications in the terminal, and edits \
                  rows of CSV tables for display."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a date with a token pattern
    Date(DateArgs),

    /// Fill a {N} template with positional values
    #[command(alias = "fmt")]
    Template(TemplateArgs),

    /// Show a toast notification until it fades out
    Toast {
        /// Message to show; "\n" starts a new line
        message: String,
        /// Display time in milliseconds before the fade (invalid values use the default)
        #[arg(short, long)]
        duration: Option<String>,
    },

    /// Load a CSV table, edit its rows and print it
    Table(TableArgs),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    viewkit::logging::init(cli.verbose);

    let paths = ViewkitPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Date(args)) => {
            println!("{}", handle_date_command(&settings, args)?);
        }
        Some(Commands::Template(args)) => {
            println!("{}", handle_template_command(args));
        }
        Some(Commands::Toast { message, duration }) => {
            let message = message.replace("\\n", "\n");
            viewkit::tui::run_toast(&settings.toast, &message, duration.as_deref())?;
        }
        Some(Commands::Table(args)) => {
            println!("{}", handle_table_command(&settings, args)?);
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("viewkit Configuration");
            println!("=====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!(
                "Settings file:    {}{}",
                paths.settings_file().display(),
                if paths.is_initialized() { "" } else { " (not created)" }
            );
            println!();
            println!("Settings:");
            println!("  Date pattern:        {}", settings.date_pattern);
            println!("  Toast duration (ms): {}", settings.toast.default_duration_ms);
            println!("  Toast fade (ms):     {}", settings.toast.fade_ms);
            println!("  Table style:         {:?}", settings.table.style);
        }
        None => {
            println!("viewkit - presentation utilities");
            println!();
            println!("Run 'viewkit --help' for usage information.");
        }
    }

    Ok(())
}
