use clap::{Parser, Subcommand};
use escomp::{AppError, DoctorOptions, StorageRoot};

#[derive(Parser)]
#[command(name = "escomp")]
#[command(version)]
#[command(
    about = "Resolve paths and validate ES-DE companion scripts",
    long_about = None
)]
struct Cli {
    /// Root of the external storage ES-DE lives on
    /// (falls back to ESCOMP_STORAGE_ROOT).
    #[arg(long, global = true)]
    storage_root: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the 7 ES-DE companion scripts are installed and current
    #[clap(visible_alias = "d")]
    Doctor,
    /// Show every resolved filesystem location
    #[clap(visible_alias = "p")]
    Paths,
    /// Read or change stored preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
}

#[derive(Subcommand)]
enum PrefsAction {
    /// Print a preference value, or its default when unset
    Get { key: String },
    /// Parse and persist a preference value
    Set { key: String, value: String },
    /// Drop all stored preferences
    Reset,
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32, AppError> {
    let root = cli
        .storage_root
        .or_else(|| std::env::var("ESCOMP_STORAGE_ROOT").ok())
        .ok_or(AppError::StorageRootMissing)?;
    let root = StorageRoot::new(root)?;

    match cli.command {
        Commands::Doctor => Ok(escomp::doctor(&root, DoctorOptions::default())?.exit_code),
        Commands::Paths => {
            escomp::show_paths(&root)?;
            Ok(0)
        }
        Commands::Prefs { action } => match action {
            PrefsAction::Get { key } => {
                println!("{}", escomp::pref_get(&root, &key)?);
                Ok(0)
            }
            PrefsAction::Set { key, value } => {
                escomp::pref_set(&root, &key, &value)?;
                println!("✅ {key} updated");
                Ok(0)
            }
            PrefsAction::Reset => {
                escomp::pref_reset(&root)?;
                println!("✅ Preferences reset to defaults");
                Ok(0)
            }
        },
    }
}
