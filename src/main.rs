use clap::Parser;
use hsmstate::{HsmError, VERSION, classify_path, self_check};
use log::debug;
use std::path::PathBuf;
use std::process::ExitCode;

// Exit codes beyond the three classification codes
const EXIT_PATH_ERROR: u8 = 3;
const EXIT_ATTR_ERROR: u8 = 4;
const EXIT_USAGE: u8 = 5;

#[derive(Parser)]
#[command(name = "hsmstate")]
#[command(version = VERSION)]
#[command(about = "Report the HSM migration state of a file on a GPFS filesystem")]
#[command(
    after_help = "The exit code is the migration state: 0 resident, 1 premigrated, 2 migrated."
)]
struct Cli {
    /// File to classify
    path: Option<PathBuf>,

    /// Explain what each state means and exit
    #[arg(short = 'H', long)]
    hints: bool,

    /// Run the diagnostic smoke test and exit
    #[arg(long)]
    self_check: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn display_hints() {
    use hsmstate::MigrationState::{Migrated, Premigrated, Resident};
    for state in [Resident, Premigrated, Migrated] {
        println!("{}: {}", state.name(), state.hint());
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    if cli.self_check {
        let rc = self_check();
        debug!("self check returned {rc}");
        return ExitCode::SUCCESS;
    }

    if cli.hints {
        display_hints();
        return ExitCode::SUCCESS;
    }

    let Some(path) = cli.path else {
        eprintln!("hsmstate: no path given (see --help)");
        return ExitCode::from(EXIT_USAGE);
    };

    match classify_path(&path) {
        Ok(state) => {
            println!("{}\t{}", state, path.display());
            ExitCode::from(state.return_code() as u8)
        }
        Err(e @ HsmError::Path(_)) => {
            eprintln!("hsmstate: {e}");
            ExitCode::from(EXIT_PATH_ERROR)
        }
        Err(e) => {
            eprintln!("hsmstate: {e}");
            ExitCode::from(EXIT_ATTR_ERROR)
        }
    }
}
