//! hashcode - compare hash code strategies from a console menu.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hashcode_cli::{load_config, CliError, MenuController, TerminalKeys};

#[derive(Parser, Debug)]
#[command(name = "hashcode", version, about = "Compare hash code strategies")]
struct Args {
    /// Configuration file (TOML, or YAML with a .yaml/.yml extension)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Keep previous output instead of clearing the screen
    #[arg(long)]
    no_clear: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let mut config = load_config(args.config.as_deref())?;
    if args.no_clear {
        config = config.with_clear_screen(false);
    }

    hashcode::console::init(&config.logging.filter);

    let stdout = io::stdout();
    let mut controller = MenuController::new(TerminalKeys, stdout.lock(), config);
    controller.run()
}
