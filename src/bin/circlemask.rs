use std::process::ExitCode;

use circlemask::{MaskArgs, MaskError, USAGE_ARGS};
use clap::{ArgAction, Parser};
use tracing::level_filters::LevelFilter;

/// Keep the inside of a circle and make everything else transparent.
///
/// Writes a PNG to `<image>.masked`.
#[derive(Parser, Debug)]
#[command(name = "circlemask", version)]
struct Cli {
    /// `/path/to/image x y radius`, with the center in pixels from the top-left corner.
    #[arg(value_name = "ARGS", num_args = 0.., allow_negative_numbers = true)]
    args: Vec<String>,

    /// Log to stderr (-v warn, -vv info, -vvv debug, -vvvv trace). Silent by default.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        // Missing arguments are not a failure: print usage and stop.
        Err(err) if err.downcast_ref::<MaskError>().is_some_and(MaskError::is_usage) => {
            println!("usage: {} {}", program_name(), USAGE_ARGS.join(" "));
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> anyhow::Result<()> {
    let args = MaskArgs::from_positionals(&cli.args)?;
    let out = circlemask::run(&args)?;
    println!("Saved {}", out.display());
    Ok(())
}

fn program_name() -> String {
    std::env::args()
        .next()
        .unwrap_or_else(|| "circlemask".to_string())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::OFF,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        3 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
