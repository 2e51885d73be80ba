#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]

mod commands;
mod logging;

use clap::Parser;
use miette::Result;
use times_core::{Config, OverflowPolicy};

#[derive(Parser, Debug)]
#[command(name = "times")]
#[command(author, version, about = "Iterated-apply call-overhead microbenchmark", long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit JSON formatted output (stable, machine-readable)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Apply `x + 5` repeatedly and print the result
    Run {
        /// Number of applications
        #[arg(long, short = 'n', default_value_t = times_core::config::DEFAULT_COUNT)]
        count: u64,

        /// Initial accumulator value
        #[arg(long, short = 'x', default_value_t = times_core::config::DEFAULT_INITIAL, allow_negative_numbers = true)]
        initial: i64,

        /// Fail on integer overflow instead of wrapping
        #[arg(long)]
        checked: bool,
    },

    /// Time the loop under each dispatch style
    Bench {
        /// Number of measured iterations
        #[arg(long, default_value_t = commands::bench::DEFAULT_ITERS)]
        iters: u32,

        /// Number of warmup iterations (not measured)
        #[arg(long, default_value_t = commands::bench::DEFAULT_WARMUP)]
        warmup: u32,

        /// Applications per measured call (clamped to 1-10000000)
        #[arg(long, default_value_t = commands::bench::DEFAULT_COUNT)]
        count: u64,
    },

    /// Print version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::new()
        .with_verbosity(cli.verbose)
        .with_json_logs(cli.json);

    logging::init(config.verbosity, config.json_logs);

    match cli.command {
        // Bare invocation is the reference driver: plain `5000` on stdout.
        None => commands::run::run(&config, false),
        Some(Commands::Run {
            count,
            initial,
            checked,
        }) => {
            let overflow = if checked {
                OverflowPolicy::Checked
            } else {
                OverflowPolicy::Wrapping
            };
            let config = config
                .with_count(count)
                .with_initial(initial)
                .with_overflow(overflow);
            commands::run::run(&config, cli.json)
        }
        Some(Commands::Bench {
            iters,
            warmup,
            count,
        }) => commands::bench::run(iters, warmup, count, cli.json),
        Some(Commands::Version) => commands::version::run(),
    }
}
