use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use log::error;
use tracing_subscriber::EnvFilter;

use subarray_sum::testing::{VerifyOptions, DATA_DIR};
use subarray_sum::RunOptions;

#[derive(Parser)]
#[command(name = "subarray_sum")]
#[command(about = "Maximum subarray sum, four ways", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the cases on stdin with a task
    Run {
        /// Task name to run (brute_force, kadane, monotonic_stack,
        /// divide_conquer, cross_check, kadane_span)
        task: String,
        /// Spread cases across threads
        #[arg(long)]
        parallel: bool,
    },
    /// Check a task against its recorded cases
    Verify {
        /// Task name to verify
        task: String,
        /// Directory holding <group>/<dataset>/N.in and N.out
        #[arg(long, default_value = DATA_DIR)]
        data_dir: PathBuf,
        /// Fail cases that run longer than this many milliseconds
        #[arg(long)]
        time_limit_ms: Option<u64>,
    },
}

fn main() -> ExitCode {
    // install global collector configured based on RUST_LOG env var.
    // stdout carries the answers, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let tasks = subarray_sum::tasks::tasks();

    let result = match cli.command {
        Commands::Run { task, parallel } => {
            let options = RunOptions { parallel };
            tasks.run(&task, &options).map(|_| true)
        }
        Commands::Verify {
            task,
            data_dir,
            time_limit_ms,
        } => {
            let options = VerifyOptions {
                data_root: data_dir,
                time_limit: time_limit_ms.map(Duration::from_millis),
            };
            tasks
                .verify(&task, &options)
                .map(|summary| summary.is_success())
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
