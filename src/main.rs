mod cli;
mod error;
mod process;
mod reporter;
mod resolver;

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use cli::{Cli, Command, TargetSpec};
use process::ProcfsTable;
use reporter::cloudwatch::CloudWatchSink;
use reporter::Reporter;
use resolver::Resolver;

fn main() -> ExitCode {
    // Usage errors exit here, before any other work
    let cli = Cli::parse();

    if let Err(e) = simple_logger::init_with_level(cli.log_level) {
        eprintln!("cannot initialise logging: {e}");
        return ExitCode::FAILURE;
    }

    match cli.command {
        Command::Push(args) => push(args.into()),
    }
}

fn push(spec: TargetSpec) -> ExitCode {
    info!("dryrun={}", spec.dry_run);

    let resolver = Resolver::new(ProcfsTable);
    let running = match resolver.is_running(&spec.name, spec.pid_file.as_deref()) {
        Ok(running) => running,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if running {
        info!("{} is running", spec.name);
        let reporter = Reporter::new(spec.dry_run, || CloudWatchSink::connect(&spec.region));
        reporter.report(&spec.name, 1.0);
    } else {
        error!("{} is not running", spec.name);
    }

    ExitCode::SUCCESS
}
