use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::reporter::cloudwatch::DEFAULT_REGION;

#[derive(Debug, Parser)]
#[command(name = "procmetric", version, about = "Report process presence as a CloudWatch metric")]
pub struct Cli {
    /// Minimum level of log lines written to stdout
    #[arg(long, global = true, default_value = "info")]
    pub log_level: log::Level,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// push metrics to cloudwatch
    Push(PushArgs),
}

#[derive(Debug, Args)]
pub struct PushArgs {
    /// Name of the process to look for
    #[arg(value_name = "PROCESSNAME")]
    pub name: String,

    /// dry run
    #[arg(short = 'd', long = "dryrun")]
    pub dry_run: bool,

    /// PID file
    #[arg(short = 'f', long = "pidfile", value_name = "PATH")]
    pub pid_file: Option<PathBuf>,

    /// AWS region to push the metric to
    #[arg(long, env = "AWS_REGION", default_value = DEFAULT_REGION)]
    pub region: String,
}

/// Everything one run needs, fixed once the arguments are parsed.
#[derive(Debug)]
pub struct TargetSpec {
    pub name: String,
    pub pid_file: Option<PathBuf>,
    pub dry_run: bool,
    pub region: String,
}

impl From<PushArgs> for TargetSpec {
    fn from(args: PushArgs) -> Self {
        TargetSpec {
            name: args.name,
            pid_file: args.pid_file,
            dry_run: args.dry_run,
            region: args.region,
        }
    }
}
