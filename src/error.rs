use std::num::ParseIntError;
use std::path::PathBuf;

use procfs::ProcError;
use thiserror::Error;

/// Fatal failures while deciding whether the target is running.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("cannot read PID file {}: {source}", .path.display())]
    PidFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse PID from file {}: {source}", .path.display())]
    PidFileParse {
        path: PathBuf,
        #[source]
        source: ParseIntError,
    },

    #[error("cannot read pids: {0}")]
    Enumeration(#[source] ProcError),
}

/// Metric push failures. Logged by the reporter, never propagated further.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("cannot start metrics client runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("error pushing metrics: {0}")]
    Api(String),
}
