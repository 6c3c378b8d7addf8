use std::path::Path;

use log::{debug, info, warn};

use crate::error::ResolveError;
use crate::process::{pidfile, Pid, ProcessTable};

pub mod membership;

/// Answers "is the target running?" against a process table snapshot.
#[derive(Debug)]
pub struct Resolver<T> {
    table: T,
}

impl<T: ProcessTable> Resolver<T> {
    pub fn new(table: T) -> Self {
        Resolver { table }
    }

    /// With a PID file, presence means the recorded PID is alive; the target
    /// name is not checked against that process. Without one, presence means
    /// some live process has exactly the target name.
    pub fn is_running(&self, target: &str, pid_file: Option<&Path>) -> Result<bool, ResolveError> {
        match pid_file {
            Some(path) => {
                let pid = pidfile::read_pid(path)?;
                let pids = self.live_pids()?;
                info!("looking for PID={pid}");
                Ok(self.pid_is_live(pid, &pids))
            }
            None => {
                let pids = self.live_pids()?;
                let names = self.process_names(&pids);
                let wanted = [target.to_string()];
                Ok(!membership::intersect(&[&names[..], &wanted[..]]).is_empty())
            }
        }
    }

    fn live_pids(&self) -> Result<Vec<Pid>, ResolveError> {
        let pids = self.table.pids().map_err(ResolveError::Enumeration)?;
        info!("there are {} processes running", pids.len());
        Ok(pids)
    }

    fn pid_is_live(&self, pid: Pid, pids: &[Pid]) -> bool {
        if membership::contains(pids, &pid) {
            return true;
        }
        info!("PID={pid} not found");
        info!("found these PIDs={pids:?}");
        false
    }

    //Best effort: processes whose name cannot be read are skipped
    fn process_names(&self, pids: &[Pid]) -> Vec<String> {
        let mut names = Vec::with_capacity(pids.len());
        for &pid in pids {
            match self.table.record(pid) {
                Ok(record) => {
                    debug!("PID={} name={}", record.process_id, record.name);
                    names.push(record.name);
                }
                Err(e) => warn!("error getting name for PID {pid}: {e}"),
            }
        }
        names
    }
}
