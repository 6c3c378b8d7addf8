use procfs::{
    process::Process as ProcfsProcess,
    ProcResult,
};

pub mod pidfile;

/// Process identifier as the kernel reports it in /proc.
pub type Pid = i32;

/// A live process, snapshotted from the process table for this run only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    pub process_id: Pid,
    pub name: String,
}

impl TryFrom<Pid> for ProcessRecord {
    type Error = procfs::ProcError;

    fn try_from(pid: Pid) -> Result<Self, Self::Error> {
        let procfs_proc = ProcfsProcess::new(pid)?;
        let stat = procfs_proc.stat()?;

        Ok(ProcessRecord {
            process_id: pid,
            name: stat.comm,
        })
    }
}

/// Read-only view of the OS process table.
pub trait ProcessTable {
    /// Identifiers of every process alive at the time of the call.
    fn pids(&self) -> ProcResult<Vec<Pid>>;

    /// Resolve one identifier to its record. Fails if the process vanished
    /// or its stat file is unreadable.
    fn record(&self, pid: Pid) -> ProcResult<ProcessRecord>;
}

/// The Linux process table, read through /proc.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcfsTable;

impl ProcessTable for ProcfsTable {
    fn pids(&self) -> ProcResult<Vec<Pid>> {
        let mut pids = Vec::new();
        for p in procfs::process::all_processes()? {
            match p {
                Ok(p) => pids.push(p.pid),
                Err(e) => log::debug!("skipping unreadable /proc entry: {e}"), //Listing errors only
            }
        }
        Ok(pids)
    }

    fn record(&self, pid: Pid) -> ProcResult<ProcessRecord> {
        ProcessRecord::try_from(pid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_procfs_table_contains_self() {
        let me = std::process::id() as Pid;
        let pids = ProcfsTable.pids().unwrap();
        assert!(pids.contains(&me), "own pid {me} missing from /proc listing");
    }

    #[test]
    fn test_record_for_self_has_comm_name() {
        let me = std::process::id() as Pid;
        let record = ProcfsTable.record(me).unwrap();
        assert_eq!(record.process_id, me);
        assert!(!record.name.is_empty());
        // comm is truncated by the kernel to 15 bytes
        assert!(record.name.len() <= 15);
    }

    #[test]
    fn test_record_for_missing_pid_fails() {
        // pid_max never reaches i32::MAX
        assert!(ProcfsTable.record(i32::MAX).is_err());
    }
}
