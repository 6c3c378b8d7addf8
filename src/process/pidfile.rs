use std::path::Path;

use crate::error::ResolveError;
use crate::process::Pid;

/// Read a PID file holding a single base-10 identifier.
/// Only newlines are stripped; any other surrounding whitespace is a parse error.
pub fn read_pid(path: &Path) -> Result<Pid, ResolveError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ResolveError::PidFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    contents
        .trim_matches('\n')
        .parse::<Pid>()
        .map_err(|source| ResolveError::PidFileParse {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_pidfile(contents: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), contents).unwrap();
        file
    }

    #[test]
    fn test_trailing_newline_is_stripped() {
        let file = write_pidfile("1234\n");
        assert_eq!(read_pid(file.path()).unwrap(), 1234);
    }

    #[test]
    fn test_bare_number() {
        let file = write_pidfile("42");
        assert_eq!(read_pid(file.path()).unwrap(), 42);
    }

    #[test]
    fn test_non_numeric_content_is_parse_error() {
        let file = write_pidfile("abc");
        let err = read_pid(file.path()).unwrap_err();
        assert!(matches!(err, ResolveError::PidFileParse { .. }), "got {err:?}");
    }

    #[test]
    fn test_surrounding_spaces_are_not_trimmed() {
        let file = write_pidfile(" 1234 \n");
        assert!(matches!(
            read_pid(file.path()),
            Err(ResolveError::PidFileParse { .. })
        ));
    }

    #[test]
    fn test_empty_file_is_parse_error() {
        let file = write_pidfile("");
        assert!(matches!(
            read_pid(file.path()),
            Err(ResolveError::PidFileParse { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_pid(&dir.path().join("nope.pid")).unwrap_err();
        assert!(matches!(err, ResolveError::PidFileRead { .. }), "got {err:?}");
        assert!(err.to_string().contains("nope.pid"));
    }
}
