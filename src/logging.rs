use flexi_logger::{Duplicate, FileSpec, Logger, LoggerHandle};

use crate::error::Result;

/// logs to `logs/` with size based rotation, warnings are copied to stderr.
/// The returned handle must stay alive for as long as logging is wanted
pub fn setup_logging(base_level: &str) -> Result<LoggerHandle> {
    let handle = Logger::try_with_str(base_level)?
        .log_to_file(FileSpec::default().directory("logs"))
        .duplicate_to_stderr(Duplicate::Warn)
        .rotate(
            flexi_logger::Criterion::Size(1024 * 1024), //1MB
            flexi_logger::Naming::Timestamps,
            flexi_logger::Cleanup::KeepLogFiles(5),
        )
        .start()?;
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StarMapError;

    #[test]
    fn test_bad_level_is_an_error() {
        assert!(matches!(
            setup_logging("verbose=="),
            Err(StarMapError::Logger(_))
        ));
    }
}
