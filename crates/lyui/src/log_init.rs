use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::fs::OpenOptions;
use std::io::Write;

/// Appends records of the style engine crates to a file.
struct FileLogger {
    file_path: String,
    level: LevelFilter,
}

/// Only records from `lystyle` and `lyui` are written; the host application
/// keeps its own logging.
fn is_engine_target(target: &str) -> bool {
    ["lystyle", "lyui"].iter().any(|name| {
        target
            .strip_prefix(name)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
    })
}

fn format_line(record: &Record) -> String {
    format!("[{}] {}: {}", record.level(), record.target(), record.args())
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && is_engine_target(metadata.target())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)
        {
            let _ = writeln!(file, "{}", format_line(record));
        }
    }

    fn flush(&self) {}
}

/// Appends style engine logs (debug and above) to the file at `path`.
///
/// Fails if a logger has already been installed.
pub fn init_logger(path: &str) -> Result<(), SetLoggerError> {
    init_logger_with_level(path, LevelFilter::Debug)
}

/// Like [`init_logger`], with `trace` for per-rule serialization output.
pub fn init_logger_with_level(path: &str, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = FileLogger {
        file_path: path.to_string(),
        level,
    };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_engine_targets() {
        assert!(is_engine_target("lyui"));
        assert!(is_engine_target("lyui::registry"));
        assert!(is_engine_target("lystyle::serializer"));
        assert!(!is_engine_target("lyuikit"));
        assert!(!is_engine_target("app::view"));
    }

    #[test]
    fn test_line_format() {
        let line = format_line(
            &Record::builder()
                .level(Level::Warn)
                .target("lyui::facade")
                .args(format_args!("frame task failed"))
                .build(),
        );
        assert_eq!(line, "[WARN] lyui::facade: frame task failed");
    }

    #[test]
    fn test_level_filter() {
        let logger = FileLogger {
            file_path: String::new(),
            level: LevelFilter::Info,
        };
        fn metadata(level: Level, target: &str) -> Metadata<'_> {
            Metadata::builder().level(level).target(target).build()
        }
        assert!(log::Log::enabled(&logger, &metadata(Level::Info, "lyui")));
        assert!(!log::Log::enabled(&logger, &metadata(Level::Debug, "lyui")));
        assert!(!log::Log::enabled(&logger, &metadata(Level::Error, "app")));
    }
}
