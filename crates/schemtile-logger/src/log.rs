use crate::severity::LogSeverity;
use crate::systime::now;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicU8, Ordering};

/// Environment variable holding the minimum severity to print
pub const LOG_ENV: &str = "SCHEMTILE_LOG";

static MIN_SEVERITY: Lazy<AtomicU8> = Lazy::new(|| {
    let severity = std::env::var(LOG_ENV)
        .ok()
        .and_then(|value| value.parse::<LogSeverity>().ok())
        .unwrap_or(LogSeverity::Info);
    AtomicU8::new(severity.as_u8())
});

pub fn min_severity() -> LogSeverity {
    LogSeverity::from_u8(MIN_SEVERITY.load(Ordering::Relaxed))
}

pub fn set_min_severity(severity: LogSeverity) {
    MIN_SEVERITY.store(severity.as_u8(), Ordering::Relaxed);
}

pub fn enabled(severity: LogSeverity) -> bool {
    severity >= min_severity()
}

pub(crate) fn format_line(msg: &str, severity: LogSeverity, time: &str) -> String {
    format!("[{}] {} {}", severity, time, msg)
}

pub fn log(msg: String, log_severity: LogSeverity) {
    if !enabled(log_severity) {
        return;
    }
    let line = format_line(&msg, log_severity, &now());
    if log_severity.is_failure() {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line("Finished", LogSeverity::Info, "2024-01-01 00:00:00 UTC"),
            "[INFO] 2024-01-01 00:00:00 UTC Finished"
        );
    }

    #[test]
    fn test_min_severity_filter() {
        set_min_severity(LogSeverity::Warning);
        assert!(!enabled(LogSeverity::Info));
        assert!(enabled(LogSeverity::Warning));
        assert!(enabled(LogSeverity::Fatal));

        set_min_severity(LogSeverity::Debug);
        assert!(enabled(LogSeverity::Debug));
        assert_eq!(min_severity(), LogSeverity::Debug);
    }
}
