//! Integration tests for logging system

use core_runtime::logging::{redact_if_sensitive, strip_path, LogFormat, LogLevel, LoggingConfig};

#[test]
fn test_logging_configuration() {
    // We can only initialize once per process, so we test the config builder
    let config = LoggingConfig::default()
        .with_format(LogFormat::Json)
        .with_level(LogLevel::Debug)
        .with_spans(true);

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.level, LogLevel::Debug);
    assert!(config.enable_spans);
}

#[test]
fn test_redaction_of_tokens() {
    assert_eq!(
        redact_if_sensitive("access_token", "sensitive_access_token"),
        "[REDACTED]"
    );
    assert_eq!(
        redact_if_sensitive("credential", "ya29.abcdef"),
        "[REDACTED]"
    );
    assert_eq!(
        redact_if_sensitive("Authorization", "Bearer xyz"),
        "[REDACTED]"
    );
}

#[test]
fn test_redaction_of_emails() {
    let redacted = redact_if_sensitive("email", "user@example.com");

    assert!(redacted.starts_with('u'));
    assert!(redacted.contains("[REDACTED]"));
    assert!(!redacted.contains("example.com"));
}

#[test]
fn test_redaction_passes_normal_values() {
    assert_eq!(redact_if_sensitive("entry_id", "12345"), "12345");
    assert_eq!(redact_if_sensitive("folder_id", "abc123"), "abc123");
    assert_eq!(redact_if_sensitive("name", "report.pdf"), "report.pdf");
}

#[test]
fn test_path_stripping() {
    // Unix paths
    assert_eq!(strip_path("/home/user/downloads/report.pdf"), "report.pdf");
    assert_eq!(strip_path("/var/log/app.log"), "app.log");

    // Windows paths
    assert_eq!(strip_path("C:\\Users\\John\\Downloads\\report.pdf"), "report.pdf");
    assert_eq!(strip_path("D:\\data\\file.txt"), "file.txt");

    // Already basename
    assert_eq!(strip_path("filename.txt"), "filename.txt");

    // Edge cases
    assert_eq!(strip_path("/var/log/"), "");
    assert_eq!(strip_path(""), "");
}

#[test]
fn test_format_selection() {
    #[cfg(debug_assertions)]
    {
        let config = LoggingConfig::default();
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[cfg(not(debug_assertions))]
    {
        let config = LoggingConfig::default();
        assert_eq!(config.format, LogFormat::Json);
    }
}

#[test]
fn test_config_chaining() {
    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(LogLevel::Warn)
        .with_filter("core_fetch=debug,provider_google_drive=trace")
        .with_spans(false)
        .with_target(false)
        .with_thread_info(true);

    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.level, LogLevel::Warn);
    assert_eq!(
        config.filter,
        Some("core_fetch=debug,provider_google_drive=trace".to_string())
    );
    assert!(!config.enable_spans);
    assert!(!config.display_target);
    assert!(config.display_thread_info);
}
