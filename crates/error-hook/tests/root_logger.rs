use clap::Parser;
use error_hook::LoggingOpts;
use std::fs;
use std::sync::Arc;

#[derive(Debug, Parser)]
struct Cli {
    #[clap(flatten)]
    logging: LoggingOpts,
}

#[test]
fn hooked_root_logger() {
    let cli = Cli::parse_from(["cli", "--warn", "--console", "plain", "--discard-output"]);
    let logger = cli.logging.init_root_logger().unwrap();
    if !log::log_enabled!(log::Level::Warn) {
        panic!("log level warn must be enabled")
    }
    assert!(!log::log_enabled!(log::Level::Info));

    let file = tempfile::NamedTempFile::new().unwrap();
    let hook = cli
        .logging
        .error_hook(&logger, file.reopen().unwrap(), None);
    logger.add_hook(Arc::new(hook));
    assert!(logger.out().is_discarded());

    log::warn!("not hooked");
    log::error!("disk on fire");

    let contents = fs::read_to_string(file.path()).unwrap();
    assert!(contents.contains("error: disk on fire"), "{contents}");
    assert!(!contents.contains("not hooked"));
}
