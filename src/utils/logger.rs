use log::{LevelFilter, Metadata, Record};

lazy_static! {
    static ref LOGGER: Logger = Logger::new();
}

/// Installs the crate logger. Calling it again is a no-op.
pub fn init() {
    if log::set_logger(Logger::global()).is_err() {
        return;
    }

    log::set_max_level(level_from_env(std::env::var("LOG_LEVEL").ok().as_deref()));

    debug!("Current log level: {}", log::max_level());
    debug!("Logger Initialized.");
}

fn level_from_env(value: Option<&str>) -> LevelFilter {
    match value {
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

struct Logger {
    output: fn(&str),
}

impl Logger {
    fn new() -> Self {
        Logger {
            output: |message| eprintln!("{}", message),
        }
    }

    pub fn global() -> &'static Logger {
        &LOGGER
    }

    fn get_formatted_message(&self, record: &Record) -> String {
        match record.level() {
            log::Level::Error => format!(
                "[Err] {}@{}: {}",
                record.file_static().unwrap_or(""),
                record.line().unwrap_or(0),
                record.args()
            ),
            log::Level::Warn => format!("[Wrn] {}", record.args()),
            log::Level::Info => format!("[Inf] {}", record.args()),
            log::Level::Debug => format!("[Dug] {}", record.args()),
            log::Level::Trace => format!("[Vrb] {}", record.args()),
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            (self.output)(&self.get_formatted_message(record));
        }
    }

    fn flush(&self) {}
}
