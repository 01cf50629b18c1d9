use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

static SINK: OnceLock<Sink> = OnceLock::new();
static LEVEL: OnceLock<LogLevel> = OnceLock::new();

enum Sink {
    Stderr,
    File(Mutex<File>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }
}

/// Install the global sink. Lines go to `log_path` (appended) when given,
/// otherwise to stderr. Only the first call has any effect.
pub fn init(level: LogLevel, log_path: Option<&Path>) -> std::io::Result<()> {
    let sink = match log_path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Sink::File(Mutex::new(file))
        }
        None => Sink::Stderr,
    };
    let _ = SINK.set(sink);
    let _ = LEVEL.set(level);
    debug(&format!("logging initialized at {}", level.as_str()));
    Ok(())
}

fn now_ts() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
    format!("{}.{:03}", now.as_secs(), now.subsec_millis())
}

fn rank(level: LogLevel) -> u8 {
    match level {
        LogLevel::Trace => 0,
        LogLevel::Debug => 1,
        LogLevel::Info => 2,
        LogLevel::Warn => 3,
        LogLevel::Error => 4,
    }
}

fn enabled(level: LogLevel) -> bool {
    let min = *LEVEL.get_or_init(|| LogLevel::Warn);
    rank(level) >= rank(min)
}

fn format_line(level: LogLevel, msg: &str) -> String {
    format!("{} [{}] {}", now_ts(), level.as_str(), msg)
}

fn write_line(level: LogLevel, msg: &str) {
    match SINK.get() {
        Some(Sink::Stderr) => eprintln!("{}", format_line(level, msg)),
        Some(Sink::File(m)) => {
            if let Ok(mut f) = m.lock() {
                let _ = writeln!(f, "{}", format_line(level, msg));
                let _ = f.flush();
            }
        }
        None => {}
    }
}

fn log(level: LogLevel, msg: &str) {
    if enabled(level) {
        write_line(level, msg);
    }
}

pub fn error(msg: &str) {
    log(LogLevel::Error, msg);
}
pub fn warn(msg: &str) {
    log(LogLevel::Warn, msg);
}
pub fn info(msg: &str) {
    log(LogLevel::Info, msg);
}
pub fn debug(msg: &str) {
    log(LogLevel::Debug, msg);
}
pub fn trace(msg: &str) {
    log(LogLevel::Trace, msg);
}
