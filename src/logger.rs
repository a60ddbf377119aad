//! `log` 파사드에 `fern` 디스패처를 연결한다.
//!
//! 레벨 결정 순서: CLI 플래그 → `RESTAURANT_ESTIMATOR_LOG_LEVEL` 환경 변수 → config.toml.
//! 경고 이상은 stderr, 나머지는 stdout으로 보낸다.

use chrono::Local;
use fern::colors::{Color, ColoredLevelConfig};
use fern::Dispatch;
use log::LevelFilter;
use std::io::IsTerminal;
use std::sync::OnceLock;

pub const LOG_LEVEL_ENV: &str = "RESTAURANT_ESTIMATOR_LOG_LEVEL";

static LOGGER_INIT: OnceLock<()> = OnceLock::new();

/// 로거 초기화 오류.
#[derive(Debug)]
pub enum LoggerError {
    UnknownLevel(String),
    Install(log::SetLoggerError),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::UnknownLevel(l) => write!(f, "알 수 없는 로그 레벨: {l}"),
            LoggerError::Install(e) => write!(f, "로거 설치 실패: {e}"),
        }
    }
}

impl std::error::Error for LoggerError {}

impl From<log::SetLoggerError> for LoggerError {
    fn from(value: log::SetLoggerError) -> Self {
        LoggerError::Install(value)
    }
}

pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    match level.trim().to_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        other => Err(LoggerError::UnknownLevel(other.to_string())),
    }
}

/// 로거를 한 번만 설치한다. 두 번째 호출은 아무 것도 하지 않는다.
pub fn init(cli_level: Option<&str>, config_level: &str) -> Result<(), LoggerError> {
    if LOGGER_INIT.get().is_some() {
        return Ok(());
    }
    let env_level = std::env::var(LOG_LEVEL_ENV).ok();
    let level = parse_level(
        cli_level
            .or(env_level.as_deref())
            .unwrap_or(config_level),
    )?;

    let colours = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::Magenta);
    let colour_out = std::io::stdout().is_terminal();
    let colour_err = std::io::stderr().is_terminal();

    Dispatch::new()
        .chain(
            Dispatch::new()
                .filter(|meta| meta.level() > LevelFilter::Warn)
                .format(move |out, message, record| {
                    let ts = Local::now().format("%H:%M:%S");
                    if colour_out {
                        out.finish(format_args!(
                            "[{ts} {} {}] {message}",
                            colours.color(record.level()),
                            record.target()
                        ));
                    } else {
                        out.finish(format_args!(
                            "[{ts} {} {}] {message}",
                            record.level(),
                            record.target()
                        ));
                    }
                })
                .level(level)
                .chain(std::io::stdout()),
        )
        .chain(
            Dispatch::new()
                .format(move |out, message, record| {
                    let ts = Local::now().format("%H:%M:%S");
                    if colour_err {
                        out.finish(format_args!(
                            "[{ts} {} {}] {message}",
                            colours.color(record.level()),
                            record.target()
                        ));
                    } else {
                        out.finish(format_args!(
                            "[{ts} {} {}] {message}",
                            record.level(),
                            record.target()
                        ));
                    }
                })
                .level(level.min(LevelFilter::Warn))
                .chain(std::io::stderr()),
        )
        .apply()?;

    let _ = LOGGER_INIT.set(());
    Ok(())
}
