use crate::config::{self, Config};
use crate::i18n::{self, Translator};
use crate::logger;
use crate::ui_cli::{self, Cli, Command};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(config::ConfigError),
    /// 로거 초기화 오류
    Logger(logger::LoggerError),
    /// 입력 파일 파싱 오류
    Input(toml::de::Error),
    /// 결과 직렬화 오류
    Output(toml::ser::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Logger(e) => write!(f, "로그 설정 오류: {e}"),
            AppError::Input(e) => write!(f, "입력 파일 오류: {e}"),
            AppError::Output(e) => write!(f, "출력 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(value: config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<logger::LoggerError> for AppError {
    fn from(value: logger::LoggerError) -> Self {
        AppError::Logger(value)
    }
}

/// 설정과 로거를 준비한 뒤 명령을 실행한다.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let cfg: Config = config::load_or_default(&cli.config)?;
    logger::init(cli.log_level.as_deref(), &cfg.log_level)?;
    log::debug!("config loaded from {}", cli.config.display());

    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cli.locales.as_deref());

    match &cli.command {
        Command::Estimate(args) => ui_cli::handle_estimate(args, &cfg.tuning, &tr)?,
        Command::Resolve { address } => ui_cli::handle_resolve(address, &tr),
        Command::Presets => ui_cli::handle_presets(&tr),
        Command::Areas => ui_cli::handle_areas(&cfg.tuning, &tr),
    }
    Ok(())
}
