use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::AppError;
use crate::config::DEFAULT_CONFIG_PATH;
use crate::estimate::{self, Estimate, Tuning};
use crate::i18n::{keys, Translator};
use crate::model::{
    AreaKey, Industry, Scenario, StationDistance, TradeArea, UnitType, VisitInput,
};
use crate::report::{self, format_percent, format_yen};
use crate::tables;

/// 음식점 컨설팅 방문 전 견적 계산기.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// 출력 언어 (auto/ko/en/ja)
    #[arg(long, short = 'L', global = true)]
    pub lang: Option<String>,
    /// 언어팩(<lang>.toml) 디렉터리
    #[arg(long, global = true)]
    pub locales: Option<PathBuf>,
    /// 로그 레벨 (off/error/warn/info/debug/trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 입력값으로 견적을 계산한다.
    Estimate(EstimateArgs),
    /// 주소에서 지역 등급을 판정한다.
    Resolve {
        /// 자유 형식 주소
        address: String,
    },
    /// 업종별 기준 원가율 테이블을 출력한다.
    Presets,
    /// 지역 등급과 보정 계수를 출력한다.
    Areas,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Toml,
}

/// 견적 입력. `--input` 파일을 먼저 읽고 플래그로 덮어쓴다.
#[derive(Debug, Default, Args)]
pub struct EstimateArgs {
    /// 입력 레코드 TOML 파일
    #[arg(long)]
    pub input: Option<PathBuf>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long, value_enum)]
    pub industry: Option<Industry>,
    #[arg(long, value_enum)]
    pub scenario: Option<Scenario>,
    #[arg(long, value_enum)]
    pub unit_type: Option<UnitType>,
    /// 단가 [엔]
    #[arg(long)]
    pub unit_price: Option<f64>,
    #[arg(long)]
    pub people_per_group: Option<u32>,
    /// 목표 추가 팀 수 / 일
    #[arg(long)]
    pub add_groups: Option<f64>,
    #[arg(long)]
    pub seats: Option<u32>,
    /// 월 광고비 [엔]
    #[arg(long)]
    pub ad_spend: Option<f64>,
    #[arg(long)]
    pub days: Option<u32>,
    #[arg(long)]
    pub occupancy: Option<f64>,
    #[arg(long)]
    pub turnover: Option<f64>,
    /// 현재 매출 추정을 끈다
    #[arg(long)]
    pub no_baseline: bool,
    /// 지역 등급을 직접 지정한다 (주소 자동 판정 끔)
    #[arg(long, value_enum)]
    pub area: Option<AreaKey>,
    #[arg(long, value_enum)]
    pub station: Option<StationDistance>,
    #[arg(long, value_enum)]
    pub trade_area: Option<TradeArea>,
    #[arg(long)]
    pub seats_per_tsubo: Option<f64>,
    /// 임대료 추정치로 임대료율을 자동 설정하지 않는다
    #[arg(long)]
    pub no_auto_rent: bool,
    /// 식재료비율 직접 입력 (지정 시 수동 모드)
    #[arg(long)]
    pub food: Option<f64>,
    /// 인건비율 직접 입력 (지정 시 수동 모드)
    #[arg(long)]
    pub labor: Option<f64>,
    /// 임대료율 직접 입력 (지정 시 수동 모드)
    #[arg(long)]
    pub rent: Option<f64>,
    /// 결과 형식
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// 세 시나리오를 모두 계산해 비교한다
    #[arg(long)]
    pub compare: bool,
}

impl EstimateArgs {
    /// 입력 파일(없으면 기본값)에 플래그를 덮어쓴 입력 레코드를 만든다.
    pub fn to_input(&self) -> Result<VisitInput, AppError> {
        let base = match &self.input {
            Some(path) => read_input_file(path)?,
            None => VisitInput::default(),
        };
        Ok(self.apply(base))
    }

    fn apply(&self, mut v: VisitInput) -> VisitInput {
        if let Some(a) = &self.address {
            v.address = a.clone();
        }
        if let Some(x) = self.industry {
            v.industry = x;
        }
        if let Some(x) = self.scenario {
            v.scenario = x;
        }
        if let Some(x) = self.unit_type {
            v.unit_type = x;
        }
        if let Some(x) = self.unit_price {
            v.unit_price = x;
        }
        if let Some(x) = self.people_per_group {
            v.people_per_group = x;
        }
        if let Some(x) = self.add_groups {
            v.add_groups_per_day = x;
        }
        if let Some(x) = self.seats {
            v.seats = x;
        }
        if let Some(x) = self.ad_spend {
            v.ad_spend = x;
        }
        if let Some(x) = self.days {
            v.days_per_month = x;
        }
        if let Some(x) = self.occupancy {
            v.occupancy = x;
        }
        if let Some(x) = self.turnover {
            v.turnover = x;
        }
        if self.no_baseline {
            v.use_baseline = false;
        }
        if let Some(x) = self.area {
            v.area = x;
            v.auto_detect_area = false;
        }
        if let Some(x) = self.station {
            v.station_distance = x;
        }
        if let Some(x) = self.trade_area {
            v.trade_area = x;
        }
        if let Some(x) = self.seats_per_tsubo {
            v.seats_per_tsubo = x;
        }
        if self.no_auto_rent {
            v.auto_set_rent_rate = false;
        }
        if self.food.is_some() || self.labor.is_some() || self.rent.is_some() {
            v.manual_rates = true;
        }
        if let Some(x) = self.food {
            v.food_rate = x;
        }
        if let Some(x) = self.labor {
            v.labor_rate = x;
        }
        if let Some(x) = self.rent {
            v.rent_rate = x;
        }
        v
    }
}

fn read_input_file(path: &Path) -> Result<VisitInput, AppError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(AppError::Input)
}

#[derive(Serialize)]
struct ScenarioRow<'a> {
    scenario: Scenario,
    estimate: &'a Estimate,
}

#[derive(Serialize)]
struct Comparison<'a> {
    comparison: Vec<ScenarioRow<'a>>,
}

/// 견적 계산 명령을 처리한다.
pub fn handle_estimate(args: &EstimateArgs, tuning: &Tuning, tr: &Translator) -> Result<(), AppError> {
    let input = args.to_input()?;
    log::info!(
        "estimating {} / {} at {:?}",
        input.industry.code(),
        input.scenario.code(),
        input.address
    );

    if args.compare {
        let rows = estimate::compare_scenarios(&input, tuning);
        match args.format {
            OutputFormat::Toml => {
                let doc = Comparison {
                    comparison: rows
                        .iter()
                        .map(|(scenario, estimate)| ScenarioRow {
                            scenario: *scenario,
                            estimate,
                        })
                        .collect(),
                };
                print!("{}", toml::to_string_pretty(&doc).map_err(AppError::Output)?);
            }
            OutputFormat::Text => {
                println!("{}", tr.t(keys::COMPARE_HEADING));
                for (scenario, e) in &rows {
                    println!(
                        "  {:<6} FLR {:>6}  +{} / {}  BE {:.2}",
                        report::scenario_label(tr, *scenario),
                        format_percent(e.projection.flr),
                        format_yen(e.projection.incremental_gross_profit),
                        format_yen(e.projection.after_rent),
                        e.projection.breakeven_groups_per_day
                    );
                }
            }
        }
        return Ok(());
    }

    let result = estimate::compute(&input, tuning);
    match args.format {
        OutputFormat::Toml => {
            print!("{}", toml::to_string_pretty(&result).map_err(AppError::Output)?);
        }
        OutputFormat::Text => println!("{}", report::summary_text(&input, &result, tr)),
    }
    Ok(())
}

/// 주소 판정 명령을 처리한다.
pub fn handle_resolve(address: &str, tr: &Translator) {
    match estimate::area_resolver::resolve(address, tables::tiers()) {
        Some(key) => println!(
            "{}",
            tr.fill(
                keys::RESOLVE_MATCH,
                &[
                    ("area", tables::tier(key).label.to_string()),
                    ("key", key.code().to_string()),
                ],
            )
        ),
        None => println!("{}", tr.t(keys::RESOLVE_NONE)),
    }
}

pub fn handle_presets(tr: &Translator) {
    println!("{}", tr.t(keys::PRESETS_HEADING));
    for row in tables::presets() {
        let cells: Vec<String> = Scenario::ALL
            .iter()
            .map(|s| {
                let r = tables::preset(row.industry, *s);
                format!(
                    "{}: {} / {} / {}",
                    report::scenario_label(tr, *s),
                    format_percent(r.food),
                    format_percent(r.labor),
                    format_percent(r.rent)
                )
            })
            .collect();
        println!(
            "  {:<10} {}",
            report::industry_label(tr, row.industry),
            cells.join("   ")
        );
    }
}

pub fn handle_areas(tuning: &Tuning, tr: &Translator) {
    println!("{}", tr.t(keys::AREAS_HEADING));
    for tier in tables::tiers() {
        println!(
            "  {:<13} {:<24} {}",
            tier.key.code(),
            tier.label,
            format_yen(tuning.base_rent_per_tsubo(tier.key))
        );
    }
    let s = &tuning.station_factors;
    println!("{}", tr.t(keys::AREAS_STATION));
    println!(
        "  adjacent {:.2}  near {:.2}  walkable {:.2}  moderate {:.2}  far {:.2}",
        s.adjacent, s.near, s.walkable, s.moderate, s.far
    );
    let a = &tuning.trade_area_factors;
    println!("{}", tr.t(keys::AREAS_TRADE));
    println!(
        "  downtown {:.2}  office {:.2}  tourist {:.2}  residential {:.2}  roadside {:.2}",
        a.downtown, a.office, a.tourist, a.residential, a.roadside
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "restaurant_estimator",
            "estimate",
            "--industry",
            "yakiniku",
            "--unit-type",
            "per_group",
            "--unit-price",
            "12000",
            "--area",
            "osaka_core",
            "--rent",
            "0.12",
        ])
        .expect("parse");
        let Command::Estimate(args) = cli.command else {
            panic!("expected estimate");
        };
        let input = args.apply(VisitInput::default());
        assert_eq!(input.industry, Industry::Yakiniku);
        assert_eq!(input.unit_type, UnitType::PerGroup);
        assert_eq!(input.area, AreaKey::OsakaCore);
        assert!(!input.auto_detect_area);
        assert!(input.manual_rates);
        assert_eq!(input.rent_rate, 0.12);
        assert_eq!(input.food_rate, VisitInput::default().food_rate);
    }

    #[test]
    fn no_flags_keep_defaults() {
        let args = EstimateArgs::default();
        assert_eq!(args.apply(VisitInput::default()), VisitInput::default());
    }
}
