//! 계산 결과를 사람이 읽는 문장으로 바꾼다. 수치 계산은 하지 않는다.

use crate::estimate::{Advisory, AreaSource, Estimate};
use crate::i18n::{keys, Translator};
use crate::model::{Industry, Scenario, UnitType, VisitInput};
use crate::numeric::finite_or_zero;

/// 천 단위 구분 기호를 넣은 정수 엔화 표기. 예: `¥312,000`, `-¥5,000`
pub fn format_yen(value: f64) -> String {
    let rounded = finite_or_zero(value).round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}¥{}", group_thousands(rounded.abs() as u64))
}

/// 비율(0.3)을 백분율 문자열(`30.0%`)로 바꾼다.
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", finite_or_zero(ratio) * 100.0)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn industry_label(tr: &Translator, industry: Industry) -> &str {
    tr.t(match industry {
        Industry::Izakaya => keys::INDUSTRY_IZAKAYA,
        Industry::Yakiniku => keys::INDUSTRY_YAKINIKU,
        Industry::Sushi => keys::INDUSTRY_SUSHI,
        Industry::Ramen => keys::INDUSTRY_RAMEN,
        Industry::Cafe => keys::INDUSTRY_CAFE,
        Industry::Bistro => keys::INDUSTRY_BISTRO,
    })
}

pub fn scenario_label(tr: &Translator, scenario: Scenario) -> &str {
    tr.t(match scenario {
        Scenario::Low => keys::SCENARIO_LOW,
        Scenario::Standard => keys::SCENARIO_STANDARD,
        Scenario::High => keys::SCENARIO_HIGH,
    })
}

pub fn advisory_text(tr: &Translator, advisory: Advisory) -> &str {
    tr.t(match advisory {
        Advisory::FlAboveGuideline => keys::ADVISORY_FL,
        Advisory::FlrAboveGuideline => keys::ADVISORY_FLR,
        Advisory::AdSpendNotRecovered => keys::ADVISORY_AD,
        Advisory::BaselineLoss => keys::ADVISORY_BASELINE_LOSS,
        Advisory::RentRatioCapped => keys::ADVISORY_RENT_CAPPED,
    })
}

/// 클립보드 복사용 요약 문장을 만든다.
pub fn summary_text(input: &VisitInput, estimate: &Estimate, tr: &Translator) -> String {
    let input = input.sanitized();
    let rent = &estimate.rent_estimate;
    let p = &estimate.projection;
    let rates = &estimate.effective_rates;

    let address = match input.address.trim() {
        "" => tr.t(keys::SUMMARY_ADDRESS_BLANK).to_string(),
        a => a.to_string(),
    };
    let source = match estimate.area.source {
        AreaSource::Detected => tr.t(keys::SUMMARY_AREA_DETECTED),
        AreaSource::Selected => tr.t(keys::SUMMARY_AREA_SELECTED),
    };
    let unit = match input.unit_type {
        UnitType::PerPerson => tr.t(keys::SUMMARY_PER_PERSON),
        UnitType::PerGroup => tr.t(keys::SUMMARY_PER_GROUP),
    };

    let mut lines = vec![
        tr.t(keys::SUMMARY_TITLE).to_string(),
        tr.fill(keys::SUMMARY_ADDRESS, &[("address", address)]),
        tr.fill(
            keys::SUMMARY_INDUSTRY,
            &[
                ("industry", industry_label(tr, input.industry).to_string()),
                ("scenario", scenario_label(tr, input.scenario).to_string()),
            ],
        ),
        tr.fill(
            keys::SUMMARY_AREA,
            &[
                ("area", rent.area_label.clone()),
                ("source", source.to_string()),
            ],
        ),
        tr.fill(
            keys::SUMMARY_RENT,
            &[
                ("rent", format_yen(rent.estimated_monthly_rent)),
                ("tsubo", format!("{:.1}", rent.estimated_tsubo)),
                ("per_tsubo", format_yen(rent.rent_per_tsubo)),
                ("ratio", format_percent(rent.suggested_rent_ratio)),
            ],
        ),
        tr.fill(
            keys::SUMMARY_TARGET,
            &[
                ("groups", format!("{}", input.add_groups_per_day)),
                ("people", input.people_per_group.to_string()),
                ("days", input.days_per_month.to_string()),
            ],
        ),
        tr.fill(
            keys::SUMMARY_UNIT_PRICE,
            &[
                ("price", format_yen(input.unit_price)),
                ("unit", unit.to_string()),
            ],
        ),
        tr.fill(
            keys::SUMMARY_REVENUE,
            &[
                ("daily", format_yen(p.incremental_revenue_daily)),
                ("monthly", format_yen(p.incremental_revenue_monthly)),
            ],
        ),
        tr.fill(
            keys::SUMMARY_PROFIT,
            &[
                ("gross", format_yen(p.incremental_gross_profit)),
                ("after_labor", format_yen(p.after_labor)),
                ("after_rent", format_yen(p.after_rent)),
            ],
        ),
    ];

    if input.ad_spend > 0.0 {
        lines.push(tr.fill(
            keys::SUMMARY_AD_PAYBACK,
            &[
                ("ad", format_yen(input.ad_spend)),
                ("roas", format!("{:.2}", p.roas)),
                ("gp_roas", format!("{:.2}", p.gross_profit_roas)),
                ("breakeven", format!("{:.2}", p.breakeven_groups_per_day)),
            ],
        ));
    } else {
        lines.push(tr.t(keys::SUMMARY_AD_NONE).to_string());
    }

    lines.push(tr.fill(
        keys::SUMMARY_RATIOS,
        &[
            ("fl", format_percent(p.fl)),
            ("flr", format_percent(p.flr)),
            ("food", format_percent(rates.food)),
            ("labor", format_percent(rates.labor)),
            ("rent", format_percent(rates.rent)),
        ],
    ));

    if let Some(b) = &p.baseline {
        lines.push(tr.fill(
            keys::SUMMARY_BASELINE,
            &[
                ("revenue", format_yen(b.monthly_revenue)),
                ("profit", format_yen(b.operating_profit_approx)),
            ],
        ));
    }

    if !estimate.advisories.is_empty() {
        lines.push(tr.t(keys::SUMMARY_NOTES).to_string());
        lines.extend(
            estimate
                .advisories
                .iter()
                .map(|a| format!("- {}", advisory_text(tr, *a))),
        );
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yen_grouping() {
        assert_eq!(format_yen(0.0), "¥0");
        assert_eq!(format_yen(999.4), "¥999");
        assert_eq!(format_yen(312_000.0), "¥312,000");
        assert_eq!(format_yen(1_234_567.6), "¥1,234,568");
        assert_eq!(format_yen(-5_000.0), "-¥5,000");
        assert_eq!(format_yen(f64::NAN), "¥0");
    }

    #[test]
    fn percent_one_decimal() {
        assert_eq!(format_percent(0.3), "30.0%");
        assert_eq!(format_percent(0.7133), "71.3%");
    }
}
