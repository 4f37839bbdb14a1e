use crate::domain::model::{CalculationReport, CalculationResult, DailyVariation};
use crate::utils::error::{CalcError, Result};
use crate::utils::format::{format_amount, format_percent};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

pub fn render(report: &CalculationReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(report)),
        OutputFormat::Csv => render_csv(report),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

fn render_table(report: &CalculationReport) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = writeln!(
        out,
        "Amount: $ {}  |  Days: {}",
        format_amount(report.principal),
        report.days
    );
    if let Some(updated) = report.rates_updated_at {
        let _ = writeln!(out, "Rates updated: {}", updated.format("%Y-%m-%d %H:%M UTC"));
    }

    write_section(&mut out, "Fixed-term deposits (TNA)", &report.deposits);
    let fund_title = if report.simple_interest_for_funds {
        "Mutual funds (simple interest)"
    } else {
        "Mutual funds (compound interest)"
    };
    write_section(&mut out, fund_title, &report.funds);

    if let (Some(deposit), Some(fund)) = (&report.best_deposit, &report.best_fund) {
        let winner = if fund.final_capital > deposit.final_capital {
            fund
        } else {
            deposit
        };
        let _ = writeln!(
            out,
            "\nBest option: {} ($ {})",
            winner.name,
            format_amount(winner.final_capital)
        );
    }

    out
}

fn write_section(out: &mut String, title: &str, results: &[CalculationResult]) {
    let _ = writeln!(out, "\n{}", title);
    if results.is_empty() {
        let _ = writeln!(out, "  (no data available)");
        return;
    }

    let name_width = results
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let _ = writeln!(
        out,
        "  {:>3}  {:<name_width$}  {:>16}  {:>18}",
        "#", "Name", "Interest", "Final capital"
    );
    for (i, r) in results.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>3}  {:<name_width$}  {:>16}  {:>18}",
            i + 1,
            r.name,
            format_amount(r.interest_earned),
            format_amount(r.final_capital)
        );
    }
}

fn render_csv(report: &CalculationReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["kind", "rank", "name", "interest_earned", "final_capital"])?;

    for results in [&report.deposits, &report.funds] {
        for (i, r) in results.iter().enumerate() {
            writer.write_record([
                r.kind.as_str().to_string(),
                (i + 1).to_string(),
                r.name.clone(),
                format!("{:.2}", r.interest_earned),
                format!("{:.2}", r.final_capital),
            ])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CalcError::IoError(std::io::Error::new(e.error().kind(), e.to_string())))?;
    String::from_utf8(bytes).map_err(|e| CalcError::ConfigError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

/// Month-to-date FCI variations as a small text listing.
pub fn render_variations(variations: &[DailyVariation], estimated_today: Option<f64>) -> String {
    let mut out = String::from("\nFCI daily variation (month to date)\n");
    if variations.is_empty() {
        out.push_str("  (no quotes this month)\n");
    }
    for v in variations {
        let _ = writeln!(out, "  {}  {:>8}", v.date, format_percent(v.change_pct));
    }
    if let Some(value) = estimated_today {
        let _ = writeln!(out, "Estimated value today: $ {}", format_amount(value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::InstrumentKind;
    use chrono::NaiveDate;

    fn report() -> CalculationReport {
        let deposit = CalculationResult {
            name: "Banco Nación".to_string(),
            kind: InstrumentKind::Deposit,
            interest_earned: 3287.671,
            final_capital: 103_287.671,
        };
        let fund = CalculationResult {
            name: "Fondo, Ahorro".to_string(),
            kind: InstrumentKind::Fund,
            interest_earned: 3000.0,
            final_capital: 103_000.0,
        };
        CalculationReport {
            principal: 100_000.0,
            days: 30,
            simple_interest_for_funds: false,
            rates_updated_at: None,
            deposits: vec![deposit.clone()],
            funds: vec![fund.clone()],
            best_deposit: Some(deposit),
            best_fund: Some(fund),
        }
    }

    #[test]
    fn test_render_table() {
        let out = render(&report(), OutputFormat::Table).unwrap();
        assert!(out.contains("Amount: $ 100.000,00"));
        assert!(out.contains("Banco Nación"));
        assert!(out.contains("103.287,67"));
        assert!(out.contains("Mutual funds (compound interest)"));
        assert!(out.contains("Best option: Banco Nación"));
    }

    #[test]
    fn test_render_table_with_empty_sections() {
        let mut empty = report();
        empty.deposits.clear();
        empty.best_deposit = None;
        let out = render(&empty, OutputFormat::Table).unwrap();
        assert!(out.contains("(no data available)"));
        assert!(!out.contains("Best option"));
    }

    #[test]
    fn test_render_csv_quotes_names() {
        let out = render(&report(), OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "kind,rank,name,interest_earned,final_capital");
        assert_eq!(lines[1], "deposit,1,Banco Nación,3287.67,103287.67");
        assert_eq!(lines[2], "fund,1,\"Fondo, Ahorro\",3000.00,103000.00");
    }

    #[test]
    fn test_render_json() {
        let out = render(&report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["days"], 30);
        assert_eq!(value["deposits"][0]["kind"], "deposit");
        assert!(value.get("rates_updated_at").is_none());
    }

    #[test]
    fn test_render_variations() {
        let out = render_variations(
            &[DailyVariation {
                date: NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
                change_pct: 0.5,
            }],
            Some(100_478.0),
        );
        assert!(out.contains("2025-05-02"));
        assert!(out.contains("0,50%"));
        assert!(out.contains("100.478,00"));
    }
}
