use crate::domain::model::{DailyVariation, QuotePoint};
use crate::utils::error::{CalcError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Unit-value history of a single FCI (`fci_data.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundHistory {
    #[serde(rename = "historial")]
    points: Vec<QuotePoint>,
    #[serde(rename = "variacion")]
    published_variation_pct: f64,
}

impl FundHistory {
    pub fn new(mut points: Vec<QuotePoint>, published_variation_pct: f64) -> Result<Self> {
        for point in &points {
            if !point.unit_value.is_finite() || point.unit_value <= 0.0 {
                return Err(CalcError::InvalidHistoryError {
                    message: format!(
                        "unit value {} on {} must be a positive number",
                        point.unit_value, point.date
                    ),
                });
            }
        }
        if !published_variation_pct.is_finite() {
            return Err(CalcError::InvalidHistoryError {
                message: "variacion must be a finite number".to_string(),
            });
        }

        points.sort_by_key(|p| p.date);
        Ok(Self {
            points,
            published_variation_pct,
        })
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let raw: FundHistory = serde_json::from_slice(bytes)?;
        Self::new(raw.points, raw.published_variation_pct)
    }

    pub fn points(&self) -> &[QuotePoint] {
        &self.points
    }

    pub fn published_variation_pct(&self) -> f64 {
        self.published_variation_pct
    }

    /// Percentage change between the two most recent quotes.
    pub fn latest_variation_pct(&self) -> Option<f64> {
        match self.points.as_slice() {
            [.., prev, last] => Some(percent_change(prev.unit_value, last.unit_value)),
            _ => None,
        }
    }

    /// Day-over-day changes for the quotes on or after `since`. The first
    /// quote in the window has no predecessor and reports 0.
    pub fn daily_variations_since(&self, since: NaiveDate) -> Vec<DailyVariation> {
        let window: Vec<&QuotePoint> = self.points.iter().filter(|p| p.date >= since).collect();

        window
            .iter()
            .enumerate()
            .map(|(i, point)| DailyVariation {
                date: point.date,
                change_pct: if i == 0 {
                    0.0
                } else {
                    percent_change(window[i - 1].unit_value, point.unit_value)
                },
            })
            .collect()
    }

    pub fn month_to_date(&self, today: NaiveDate) -> Vec<DailyVariation> {
        let first_of_month = today.with_day(1).unwrap_or(today);
        self.daily_variations_since(first_of_month)
    }

    /// Value of `amount` after applying the published variation once.
    pub fn estimated_value_today(&self, amount: f64) -> f64 {
        amount * (1.0 + self.published_variation_pct / 100.0)
    }
}

fn percent_change(from: f64, to: f64) -> f64 {
    (to - from) / from * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> FundHistory {
        FundHistory::new(
            vec![
                QuotePoint { date: date(2025, 5, 2), unit_value: 102.0 },
                QuotePoint { date: date(2025, 4, 30), unit_value: 100.0 },
                QuotePoint { date: date(2025, 5, 5), unit_value: 102.51 },
                QuotePoint { date: date(2025, 5, 6), unit_value: 103.0 },
            ],
            0.478,
        )
        .unwrap()
    }

    #[test]
    fn test_points_are_sorted_by_date() {
        let history = sample();
        let dates: Vec<NaiveDate> = history.points().iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![date(2025, 4, 30), date(2025, 5, 2), date(2025, 5, 5), date(2025, 5, 6)]);
    }

    #[test]
    fn test_latest_variation() {
        let variation = sample().latest_variation_pct().unwrap();
        assert!((variation - (103.0 - 102.51) / 102.51 * 100.0).abs() < 1e-12);

        let single = FundHistory::new(vec![QuotePoint { date: date(2025, 5, 1), unit_value: 1.0 }], 0.0).unwrap();
        assert!(single.latest_variation_pct().is_none());
    }

    #[test]
    fn test_month_to_date_restarts_at_first_quote() {
        let series = sample().month_to_date(date(2025, 5, 20));
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].date, date(2025, 5, 2));
        assert_eq!(series[0].change_pct, 0.0);
        assert!((series[1].change_pct - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_estimated_value_today() {
        let history = sample();
        assert!((history.estimated_value_today(100_000.0) - 100_478.0).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_non_positive_quotes() {
        let err = FundHistory::new(vec![QuotePoint { date: date(2025, 5, 1), unit_value: 0.0 }], 0.0);
        assert!(matches!(err, Err(CalcError::InvalidHistoryError { .. })));
    }

    #[test]
    fn test_parse_scraper_output() {
        let json = r#"{
            "historial": [
                {"Fecha": "2025-05-05", "Valor Cuota Parte": 210.5},
                {"Fecha": "2025-05-06", "Valor Cuota Parte": 211.0}
            ],
            "variacion": 0.2375
        }"#;
        let history = FundHistory::from_json_slice(json.as_bytes()).unwrap();
        assert_eq!(history.points().len(), 2);
        assert_eq!(history.published_variation_pct(), 0.2375);
    }
}
