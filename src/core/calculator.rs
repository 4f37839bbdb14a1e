//! Interest arithmetic for fixed-term deposits and mutual funds.
//!
//! Every function here is pure: inputs are assumed validated by the caller
//! (see [`crate::utils::validation`]) and nothing can fail.

use crate::domain::model::{
    CalculationInput, CalculationResult, FundEntry, InstrumentKind, Projection, RateEntry,
    SortKey, SortOrder,
};

pub const DAYS_PER_YEAR: f64 = 365.0;
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Simple daily accrual on a nominal annual rate (TNA).
pub fn compute_deposit_interest(principal: f64, annual_nominal_rate_pct: f64, days: u32) -> Projection {
    let daily_rate = annual_nominal_rate_pct / 100.0 / DAYS_PER_YEAR;
    let interest_earned = principal * daily_rate * f64::from(days);
    Projection {
        interest_earned,
        final_capital: principal + interest_earned,
    }
}

/// Effective daily rate equivalent to a monthly yield over a 30-day month.
pub fn fund_daily_rate(monthly_estimated_yield_pct: f64) -> f64 {
    (1.0 + monthly_estimated_yield_pct / 100.0).powf(1.0 / DAYS_PER_MONTH) - 1.0
}

pub fn compute_fund_interest(
    principal: f64,
    monthly_estimated_yield_pct: f64,
    days: u32,
    use_simple_interest: bool,
) -> Projection {
    if days == 0 {
        return Projection {
            interest_earned: 0.0,
            final_capital: principal,
        };
    }

    let daily_rate = fund_daily_rate(monthly_estimated_yield_pct);
    if use_simple_interest {
        let interest_earned = principal * daily_rate * f64::from(days);
        Projection {
            interest_earned,
            final_capital: principal + interest_earned,
        }
    } else {
        let final_capital = principal * (1.0 + daily_rate).powf(f64::from(days));
        Projection {
            interest_earned: final_capital - principal,
            final_capital,
        }
    }
}

/// Sorts results by `key` in `order`. Ties keep their input order.
pub fn rank_results(
    mut results: Vec<CalculationResult>,
    order: SortOrder,
    key: SortKey,
) -> Vec<CalculationResult> {
    let value = |r: &CalculationResult| match key {
        SortKey::InterestEarned => r.interest_earned,
        SortKey::FinalCapital => r.final_capital,
    };

    // sort_by is stable; reversing the comparator keeps equal elements in place
    results.sort_by(|a, b| {
        let ord = value(a).total_cmp(&value(b));
        match order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });
    results
}

pub fn calculate_deposits(input: &CalculationInput, rates: &[RateEntry]) -> Vec<CalculationResult> {
    rates
        .iter()
        .map(|entry| {
            let projection =
                compute_deposit_interest(input.principal, entry.annual_nominal_rate_pct, input.days);
            CalculationResult {
                name: entry.institution_name.clone(),
                kind: InstrumentKind::Deposit,
                interest_earned: projection.interest_earned,
                final_capital: projection.final_capital,
            }
        })
        .collect()
}

pub fn calculate_funds(input: &CalculationInput, funds: &[FundEntry]) -> Vec<CalculationResult> {
    funds
        .iter()
        .map(|entry| {
            let projection = compute_fund_interest(
                input.principal,
                entry.monthly_estimated_yield_pct,
                input.days,
                input.use_simple_interest_for_funds,
            );
            CalculationResult {
                name: entry.name.clone(),
                kind: InstrumentKind::Fund,
                interest_earned: projection.interest_earned,
                final_capital: projection.final_capital,
            }
        })
        .collect()
}
