use crate::core::calculator::{calculate_deposits, calculate_funds, rank_results};
use crate::domain::model::{CalculationInput, CalculationReport, CalculationResult, RankingOptions};
use crate::domain::ports::RateSource;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{
    validate_finite, validate_non_negative_rate, validate_positive_amount, Validate,
};

impl Validate for CalculationInput {
    fn validate(&self) -> Result<()> {
        validate_positive_amount("amount", self.principal)?;
        if self.days == 0 {
            return Err(CalcError::invalid_input(
                "days",
                self.days,
                "must be at least one day",
            ));
        }
        Ok(())
    }
}

pub struct CalculatorEngine<S: RateSource> {
    source: S,
}

impl<S: RateSource> CalculatorEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Loads both datasets, projects `input` over every entry and ranks the results.
    pub async fn run(
        &self,
        input: &CalculationInput,
        deposit_ranking: &RankingOptions,
        fund_ranking: &RankingOptions,
    ) -> Result<CalculationReport> {
        input.validate()?;

        tracing::info!("Loading rate datasets...");
        let (rates, funds) = tokio::try_join!(self.source.load_rates(), self.source.load_funds())?;
        tracing::info!(
            "Loaded {} bank rates and {} funds",
            rates.tasas.len(),
            funds.fondos.len()
        );

        for entry in &rates.tasas {
            validate_non_negative_rate(
                &format!("tna ({})", entry.institution_name),
                entry.annual_nominal_rate_pct,
            )?;
        }
        for entry in &funds.fondos {
            let field = format!("rendimiento_mensual_estimado ({})", entry.name);
            validate_finite(&field, entry.monthly_estimated_yield_pct)?;
            // (1 + y/100) must stay positive for the daily root
            if entry.monthly_estimated_yield_pct <= -100.0 {
                return Err(CalcError::invalid_input(
                    &field,
                    entry.monthly_estimated_yield_pct,
                    "monthly yield must be greater than -100%",
                ));
            }
        }

        if rates.tasas.is_empty() {
            tracing::warn!("No bank rates available, deposit table will be empty");
        }
        if funds.fondos.is_empty() {
            tracing::warn!("No fund yields available, fund table will be empty");
        }

        tracing::debug!(
            "Calculating {} over {} days (simple fund interest: {})",
            input.principal,
            input.days,
            input.use_simple_interest_for_funds
        );
        let deposits = apply_ranking(calculate_deposits(input, &rates.tasas), deposit_ranking);
        let funds = apply_ranking(calculate_funds(input, &funds.fondos), fund_ranking);

        let report = CalculationReport {
            principal: input.principal,
            days: input.days,
            simple_interest_for_funds: input.use_simple_interest_for_funds,
            rates_updated_at: rates.ultima_actualizacion,
            best_deposit: best_by_capital(&deposits),
            best_fund: best_by_capital(&funds),
            deposits,
            funds,
        };

        if let Some(best) = &report.best_deposit {
            tracing::info!("Best deposit: {} ({:.2})", best.name, best.final_capital);
        }
        if let Some(best) = &report.best_fund {
            tracing::info!("Best fund: {} ({:.2})", best.name, best.final_capital);
        }

        Ok(report)
    }
}

fn apply_ranking(results: Vec<CalculationResult>, options: &RankingOptions) -> Vec<CalculationResult> {
    let mut ranked = rank_results(results, options.order, options.key);
    if let Some(limit) = options.limit {
        ranked.truncate(limit);
    }
    ranked
}

fn best_by_capital(results: &[CalculationResult]) -> Option<CalculationResult> {
    results
        .iter()
        .reduce(|best, r| if r.final_capital > best.final_capital { r } else { best })
        .cloned()
}
