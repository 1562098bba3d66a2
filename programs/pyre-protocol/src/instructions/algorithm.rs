use anchor_lang::prelude::*;

use crate::state::*;

/// Advisory analysis engine. The indicator values below are fixed
/// illustrative figures, not live computations; only the recommendation
/// flag and the two sizing fields depend on the inputs. The execution
/// path never reads any of this — it exists as a diagnostic surface and
/// has no failure path.
pub fn execute_advanced_algorithmic_buyback_engine(
    ctx: Context<ExecuteAdvancedAlgorithmicBuybackEngine>,
    enable_technical_analysis: bool,
    enable_sentiment_analysis: bool,
    risk_tolerance_level: u64,
    max_execution_percentage: u64,
) -> Result<()> {
    let clock = Clock::get()?;

    let report = build_analysis_report(
        enable_technical_analysis,
        enable_sentiment_analysis,
        risk_tolerance_level,
        max_execution_percentage,
        ctx.accounts.treasury.balance,
    );

    emit!(crate::events::AlgorithmicAnalysisCompleted {
        caller: ctx.accounts.caller.key(),
        analysis_complete: report.analysis_complete,
        execution_recommended: report.execution_recommended,
        confidence_level: report.confidence_level,
        optimal_amount: report.optimal_amount,
        risk_score: report.risk_score,
        market_sentiment: report.market_sentiment,
        whale_activity: report.whale_activity,
        institutional_flow: report.institutional_flow,
        trend_strength: report.trend_strength,
        support_level: report.support_level,
        resistance_level: report.resistance_level,
        value_at_risk_bps: report.value_at_risk_bps,
        sharpe_ratio_bps: report.sharpe_ratio_bps,
        max_drawdown_bps: report.max_drawdown_bps,
        slice_count: report.slice_count,
        slice_interval_slots: report.slice_interval_slots,
        buy_pressure_weight: report.buy_pressure_weight,
        burn_impact_weight: report.burn_impact_weight,
        height: clock.slot,
    });

    msg!(
        "Algorithmic analysis complete: recommended {}, confidence {}, optimal {}",
        report.execution_recommended,
        report.confidence_level,
        report.optimal_amount
    );

    Ok(())
}

/// Structured recommendation report returned by the advisory engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub analysis_complete: bool,
    pub execution_recommended: bool,
    pub confidence_level: u64,
    pub optimal_amount: u64,
    pub risk_score: u64,
    // market intelligence
    pub market_sentiment: u64,
    pub whale_activity: u64,
    pub institutional_flow: u64,
    // technical indicators
    pub trend_strength: u64,
    pub support_level: u64,
    pub resistance_level: u64,
    // risk metrics
    pub value_at_risk_bps: u64,
    pub sharpe_ratio_bps: u64,
    pub max_drawdown_bps: u64,
    // execution strategy
    pub slice_count: u64,
    pub slice_interval_slots: u64,
    // decision matrix
    pub buy_pressure_weight: u64,
    pub burn_impact_weight: u64,
}

/// Confidence baseline and slope of the linear risk-tolerance term
pub const CONFIDENCE_BASE: u64 = 50;
pub const CONFIDENCE_PER_RISK_LEVEL: u64 = 5;

pub fn build_analysis_report(
    enable_technical_analysis: bool,
    enable_sentiment_analysis: bool,
    risk_tolerance_level: u64,
    max_execution_percentage: u64,
    treasury_balance: u64,
) -> AnalysisReport {
    let optimal_amount = treasury_balance as u128 * max_execution_percentage as u128
        / BuybackTreasury::BPS_DENOMINATOR as u128;

    AnalysisReport {
        analysis_complete: true,
        execution_recommended: enable_technical_analysis && enable_sentiment_analysis,
        confidence_level: CONFIDENCE_BASE
            .saturating_add(risk_tolerance_level.saturating_mul(CONFIDENCE_PER_RISK_LEVEL)),
        optimal_amount: u64::try_from(optimal_amount).unwrap_or(u64::MAX),
        risk_score: 35,
        market_sentiment: 72,
        whale_activity: 18,
        institutional_flow: 55,
        trend_strength: 68,
        support_level: 95_000,
        resistance_level: 128_000,
        value_at_risk_bps: 250,
        sharpe_ratio_bps: 180,
        max_drawdown_bps: 1_250,
        slice_count: 4,
        slice_interval_slots: 36,
        buy_pressure_weight: 60,
        burn_impact_weight: 40,
    }
}

#[derive(Accounts)]
pub struct ExecuteAdvancedAlgorithmicBuybackEngine<'info> {
    pub caller: Signer<'info>,

    /// Treasury ledger; read-only input to the sizing fields
    #[account(
        seeds = [TREASURY_SEED],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, BuybackTreasury>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_is_deterministic() {
        let a = build_analysis_report(true, false, 3, 2_500, 1_000_000);
        let b = build_analysis_report(true, false, 3, 2_500, 1_000_000);
        assert_eq!(a, b);
    }

    #[test]
    fn recommendation_requires_both_flags() {
        assert!(build_analysis_report(true, true, 0, 0, 0).execution_recommended);
        assert!(!build_analysis_report(true, false, 0, 0, 0).execution_recommended);
        assert!(!build_analysis_report(false, true, 0, 0, 0).execution_recommended);
        assert!(!build_analysis_report(false, false, 0, 0, 0).execution_recommended);
    }

    #[test]
    fn confidence_is_linear_in_risk_tolerance() {
        assert_eq!(build_analysis_report(true, true, 0, 0, 0).confidence_level, 50);
        assert_eq!(build_analysis_report(true, true, 4, 0, 0).confidence_level, 70);
        assert_eq!(build_analysis_report(true, true, 10, 0, 0).confidence_level, 100);
    }

    #[test]
    fn optimal_amount_uses_basis_points() {
        let report = build_analysis_report(true, true, 0, 2_500, 1_000_000);
        assert_eq!(report.optimal_amount, 250_000);
    }
}
