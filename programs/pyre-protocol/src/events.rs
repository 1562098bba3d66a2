use anchor_lang::prelude::*;

/// Emitted when the owner grants operator capability
#[event]
pub struct OperatorAuthorized {
    pub operator: Pubkey,
    pub authorized_by: Pubkey,
    pub height: u64,
}

/// Emitted when funds are credited to the treasury
#[event]
pub struct TreasuryDeposit {
    pub depositor: Pubkey,
    pub amount: u64,
    pub balance_after: u64,
    pub height: u64,
}

/// Emitted when an operator reports a market observation
#[event]
pub struct MarketSignalsUpdated {
    pub reporter: Pubkey,
    pub height: u64,
    pub price_usd: u64,
    pub volume_24h: u64,
    pub volatility_index: u64,
    pub liquidity_depth: u64,
    pub market_cap: u64,
    pub rsi: u64,
    pub macd_signal: u64,
}

/// Emitted when a buyback completes and its record is appended
#[event]
pub struct BuybackExecuted {
    pub operation_id: u64,
    pub operator: Pubkey,
    pub amount_spent: u64,
    pub tokens_acquired: u64,
    pub tokens_burned: u64,
    pub efficiency_score: u64,
    pub treasury_balance_after: u64,
    pub height: u64,
}

/// Emitted when the owner toggles the kill switch
#[event]
pub struct EmergencyPauseSet {
    pub paused: bool,
    pub set_by: Pubkey,
    pub height: u64,
}

/// Diagnostic report of the advisory analysis engine.
/// Indicator values are fixed illustrative figures; nothing in the
/// execution path reads this event.
#[event]
pub struct AlgorithmicAnalysisCompleted {
    pub caller: Pubkey,
    pub analysis_complete: bool,
    pub execution_recommended: bool,
    pub confidence_level: u64,
    pub optimal_amount: u64,
    pub risk_score: u64,
    pub market_sentiment: u64,
    pub whale_activity: u64,
    pub institutional_flow: u64,
    pub trend_strength: u64,
    pub support_level: u64,
    pub resistance_level: u64,
    pub value_at_risk_bps: u64,
    pub sharpe_ratio_bps: u64,
    pub max_drawdown_bps: u64,
    pub slice_count: u64,
    pub slice_interval_slots: u64,
    pub buy_pressure_weight: u64,
    pub burn_impact_weight: u64,
    pub height: u64,
}
