use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

// Replace with actual program ID after first deployment
declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

/// Pyre Protocol - treasury-governed buyback and burn engine
///
/// Accepts operator-reported market data, decides whether treasury
/// health and market conditions justify spending reserves, and records
/// every burn:
/// - Reserve-protected treasury with deposit/debit invariants
/// - Deterministic market scoring with a hard execution floor
/// - Cooldown-limited, pausable buyback execution
/// - Append-only operation history for audit
#[program]
pub mod pyre_protocol {
    use super::*;

    /// Create the treasury ledger and record the owner (one-time setup)
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::initialize(ctx)
    }

    /// Grant market-reporting and buyback capability to an identity
    ///
    /// Owner-only
    pub fn authorize_operator(ctx: Context<AuthorizeOperator>) -> Result<()> {
        instructions::authorize_operator::authorize_operator(ctx)
    }

    /// Transfer lamports into the treasury and credit the ledger
    pub fn deposit_treasury(ctx: Context<DepositTreasury>, amount: u64) -> Result<()> {
        instructions::deposit::deposit_treasury(ctx, amount)
    }

    /// Record the market observation for the current slot
    ///
    /// Operator-only. `height` must equal the slot the transaction lands
    /// in; a negative `macd_signal` is stored as zero.
    pub fn update_market_signals(
        ctx: Context<UpdateMarketSignals>,
        height: u64,
        price_usd: u64,
        volume_24h: u64,
        volatility_index: u64,
        liquidity_depth: u64,
        rsi: u64,
        macd_signal: i64,
    ) -> Result<()> {
        instructions::update_signals::update_market_signals(
            ctx,
            height,
            price_usd,
            volume_24h,
            volatility_index,
            liquidity_depth,
            rsi,
            macd_signal,
        )
    }

    /// Toggle the emergency kill switch
    ///
    /// Owner-only; while set, every buyback fails regardless of other
    /// state
    pub fn set_emergency_pause(ctx: Context<SetEmergencyPause>, paused: bool) -> Result<()> {
        instructions::pause::set_emergency_pause(ctx, paused)
    }

    /// Execute one gated buyback
    ///
    /// Operator-only. Validates treasury health, timing and the current
    /// market observation, debits the treasury, burns the acquired
    /// tokens and appends the audit record. Rejections carry no state
    /// change.
    pub fn execute_buyback(
        ctx: Context<ExecuteBuyback>,
        amount: u64,
        expected_tokens: u64,
    ) -> Result<()> {
        instructions::buyback::execute_buyback(ctx, amount, expected_tokens)
    }

    /// Emit the advisory analysis report
    ///
    /// Diagnostic only; never consulted by the execution path
    pub fn execute_advanced_algorithmic_buyback_engine(
        ctx: Context<ExecuteAdvancedAlgorithmicBuybackEngine>,
        enable_technical_analysis: bool,
        enable_sentiment_analysis: bool,
        risk_tolerance_level: u64,
        max_execution_percentage: u64,
    ) -> Result<()> {
        instructions::algorithm::execute_advanced_algorithmic_buyback_engine(
            ctx,
            enable_technical_analysis,
            enable_sentiment_analysis,
            risk_tolerance_level,
            max_execution_percentage,
        )
    }
}
