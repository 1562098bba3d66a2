use anchor_lang::prelude::*;

use crate::errors::PyreError;
use crate::state::*;

/// Record the market observation for the current slot
/// Operator-only; resubmission within a slot overwrites, prior slots are
/// never touched. `height` is echoed by the caller so the observation
/// address is derivable, and must match the slot the transaction lands in.
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
    let clock = Clock::get()?;
    require_eq!(height, clock.slot, PyreError::InvalidAmount);

    let signal = &mut ctx.accounts.market_signal;
    signal.price_usd = price_usd;
    signal.volume_24h = volume_24h;
    signal.volatility_index = volatility_index;
    signal.liquidity_depth = liquidity_depth;
    signal.market_cap = MarketSignal::derived_market_cap(price_usd)?;
    signal.rsi = rsi;
    signal.macd_signal = MarketSignal::clamp_macd(macd_signal);
    signal.height = height;
    signal.bump = ctx.bumps.market_signal;

    emit!(crate::events::MarketSignalsUpdated {
        reporter: ctx.accounts.operator_signer.key(),
        height,
        price_usd,
        volume_24h,
        volatility_index,
        liquidity_depth,
        market_cap: signal.market_cap,
        rsi,
        macd_signal: signal.macd_signal,
    });

    msg!("Market signals updated at height {}: price {}, volume {}", height, price_usd, volume_24h);

    Ok(())
}

#[derive(Accounts)]
#[instruction(height: u64)]
pub struct UpdateMarketSignals<'info> {
    /// Reporting operator (pays for the observation account)
    #[account(mut)]
    pub operator_signer: Signer<'info>,

    /// Capability record of the caller
    #[account(
        seeds = [OPERATOR_SEED, operator_signer.key().as_ref()],
        bump = operator.bump,
        constraint = operator.authorized @ PyreError::Unauthorized,
    )]
    pub operator: Account<'info, Operator>,

    /// Observation slot for `height`; created on first report, overwritten
    /// on resubmission within the slot
    #[account(
        init_if_needed,
        payer = operator_signer,
        space = 8 + MarketSignal::SIZE,
        seeds = [MARKET_SIGNAL_SEED, &height.to_le_bytes()],
        bump,
    )]
    pub market_signal: Account<'info, MarketSignal>,

    pub system_program: Program<'info, System>,
}
