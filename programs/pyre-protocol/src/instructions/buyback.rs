use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount};

use crate::errors::PyreError;
use crate::state::*;

/// Run one buyback through the full pipeline: authorization, validation
/// gate, market scoring, fund debit, burn, history record. Any failed
/// stage aborts the instruction with zero observable mutation; a
/// rejected request must be resubmitted by the caller.
pub fn execute_buyback(
    ctx: Context<ExecuteBuyback>,
    amount: u64,
    expected_tokens: u64,
) -> Result<()> {
    let clock = Clock::get()?;

    // Gate + scoring. Authorization was already enforced by the account
    // constraints, so a failure here is always a market-conditions
    // rejection.
    let score = evaluate_buyback(
        &ctx.accounts.treasury,
        ctx.accounts.market_signal.as_deref(),
        amount,
        clock.slot,
    )?;
    let market_price = ctx
        .accounts
        .market_signal
        .as_deref()
        .map(|s| s.price_usd)
        .unwrap_or(0);

    // Executed: debit the ledger, then destroy the declared yield. The
    // swap itself is a simulated stand-in; expected_tokens is taken as
    // reported by the operator.
    ctx.accounts.treasury.debit(amount)?;

    if expected_tokens > 0 {
        let treasury_bump = ctx.accounts.treasury.bump;
        let seeds = &[TREASURY_SEED, &[treasury_bump]];
        let signer = &[&seeds[..]];

        token::burn(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Burn {
                    mint: ctx.accounts.token_mint.to_account_info(),
                    from: ctx.accounts.tokens_to_burn.to_account_info(),
                    authority: ctx.accounts.treasury.to_account_info(),
                },
                signer,
            ),
            expected_tokens,
        )?;
    }

    ctx.accounts.treasury.record_burn(expected_tokens)?;

    // Recorded: append the audit entry and arm the cooldown
    let operation_id = ctx.accounts.treasury.next_operation_id()?;

    let record = &mut ctx.accounts.buyback_record;
    record.execution_height = clock.slot;
    record.amount_spent = amount;
    record.tokens_acquired = expected_tokens;
    record.tokens_burned = expected_tokens;
    record.market_price_at_execution = market_price;
    record.trigger_reason = TRIGGER_AUTOMATED.to_string();
    record.efficiency_score = score;
    record.bump = ctx.bumps.buyback_record;

    ctx.accounts.treasury.last_buyback_height = clock.slot;
    ctx.accounts.operator.record_success()?;

    emit!(crate::events::BuybackExecuted {
        operation_id,
        operator: ctx.accounts.operator_signer.key(),
        amount_spent: amount,
        tokens_acquired: expected_tokens,
        tokens_burned: expected_tokens,
        efficiency_score: score,
        treasury_balance_after: ctx.accounts.treasury.balance,
        height: clock.slot,
    });

    msg!(
        "Buyback executed: op {}, {} lamports spent, {} tokens burned, score {}",
        operation_id,
        amount,
        expected_tokens,
        score
    );

    Ok(())
}

/// Gate and score one buyback request against the current observation.
/// Returns the efficiency score on success. A slot with no observation
/// fails closed; every rejection surfaces as MarketConditions.
pub fn evaluate_buyback(
    treasury: &BuybackTreasury,
    signal: Option<&MarketSignal>,
    requested: u64,
    current_height: u64,
) -> Result<u64> {
    require!(
        treasury.validate_buyback(requested, current_height),
        PyreError::MarketConditions
    );

    let signal = match signal {
        Some(s) if s.height == current_height => s,
        _ => return err!(PyreError::MarketConditions),
    };

    let score = signal.execution_score();
    require!(
        score >= BuybackTreasury::MIN_EXECUTION_SCORE,
        PyreError::MarketConditions
    );

    Ok(score)
}

#[derive(Accounts)]
pub struct ExecuteBuyback<'info> {
    /// Operator triggering the buyback (pays for the history record)
    #[account(mut)]
    pub operator_signer: Signer<'info>,

    /// Capability record; the caller must hold an authorization granted
    /// by the owner
    #[account(
        mut,
        seeds = [OPERATOR_SEED, operator_signer.key().as_ref()],
        bump = operator.bump,
        constraint = operator.authorized @ PyreError::Unauthorized,
    )]
    pub operator: Account<'info, Operator>,

    /// Treasury ledger; debited and burn-signing authority
    #[account(
        mut,
        seeds = [TREASURY_SEED],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, BuybackTreasury>,

    /// Observation for the current slot; absent or stale data fails the
    /// request closed
    pub market_signal: Option<Account<'info, MarketSignal>>,

    /// Mint of the token being bought back and destroyed
    #[account(mut)]
    pub token_mint: Account<'info, Mint>,

    /// Treasury-owned account holding the acquired tokens
    #[account(
        mut,
        constraint = tokens_to_burn.owner == treasury.key() @ PyreError::Unauthorized,
        constraint = tokens_to_burn.mint == token_mint.key() @ PyreError::InvalidAmount,
    )]
    pub tokens_to_burn: Account<'info, TokenAccount>,

    /// Audit record for this operation, keyed by the next operation id
    #[account(
        init,
        payer = operator_signer,
        space = 8 + BuybackRecord::SIZE,
        seeds = [BUYBACK_RECORD_SEED, &treasury.operation_count.to_le_bytes()],
        bump,
    )]
    pub buyback_record: Account<'info, BuybackRecord>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
