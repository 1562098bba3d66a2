use anchor_lang::prelude::*;

use crate::errors::PyreError;
use crate::state::*;

/// Grant market-reporting and buyback capability to an identity
/// Owner-only
pub fn authorize_operator(ctx: Context<AuthorizeOperator>) -> Result<()> {
    let operator = &mut ctx.accounts.operator;
    operator.authorized = true;
    operator.operations_executed = 0;
    operator.success_rate = Operator::INITIAL_SUCCESS_RATE;
    operator.bump = ctx.bumps.operator;

    let clock = Clock::get()?;

    emit!(crate::events::OperatorAuthorized {
        operator: ctx.accounts.operator_identity.key(),
        authorized_by: ctx.accounts.owner.key(),
        height: clock.slot,
    });

    msg!("Operator authorized: {}", ctx.accounts.operator_identity.key());

    Ok(())
}

#[derive(Accounts)]
pub struct AuthorizeOperator<'info> {
    /// Administrator (pays for the capability record)
    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: identity being granted capability; never read or written
    pub operator_identity: UncheckedAccount<'info>,

    /// Treasury ledger; proves the caller is the owner
    #[account(
        seeds = [TREASURY_SEED],
        bump = treasury.bump,
        constraint = treasury.owner == owner.key() @ PyreError::Unauthorized,
    )]
    pub treasury: Account<'info, BuybackTreasury>,

    /// Capability record for the identity
    #[account(
        init,
        payer = owner,
        space = 8 + Operator::SIZE,
        seeds = [OPERATOR_SEED, operator_identity.key().as_ref()],
        bump,
    )]
    pub operator: Account<'info, Operator>,

    pub system_program: Program<'info, System>,
}
