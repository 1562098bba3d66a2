use anchor_lang::prelude::*;

use crate::state::*;

/// One-time setup: create the treasury ledger and record the owner
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let treasury = &mut ctx.accounts.treasury;
    treasury.owner = ctx.accounts.owner.key();
    treasury.balance = 0;
    treasury.total_tokens_burned = 0;
    treasury.last_buyback_height = 0;
    treasury.operation_count = 0;
    treasury.emergency_pause = false;
    treasury.bump = ctx.bumps.treasury;

    msg!("Buyback treasury initialized, owner: {}", treasury.owner);

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Deployer; becomes the administrator
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Treasury ledger PDA
    #[account(
        init,
        payer = owner,
        space = 8 + BuybackTreasury::SIZE,
        seeds = [TREASURY_SEED],
        bump,
    )]
    pub treasury: Account<'info, BuybackTreasury>,

    pub system_program: Program<'info, System>,
}
