use anchor_lang::prelude::*;

use crate::errors::PyreError;
use crate::state::*;

/// Toggle the emergency kill switch
/// Owner-only; while set, every buyback fails regardless of other state
pub fn set_emergency_pause(ctx: Context<SetEmergencyPause>, paused: bool) -> Result<()> {
    let treasury = &mut ctx.accounts.treasury;
    treasury.emergency_pause = paused;

    let clock = Clock::get()?;

    emit!(crate::events::EmergencyPauseSet {
        paused,
        set_by: ctx.accounts.owner.key(),
        height: clock.slot,
    });

    msg!("Emergency pause set: {}", paused);

    Ok(())
}

#[derive(Accounts)]
pub struct SetEmergencyPause<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [TREASURY_SEED],
        bump = treasury.bump,
        constraint = treasury.owner == owner.key() @ PyreError::Unauthorized,
    )]
    pub treasury: Account<'info, BuybackTreasury>,
}
