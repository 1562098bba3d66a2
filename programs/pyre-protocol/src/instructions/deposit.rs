use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::errors::PyreError;
use crate::state::*;

/// Transfer lamports into the treasury and credit the ledger
pub fn deposit_treasury(ctx: Context<DepositTreasury>, amount: u64) -> Result<()> {
    require!(amount > 0, PyreError::InvalidAmount);
    require!(
        ctx.accounts.depositor.lamports() >= amount,
        PyreError::InsufficientFunds
    );

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.depositor.to_account_info(),
                to: ctx.accounts.treasury.to_account_info(),
            },
        ),
        amount,
    )?;

    let treasury = &mut ctx.accounts.treasury;
    treasury.credit(amount)?;

    let clock = Clock::get()?;

    emit!(crate::events::TreasuryDeposit {
        depositor: ctx.accounts.depositor.key(),
        amount,
        balance_after: treasury.balance,
        height: clock.slot,
    });

    msg!("Treasury deposit: {} lamports, balance: {}", amount, treasury.balance);

    Ok(())
}

#[derive(Accounts)]
pub struct DepositTreasury<'info> {
    /// Funds source
    #[account(mut)]
    pub depositor: Signer<'info>,

    /// Treasury ledger; also holds the deposited lamports
    #[account(
        mut,
        seeds = [TREASURY_SEED],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, BuybackTreasury>,

    pub system_program: Program<'info, System>,
}
