use anchor_lang::prelude::*;

#[error_code]
pub enum PyreError {
    #[msg("Caller lacks the required role")]
    Unauthorized,

    #[msg("Underlying fund transfer cannot be satisfied")]
    InsufficientFunds,

    #[msg("Amount fails basic bounds checks")]
    InvalidAmount,

    #[msg("Market conditions do not justify execution")]
    MarketConditions,

    #[msg("Buyback cooldown has not elapsed")]
    CooldownActive,

    #[msg("Arithmetic overflow")]
    Overflow,
}
