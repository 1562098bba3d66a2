use anchor_lang::prelude::*;

/// Immutable audit record of one completed buyback. Written once at
/// execution and never mutated; records form a dense sequence keyed by
/// operation id.
/// PDA seeds: [b"buyback", operation_id.to_le_bytes()]
#[account]
pub struct BuybackRecord {
    /// Slot the buyback executed at
    pub execution_height: u64,

    /// Lamports debited from the treasury
    pub amount_spent: u64,

    /// Tokens acquired for the spent funds, as declared by the operator
    pub tokens_acquired: u64,

    /// Tokens destroyed; equals tokens_acquired for engine-driven runs
    pub tokens_burned: u64,

    /// price_usd of the observation the execution was scored against
    pub market_price_at_execution: u64,

    /// Bounded reason tag
    pub trigger_reason: String,

    /// Market score the execution cleared
    pub efficiency_score: u64,

    /// PDA bump
    pub bump: u8,
}

impl BuybackRecord {
    pub const MAX_TRIGGER_REASON_LEN: usize = 32;

    pub const SIZE: usize = 8 +  // execution_height
                            8 +  // amount_spent
                            8 +  // tokens_acquired
                            8 +  // tokens_burned
                            8 +  // market_price_at_execution
                            4 + Self::MAX_TRIGGER_REASON_LEN + // trigger_reason
                            8 +  // efficiency_score
                            1;   // bump
}

/// Reason tag stamped on every engine-driven buyback
pub const TRIGGER_AUTOMATED: &str = "AUTOMATED_MARKET_SIGNAL";

/// Seeds
pub const BUYBACK_RECORD_SEED: &[u8] = b"buyback";
