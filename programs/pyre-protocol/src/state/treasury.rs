use anchor_lang::prelude::*;

use crate::errors::PyreError;

/// Contract-wide buyback ledger
/// PDA seeds: [b"treasury"]
#[account]
pub struct BuybackTreasury {
    /// Administrator; the only identity allowed to authorize operators
    /// and toggle the pause
    pub owner: Pubkey,

    /// Lamports available for buybacks
    pub balance: u64,

    /// Cumulative tokens destroyed by buybacks; never decreases
    pub total_tokens_burned: u64,

    /// Slot of the last successful buyback (cooldown anchor)
    pub last_buyback_height: u64,

    /// Next operation id; dense sequence starting at 0
    pub operation_count: u64,

    /// Blocks every buyback while set
    pub emergency_pause: bool,

    /// PDA bump
    pub bump: u8,
}

impl BuybackTreasury {
    pub const SIZE: usize = 32 + // owner
                            8 +  // balance
                            8 +  // total_tokens_burned
                            8 +  // last_buyback_height
                            8 +  // operation_count
                            1 +  // emergency_pause
                            1;   // bump

    /// Smallest buyback the gate will consider
    pub const MIN_BUYBACK_AMOUNT: u64 = 1_000_000;

    /// Largest single buyback: 5% of the treasury
    pub const MAX_BUYBACK_BPS: u64 = 500;

    /// Minimum slots between two successful buybacks
    pub const BUYBACK_COOLDOWN_SLOTS: u64 = 144;

    /// Fraction of the treasury that must survive any debit: 20%
    pub const TREASURY_RESERVE_RATIO_BPS: u64 = 2_000;

    /// Scores below this never execute
    pub const MIN_EXECUTION_SCORE: u64 = 75;

    /// Basis-point denominator
    pub const BPS_DENOMINATOR: u64 = 10_000;

    /// Composite precondition check for spending `requested` lamports at
    /// `current_height`. All five terms must hold; the public path
    /// collapses any failure into a single market-conditions rejection.
    pub fn validate_buyback(&self, requested: u64, current_height: u64) -> bool {
        requested >= Self::MIN_BUYBACK_AMOUNT
            && self.within_spend_ceiling(requested)
            && self.cooldown_elapsed(current_height)
            && !self.emergency_pause
            && self.reserve_preserved(requested)
    }

    /// `requested <= balance * MAX_BUYBACK_BPS / 10_000`, evaluated in
    /// u128 with truncating division
    pub fn within_spend_ceiling(&self, requested: u64) -> bool {
        let ceiling = self.balance as u128 * Self::MAX_BUYBACK_BPS as u128
            / Self::BPS_DENOMINATOR as u128;
        requested as u128 <= ceiling
    }

    /// At least BUYBACK_COOLDOWN_SLOTS have passed since the last buyback
    pub fn cooldown_elapsed(&self, current_height: u64) -> bool {
        current_height.saturating_sub(self.last_buyback_height) >= Self::BUYBACK_COOLDOWN_SLOTS
    }

    /// Inverse-ratio reserve check against the pre-debit balance:
    /// `balance >= requested * 10_000 / (10_000 - TREASURY_RESERVE_RATIO_BPS)`.
    /// Truncation is part of the contract; do not rearrange the algebra.
    pub fn reserve_preserved(&self, requested: u64) -> bool {
        let required = requested as u128 * Self::BPS_DENOMINATOR as u128
            / (Self::BPS_DENOMINATOR - Self::TREASURY_RESERVE_RATIO_BPS) as u128;
        self.balance as u128 >= required
    }

    /// Credit a deposit
    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(PyreError::Overflow)?;
        Ok(())
    }

    /// Debit a validated buyback spend
    pub fn debit(&mut self, amount: u64) -> Result<()> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(PyreError::InsufficientFunds)?;
        Ok(())
    }

    /// Sole mutator of the cumulative burn counter. Fails rather than
    /// wraps at the u64 ceiling.
    pub fn record_burn(&mut self, tokens: u64) -> Result<()> {
        self.total_tokens_burned = self
            .total_tokens_burned
            .checked_add(tokens)
            .ok_or(PyreError::Overflow)?;
        Ok(())
    }

    /// Reserve the next operation id and advance the counter
    pub fn next_operation_id(&mut self) -> Result<u64> {
        let id = self.operation_count;
        self.operation_count = self
            .operation_count
            .checked_add(1)
            .ok_or(PyreError::Overflow)?;
        Ok(id)
    }
}

/// Seeds
pub const TREASURY_SEED: &[u8] = b"treasury";

#[cfg(test)]
mod tests {
    use super::*;

    fn treasury(balance: u64) -> BuybackTreasury {
        BuybackTreasury {
            owner: Pubkey::default(),
            balance,
            total_tokens_burned: 0,
            last_buyback_height: 0,
            operation_count: 0,
            emergency_pause: false,
            bump: 255,
        }
    }

    #[test]
    fn rejects_below_minimum_amount() {
        let t = treasury(10_000_000_000);
        assert!(!t.validate_buyback(BuybackTreasury::MIN_BUYBACK_AMOUNT - 1, 1_000));
        assert!(t.validate_buyback(BuybackTreasury::MIN_BUYBACK_AMOUNT, 1_000));
    }

    #[test]
    fn spend_ceiling_boundary() {
        // 5% of 1 SOL
        let t = treasury(1_000_000_000);
        let limit = 50_000_000;
        assert!(t.validate_buyback(limit, 1_000));
        assert!(!t.validate_buyback(limit + 1, 1_000));
    }

    #[test]
    fn reserve_floor_boundary() {
        // requested * 10_000 / 8_000 must fit in the pre-debit balance
        let t = treasury(10_000);
        assert!(t.reserve_preserved(8_000));
        let t = treasury(9_999);
        assert!(!t.reserve_preserved(8_000));
    }

    #[test]
    fn reserve_requirement_truncates() {
        // 7_999 * 10_000 / 8_000 = 9_998.75, truncated to 9_998
        let t = treasury(9_998);
        assert!(t.reserve_preserved(7_999));
        let t = treasury(9_997);
        assert!(!t.reserve_preserved(7_999));
    }

    #[test]
    fn cooldown_boundary() {
        let mut t = treasury(1_000_000_000);
        t.last_buyback_height = 5_000;
        assert!(!t.validate_buyback(10_000_000, 5_000 + BuybackTreasury::BUYBACK_COOLDOWN_SLOTS - 1));
        assert!(t.validate_buyback(10_000_000, 5_000 + BuybackTreasury::BUYBACK_COOLDOWN_SLOTS));
    }

    #[test]
    fn pause_blocks_everything() {
        let mut t = treasury(1_000_000_000);
        t.emergency_pause = true;
        assert!(!t.validate_buyback(10_000_000, 10_000));

        t.emergency_pause = false;
        assert!(t.validate_buyback(10_000_000, 10_000));
    }

    #[test]
    fn deposits_are_additive() {
        let mut split = treasury(0);
        split.credit(300).unwrap();
        split.credit(400).unwrap();

        let mut single = treasury(0);
        single.credit(700).unwrap();

        assert_eq!(split.balance, single.balance);
    }

    #[test]
    fn credit_overflow_fails() {
        let mut t = treasury(u64::MAX);
        assert!(t.credit(1).is_err());
        assert_eq!(t.balance, u64::MAX);
    }

    #[test]
    fn debit_cannot_go_negative() {
        let mut t = treasury(100);
        assert!(t.debit(101).is_err());
        assert_eq!(t.balance, 100);

        t.debit(100).unwrap();
        assert_eq!(t.balance, 0);
    }

    #[test]
    fn burn_counter_is_monotone_and_exact() {
        let mut t = treasury(0);
        t.record_burn(10).unwrap();
        assert_eq!(t.total_tokens_burned, 10);
        t.record_burn(0).unwrap();
        assert_eq!(t.total_tokens_burned, 10);
        t.record_burn(32).unwrap();
        assert_eq!(t.total_tokens_burned, 42);
    }

    #[test]
    fn burn_counter_overflow_fails() {
        let mut t = treasury(0);
        t.total_tokens_burned = u64::MAX;
        assert!(t.record_burn(1).is_err());
        assert_eq!(t.total_tokens_burned, u64::MAX);
    }

    #[test]
    fn operation_ids_are_dense_from_zero() {
        let mut t = treasury(0);
        assert_eq!(t.next_operation_id().unwrap(), 0);
        assert_eq!(t.next_operation_id().unwrap(), 1);
        assert_eq!(t.next_operation_id().unwrap(), 2);
        assert_eq!(t.operation_count, 3);
    }

    #[test]
    fn operation_count_overflow_fails() {
        let mut t = treasury(0);
        t.operation_count = u64::MAX;
        assert!(t.next_operation_id().is_err());
    }
}
