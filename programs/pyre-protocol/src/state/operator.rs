use anchor_lang::prelude::*;

use crate::errors::PyreError;

/// Capability record for a principal allowed to report market data and
/// trigger buybacks. Managed by the owner; the execution core only ever
/// reads `authorized`.
/// PDA seeds: [b"operator", identity.as_ref()]
#[account]
pub struct Operator {
    /// Whether this identity may call operator-gated instructions
    pub authorized: bool,

    /// Successful buybacks executed by this operator
    pub operations_executed: u64,

    /// Success percentage; starts at 100
    pub success_rate: u64,

    /// PDA bump
    pub bump: u8,
}

impl Operator {
    pub const SIZE: usize = 1 + // authorized
                            8 + // operations_executed
                            8 + // success_rate
                            1;  // bump

    pub const INITIAL_SUCCESS_RATE: u64 = 100;

    /// Count one completed buyback
    pub fn record_success(&mut self) -> Result<()> {
        self.operations_executed = self
            .operations_executed
            .checked_add(1)
            .ok_or(PyreError::Overflow)?;
        Ok(())
    }
}

/// Seeds
pub const OPERATOR_SEED: &[u8] = b"operator";
