use anchor_lang::prelude::*;

use crate::errors::PyreError;

/// Market observation reported by an operator at a given slot.
/// Observations accumulate; a slot that was never reported has no
/// account, and readers must treat that as "no data".
/// PDA seeds: [b"market-signal", height.to_le_bytes()]
#[account]
pub struct MarketSignal {
    /// Token price in whole USD units
    pub price_usd: u64,

    /// 24h traded volume
    pub volume_24h: u64,

    /// Annualized volatility index, basis points
    pub volatility_index: u64,

    /// Order-book depth near the mid price
    pub liquidity_depth: u64,

    /// Derived at write time: price_usd x CIRCULATING_SUPPLY
    pub market_cap: u64,

    /// Relative strength index
    pub rsi: u64,

    /// MACD signal line; negative readings are clamped to zero before
    /// storage
    pub macd_signal: u64,

    /// Slot the observation was submitted at
    pub height: u64,

    /// PDA bump
    pub bump: u8,
}

impl MarketSignal {
    pub const SIZE: usize = 8 + // price_usd
                            8 + // volume_24h
                            8 + // volatility_index
                            8 + // liquidity_depth
                            8 + // market_cap
                            8 + // rsi
                            8 + // macd_signal
                            8 + // height
                            1;  // bump

    /// Supply figure used to derive market cap from price
    pub const CIRCULATING_SUPPLY: u64 = 21_000_000;

    pub fn derived_market_cap(price_usd: u64) -> Result<u64> {
        price_usd
            .checked_mul(Self::CIRCULATING_SUPPLY)
            .ok_or_else(|| PyreError::Overflow.into())
    }

    pub fn clamp_macd(macd: i64) -> u64 {
        macd.max(0) as u64
    }

    /// Suitability of this observation for executing a buyback
    pub fn execution_score(&self) -> u64 {
        market_score(self.price_usd, self.volume_24h, self.volatility_index)
    }
}

/// Price above this scores full momentum
pub const PRICE_MOMENTUM_BREAKPOINT: u64 = 100_000;

/// Volume above 1_000_000 x this multiplier scores full volume factor
pub const VOLUME_THRESHOLD_MULTIPLIER: u64 = 150;

pub const VOLUME_THRESHOLD: u64 = 1_000_000 * VOLUME_THRESHOLD_MULTIPLIER;

/// Volatility above this halves the volatility term
pub const VOLATILITY_THRESHOLD: u64 = 3_000;

/// Deterministic 0-100 market suitability score.
///
/// Three coarse sub-scores combined by fixed weights (momentum 40%,
/// volume 35%, volatility 25%) with truncating division. The step
/// functions are intentional: bucketing bounds the payoff of gaming the
/// score with marginal price moves. With these constants the attainable
/// range is exactly 69..=118 (all-low 6_900/100, all-high 11_850/100).
pub fn market_score(price: u64, volume: u64, volatility: u64) -> u64 {
    let momentum: u64 = if price > PRICE_MOMENTUM_BREAKPOINT { 120 } else { 80 };
    let volume_factor: u64 = if volume > VOLUME_THRESHOLD { 130 } else { 70 };
    let volatility_penalty: u64 = if volatility > VOLATILITY_THRESHOLD { 50 } else { 100 };

    (momentum * 40 + volume_factor * 35 + volatility_penalty * 25) / 100
}

/// Seeds
pub const MARKET_SIGNAL_SEED: &[u8] = b"market-signal";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_reference_point() {
        // momentum 120, volume factor 130, penalty 100:
        // (4_800 + 4_550 + 2_500) / 100
        assert_eq!(market_score(150_000, 2_000_000_000, 1_000), 118);
    }

    #[test]
    fn score_floor() {
        // breakpoints are strict: equal-to-threshold inputs stay low
        assert_eq!(market_score(100_000, VOLUME_THRESHOLD, 3_001), 69);
    }

    #[test]
    fn score_truncates_toward_zero() {
        // momentum 120, volume factor 70, penalty 100 -> 9_750 / 100
        assert_eq!(market_score(100_001, 1_000, 500), 97);
        // momentum 80, volume factor 130, penalty 100 -> 10_250 / 100
        assert_eq!(market_score(90_000, VOLUME_THRESHOLD + 1, 500), 102);
    }

    #[test]
    fn score_stays_in_documented_range() {
        let prices = [0, 100_000, 100_001, u64::MAX];
        let volumes = [0, VOLUME_THRESHOLD, VOLUME_THRESHOLD + 1, u64::MAX];
        let volatilities = [0, 3_000, 3_001, u64::MAX];
        for p in prices {
            for v in volumes {
                for vol in volatilities {
                    let s = market_score(p, v, vol);
                    assert!((69..=118).contains(&s), "score {} out of range", s);
                }
            }
        }
    }

    #[test]
    fn negative_macd_clamps_to_zero() {
        assert_eq!(MarketSignal::clamp_macd(-250), 0);
        assert_eq!(MarketSignal::clamp_macd(0), 0);
        assert_eq!(MarketSignal::clamp_macd(37), 37);
    }

    #[test]
    fn market_cap_derivation() {
        assert_eq!(
            MarketSignal::derived_market_cap(150_000).unwrap(),
            150_000 * MarketSignal::CIRCULATING_SUPPLY
        );
        assert!(MarketSignal::derived_market_cap(u64::MAX).is_err());
    }

    #[test]
    fn execution_score_matches_free_function() {
        let signal = MarketSignal {
            price_usd: 150_000,
            volume_24h: 2_000_000_000,
            volatility_index: 1_000,
            liquidity_depth: 500_000,
            market_cap: 0,
            rsi: 55,
            macd_signal: 12,
            height: 100,
            bump: 255,
        };
        assert_eq!(signal.execution_score(), 118);
    }
}
