//! Arcade Rewards - loot packs and score-tiered rewards for arcade mini-games
//!
//! Core modules:
//! - `loot`: Rarity taxonomy, pack catalog, daily calendar packs, reward rolls
//! - `settings`: Reward preferences (LocalStorage on web)
//! - `error`: Crate error type
//!
//! Every mini-game talks to this crate through one contract: it hands over a
//! normalized score in `[0, 1]` and gets an [`ArcadeReward`] back.

pub mod error;
pub mod loot;
pub mod settings;

pub use error::RewardError;
pub use loot::{
    ArcadeReward, Catalog, Chance, Pack, PackItem, PackOrigin, Rarity, RarityInfo, RewardRoller,
    ScoreTier, build_catalog,
};
pub use settings::RewardSettings;

/// Catalog configuration constants
pub mod consts {
    /// Fixed-point chance units per percent (1 unit = 1e-10 %)
    pub const CHANCE_SCALE: u64 = 10_000_000_000;
    /// Total chance of a well-formed pack, in units
    pub const FULL_PACK: u64 = 100 * CHANCE_SCALE;
    /// Number of generated daily packs (February always has 29 days)
    pub const DAILY_PACK_COUNT: usize = 366;
    /// Items in every hand-authored pack (Common through Mystical)
    pub const AUTHORED_PACK_SIZE: usize = 8;
    /// Base items in every monthly theme
    pub const THEME_BASE_SIZE: usize = 10;
    /// Day-unique items appended to each daily pack
    pub const DAILY_TOP_UPS: usize = 7;
    /// Emoji shown when a pack has none
    pub const DEFAULT_EMOJI: &str = "🎁";
}

/// Normalize a raw game score into `[0, 1]` as `min(1, score / max_score)`.
///
/// A non-positive `max_score` yields 0 so a misconfigured game still gets a
/// (common) reward instead of a NaN score.
#[inline]
pub fn normalized_score(score: f64, max_score: f64) -> f64 {
    if max_score <= 0.0 || !max_score.is_finite() || score.is_nan() {
        return 0.0;
    }
    (score / max_score).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_score_clamps() {
        assert_eq!(normalized_score(50.0, 100.0), 0.5);
        assert_eq!(normalized_score(250.0, 100.0), 1.0);
        assert_eq!(normalized_score(-5.0, 100.0), 0.0);
    }

    #[test]
    fn test_normalized_score_bad_max() {
        assert_eq!(normalized_score(10.0, 0.0), 0.0);
        assert_eq!(normalized_score(10.0, -3.0), 0.0);
        assert_eq!(normalized_score(f64::NAN, 10.0), 0.0);
    }
}
