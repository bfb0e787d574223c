//! Reward resolution
//!
//! The one entry point mini-games call when a run ends: normalized score in,
//! [`ArcadeReward`] out. Never fails.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::catalog::{Catalog, Pack, PackItem};
use super::rarity::Rarity;
use super::tiers::pick_rarity;
use crate::error::RewardError;
use crate::settings::RewardSettings;

/// A resolved reward, handed to the UI and then dropped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcadeReward {
    pub item_name: String,
    pub rarity: Rarity,
    pub pack_name: String,
    pub emoji: String,
}

impl ArcadeReward {
    fn new(item: &PackItem, pack: &Pack) -> Self {
        Self {
            item_name: item.name.clone(),
            rarity: item.rarity,
            pack_name: pack.name.clone(),
            emoji: pack.emoji.clone(),
        }
    }
}

impl Catalog {
    /// Roll a reward from the authored packs
    pub fn roll_reward<R: Rng + ?Sized>(
        &self,
        normalized_score: f64,
        rng: &mut R,
    ) -> ArcadeReward {
        self.roll_reward_from(normalized_score, false, rng)
    }

    /// Roll a reward, optionally drawing the pack from the daily packs too.
    ///
    /// If the chosen pack has no item of the rolled rarity, the pack's first
    /// item is awarded with its own rarity. That can be a downgrade.
    pub fn roll_reward_from<R: Rng + ?Sized>(
        &self,
        normalized_score: f64,
        include_daily: bool,
        rng: &mut R,
    ) -> ArcadeReward {
        let rarity = pick_rarity(normalized_score, rng);
        let pack = self.pick_pack(include_daily, rng);

        let item = match pack.item_of_rarity(rarity) {
            Some(item) => item,
            None => {
                // Packs are never empty (checked when the catalog is built)
                let first = &pack.items[0];
                log::debug!(
                    "{} has no {} item, awarding {} ({})",
                    pack.name,
                    rarity,
                    first.name,
                    first.rarity
                );
                first
            }
        };

        let reward = ArcadeReward::new(item, pack);
        log::debug!(
            "Score {:.3} -> {} [{}] from {}",
            normalized_score,
            reward.item_name,
            reward.rarity,
            reward.pack_name
        );
        reward
    }

    /// Uniform pick over the roll pool (authored packs, then daily ones if included)
    fn pick_pack<R: Rng + ?Sized>(&self, include_daily: bool, rng: &mut R) -> &Pack {
        let daily = if include_daily { self.daily.len() } else { 0 };
        let i = rng.random_range(0..self.authored.len() + daily);
        self.authored
            .get(i)
            .unwrap_or_else(|| &self.daily[i - self.authored.len()])
    }
}

/// Seeded reward roller bound to a catalog
///
/// Same catalog + same seed + same scores = same rewards.
#[derive(Debug, Clone)]
pub struct RewardRoller<'a> {
    catalog: &'a Catalog,
    rng: Pcg32,
    seed: u64,
    include_daily: bool,
}

impl<'a> RewardRoller<'a> {
    pub fn new(catalog: &'a Catalog, seed: u64) -> Self {
        Self {
            catalog,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            include_daily: false,
        }
    }

    /// Roller configured from settings; a missing seed is drawn at random
    pub fn from_settings(catalog: &'a Catalog, settings: &RewardSettings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!(
            "Reward roller seeded with {} (daily packs {})",
            seed,
            if settings.include_daily_packs { "on" } else { "off" }
        );
        Self {
            include_daily: settings.include_daily_packs,
            ..Self::new(catalog, seed)
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn pick_rarity(&mut self, normalized_score: f64) -> Rarity {
        pick_rarity(normalized_score, &mut self.rng)
    }

    pub fn roll_reward(&mut self, normalized_score: f64) -> ArcadeReward {
        self.catalog
            .roll_reward_from(normalized_score, self.include_daily, &mut self.rng)
    }

    pub fn roll_pack(&mut self, pack_name: &str) -> Result<&'a PackItem, RewardError> {
        let catalog = self.catalog;
        catalog.roll_pack(pack_name, &mut self.rng)
    }
}
