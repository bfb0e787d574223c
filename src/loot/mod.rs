//! Loot and reward module
//!
//! Everything here is built once at startup and read-only afterwards:
//! - Rarity taxonomy and display metadata
//! - Hand-authored packs plus 366 generated daily packs
//! - Score tiers that bias rarity toward skilled play
//! - Reward resolution (rarity roll + pack pick + item lookup)

pub mod calendar;
pub mod catalog;
pub mod packs;
pub mod rarity;
pub mod resolve;
pub mod tiers;

pub use calendar::{
    all_daily_pack_names, daily_pack_name, days_in_month, find_daily_pack_by_query,
    generate_daily_packs, today_pack_name,
};
pub use catalog::{Catalog, Chance, Pack, PackItem, PackOrigin, build_catalog};
pub use rarity::{Rarity, RarityInfo};
pub use resolve::{ArcadeReward, RewardRoller};
pub use tiers::{SCORE_TIERS, ScoreTier, pick_rarity, tier_for_score};
