//! Rarity taxonomy
//!
//! Tiers run from most to least common. Order is only used for display
//! grouping (legends, inventory sorting); sampling never depends on it.

use serde::{Deserialize, Serialize};

/// Rarity tier of a pack item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
    Mythic,
    Secret,
    #[serde(rename = "Ultra Secret")]
    UltraSecret,
    Mystical,
    Celestial,
    Divine,
    Transcendent,
    Ascendent,
    Godly,
    Galactic,
    Primordial,
}

/// Display metadata for a rarity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RarityInfo {
    /// Human-readable label
    pub label: &'static str,
    /// CSS color used by the UI
    pub color: &'static str,
    /// Whether the tier may appear in legends (hidden tiers are still samplable)
    pub show: bool,
}

const RARITY_INFO: [RarityInfo; 15] = [
    RarityInfo { label: "Common", color: "#9e9e9e", show: true },
    RarityInfo { label: "Uncommon", color: "#4caf50", show: true },
    RarityInfo { label: "Rare", color: "#2196f3", show: true },
    RarityInfo { label: "Legendary", color: "#ff9800", show: true },
    RarityInfo { label: "Mythic", color: "#e91e63", show: true },
    RarityInfo { label: "Secret", color: "#424242", show: true },
    RarityInfo { label: "Ultra Secret", color: "#7e57c2", show: true },
    RarityInfo { label: "Mystical", color: "#00bcd4", show: false },
    RarityInfo { label: "Celestial", color: "#fff59d", show: false },
    RarityInfo { label: "Divine", color: "#ffd700", show: false },
    RarityInfo { label: "Transcendent", color: "#b388ff", show: false },
    RarityInfo { label: "Ascendent", color: "#80deea", show: false },
    RarityInfo { label: "Godly", color: "#ff1744", show: false },
    RarityInfo { label: "Galactic", color: "#3d5afe", show: false },
    RarityInfo { label: "Primordial", color: "#1a0033", show: false },
];

impl Rarity {
    /// Every tier, most common first
    pub const ALL: [Rarity; 15] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Legendary,
        Rarity::Mythic,
        Rarity::Secret,
        Rarity::UltraSecret,
        Rarity::Mystical,
        Rarity::Celestial,
        Rarity::Divine,
        Rarity::Transcendent,
        Rarity::Ascendent,
        Rarity::Godly,
        Rarity::Galactic,
        Rarity::Primordial,
    ];

    /// Position in [`Rarity::ALL`]
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn info(self) -> &'static RarityInfo {
        &RARITY_INFO[self.index()]
    }

    pub fn as_str(self) -> &'static str {
        self.info().label
    }

    /// Whether legends may reveal this tier
    pub fn visible(self) -> bool {
        self.info().show
    }

    /// Parse a label, ignoring case, spaces and underscores ("ultra_secret", "UltraSecret")
    pub fn from_str(s: &str) -> Option<Self> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        Rarity::ALL
            .into_iter()
            .find(|r| r.as_str().replace(' ', "").to_lowercase() == key)
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
