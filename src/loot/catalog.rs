//! Pack catalog
//!
//! Packs are created once by [`build_catalog`] and never mutated. Adding a
//! pack means adding a table entry in `packs.rs` or a theme in `calendar.rs`.

use std::collections::HashMap;
use std::iter::Sum;
use std::ops::Add;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::calendar::generate_daily_packs;
use super::packs::authored_packs;
use super::rarity::{Rarity, RarityInfo};
use crate::consts::*;
use crate::error::RewardError;

/// Drop chance in fixed-point percent (1 unit = 1e-10 %)
///
/// Integer units keep the daily top-up carving exact: whatever is added to
/// the rare slots is removed from the Common slot unit for unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Chance(u64);

impl Chance {
    pub const ZERO: Chance = Chance(0);

    #[inline]
    pub const fn from_units(units: u64) -> Self {
        Chance(units)
    }

    /// Convert a percentage, rounding to the nearest unit (negatives and NaN become zero)
    pub fn from_percent(percent: f64) -> Self {
        if percent.is_nan() || percent <= 0.0 {
            return Chance::ZERO;
        }
        Chance((percent * CHANCE_SCALE as f64).round() as u64)
    }

    #[inline]
    pub const fn units(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn as_percent(self) -> f64 {
        self.0 as f64 / CHANCE_SCALE as f64
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn saturating_sub(self, other: Chance) -> Chance {
        Chance(self.0.saturating_sub(other.0))
    }
}

impl Add for Chance {
    type Output = Chance;

    fn add(self, rhs: Chance) -> Chance {
        Chance(self.0 + rhs.0)
    }
}

impl Sum for Chance {
    fn sum<I: Iterator<Item = Chance>>(iter: I) -> Chance {
        iter.fold(Chance::ZERO, Add::add)
    }
}

// Chances cross the JS boundary as plain percentages
impl Serialize for Chance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_percent())
    }
}

impl<'de> Deserialize<'de> for Chance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Chance::from_percent)
    }
}

/// A single item in a pack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackItem {
    pub name: String,
    pub rarity: Rarity,
    pub chance: Chance,
}

impl PackItem {
    pub fn new(name: impl Into<String>, rarity: Rarity, chance: Chance) -> Self {
        Self {
            name: name.into(),
            rarity,
            chance,
        }
    }
}

/// Where a pack came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackOrigin {
    /// Hand-written table
    Authored,
    /// Generated calendar pack for a month (1-12) and day
    Daily { month: u32, day: u32 },
}

/// A named, ordered list of items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pack {
    pub name: String,
    pub emoji: String,
    pub origin: PackOrigin,
    pub items: Vec<PackItem>,
}

impl Pack {
    /// Sum of all item chances (≈100% for well-formed packs)
    pub fn total_chance(&self) -> Chance {
        self.items.iter().map(|item| item.chance).sum()
    }

    /// First item of exactly this rarity
    pub fn item_of_rarity(&self, rarity: Rarity) -> Option<&PackItem> {
        self.items.iter().find(|item| item.rarity == rarity)
    }

    /// Roll one item by its own drop chances.
    ///
    /// Draws a point in (0, 100%] and walks the items until the running sum
    /// reaches it. A pack whose chances fall short of 100% returns its last
    /// item for draws past the end. Returns None only for an empty pack.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&PackItem> {
        let draw = rng.random_range(1..=FULL_PACK);
        let mut running = 0u64;
        for item in &self.items {
            running += item.chance.units();
            if running >= draw {
                return Some(item);
            }
        }
        self.items.last()
    }
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Authored(usize),
    Daily(usize),
}

/// Frozen registry of authored and daily packs
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) authored: Vec<Pack>,
    pub(crate) daily: Vec<Pack>,
    index: HashMap<String, Slot>,
}

/// Build the full catalog: every authored pack plus the 366 daily packs.
///
/// Call once at startup and share the result; it is never mutated.
pub fn build_catalog() -> Catalog {
    let catalog = Catalog::assemble(authored_packs(), generate_daily_packs());
    log::info!(
        "Catalog built: {} authored packs, {} daily packs",
        catalog.authored.len(),
        catalog.daily.len()
    );
    catalog
}

impl Catalog {
    /// Build a catalog from explicit pack lists.
    ///
    /// The generic reward roll draws from the authored packs, so at least one
    /// is required.
    pub fn from_packs(authored: Vec<Pack>, daily: Vec<Pack>) -> Result<Self, RewardError> {
        if authored.is_empty() {
            return Err(RewardError::EmptyCatalog);
        }
        if let Some(empty) = authored.iter().chain(&daily).find(|p| p.items.is_empty()) {
            return Err(RewardError::EmptyPack(empty.name.clone()));
        }
        Ok(Self::assemble(authored, daily))
    }

    fn assemble(authored: Vec<Pack>, daily: Vec<Pack>) -> Self {
        let mut index = HashMap::with_capacity(authored.len() + daily.len());
        for (i, pack) in daily.iter().enumerate() {
            index.insert(pack.name.clone(), Slot::Daily(i));
        }
        // Authored names shadow daily ones
        for (i, pack) in authored.iter().enumerate() {
            index.insert(pack.name.clone(), Slot::Authored(i));
        }
        Self {
            authored,
            daily,
            index,
        }
    }

    /// Look up a pack by exact name
    pub fn get_pack(&self, name: &str) -> Option<&Pack> {
        match self.index.get(name)? {
            Slot::Authored(i) => self.authored.get(*i),
            Slot::Daily(i) => self.daily.get(*i),
        }
    }

    pub fn pack_emoji(&self, name: &str) -> Option<&str> {
        self.get_pack(name).map(|p| p.emoji.as_str())
    }

    pub fn authored_packs(&self) -> &[Pack] {
        &self.authored
    }

    pub fn daily_packs(&self) -> &[Pack] {
        &self.daily
    }

    pub fn authored_pack_names(&self) -> impl Iterator<Item = &str> {
        self.authored.iter().map(|p| p.name.as_str())
    }

    pub fn daily_pack_names(&self) -> impl Iterator<Item = &str> {
        self.daily.iter().map(|p| p.name.as_str())
    }

    /// Total number of distinct pack names
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Roll an item from a named pack using the pack's own drop chances.
    ///
    /// Not score-driven. Unknown names are an error rather than a panic.
    pub fn roll_pack<R: Rng + ?Sized>(
        &self,
        name: &str,
        rng: &mut R,
    ) -> Result<&PackItem, RewardError> {
        let pack = self
            .get_pack(name)
            .ok_or_else(|| RewardError::UnknownPack(name.to_string()))?;
        pack.roll(rng)
            .ok_or_else(|| RewardError::EmptyPack(name.to_string()))
    }

    /// Rarities that occur anywhere in the catalog, most common first.
    ///
    /// Hidden tiers are left out unless `reveal_hidden` is set.
    pub fn rarity_legend(&self, reveal_hidden: bool) -> Vec<(Rarity, &'static RarityInfo)> {
        let mut present = [false; Rarity::ALL.len()];
        for item in self.authored.iter().chain(&self.daily).flat_map(|p| &p.items) {
            present[item.rarity.index()] = true;
        }
        Rarity::ALL
            .into_iter()
            .filter(|r| present[r.index()] && (reveal_hidden || r.visible()))
            .map(|r| (r, r.info()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn two_item_pack(name: &str, first: f64, second: f64) -> Pack {
        Pack {
            name: name.to_string(),
            emoji: "🧪".to_string(),
            origin: PackOrigin::Authored,
            items: vec![
                PackItem::new("Pebble", Rarity::Common, Chance::from_percent(first)),
                PackItem::new("Gem", Rarity::Rare, Chance::from_percent(second)),
            ],
        }
    }

    #[test]
    fn test_chance_fixed_point() {
        assert_eq!(Chance::from_percent(0.0000000001).units(), 1);
        assert_eq!(Chance::from_percent(0.0000001).units(), 1_000);
        assert_eq!(Chance::from_percent(100.0).units(), FULL_PACK);
        assert_eq!(Chance::from_percent(-1.0), Chance::ZERO);
        assert_eq!(Chance::from_percent(f64::NAN), Chance::ZERO);
        assert!((Chance::from_percent(12.5).as_percent() - 12.5).abs() < 1e-12);
    }

    #[test]
    fn test_chance_serializes_as_percent() {
        let item = PackItem::new("Gem", Rarity::Rare, Chance::from_percent(2.5));
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"name":"Gem","rarity":"Rare","chance":2.5}"#);
    }

    #[test]
    fn test_get_pack_authored_and_daily() {
        let catalog = build_catalog();
        assert!(catalog.get_pack("Spooky Pack").is_some());
        assert!(catalog.get_pack("Feb 8 Pack").is_some());
        assert!(catalog.get_pack("Nope Pack").is_none());
        assert_eq!(catalog.pack_emoji("Spooky Pack"), Some("🎃"));
        assert_eq!(
            catalog.len(),
            catalog.authored_packs().len() + catalog.daily_packs().len()
        );
    }

    #[test]
    fn test_roll_pack_unknown_is_error() {
        let catalog = build_catalog();
        let mut rng = Pcg32::seed_from_u64(1);
        let err = catalog.roll_pack("Missing Pack", &mut rng).unwrap_err();
        assert!(matches!(err, RewardError::UnknownPack(name) if name == "Missing Pack"));
    }

    #[test]
    fn test_roll_pack_follows_chances() {
        let catalog =
            Catalog::from_packs(vec![two_item_pack("Test Pack", 90.0, 10.0)], Vec::new()).unwrap();
        let mut rng = Pcg32::seed_from_u64(42);
        let trials = 20_000;
        let gems = (0..trials)
            .filter(|_| catalog.roll_pack("Test Pack", &mut rng).unwrap().name == "Gem")
            .count();
        let share = gems as f64 / trials as f64;
        assert!((share - 0.10).abs() < 0.02, "gem share {share}");
    }

    #[test]
    fn test_roll_pack_short_total_falls_to_last() {
        // Only 20% of the range is covered; the rest lands on the last item
        let pack = two_item_pack("Short", 10.0, 10.0);
        let mut rng = Pcg32::seed_from_u64(7);
        let mut last = 0;
        for _ in 0..1_000 {
            if pack.roll(&mut rng).unwrap().name == "Gem" {
                last += 1;
            }
        }
        assert!(last > 800);
    }

    #[test]
    fn test_from_packs_rejects_empty() {
        assert!(matches!(
            Catalog::from_packs(Vec::new(), Vec::new()),
            Err(RewardError::EmptyCatalog)
        ));
        let empty = Pack {
            items: Vec::new(),
            ..two_item_pack("Hollow", 50.0, 50.0)
        };
        assert!(matches!(
            Catalog::from_packs(vec![empty], Vec::new()),
            Err(RewardError::EmptyPack(name)) if name == "Hollow"
        ));
    }

    #[test]
    fn test_rarity_legend_hides_tiers() {
        let catalog = build_catalog();
        let shown = catalog.rarity_legend(false);
        assert!(shown.iter().all(|(r, info)| r.visible() && info.show));
        assert_eq!(shown.first().map(|(r, _)| *r), Some(Rarity::Common));

        let all = catalog.rarity_legend(true);
        assert_eq!(all.len(), Rarity::ALL.len());
        assert_eq!(all.last().map(|(r, _)| *r), Some(Rarity::Primordial));
    }
}
