//! Hand-authored packs
//!
//! Each pack has exactly one item per tier from Common to Mystical. Items
//! are listed most common first, but nothing downstream relies on that.

use super::catalog::{Chance, Pack, PackItem, PackOrigin};
use super::rarity::Rarity::{self, *};

type AuthoredItem = (&'static str, Rarity, f64);

/// (pack name, emoji, items)
const AUTHORED: &[(&str, &str, [AuthoredItem; 8])] = &[
    (
        "Spooky Pack",
        "🎃",
        [
            ("Candy Corn", Common, 50.0),
            ("Bat Wing", Uncommon, 25.0),
            ("Haunted Lantern", Rare, 13.0),
            ("Witch Hat", Legendary, 7.0),
            ("Pumpkin King", Mythic, 3.0),
            ("Headless Rider", Secret, 1.5),
            ("Phantom Organ", UltraSecret, 0.4),
            ("Eternal Jack", Mystical, 0.1),
        ],
    ),
    (
        "Space Pack",
        "🚀",
        [
            ("Moon Rock", Common, 45.0),
            ("Satellite", Uncommon, 27.0),
            ("Ray Gun", Rare, 15.0),
            ("Comet Rider", Legendary, 8.0),
            ("Nebula Whale", Mythic, 3.0),
            ("Lost Cosmonaut", Secret, 1.5),
            ("Quasar Crown", UltraSecret, 0.4),
            ("Starforge", Mystical, 0.1),
        ],
    ),
    (
        "Ocean Pack",
        "🐙",
        [
            ("Seashell", Common, 48.0),
            ("Starfish", Uncommon, 26.0),
            ("Pufferfish", Rare, 14.0),
            ("Giant Squid", Legendary, 7.0),
            ("Sunken Galleon", Mythic, 3.0),
            ("Siren Pearl", Secret, 1.5),
            ("Abyssal Eye", UltraSecret, 0.35),
            ("Leviathan", Mystical, 0.15),
        ],
    ),
    (
        "Jungle Pack",
        "🦜",
        [
            ("Vine", Common, 52.0),
            ("Toucan", Uncommon, 24.0),
            ("Jaguar", Rare, 12.0),
            ("Golden Idol", Legendary, 7.0),
            ("Emerald Serpent", Mythic, 3.0),
            ("Temple Key", Secret, 1.5),
            ("Canopy Spirit", UltraSecret, 0.4),
            ("Heart of the Wild", Mystical, 0.1),
        ],
    ),
    (
        "Candy Pack",
        "🍭",
        [
            ("Gumdrop", Common, 50.0),
            ("Lollipop", Uncommon, 25.0),
            ("Cotton Cloud", Rare, 13.0),
            ("Chocolate Fountain", Legendary, 7.0),
            ("Gingerbread Castle", Mythic, 3.0),
            ("Sugar Dragon", Secret, 1.5),
            ("Rainbow Truffle", UltraSecret, 0.4),
            ("Everlasting Gobstopper", Mystical, 0.1),
        ],
    ),
    (
        "Robot Pack",
        "🤖",
        [
            ("Bolt", Common, 45.0),
            ("Servo Arm", Uncommon, 27.0),
            ("Laser Eye", Rare, 15.0),
            ("Mech Suit", Legendary, 8.0),
            ("Android Queen", Mythic, 3.0),
            ("Rogue AI", Secret, 1.5),
            ("Quantum Core", UltraSecret, 0.4),
            ("Omega Prime", Mystical, 0.1),
        ],
    ),
    (
        "Dino Pack",
        "🦖",
        [
            ("Fossil", Common, 48.0),
            ("Raptor Claw", Uncommon, 26.0),
            ("Triceratops", Rare, 14.0),
            ("Amber Mosquito", Legendary, 7.0),
            ("T-Rex", Mythic, 3.0),
            ("Volcano Egg", Secret, 1.5),
            ("Meteor Shard", UltraSecret, 0.35),
            ("Primeval Titan", Mystical, 0.15),
        ],
    ),
    (
        "Pirate Pack",
        "🏴\u{200d}☠️",
        [
            ("Doubloon", Common, 52.0),
            ("Parrot", Uncommon, 24.0),
            ("Spyglass", Rare, 12.0),
            ("Treasure Map", Legendary, 7.0),
            ("Ghost Ship", Mythic, 3.0),
            ("Kraken Tooth", Secret, 1.5),
            ("Cursed Compass", UltraSecret, 0.4),
            ("Davy Jones' Locker", Mystical, 0.1),
        ],
    ),
    (
        "Wizard Pack",
        "🧙",
        [
            ("Spell Scroll", Common, 50.0),
            ("Crystal Ball", Uncommon, 25.0),
            ("Enchanted Broom", Rare, 13.0),
            ("Phoenix Feather", Legendary, 7.0),
            ("Archmage Staff", Mythic, 3.0),
            ("Forbidden Tome", Secret, 1.5),
            ("Philosopher's Stone", UltraSecret, 0.4),
            ("Arcane Singularity", Mystical, 0.1),
        ],
    ),
    (
        "Sports Pack",
        "🏆",
        [
            ("Whistle", Common, 45.0),
            ("Sneakers", Uncommon, 27.0),
            ("Golden Ball", Rare, 15.0),
            ("Champion Belt", Legendary, 8.0),
            ("Hall of Fame Jersey", Mythic, 3.0),
            ("Perfect Game", Secret, 1.5),
            ("Unbroken Record", UltraSecret, 0.4),
            ("Eternal Trophy", Mystical, 0.1),
        ],
    ),
    (
        "Music Pack",
        "🎸",
        [
            ("Guitar Pick", Common, 48.0),
            ("Drumsticks", Uncommon, 26.0),
            ("Vinyl Record", Rare, 14.0),
            ("Golden Mic", Legendary, 7.0),
            ("Platinum Album", Mythic, 3.0),
            ("Lost Demo Tape", Secret, 1.5),
            ("Stadium Encore", UltraSecret, 0.35),
            ("The First Chord", Mystical, 0.15),
        ],
    ),
    (
        "Food Pack",
        "🍕",
        [
            ("French Fry", Common, 52.0),
            ("Taco", Uncommon, 24.0),
            ("Sushi Roll", Rare, 12.0),
            ("Golden Burger", Legendary, 7.0),
            ("Truffle Feast", Mythic, 3.0),
            ("Secret Sauce", Secret, 1.5),
            ("Chef's Kiss", UltraSecret, 0.4),
            ("Infinite Pizza", Mystical, 0.1),
        ],
    ),
];

/// Materialize the authored tables into packs
pub fn authored_packs() -> Vec<Pack> {
    AUTHORED
        .iter()
        .map(|(name, emoji, items)| Pack {
            name: (*name).to_string(),
            emoji: (*emoji).to_string(),
            origin: PackOrigin::Authored,
            items: items
                .iter()
                .map(|&(item, rarity, percent)| {
                    PackItem::new(item, rarity, Chance::from_percent(percent))
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{AUTHORED_PACK_SIZE, FULL_PACK};
    use std::collections::HashSet;

    #[test]
    fn test_one_item_per_tier_common_to_mystical() {
        let expected: Vec<Rarity> = Rarity::ALL[..=Mystical.index()].to_vec();
        for pack in authored_packs() {
            assert_eq!(pack.items.len(), AUTHORED_PACK_SIZE, "{}", pack.name);
            let rarities: HashSet<Rarity> = pack.items.iter().map(|i| i.rarity).collect();
            assert_eq!(rarities.len(), AUTHORED_PACK_SIZE, "{}", pack.name);
            for rarity in &expected {
                assert!(rarities.contains(rarity), "{} lacks {rarity}", pack.name);
            }
        }
    }

    #[test]
    fn test_chances_positive_and_sum_to_100() {
        for pack in authored_packs() {
            assert!(pack.items.iter().all(|i| !i.chance.is_zero()), "{}", pack.name);
            let total = pack.total_chance().units();
            // Within a millionth of a percent of 100
            assert!(total.abs_diff(FULL_PACK) <= 10_000, "{} sums to {total}", pack.name);
        }
    }

    #[test]
    fn test_names_unique() {
        let packs = authored_packs();
        let names: HashSet<&str> = packs.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names.len(), packs.len());
        assert!(names.contains("Spooky Pack"));
        assert!(names.contains("Space Pack"));
    }
}
