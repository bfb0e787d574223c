//! Daily calendar packs
//!
//! One pack per day of the year, generated from twelve monthly themes.
//! Every daily pack starts from its theme's ten base items and gains seven
//! day-unique items at near-zero odds. Their chance is carved out of the
//! pack's first (Common) item so the pack total stays put.
//!
//! February always has 29 days, so "Feb 29 Pack" exists every year.

use chrono::{Datelike, NaiveDate};

use super::catalog::{Chance, Pack, PackItem, PackOrigin};
use super::rarity::Rarity::{self, *};
use crate::consts::DAILY_PACK_COUNT;

/// (abbreviation, full name), January first
const MONTHS: [(&str, &str); 12] = [
    ("Jan", "January"),
    ("Feb", "February"),
    ("Mar", "March"),
    ("Apr", "April"),
    ("May", "May"),
    ("Jun", "June"),
    ("Jul", "July"),
    ("Aug", "August"),
    ("Sep", "September"),
    ("Oct", "October"),
    ("Nov", "November"),
    ("Dec", "December"),
];

/// Day-unique items appended to every daily pack, in order (percent)
const TOP_UPS: [(Rarity, f64); 7] = [
    (Celestial, 0.01),
    (Divine, 0.005),
    (Transcendent, 0.001),
    (Ascendent, 0.0005),
    (Godly, 0.0001),
    (Galactic, 0.0000001),
    (Primordial, 0.0000000001),
];

/// A monthly theme
struct Theme {
    name: &'static str,
    emoji: &'static str,
    /// Ten base items; the first must be Common, it absorbs the top-ups
    base: [(&'static str, Rarity, f64); 10],
}

const THEMES: [Theme; 12] = [
    Theme {
        name: "Frost",
        emoji: "❄️",
        base: [
            ("Snowflake", Common, 35.0),
            ("Icicle", Common, 20.0),
            ("Mitten", Uncommon, 15.0),
            ("Sled", Uncommon, 10.0),
            ("Ice Skates", Rare, 8.0),
            ("Frost Giant", Legendary, 6.0),
            ("Aurora", Mythic, 3.5),
            ("Yeti", Secret, 1.5),
            ("Glacier Heart", UltraSecret, 0.7),
            ("Winter Crown", Mystical, 0.3),
        ],
    },
    Theme {
        name: "Heart",
        emoji: "💘",
        base: [
            ("Candy Heart", Common, 40.0),
            ("Love Letter", Common, 18.0),
            ("Rose", Uncommon, 14.0),
            ("Teddy Bear", Uncommon, 9.0),
            ("Chocolate Box", Rare, 8.0),
            ("Cupid's Bow", Legendary, 5.5),
            ("Ruby Locket", Mythic, 3.0),
            ("Secret Admirer", Secret, 1.5),
            ("Eternal Flame", UltraSecret, 0.7),
            ("Heart of Hearts", Mystical, 0.3),
        ],
    },
    Theme {
        name: "Clover",
        emoji: "☘️",
        base: [
            ("Shamrock", Common, 35.0),
            ("Green Hat", Common, 20.0),
            ("Horseshoe", Uncommon, 15.0),
            ("Lucky Coin", Uncommon, 10.0),
            ("Pot of Gold", Rare, 8.0),
            ("Leprechaun", Legendary, 6.0),
            ("Rainbow Bridge", Mythic, 3.5),
            ("Four-Leaf Clover", Secret, 1.5),
            ("Wishing Well", UltraSecret, 0.7),
            ("Fortune Itself", Mystical, 0.3),
        ],
    },
    Theme {
        name: "Blossom",
        emoji: "🌸",
        base: [
            ("Petal", Common, 40.0),
            ("Raindrop", Common, 18.0),
            ("Umbrella", Uncommon, 14.0),
            ("Tulip", Uncommon, 9.0),
            ("Butterfly", Rare, 8.0),
            ("Cherry Tree", Legendary, 5.5),
            ("Spring Fairy", Mythic, 3.0),
            ("Hidden Grove", Secret, 1.5),
            ("Bloom Spirit", UltraSecret, 0.7),
            ("First Bloom", Mystical, 0.3),
        ],
    },
    Theme {
        name: "Garden",
        emoji: "🌷",
        base: [
            ("Seed Packet", Common, 35.0),
            ("Watering Can", Common, 20.0),
            ("Garden Gnome", Uncommon, 15.0),
            ("Bumblebee", Uncommon, 10.0),
            ("Hummingbird", Rare, 8.0),
            ("Golden Trowel", Legendary, 6.0),
            ("Giant Sunflower", Mythic, 3.5),
            ("Secret Garden", Secret, 1.5),
            ("Everbloom", UltraSecret, 0.7),
            ("Mother Tree", Mystical, 0.3),
        ],
    },
    Theme {
        name: "Sunshine",
        emoji: "☀️",
        base: [
            ("Sunglasses", Common, 40.0),
            ("Beach Ball", Common, 18.0),
            ("Sandcastle", Uncommon, 14.0),
            ("Surfboard", Uncommon, 9.0),
            ("Ice Cream Truck", Rare, 8.0),
            ("Solar Flare", Legendary, 5.5),
            ("Midsummer Sun", Mythic, 3.0),
            ("Mirage", Secret, 1.5),
            ("Solstice Stone", UltraSecret, 0.7),
            ("Endless Summer", Mystical, 0.3),
        ],
    },
    Theme {
        name: "Firework",
        emoji: "🎆",
        base: [
            ("Sparkler", Common, 35.0),
            ("Flag", Common, 20.0),
            ("Picnic Basket", Uncommon, 15.0),
            ("Roman Candle", Uncommon, 10.0),
            ("Grill Master", Rare, 8.0),
            ("Grand Finale", Legendary, 6.0),
            ("Liberty Torch", Mythic, 3.5),
            ("Dud That Wasn't", Secret, 1.5),
            ("Sky Painter", UltraSecret, 0.7),
            ("Big Bang", Mystical, 0.3),
        ],
    },
    Theme {
        name: "Tide",
        emoji: "🌊",
        base: [
            ("Sand Dollar", Common, 40.0),
            ("Driftwood", Common, 18.0),
            ("Hermit Crab", Uncommon, 14.0),
            ("Sea Turtle", Uncommon, 9.0),
            ("Dolphin", Rare, 8.0),
            ("Tidal Wave", Legendary, 5.5),
            ("Moonlit Tide", Mythic, 3.0),
            ("Message in a Bottle", Secret, 1.5),
            ("Coral Throne", UltraSecret, 0.7),
            ("Ocean's Pulse", Mystical, 0.3),
        ],
    },
    Theme {
        name: "Harvest",
        emoji: "🍎",
        base: [
            ("Apple", Common, 35.0),
            ("School Bus", Common, 20.0),
            ("Backpack", Uncommon, 15.0),
            ("Corn Maze", Uncommon, 10.0),
            ("Scarecrow", Rare, 8.0),
            ("Golden Apple", Legendary, 6.0),
            ("Harvest Moon", Mythic, 3.5),
            ("Secret Orchard", Secret, 1.5),
            ("Cornucopia", UltraSecret, 0.7),
            ("Equinox", Mystical, 0.3),
        ],
    },
    Theme {
        name: "Haunt",
        emoji: "🎃",
        base: [
            ("Ghost Sheet", Common, 40.0),
            ("Spider", Common, 18.0),
            ("Black Cat", Uncommon, 14.0),
            ("Cauldron", Uncommon, 9.0),
            ("Vampire Cape", Rare, 8.0),
            ("Werewolf", Legendary, 5.5),
            ("Haunted Manor", Mythic, 3.0),
            ("Crypt Key", Secret, 1.5),
            ("Blood Moon", UltraSecret, 0.7),
            ("All Hallows", Mystical, 0.3),
        ],
    },
    Theme {
        name: "Ember",
        emoji: "🍂",
        base: [
            ("Fallen Leaf", Common, 35.0),
            ("Acorn", Common, 20.0),
            ("Scarf", Uncommon, 15.0),
            ("Pie", Uncommon, 10.0),
            ("Roast Turkey", Rare, 8.0),
            ("Maple Spirit", Legendary, 6.0),
            ("Bonfire", Mythic, 3.5),
            ("Grateful Heart", Secret, 1.5),
            ("Hearthstone", UltraSecret, 0.7),
            ("Last Ember", Mystical, 0.3),
        ],
    },
    Theme {
        name: "Snowglobe",
        emoji: "🎄",
        base: [
            ("Ornament", Common, 40.0),
            ("Candy Cane", Common, 18.0),
            ("Stocking", Uncommon, 14.0),
            ("Nutcracker", Uncommon, 9.0),
            ("Reindeer", Rare, 8.0),
            ("Sleigh", Legendary, 5.5),
            ("North Star", Mythic, 3.0),
            ("Elf Workshop", Secret, 1.5),
            ("Polar Express", UltraSecret, 0.7),
            ("Spirit of Giving", Mystical, 0.3),
        ],
    },
];

impl Theme {
    fn base_total(&self) -> Chance {
        self.base.iter().map(|&(_, _, pct)| Chance::from_percent(pct)).sum()
    }

    fn daily_pack(&self, month: u32, day: u32) -> Pack {
        let mut items: Vec<PackItem> = self
            .base
            .iter()
            .map(|&(name, rarity, pct)| {
                PackItem::new(format!("{name} #{day}"), rarity, Chance::from_percent(pct))
            })
            .collect();

        for &(rarity, pct) in &TOP_UPS {
            let chance = Chance::from_percent(pct);
            if let Some(common) = items.first_mut() {
                common.chance = common.chance.saturating_sub(chance);
            }
            items.push(PackItem::new(
                format!("{} {day} {rarity}", self.name),
                rarity,
                chance,
            ));
        }
        debug_assert_eq!(
            items.iter().map(|item| item.chance).sum::<Chance>(),
            self.base_total()
        );

        Pack {
            name: pack_name(month, day),
            emoji: self.emoji.to_string(),
            origin: PackOrigin::Daily { month, day },
            items,
        }
    }
}

/// Days in a month (1-12) of the pack calendar; 0 for anything else.
///
/// February is fixed at 29 regardless of year.
pub fn days_in_month(month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 29,
        _ => 0,
    }
}

fn pack_name(month: u32, day: u32) -> String {
    let (abbrev, _) = MONTHS[(month - 1) as usize];
    format!("{abbrev} {day} Pack")
}

fn calendar_days() -> impl Iterator<Item = (u32, u32)> {
    (1..=12u32).flat_map(|month| (1..=days_in_month(month)).map(move |day| (month, day)))
}

/// Generate all 366 daily packs in calendar order
pub fn generate_daily_packs() -> Vec<Pack> {
    let mut packs = Vec::with_capacity(DAILY_PACK_COUNT);
    for (month, day) in calendar_days() {
        packs.push(THEMES[(month - 1) as usize].daily_pack(month, day));
    }
    packs
}

/// Every daily pack name in calendar order ("Jan 1 Pack" .. "Dec 31 Pack")
pub fn all_daily_pack_names() -> Vec<String> {
    calendar_days().map(|(month, day)| pack_name(month, day)).collect()
}

/// Daily pack name for a date; the year is ignored.
///
/// Feb 29 only maps to its pack in leap years since no other date has that day.
pub fn daily_pack_name(date: NaiveDate) -> String {
    pack_name(date.month(), date.day())
}

/// Daily pack name for today's local date
pub fn today_pack_name() -> String {
    daily_pack_name(chrono::Local::now().date_naive())
}

/// Resolve free-form text to a daily pack name.
///
/// Tried in order: exact name (any case), name prefix, `MM/DD` or `MM-DD`,
/// then `<month> <day>` with a full or abbreviated month name. Day numbers
/// are checked against the month. Never panics; unmatched input gives None.
pub fn find_daily_pack_by_query(query: &str) -> Option<String> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    let names = all_daily_pack_names();
    if let Some(name) = names.iter().find(|n| n.to_lowercase() == query) {
        return Some(name.clone());
    }
    if let Some(name) = names.iter().find(|n| n.to_lowercase().starts_with(&query)) {
        return Some(name.clone());
    }

    parse_numeric_date(&query)
        .or_else(|| parse_month_day(&query))
        .map(|(month, day)| pack_name(month, day))
}

fn valid_day(month: u32, day: u32) -> Option<(u32, u32)> {
    (day >= 1 && day <= days_in_month(month)).then_some((month, day))
}

fn parse_number(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// "02/08", "2-8"
fn parse_numeric_date(query: &str) -> Option<(u32, u32)> {
    let (month, day) = query.split_once(['/', '-'])?;
    valid_day(parse_number(month.trim())?, parse_number(day.trim())?)
}

/// "february 8", "feb 8th", "sept 3 pack"
fn parse_month_day(query: &str) -> Option<(u32, u32)> {
    let mut tokens = query.split_whitespace();
    let month_token = tokens.next()?.trim_end_matches('.');
    let day_token = tokens.next()?.trim_end_matches(',');
    match tokens.next() {
        None | Some("pack") => {}
        Some(_) => return None,
    }
    if tokens.next().is_some() {
        return None;
    }

    let month = MONTHS.iter().position(|(_, full)| {
        let full = full.to_lowercase();
        full == month_token || (month_token.len() >= 3 && full.starts_with(month_token))
    })? as u32
        + 1;

    let day_digits = ["st", "nd", "rd", "th"]
        .iter()
        .find_map(|suffix| day_token.strip_suffix(suffix))
        .unwrap_or(day_token);
    valid_day(month, parse_number(day_digits)?)
}
