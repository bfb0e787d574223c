//! Arcade Rewards entry point
//!
//! On the web this exposes the reward calls to the page's JavaScript. Natively
//! it prints a few sample rolls and resolves an optional daily-pack query.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_api {
    use std::cell::RefCell;
    use std::sync::OnceLock;

    use wasm_bindgen::prelude::*;

    use arcade_rewards::loot::calendar;
    use arcade_rewards::{Catalog, RewardRoller, RewardSettings, build_catalog};

    static CATALOG: OnceLock<Catalog> = OnceLock::new();

    thread_local! {
        static ROLLER: RefCell<Option<RewardRoller<'static>>> = const { RefCell::new(None) };
    }

    fn catalog() -> &'static Catalog {
        CATALOG.get_or_init(build_catalog)
    }

    fn with_roller<T>(f: impl FnOnce(&mut RewardRoller<'static>) -> T) -> T {
        ROLLER.with(|cell| {
            let mut slot = cell.borrow_mut();
            let roller = slot.get_or_insert_with(|| {
                let mut settings = RewardSettings::load();
                if settings.seed.is_none() {
                    settings.seed = Some(js_sys::Date::now() as u64);
                }
                RewardRoller::from_settings(catalog(), &settings)
            });
            f(roller)
        })
    }

    /// Roll a reward for a finished game; returns ArcadeReward JSON
    #[wasm_bindgen]
    pub fn roll_reward(normalized_score: f64) -> String {
        let reward = with_roller(|roller| roller.roll_reward(normalized_score));
        serde_json::to_string(&reward).unwrap_or_default()
    }

    /// Roll one item from a named pack by its own odds; None for unknown packs
    #[wasm_bindgen]
    pub fn roll_pack(pack_name: &str) -> Option<String> {
        match with_roller(|roller| roller.roll_pack(pack_name)) {
            Ok(item) => serde_json::to_string(item).ok(),
            Err(err) => {
                log::warn!("{}", err);
                None
            }
        }
    }

    #[wasm_bindgen]
    pub fn today_pack_name() -> String {
        calendar::today_pack_name()
    }

    #[wasm_bindgen]
    pub fn find_daily_pack(query: &str) -> Option<String> {
        calendar::find_daily_pack_by_query(query)
    }

    /// Full pack contents as JSON
    #[wasm_bindgen]
    pub fn pack_json(name: &str) -> Option<String> {
        catalog()
            .get_pack(name)
            .and_then(|pack| serde_json::to_string(pack).ok())
    }

    /// Rarity legend as JSON: [{ "rarity", "color" }, ...]
    #[wasm_bindgen]
    pub fn rarity_legend_json() -> String {
        let reveal = RewardSettings::load().reveal_hidden_tiers;
        let legend: Vec<serde_json::Value> = catalog()
            .rarity_legend(reveal)
            .into_iter()
            .map(|(rarity, info)| serde_json::json!({ "rarity": rarity, "color": info.color }))
            .collect();
        serde_json::to_string(&legend).unwrap_or_default()
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
        log::info!("Arcade Rewards ready ({} packs)", catalog().len());
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_api::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use arcade_rewards::loot::calendar;
    use arcade_rewards::{RewardRoller, RewardSettings, build_catalog};

    env_logger::init();
    log::info!("Arcade Rewards (native) starting...");

    let catalog = build_catalog();
    let mut roller = RewardRoller::from_settings(&catalog, &RewardSettings::load());

    let today = calendar::today_pack_name();
    println!(
        "Today's pack: {} {}",
        catalog.pack_emoji(&today).unwrap_or(arcade_rewards::consts::DEFAULT_EMOJI),
        today
    );

    println!("\nSample rewards (seed {}):", roller.seed());
    for score in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let reward = roller.roll_reward(score);
        println!(
            "  {:.2} -> {} {} [{}] from {}",
            score, reward.emoji, reward.item_name, reward.rarity, reward.pack_name
        );
    }

    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if query.is_empty() {
        return;
    }
    match calendar::find_daily_pack_by_query(&query) {
        Some(name) => match roller.roll_pack(&name) {
            Ok(item) => println!("\n{:?} -> {}: {} [{}]", query, name, item.name, item.rarity),
            Err(err) => eprintln!("\n{}", err),
        },
        None => println!("\nNo daily pack matches {:?}", query),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
