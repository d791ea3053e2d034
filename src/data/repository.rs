use super::models::*;
use anyhow::Context;
use serde::de::DeserializeOwned;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

pub const CHAMPIONS_FILE: &str = "champions.json";
pub const SYNERGIES_FILE: &str = "synergies.json";
pub const COUNTERS_FILE: &str = "counters.json";
pub const CHAMPION_COUNTERS_FILE: &str = "champion_counters.json";
pub const TIER_LIST_FILE: &str = "tier_list.json";
pub const CHAMPION_META_FILE: &str = "champion_meta.json";

/// Static reference data, loaded once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub champions: Vec<Champion>,
    pub synergies: Vec<SynergyRule>,
    pub counters: Vec<CounterRule>,
    pub matchups: Vec<ChampionMatchup>,
    pub tier_list: Option<TierList>,
    pub champion_meta: HashMap<String, ChampionMeta>,
}

impl Dataset {
    /// Assemble a dataset and run the tier enrichment pass.
    pub fn new(
        champions: Vec<Champion>,
        synergies: Vec<SynergyRule>,
        counters: Vec<CounterRule>,
        matchups: Vec<ChampionMatchup>,
        tier_list: Option<TierList>,
        champion_meta: HashMap<String, ChampionMeta>,
    ) -> Self {
        let mut dataset = Dataset {
            champions: dedup_champions(champions),
            synergies,
            counters,
            matchups,
            tier_list,
            champion_meta,
        };
        dataset.enrich_tiers();
        dataset
    }

    /// Load every source from `dir`. A missing or unparseable file is logged
    /// and treated as an empty collection.
    pub fn load(dir: &Path) -> Self {
        let champions = load_or_warn::<ChampionsFile>(dir, CHAMPIONS_FILE)
            .map(|f| f.champions)
            .unwrap_or_default();

        let synergies = load_or_warn::<SynergiesFile>(dir, SYNERGIES_FILE)
            .map(|f| f.synergies)
            .unwrap_or_default();

        let mut counters = load_or_warn::<CountersFile>(dir, COUNTERS_FILE)
            .map(|f| f.counters)
            .unwrap_or_default();

        let mut matchups = Vec::new();
        match load_or_warn::<MatchupsFile>(dir, CHAMPION_COUNTERS_FILE) {
            Some(MatchupsFile::Matchups(list)) => matchups = list,
            Some(MatchupsFile::Rules(extra)) => counters.extend(extra.counters),
            None => {}
        }

        let tier_list = load_or_warn::<TierList>(dir, TIER_LIST_FILE);

        let champion_meta = load_or_warn::<MetaFile>(dir, CHAMPION_META_FILE)
            .map(|f| f.champion_meta)
            .unwrap_or_default();

        let dataset = Dataset::new(champions, synergies, counters, matchups, tier_list, champion_meta);

        info!(
            champions = dataset.champions.len(),
            synergies = dataset.synergies.len(),
            counters = dataset.counters.len(),
            matchups = dataset.matchups.len(),
            "dataset loaded from {}",
            dir.display()
        );

        dataset
    }

    fn enrich_tiers(&mut self) {
        let tiers = self.tier_list.as_ref().map(|t| &t.champion_tiers);
        for champ in &mut self.champions {
            let tier = tiers
                .and_then(|t| t.get(&champ.id))
                .map(|info| info.tier.clone())
                .unwrap_or_else(|| DEFAULT_TIER.to_string());
            champ.tier = Some(tier);
        }
    }
}

fn dedup_champions(champions: Vec<Champion>) -> Vec<Champion> {
    let mut seen = HashSet::new();
    champions
        .into_iter()
        .filter(|c| {
            let fresh = seen.insert(c.id.clone());
            if !fresh {
                warn!(id = %c.id, "duplicate champion id, keeping the first entry");
            }
            fresh
        })
        .collect()
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

fn load_or_warn<T: DeserializeOwned>(dir: &Path, file: &str) -> Option<T> {
    match load_json(&dir.join(file)) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(file, error = %format!("{:#}", e), "reference data unavailable, using defaults");
            None
        }
    }
}
