use crate::data::models::{Champion, ChampionMatchup, ChampionMeta, TierList};
use crate::data::repository::Dataset;
use std::collections::HashMap;

/// Viability at or above which a champion is considered for a role.
pub const VIABILITY_THRESHOLD: f64 = 0.5;

/// Score used when the tier list is missing or does not rate a champion.
pub const DEFAULT_TIER_SCORE: f64 = 0.5;

/// Meta value used when a champion has no early/late rating.
pub const DEFAULT_META_SCORE: f64 = 0.5;

/// O(1) access to champions, meta and pairwise matchups by champion id.
#[derive(Debug, Clone, Default)]
pub struct LookupIndex {
    champions: Vec<Champion>,
    by_id: HashMap<String, usize>,
    meta: HashMap<String, ChampionMeta>,
    matchups: HashMap<String, ChampionMatchup>,
    tier_list: Option<TierList>,
}

impl LookupIndex {
    pub fn new(
        champions: Vec<Champion>,
        meta: HashMap<String, ChampionMeta>,
        matchups: Vec<ChampionMatchup>,
        tier_list: Option<TierList>,
    ) -> Self {
        let by_id = champions
            .iter()
            .enumerate()
            .map(|(idx, c)| (c.id.clone(), idx))
            .collect();

        let matchups = matchups
            .into_iter()
            .map(|m| (m.champion.clone(), m))
            .collect();

        LookupIndex {
            champions,
            by_id,
            meta,
            matchups,
            tier_list,
        }
    }

    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self::new(
            dataset.champions.clone(),
            dataset.champion_meta.clone(),
            dataset.matchups.clone(),
            dataset.tier_list.clone(),
        )
    }

    pub fn champions(&self) -> &[Champion] {
        &self.champions
    }

    pub fn champion(&self, id: &str) -> Option<&Champion> {
        self.by_id.get(id).map(|&idx| &self.champions[idx])
    }

    /// Display name for `id`, falling back to the id itself.
    pub fn name_of<'a>(&'a self, id: &'a str) -> &'a str {
        self.champion(id).map(|c| c.name.as_str()).unwrap_or(id)
    }

    pub fn matchup(&self, id: &str) -> Option<&ChampionMatchup> {
        self.matchups.get(id)
    }

    /// Champions with viability >= 0.5 for `role`, best first.
    ///
    /// The sort is stable so equally viable champions keep dataset order.
    pub fn viable_champions(&self, role: &str) -> Vec<&Champion> {
        let mut viable: Vec<&Champion> = self
            .champions
            .iter()
            .filter(|c| c.role_viability(role) >= VIABILITY_THRESHOLD)
            .collect();

        viable.sort_by(|a, b| {
            b.role_viability(role)
                .partial_cmp(&a.role_viability(role))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        viable
    }

    pub fn tier_score(&self, champion_id: &str) -> f64 {
        let Some(tiers) = &self.tier_list else {
            return DEFAULT_TIER_SCORE;
        };

        tiers
            .champion_tiers
            .get(champion_id)
            .and_then(|info| tiers.tier_scoring.get(&info.tier))
            .copied()
            .unwrap_or(DEFAULT_TIER_SCORE)
    }

    pub fn early_impact(&self, champion_id: &str) -> f64 {
        self.meta
            .get(champion_id)
            .and_then(|m| m.early_impact)
            .unwrap_or(DEFAULT_META_SCORE)
    }

    pub fn late_scaling(&self, champion_id: &str) -> f64 {
        self.meta
            .get(champion_id)
            .and_then(|m| m.late_scaling)
            .unwrap_or(DEFAULT_META_SCORE)
    }

    /// Number of roles the champion can flex into; 1 (the evaluated role) when unknown.
    pub fn flex_role_count(&self, champion_id: &str) -> usize {
        self.meta
            .get(champion_id)
            .and_then(|m| m.flex_roles.as_ref())
            .map(Vec::len)
            .unwrap_or(1)
    }
}
