use crate::i18n::LocalizedText;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Tier assigned to champions missing from the tier list.
pub const DEFAULT_TIER: &str = "B";

fn default_damage_type() -> String {
    "Adaptive".to_string()
}

fn default_scaling() -> String {
    "mid".to_string()
}

// champions.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Champion {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub roles: BTreeMap<String, f64>,
    #[serde(default)]
    pub kit_tags: Vec<String>,
    #[serde(default = "default_damage_type")]
    pub damage_type: String,
    #[serde(default = "default_scaling")]
    pub scaling: String,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub tier: Option<String>,
}

impl Champion {
    /// Viability for `role`, 0.0 when the champion does not list it.
    pub fn role_viability(&self, role: &str) -> f64 {
        self.roles.get(role).copied().unwrap_or(0.0)
    }

    /// Kit tags plus the champion's own id as a pseudo-tag.
    pub fn tag_set(&self) -> HashSet<&str> {
        let mut tags: HashSet<&str> = self.kit_tags.iter().map(String::as_str).collect();
        tags.insert(self.id.as_str());
        tags
    }

    pub fn damage_kind(&self) -> Option<DamageType> {
        DamageType::parse(&self.damage_type)
    }

    pub fn tier_label(&self) -> &str {
        self.tier.as_deref().unwrap_or(DEFAULT_TIER)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DamageType {
    AD,
    AP,
    Mixed,
    Adaptive,
}

impl DamageType {
    pub fn parse(raw: &str) -> Option<DamageType> {
        match raw {
            "AD" => Some(DamageType::AD),
            "AP" => Some(DamageType::AP),
            "Mixed" => Some(DamageType::Mixed),
            "Adaptive" => Some(DamageType::Adaptive),
            _ => None,
        }
    }

    pub fn is_hybrid(self) -> bool {
        matches!(self, DamageType::Mixed | DamageType::Adaptive)
    }
}

// synergies.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynergyRule {
    pub name: String,
    pub tags: Vec<String>,
    pub score: f64,
    #[serde(default)]
    pub explanation: LocalizedText,
}

impl SynergyRule {
    /// The two distinct tags of the rule, or `None` when it is malformed.
    pub fn tag_pair(&self) -> Option<(&str, &str)> {
        let distinct: Vec<&str> = self
            .tags
            .iter()
            .map(String::as_str)
            .fold(Vec::new(), |mut acc, tag| {
                if !acc.contains(&tag) {
                    acc.push(tag);
                }
                acc
            });

        match distinct.as_slice() {
            [a, b] => Some((*a, *b)),
            _ => None,
        }
    }
}

// counters.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterRule {
    pub name: String,
    #[serde(default)]
    pub attacker_tags: Vec<String>,
    #[serde(default)]
    pub defender_tags: Vec<String>,
    pub score: f64,
    #[serde(default)]
    pub explanation: LocalizedText,
    #[serde(default)]
    pub strong_against: Option<StrongAgainst>,
}

impl CounterRule {
    pub fn names_champion(&self, id: &str) -> bool {
        self.strong_against
            .as_ref()
            .map(|s| s.champions.iter().any(|c| c == id))
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrongAgainst {
    #[serde(default)]
    pub champions: Vec<String>,
    #[serde(default)]
    pub explanation: LocalizedText,
}

// champion_counters.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionMatchup {
    pub champion: String,
    #[serde(default)]
    pub counters: Vec<MatchupEntry>,
    #[serde(default)]
    pub strong_against: Vec<MatchupEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupEntry {
    pub target: String,
    pub strength: f64,
    #[serde(default)]
    pub reason: LocalizedText,
}

// tier_list.json
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TierList {
    #[serde(default)]
    pub tier_scoring: HashMap<String, f64>,
    #[serde(default)]
    pub champion_tiers: HashMap<String, TierInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierInfo {
    pub tier: String,
    #[serde(default)]
    pub notes: Option<String>,
}

// champion_meta.json
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChampionMeta {
    #[serde(default)]
    pub early_impact: Option<f64>,
    #[serde(default)]
    pub late_scaling: Option<f64>,
    #[serde(default)]
    pub flex_roles: Option<Vec<String>>,
}

// File wrappers
#[derive(Debug, Deserialize)]
pub struct ChampionsFile {
    pub champions: Vec<Champion>,
}

#[derive(Debug, Deserialize)]
pub struct SynergiesFile {
    pub synergies: Vec<SynergyRule>,
}

#[derive(Debug, Deserialize)]
pub struct CountersFile {
    pub counters: Vec<CounterRule>,
}

#[derive(Debug, Deserialize)]
pub struct MetaFile {
    #[serde(default)]
    pub champion_meta: HashMap<String, ChampionMeta>,
}

/// champion_counters.json ships either pairwise matchups or extra archetype rules.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MatchupsFile {
    Matchups(Vec<ChampionMatchup>),
    Rules(CountersFile),
}
