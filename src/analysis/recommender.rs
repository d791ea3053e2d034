use super::composition::{analyze_team, team_stats, team_strength, PowerCurve, TeamAnalysis, TeamStats};
use super::explain::Explainer;
use super::index::LookupIndex;
use super::matchup::{counter_score, vulnerability_score};
use super::synergy::synergy_score;
use super::weights::{weights_for, WeightVector};
use crate::data::models::{Champion, CounterRule, DamageType, SynergyRule};
use crate::data::repository::Dataset;
use crate::i18n::StringTable;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

pub const ROLES: [&str; 5] = ["top", "jungle", "mid", "adc", "support"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub champion: Champion,
    pub total_score: f64,
    pub tier_name: String,
    pub tier_score: f64,
    pub synergy_score: f64,
    pub counter_score: f64,
    pub vulnerability_score: f64,
    pub flex_score: f64,
    pub role_viability: f64,
    pub early_impact: f64,
    pub late_scaling: f64,
    pub balance_bonus: f64,
    pub early_jungle_bonus: f64,
    pub damage_balance_bonus: f64,
    pub synergy_explanations: Vec<String>,
    pub counter_explanations: Vec<String>,
    pub vulnerability_explanations: Vec<String>,
}

/// Sub-scores of one candidate, before weighting.
#[derive(Debug, Clone, Copy, Default)]
struct Components {
    tier: f64,
    synergy: f64,
    counter: f64,
    vulnerability: f64,
    flex: f64,
    viability: f64,
    balance: f64,
    early_jungle: f64,
    damage_balance: f64,
}

impl Components {
    /// The damage-balance bonus is added unweighted.
    fn total(&self, w: &WeightVector) -> f64 {
        (self.tier * w.tier)
            + (self.synergy * w.synergy)
            + (self.counter * w.counter)
            + (self.vulnerability * w.vulnerability)
            + (self.flex * w.flex)
            + (self.viability * w.viability)
            + (self.balance * w.balance)
            + (self.early_jungle * w.early_jungle)
            + self.damage_balance
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DamageNote {
    NeedAp,
    NeedAd,
    MixedUseful,
}

/// Recommends champions for a draft slot.
///
/// Holds only immutable reference data, so one instance can serve any number
/// of concurrent queries. The engine is unaware of draft sides: callers
/// selecting for the enemy pass the enemy picks as `team`.
pub struct DraftEngine {
    index: LookupIndex,
    synergies: Vec<SynergyRule>,
    counters: Vec<CounterRule>,
    strings: StringTable,
}

impl DraftEngine {
    pub fn new(dataset: Dataset) -> Self {
        Self::with_strings(dataset, StringTable::builtin())
    }

    pub fn with_strings(dataset: Dataset, strings: StringTable) -> Self {
        let index = LookupIndex::from_dataset(&dataset);
        DraftEngine {
            index,
            synergies: dataset.synergies,
            counters: dataset.counters,
            strings,
        }
    }

    pub fn index(&self) -> &LookupIndex {
        &self.index
    }

    pub fn champions(&self) -> &[Champion] {
        self.index.champions()
    }

    pub fn champion(&self, id: &str) -> Option<&Champion> {
        self.index.champion(id)
    }

    /// Every role named by at least one champion, sorted.
    pub fn roles(&self) -> Vec<String> {
        self.index
            .champions()
            .iter()
            .flat_map(|c| c.roles.keys().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn analyze_team(&self, team: &[String]) -> TeamAnalysis {
        analyze_team(&self.index, team)
    }

    pub fn team_stats(&self, team: &[String]) -> TeamStats {
        team_stats(&self.index, team)
    }

    pub fn team_strength(&self, team: &[String]) -> f64 {
        team_strength(&self.index, team)
    }

    /// Rank every viable, unpicked and unbanned champion for `role`.
    pub fn recommend(
        &self,
        role: &str,
        team: &[String],
        enemies: &[String],
        banned: &[String],
        top_n: usize,
        lang: &str,
    ) -> Vec<Recommendation> {
        let excluded: HashSet<&str> = team
            .iter()
            .chain(enemies)
            .chain(banned)
            .map(String::as_str)
            .collect();

        let analysis = analyze_team(&self.index, team);
        let weights = weights_for(team.len());
        let explainer = Explainer::new(&self.strings, lang);

        let mut recommendations: Vec<Recommendation> = self
            .index
            .viable_champions(role)
            .into_iter()
            .filter(|c| !excluded.contains(c.id.as_str()))
            .map(|c| self.score_candidate(c, role, team, enemies, &analysis, &weights, &explainer))
            .collect();

        debug!(
            role,
            team = team.len(),
            enemies = enemies.len(),
            candidates = recommendations.len(),
            "ranked candidates"
        );

        // Stable: equal totals keep the viability order.
        recommendations.sort_by(|a, b| {
            b.total_score
                .partial_cmp(&a.total_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        recommendations.truncate(top_n);

        recommendations
    }

    /// Best picks for `role` against a single enemy champion.
    pub fn best_counters(&self, target: &str, role: &str, top_n: usize, lang: &str) -> Vec<Recommendation> {
        if self.index.champion(target).is_none() {
            return Vec::new();
        }
        self.recommend(role, &[], &[target.to_string()], &[], top_n, lang)
    }

    #[allow(clippy::too_many_arguments)]
    fn score_candidate(
        &self,
        champ: &Champion,
        role: &str,
        team: &[String],
        enemies: &[String],
        analysis: &TeamAnalysis,
        weights: &WeightVector,
        explainer: &Explainer,
    ) -> Recommendation {
        let mut synergy_exp = Vec::new();
        let mut counter_exp = Vec::new();
        let mut vulnerability_exp = Vec::new();

        let early_impact = self.index.early_impact(&champ.id);
        let late_scaling = self.index.late_scaling(&champ.id);

        let balance = balance_bonus(analysis, early_impact, late_scaling);
        let (damage_balance, damage_note) = damage_balance_bonus(analysis, champ.damage_kind());

        let components = Components {
            tier: self.index.tier_score(&champ.id),
            synergy: synergy_score(&self.index, &self.synergies, champ, team, explainer, &mut synergy_exp),
            counter: counter_score(&self.index, &self.counters, champ, enemies, explainer, &mut counter_exp),
            vulnerability: vulnerability_score(
                &self.index,
                &self.counters,
                champ,
                enemies,
                explainer,
                &mut vulnerability_exp,
            ),
            flex: flex_score(self.index.flex_role_count(&champ.id)),
            viability: champ.role_viability(role),
            balance,
            early_jungle: early_jungle_bonus(role, early_impact),
            damage_balance,
        };

        if let Some(note) = damage_note {
            let line = match note {
                DamageNote::NeedAp => explainer.need_ap(),
                DamageNote::NeedAd => explainer.need_ad(),
                DamageNote::MixedUseful => explainer.mixed_useful(),
            };
            synergy_exp.insert(0, line);
        }

        if balance > 0.0 {
            match analysis.power_curve {
                PowerCurve::Early => synergy_exp.push(explainer.balance_early()),
                PowerCurve::Late => synergy_exp.push(explainer.balance_late()),
                PowerCurve::Mid => {}
            }
        }

        Recommendation {
            champion: champ.clone(),
            total_score: components.total(weights),
            tier_name: champ.tier_label().to_string(),
            tier_score: components.tier,
            synergy_score: components.synergy,
            counter_score: components.counter,
            vulnerability_score: components.vulnerability,
            flex_score: components.flex,
            role_viability: components.viability,
            early_impact,
            late_scaling,
            balance_bonus: components.balance,
            early_jungle_bonus: components.early_jungle,
            damage_balance_bonus: components.damage_balance,
            synergy_explanations: synergy_exp,
            counter_explanations: counter_exp,
            vulnerability_explanations: vulnerability_exp,
        }
    }
}

/// Bonus for champions that can be drafted into several roles.
pub fn flex_score(flex_roles: usize) -> f64 {
    match flex_roles {
        0 | 1 => 0.0,
        2 => 0.10,
        3 => 0.20,
        _ => 0.30,
    }
}

/// Reward filling the team's weak half of the game.
pub fn balance_bonus(analysis: &TeamAnalysis, early_impact: f64, late_scaling: f64) -> f64 {
    match analysis.power_curve {
        PowerCurve::Early if late_scaling > 0.7 => 0.15,
        PowerCurve::Late if early_impact > 0.7 => 0.15,
        _ => analysis.balance_score * 0.05,
    }
}

pub fn early_jungle_bonus(role: &str, early_impact: f64) -> f64 {
    if role == "jungle" && early_impact > 0.7 {
        early_impact * 0.1
    } else {
        0.0
    }
}

fn damage_balance_bonus(analysis: &TeamAnalysis, damage: Option<DamageType>) -> (f64, Option<DamageNote>) {
    let ad_heavy = analysis.ad_count >= 2.5 && analysis.ap_count < 1.5;
    let ap_heavy = analysis.ap_count >= 2.5 && analysis.ad_count < 1.5;

    match damage {
        Some(DamageType::AP) if ad_heavy => (0.20, Some(DamageNote::NeedAp)),
        Some(DamageType::AD) if ap_heavy => (0.20, Some(DamageNote::NeedAd)),
        Some(kind) if kind.is_hybrid() && (ad_heavy || ap_heavy) => (0.10, Some(DamageNote::MixedUseful)),
        _ => (0.0, None),
    }
}
