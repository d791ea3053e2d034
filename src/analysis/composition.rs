use super::index::LookupIndex;
use crate::data::models::{DamageType, DEFAULT_TIER};
use serde::Serialize;

/// Gap between average early and late power that tips a team's curve.
const CURVE_MARGIN: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerCurve {
    Early,
    Mid,
    Late,
}

impl PowerCurve {
    pub fn as_str(self) -> &'static str {
        match self {
            PowerCurve::Early => "early",
            PowerCurve::Mid => "mid",
            PowerCurve::Late => "late",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamAnalysis {
    pub early_power: f64,
    pub late_power: f64,
    pub balance_score: f64,
    pub power_curve: PowerCurve,
    pub ad_count: f64,
    pub ap_count: f64,
}

impl TeamAnalysis {
    fn empty() -> Self {
        TeamAnalysis {
            early_power: 0.5,
            late_power: 0.5,
            balance_score: 1.0,
            power_curve: PowerCurve::Mid,
            ad_count: 0.0,
            ap_count: 0.0,
        }
    }
}

/// Summarize the power balance and damage split of a team.
///
/// Meta defaults apply to every listed id, known or not; damage counts only
/// consider champions present in the index.
pub fn analyze_team(index: &LookupIndex, team: &[String]) -> TeamAnalysis {
    if team.is_empty() {
        return TeamAnalysis::empty();
    }

    let n = team.len() as f64;
    let avg_early = team.iter().map(|id| index.early_impact(id)).sum::<f64>() / n;
    let avg_late = team.iter().map(|id| index.late_scaling(id)).sum::<f64>() / n;

    let balance_score = 1.0 - (avg_early - avg_late).abs();

    let power_curve = if avg_early > avg_late + CURVE_MARGIN {
        PowerCurve::Early
    } else if avg_late > avg_early + CURVE_MARGIN {
        PowerCurve::Late
    } else {
        PowerCurve::Mid
    };

    let mut ad_count = 0.0;
    let mut ap_count = 0.0;
    for champ in team.iter().filter_map(|id| index.champion(id)) {
        match champ.damage_kind() {
            Some(DamageType::AD) => ad_count += 1.0,
            Some(DamageType::AP) => ap_count += 1.0,
            Some(DamageType::Mixed) | Some(DamageType::Adaptive) => {
                ad_count += 0.5;
                ap_count += 0.5;
            }
            None => {}
        }
    }

    TeamAnalysis {
        early_power: avg_early,
        late_power: avg_late,
        balance_score,
        power_curve,
        ad_count,
        ap_count,
    }
}

/// Display-oriented aggregate of a team's damage split and timing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStats {
    pub ad_percent: u32,
    pub ap_percent: u32,
    /// 0 = fully early game, 100 = fully late game.
    pub time_score: f64,
    /// 0..=3
    pub damage_score: f64,
    pub damage_percent: f64,
}

pub fn team_stats(index: &LookupIndex, team: &[String]) -> TeamStats {
    if team.is_empty() {
        return TeamStats {
            ad_percent: 50,
            ap_percent: 50,
            time_score: 50.0,
            damage_score: 0.0,
            damage_percent: 0.0,
        };
    }

    let analysis = analyze_team(index, team);

    let total_damage = (analysis.ad_count + analysis.ap_count).max(0.0001);
    let ad_percent = ((analysis.ad_count / total_damage) * 100.0).round() as u32;
    let ap_percent = 100u32.saturating_sub(ad_percent);

    let timing = (analysis.early_power + analysis.late_power).max(0.0001);
    let time_score = (analysis.late_power / timing) * 100.0;

    let n = team.len() as f64;
    let normalized_damage = ((analysis.ad_count + analysis.ap_count) / n.max(1.0)).min(1.0);

    TeamStats {
        ad_percent,
        ap_percent,
        time_score,
        damage_score: normalized_damage * 3.0,
        damage_percent: normalized_damage * 100.0,
    }
}

fn tier_weight(tier: &str) -> f64 {
    match tier {
        "S+" => 1.0,
        "S" => 0.9,
        "A" => 0.75,
        "B" => 0.60,
        "C" => 0.40,
        "D" => 0.20,
        _ => 0.60,
    }
}

/// Overall pick strength of a (up to five champion) team in [0, 1].
pub fn team_strength(index: &LookupIndex, team: &[String]) -> f64 {
    let total: f64 = team
        .iter()
        .filter_map(|id| index.champion(id))
        .map(|c| tier_weight(c.tier.as_deref().unwrap_or(DEFAULT_TIER)))
        .sum();

    (total / 5.0).min(1.0)
}
