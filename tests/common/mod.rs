// tests/common/mod.rs
//
// Small hand-made dataset shared by the integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::collections::HashMap;
use wr_draft::data::models::{ChampionMatchup, ChampionMeta, TierList};
use wr_draft::{Dataset, DraftEngine};

pub fn champions_json() -> Value {
    json!({
        "champions": [
            { "id": "malphite", "name": "Malphite", "roles": { "top": 0.9, "support": 0.5 },
              "kit_tags": ["engage", "tank", "knockup"], "damage_type": "AP", "scaling": "mid",
              "description": { "EN": "Unstoppable rock", "FR": "Rocher inarrêtable" } },
            { "id": "garen", "name": "Garen", "roles": { "top": 0.9 },
              "kit_tags": ["tank", "sustain"], "damage_type": "AD", "scaling": "mid" },
            { "id": "darius", "name": "Darius", "roles": { "top": 0.8 },
              "kit_tags": ["juggernaut", "bleed"], "damage_type": "AD", "scaling": "early" },
            { "id": "fiora", "name": "Fiora", "roles": { "top": 0.8 },
              "kit_tags": ["percent_hp", "dash"], "damage_type": "AD", "scaling": "late" },
            { "id": "kennen", "name": "Kennen", "roles": { "top": 0.6, "mid": 0.5 },
              "kit_tags": ["aoe", "engage"], "damage_type": "AP", "scaling": "mid" },
            { "id": "teemo", "name": "Teemo", "roles": { "top": 0.5 },
              "kit_tags": ["poke", "blind"], "damage_type": "AP", "scaling": "mid" },
            { "id": "gragas", "name": "Gragas", "roles": { "top": 0.6, "jungle": 0.8, "mid": 0.5, "support": 0.5 },
              "kit_tags": ["engage", "knockup", "aoe"], "damage_type": "AP", "scaling": "mid" },
            { "id": "leesin", "name": "Lee Sin", "roles": { "jungle": 0.9 },
              "kit_tags": ["dash", "knockup"], "damage_type": "AD", "scaling": "early" },
            { "id": "yasuo", "name": "Yasuo", "roles": { "mid": 0.9, "top": 0.4 },
              "kit_tags": ["dash", "knockup_followup"], "damage_type": "AD", "scaling": "late" },
            { "id": "jinx", "name": "Jinx", "roles": { "adc": 1.0 },
              "kit_tags": ["hypercarry"], "damage_type": "AD", "scaling": "late" },
            { "id": "kaisa", "name": "Kai'Sa", "roles": { "adc": 0.8 },
              "kit_tags": ["dash"], "damage_type": "Mixed", "scaling": "late" },
            { "id": "thresh", "name": "Thresh", "roles": { "support": 1.0 },
              "kit_tags": ["hook", "engage"], "damage_type": "AD", "scaling": "mid" },
            { "id": "ahri", "name": "Ahri", "roles": { "mid": 0.9 },
              "kit_tags": ["charm", "dash"], "damage_type": "AP", "scaling": "mid" },
            { "id": "annie", "name": "Annie", "roles": { "mid": 0.7, "support": 0.5 },
              "kit_tags": ["point_click_cc", "aoe"], "damage_type": "AP", "scaling": "early" }
        ]
    })
}

pub fn synergies_json() -> Value {
    json!({
        "synergies": [
            { "name": "Wombo", "tags": ["knockup", "yasuo"], "score": 0.8,
              "explanation": { "EN": "Knockups feed Last Breath", "FR": "Les projections alimentent Dernier Souffle" } },
            { "name": "Frontline", "tags": ["engage", "aoe"], "score": 0.5,
              "explanation": "Engage sets up area damage" }
        ]
    })
}

pub fn counters_json() -> Value {
    json!({
        "counters": [
            { "name": "Anti-dash", "attacker_tags": ["point_click_cc"], "defender_tags": ["dash", "blink"],
              "score": 0.5, "explanation": { "EN": "Locks down mobile targets", "FR": "Immobilise les cibles mobiles" } },
            { "name": "Tank shred", "attacker_tags": ["percent_hp"], "defender_tags": ["tank"],
              "score": 0.4, "explanation": "Melts health stacking",
              "strong_against": { "champions": ["malphite"], "explanation": "True damage ignores armor" } }
        ]
    })
}

pub fn matchups_json() -> Value {
    json!([
        { "champion": "fiora",
          "counters": [{ "target": "darius", "strength": 0.3, "reason": "Riposte stops the pull" }],
          "strong_against": [{ "target": "garen", "strength": 0.2, "reason": "Vitals outpace sustain" }] },
        { "champion": "malphite",
          "counters": [{ "target": "yasuo", "strength": -0.4, "reason": "Armor stacking" }] }
    ])
}

pub fn tier_list_json() -> Value {
    json!({
        "tier_scoring": { "S+": 1.0, "S": 0.9, "A": 0.75, "C": 0.4, "D": 0.2 },
        "champion_tiers": {
            "malphite": { "tier": "S" },
            "garen": { "tier": "A" },
            "darius": { "tier": "S" },
            "fiora": { "tier": "S+" },
            "teemo": { "tier": "D" },
            "gragas": { "tier": "A" },
            "leesin": { "tier": "S" },
            "yasuo": { "tier": "A" },
            "jinx": { "tier": "S" },
            "kaisa": { "tier": "A" },
            "thresh": { "tier": "S" },
            "ahri": { "tier": "A" },
            "annie": { "tier": "C" }
        }
    })
}

pub fn meta_json() -> Value {
    json!({
        "champion_meta": {
            "malphite": { "early_impact": 0.4, "late_scaling": 0.7, "flex_roles": ["top", "support"] },
            "garen": { "early_impact": 0.6, "late_scaling": 0.5 },
            "darius": { "early_impact": 0.8, "late_scaling": 0.4 },
            "gragas": { "early_impact": 0.6, "late_scaling": 0.6, "flex_roles": ["top", "jungle", "mid", "support"] },
            "leesin": { "early_impact": 0.9, "late_scaling": 0.4 },
            "yasuo": { "early_impact": 0.5, "late_scaling": 0.8 },
            "jinx": { "early_impact": 0.3, "late_scaling": 0.9 },
            "kaisa": { "early_impact": 0.4, "late_scaling": 0.8, "flex_roles": ["adc", "mid"] },
            "ahri": { "early_impact": 0.6, "late_scaling": 0.6, "flex_roles": ["mid", "adc", "support"] },
            "annie": { "early_impact": 0.7, "late_scaling": 0.5 }
        }
    })
}

pub fn dataset() -> Dataset {
    let champions = serde_json::from_value(champions_json()["champions"].clone()).unwrap();
    let synergies = serde_json::from_value(synergies_json()["synergies"].clone()).unwrap();
    let counters = serde_json::from_value(counters_json()["counters"].clone()).unwrap();
    let matchups: Vec<ChampionMatchup> = serde_json::from_value(matchups_json()).unwrap();
    let tier_list: TierList = serde_json::from_value(tier_list_json()).unwrap();
    let meta: HashMap<String, ChampionMeta> =
        serde_json::from_value(meta_json()["champion_meta"].clone()).unwrap();

    Dataset::new(champions, synergies, counters, matchups, Some(tier_list), meta)
}

pub fn engine() -> DraftEngine {
    DraftEngine::new(dataset())
}

pub fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
