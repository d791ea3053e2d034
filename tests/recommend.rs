// tests/recommend.rs
//
// End-to-end ranking behavior of DraftEngine::recommend on the fixture dataset.

mod common;

use common::{approx, engine, ids};
use wr_draft::analysis::weights::weights_for;
use wr_draft::{DraftState, Recommendation, Side, ROLES};

fn is_sorted(recs: &[Recommendation]) -> bool {
    recs.windows(2).all(|w| w[0].total_score >= w[1].total_score)
}

fn find<'a>(recs: &'a [Recommendation], id: &str) -> &'a Recommendation {
    recs.iter()
        .find(|r| r.champion.id == id)
        .unwrap_or_else(|| panic!("{} missing from recommendations", id))
}

#[test]
fn empty_draft_ranks_on_tier_viability_and_flex() {
    let engine = engine();
    let recs = engine.recommend("top", &[], &[], &[], 10, "EN");
    let w = weights_for(0);

    assert_eq!(recs.len(), 7);
    assert!(is_sorted(&recs));

    for rec in &recs {
        assert_eq!(rec.synergy_score, 0.0);
        assert_eq!(rec.counter_score, 0.0);
        assert_eq!(rec.vulnerability_score, 0.0);
        assert!(rec.synergy_explanations.is_empty());

        let expected = rec.tier_score * w.tier
            + rec.flex_score * w.flex
            + rec.role_viability * w.viability
            + rec.balance_bonus * w.balance;
        assert!(approx(rec.total_score, expected), "{}", rec.champion.id);
    }

    let top_two: Vec<&str> = recs[..2].iter().map(|r| r.champion.id.as_str()).collect();
    assert!(top_two.contains(&"malphite"));
    assert!(top_two.contains(&"fiora"));
    assert_eq!(recs.last().unwrap().champion.id, "teemo");
}

#[test]
fn unlisted_champion_gets_default_tier() {
    let engine = engine();
    let recs = engine.recommend("top", &[], &[], &[], 10, "EN");
    let kennen = find(&recs, "kennen");

    assert_eq!(kennen.tier_name, "B");
    assert_eq!(kennen.champion.tier.as_deref(), Some("B"));
    assert_eq!(kennen.tier_score, 0.5);
}

#[test]
fn results_are_truncated_and_sorted() {
    let engine = engine();
    for role in ROLES {
        let recs = engine.recommend(role, &ids(&["malphite"]), &ids(&["yasuo"]), &[], 3, "EN");
        assert!(recs.len() <= 3);
        assert!(is_sorted(&recs));
    }
    assert!(engine.recommend("top", &[], &[], &[], 0, "EN").is_empty());
}

#[test]
fn picked_and_banned_champions_are_excluded() {
    let engine = engine();
    let team = ids(&["malphite", "gragas"]);
    let enemies = ids(&["fiora", "ahri"]);
    let banned = ids(&["garen", "annie"]);

    for role in ROLES {
        let recs = engine.recommend(role, &team, &enemies, &banned, 50, "EN");
        for rec in &recs {
            let id = rec.champion.id.as_str();
            assert!(!team.iter().chain(&enemies).chain(&banned).any(|x| x == id), "{} leaked", id);
        }
    }
}

#[test]
fn ad_heavy_team_wants_magic_damage() {
    let engine = engine();
    let team = ids(&["garen", "darius", "jinx"]);

    let analysis = engine.analyze_team(&team);
    assert_eq!(analysis.ad_count, 3.0);
    assert_eq!(analysis.ap_count, 0.0);

    let recs = engine.recommend("mid", &team, &[], &[], 10, "EN");
    let ahri = find(&recs, "ahri");
    assert!(approx(ahri.damage_balance_bonus, 0.20));
    assert_eq!(ahri.synergy_explanations[0], "⚖️ Balance: Need magic damage");

    let yasuo = find(&recs, "yasuo");
    assert_eq!(yasuo.damage_balance_bonus, 0.0);
}

#[test]
fn repeated_synergy_diminishes_across_teammates() {
    let engine = engine();
    let recs = engine.recommend("mid", &ids(&["malphite", "gragas", "leesin"]), &[], &[], 10, "EN");
    let yasuo = find(&recs, "yasuo");

    assert!(approx(yasuo.synergy_score, 0.8 * (1.0 + 0.75 + 0.5) / 3.0));
    assert_eq!(
        yasuo.synergy_explanations,
        vec![
            "✓ Wombo with Malphite: Knockups feed Last Breath",
            "✓ Wombo with Gragas: Knockups feed Last Breath (x75%)",
            "✓ Wombo with Lee Sin: Knockups feed Last Breath (x50%)",
        ]
    );
}

#[test]
fn early_team_values_late_scaling() {
    let engine = engine();
    let recs = engine.recommend("adc", &ids(&["darius", "leesin"]), &[], &[], 10, "EN");
    let jinx = find(&recs, "jinx");

    assert_eq!(jinx.balance_bonus, 0.15);
    assert_eq!(
        jinx.synergy_explanations.last().map(String::as_str),
        Some("⏳ Stabilizes the late game")
    );
}

#[test]
fn early_junglers_get_a_bonus() {
    let engine = engine();
    let recs = engine.recommend("jungle", &[], &[], &[], 10, "EN");

    assert!(approx(find(&recs, "leesin").early_jungle_bonus, 0.09));
    assert_eq!(find(&recs, "gragas").early_jungle_bonus, 0.0);
}

#[test]
fn dash_champions_are_exposed_to_point_click_cc() {
    let engine = engine();
    let recs = engine.recommend("mid", &[], &ids(&["annie"]), &[], 10, "EN");

    let yasuo = find(&recs, "yasuo");
    assert!(approx(yasuo.vulnerability_score, 0.5));
    assert_eq!(
        yasuo.vulnerability_explanations,
        vec!["⚠ Countered by Annie (Anti-dash): Locks down mobile targets"]
    );
    assert_eq!(find(&recs, "kennen").vulnerability_score, 0.0);

    let fr = engine.recommend("mid", &[], &ids(&["annie"]), &[], 10, "fr");
    assert_eq!(
        find(&fr, "ahri").vulnerability_explanations,
        vec!["⚠ Contré par Annie (Anti-dash) : Immobilise les cibles mobiles"]
    );
}

#[test]
fn enemy_side_selection_inverts_teams() {
    let engine = engine();
    let mut draft = DraftState::new();
    draft.pick(Side::Ally, 0, "malphite").unwrap();
    draft.pick(Side::Enemy, 2, "yasuo").unwrap();

    let query = draft.query(Side::Enemy);
    let recs = engine.recommend("top", &query.team, &query.enemies, &query.banned, 10, "EN");

    let fiora = find(&recs, "fiora");
    assert!(approx(fiora.counter_score, 0.48));
    assert_eq!(
        fiora.counter_explanations,
        vec!["⚔ Tank shred vs Malphite: True damage ignores armor"]
    );

    let gragas = find(&recs, "gragas");
    assert!(approx(gragas.synergy_score, 0.8));
    assert_eq!(gragas.synergy_explanations[0], "✓ Wombo with Yasuo: Knockups feed Last Breath");
}

#[test]
fn best_counters_ranks_matchup_winners_first() {
    let engine = engine();
    let recs = engine.best_counters("garen", "top", 5, "EN");

    assert_eq!(recs[0].champion.id, "fiora");
    assert!(approx(recs[0].counter_score, 0.6));
    assert_eq!(
        recs[0].counter_explanations,
        vec![
            "⚔ Strong against Garen: Vitals outpace sustain",
            "⚔ Tank shred vs Garen: Melts health stacking",
        ]
    );
    assert!(recs.iter().all(|r| r.champion.id != "garen"));

    assert!(engine.best_counters("ghost", "top", 5, "EN").is_empty());
}

#[test]
fn unknown_ids_are_ignored_but_excluded() {
    let engine = engine();
    let recs = engine.recommend("top", &ids(&["ghost"]), &ids(&["phantom"]), &ids(&["fiora"]), 10, "EN");

    assert!(!recs.is_empty());
    assert!(recs.iter().all(|r| r.champion.id != "fiora"));
    assert!(recs.iter().all(|r| r.synergy_score == 0.0 && r.counter_score == 0.0));
    assert!(engine.recommend("bench", &[], &[], &[], 10, "EN").is_empty());
}

#[test]
fn identical_queries_give_identical_output() {
    let engine = engine();
    let team = ids(&["malphite", "gragas"]);
    let enemies = ids(&["yasuo", "annie"]);

    let first = engine.recommend("mid", &team, &enemies, &[], 10, "EN");
    let second = engine.recommend("mid", &team, &enemies, &[], 10, "EN");

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn ap_heavy_team_wants_physical_or_mixed_damage() {
    let engine = engine();
    let team = ids(&["malphite", "ahri", "annie"]);

    let analysis = engine.analyze_team(&team);
    assert_eq!(analysis.ap_count, 3.0);
    assert_eq!(analysis.ad_count, 0.0);

    let recs = engine.recommend("adc", &team, &[], &[], 10, "EN");

    let jinx = find(&recs, "jinx");
    assert!(approx(jinx.damage_balance_bonus, 0.20));
    assert_eq!(jinx.synergy_explanations[0], "⚖️ Balance: Need physical damage");

    let kaisa = find(&recs, "kaisa");
    assert!(approx(kaisa.damage_balance_bonus, 0.10));
    assert_eq!(kaisa.synergy_explanations[0], "⚖️ Versatility: Mixed damage useful");
}

#[test]
fn late_team_values_early_impact() {
    let engine = engine();
    let recs = engine.recommend("top", &ids(&["yasuo", "jinx"]), &[], &[], 10, "EN");
    let darius = find(&recs, "darius");

    assert_eq!(darius.balance_bonus, 0.15);
    assert_eq!(
        darius.synergy_explanations.last().map(String::as_str),
        Some("⚡ Bolsters the early game")
    );
}

#[test]
fn counter_lines_list_matchup_counters_before_strong_against() {
    let engine = engine();
    let recs = engine.recommend("top", &[], &ids(&["garen", "darius"]), &[], 10, "EN");
    let fiora = find(&recs, "fiora");

    // 0.3 darius + 0.2 garen + 0.4 tank shred on garen, over two enemies
    assert!(approx(fiora.counter_score, 0.45));
    assert_eq!(
        fiora.counter_explanations,
        vec![
            "⚔ Advantage vs Darius: Riposte stops the pull",
            "⚔ Strong against Garen: Vitals outpace sustain",
            "⚔ Tank shred vs Garen: Melts health stacking",
        ]
    );
}

#[test]
fn duplicate_enemy_does_not_repeat_matchup_entry() {
    let engine = engine();
    let recs = engine.recommend("top", &[], &ids(&["darius", "darius"]), &[], 10, "EN");
    let fiora = find(&recs, "fiora");

    assert!(approx(fiora.counter_score, 0.15));
    assert_eq!(fiora.counter_explanations, vec!["⚔ Advantage vs Darius: Riposte stops the pull"]);
}
