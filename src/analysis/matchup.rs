//! Counter and vulnerability scoring.
//!
//! Both scorers run the same algorithm; only the attacker/defender roles of
//! the subject and its opponents are swapped.

use super::explain::Explainer;
use super::index::LookupIndex;
use crate::data::models::{Champion, ChampionMatchup, CounterRule, MatchupEntry};
use std::collections::HashSet;

/// Applied to a counter rule's score when its `strong_against` list names the defender.
pub const SPECIFIC_MATCH_MULTIPLIER: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The subject attacks: how well it counters the opponents.
    Counter,
    /// The opponents attack: how exposed the subject is to them.
    Vulnerability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Counter,
    StrongAgainst,
}

/// Score the subject against `opponents` in the given direction, averaged
/// over the opponent count.
///
/// Pairwise matchup lines come first, then archetype lines in opponent order.
/// Countering walks the subject's record (`counters` before `strong_against`);
/// vulnerability walks each known opponent's record in opponent order.
pub fn matchup_score(
    index: &LookupIndex,
    rules: &[CounterRule],
    subject: &Champion,
    opponents: &[String],
    direction: Direction,
    explainer: &Explainer,
    explanations: &mut Vec<String>,
) -> f64 {
    if opponents.is_empty() {
        return 0.0;
    }

    let mut total = 0.0;

    match direction {
        // Walk the subject's own record; each entry fires at most once.
        Direction::Counter => {
            if let Some(record) = index.matchup(&subject.id) {
                for (kind, entry) in record_entries(record) {
                    if !opponents.iter().any(|id| *id == entry.target) {
                        continue;
                    }
                    total += pairwise_value(entry, direction);
                    explanations.push(pairwise_line(
                        explainer,
                        kind,
                        direction,
                        index.name_of(&entry.target),
                        entry,
                    ));
                }
            }
        }
        // Walk each known opponent's record for entries naming the subject.
        Direction::Vulnerability => {
            for opponent_id in opponents {
                if index.champion(opponent_id).is_none() {
                    continue;
                }
                let Some(record) = index.matchup(opponent_id) else {
                    continue;
                };
                let opponent_name = index.name_of(opponent_id);

                for (kind, entry) in record_entries(record).filter(|(_, e)| e.target == subject.id) {
                    total += pairwise_value(entry, direction);
                    explanations.push(pairwise_line(explainer, kind, direction, opponent_name, entry));
                }
            }
        }
    }

    let subject_tags = subject.tag_set();

    for opponent in opponents.iter().filter_map(|id| index.champion(id)) {
        let opponent_tags = opponent.tag_set();
        let (attacker_tags, defender_tags, defender_id) = match direction {
            Direction::Counter => (&subject_tags, &opponent_tags, opponent.id.as_str()),
            Direction::Vulnerability => (&opponent_tags, &subject_tags, subject.id.as_str()),
        };

        for rule in rules {
            let tag_match = archetype_applies(rule, attacker_tags, defender_tags);
            let specific_match = rule.names_champion(defender_id);
            if !tag_match && !specific_match {
                continue;
            }

            total += if specific_match {
                rule.score * SPECIFIC_MATCH_MULTIPLIER
            } else {
                rule.score
            };

            let text = match &rule.strong_against {
                Some(strong) if specific_match && !strong.explanation.is_empty() => {
                    explainer.text(&strong.explanation, "")
                }
                _ => explainer.text(&rule.explanation, ""),
            };

            explanations.push(match direction {
                Direction::Counter => explainer.archetype_advantage(&rule.name, &opponent.name, &text),
                Direction::Vulnerability => explainer.countered_by_archetype(&opponent.name, &rule.name, &text),
            });
        }
    }

    total / opponents.len() as f64
}

pub fn counter_score(
    index: &LookupIndex,
    rules: &[CounterRule],
    candidate: &Champion,
    enemies: &[String],
    explainer: &Explainer,
    explanations: &mut Vec<String>,
) -> f64 {
    matchup_score(index, rules, candidate, enemies, Direction::Counter, explainer, explanations)
}

pub fn vulnerability_score(
    index: &LookupIndex,
    rules: &[CounterRule],
    candidate: &Champion,
    enemies: &[String],
    explainer: &Explainer,
    explanations: &mut Vec<String>,
) -> f64 {
    matchup_score(index, rules, candidate, enemies, Direction::Vulnerability, explainer, explanations)
}

/// All attacker tags present on the attacker, and at least one defender tag on the defender.
fn archetype_applies(rule: &CounterRule, attacker: &HashSet<&str>, defender: &HashSet<&str>) -> bool {
    rule.attacker_tags.iter().all(|t| attacker.contains(t.as_str()))
        && rule.defender_tags.iter().any(|t| defender.contains(t.as_str()))
}

/// `counters` entries, then `strong_against` entries, in record order.
fn record_entries(record: &ChampionMatchup) -> impl Iterator<Item = (EntryKind, &MatchupEntry)> {
    record
        .counters
        .iter()
        .map(|e| (EntryKind::Counter, e))
        .chain(record.strong_against.iter().map(|e| (EntryKind::StrongAgainst, e)))
}

fn pairwise_value(entry: &MatchupEntry, direction: Direction) -> f64 {
    match direction {
        Direction::Counter => entry.strength,
        Direction::Vulnerability => entry.strength.abs(),
    }
}

fn pairwise_line(
    explainer: &Explainer,
    kind: EntryKind,
    direction: Direction,
    opponent: &str,
    entry: &MatchupEntry,
) -> String {
    let reason = explainer.text(&entry.reason, "");
    match (direction, kind) {
        (Direction::Counter, EntryKind::Counter) => explainer.matchup_advantage(opponent, &reason),
        (Direction::Counter, EntryKind::StrongAgainst) => explainer.strong_against(opponent, &reason),
        (Direction::Vulnerability, EntryKind::Counter) => explainer.hard_countered(opponent, &reason),
        (Direction::Vulnerability, EntryKind::StrongAgainst) => explainer.weak_against(opponent, &reason),
    }
}
