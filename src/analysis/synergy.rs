use super::explain::Explainer;
use super::index::LookupIndex;
use crate::data::models::{Champion, SynergyRule};
use std::collections::HashMap;

/// Multiplier for the `occurrence`-th firing (1-based) of the same synergy.
pub fn diminishing_multiplier(occurrence: usize) -> f64 {
    match occurrence {
        0 | 1 => 1.0,
        2 => 0.75,
        3 => 0.5,
        _ => 0.33,
    }
}

/// Tag synergy between `candidate` and the current team, averaged over team size.
///
/// Explanation lines are appended to `explanations`, one per firing.
pub fn synergy_score(
    index: &LookupIndex,
    rules: &[SynergyRule],
    candidate: &Champion,
    team: &[String],
    explainer: &Explainer,
    explanations: &mut Vec<String>,
) -> f64 {
    if team.is_empty() {
        return 0.0;
    }

    let candidate_tags = candidate.tag_set();
    let mut fired: HashMap<&str, usize> = HashMap::new();
    let mut total = 0.0;

    for teammate in team.iter().filter_map(|id| index.champion(id)) {
        let teammate_tags = teammate.tag_set();

        for rule in rules {
            let Some((a, b)) = rule.tag_pair() else {
                continue;
            };

            let matches = (candidate_tags.contains(a) && teammate_tags.contains(b))
                || (candidate_tags.contains(b) && teammate_tags.contains(a));
            if !matches {
                continue;
            }

            let count = fired.entry(rule.name.as_str()).or_insert(0);
            *count += 1;
            let multiplier = diminishing_multiplier(*count);

            total += rule.score * multiplier;
            explanations.push(explainer.synergy(
                &rule.name,
                &teammate.name,
                &explainer.text(&rule.explanation, ""),
                multiplier,
            ));
        }
    }

    total / team.len() as f64
}
