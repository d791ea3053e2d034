//! Localized explanation lines attached to recommendations.

use crate::i18n::{fill, normalize_lang, LocalizedText, TextResource};

pub struct Explainer<'a> {
    strings: &'a dyn TextResource,
    lang: String,
}

impl<'a> Explainer<'a> {
    pub fn new(strings: &'a dyn TextResource, lang: &str) -> Self {
        Explainer {
            strings,
            lang: normalize_lang(lang),
        }
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Resolve reference-data text; `fallback` is returned when nothing matches.
    pub fn text(&self, text: &LocalizedText, fallback: &str) -> String {
        text.resolve(fallback, &self.lang)
    }

    fn line(&self, key: &str, args: &[&str]) -> String {
        fill(&self.strings.resolve(key, &self.lang), args)
    }

    pub fn synergy(&self, synergy: &str, teammate: &str, explanation: &str, multiplier: f64) -> String {
        let line = self.line("synergy_with", &[synergy, teammate, explanation]);
        if multiplier < 1.0 {
            format!("{} (x{:.0}%)", line, multiplier * 100.0)
        } else {
            line
        }
    }

    pub fn matchup_advantage(&self, enemy: &str, reason: &str) -> String {
        self.line("matchup_advantage", &[enemy, reason])
    }

    pub fn strong_against(&self, enemy: &str, reason: &str) -> String {
        self.line("strong_against", &[enemy, reason])
    }

    pub fn archetype_advantage(&self, rule: &str, enemy: &str, explanation: &str) -> String {
        self.line("archetype_vs", &[rule, enemy, explanation])
    }

    pub fn hard_countered(&self, enemy: &str, reason: &str) -> String {
        self.line("hard_countered", &[enemy, reason])
    }

    pub fn weak_against(&self, enemy: &str, reason: &str) -> String {
        self.line("weak_against", &[enemy, reason])
    }

    pub fn countered_by_archetype(&self, enemy: &str, rule: &str, explanation: &str) -> String {
        self.line("countered_by_arch", &[enemy, rule, explanation])
    }

    pub fn need_ap(&self) -> String {
        self.strings.resolve("need_ap", &self.lang)
    }

    pub fn need_ad(&self) -> String {
        self.strings.resolve("need_ad", &self.lang)
    }

    pub fn mixed_useful(&self) -> String {
        self.strings.resolve("mixed_useful", &self.lang)
    }

    /// Note for an early-game team gaining late-game scaling.
    pub fn balance_early(&self) -> String {
        self.strings.resolve("balance_early", &self.lang)
    }

    /// Note for a late-game team gaining early pressure.
    pub fn balance_late(&self) -> String {
        self.strings.resolve("balance_late", &self.lang)
    }
}
