//! Text-resource lookup shared by the UI string table and the per-language
//! text carried in the reference data.
//!
//! Language codes are compared case-insensitively ("en", "EN" and "En" are the
//! same language). A lookup that finds nothing resolves to the key itself.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Language used when the requested one is missing from a `LocalizedText`.
pub const FALLBACK_LANG: &str = "EN";

/// Marker under which a plain (language-neutral) string is stored.
const ANY_LANG: &str = "*";

pub trait TextResource {
    fn lookup(&self, key: &str, lang: &str) -> Option<&str>;

    fn resolve(&self, key: &str, lang: &str) -> String {
        self.lookup(key, lang)
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }
}

pub fn normalize_lang(lang: &str) -> String {
    lang.trim().to_uppercase()
}

/// Text available in one or more languages.
///
/// Deserializes from either a plain string or a `{lang: text}` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawText", into = "BTreeMap<String, String>")]
pub struct LocalizedText {
    entries: BTreeMap<String, String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawText {
    Plain(String),
    ByLang(BTreeMap<String, String>),
}

impl From<RawText> for LocalizedText {
    fn from(raw: RawText) -> Self {
        match raw {
            RawText::Plain(text) => LocalizedText::plain(text),
            RawText::ByLang(map) => LocalizedText {
                entries: map
                    .into_iter()
                    .map(|(lang, text)| (normalize_lang(&lang), text))
                    .collect(),
            },
        }
    }
}

impl From<LocalizedText> for BTreeMap<String, String> {
    fn from(text: LocalizedText) -> Self {
        text.entries
    }
}

impl LocalizedText {
    pub fn plain(text: impl Into<String>) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(ANY_LANG.to_string(), text.into());
        LocalizedText { entries }
    }

    pub fn with(mut self, lang: &str, text: impl Into<String>) -> Self {
        self.entries.insert(normalize_lang(lang), text.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Text for exactly `lang`, without fallbacks.
    pub fn exact(&self, lang: &str) -> Option<&str> {
        self.entries.get(&normalize_lang(lang)).map(String::as_str)
    }

    /// Text for `lang`, or an empty string when nothing is available.
    pub fn get(&self, lang: &str) -> &str {
        self.lookup("", lang).unwrap_or("")
    }
}

impl TextResource for LocalizedText {
    fn lookup(&self, _key: &str, lang: &str) -> Option<&str> {
        self.entries
            .get(&normalize_lang(lang))
            .or_else(|| self.entries.get(ANY_LANG))
            .or_else(|| self.entries.get(FALLBACK_LANG))
            .map(String::as_str)
    }
}

/// Keyed table of localized strings.
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    strings: HashMap<String, LocalizedText>,
}

impl StringTable {
    pub fn new() -> Self {
        StringTable::default()
    }

    pub fn insert(&mut self, key: &str, text: LocalizedText) {
        self.strings.insert(key.to_string(), text);
    }

    /// UI and explanation strings shipped with the engine.
    pub fn builtin() -> Self {
        let entries: [(&str, &str, &str); 12] = [
            ("synergy_with", "✓ {0} with {1}: {2}", "✓ {0} avec {1} : {2}"),
            ("matchup_advantage", "⚔ Advantage vs {0}: {1}", "⚔ Avantage contre {0} : {1}"),
            ("strong_against", "⚔ Strong against {0}: {1}", "⚔ Fort contre {0} : {1}"),
            ("archetype_vs", "⚔ {0} vs {1}: {2}", "⚔ {0} contre {1} : {2}"),
            ("hard_countered", "⚠ Hard countered by {0}: {1}", "⚠ Sévèrement contré par {0} : {1}"),
            ("weak_against", "⚠ Weak against {0}: {1}", "⚠ Faible contre {0} : {1}"),
            ("countered_by_arch", "⚠ Countered by {0} ({1}): {2}", "⚠ Contré par {0} ({1}) : {2}"),
            ("need_ap", "⚖️ Balance: Need magic damage", "⚖️ Équilibre : Besoin de dégâts magiques"),
            ("need_ad", "⚖️ Balance: Need physical damage", "⚖️ Équilibre : Besoin de dégâts physiques"),
            ("mixed_useful", "⚖️ Versatility: Mixed damage useful", "⚖️ Polyvalence : Dégâts mixtes utiles"),
            ("balance_early", "⏳ Stabilizes the late game", "⏳ Stabilise la fin de partie"),
            ("balance_late", "⚡ Bolsters the early game", "⚡ Renforce le début de partie"),
        ];

        let mut table = StringTable::new();
        for (key, en, fr) in entries {
            table.insert(key, LocalizedText::default().with("EN", en).with("FR", fr));
        }
        table
    }
}

impl TextResource for StringTable {
    fn lookup(&self, key: &str, lang: &str) -> Option<&str> {
        self.strings.get(key).and_then(|text| text.exact(lang))
    }
}

/// Fill `{0}`, `{1}`, ... placeholders in one pass over the template.
///
/// Substituted text is never rescanned. Placeholders without a matching
/// argument are kept as written.
pub fn fill(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let arg = after
            .find('}')
            .and_then(|close| after[..close].parse::<usize>().ok().map(|idx| (idx, close)))
            .and_then(|(idx, close)| args.get(idx).map(|arg| (*arg, close)));

        match arg {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
