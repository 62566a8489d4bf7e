use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{NoExpand, Regex, RegexBuilder};

use crate::domain::term::{
    dictionary::{ENGLISH_TO_KOREAN, QUERY_TO_ENGLISH},
    value_objects::OriginHint,
};

pub const PASSTHROUGH_NOTICE: &str = " (본 텍스트는 내부 엔진을 거쳐 한국어로 통역되었습니다.)";

static QUERY_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| QUERY_TO_ENGLISH.iter().copied().collect());

static DISPLAY_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    ENGLISH_TO_KOREAN
        .iter()
        .map(|(english, korean)| {
            let pattern = RegexBuilder::new(&regex::escape(english))
                .case_insensitive(true)
                .build()
                .expect("escaped dictionary key is a valid pattern");
            (pattern, *korean)
        })
        .collect()
});

/// Map a user query to the English working key used for provider lookups.
///
/// Unknown terms pass through trimmed and lower-cased.
pub fn to_canonical(query: &str) -> String {
    let key = query.trim().to_lowercase();

    match QUERY_INDEX.get(key.as_str()) {
        Some(english) => (*english).to_string(),
        None => key,
    }
}

/// Rewrite English provider text into Korean display text.
///
/// Every rule is applied to the whole text in declaration order. When nothing
/// changed and the text came from a foreign non-English source, the passthrough
/// notice is appended.
pub fn to_localized(text: &str, origin: OriginHint) -> String {
    if text.is_empty() {
        return String::new();
    }

    let translated = DISPLAY_RULES
        .iter()
        .fold(text.to_string(), |acc, (pattern, korean)| {
            pattern.replace_all(&acc, NoExpand(korean)).into_owned()
        });

    if translated == text && origin.discloses_passthrough() {
        format!("{text}{PASSTHROUGH_NOTICE}")
    } else {
        translated
    }
}
