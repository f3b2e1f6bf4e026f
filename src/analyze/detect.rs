//! Tactic detection: raw substring containment over the lowercased message.
//!
//! No tokenization and no punctuation stripping: a trigger matches wherever it
//! occurs, including inside longer words ("hoy" in "ahoyo").

use super::catalog::{Tactic, TacticCatalog, SUSPICIOUS_URL};

/// Link schemes that mark `suspicious_url` regardless of its trigger list.
pub const LINK_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Names of the tactics present in `text`, in catalog order, each at most once.
pub fn detect(catalog: &TacticCatalog, text: &str) -> Vec<String> {
    detect_lowered(catalog, &text.to_lowercase())
}

/// Same as [`detect`] for text that is already lowercased.
pub(crate) fn detect_lowered(catalog: &TacticCatalog, lowered: &str) -> Vec<String> {
    catalog
        .tactics()
        .iter()
        .filter(|t| is_present(t, lowered))
        .map(|t| t.name.clone())
        .collect()
}

fn is_present(tactic: &Tactic, lowered: &str) -> bool {
    if contains_any(lowered, &tactic.triggers) {
        return true;
    }
    tactic.name == SUSPICIOUS_URL && contains_any(lowered, &LINK_SCHEMES)
}

pub(crate) fn contains_any<S: AsRef<str>>(text: &str, needles: &[S]) -> bool {
    needles.iter().any(|n| text.contains(n.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat() -> &'static TacticCatalog {
        TacticCatalog::builtin()
    }

    #[test]
    fn empty_text_detects_nothing() {
        assert!(detect(cat(), "").is_empty());
    }

    #[test]
    fn reports_catalog_order_not_text_order() {
        // authority ("banco") appears before urgency ("urgente") in the text
        let found = detect(cat(), "Tu banco informa: responde urgente");
        assert_eq!(found, vec!["urgency", "authority"]);
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        assert_eq!(detect(cat(), "ÚLTIMOS CUPOS"), vec!["scarcity"]);
        // "hoy" inside a longer word still counts
        assert_eq!(detect(cat(), "ahoyo"), vec!["urgency"]);
    }

    #[test]
    fn any_link_scheme_marks_suspicious_url() {
        assert_eq!(
            detect(cat(), "Revisa tu factura en https://billing.example.com"),
            vec![SUSPICIOUS_URL]
        );
        assert_eq!(detect(cat(), "HTTP://example.org"), vec![SUSPICIOUS_URL]);
        assert_eq!(detect(cat(), "mira bit.ly/abc"), vec![SUSPICIOUS_URL]);
    }

    #[test]
    fn repeated_triggers_report_tactic_once() {
        let found = detect(cat(), "urgente urgente hoy ahora inmediato");
        assert_eq!(found, vec!["urgency"]);
    }

    #[test]
    fn link_scheme_only_applies_to_suspicious_url() {
        let custom = TacticCatalog::from_toml_str(
            r#"
boosts = []

[[tactics]]
name = "links"
triggers = ["enlace"]
"#,
        )
        .unwrap();
        assert!(detect(&custom, "https://example.com").is_empty());
    }
}
