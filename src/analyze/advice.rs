// src/analyze/advice.rs
//! Fixed, user-facing texts attached to every analysis (Spanish locale).

use super::Label;

/// Same for every call: names the heuristic families that were evaluated.
pub const RATIONALE: &str =
    "Heurísticas locales: urgencia/autoridad/enlace y solicitud de datos/pago.";

const CAUTION: &str = "No hagas clic ni compartas datos. Verifica por el canal oficial.";
const NEUTRAL: &str = "Sin riesgos aparentes. Mantén precaución.";

pub fn recommend(label: Label) -> &'static str {
    match label {
        Label::Legitimate => NEUTRAL,
        Label::Manipulative | Label::Uncertain => CAUTION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_legitimate_gets_the_neutral_text() {
        assert_eq!(recommend(Label::Legitimate), NEUTRAL);
        assert_eq!(recommend(Label::Uncertain), CAUTION);
        assert_eq!(recommend(Label::Manipulative), CAUTION);
    }
}
