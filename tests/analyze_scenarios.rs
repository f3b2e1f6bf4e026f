// tests/analyze_scenarios.rs
//
// End-to-end checks of the message analyzer through the public library API,
// with the built-in Spanish catalog.

use fintrack_ai::analyze::{detect, label, score};
use fintrack_ai::{analyze_text, AnalysisResult, Label, TacticCatalog};

fn run(msg: &str) -> AnalysisResult {
    analyze_text(TacticCatalog::builtin(), msg)
}

#[test]
fn clean_message_is_legitimate_with_zero_score() {
    let out = run("Hola, nos vemos mañana para el almuerzo");
    assert!(out.tactics_detected.is_empty());
    assert_eq!(out.risk_score, 0.0);
    assert_eq!(out.label, Label::Legitimate);
    assert_eq!(out.recommendation, "Sin riesgos aparentes. Mantén precaución.");
}

#[test]
fn empty_message_is_legitimate() {
    let out = run("");
    assert!(out.tactics_detected.is_empty());
    assert_eq!(out.risk_score, 0.0);
    assert_eq!(out.label, Label::Legitimate);
}

#[test]
fn suspended_account_with_password_request() {
    let out = run("Tu cuenta será suspendida hoy, verifica tu clave urgente");
    assert_eq!(out.tactics_detected, vec!["urgency", "request_money"]);
    // "suspendida" does not contain "suspende": only the credential boost applies
    assert_eq!(out.risk_score, 0.45);
    assert_eq!(out.label, Label::Uncertain);
    assert_eq!(
        out.recommendation,
        "No hagas clic ni compartas datos. Verifica por el canal oficial."
    );
}

#[test]
fn plain_https_link_counts_as_suspicious_url() {
    let out = run("Revisa tu factura en https://billing.example.com");
    assert_eq!(out.tactics_detected, vec!["suspicious_url"]);
    assert_eq!(out.risk_score, 0.1);
    assert_eq!(out.label, Label::Uncertain);
}

#[test]
fn exactly_075_is_manipulative() {
    // five tactics (0.5) + account-lock boost (0.25), no credential keyword
    let out = run("URGENTE: el banco avisa del bloqueo; últimos cupos, transfiere a bit.ly/pago");
    assert_eq!(out.tactics_detected.len(), 5);
    assert_eq!(out.risk_score, 0.75);
    assert_eq!(out.label, Label::Manipulative);
}

#[test]
fn boost_only_at_025_is_legitimate() {
    let out = run("Aviso de bloqueo preventivo");
    assert!(out.tactics_detected.is_empty());
    assert_eq!(out.risk_score, 0.25);
    assert_eq!(out.label, Label::Legitimate);
}

#[test]
fn low_score_with_a_tactic_is_uncertain() {
    assert_eq!(label(0.25, 1), Label::Uncertain);
    let out = run("Llámame ahora");
    assert_eq!(out.tactics_detected, vec!["urgency"]);
    assert_eq!(out.label, Label::Uncertain);
}

#[test]
fn output_follows_catalog_order() {
    let out = run("Soporte técnico: responde ahora");
    assert_eq!(out.tactics_detected, vec!["urgency", "authority"]);
}

#[test]
fn non_ascii_and_uppercase_input() {
    let out = run("¡ÚLTIMA OPORTUNIDAD! 🔥 CÓDIGO: 1234");
    assert_eq!(out.tactics_detected, vec!["urgency", "request_money"]);
    assert_eq!(out.risk_score, 0.45);
}

#[test]
fn score_is_always_bounded_and_idempotent() {
    let samples = [
        "",
        "   ",
        "suspende bloqueo clave código urgente banco cupos wallet http://x bit.ly",
        "Solo hoy: edición limitada, envía tus datos de la wallet cripto",
        "\u{0}\u{feff}🙂",
        "Tu pedido llegó",
    ];
    for msg in samples {
        let a = run(msg);
        let b = run(msg);
        assert_eq!(a, b, "not idempotent for {msg:?}");
        assert!((0.0..=1.0).contains(&a.risk_score), "{msg:?} -> {}", a.risk_score);
    }
}

#[test]
fn custom_catalog_score_never_exceeds_one() {
    let cat = TacticCatalog::from_json_str(
        r#"{
            "tactics": [
                {"name": "premio", "triggers": ["xyz"]},
                {"name": "regalo", "triggers": ["xyz"]},
                {"name": "sorteo", "triggers": ["xyz"]}
            ],
            "boosts": [
                {"name": "uno", "keywords": ["xyz"]},
                {"name": "dos", "keywords": ["xyz"]},
                {"name": "tres", "keywords": ["xyz"]}
            ]
        }"#,
    )
    .unwrap();
    let out = analyze_text(&cat, "XYZ");
    assert_eq!(out.tactics_detected, vec!["premio", "regalo", "sorteo"]);
    assert_eq!(out.risk_score, 1.0);
    assert_eq!(out.label, Label::Manipulative);
}

#[test]
fn building_blocks_agree_with_the_pipeline() {
    let cat = TacticCatalog::builtin();
    let msg = "Transfiere ya desde tu wallet: http://pago.example";
    let tactics = detect(cat, msg);
    let s = score(cat, msg, &tactics);
    let out = run(msg);
    assert_eq!(out.tactics_detected, tactics);
    assert_eq!(out.risk_score, (s * 100.0).round() / 100.0);
    assert_eq!(out.label, label(s, tactics.len()));
}
