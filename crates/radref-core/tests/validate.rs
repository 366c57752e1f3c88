use radref_core::models::{AnswerSet, Field, Interval, Scheme, Trigger};
use radref_core::{relevant_fields, validate};

fn cyst() -> Scheme {
    Scheme::new("cyst", "Cyst").fields(vec![
        Field::choice(
            "septaCount",
            "Septos",
            &[("none", "ausentes"), ("few", "poucos"), ("many", "múltiplos")],
        )
        .default_value("none"),
        Field::choice("septaThick", "Espessura dos septos", &[("thin", "finos"), ("thick", "espessos")])
            .depends_on("septaCount", Trigger::NotEquals("none".into())),
        Field::numeric("size", "Tamanho", Interval::ge(0.0)).unit("mm"),
        Field::numeric("growth", "Crescimento", Interval::ge(0.0)).optional(),
    ])
}

#[test]
fn dependent_field_hidden_until_trigger_matches() {
    let scheme = cyst();
    let keys = |answers: &AnswerSet| -> Vec<String> {
        relevant_fields(&scheme, answers)
            .iter()
            .map(|f| f.key.clone())
            .collect()
    };

    assert_eq!(keys(&AnswerSet::new()), ["septaCount", "size", "growth"]);
    assert_eq!(
        keys(&AnswerSet::new().with("septaCount", "few")),
        ["septaCount", "septaThick", "size", "growth"]
    );
}

#[test]
fn default_fills_missing_answer() {
    let validation = validate(&cyst(), &AnswerSet::new().with("size", 12));
    assert!(validation.complete);
    assert!(validation.missing.is_empty());
}

#[test]
fn missing_relevant_field_is_reported() {
    let validation = validate(&cyst(), &AnswerSet::new().with("septaCount", "many").with("size", 3));
    assert!(!validation.complete);
    assert_eq!(validation.missing, ["septaThick"]);
}

#[test]
fn irrelevant_answer_is_ignored() {
    let answers = AnswerSet::new()
        .with("septaThick", "bogus")
        .with("size", 5);
    let validation = validate(&cyst(), &answers);
    assert!(validation.complete);
    assert!(validation.invalid_fields.is_empty());
}

#[test]
fn out_of_domain_values_are_data_not_errors() {
    let answers = AnswerSet::new()
        .with("septaCount", "dozens")
        .with("size", -1)
        .with("growth", "fast");
    let validation = validate(&cyst(), &answers);
    assert!(!validation.complete);
    assert_eq!(validation.invalid_fields, ["septaCount", "size", "growth"]);
}

#[test]
fn optional_field_may_be_absent() {
    let validation = validate(&cyst(), &AnswerSet::new().with("size", 0));
    assert!(validation.complete);
    assert!(validation.relevant.contains(&"growth".to_string()));
}

#[test]
fn integer_step_rejects_fractions() {
    let scheme = Scheme::new("steps", "Steps").fields(vec![Field::integer("score", "Score", 1.0, 3.0)]);
    assert!(validate(&scheme, &AnswerSet::new().with("score", 2)).complete);
    assert!(!validate(&scheme, &AnswerSet::new().with("score", 2.5)).complete);
    assert!(!validate(&scheme, &AnswerSet::new().with("score", 4)).complete);
}

#[test]
fn validate_does_not_touch_answers() {
    let answers = AnswerSet::new().with("septaCount", "few");
    let before = answers.clone();
    let _ = validate(&cyst(), &answers);
    assert_eq!(answers, before);
}

#[test]
fn answers_parse_from_json() {
    let answers = AnswerSet::from_json(r#"{"septaCount": "few", "size": 7.5}"#).unwrap();
    assert_eq!(answers.get("size").and_then(|v| v.as_number()), Some(7.5));
    assert_eq!(answers.get("septaCount").and_then(|v| v.as_code()), Some("few"));
}
