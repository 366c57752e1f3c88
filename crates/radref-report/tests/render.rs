use radref_core::models::rule::when;
use radref_core::models::{
    AnswerSet, Category, Derived, Expr, Field, Interval, Rule, Scheme, Severity, Trigger,
};
use radref_report::format::{format_fixed, format_number};
use radref_report::{assemble_report, check_template};

fn cyst(template: Option<&str>) -> Scheme {
    let scheme = Scheme::new("cyst", "Cisto")
        .fields(vec![
            Field::choice("wall", "Parede", &[("thin", "fina"), ("thick", "espessa")]),
            Field::choice("septa", "Septos", &[("none", "ausentes"), ("few", "poucos")])
                .default_value("none"),
            Field::choice("septaThick", "Espessura dos septos", &[("thin", "finos")])
                .depends_on("septa", Trigger::NotEquals("none".into())),
            Field::numeric("size", "Diâmetro", Interval::ge(0.0)).unit("cm").optional(),
        ])
        .derived(vec![
            Derived::new("double", "Dobro", Expr::Product(vec![Expr::var("size"), Expr::Const(2.0)]))
                .unit("cm")
                .decimals(1),
        ])
        .categories(vec![
            Category::new("I", "Bosniak I", 1, Severity::Benign)
                .with_risk("Benigno")
                .with_management("Sem seguimento."),
        ])
        .rules(vec![Rule::new("always", when::always(), "I")]);
    match template {
        Some(t) => scheme.report(t),
        None => scheme,
    }
}

fn category(scheme: &Scheme) -> Category {
    scheme.categories[0].clone()
}

#[test]
fn plain_report_lists_answers_by_label() {
    let scheme = cyst(None);
    let answers = AnswerSet::new().with("wall", "thin").with("size", 1.5);
    let report = assemble_report(&scheme, &answers, &category(&scheme));
    assert_eq!(
        report,
        "Cisto: Parede: fina; Septos: ausentes; Diâmetro: 1,5 cm. Dobro: 3,0 cm. Bosniak I. Benigno. Sem seguimento."
    );
}

#[test]
fn missing_optional_fields_are_omitted() {
    let scheme = cyst(None);
    let report = assemble_report(&scheme, &AnswerSet::new().with("wall", "thick"), &category(&scheme));
    assert!(!report.contains("Diâmetro"));
    assert!(!report.contains("Dobro"));
    assert!(!report.contains("Espessura"));
}

#[test]
fn template_fills_placeholders_and_skips_absent_fields() {
    let scheme = cyst(Some(
        "Cisto com parede {{ fields.wall.value }}\
         {% if fields.size is defined %}, medindo {{ fields.size.value }}{% endif %}. \
         {{ category.label }}: {{ category.risk }}.",
    ));
    assert!(check_template(&scheme).is_ok());

    let cat = category(&scheme);
    let with_size = assemble_report(&scheme, &AnswerSet::new().with("wall", "thin").with("size", 2), &cat);
    assert_eq!(with_size, "Cisto com parede fina, medindo 2 cm. Bosniak I: Benigno.");

    let without = assemble_report(&scheme, &AnswerSet::new().with("wall", "thin"), &cat);
    assert_eq!(without, "Cisto com parede fina. Bosniak I: Benigno.");
}

#[test]
fn unknown_code_falls_back_to_raw_value() {
    let scheme = cyst(Some("Parede {{ fields.wall.value }}."));
    let report = assemble_report(&scheme, &AnswerSet::new().with("wall", "calcified"), &category(&scheme));
    assert_eq!(report, "Parede calcified.");
}

#[test]
fn broken_template_falls_back_to_plain_text() {
    let scheme = cyst(Some("{{ fields.nothing.value }}"));
    let report = assemble_report(&scheme, &AnswerSet::new().with("wall", "thin"), &category(&scheme));
    assert!(report.starts_with("Cisto: Parede: fina"));
}

#[test]
fn unparsable_template_is_caught_up_front() {
    let scheme = cyst(Some("{% if %}"));
    assert!(check_template(&scheme).is_err());
}

#[test]
fn report_is_idempotent() {
    let scheme = cyst(None);
    let answers = AnswerSet::new().with("wall", "thin").with("size", 3.25);
    let cat = category(&scheme);
    assert_eq!(
        assemble_report(&scheme, &answers, &cat),
        assemble_report(&scheme, &answers, &cat)
    );
}

#[test]
fn numbers_use_comma_decimals() {
    assert_eq!(format_number(8.0), "8");
    assert_eq!(format_number(1.5), "1,5");
    assert_eq!(format_number(0.25), "0,25");
    assert_eq!(format_number(-0.0), "0");
}

#[test]
fn numbers_keep_full_magnitude_and_small_fractions() {
    assert_eq!(format_number(1e20), "100000000000000000000");
    assert_eq!(format_number(0.004), "0,004");
    assert_eq!(format_number(-2.5), "-2,5");
    assert_eq!(format_fixed(92.456, 0), "92");
    assert_eq!(format_fixed(0.1234, 2), "0,12");
}
