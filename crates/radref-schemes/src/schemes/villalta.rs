use std::sync::LazyLock;

use radref_core::models::rule::when;
use radref_core::models::{
    Band, Category, Derived, Expr, Field, Interval, Rule, Scheme, Severity,
};

use crate::Calculator;

const ITEMS: [(&str, &str); 11] = [
    ("pain", "Dor"),
    ("cramps", "Câimbras"),
    ("heaviness", "Sensação de peso"),
    ("paresthesia", "Parestesia"),
    ("pruritus", "Prurido"),
    ("edema", "Edema pré-tibial"),
    ("induration", "Endurecimento da pele"),
    ("hyperpigmentation", "Hiperpigmentação"),
    ("redness", "Rubor"),
    ("ectasia", "Ectasia venosa"),
    ("calfPain", "Dor à compressão da panturrilha"),
];

/// Villalta scale for post-thrombotic syndrome.
pub struct Villalta;

impl Calculator for Villalta {
    fn scheme(&self) -> &Scheme {
        static SCHEME: LazyLock<Scheme> = LazyLock::new(|| {
            let mut fields: Vec<Field> = ITEMS
                .iter()
                .map(|(key, label)| Field::integer(key, label, 0.0, 3.0))
                .collect();
            fields.push(Field::yes_no("ulcer", "Úlcera venosa"));
            let keys: Vec<&str> = ITEMS.iter().map(|(key, _)| *key).collect();

            Scheme::new("villalta", "Escala de Villalta")
                .describe(
                    "Diagnóstico e graduação da síndrome pós-trombótica: cinco sintomas e \
                     seis sinais pontuados de 0 (ausente) a 3 (grave).",
                )
                .fields(fields)
                .derived(vec![
                    Derived::new("score", "Escore de Villalta", Expr::sum_of(&keys))
                        .range(Interval::closed(0.0, 33.0))
                        .bands(vec![
                            Band::new("none", "0 a 4", Interval::closed_open(0.0, 5.0)),
                            Band::new("mild", "5 a 9", Interval::closed_open(5.0, 10.0)),
                            Band::new("moderate", "10 a 14", Interval::closed_open(10.0, 15.0)),
                            Band::new("severe", "≥ 15", Interval::closed(15.0, 33.0)),
                        ]),
                ])
                .categories(vec![
                    Category::new("none", "Sem síndrome pós-trombótica", 0, Severity::Benign),
                    Category::new("mild", "Síndrome pós-trombótica leve", 1, Severity::Low),
                    Category::new(
                        "moderate",
                        "Síndrome pós-trombótica moderada",
                        2,
                        Severity::Intermediate,
                    ),
                    Category::new("severe", "Síndrome pós-trombótica grave", 3, Severity::High),
                ])
                .rules(vec![
                    Rule::new("ulcer", when::yes("ulcer"), "severe"),
                    Rule::new("score-severe", when::band("score", "severe"), "severe"),
                    Rule::new("score-moderate", when::band("score", "moderate"), "moderate"),
                    Rule::new("score-mild", when::band("score", "mild"), "mild"),
                    Rule::new("score-none", when::band("score", "none"), "none"),
                ])
                .report(
                    "Escore de Villalta: {{ derived.score.value }} pontos\
                     {% if fields.ulcer.code == \"yes\" %}, com úlcera venosa{% endif %}. \
                     {{ category.label }}.",
                )
        });
        &SCHEME
    }
}
