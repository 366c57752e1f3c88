use std::sync::LazyLock;

use radref_core::models::rule::when;
use radref_core::models::{
    Band, Category, Derived, Expr, Field, Interval, Rule, Scheme, Severity,
};

use crate::Calculator;

const FLAGS: [(&str, &str, f64); 10] = [
    ("male", "Sexo masculino", 10.0),
    ("cancer", "Câncer", 30.0),
    ("heartFailure", "Insuficiência cardíaca crônica", 10.0),
    ("lungDisease", "Doença pulmonar crônica", 10.0),
    ("heartRate", "Frequência cardíaca ≥ 110 bpm", 20.0),
    ("hypotension", "Pressão arterial sistólica < 100 mmHg", 30.0),
    ("tachypnea", "Frequência respiratória ≥ 30 irpm", 20.0),
    ("hypothermia", "Temperatura < 36 °C", 20.0),
    ("alteredMental", "Alteração do estado mental", 60.0),
    ("hypoxemia", "Saturação arterial de O2 < 90%", 20.0),
];

/// Pulmonary Embolism Severity Index.
pub struct Pesi;

impl Calculator for Pesi {
    fn scheme(&self) -> &Scheme {
        static SCHEME: LazyLock<Scheme> = LazyLock::new(|| {
            let mut fields = vec![
                Field::numeric("age", "Idade", Interval::ge(18.0))
                    .step(1.0)
                    .unit("anos"),
            ];
            fields.extend(FLAGS.iter().map(|(key, label, _)| Field::yes_no(key, label)));

            let mut terms = vec![Expr::var("age")];
            terms.extend(FLAGS.iter().map(|(key, _, points)| Expr::flag(key, *points)));

            Scheme::new("pesi", "PESI")
                .describe(
                    "Índice de gravidade da embolia pulmonar: estima a mortalidade em 30 dias.",
                )
                .fields(fields)
                .derived(vec![
                    Derived::new("score", "Pontuação PESI", Expr::Sum(terms))
                        .range(Interval::ge(18.0))
                        .bands(vec![
                            Band::new("I", "≤ 65", Interval::le(65.0)),
                            Band::new("II", "66 a 85", Interval::open_closed(65.0, 85.0)),
                            Band::new("III", "86 a 105", Interval::open_closed(85.0, 105.0)),
                            Band::new("IV", "106 a 125", Interval::open_closed(105.0, 125.0)),
                            Band::new("V", "> 125", Interval::gt(125.0)),
                        ]),
                ])
                .categories(vec![
                    Category::new("I", "Classe I: risco muito baixo", 1, Severity::Benign)
                        .with_risk("Mortalidade em 30 dias de 0 a 1,6%")
                        .with_management("Considerar tratamento ambulatorial."),
                    Category::new("II", "Classe II: risco baixo", 2, Severity::Low)
                        .with_risk("Mortalidade em 30 dias de 1,7 a 3,5%")
                        .with_management("Considerar tratamento ambulatorial."),
                    Category::new("III", "Classe III: risco intermediário", 3, Severity::Intermediate)
                        .with_risk("Mortalidade em 30 dias de 3,2 a 7,1%")
                        .with_management("Internação hospitalar."),
                    Category::new("IV", "Classe IV: risco alto", 4, Severity::High)
                        .with_risk("Mortalidade em 30 dias de 4,0 a 11,4%")
                        .with_management("Internação hospitalar."),
                    Category::new("V", "Classe V: risco muito alto", 5, Severity::Critical)
                        .with_risk("Mortalidade em 30 dias de 10,0 a 24,5%")
                        .with_management("Internação hospitalar; avaliar terapia intensiva."),
                ])
                .rules(vec![
                    Rule::new("class-v", when::band("score", "V"), "V"),
                    Rule::new("class-iv", when::band("score", "IV"), "IV"),
                    Rule::new("class-iii", when::band("score", "III"), "III"),
                    Rule::new("class-ii", when::band("score", "II"), "II"),
                    Rule::new("class-i", when::band("score", "I"), "I"),
                ])
        });
        &SCHEME
    }
}
