use std::sync::LazyLock;

use radref_core::models::rule::when;
use radref_core::models::{
    Band, Category, Derived, Expr, Field, Interval, Rule, Scheme, Severity,
};

use crate::Calculator;

/// AO Spine thoracolumbar injury classification with the TL AOSIS score.
pub struct AoSpineThoracolumbar;

impl Calculator for AoSpineThoracolumbar {
    fn scheme(&self) -> &Scheme {
        static SCHEME: LazyLock<Scheme> = LazyLock::new(|| {
            Scheme::new("ao-spine-thoracolumbar", "AO Spine toracolombar")
                .describe(
                    "Classificação AO Spine das fraturas toracolombares e escore TL AOSIS \
                     para orientar o tratamento.",
                )
                .fields(vec![
                    Field::choice(
                        "morphology",
                        "Morfologia",
                        &[
                            ("A0", "A0: fratura menor, sem comprometimento estrutural"),
                            ("A1", "A1: compressão em cunha de um platô"),
                            ("A2", "A2: fratura em pinça (split)"),
                            ("A3", "A3: explosão incompleta"),
                            ("A4", "A4: explosão completa"),
                            ("B1", "B1: lesão da banda de tensão posterior transóssea (Chance)"),
                            ("B2", "B2: lesão da banda de tensão posterior"),
                            ("B3", "B3: lesão da banda de tensão anterior (hiperextensão)"),
                            ("C", "C: deslocamento ou translação"),
                        ],
                    ),
                    Field::choice(
                        "neuro",
                        "Estado neurológico",
                        &[
                            ("N0", "N0: neurologicamente intacto"),
                            ("N1", "N1: déficit neurológico transitório resolvido"),
                            ("N2", "N2: radiculopatia"),
                            ("N3", "N3: lesão medular incompleta ou da cauda equina"),
                            ("N4", "N4: lesão medular completa"),
                            ("NX", "NX: exame neurológico impossível"),
                        ],
                    ),
                    Field::yes_no(
                        "m1",
                        "M1: lesão indeterminada da banda de tensão posterior",
                    )
                    .default_value("no"),
                    Field::yes_no("m2", "M2: comorbidade específica do paciente")
                        .default_value("no"),
                ])
                .derived(vec![
                    Derived::new(
                        "tlAosis",
                        "Escore TL AOSIS",
                        Expr::Sum(vec![
                            Expr::points(
                                "morphology",
                                &[
                                    ("A0", 0.0),
                                    ("A1", 1.0),
                                    ("A2", 2.0),
                                    ("A3", 3.0),
                                    ("A4", 5.0),
                                    ("B1", 5.0),
                                    ("B2", 6.0),
                                    ("B3", 7.0),
                                    ("C", 8.0),
                                ],
                            ),
                            Expr::points(
                                "neuro",
                                &[
                                    ("N0", 0.0),
                                    ("N1", 1.0),
                                    ("N2", 2.0),
                                    ("N3", 4.0),
                                    ("N4", 4.0),
                                    ("NX", 3.0),
                                ],
                            ),
                            Expr::flag("m1", 1.0),
                        ]),
                    )
                    .range(Interval::closed(0.0, 13.0))
                    .bands(vec![
                        Band::new("0-3", "0 a 3", Interval::closed_open(0.0, 4.0)),
                        Band::new("4-5", "4 a 5", Interval::closed_open(4.0, 6.0)),
                        Band::new("6+", "≥ 6", Interval::closed(6.0, 13.0)),
                    ]),
                ])
                .categories(vec![
                    Category::new("conservative", "Tratamento conservador", 1, Severity::Low)
                        .with_risk("TL AOSIS 0 a 3")
                        .with_management("Tratamento não operatório sugerido."),
                    Category::new(
                        "either",
                        "Tratamento conservador ou cirúrgico",
                        2,
                        Severity::Intermediate,
                    )
                    .with_risk("TL AOSIS 4 a 5")
                    .with_management(
                        "Tratamento conservador ou cirúrgico conforme comorbidades e preferência.",
                    ),
                    Category::new("surgical", "Tratamento cirúrgico", 3, Severity::High)
                        .with_risk("TL AOSIS ≥ 6")
                        .with_management("Tratamento cirúrgico sugerido."),
                ])
                .rules(vec![
                    Rule::new("score-high", when::band("tlAosis", "6+"), "surgical"),
                    Rule::new("score-mid", when::band("tlAosis", "4-5"), "either"),
                    Rule::new("score-low", when::band("tlAosis", "0-3"), "conservative"),
                ])
                .report(
                    "Fratura toracolombar {{ fields.morphology.code }}, {{ fields.neuro.code }}\
                     {% if fields.m1.code == \"yes\" %}, M1{% endif %}\
                     {% if fields.m2.code == \"yes\" %}, M2{% endif %} \
                     ({{ fields.morphology.value | split(pat=\": \") | last }}). \
                     Escore TL AOSIS: {{ derived.tlAosis.value }} ({{ category.label }}). \
                     {{ category.management }}",
                )
        });
        &SCHEME
    }
}
