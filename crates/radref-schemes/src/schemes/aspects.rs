use std::sync::LazyLock;

use radref_core::models::rule::when;
use radref_core::models::{
    Band, Category, Derived, Expr, Field, Interval, Rule, Scheme, Severity,
};

use crate::Calculator;

const REGIONS: [(&str, &str); 10] = [
    ("caudate", "Caudado (C)"),
    ("lentiform", "Lentiforme (L)"),
    ("internalCapsule", "Cápsula interna (IC)"),
    ("insula", "Insula (I)"),
    ("m1", "M1"),
    ("m2", "M2"),
    ("m3", "M3"),
    ("m4", "M4"),
    ("m5", "M5"),
    ("m6", "M6"),
];

/// Alberta Stroke Program Early CT Score.
pub struct Aspects;

impl Calculator for Aspects {
    fn scheme(&self) -> &Scheme {
        static SCHEME: LazyLock<Scheme> = LazyLock::new(|| {
            let fields = REGIONS
                .iter()
                .map(|(key, label)| {
                    Field::yes_no(key, &format!("Alteração isquêmica precoce: {label}"))
                        .default_value("no")
                })
                .collect();
            let keys: Vec<&str> = REGIONS.iter().map(|(key, _)| *key).collect();

            Scheme::new("aspects", "ASPECTS")
                .describe(
                    "Quantificação de alterações isquêmicas precoces no território da artéria \
                     cerebral média: 10 pontos menos uma por região acometida.",
                )
                .fields(fields)
                .derived(vec![
                    Derived::new(
                        "score",
                        "ASPECTS",
                        Expr::minus(Expr::Const(10.0), Expr::count_of(&keys, "yes")),
                    )
                    .range(Interval::closed(0.0, 10.0))
                    .bands(vec![
                        Band::new("extensive", "0 a 5", Interval::closed_open(0.0, 6.0)),
                        Band::new("moderate", "6 a 7", Interval::closed_open(6.0, 8.0)),
                        Band::new("small", "8 a 9", Interval::closed_open(8.0, 10.0)),
                        Band::new("normal", "10", Interval::closed(10.0, 10.0)),
                    ]),
                ])
                .categories(vec![
                    Category::new("normal", "ASPECTS 10: sem alterações isquêmicas precoces", 0, Severity::Benign),
                    Category::new("small", "Alterações isquêmicas precoces limitadas", 1, Severity::Low)
                        .with_management("Candidato a trombectomia se oclusão de grande vaso."),
                    Category::new("moderate", "Alterações isquêmicas precoces moderadas", 2, Severity::Intermediate)
                        .with_management("Candidato a trombectomia se oclusão de grande vaso."),
                    Category::new("extensive", "Alterações isquêmicas precoces extensas", 3, Severity::High)
                        .with_risk("ASPECTS ≤ 5 associa-se a pior prognóstico funcional")
                        .with_management(
                            "Benefício da trombectomia a ser avaliado individualmente.",
                        ),
                ])
                .rules(vec![
                    Rule::new("extensive", when::band("score", "extensive"), "extensive"),
                    Rule::new("moderate", when::band("score", "moderate"), "moderate"),
                    Rule::new("small", when::band("score", "small"), "small"),
                    Rule::new("normal", when::band("score", "normal"), "normal"),
                ])
                .report(
                    "ASPECTS {{ derived.score.value }}\
                     {% set affected = findings | filter(attribute=\"code\", value=\"yes\") %}\
                     {% if affected | length > 0 %} (regiões acometidas: \
                     {% for f in affected %}{{ f.label | split(pat=\": \") | last }}\
                     {% if not loop.last %}, {% endif %}{% endfor %}){% endif %}. \
                     {{ category.label }}.\
                     {% if category.management %} {{ category.management }}{% endif %}",
                )
        });
        &SCHEME
    }
}
