use std::sync::LazyLock;

use radref_core::models::rule::when;
use radref_core::models::{
    Band, Category, Derived, Expr, Field, Interval, Rule, Scheme, Severity,
};

use crate::Calculator;

/// R.E.N.A.L. nephrometry score for renal masses.
pub struct RenalNephrometry;

impl Calculator for RenalNephrometry {
    fn scheme(&self) -> &Scheme {
        static SCHEME: LazyLock<Scheme> = LazyLock::new(|| {
            Scheme::new("renal-nephrometry", "R.E.N.A.L. nefrometria")
                .describe(
                    "Escore de complexidade anatômica de massas renais para planejamento \
                     de nefrectomia parcial.",
                )
                .fields(vec![
                    Field::integer(
                        "radius",
                        "(R) Maior diâmetro, pontos",
                        1.0,
                        3.0,
                    ),
                    Field::integer(
                        "exophytic",
                        "(E) Componente exofítico, pontos",
                        1.0,
                        3.0,
                    ),
                    Field::integer(
                        "nearness",
                        "(N) Proximidade do sistema coletor, pontos",
                        1.0,
                        3.0,
                    ),
                    Field::choice(
                        "anterior",
                        "(A) Localização anterior ou posterior",
                        &[("a", "anterior"), ("p", "posterior"), ("x", "indeterminada")],
                    ),
                    Field::integer(
                        "location",
                        "(L) Relação com as linhas polares, pontos",
                        1.0,
                        3.0,
                    ),
                    Field::yes_no("hilar", "Contato com artéria ou veia renal principal (h)")
                        .default_value("no"),
                ])
                .derived(vec![
                    Derived::new(
                        "total",
                        "Escore R.E.N.A.L.",
                        Expr::sum_of(&["radius", "exophytic", "nearness", "location"]),
                    )
                    .range(Interval::closed(4.0, 12.0))
                    .bands(vec![
                        Band::new("low", "4 a 6", Interval::closed_open(4.0, 7.0)),
                        Band::new("moderate", "7 a 9", Interval::closed_open(7.0, 10.0)),
                        Band::new("high", "10 a 12", Interval::closed(10.0, 12.0)),
                    ]),
                ])
                .categories(vec![
                    Category::new("low", "Low complexity", 1, Severity::Low)
                        .with_risk("Baixa complexidade anatômica (4 a 6 pontos)"),
                    Category::new("moderate", "Moderate complexity", 2, Severity::Intermediate)
                        .with_risk("Complexidade anatômica moderada (7 a 9 pontos)"),
                    Category::new("high", "High complexity", 3, Severity::High)
                        .with_risk("Alta complexidade anatômica (10 a 12 pontos)"),
                ])
                .rules(vec![
                    Rule::new("total-high", when::band("total", "high"), "high"),
                    Rule::new("total-moderate", when::band("total", "moderate"), "moderate"),
                    Rule::new("total-low", when::band("total", "low"), "low"),
                ])
                .report(
                    "Escore de nefrometria R.E.N.A.L.: {{ derived.total.value }}\
                     {{ fields.anterior.code }}{% if fields.hilar.code == \"yes\" %}h{% endif %} \
                     ({{ category.label }}). {{ category.risk }}.",
                )
        });
        &SCHEME
    }
}
