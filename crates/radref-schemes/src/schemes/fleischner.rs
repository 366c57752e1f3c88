use std::sync::LazyLock;

use radref_core::models::rule::when;
use radref_core::models::{Band, Category, Field, Interval, Rule, Scheme, Severity};

use crate::Calculator;

/// Fleischner Society 2017 guidelines for incidental pulmonary nodules.
pub struct Fleischner;

impl Calculator for Fleischner {
    fn scheme(&self) -> &Scheme {
        static SCHEME: LazyLock<Scheme> = LazyLock::new(|| {
            Scheme::new("fleischner-2017", "Fleischner 2017")
                .describe(
                    "Recomendações para nódulos pulmonares incidentais em TC de adultos \
                     (Fleischner Society, 2017).",
                )
                .fields(vec![
                    Field::yes_no(
                        "eligible",
                        "Achado incidental em paciente ≥ 35 anos sem câncer ou imunossupressão",
                    ),
                    Field::choice(
                        "nodule",
                        "Tipo de nódulo",
                        &[
                            ("solid", "sólido"),
                            ("ground_glass", "vidro fosco puro"),
                            ("part_solid", "parcialmente sólido"),
                        ],
                    )
                    .when("eligible", "yes"),
                    Field::choice(
                        "multiplicity",
                        "Número de nódulos",
                        &[("single", "único"), ("multiple", "múltiplos")],
                    )
                    .when("eligible", "yes"),
                    Field::numeric("size", "Diâmetro médio", Interval::ge(0.0))
                        .when("eligible", "yes")
                        .unit("mm")
                        .bands(vec![
                            Band::new("lt6", "< 6 mm", Interval::closed_open(0.0, 6.0)),
                            Band::new("6-8", "6 a 8 mm", Interval::closed(6.0, 8.0)),
                            Band::new("gt8", "> 8 mm", Interval::gt(8.0)),
                        ]),
                    Field::choice(
                        "risk",
                        "Risco clínico",
                        &[("low", "baixo risco"), ("high", "alto risco")],
                    )
                    .when("nodule", "solid"),
                    Field::numeric("solidComponent", "Componente sólido", Interval::ge(0.0))
                        .when("nodule", "part_solid")
                        .unit("mm")
                        .bands(vec![
                            Band::new("lt6", "< 6 mm", Interval::closed_open(0.0, 6.0)),
                            Band::new("ge6", "≥ 6 mm", Interval::ge(6.0)),
                        ]),
                ])
                .categories(vec![
                    Category::new("not-applicable", "Não aplicável", 0, Severity::Indeterminate)
                        .with_management(
                            "As recomendações de Fleischner não se aplicam a pacientes < 35 anos, \
                             com câncer conhecido, imunossuprimidos ou em rastreamento.",
                        ),
                    Category::new("no-follow-up", "Sem seguimento de rotina", 1, Severity::Benign)
                        .with_management("Não é necessário seguimento de rotina."),
                    Category::new("optional-12m", "TC opcional em 12 meses", 2, Severity::Low)
                        .with_management("TC opcional em 12 meses."),
                    Category::new("solid-6-12m", "TC em 6 a 12 meses", 3, Severity::Low)
                        .with_management("TC em 6 a 12 meses; depois considerar TC em 18 a 24 meses."),
                    Category::new(
                        "solid-6-12m-18-24m",
                        "TC em 6 a 12 meses e em 18 a 24 meses",
                        4,
                        Severity::Intermediate,
                    )
                    .with_management("TC em 6 a 12 meses e novamente em 18 a 24 meses."),
                    Category::new(
                        "solid-3m-pet",
                        "TC em 3 meses, PET-CT ou biópsia",
                        6,
                        Severity::High,
                    )
                    .with_management("Considerar TC em 3 meses, PET-CT ou amostragem tecidual."),
                    Category::new("multiple-3-6m", "TC em 3 a 6 meses", 3, Severity::Low)
                        .with_management("TC em 3 a 6 meses; depois considerar TC em 18 a 24 meses."),
                    Category::new(
                        "multiple-3-6m-18-24m",
                        "TC em 3 a 6 meses e em 18 a 24 meses",
                        4,
                        Severity::Intermediate,
                    )
                    .with_management("TC em 3 a 6 meses e novamente em 18 a 24 meses."),
                    Category::new("ggn-6-12m", "TC em 6 a 12 meses", 3, Severity::Low)
                        .with_management(
                            "TC em 6 a 12 meses para confirmar persistência; depois TC a cada \
                             2 anos até completar 5 anos.",
                        ),
                    Category::new("part-solid-3-6m", "TC em 3 a 6 meses", 4, Severity::Intermediate)
                        .with_management(
                            "TC em 3 a 6 meses para confirmar persistência; se inalterado e \
                             componente sólido < 6 mm, TC anual por 5 anos.",
                        ),
                    Category::new(
                        "part-solid-suspicious",
                        "Nódulo parcialmente sólido altamente suspeito",
                        6,
                        Severity::High,
                    )
                    .with_management(
                        "Componente sólido ≥ 6 mm persistente é altamente suspeito; \
                         considerar PET-CT ou biópsia.",
                    ),
                    Category::new(
                        "subsolid-multiple-small",
                        "TC em 3 a 6 meses",
                        3,
                        Severity::Low,
                    )
                    .with_management("TC em 3 a 6 meses; se estável, considerar TC em 2 e 4 anos."),
                    Category::new(
                        "subsolid-multiple",
                        "TC em 3 a 6 meses",
                        4,
                        Severity::Intermediate,
                    )
                    .with_management(
                        "TC em 3 a 6 meses; conduta subsequente baseada no nódulo mais suspeito.",
                    ),
                ])
                .rules(vec![
                    Rule::new("not-eligible", when::eq("eligible", "no"), "not-applicable"),
                    // Solid, single
                    Rule::new(
                        "solid-single-large",
                        when::all([
                            when::eq("nodule", "solid"),
                            when::eq("multiplicity", "single"),
                            when::band("size", "gt8"),
                        ]),
                        "solid-3m-pet",
                    ),
                    Rule::new(
                        "solid-single-mid-high-risk",
                        when::all([
                            when::eq("nodule", "solid"),
                            when::eq("multiplicity", "single"),
                            when::band("size", "6-8"),
                            when::eq("risk", "high"),
                        ]),
                        "solid-6-12m-18-24m",
                    ),
                    Rule::new(
                        "solid-single-mid",
                        when::all([
                            when::eq("nodule", "solid"),
                            when::eq("multiplicity", "single"),
                            when::band("size", "6-8"),
                        ]),
                        "solid-6-12m",
                    ),
                    // Solid, multiple
                    Rule::new(
                        "solid-multiple-large",
                        when::all([
                            when::eq("nodule", "solid"),
                            when::eq("multiplicity", "multiple"),
                            when::band("size", "gt8"),
                        ]),
                        "multiple-3-6m",
                    ),
                    Rule::new(
                        "solid-multiple-mid-high-risk",
                        when::all([
                            when::eq("nodule", "solid"),
                            when::eq("multiplicity", "multiple"),
                            when::band("size", "6-8"),
                            when::eq("risk", "high"),
                        ]),
                        "multiple-3-6m-18-24m",
                    ),
                    Rule::new(
                        "solid-multiple-mid",
                        when::all([
                            when::eq("nodule", "solid"),
                            when::eq("multiplicity", "multiple"),
                            when::band("size", "6-8"),
                        ]),
                        "multiple-3-6m",
                    ),
                    Rule::new(
                        "solid-small-high-risk",
                        when::all([
                            when::eq("nodule", "solid"),
                            when::band("size", "lt6"),
                            when::eq("risk", "high"),
                        ]),
                        "optional-12m",
                    ),
                    Rule::new(
                        "solid-small",
                        when::all([when::eq("nodule", "solid"), when::band("size", "lt6")]),
                        "no-follow-up",
                    ),
                    // Subsolid, multiple
                    Rule::new(
                        "subsolid-multiple-small",
                        when::all([
                            when::one_of("nodule", &["ground_glass", "part_solid"]),
                            when::eq("multiplicity", "multiple"),
                            when::band("size", "lt6"),
                        ]),
                        "subsolid-multiple-small",
                    ),
                    Rule::new(
                        "subsolid-multiple",
                        when::all([
                            when::one_of("nodule", &["ground_glass", "part_solid"]),
                            when::eq("multiplicity", "multiple"),
                        ]),
                        "subsolid-multiple",
                    ),
                    // Subsolid, single
                    Rule::new(
                        "subsolid-single-small",
                        when::all([
                            when::one_of("nodule", &["ground_glass", "part_solid"]),
                            when::band("size", "lt6"),
                        ]),
                        "no-follow-up",
                    ),
                    Rule::new(
                        "ground-glass-single",
                        when::eq("nodule", "ground_glass"),
                        "ggn-6-12m",
                    ),
                    Rule::new(
                        "part-solid-large-component",
                        when::band("solidComponent", "ge6"),
                        "part-solid-suspicious",
                    ),
                    Rule::new("part-solid-single", when::eq("nodule", "part_solid"), "part-solid-3-6m"),
                ])
                .report(
                    "{% if fields.nodule is defined %}Nódulo pulmonar {{ fields.nodule.value }} \
                     ({{ fields.multiplicity.value }}), diâmetro médio de {{ fields.size.value }}\
                     {% if fields.solidComponent is defined %}, componente sólido de \
                     {{ fields.solidComponent.value }}{% endif %}\
                     {% if fields.risk is defined %}, paciente de {{ fields.risk.value }}{% endif %}. \
                     {% endif %}Recomendação (Fleischner 2017): {{ category.management }}",
                )
        });
        &SCHEME
    }
}
