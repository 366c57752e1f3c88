use std::sync::LazyLock;

use radref_core::models::rule::when;
use radref_core::models::{Category, Field, Interval, Rule, Scheme, Severity, Trigger};

use crate::Calculator;

/// Lung-RADS v2022 for lung cancer screening CT.
pub struct LungRads;

fn nodule_kinds() -> Trigger {
    Trigger::OneOf(vec!["solid".into(), "part_solid".into(), "ground_glass".into()])
}

impl Calculator for LungRads {
    fn scheme(&self) -> &Scheme {
        static SCHEME: LazyLock<Scheme> = LazyLock::new(|| {
            Scheme::new("lung-rads-v2022", "Lung-RADS v2022")
                .describe("Categorização de achados na TC de baixa dose para rastreamento de câncer de pulmão.")
                .fields(vec![
                    Field::yes_no("complete", "Exame completo e avaliável"),
                    Field::choice(
                        "exam",
                        "Tipo de exame",
                        &[("baseline", "exame inicial"), ("followup", "exame de seguimento")],
                    )
                    .when("complete", "yes"),
                    Field::choice(
                        "nodule",
                        "Achado dominante",
                        &[
                            ("none", "sem nódulos"),
                            ("benign", "nódulo com calcificação benigna ou gordura"),
                            ("solid", "nódulo sólido"),
                            ("part_solid", "nódulo parcialmente sólido"),
                            ("ground_glass", "nódulo em vidro fosco"),
                        ],
                    )
                    .when("complete", "yes"),
                    Field::numeric("size", "Diâmetro médio", Interval::ge(0.0))
                        .depends_on("nodule", nodule_kinds())
                        .unit("mm"),
                    Field::numeric("solidComponent", "Componente sólido", Interval::ge(0.0))
                        .when("nodule", "part_solid")
                        .unit("mm"),
                    Field::choice(
                        "status",
                        "Evolução",
                        &[
                            ("new", "novo"),
                            ("growing", "em crescimento"),
                            ("stable", "estável"),
                        ],
                    )
                    .when("exam", "followup"),
                    Field::yes_no("suspicious", "Achados adicionais que aumentam a suspeição")
                        .depends_on("nodule", nodule_kinds())
                        .default_value("no"),
                ])
                .categories(vec![
                    Category::new("0", "Lung-RADS 0: incompleto", 0, Severity::Indeterminate)
                        .with_management("Exames anteriores em obtenção ou TC adicional necessária."),
                    Category::new("1", "Lung-RADS 1: negativo", 1, Severity::Benign)
                        .with_risk("Probabilidade de malignidade < 1%")
                        .with_management("TC de baixa dose anual em 12 meses."),
                    Category::new("2", "Lung-RADS 2: aspecto benigno", 2, Severity::Benign)
                        .with_risk("Probabilidade de malignidade < 1%")
                        .with_management("TC de baixa dose anual em 12 meses."),
                    Category::new("3", "Lung-RADS 3: provavelmente benigno", 3, Severity::Low)
                        .with_risk("Probabilidade de malignidade 1 a 2%")
                        .with_management("TC de baixa dose em 6 meses."),
                    Category::new("4A", "Lung-RADS 4A: suspeito", 4, Severity::Intermediate)
                        .with_risk("Probabilidade de malignidade 5 a 15%")
                        .with_management("TC de baixa dose em 3 meses; PET-CT pode ser considerado se componente sólido ≥ 8 mm."),
                    Category::new("4B", "Lung-RADS 4B: muito suspeito", 5, Severity::High)
                        .with_risk("Probabilidade de malignidade > 15%")
                        .with_management("TC de tórax com ou sem contraste, PET-CT e/ou amostragem tecidual."),
                    Category::new("4X", "Lung-RADS 4X: muito suspeito", 6, Severity::High)
                        .with_risk("Probabilidade de malignidade > 15%")
                        .with_management("TC de tórax com ou sem contraste, PET-CT e/ou amostragem tecidual."),
                ])
                .rules(vec![
                    Rule::new("incomplete", when::eq("complete", "no"), "0"),
                    Rule::new("no-nodule", when::eq("nodule", "none"), "1"),
                    Rule::new("benign-features", when::eq("nodule", "benign"), "1"),
                    Rule::new("additional-suspicion", when::yes("suspicious"), "4X"),
                    Rule::new("stable", when::eq("status", "stable"), "2"),
                    // Ground glass
                    Rule::new(
                        "ground-glass-large",
                        when::all([when::eq("nodule", "ground_glass"), when::ge("size", 30.0)]),
                        "3",
                    ),
                    Rule::new("ground-glass", when::eq("nodule", "ground_glass"), "2"),
                    // Solid, follow-up
                    Rule::new(
                        "solid-growing-large",
                        when::all([
                            when::eq("nodule", "solid"),
                            when::eq("status", "growing"),
                            when::ge("size", 8.0),
                        ]),
                        "4B",
                    ),
                    Rule::new(
                        "solid-growing",
                        when::all([when::eq("nodule", "solid"), when::eq("status", "growing")]),
                        "4A",
                    ),
                    Rule::new(
                        "solid-new-large",
                        when::all([
                            when::eq("nodule", "solid"),
                            when::eq("status", "new"),
                            when::ge("size", 8.0),
                        ]),
                        "4B",
                    ),
                    Rule::new(
                        "solid-new-mid",
                        when::all([
                            when::eq("nodule", "solid"),
                            when::eq("status", "new"),
                            when::ge("size", 6.0),
                        ]),
                        "4A",
                    ),
                    Rule::new(
                        "solid-new-small",
                        when::all([
                            when::eq("nodule", "solid"),
                            when::eq("status", "new"),
                            when::ge("size", 4.0),
                        ]),
                        "3",
                    ),
                    Rule::new(
                        "solid-new-tiny",
                        when::all([when::eq("nodule", "solid"), when::eq("status", "new")]),
                        "2",
                    ),
                    // Solid, baseline
                    Rule::new(
                        "solid-large",
                        when::all([when::eq("nodule", "solid"), when::ge("size", 15.0)]),
                        "4B",
                    ),
                    Rule::new(
                        "solid-mid",
                        when::all([when::eq("nodule", "solid"), when::ge("size", 8.0)]),
                        "4A",
                    ),
                    Rule::new(
                        "solid-small",
                        when::all([when::eq("nodule", "solid"), when::ge("size", 6.0)]),
                        "3",
                    ),
                    Rule::new("solid-tiny", when::eq("nodule", "solid"), "2"),
                    // Part solid
                    Rule::new(
                        "part-solid-growing-component",
                        when::all([
                            when::eq("status", "growing"),
                            when::ge("solidComponent", 4.0),
                        ]),
                        "4B",
                    ),
                    Rule::new(
                        "part-solid-growing",
                        when::all([when::eq("nodule", "part_solid"), when::eq("status", "growing")]),
                        "4A",
                    ),
                    Rule::new(
                        "part-solid-new-large-component",
                        when::all([when::eq("status", "new"), when::ge("solidComponent", 6.0)]),
                        "4B",
                    ),
                    Rule::new(
                        "part-solid-new-component",
                        when::all([when::eq("status", "new"), when::ge("solidComponent", 4.0)]),
                        "4A",
                    ),
                    Rule::new(
                        "part-solid-new",
                        when::all([when::eq("nodule", "part_solid"), when::eq("status", "new")]),
                        "3",
                    ),
                    Rule::new(
                        "part-solid-small",
                        when::all([when::eq("nodule", "part_solid"), when::lt("size", 6.0)]),
                        "2",
                    ),
                    Rule::new("part-solid-large-component", when::ge("solidComponent", 8.0), "4B"),
                    Rule::new("part-solid-mid-component", when::ge("solidComponent", 6.0), "4A"),
                    Rule::new("part-solid", when::eq("nodule", "part_solid"), "3"),
                ])
        });
        &SCHEME
    }
}
