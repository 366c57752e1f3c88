use std::sync::LazyLock;

use radref_core::models::rule::when;
use radref_core::models::{
    Band, Category, Derived, Expr, Field, Interval, Rule, Scheme, Severity,
};

use crate::Calculator;

const AGGRESSIVE: [(&str, &str); 4] = [
    ("periosteal", "Reação periosteal agressiva"),
    ("cortical", "Destruição cortical"),
    ("softTissue", "Massa de partes moles associada"),
    ("margin", "Margem mal definida (zona de transição ampla)"),
];

/// Bone-RADS risk category for incidental solitary bone lesions.
///
/// The category is a heuristic over the number of aggressive imaging
/// features and the clinical context.
pub struct BoneRads;

impl Calculator for BoneRads {
    fn scheme(&self) -> &Scheme {
        static SCHEME: LazyLock<Scheme> = LazyLock::new(|| {
            let mut fields = vec![
                Field::yes_no("pain", "Dor relacionada à lesão"),
                Field::yes_no("malignancy", "Neoplasia maligna conhecida"),
                Field::yes_no(
                    "typicalBenign",
                    "Aspecto típico de lesão benigna que não requer seguimento",
                ),
            ];
            fields.extend(
                AGGRESSIVE
                    .iter()
                    .map(|(key, label)| Field::yes_no(key, label).default_value("no")),
            );
            let keys: Vec<&str> = AGGRESSIVE.iter().map(|(key, _)| *key).collect();

            Scheme::new("bone-rads", "Bone-RADS")
                .describe("Categoria de risco para lesão óssea solitária incidental.")
                .fields(fields)
                .derived(vec![
                    Derived::new(
                        "aggressiveCount",
                        "Características agressivas",
                        Expr::count_of(&keys, "yes"),
                    )
                    .range(Interval::closed(0.0, 4.0))
                    .bands(vec![
                        Band::new("none", "nenhuma", Interval::closed_open(0.0, 1.0)),
                        Band::new("single", "uma", Interval::closed_open(1.0, 2.0)),
                        Band::new("multiple", "duas ou mais", Interval::closed(2.0, 4.0)),
                    ]),
                ])
                .categories(vec![
                    Category::new("1", "Bone-RADS 1: risco muito baixo", 1, Severity::Benign)
                        .with_management("Não requer seguimento."),
                    Category::new("2", "Bone-RADS 2: baixo risco", 2, Severity::Low)
                        .with_management("Seguimento por imagem conforme o tipo de lesão."),
                    Category::new("3", "Bone-RADS 3: risco intermediário", 3, Severity::Intermediate)
                        .with_management("Biópsia e/ou encaminhamento a serviço de oncologia ortopédica."),
                    Category::new("4", "Bone-RADS 4: alto risco", 4, Severity::High)
                        .with_management("Biópsia e encaminhamento a serviço de oncologia ortopédica."),
                ])
                .rules(vec![
                    Rule::new("multiple-aggressive", when::band("aggressiveCount", "multiple"), "4"),
                    Rule::new(
                        "aggressive-with-context",
                        when::all([
                            when::band("aggressiveCount", "single"),
                            when::any([when::yes("pain"), when::yes("malignancy")]),
                        ]),
                        "4",
                    ),
                    Rule::new("single-aggressive", when::band("aggressiveCount", "single"), "3"),
                    Rule::new("typical-benign", when::yes("typicalBenign"), "1"),
                    Rule::new(
                        "clinical-context",
                        when::any([when::yes("pain"), when::yes("malignancy")]),
                        "3",
                    ),
                    Rule::new("indeterminate", when::always(), "2"),
                ])
        });
        &SCHEME
    }
}
