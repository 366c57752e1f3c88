use std::sync::LazyLock;

use radref_core::models::rule::when;
use radref_core::models::{Category, Field, Rule, Scheme, Severity, Trigger};

use crate::Calculator;

/// Bosniak classification of cystic renal masses, version 2019 (CT).
pub struct Bosniak;

impl Calculator for Bosniak {
    fn scheme(&self) -> &Scheme {
        static SCHEME: LazyLock<Scheme> = LazyLock::new(|| {
            Scheme::new("bosniak-v2019", "Bosniak 2019")
                .describe("Classificação de massas renais císticas (TC), versão 2019.")
                .fields(vec![
                    Field::choice(
                        "septaCount",
                        "Septos",
                        &[
                            ("none", "sem septos"),
                            ("few", "1 a 3 septos"),
                            ("many", "4 ou mais septos"),
                        ],
                    )
                    .default_value("none"),
                    Field::choice(
                        "septaThick",
                        "Espessura dos septos",
                        &[
                            ("thin", "finos (≤ 2 mm) e lisos"),
                            ("minimal", "minimamente espessados (3 mm) e lisos"),
                            ("thick", "espessos (≥ 4 mm)"),
                            ("irregular", "irregulares"),
                        ],
                    )
                    .depends_on("septaCount", Trigger::NotEquals("none".into())),
                    Field::choice(
                        "wall",
                        "Parede",
                        &[
                            ("thin", "fina (≤ 2 mm) e lisa"),
                            ("minimal", "minimamente espessada (3 mm) e lisa"),
                            ("thick", "espessa (≥ 4 mm)"),
                            ("irregular", "irregular (protrusão ≤ 3 mm de ângulo obtuso)"),
                        ],
                    ),
                    Field::choice(
                        "enhancement",
                        "Realce",
                        &[
                            ("none", "sem realce"),
                            ("wall_septa", "realce da parede e/ou septos"),
                            ("nodular", "nódulo com realce"),
                        ],
                    ),
                    Field::choice(
                        "attenuation",
                        "Atenuação",
                        &[
                            ("water", "-9 a 20 UH"),
                            ("hyper", "≥ 70 UH, homogênea, sem contraste"),
                            ("intermediate", "21 a 30 UH na fase portal, homogênea"),
                            ("heterogeneous", "heterogênea"),
                        ],
                    )
                    .when("wall", "thin"),
                ])
                .categories(vec![
                    Category::new("I", "Bosniak I", 1, Severity::Benign)
                        .with_risk("Benigno (risco de malignidade ~0%)")
                        .with_management("Sem necessidade de seguimento."),
                    Category::new("II", "Bosniak II", 2, Severity::Benign)
                        .with_risk("Benigno (risco de malignidade ~0%)")
                        .with_management("Sem necessidade de seguimento."),
                    Category::new("IIF", "Bosniak IIF", 3, Severity::Low)
                        .with_risk("Provavelmente benigno (risco de malignidade ~10%)")
                        .with_management(
                            "Seguimento por TC ou RM em 6 e 12 meses e depois anualmente por 5 anos.",
                        ),
                    Category::new("III", "Bosniak III", 4, Severity::Intermediate)
                        .with_risk("Indeterminado (risco de malignidade ~50%)")
                        .with_management("Avaliação urológica: cirurgia ou vigilância ativa."),
                    Category::new("IV", "Bosniak IV", 5, Severity::High)
                        .with_risk("Provavelmente maligno (risco de malignidade ~90%)")
                        .with_management("Avaliação urológica para tratamento cirúrgico."),
                ])
                .rules(vec![
                    Rule::new("enhancing-nodule", when::eq("enhancement", "nodular"), "IV"),
                    Rule::new(
                        "thick-wall-or-septa",
                        when::all([
                            when::any([
                                when::one_of("wall", &["thick", "irregular"]),
                                when::one_of("septaThick", &["thick", "irregular"]),
                            ]),
                            when::eq("enhancement", "wall_septa"),
                        ]),
                        "III",
                    ),
                    Rule::new(
                        "minimally-thick-enhancing",
                        when::all([
                            when::any([
                                when::eq("wall", "minimal"),
                                when::eq("septaThick", "minimal"),
                            ]),
                            when::eq("enhancement", "wall_septa"),
                        ]),
                        "IIF",
                    ),
                    Rule::new(
                        "many-thin-septa",
                        when::all([
                            when::eq("septaCount", "many"),
                            when::eq("septaThick", "thin"),
                        ]),
                        "IIF",
                    ),
                    Rule::new(
                        "few-thin-septa",
                        when::all([
                            when::eq("septaCount", "few"),
                            when::eq("septaThick", "thin"),
                            when::eq("wall", "thin"),
                        ]),
                        "II",
                    ),
                    Rule::new(
                        "simple-cyst",
                        when::all([
                            when::eq("wall", "thin"),
                            when::eq("septaCount", "none"),
                            when::one_of("enhancement", &["none", "wall_septa"]),
                            when::eq("attenuation", "water"),
                        ]),
                        "I",
                    ),
                    Rule::new(
                        "homogeneous-non-water",
                        when::all([
                            when::eq("wall", "thin"),
                            when::eq("septaCount", "none"),
                            when::one_of("attenuation", &["hyper", "intermediate"]),
                        ]),
                        "II",
                    ),
                    // Ambiguous combinations default to IIF.
                    Rule::new("fallback", when::always(), "IIF"),
                ])
                .report(
                    "Formação cística renal com parede {{ fields.wall.value }}\
                     {% if fields.septaCount.code != \"none\" %}, {{ fields.septaCount.value }}\
                     {% if fields.septaThick is defined %} {{ fields.septaThick.value }}{% endif %}{% endif %}, \
                     {{ fields.enhancement.value }}\
                     {% if fields.attenuation is defined %}, atenuação {{ fields.attenuation.value }}{% endif %}. \
                     Classificação de Bosniak (versão 2019): {{ category.label }}. \
                     {{ category.risk }}. {{ category.management }}",
                )
        });
        &SCHEME
    }
}
