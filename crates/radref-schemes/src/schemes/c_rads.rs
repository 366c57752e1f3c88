use std::sync::LazyLock;

use radref_core::models::rule::when;
use radref_core::models::{Band, Category, Field, Interval, Rule, Scheme, Severity};

use crate::Calculator;

/// C-RADS colonic findings category for CT colonography.
pub struct CRads;

impl Calculator for CRads {
    fn scheme(&self) -> &Scheme {
        static SCHEME: LazyLock<Scheme> = LazyLock::new(|| {
            Scheme::new("c-rads", "C-RADS")
                .describe("Categoria de achados colônicos na colonografia por TC.")
                .fields(vec![
                    Field::yes_no("adequate", "Preparo e distensão adequados"),
                    Field::yes_no("mass", "Massa colônica provavelmente maligna")
                        .when("adequate", "yes"),
                    Field::numeric("largestPolyp", "Maior pólipo", Interval::ge(0.0))
                        .when("adequate", "yes")
                        .unit("mm")
                        .bands(vec![
                            Band::new("small", "< 6 mm", Interval::closed_open(0.0, 6.0)),
                            Band::new("intermediate", "6 a 9 mm", Interval::closed_open(6.0, 10.0)),
                            Band::new("large", "≥ 10 mm", Interval::ge(10.0)),
                        ]),
                    Field::numeric("polypCount", "Pólipos de 6 a 9 mm", Interval::ge(0.0))
                        .step(1.0)
                        .when("adequate", "yes")
                        .default_value(0.0),
                    Field::choice(
                        "extracolonic",
                        "Achado extracolônico",
                        &[
                            ("E1", "E1: exame normal ou variante anatômica"),
                            ("E2", "E2: achado clinicamente sem importância"),
                            ("E3", "E3: achado provavelmente sem importância, incompletamente caracterizado"),
                            ("E4", "E4: achado potencialmente importante"),
                        ],
                    )
                    .optional(),
                ])
                .categories(vec![
                    Category::new("C0", "C0: exame inadequado", 0, Severity::Indeterminate)
                        .with_management("Repetir o exame ou realizar exame alternativo."),
                    Category::new("C1", "C1: cólon normal ou lesão benigna", 1, Severity::Benign)
                        .with_management("Continuar rastreamento de rotina em 5 a 10 anos."),
                    Category::new("C2", "C2: pólipo intermediário ou achado indeterminado", 2, Severity::Low)
                        .with_management("Vigilância em 3 anos ou colonoscopia."),
                    Category::new("C3", "C3: pólipo possivelmente avançado", 3, Severity::Intermediate)
                        .with_management("Colonoscopia recomendada."),
                    Category::new("C4", "C4: massa colônica provavelmente maligna", 4, Severity::High)
                        .with_management("Avaliação cirúrgica e colonoscopia."),
                ])
                .rules(vec![
                    Rule::new("inadequate", when::eq("adequate", "no"), "C0"),
                    Rule::new("mass", when::yes("mass"), "C4"),
                    Rule::new("large-polyp", when::band("largestPolyp", "large"), "C3"),
                    Rule::new("many-polyps", when::ge("polypCount", 3.0), "C3"),
                    Rule::new(
                        "intermediate-polyp",
                        when::any([
                            when::band("largestPolyp", "intermediate"),
                            when::ge("polypCount", 1.0),
                        ]),
                        "C2",
                    ),
                    Rule::new("small-or-no-polyp", when::band("largestPolyp", "small"), "C1"),
                ])
                .report(
                    "{% if fields.largestPolyp is defined %}Maior pólipo com \
                     {{ fields.largestPolyp.value }}\
                     {% if fields.polypCount.number > 0 %}; {{ fields.polypCount.value }} \
                     pólipo(s) de 6 a 9 mm{% endif %}. {% endif %}\
                     Categoria {{ category.label }}. {{ category.management }}\
                     {% if fields.extracolonic is defined %} Achado extracolônico \
                     {{ fields.extracolonic.value }}.{% endif %}",
                )
        });
        &SCHEME
    }
}
