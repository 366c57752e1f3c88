use std::sync::LazyLock;

use radref_core::models::rule::when;
use radref_core::models::{
    Band, Category, Derived, Expr, Field, Interval, Rule, Scheme, Severity,
};

use crate::Calculator;

/// Prostate volume by the ellipsoid formula, with optional PSA density.
pub struct ProstateVolume;

impl Calculator for ProstateVolume {
    fn scheme(&self) -> &Scheme {
        static SCHEME: LazyLock<Scheme> = LazyLock::new(|| {
            Scheme::new("prostate-volume", "Volume prostático")
                .describe(
                    "Volume da próstata pela fórmula do elipsoide (0,52 × L × T × AP) \
                     e densidade do PSA.",
                )
                .fields(vec![
                    Field::numeric("length", "Diâmetro longitudinal", Interval::ge(0.0)).unit("cm"),
                    Field::numeric("width", "Diâmetro transverso", Interval::ge(0.0)).unit("cm"),
                    Field::numeric("height", "Diâmetro anteroposterior", Interval::ge(0.0)).unit("cm"),
                    Field::numeric("psa", "PSA total", Interval::ge(0.0))
                        .unit("ng/mL")
                        .optional(),
                ])
                .derived(vec![
                    Derived::new(
                        "volume",
                        "Volume prostático",
                        Expr::Product(vec![
                            Expr::Const(0.52),
                            Expr::var("length"),
                            Expr::var("width"),
                            Expr::var("height"),
                        ]),
                    )
                    .unit("cm³")
                    .decimals(1)
                    .range(Interval::ge(0.0))
                    .bands(vec![
                        Band::new("normal", "< 30 cm³", Interval::closed_open(0.0, 30.0)),
                        Band::new("enlarged", "30 a 80 cm³", Interval::closed_open(30.0, 80.0)),
                        Band::new("markedly-enlarged", "≥ 80 cm³", Interval::ge(80.0)),
                    ]),
                    Derived::new(
                        "psaDensity",
                        "Densidade do PSA",
                        Expr::div(Expr::var("psa"), Expr::var("volume")),
                    )
                    .unit("ng/mL/cm³")
                    .decimals(2)
                    .range(Interval::ge(0.0)),
                ])
                .categories(vec![
                    Category::new("normal", "Volume prostático normal", 1, Severity::Benign),
                    Category::new("enlarged", "Próstata aumentada", 2, Severity::Low),
                    Category::new(
                        "markedly-enlarged",
                        "Próstata acentuadamente aumentada",
                        3,
                        Severity::Intermediate,
                    ),
                ])
                .rules(vec![
                    Rule::new(
                        "markedly-enlarged",
                        when::band("volume", "markedly-enlarged"),
                        "markedly-enlarged",
                    ),
                    Rule::new("enlarged", when::band("volume", "enlarged"), "enlarged"),
                    Rule::new("normal", when::band("volume", "normal"), "normal"),
                ])
                .report(
                    "Próstata medindo {{ fields.length.value }} × {{ fields.width.value }} × \
                     {{ fields.height.value }}, com volume estimado de {{ derived.volume.value }} \
                     ({{ category.label }})\
                     {% if derived.psaDensity is defined %}. Densidade do PSA: \
                     {{ derived.psaDensity.value }}{% endif %}.",
                )
        });
        &SCHEME
    }
}
