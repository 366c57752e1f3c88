use std::sync::LazyLock;

use radref_core::models::rule::when;
use radref_core::models::{Category, Field, Rule, Scheme, Severity};

use crate::Calculator;

/// PI-RADS v2.1 overall assessment for a prostate MRI lesion.
///
/// The dominant sequence is DWI in the peripheral zone and T2W in the
/// transition zone; DCE and DWI upgrade borderline scores.
pub struct PiRads;

impl Calculator for PiRads {
    fn scheme(&self) -> &Scheme {
        static SCHEME: LazyLock<Scheme> = LazyLock::new(|| {
            Scheme::new("pi-rads-v2.1", "PI-RADS v2.1")
                .describe("Avaliação global de lesão prostática à RM multiparamétrica.")
                .fields(vec![
                    Field::choice(
                        "zone",
                        "Zona",
                        &[("pz", "zona periférica"), ("tz", "zona de transição")],
                    ),
                    Field::integer("t2", "Escore T2", 1.0, 5.0),
                    Field::integer("dwi", "Escore DWI", 1.0, 5.0),
                    Field::choice(
                        "dce",
                        "Realce precoce (DCE)",
                        &[("negative", "negativo"), ("positive", "positivo")],
                    )
                    .when("zone", "pz"),
                ])
                .categories(vec![
                    Category::new("1", "PI-RADS 1", 1, Severity::Benign)
                        .with_risk("Muito baixa probabilidade de câncer clinicamente significativo"),
                    Category::new("2", "PI-RADS 2", 2, Severity::Low)
                        .with_risk("Baixa probabilidade de câncer clinicamente significativo"),
                    Category::new("3", "PI-RADS 3", 3, Severity::Intermediate)
                        .with_risk("Probabilidade intermediária de câncer clinicamente significativo")
                        .with_management("Considerar densidade de PSA e biópsia conforme contexto clínico."),
                    Category::new("4", "PI-RADS 4", 4, Severity::High)
                        .with_risk("Alta probabilidade de câncer clinicamente significativo")
                        .with_management("Biópsia dirigida recomendada."),
                    Category::new("5", "PI-RADS 5", 5, Severity::Critical)
                        .with_risk("Muito alta probabilidade de câncer clinicamente significativo")
                        .with_management("Biópsia dirigida recomendada."),
                ])
                .rules(vec![
                    Rule::new(
                        "pz-dwi-5",
                        when::all([when::eq("zone", "pz"), when::eq("dwi", 5.0)]),
                        "5",
                    ),
                    Rule::new(
                        "pz-dwi-4",
                        when::all([when::eq("zone", "pz"), when::eq("dwi", 4.0)]),
                        "4",
                    ),
                    Rule::new(
                        "pz-dwi-3-dce-positive",
                        when::all([
                            when::eq("zone", "pz"),
                            when::eq("dwi", 3.0),
                            when::eq("dce", "positive"),
                        ]),
                        "4",
                    ),
                    Rule::new(
                        "pz-dwi-3",
                        when::all([when::eq("zone", "pz"), when::eq("dwi", 3.0)]),
                        "3",
                    ),
                    Rule::new(
                        "pz-dwi-2",
                        when::all([when::eq("zone", "pz"), when::eq("dwi", 2.0)]),
                        "2",
                    ),
                    Rule::new(
                        "pz-dwi-1",
                        when::all([when::eq("zone", "pz"), when::eq("dwi", 1.0)]),
                        "1",
                    ),
                    Rule::new(
                        "tz-t2-5",
                        when::all([when::eq("zone", "tz"), when::eq("t2", 5.0)]),
                        "5",
                    ),
                    Rule::new(
                        "tz-t2-4",
                        when::all([when::eq("zone", "tz"), when::eq("t2", 4.0)]),
                        "4",
                    ),
                    Rule::new(
                        "tz-t2-3-dwi-5",
                        when::all([
                            when::eq("zone", "tz"),
                            when::eq("t2", 3.0),
                            when::eq("dwi", 5.0),
                        ]),
                        "4",
                    ),
                    Rule::new(
                        "tz-t2-3",
                        when::all([when::eq("zone", "tz"), when::eq("t2", 3.0)]),
                        "3",
                    ),
                    Rule::new(
                        "tz-t2-2-dwi-high",
                        when::all([
                            when::eq("zone", "tz"),
                            when::eq("t2", 2.0),
                            when::ge("dwi", 4.0),
                        ]),
                        "3",
                    ),
                    Rule::new(
                        "tz-t2-2",
                        when::all([when::eq("zone", "tz"), when::eq("t2", 2.0)]),
                        "2",
                    ),
                    Rule::new(
                        "tz-t2-1",
                        when::all([when::eq("zone", "tz"), when::eq("t2", 1.0)]),
                        "1",
                    ),
                ])
                .report(
                    "Lesão na {{ fields.zone.value }}: T2 {{ fields.t2.value }}, \
                     DWI {{ fields.dwi.value }}\
                     {% if fields.dce is defined %}, DCE {{ fields.dce.value }}{% endif %}. \
                     Categoria {{ category.label }}: {{ category.risk | lower }}.\
                     {% if category.management %} {{ category.management }}{% endif %}",
                )
        });
        &SCHEME
    }
}
