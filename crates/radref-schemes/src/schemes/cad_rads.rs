use std::sync::LazyLock;

use radref_core::models::rule::when;
use radref_core::models::{Band, Category, Field, Interval, Rule, Scheme, Severity};

use crate::Calculator;

/// CAD-RADS 2.0 reporting for coronary CT angiography.
///
/// Plaque burden, high-risk plaque, stent, graft and ischemia are modifiers
/// appended to the category in the report; they do not change it.
pub struct CadRads;

impl Calculator for CadRads {
    fn scheme(&self) -> &Scheme {
        static SCHEME: LazyLock<Scheme> = LazyLock::new(|| {
            Scheme::new("cad-rads-2.0", "CAD-RADS 2.0")
                .describe("Classificação da estenose coronariana máxima na angio-TC de coronárias.")
                .fields(vec![
                    Field::yes_no("nonDiagnostic", "Segmento não diagnóstico impede a categorização")
                        .default_value("no"),
                    Field::numeric("stenosis", "Estenose máxima", Interval::closed(0.0, 100.0))
                        .when("nonDiagnostic", "no")
                        .unit("%")
                        .bands(vec![
                            Band::new("0", "sem estenose", Interval::closed(0.0, 0.0)),
                            Band::new("1-24", "mínima", Interval::open(0.0, 25.0)),
                            Band::new("25-49", "leve", Interval::closed_open(25.0, 50.0)),
                            Band::new("50-69", "moderada", Interval::closed_open(50.0, 70.0)),
                            Band::new("70-99", "grave", Interval::closed_open(70.0, 100.0)),
                            Band::new("100", "oclusão total", Interval::closed(100.0, 100.0)),
                        ]),
                    Field::yes_no("leftMain", "Tronco da coronária esquerda ≥ 50%")
                        .when("nonDiagnostic", "no")
                        .default_value("no"),
                    Field::yes_no("threeVessel", "Doença obstrutiva (≥ 70%) em três vasos")
                        .when("nonDiagnostic", "no")
                        .default_value("no"),
                    Field::choice(
                        "plaqueBurden",
                        "Carga de placa",
                        &[
                            ("none", "ausente"),
                            ("P1", "P1 (leve)"),
                            ("P2", "P2 (moderada)"),
                            ("P3", "P3 (grave)"),
                            ("P4", "P4 (extensa)"),
                        ],
                    )
                    .default_value("none"),
                    Field::yes_no("hrp", "Placa de alto risco").default_value("no"),
                    Field::yes_no("stent", "Stent").default_value("no"),
                    Field::yes_no("graft", "Enxerto de revascularização").default_value("no"),
                    Field::choice(
                        "ischemia",
                        "Avaliação de isquemia (FFR-CT ou perfusão)",
                        &[
                            ("not_done", "não realizada"),
                            ("negative", "negativa"),
                            ("positive", "positiva"),
                            ("borderline", "limítrofe"),
                        ],
                    )
                    .default_value("not_done"),
                ])
                .categories(vec![
                    Category::new("CAD-RADS 0", "CAD-RADS 0", 0, Severity::Benign)
                        .with_risk("Ausência de estenose e de placa")
                        .with_management("Tranquilizar; considerar causas não ateroscleróticas de dor torácica."),
                    Category::new("CAD-RADS 1", "CAD-RADS 1", 1, Severity::Low)
                        .with_risk("Estenose mínima (1 a 24%)")
                        .with_management("Tratamento preventivo conforme carga de placa."),
                    Category::new("CAD-RADS 2", "CAD-RADS 2", 2, Severity::Low)
                        .with_risk("Estenose leve (25 a 49%)")
                        .with_management("Tratamento preventivo conforme carga de placa."),
                    Category::new("CAD-RADS 3", "CAD-RADS 3", 3, Severity::Intermediate)
                        .with_risk("Estenose moderada (50 a 69%)")
                        .with_management("Considerar avaliação funcional; tratamento preventivo e antianginoso."),
                    Category::new("CAD-RADS 4A", "CAD-RADS 4A", 4, Severity::High)
                        .with_risk("Estenose grave (70 a 99%)")
                        .with_management("Considerar cateterismo ou avaliação funcional; tratamento clínico otimizado."),
                    Category::new("CAD-RADS 4B", "CAD-RADS 4B", 5, Severity::High)
                        .with_risk("Tronco ≥ 50% ou doença obstrutiva de três vasos")
                        .with_management("Cateterismo recomendado; tratamento clínico otimizado."),
                    Category::new("CAD-RADS 5", "CAD-RADS 5", 6, Severity::Critical)
                        .with_risk("Oclusão total (100%)")
                        .with_management("Considerar cateterismo e/ou avaliação de viabilidade; tratamento clínico otimizado."),
                    Category::new("CAD-RADS N", "CAD-RADS N", 0, Severity::Indeterminate)
                        .with_risk("Exame não diagnóstico")
                        .with_management("Avaliação adicional ou alternativa pode ser necessária."),
                ])
                .rules(vec![
                    Rule::new("non-diagnostic", when::yes("nonDiagnostic"), "CAD-RADS N"),
                    Rule::new("left-main", when::yes("leftMain"), "CAD-RADS 4B"),
                    Rule::new("three-vessel", when::yes("threeVessel"), "CAD-RADS 4B"),
                    Rule::new("occlusion", when::band("stenosis", "100"), "CAD-RADS 5"),
                    Rule::new("severe", when::band("stenosis", "70-99"), "CAD-RADS 4A"),
                    Rule::new("moderate", when::band("stenosis", "50-69"), "CAD-RADS 3"),
                    Rule::new("mild", when::band("stenosis", "25-49"), "CAD-RADS 2"),
                    Rule::new("minimal", when::band("stenosis", "1-24"), "CAD-RADS 1"),
                    Rule::new("none", when::band("stenosis", "0"), "CAD-RADS 0"),
                ])
                .report(
                    "{% if fields.stenosis is defined %}Estenose coronariana máxima de \
                     {{ fields.stenosis.value }}. {% endif %}\
                     Classificação: {{ category.label }}\
                     {% if fields.plaqueBurden.code != \"none\" %}/{{ fields.plaqueBurden.code }}{% endif %}\
                     {% if fields.hrp.code == \"yes\" %}/HRP{% endif %}\
                     {% if fields.stent.code == \"yes\" %}/S{% endif %}\
                     {% if fields.graft.code == \"yes\" %}/G{% endif %}\
                     {% if fields.ischemia.code == \"positive\" %}/I+\
                     {% elif fields.ischemia.code == \"negative\" %}/I-\
                     {% elif fields.ischemia.code == \"borderline\" %}/I±{% endif %}. \
                     {{ category.risk }}. {{ category.management }}",
                )
        });
        &SCHEME
    }
}
