use std::sync::LazyLock;

use radref_core::models::rule::when;
use radref_core::models::{
    Band, Category, Derived, Expr, Field, Interval, Rule, Scheme, Severity,
};

use crate::Calculator;

/// CKD-EPI 2021 race-free creatinine equation with KDIGO GFR stages.
///
/// `eGFR = 142 · min(Scr/κ, 1)^α · max(Scr/κ, 1)^-1.200 · 0.9938^idade · 1.012 [mulher]`
pub struct CkdEpi;

fn ratio() -> Expr {
    Expr::div(
        Expr::var("creatinine"),
        Expr::points("sex", &[("female", 0.7), ("male", 0.9)]),
    )
}

impl Calculator for CkdEpi {
    fn scheme(&self) -> &Scheme {
        static SCHEME: LazyLock<Scheme> = LazyLock::new(|| {
            let egfr = Expr::Product(vec![
                Expr::Const(142.0),
                Expr::pow(
                    Expr::Min(vec![ratio(), Expr::Const(1.0)]),
                    Expr::points("sex", &[("female", -0.241), ("male", -0.302)]),
                ),
                Expr::pow(Expr::Max(vec![ratio(), Expr::Const(1.0)]), Expr::Const(-1.2)),
                Expr::pow(Expr::Const(0.9938), Expr::var("age")),
                Expr::points("sex", &[("female", 1.012), ("male", 1.0)]),
            ]);

            Scheme::new("ckd-epi-2021", "CKD-EPI 2021")
                .describe(
                    "Taxa de filtração glomerular estimada pela creatinina sérica \
                     (CKD-EPI 2021, sem coeficiente racial) e estágio KDIGO.",
                )
                .fields(vec![
                    Field::numeric("creatinine", "Creatinina sérica", Interval::ge(0.0))
                        .unit("mg/dL"),
                    Field::integer("age", "Idade", 18.0, 120.0).unit("anos"),
                    Field::choice(
                        "sex",
                        "Sexo",
                        &[("female", "feminino"), ("male", "masculino")],
                    ),
                ])
                .derived(vec![
                    Derived::new("egfr", "TFG estimada", egfr)
                        .unit("mL/min/1,73 m²")
                        .range(Interval::ge(0.0))
                        .bands(vec![
                            Band::new("G5", "< 15", Interval::closed_open(0.0, 15.0)),
                            Band::new("G4", "15 a 29", Interval::closed_open(15.0, 30.0)),
                            Band::new("G3b", "30 a 44", Interval::closed_open(30.0, 45.0)),
                            Band::new("G3a", "45 a 59", Interval::closed_open(45.0, 60.0)),
                            Band::new("G2", "60 a 89", Interval::closed_open(60.0, 90.0)),
                            Band::new("G1", "≥ 90", Interval::ge(90.0)),
                        ]),
                ])
                .categories(vec![
                    Category::new("G1", "G1: TFG normal ou elevada", 1, Severity::Benign),
                    Category::new("G2", "G2: TFG levemente reduzida", 2, Severity::Low),
                    Category::new("G3a", "G3a: TFG leve a moderadamente reduzida", 3, Severity::Intermediate)
                        .with_management("Avaliar risco de nefropatia induzida por contraste iodado."),
                    Category::new("G3b", "G3b: TFG moderada a gravemente reduzida", 4, Severity::Intermediate)
                        .with_management("Avaliar risco de nefropatia induzida por contraste iodado."),
                    Category::new("G4", "G4: TFG gravemente reduzida", 5, Severity::High)
                        .with_management("Evitar contraste iodado e gadolínio de alto risco quando possível."),
                    Category::new("G5", "G5: falência renal", 6, Severity::Critical)
                        .with_management("Evitar contraste iodado e gadolínio de alto risco quando possível."),
                ])
                .rules(vec![
                    Rule::new("stage-g5", when::band("egfr", "G5"), "G5"),
                    Rule::new("stage-g4", when::band("egfr", "G4"), "G4"),
                    Rule::new("stage-g3b", when::band("egfr", "G3b"), "G3b"),
                    Rule::new("stage-g3a", when::band("egfr", "G3a"), "G3a"),
                    Rule::new("stage-g2", when::band("egfr", "G2"), "G2"),
                    Rule::new("stage-g1", when::band("egfr", "G1"), "G1"),
                ])
                .report(
                    "Creatinina sérica de {{ fields.creatinine.value }}. \
                     TFG estimada (CKD-EPI 2021): {{ derived.egfr.value }}. \
                     Estágio {{ category.label }}.\
                     {% if category.management %} {{ category.management }}{% endif %}",
                )
        });
        &SCHEME
    }
}
