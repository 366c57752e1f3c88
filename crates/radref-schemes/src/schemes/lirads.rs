use std::sync::LazyLock;

use radref_core::models::rule::when;
use radref_core::models::{
    Band, Category, Derived, Expr, Field, Interval, Rule, Scheme, Severity,
};

use crate::Calculator;

/// LI-RADS CT/MRI v2018 diagnostic categories for observations in
/// patients at risk for hepatocellular carcinoma.
pub struct LiRads;

impl Calculator for LiRads {
    fn scheme(&self) -> &Scheme {
        static SCHEME: LazyLock<Scheme> = LazyLock::new(|| {
            Scheme::new("li-rads-v2018", "LI-RADS TC/RM v2018")
                .describe(
                    "Categorização de observações hepáticas em pacientes de risco para \
                     carcinoma hepatocelular (TC/RM, versão 2018).",
                )
                .fields(vec![
                    Field::yes_no("atRisk", "Paciente de risco para CHC"),
                    Field::choice(
                        "priorCategory",
                        "Categoria por critério direto",
                        &[
                            ("none", "nenhuma (aplicar tabela diagnóstica)"),
                            ("nc", "não categorizável por degradação ou omissão de imagens"),
                            ("tiv", "tumor em veia"),
                            ("m", "características de malignidade não específicas de CHC"),
                            ("lr1", "definitivamente benigna"),
                            ("lr2", "provavelmente benigna"),
                        ],
                    )
                    .when("atRisk", "yes"),
                    Field::choice(
                        "size",
                        "Tamanho",
                        &[
                            ("lt10", "< 10 mm"),
                            ("10-19", "10 a 19 mm"),
                            ("ge20", "≥ 20 mm"),
                        ],
                    )
                    .when("priorCategory", "none"),
                    Field::yes_no("aphe", "Hiperrealce arterial não periférico (APHE)")
                        .when("priorCategory", "none"),
                    Field::yes_no("washout", "Washout não periférico")
                        .when("priorCategory", "none"),
                    Field::yes_no("capsule", "Cápsula com realce").when("priorCategory", "none"),
                    Field::yes_no("thresholdGrowth", "Crescimento limiar")
                        .when("priorCategory", "none"),
                    Field::choice(
                        "ancillary",
                        "Características ancilares",
                        &[
                            ("none", "ausentes ou balanceadas"),
                            ("benign", "favorecem benignidade"),
                            ("malignant", "favorecem malignidade"),
                        ],
                    )
                    .when("priorCategory", "none")
                    .default_value("none"),
                ])
                .derived(vec![
                    Derived::new(
                        "additionalFeatures",
                        "Características maiores adicionais",
                        Expr::count_of(&["washout", "capsule", "thresholdGrowth"], "yes"),
                    )
                    .range(Interval::closed(0.0, 3.0))
                    .bands(vec![
                        Band::new("none", "nenhuma", Interval::closed_open(0.0, 1.0)),
                        Band::new("one", "uma", Interval::closed_open(1.0, 2.0)),
                        Band::new("two-or-more", "duas ou mais", Interval::closed(2.0, 3.0)),
                    ]),
                ])
                .categories(vec![
                    Category::new("LR-NA", "Não aplicável", 0, Severity::Indeterminate)
                        .with_management(
                            "LI-RADS não se aplica a pacientes sem fatores de risco para CHC.",
                        ),
                    Category::new("LR-NC", "LR-NC (não categorizável)", 0, Severity::Indeterminate)
                        .with_management("Repetir ou realizar exame alternativo em até 3 meses."),
                    Category::new("LR-1", "LR-1 (definitivamente benigna)", 1, Severity::Benign)
                        .with_risk("Risco de CHC: 0%")
                        .with_management("Retornar ao rastreamento habitual em 6 meses."),
                    Category::new("LR-2", "LR-2 (provavelmente benigna)", 2, Severity::Low)
                        .with_risk("Risco de CHC: ~13%")
                        .with_management(
                            "Retornar ao rastreamento em 6 meses; considerar repetir exame \
                             diagnóstico em até 6 meses.",
                        ),
                    Category::new(
                        "LR-3",
                        "LR-3 (probabilidade intermediária de malignidade)",
                        3,
                        Severity::Intermediate,
                    )
                    .with_risk("Risco de CHC: ~38%")
                    .with_management("Repetir ou realizar exame alternativo em 3 a 6 meses."),
                    Category::new("LR-4", "LR-4 (provavelmente CHC)", 4, Severity::High)
                        .with_risk("Risco de CHC: ~74%")
                        .with_management(
                            "Discussão multidisciplinar; considerar biópsia ou repetir exame \
                             em até 3 meses.",
                        ),
                    Category::new("LR-5", "LR-5 (definitivamente CHC)", 5, Severity::Critical)
                        .with_risk("Risco de CHC: ~94%")
                        .with_management(
                            "Discussão multidisciplinar para consenso sobre tratamento; \
                             biópsia geralmente desnecessária.",
                        ),
                    Category::new(
                        "LR-M",
                        "LR-M (provavelmente ou definitivamente maligna, não específica de CHC)",
                        6,
                        Severity::High,
                    )
                    .with_risk("Risco de malignidade: ~93% (CHC ~36%)")
                    .with_management("Discussão multidisciplinar; biópsia frequentemente necessária."),
                    Category::new("LR-TIV", "LR-TIV (tumor em veia)", 7, Severity::Critical)
                        .with_management("Discussão multidisciplinar; avaliar extensão tumoral."),
                ])
                .scale(&["LR-1", "LR-2", "LR-3", "LR-4", "LR-5"])
                .rules(vec![
                    Rule::new("not-at-risk", when::eq("atRisk", "no"), "LR-NA"),
                    Rule::new("not-categorizable", when::eq("priorCategory", "nc"), "LR-NC"),
                    Rule::new("tumor-in-vein", when::eq("priorCategory", "tiv"), "LR-TIV"),
                    Rule::new("malignant-not-hcc", when::eq("priorCategory", "m"), "LR-M"),
                    Rule::new("definitely-benign", when::eq("priorCategory", "lr1"), "LR-1"),
                    Rule::new("probably-benign", when::eq("priorCategory", "lr2"), "LR-2"),
                    Rule::adjust(
                        "ancillary-favor-benign",
                        when::eq("ancillary", "benign"),
                        -1,
                        "LR-1",
                        "LR-4",
                    ),
                    // Ancillary features cannot upgrade to LR-5.
                    Rule::adjust(
                        "ancillary-favor-malignant",
                        when::eq("ancillary", "malignant"),
                        1,
                        "LR-1",
                        "LR-4",
                    ),
                    Rule::new(
                        "aphe-large-with-features",
                        when::all([
                            when::yes("aphe"),
                            when::eq("size", "ge20"),
                            when::not(when::band("additionalFeatures", "none")),
                        ]),
                        "LR-5",
                    ),
                    Rule::new(
                        "aphe-mid-washout-or-growth",
                        when::all([
                            when::yes("aphe"),
                            when::eq("size", "10-19"),
                            when::any([when::yes("washout"), when::yes("thresholdGrowth")]),
                        ]),
                        "LR-5",
                    ),
                    Rule::new(
                        "aphe-large",
                        when::all([when::yes("aphe"), when::eq("size", "ge20")]),
                        "LR-4",
                    ),
                    Rule::new(
                        "aphe-mid-capsule",
                        when::all([
                            when::yes("aphe"),
                            when::eq("size", "10-19"),
                            when::not(when::band("additionalFeatures", "none")),
                        ]),
                        "LR-4",
                    ),
                    Rule::new(
                        "aphe-small-with-features",
                        when::all([
                            when::yes("aphe"),
                            when::eq("size", "lt10"),
                            when::not(when::band("additionalFeatures", "none")),
                        ]),
                        "LR-4",
                    ),
                    Rule::new(
                        "no-aphe-large-with-features",
                        when::all([
                            when::eq("aphe", "no"),
                            when::eq("size", "ge20"),
                            when::not(when::band("additionalFeatures", "none")),
                        ]),
                        "LR-4",
                    ),
                    Rule::new(
                        "no-aphe-two-or-more-features",
                        when::all([
                            when::eq("aphe", "no"),
                            when::band("additionalFeatures", "two-or-more"),
                        ]),
                        "LR-4",
                    ),
                    Rule::new(
                        "no-aphe-small-single-feature",
                        when::all([
                            when::eq("aphe", "no"),
                            when::band("additionalFeatures", "one"),
                        ]),
                        "LR-3",
                    ),
                    Rule::new(
                        "no-additional-features",
                        when::band("additionalFeatures", "none"),
                        "LR-3",
                    ),
                ])
                .report(
                    "{% if fields.size is defined %}Observação hepática de {{ fields.size.value }}, \
                     {% if fields.aphe.code == \"yes\" %}com{% else %}sem{% endif %} APHE\
                     {% if derived.additionalFeatures.number > 0 %}, com \
                     {{ derived.additionalFeatures.value }} característica(s) maior(es) adicional(is)\
                     {% endif %}\
                     {% if fields.ancillary.code != \"none\" %}; características ancilares que \
                     {{ fields.ancillary.value }}{% endif %}. {% endif %}\
                     Classificação LI-RADS v2018: {{ category.label }}.\
                     {% if category.risk %} {{ category.risk }}.{% endif %}\
                     {% if category.management %} {{ category.management }}{% endif %}",
                )
        });
        &SCHEME
    }
}
