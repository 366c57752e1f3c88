use std::sync::LazyLock;

use radref_core::models::rule::when;
use radref_core::models::{Category, Field, Rule, Scheme, Severity};

use crate::Calculator;

/// BI-RADS final assessment for mammography (5th edition lexicon).
pub struct BiRads;

impl Calculator for BiRads {
    fn scheme(&self) -> &Scheme {
        static SCHEME: LazyLock<Scheme> = LazyLock::new(|| {
            Scheme::new("bi-rads", "BI-RADS (mamografia)")
                .describe("Categoria de avaliação final BI-RADS para mamografia, 5ª edição.")
                .fields(vec![
                    Field::yes_no("studyComplete", "Avaliação por imagem completa"),
                    Field::yes_no("knownCancer", "Malignidade comprovada por biópsia")
                        .when("studyComplete", "yes"),
                    Field::choice(
                        "finding",
                        "Achado dominante",
                        &[
                            ("none", "nenhum achado"),
                            ("benign", "achado tipicamente benigno"),
                            ("mass", "nódulo"),
                            ("calcifications", "calcificações"),
                            ("asymmetry", "assimetria"),
                            ("distortion", "distorção arquitetural"),
                        ],
                    )
                    .when("knownCancer", "no"),
                    Field::choice(
                        "massShape",
                        "Forma do nódulo",
                        &[("oval", "oval"), ("round", "redonda"), ("irregular", "irregular")],
                    )
                    .when("finding", "mass"),
                    Field::choice(
                        "massMargin",
                        "Margem do nódulo",
                        &[
                            ("circumscribed", "circunscrita"),
                            ("obscured", "obscurecida"),
                            ("microlobulated", "microlobulada"),
                            ("indistinct", "indistinta"),
                            ("spiculated", "espiculada"),
                        ],
                    )
                    .when("finding", "mass"),
                    Field::choice(
                        "calcMorphology",
                        "Morfologia das calcificações",
                        &[
                            ("typically_benign", "tipicamente benignas"),
                            ("coarse_heterogeneous", "grosseiras heterogêneas"),
                            ("amorphous", "amorfas"),
                            ("fine_pleomorphic", "finas pleomórficas"),
                            ("fine_linear", "finas lineares ou lineares ramificadas"),
                        ],
                    )
                    .when("finding", "calcifications"),
                    Field::choice(
                        "calcDistribution",
                        "Distribuição das calcificações",
                        &[
                            ("diffuse", "difusa"),
                            ("regional", "regional"),
                            ("grouped", "agrupada"),
                            ("linear", "linear"),
                            ("segmental", "segmentar"),
                        ],
                    )
                    .when("finding", "calcifications"),
                    Field::choice(
                        "asymmetryType",
                        "Tipo de assimetria",
                        &[
                            ("global", "global"),
                            ("focal", "focal"),
                            ("developing", "em desenvolvimento"),
                        ],
                    )
                    .when("finding", "asymmetry"),
                    Field::yes_no("postSurgical", "Relacionada a cirurgia prévia")
                        .when("finding", "distortion"),
                ])
                .categories(vec![
                    Category::new("BI-RADS 0", "BI-RADS 0: incompleto", 0, Severity::Indeterminate)
                        .with_management("Necessária avaliação adicional por imagem ou comparação com exames anteriores."),
                    Category::new("BI-RADS 1", "BI-RADS 1: negativo", 1, Severity::Benign)
                        .with_risk("Probabilidade de malignidade essencialmente 0%")
                        .with_management("Rastreamento de rotina."),
                    Category::new("BI-RADS 2", "BI-RADS 2: benigno", 2, Severity::Benign)
                        .with_risk("Probabilidade de malignidade essencialmente 0%")
                        .with_management("Rastreamento de rotina."),
                    Category::new("BI-RADS 3", "BI-RADS 3: provavelmente benigno", 3, Severity::Low)
                        .with_risk("Probabilidade de malignidade ≤ 2%")
                        .with_management("Seguimento em curto intervalo (6 meses) ou vigilância contínua."),
                    Category::new("BI-RADS 4A", "BI-RADS 4A: baixa suspeição", 4, Severity::Intermediate)
                        .with_risk("Probabilidade de malignidade > 2% a ≤ 10%")
                        .with_management("Diagnóstico tecidual."),
                    Category::new("BI-RADS 4B", "BI-RADS 4B: suspeição moderada", 5, Severity::Intermediate)
                        .with_risk("Probabilidade de malignidade > 10% a ≤ 50%")
                        .with_management("Diagnóstico tecidual."),
                    Category::new("BI-RADS 4C", "BI-RADS 4C: alta suspeição", 6, Severity::High)
                        .with_risk("Probabilidade de malignidade > 50% a < 95%")
                        .with_management("Diagnóstico tecidual."),
                    Category::new(
                        "BI-RADS 5",
                        "BI-RADS 5: altamente sugestivo de malignidade",
                        7,
                        Severity::Critical,
                    )
                    .with_risk("Probabilidade de malignidade ≥ 95%")
                    .with_management("Diagnóstico tecidual."),
                    Category::new(
                        "BI-RADS 6",
                        "BI-RADS 6: malignidade comprovada por biópsia",
                        8,
                        Severity::Critical,
                    )
                    .with_management("Excisão cirúrgica quando clinicamente apropriado."),
                ])
                .rules(vec![
                    Rule::new("incomplete", when::eq("studyComplete", "no"), "BI-RADS 0"),
                    Rule::new("known-cancer", when::yes("knownCancer"), "BI-RADS 6"),
                    Rule::new("negative", when::eq("finding", "none"), "BI-RADS 1"),
                    Rule::new("benign-finding", when::eq("finding", "benign"), "BI-RADS 2"),
                    Rule::new(
                        "irregular-spiculated-mass",
                        when::all([
                            when::eq("massShape", "irregular"),
                            when::eq("massMargin", "spiculated"),
                        ]),
                        "BI-RADS 5",
                    ),
                    Rule::new(
                        "spiculated-or-irregular-indistinct-mass",
                        when::any([
                            when::eq("massMargin", "spiculated"),
                            when::all([
                                when::eq("massShape", "irregular"),
                                when::eq("massMargin", "indistinct"),
                            ]),
                        ]),
                        "BI-RADS 4C",
                    ),
                    Rule::new(
                        "irregular-or-ill-defined-mass",
                        when::any([
                            when::eq("massShape", "irregular"),
                            when::one_of("massMargin", &["microlobulated", "indistinct"]),
                        ]),
                        "BI-RADS 4B",
                    ),
                    Rule::new("obscured-mass", when::eq("massMargin", "obscured"), "BI-RADS 4A"),
                    Rule::new(
                        "circumscribed-mass",
                        when::eq("massMargin", "circumscribed"),
                        "BI-RADS 3",
                    ),
                    Rule::new(
                        "linear-calcifications-linear-distribution",
                        when::all([
                            when::eq("calcMorphology", "fine_linear"),
                            when::one_of("calcDistribution", &["linear", "segmental"]),
                        ]),
                        "BI-RADS 5",
                    ),
                    Rule::new(
                        "fine-calcifications",
                        when::one_of("calcMorphology", &["fine_pleomorphic", "fine_linear"]),
                        "BI-RADS 4C",
                    ),
                    Rule::new(
                        "amorphous-calcifications",
                        when::eq("calcMorphology", "amorphous"),
                        "BI-RADS 4B",
                    ),
                    Rule::new(
                        "coarse-calcifications",
                        when::eq("calcMorphology", "coarse_heterogeneous"),
                        "BI-RADS 4A",
                    ),
                    Rule::new(
                        "benign-calcifications",
                        when::eq("calcMorphology", "typically_benign"),
                        "BI-RADS 2",
                    ),
                    Rule::new("global-asymmetry", when::eq("asymmetryType", "global"), "BI-RADS 2"),
                    Rule::new("focal-asymmetry", when::eq("asymmetryType", "focal"), "BI-RADS 3"),
                    Rule::new(
                        "developing-asymmetry",
                        when::eq("asymmetryType", "developing"),
                        "BI-RADS 4A",
                    ),
                    Rule::new("post-surgical-distortion", when::yes("postSurgical"), "BI-RADS 2"),
                    Rule::new("distortion", when::eq("postSurgical", "no"), "BI-RADS 4B"),
                ])
        });
        &SCHEME
    }
}
