use std::sync::LazyLock;

use radref_core::models::rule::when;
use radref_core::models::{Category, Field, Rule, Scheme, Severity};

use crate::Calculator;

/// O-RADS MRI risk score for adnexal lesions.
pub struct ORadsMri;

impl Calculator for ORadsMri {
    fn scheme(&self) -> &Scheme {
        static SCHEME: LazyLock<Scheme> = LazyLock::new(|| {
            Scheme::new("o-rads-mri", "O-RADS RM")
                .describe("Estratificação de risco de lesões anexiais à ressonância magnética.")
                .fields(vec![
                    Field::choice(
                        "lesion",
                        "Achado anexial",
                        &[
                            ("none", "sem lesão anexial"),
                            ("physiologic", "achado fisiológico (folículo, corpo lúteo)"),
                            ("adnexal", "lesão anexial"),
                        ],
                    ),
                    Field::yes_no("peritoneal", "Implantes peritoneais, mesentéricos ou omentais")
                        .when("lesion", "adnexal")
                        .default_value("no"),
                    Field::yes_no("solidTissue", "Tecido sólido com realce").when("lesion", "adnexal"),
                    Field::choice(
                        "cysticType",
                        "Conteúdo cístico",
                        &[
                            ("simple", "unilocular com líquido simples"),
                            ("endometriotic", "unilocular com conteúdo endometriótico"),
                            ("lipid", "conteúdo lipídico sem tecido sólido"),
                            ("proteinaceous", "unilocular com conteúdo proteico, hemorrágico ou mucinoso"),
                            ("multilocular", "multilocular sem tecido sólido"),
                        ],
                    )
                    .when("solidTissue", "no"),
                    Field::yes_no(
                        "solidDark",
                        "Tecido sólido homogeneamente hipointenso em T2 e na difusão (b alto)",
                    )
                    .when("solidTissue", "yes"),
                    Field::choice(
                        "perfusion",
                        "Curva de perfusão (DCE)",
                        &[
                            ("low", "curva de baixo risco"),
                            ("intermediate", "curva de risco intermediário"),
                            ("high", "curva de alto risco"),
                            ("unavailable", "perfusão dinâmica indisponível"),
                        ],
                    )
                    .when("solidDark", "no"),
                    Field::choice(
                        "dwiSignal",
                        "Difusão do tecido sólido",
                        &[
                            ("unrestricted", "sem restrição"),
                            ("restricted", "com restrição"),
                        ],
                    )
                    .when("perfusion", "unavailable"),
                ])
                .categories(vec![
                    Category::new("O-RADS MRI 1", "O-RADS RM 1: ovários normais", 1, Severity::Benign)
                        .with_risk("Sem lesão anexial")
                        .with_management("Sem necessidade de seguimento."),
                    Category::new("O-RADS MRI 2", "O-RADS RM 2: quase certamente benigno", 2, Severity::Benign)
                        .with_risk("VPP para malignidade < 0,5%")
                        .with_management("Sem seguimento ou conforme contexto clínico."),
                    Category::new("O-RADS MRI 3", "O-RADS RM 3: baixo risco", 3, Severity::Low)
                        .with_risk("VPP para malignidade ~5%")
                        .with_management("Seguimento por imagem ou avaliação ginecológica."),
                    Category::new("O-RADS MRI 4", "O-RADS RM 4: risco intermediário", 4, Severity::Intermediate)
                        .with_risk("VPP para malignidade ~50%")
                        .with_management("Avaliação por ginecologista, preferencialmente oncológico."),
                    Category::new("O-RADS MRI 5", "O-RADS RM 5: alto risco", 5, Severity::High)
                        .with_risk("VPP para malignidade ~90%")
                        .with_management("Avaliação por ginecologista oncológico."),
                ])
                .rules(vec![
                    Rule::new("no-lesion", when::eq("lesion", "none"), "O-RADS MRI 1"),
                    Rule::new("physiologic", when::eq("lesion", "physiologic"), "O-RADS MRI 1"),
                    Rule::new("peritoneal-implants", when::yes("peritoneal"), "O-RADS MRI 5"),
                    Rule::new("dark-solid-tissue", when::yes("solidDark"), "O-RADS MRI 2"),
                    Rule::new("high-risk-curve", when::eq("perfusion", "high"), "O-RADS MRI 5"),
                    Rule::new(
                        "intermediate-risk-curve",
                        when::eq("perfusion", "intermediate"),
                        "O-RADS MRI 4",
                    ),
                    Rule::new("low-risk-curve", when::eq("perfusion", "low"), "O-RADS MRI 3"),
                    // Without DCE the score is read from diffusion alone.
                    Rule::new("dwi-restricted", when::eq("dwiSignal", "restricted"), "O-RADS MRI 4"),
                    Rule::new(
                        "dwi-unrestricted",
                        when::eq("dwiSignal", "unrestricted"),
                        "O-RADS MRI 3",
                    ),
                    Rule::new(
                        "benign-cyst",
                        when::one_of("cysticType", &["simple", "endometriotic", "lipid"]),
                        "O-RADS MRI 2",
                    ),
                    Rule::new(
                        "complex-cyst",
                        when::one_of("cysticType", &["proteinaceous", "multilocular"]),
                        "O-RADS MRI 3",
                    ),
                ])
        });
        &SCHEME
    }
}
