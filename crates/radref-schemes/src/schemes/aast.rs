//! AAST organ injury scales (2018 revision) for spleen, liver and kidney.
//!
//! Each finding is graded independently and the organ takes the highest
//! grade, so rules run from grade V down to I.

use std::sync::LazyLock;

use radref_core::models::rule::when;
use radref_core::models::{Category, Field, Rule, Scheme, Severity};

use crate::Calculator;

fn grades(organ: &str) -> Vec<Category> {
    let label = |grade: &str| format!("AAST {organ} grau {grade}");
    vec![
        Category::new("0", &format!("Sem lesão traumática ({organ})"), 0, Severity::Benign)
            .with_management("Sem lesão de órgão sólido identificada."),
        Category::new("I", &label("I"), 1, Severity::Low)
            .with_management("Tratamento não operatório na maioria dos casos."),
        Category::new("II", &label("II"), 2, Severity::Low)
            .with_management("Tratamento não operatório na maioria dos casos."),
        Category::new("III", &label("III"), 3, Severity::Intermediate)
            .with_management("Tratamento não operatório em paciente estável, com monitorização."),
        Category::new("IV", &label("IV"), 4, Severity::High).with_management(
            "Considerar angioembolização; cirurgia se instabilidade hemodinâmica.",
        ),
        Category::new("V", &label("V"), 5, Severity::Critical).with_management(
            "Alta probabilidade de tratamento cirúrgico ou endovascular.",
        ),
    ]
}

fn subcapsular() -> Field {
    Field::choice(
        "subcapsular",
        "Hematoma subcapsular",
        &[
            ("none", "ausente"),
            ("lt10", "< 10% da superfície"),
            ("10-50", "10 a 50% da superfície"),
            ("gt50", "> 50% da superfície ou roto"),
        ],
    )
    .default_value("none")
}

const REPORT: &str = "Achados: {% for f in findings %}{% if f.code != \"none\" and f.code != \"no\" %}\
                      {{ f.label | lower }} {{ f.value }}; {% endif %}{% endfor %}\
                      Classificação: {{ category.label }}. {{ category.management }}";

/// AAST spleen injury scale.
pub struct AastSpleen;

impl Calculator for AastSpleen {
    fn scheme(&self) -> &Scheme {
        static SCHEME: LazyLock<Scheme> = LazyLock::new(|| {
            Scheme::new("aast-spleen", "AAST baço (2018)")
                .describe("Escala de lesão esplênica da AAST, revisão 2018, por TC.")
                .fields(vec![
                    subcapsular(),
                    Field::choice(
                        "intraparenchymal",
                        "Hematoma intraparenquimatoso",
                        &[("none", "ausente"), ("lt5", "< 5 cm"), ("ge5", "≥ 5 cm")],
                    )
                    .default_value("none"),
                    Field::choice(
                        "laceration",
                        "Laceração",
                        &[
                            ("none", "ausente"),
                            ("lt1", "< 1 cm de profundidade"),
                            ("1-3", "1 a 3 cm de profundidade"),
                            ("gt3", "> 3 cm de profundidade"),
                            ("devascularizing", "envolvendo vasos segmentares ou hilares com desvascularização > 25%"),
                            ("shattered", "baço pulverizado"),
                        ],
                    )
                    .default_value("none"),
                    Field::choice(
                        "vascular",
                        "Lesão vascular",
                        &[
                            ("none", "ausente"),
                            ("contained", "lesão vascular ou sangramento ativo contido na cápsula"),
                            ("peritoneal", "sangramento ativo além do baço, para o peritônio"),
                        ],
                    )
                    .default_value("none"),
                ])
                .categories(grades("baço"))
                .rules(vec![
                    Rule::new(
                        "grade-v",
                        when::any([
                            when::eq("laceration", "shattered"),
                            when::eq("vascular", "peritoneal"),
                        ]),
                        "V",
                    ),
                    Rule::new(
                        "grade-iv",
                        when::any([
                            when::eq("laceration", "devascularizing"),
                            when::eq("vascular", "contained"),
                        ]),
                        "IV",
                    ),
                    Rule::new(
                        "grade-iii",
                        when::any([
                            when::eq("subcapsular", "gt50"),
                            when::eq("intraparenchymal", "ge5"),
                            when::eq("laceration", "gt3"),
                        ]),
                        "III",
                    ),
                    Rule::new(
                        "grade-ii",
                        when::any([
                            when::eq("subcapsular", "10-50"),
                            when::eq("intraparenchymal", "lt5"),
                            when::eq("laceration", "1-3"),
                        ]),
                        "II",
                    ),
                    Rule::new(
                        "grade-i",
                        when::any([
                            when::eq("subcapsular", "lt10"),
                            when::eq("laceration", "lt1"),
                        ]),
                        "I",
                    ),
                    Rule::new("no-injury", when::always(), "0"),
                ])
                .report(REPORT)
        });
        &SCHEME
    }
}

/// AAST liver injury scale.
pub struct AastLiver;

impl Calculator for AastLiver {
    fn scheme(&self) -> &Scheme {
        static SCHEME: LazyLock<Scheme> = LazyLock::new(|| {
            Scheme::new("aast-liver", "AAST fígado (2018)")
                .describe("Escala de lesão hepática da AAST, revisão 2018, por TC.")
                .fields(vec![
                    subcapsular(),
                    Field::choice(
                        "intraparenchymal",
                        "Hematoma intraparenquimatoso",
                        &[("none", "ausente"), ("lt10", "< 10 cm"), ("ge10", "≥ 10 cm ou roto")],
                    )
                    .default_value("none"),
                    Field::choice(
                        "laceration",
                        "Laceração",
                        &[
                            ("none", "ausente"),
                            ("lt1", "< 1 cm de profundidade"),
                            ("1-3", "1 a 3 cm de profundidade e ≤ 10 cm de extensão"),
                            ("gt3", "> 3 cm de profundidade"),
                            ("lobar-25-75", "ruptura parenquimatosa de 25 a 75% do lobo"),
                            ("lobar-gt75", "ruptura parenquimatosa > 75% do lobo"),
                        ],
                    )
                    .default_value("none"),
                    Field::choice(
                        "vascular",
                        "Lesão vascular",
                        &[
                            ("none", "ausente"),
                            ("contained", "lesão vascular ou sangramento ativo contido no parênquima"),
                            ("peritoneal", "sangramento ativo além do fígado, para o peritônio"),
                            ("juxtahepatic", "lesão venosa justa-hepática (veia cava retro-hepática ou veias hepáticas)"),
                        ],
                    )
                    .default_value("none"),
                ])
                .categories(grades("fígado"))
                .rules(vec![
                    Rule::new(
                        "grade-v",
                        when::any([
                            when::eq("laceration", "lobar-gt75"),
                            when::eq("vascular", "juxtahepatic"),
                        ]),
                        "V",
                    ),
                    Rule::new(
                        "grade-iv",
                        when::any([
                            when::eq("laceration", "lobar-25-75"),
                            when::eq("vascular", "peritoneal"),
                        ]),
                        "IV",
                    ),
                    Rule::new(
                        "grade-iii",
                        when::any([
                            when::eq("subcapsular", "gt50"),
                            when::eq("intraparenchymal", "ge10"),
                            when::eq("laceration", "gt3"),
                            when::eq("vascular", "contained"),
                        ]),
                        "III",
                    ),
                    Rule::new(
                        "grade-ii",
                        when::any([
                            when::eq("subcapsular", "10-50"),
                            when::eq("intraparenchymal", "lt10"),
                            when::eq("laceration", "1-3"),
                        ]),
                        "II",
                    ),
                    Rule::new(
                        "grade-i",
                        when::any([
                            when::eq("subcapsular", "lt10"),
                            when::eq("laceration", "lt1"),
                        ]),
                        "I",
                    ),
                    Rule::new("no-injury", when::always(), "0"),
                ])
                .report(REPORT)
        });
        &SCHEME
    }
}

/// AAST kidney injury scale.
pub struct AastKidney;

impl Calculator for AastKidney {
    fn scheme(&self) -> &Scheme {
        static SCHEME: LazyLock<Scheme> = LazyLock::new(|| {
            Scheme::new("aast-kidney", "AAST rim (2018)")
                .describe("Escala de lesão renal da AAST, revisão 2018, por TC.")
                .fields(vec![
                    Field::choice(
                        "hematoma",
                        "Hematoma",
                        &[
                            ("none", "ausente"),
                            ("subcapsular", "subcapsular e/ou contusão parenquimatosa sem laceração"),
                            ("perirenal", "perirrenal confinado à fáscia de Gerota"),
                        ],
                    )
                    .default_value("none"),
                    Field::choice(
                        "laceration",
                        "Laceração",
                        &[
                            ("none", "ausente"),
                            ("le1", "≤ 1 cm de profundidade, sem lesão do sistema coletor"),
                            ("gt1", "> 1 cm de profundidade, sem lesão do sistema coletor"),
                            ("collecting", "estendendo-se ao sistema coletor com extravasamento urinário"),
                            ("shattered", "rim fragmentado com perda da anatomia parenquimatosa"),
                        ],
                    )
                    .default_value("none"),
                    Field::choice(
                        "vascular",
                        "Lesão vascular",
                        &[
                            ("none", "ausente"),
                            ("contained", "lesão vascular ou sangramento ativo contido na fáscia de Gerota"),
                            ("beyond", "sangramento ativo além da fáscia de Gerota"),
                            ("infarct", "infarto segmentar ou completo por trombose, sem sangramento ativo"),
                            ("hilar", "laceração ou avulsão da artéria ou veia renal principal"),
                            ("devascularized", "rim desvascularizado com sangramento ativo"),
                        ],
                    )
                    .default_value("none"),
                    Field::yes_no("pelvis", "Laceração da pelve renal ou ruptura ureteropélvica")
                        .default_value("no"),
                ])
                .categories(grades("rim"))
                .rules(vec![
                    Rule::new(
                        "grade-v",
                        when::any([
                            when::eq("laceration", "shattered"),
                            when::one_of("vascular", &["hilar", "devascularized"]),
                        ]),
                        "V",
                    ),
                    Rule::new(
                        "grade-iv",
                        when::any([
                            when::eq("laceration", "collecting"),
                            when::one_of("vascular", &["beyond", "infarct"]),
                            when::yes("pelvis"),
                        ]),
                        "IV",
                    ),
                    Rule::new(
                        "grade-iii",
                        when::any([
                            when::eq("laceration", "gt1"),
                            when::eq("vascular", "contained"),
                        ]),
                        "III",
                    ),
                    Rule::new(
                        "grade-ii",
                        when::any([
                            when::eq("hematoma", "perirenal"),
                            when::eq("laceration", "le1"),
                        ]),
                        "II",
                    ),
                    Rule::new("grade-i", when::eq("hematoma", "subcapsular"), "I"),
                    Rule::new("no-injury", when::always(), "0"),
                ])
                .report(REPORT)
        });
        &SCHEME
    }
}
