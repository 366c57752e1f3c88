use std::collections::BTreeSet;

use radref_core::check::check_scheme;
use radref_core::models::{AnswerSet, Outcome};
use radref_report::check_template;
use radref_schemes::error::CalculatorError;
use radref_schemes::registry::Registry;
use radref_schemes::{all_calculators, get_calculator, get_scheme, registry, Calculator};

/// One complete answer set per scheme, each expected to match a category.
const SAMPLES: &[(&str, &str)] = &[
    (
        "bosniak-v2019",
        r#"{"septaCount":"few","septaThick":"thin","wall":"thin","enhancement":"none","attenuation":"water"}"#,
    ),
    (
        "li-rads-v2018",
        r#"{"atRisk":"yes","priorCategory":"none","size":"ge20","aphe":"no","washout":"no","capsule":"yes","thresholdGrowth":"no"}"#,
    ),
    (
        "bi-rads",
        r#"{"studyComplete":"yes","knownCancer":"no","finding":"mass","massShape":"oval","massMargin":"circumscribed"}"#,
    ),
    ("pi-rads-v2.1", r#"{"zone":"tz","t2":2,"dwi":4}"#),
    (
        "fleischner-2017",
        r#"{"eligible":"yes","nodule":"ground_glass","multiplicity":"single","size":7}"#,
    ),
    ("cad-rads-2.0", r#"{"stenosis":45,"leftMain":"yes"}"#),
    (
        "o-rads-mri",
        r#"{"lesion":"adnexal","solidTissue":"yes","solidDark":"no","perfusion":"unavailable","dwiSignal":"restricted"}"#,
    ),
    (
        "lung-rads-v2022",
        r#"{"complete":"yes","exam":"followup","nodule":"solid","size":7,"status":"new"}"#,
    ),
    ("aast-spleen", r#"{"laceration":"1-3","subcapsular":"lt10"}"#),
    ("aast-liver", r#"{"vascular":"contained"}"#),
    ("aast-kidney", r#"{"hematoma":"perirenal","pelvis":"yes"}"#),
    ("ao-spine-thoracolumbar", r#"{"morphology":"A3","neuro":"N2"}"#),
    (
        "renal-nephrometry",
        r#"{"radius":1,"exophytic":1,"nearness":3,"anterior":"x","location":1,"hilar":"yes"}"#,
    ),
    (
        "villalta",
        r#"{"pain":1,"cramps":1,"heaviness":2,"paresthesia":0,"pruritus":0,"edema":1,
            "induration":0,"hyperpigmentation":1,"redness":0,"ectasia":1,"calfPain":0,"ulcer":"no"}"#,
    ),
    (
        "pesi",
        r#"{"age":82,"male":"no","cancer":"yes","heartFailure":"no","lungDisease":"no","heartRate":"no",
            "hypotension":"no","tachypnea":"no","hypothermia":"no","alteredMental":"no","hypoxemia":"yes"}"#,
    ),
    ("aspects", r#"{"m1":"yes"}"#),
    (
        "c-rads",
        r#"{"adequate":"yes","mass":"no","largestPolyp":7,"extracolonic":"E2"}"#,
    ),
    (
        "bone-rads",
        r#"{"pain":"no","malignancy":"no","typicalBenign":"yes"}"#,
    ),
    ("ckd-epi-2021", r#"{"creatinine":2.1,"age":71,"sex":"female"}"#),
    ("prostate-volume", r#"{"length":4.2,"width":4.8,"height":3.9}"#),
];

fn sample(key: &str) -> AnswerSet {
    let (_, json) = SAMPLES
        .iter()
        .find(|(k, _)| *k == key)
        .unwrap_or_else(|| panic!("no sample for {key}"));
    AnswerSet::from_json(json).unwrap()
}

#[test]
fn every_scheme_passes_self_checks() {
    for calculator in all_calculators() {
        let errors = check_scheme(calculator.scheme());
        assert!(errors.is_empty(), "{}: {errors:?}", calculator.key());
        check_template(calculator.scheme()).unwrap();
    }
}

#[test]
fn registry_loads_every_calculator() {
    let keys: BTreeSet<&str> = registry().iter().map(|c| c.key()).collect();
    assert_eq!(keys.len(), all_calculators().len());
    assert_eq!(registry().len(), all_calculators().len());
    assert_eq!(registry().summaries().len(), registry().len());
}

#[test]
fn every_scheme_has_a_sample() {
    let sampled: BTreeSet<&str> = SAMPLES.iter().map(|(k, _)| *k).collect();
    for calculator in registry().iter() {
        assert!(sampled.contains(calculator.key()), "{}", calculator.key());
    }
}

#[test]
fn unknown_scheme_is_an_error() {
    let Err(err) = get_scheme("no-such-scheme") else {
        panic!("expected an error");
    };
    assert!(matches!(err, CalculatorError::UnknownScheme(ref key) if key == "no-such-scheme"));
    assert_eq!(err.to_string(), "unknown scheme: no-such-scheme");
}

#[test]
fn duplicate_keys_are_rejected() {
    let mut calculators = all_calculators();
    calculators.push(Box::new(radref_schemes::schemes::bosniak::Bosniak));
    assert!(matches!(
        Registry::new(calculators),
        Err(CalculatorError::Definition(_))
    ));
}

#[test]
fn samples_match_a_category() {
    for (key, _) in SAMPLES {
        let calculator = get_calculator(key).unwrap();
        let answers = sample(key);

        let validation = calculator.validate(&answers);
        assert!(validation.complete, "{key}: {validation:?}");

        let evaluation = calculator.evaluate(&answers).unwrap();
        assert_ne!(evaluation.outcome, Outcome::NoMatch, "{key}");
    }
}

#[test]
fn evaluation_is_deterministic() {
    for (key, _) in SAMPLES {
        let calculator = get_calculator(key).unwrap();
        let answers = sample(key);
        let first = calculator.assess(&answers);
        for _ in 0..3 {
            assert_eq!(calculator.assess(&answers), first, "{key}");
        }
    }
}

#[test]
fn reports_are_idempotent_and_non_empty() {
    for (key, _) in SAMPLES {
        let calculator = get_calculator(key).unwrap();
        let answers = sample(key);
        let evaluation = calculator.evaluate(&answers).unwrap();
        let category = evaluation.outcome.category().unwrap();

        let report = calculator.report(&answers, category);
        assert!(!report.is_empty(), "{key}");
        assert_eq!(calculator.report(&answers, category), report, "{key}");
    }
}

#[test]
fn incomplete_answers_are_reported_not_evaluated() {
    let calculator = get_calculator("bosniak-v2019").unwrap();
    let assessment = calculator.assess(&AnswerSet::new().with("wall", "thin"));

    assert!(!assessment.validation.complete);
    assert_eq!(assessment.validation.missing, vec!["enhancement", "attenuation"]);
    assert!(assessment.evaluation.is_none());
    assert!(assessment.report.is_none());
}

#[test]
fn assessment_serializes_for_the_ui() {
    let calculator = get_calculator("li-rads-v2018").unwrap();
    let assessment = calculator.assess(&sample("li-rads-v2018"));
    let json = serde_json::to_value(&assessment).unwrap();

    assert_eq!(json["scheme"], "li-rads-v2018");
    assert_eq!(json["validation"]["complete"], true);
    assert_eq!(json["evaluation"]["outcome"]["status"], "matched");
    assert_eq!(json["evaluation"]["outcome"]["category"]["code"], "LR-4");
    assert_eq!(json["evaluation"]["derived"]["additionalFeatures"], 1.0);
    assert!(json["report"].as_str().unwrap().contains("LR-4"));
}
