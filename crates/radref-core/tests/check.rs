use radref_core::check::{check_partition, check_scheme};
use radref_core::error::SchemeError;
use radref_core::models::rule::when;
use radref_core::models::{
    Band, Category, Derived, Expr, Field, Interval, Rule, Scheme, Severity, Trigger,
};

fn nodule_bands() -> Vec<Band> {
    vec![
        Band::new("lt6", "< 6 mm", Interval::lt(6.0)),
        Band::new("6to8", "6-8 mm", Interval::closed(6.0, 8.0)),
        Band::new("gt8", "> 8 mm", Interval::gt(8.0)),
    ]
}

#[test]
fn fleischner_style_bands_partition_the_line() {
    assert_eq!(check_partition(&Interval::all(), &nodule_bands()), Ok(()));
    // Clipped to a non-negative domain the same bands still partition it.
    assert_eq!(check_partition(&Interval::ge(0.0), &nodule_bands()), Ok(()));
}

#[test]
fn every_point_lands_in_exactly_one_band() {
    let bands = nodule_bands();
    for tenth in -20..200 {
        let x = f64::from(tenth) / 10.0;
        let hits = bands.iter().filter(|b| b.range.contains(x)).count();
        assert_eq!(hits, 1, "{x} falls in {hits} bands");
    }
}

#[test]
fn gap_is_reported() {
    let bands = vec![
        Band::new("lt6", "< 6", Interval::lt(6.0)),
        Band::new("gt6", "> 6", Interval::gt(6.0)),
    ];
    let err = check_partition(&Interval::all(), &bands).unwrap_err();
    assert!(err.contains("neither"), "{err}");

    let bands = vec![
        Band::new("lt6", "< 6", Interval::lt(6.0)),
        Band::new("ge7", ">= 7", Interval::ge(7.0)),
    ];
    assert!(check_partition(&Interval::all(), &bands).unwrap_err().contains("gap"));
}

#[test]
fn overlap_is_reported() {
    let bands = vec![
        Band::new("le6", "<= 6", Interval::le(6.0)),
        Band::new("ge6", ">= 6", Interval::ge(6.0)),
    ];
    assert!(check_partition(&Interval::all(), &bands).unwrap_err().contains("both contain"));

    let bands = vec![
        Band::new("lt8", "< 8", Interval::lt(8.0)),
        Band::new("gt6", "> 6", Interval::gt(6.0)),
    ];
    assert!(check_partition(&Interval::all(), &bands).unwrap_err().contains("overlap"));
}

#[test]
fn uncovered_ends_are_reported() {
    let bands = vec![Band::new("mid", "0-10", Interval::closed_open(0.0, 10.0))];
    assert!(check_partition(&Interval::ge(0.0), &bands).unwrap_err().contains("above"));
    assert!(check_partition(&Interval::lt(10.0), &bands).unwrap_err().contains("below"));
}

#[test]
fn band_outside_domain_is_reported() {
    let bands = vec![
        Band::new("neg", "< 0", Interval::lt(0.0)),
        Band::new("pos", ">= 0", Interval::ge(0.0)),
    ];
    assert!(check_partition(&Interval::ge(0.0), &bands).unwrap_err().contains("outside"));
}

#[test]
fn sound_scheme_has_no_errors() {
    let scheme = Scheme::new("ok", "Ok")
        .fields(vec![
            Field::numeric("size", "Size", Interval::ge(0.0)).bands(nodule_bands()),
            Field::yes_no("solid", "Solid"),
        ])
        .categories(vec![
            Category::new("a", "A", 1, Severity::Low),
            Category::new("b", "B", 2, Severity::High),
        ])
        .rules(vec![
            Rule::new("big", when::all([when::band("size", "gt8"), when::yes("solid")]), "b"),
            Rule::new("rest", when::always(), "a"),
        ]);
    assert!(check_scheme(&scheme).is_empty());
}

#[test]
fn authoring_defects_are_collected() {
    let scheme = Scheme::new("bad", "Bad")
        .fields(vec![
            Field::choice("detail", "Detail", &[("x", "x")]).depends_on("kind", Trigger::Equals("a".into())),
            Field::choice("kind", "Kind", &[("a", "a"), ("b", "b")]).default_value("c"),
            Field::yes_no("kind", "Kind again"),
        ])
        .derived(vec![Derived::new("score", "Score", Expr::var("missing"))])
        .categories(vec![
            Category::new("one", "One", 1, Severity::Low),
            Category::new("one", "One", 1, Severity::Low),
        ])
        .scale(&["one"])
        .rules(vec![
            Rule::new("r1", when::eq("kind", "z"), "one"),
            Rule::new("r2", when::band("score", "nope"), "two"),
            Rule::adjust("r3", when::always(), 0, "one", "one"),
        ]);

    let errors = check_scheme(&scheme);
    let has = |pred: &dyn Fn(&SchemeError) -> bool| errors.iter().any(pred);

    assert!(has(&|e| matches!(e, SchemeError::DuplicateKey { key, .. } if key == "kind")));
    assert!(has(&|e| matches!(e, SchemeError::DuplicateCategory { code, .. } if code == "one")));
    assert!(has(&|e| matches!(e, SchemeError::DependencyOrder { field, .. } if field == "detail")));
    assert!(has(&|e| matches!(e, SchemeError::ValueOutsideDomain { key, .. } if key == "kind")));
    assert!(has(&|e| matches!(e, SchemeError::ValueOutsideDomain { key, .. } if key == "r1")));
    assert!(has(&|e| matches!(e, SchemeError::UnknownReference { reference, .. } if reference == "missing")));
    assert!(has(&|e| matches!(e, SchemeError::UnknownBand { band, .. } if band == "nope")));
    assert!(has(&|e| matches!(e, SchemeError::UnknownCategory { code, .. } if code == "two")));
    assert!(has(&|e| matches!(e, SchemeError::InvalidAdjustment { rule, .. } if rule == "r3")));
}
