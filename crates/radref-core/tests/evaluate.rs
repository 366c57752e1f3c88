use radref_core::error::EvaluationError;
use radref_core::evaluate;
use radref_core::evaluate::step_along;
use radref_core::models::rule::when;
use radref_core::models::{
    AnswerSet, Band, Category, Derived, Expr, Field, Interval, Outcome, Rule, Scheme, Severity,
};

fn grades() -> Vec<Category> {
    (1..=5)
        .map(|n| {
            let code = format!("G{n}");
            Category::new(&code, &format!("Grade {n}"), n, Severity::Low)
        })
        .collect()
}

fn graded() -> Scheme {
    Scheme::new("graded", "Graded")
        .fields(vec![
            Field::integer("grade", "Grade", 1.0, 5.0),
            Field::choice(
                "modifier",
                "Modifier",
                &[("none", "none"), ("up", "up"), ("down", "down")],
            )
            .default_value("none"),
        ])
        .categories(grades())
        .scale(&["G1", "G2", "G3", "G4", "G5"])
        .rules(vec![
            Rule::adjust("step-down", when::eq("modifier", "down"), -1, "G1", "G4"),
            Rule::adjust("step-up", when::eq("modifier", "up"), 1, "G1", "G4"),
            Rule::new("g5", when::eq("grade", 5), "G5"),
            Rule::new("g4", when::eq("grade", 4), "G4"),
            Rule::new("g3", when::eq("grade", 3), "G3"),
            Rule::new("g2", when::eq("grade", 2), "G2"),
            Rule::new("g1", when::eq("grade", 1), "G1"),
        ])
}

fn code_for(scheme: &Scheme, answers: AnswerSet) -> Option<String> {
    evaluate(scheme, &answers)
        .unwrap()
        .outcome
        .code()
        .map(str::to_string)
}

#[test]
fn first_matching_rule_wins() {
    let scheme = Scheme::new("overlap", "Overlap")
        .fields(vec![Field::numeric("size", "Size", Interval::ge(0.0))])
        .categories(vec![
            Category::new("big", "Big", 2, Severity::High),
            Category::new("any", "Any", 1, Severity::Low),
        ])
        .rules(vec![
            Rule::new("big", when::ge("size", 10.0), "big"),
            Rule::new("fallback", when::always(), "any"),
        ]);

    // Both rules hold for 12; the earlier one must win.
    let result = evaluate(&scheme, &AnswerSet::new().with("size", 12)).unwrap();
    assert_eq!(result.outcome.code(), Some("big"));
    assert_eq!(result.outcome.rule(), Some("big"));

    let result = evaluate(&scheme, &AnswerSet::new().with("size", 3)).unwrap();
    assert_eq!(result.outcome.rule(), Some("fallback"));
}

#[test]
fn evaluation_is_deterministic() {
    let scheme = graded();
    let answers = AnswerSet::new().with("grade", 3).with("modifier", "up");
    let first = evaluate(&scheme, &answers).unwrap();
    for _ in 0..10 {
        assert_eq!(evaluate(&scheme, &answers).unwrap(), first);
    }
}

#[test]
fn incomplete_answers_are_rejected() {
    let err = evaluate(&graded(), &AnswerSet::new()).unwrap_err();
    let EvaluationError::IncompleteAnswerSet { scheme, missing, .. } = err;
    assert_eq!(scheme, "graded");
    assert_eq!(missing, ["grade"]);

    let err = evaluate(&graded(), &AnswerSet::new().with("grade", 9)).unwrap_err();
    let EvaluationError::IncompleteAnswerSet { invalid, .. } = err;
    assert_eq!(invalid, ["grade"]);
}

#[test]
fn modifier_moves_one_step() {
    let scheme = graded();
    let result = evaluate(&scheme, &AnswerSet::new().with("grade", 3).with("modifier", "down")).unwrap();
    assert_eq!(result.outcome.code(), Some("G2"));
    let modifier = result.modifier.unwrap();
    assert_eq!((modifier.from.as_str(), modifier.to.as_str()), ("G3", "G2"));
    assert_eq!(modifier.rule, "step-down");
    assert_eq!(modifier.delta, -1);
}

#[test]
fn upgrade_never_exceeds_ceiling() {
    let scheme = graded();
    let up = |grade: i32| code_for(&scheme, AnswerSet::new().with("grade", grade).with("modifier", "up"));
    assert_eq!(up(3).as_deref(), Some("G4"));
    // At the ceiling: unchanged.
    assert_eq!(up(4).as_deref(), Some("G4"));
    // Above the ceiling: an upgrade never lowers the category.
    assert_eq!(up(5).as_deref(), Some("G5"));
}

#[test]
fn downgrade_never_passes_floor() {
    let scheme = graded();
    let down = |grade: i32| code_for(&scheme, AnswerSet::new().with("grade", grade).with("modifier", "down"));
    assert_eq!(down(1).as_deref(), Some("G1"));
    assert_eq!(down(2).as_deref(), Some("G1"));
    assert_eq!(down(5).as_deref(), Some("G4"));
}

#[test]
fn clamping_holds_for_every_scale_position() {
    let scale: Vec<String> = ["G1", "G2", "G3", "G4", "G5"].iter().map(|s| s.to_string()).collect();
    for (i, base) in scale.iter().enumerate() {
        let up = step_along(&scale, base, 1, "G1", "G4");
        let down = step_along(&scale, base, -1, "G1", "G4");
        let pos = |c: &str| scale.iter().position(|s| s == c).unwrap();
        assert!(pos(up) >= i, "upgrade lowered {base}");
        assert!(pos(up) <= i.max(3));
        assert!(pos(down) <= i, "downgrade raised {base}");
    }
    assert_eq!(step_along(&scale, "G4", 1, "G1", "G4"), "G4");
    assert_eq!(step_along(&scale, "G1", -1, "G1", "G4"), "G1");
    assert_eq!(step_along(&scale, "X", 1, "G1", "G4"), "X");
}

#[test]
fn gap_in_table_is_no_match() {
    let scheme = Scheme::new("gappy", "Gappy")
        .fields(vec![Field::integer("n", "N", 0.0, 10.0)])
        .categories(vec![Category::new("low", "Low", 1, Severity::Low)])
        .rules(vec![Rule::new("low", when::lt("n", 5.0), "low")]);
    let result = evaluate(&scheme, &AnswerSet::new().with("n", 7)).unwrap();
    assert_eq!(result.outcome, Outcome::NoMatch);
    assert!(result.modifier.is_none());
}

fn ratio() -> Scheme {
    Scheme::new("ratio", "Ratio")
        .fields(vec![
            Field::numeric("a", "A", Interval::all()),
            Field::numeric("b", "B", Interval::all()),
        ])
        .derived(vec![
            Derived::new("q", "Quotient", Expr::div(Expr::var("a"), Expr::var("b")))
                .bands(vec![
                    Band::new("neg", "< 0", Interval::lt(0.0)),
                    Band::new("pos", ">= 0", Interval::ge(0.0)),
                ]),
        ])
        .categories(vec![
            Category::new("neg", "Negative", 1, Severity::Low),
            Category::new("pos", "Positive", 2, Severity::Low),
            Category::new("other", "Other", 0, Severity::Indeterminate),
        ])
        .rules(vec![
            Rule::new("neg", when::band("q", "neg"), "neg"),
            // Would match anything if undefined values were not skipped.
            Rule::new("not-neg", when::not(when::band("q", "neg")), "pos"),
        ])
}

#[test]
fn derived_values_feed_rules() {
    let result = evaluate(&ratio(), &AnswerSet::new().with("a", -3).with("b", 2)).unwrap();
    assert_eq!(result.outcome.code(), Some("neg"));
    assert_eq!(result.derived["q"], Some(-1.5));
}

#[test]
fn division_by_zero_skips_rules_reading_it() {
    let result = evaluate(&ratio(), &AnswerSet::new().with("a", 1).with("b", 0)).unwrap();
    assert_eq!(result.derived["q"], None);
    assert_eq!(result.outcome, Outcome::NoMatch);
}

#[test]
fn count_of_satisfied_conditions() {
    let scheme = Scheme::new("count", "Count")
        .fields(vec![
            Field::yes_no("a", "A"),
            Field::yes_no("b", "B"),
            Field::yes_no("c", "C"),
        ])
        .categories(vec![
            Category::new("hi", "High", 2, Severity::High),
            Category::new("lo", "Low", 1, Severity::Low),
        ])
        .rules(vec![
            Rule::new(
                "two-of-three",
                when::count_at_least(2, [when::yes("a"), when::yes("b"), when::yes("c")]),
                "hi",
            ),
            Rule::new("otherwise", when::always(), "lo"),
        ]);
    let answers = |a: &str, b: &str, c: &str| AnswerSet::new().with("a", a).with("b", b).with("c", c);
    assert_eq!(code_for(&scheme, answers("yes", "no", "yes")).as_deref(), Some("hi"));
    assert_eq!(code_for(&scheme, answers("no", "no", "yes")).as_deref(), Some("lo"));
}
