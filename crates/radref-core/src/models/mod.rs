pub mod answer;
pub mod category;
pub mod evaluation;
pub mod field;
pub mod formula;
pub mod interval;
pub mod rule;
pub mod scheme;
pub mod value;

pub use answer::AnswerSet;
pub use category::{Category, Severity};
pub use evaluation::{AppliedModifier, Assessment, Evaluation, Outcome, Validation};
pub use field::{Band, Choice, Dependency, Field, FieldDomain, Trigger};
pub use formula::{Derived, Expr};
pub use interval::{Bound, Interval};
pub use rule::{Predicate, Rule, RuleOutcome};
pub use scheme::Scheme;
pub use value::Value;
