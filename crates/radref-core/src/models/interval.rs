use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One end of an [`Interval`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Bound {
    pub value: f64,
    pub inclusive: bool,
}

impl Bound {
    pub fn inclusive(value: f64) -> Self {
        Self {
            value,
            inclusive: true,
        }
    }

    pub fn exclusive(value: f64) -> Self {
        Self {
            value,
            inclusive: false,
        }
    }
}

/// A numeric range on the real line. `None` ends are unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interval {
    pub lower: Option<Bound>,
    pub upper: Option<Bound>,
}

impl Interval {
    pub fn all() -> Self {
        Self::default()
    }

    /// `(-inf, x)`
    pub fn lt(x: f64) -> Self {
        Self {
            lower: None,
            upper: Some(Bound::exclusive(x)),
        }
    }

    /// `(-inf, x]`
    pub fn le(x: f64) -> Self {
        Self {
            lower: None,
            upper: Some(Bound::inclusive(x)),
        }
    }

    /// `(x, inf)`
    pub fn gt(x: f64) -> Self {
        Self {
            lower: Some(Bound::exclusive(x)),
            upper: None,
        }
    }

    /// `[x, inf)`
    pub fn ge(x: f64) -> Self {
        Self {
            lower: Some(Bound::inclusive(x)),
            upper: None,
        }
    }

    /// `[a, b]`
    pub fn closed(a: f64, b: f64) -> Self {
        Self {
            lower: Some(Bound::inclusive(a)),
            upper: Some(Bound::inclusive(b)),
        }
    }

    /// `[a, b)`
    pub fn closed_open(a: f64, b: f64) -> Self {
        Self {
            lower: Some(Bound::inclusive(a)),
            upper: Some(Bound::exclusive(b)),
        }
    }

    /// `(a, b]`
    pub fn open_closed(a: f64, b: f64) -> Self {
        Self {
            lower: Some(Bound::exclusive(a)),
            upper: Some(Bound::inclusive(b)),
        }
    }

    /// `(a, b)`
    pub fn open(a: f64, b: f64) -> Self {
        Self {
            lower: Some(Bound::exclusive(a)),
            upper: Some(Bound::exclusive(b)),
        }
    }

    pub fn contains(&self, x: f64) -> bool {
        if x.is_nan() {
            return false;
        }
        let above = match self.lower {
            None => true,
            Some(b) if b.inclusive => x >= b.value,
            Some(b) => x > b.value,
        };
        let below = match self.upper {
            None => true,
            Some(b) if b.inclusive => x <= b.value,
            Some(b) => x < b.value,
        };
        above && below
    }

    /// True when no real number lies inside the interval.
    pub fn is_empty(&self) -> bool {
        match (self.lower, self.upper) {
            (Some(lo), Some(hi)) => match lo.value.partial_cmp(&hi.value) {
                Some(Ordering::Less) => false,
                Some(Ordering::Equal) => !(lo.inclusive && hi.inclusive),
                _ => true,
            },
            _ => false,
        }
    }

    /// Intersection of two intervals (possibly empty).
    pub fn intersect(&self, other: &Interval) -> Interval {
        Interval {
            lower: tighter_lower(self.lower, other.lower),
            upper: tighter_upper(self.upper, other.upper),
        }
    }
}

/// Ordering of lower bounds: unbounded first, then by value, inclusive
/// before exclusive at the same value.
pub fn cmp_lower(a: Option<Bound>, b: Option<Bound>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a
            .value
            .total_cmp(&b.value)
            .then_with(|| b.inclusive.cmp(&a.inclusive)),
    }
}

/// Ordering of upper bounds: exclusive before inclusive at the same value,
/// unbounded last.
pub fn cmp_upper(a: Option<Bound>, b: Option<Bound>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a
            .value
            .total_cmp(&b.value)
            .then_with(|| a.inclusive.cmp(&b.inclusive)),
    }
}

fn tighter_lower(a: Option<Bound>, b: Option<Bound>) -> Option<Bound> {
    if cmp_lower(a, b) == Ordering::Less { b } else { a }
}

fn tighter_upper(a: Option<Bound>, b: Option<Bound>) -> Option<Bound> {
    if cmp_upper(a, b) == Ordering::Greater { b } else { a }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lower {
            None => write!(f, "(-inf")?,
            Some(b) => write!(f, "{}{}", if b.inclusive { '[' } else { '(' }, b.value)?,
        }
        match self.upper {
            None => write!(f, ", inf)"),
            Some(b) => write!(f, ", {}{}", b.value, if b.inclusive { ']' } else { ')' }),
        }
    }
}
