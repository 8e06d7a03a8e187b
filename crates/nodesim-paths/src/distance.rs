//! Distance metrics between coordinates, used to build heuristics.

use std::fmt;
use std::str::FromStr;

use nodesim_core::Point;

/// `|dx| + |dy|`.
#[inline]
pub fn manhattan(a: Point, b: Point) -> f64 {
    let d = a - b;
    f64::from(d.x).abs() + f64::from(d.y).abs()
}

/// `max(|dx|, |dy|)`.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> f64 {
    let d = a - b;
    f64::from(d.x).abs().max(f64::from(d.y).abs())
}

/// Straight-line distance.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let d = a - b;
    f64::from(d.x).hypot(f64::from(d.y))
}

/// A selectable distance metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Distance {
    #[default]
    Manhattan,
    Chebyshev,
    Euclidean,
}

impl Distance {
    pub fn between(self, a: Point, b: Point) -> f64 {
        match self {
            Distance::Manhattan => manhattan(a, b),
            Distance::Chebyshev => chebyshev(a, b),
            Distance::Euclidean => euclidean(a, b),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Distance::Manhattan => "manhattan",
            Distance::Chebyshev => "chebyshev",
            Distance::Euclidean => "euclidean",
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised metric name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown distance metric {0:?} (expected manhattan, chebyshev or euclidean)")]
pub struct UnknownDistance(pub String);

impl FromStr for Distance {
    type Err = UnknownDistance;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Distance::Manhattan),
            "chebyshev" => Ok(Distance::Chebyshev),
            "euclidean" => Ok(Distance::Euclidean),
            _ => Err(UnknownDistance(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics() {
        let a = Point::new(1, 1);
        let b = Point::new(4, -3);
        assert_eq!(manhattan(a, b), 7.0);
        assert_eq!(chebyshev(a, b), 4.0);
        assert_eq!(euclidean(a, b), 5.0);
        assert_eq!(Distance::Euclidean.between(b, a), 5.0);
        assert_eq!(manhattan(a, a), 0.0);
    }

    #[test]
    fn parse() {
        assert_eq!("Chebyshev".parse(), Ok(Distance::Chebyshev));
        assert_eq!(Distance::default().to_string(), "manhattan");
        assert!("taxicab".parse::<Distance>().is_err());
    }
}
