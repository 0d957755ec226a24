//! Planar distance between workplace and student coordinates.
//!
//! Coordinates are points on an abstract grid measured in kilometres, written
//! as `"x,y"` with optional parentheses and spaces, e.g. `"(3, 4)"`. No
//! geodesic projection is applied.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

/// A point on the planar grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Coordinate {
    /// Parses a coordinate string.
    ///
    /// Parentheses and spaces are stripped, then the remainder must split on
    /// commas into exactly two non-empty, finite numbers.
    ///
    /// # Examples
    ///
    /// ```
    /// use student_payout::calculation::Coordinate;
    ///
    /// assert_eq!(Coordinate::parse("(3, -4.5)"), Some(Coordinate { x: 3.0, y: -4.5 }));
    /// assert_eq!(Coordinate::parse("3"), None);
    /// assert_eq!(Coordinate::parse("(1,2,3)"), None);
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let cleaned: String = raw
            .chars()
            .filter(|c| !matches!(c, '(' | ')' | ' '))
            .collect();

        let mut parts = cleaned.split(',');
        let x = parse_component(parts.next()?)?;
        let y = parse_component(parts.next()?)?;
        if parts.next().is_some() {
            return None;
        }

        Some(Self { x, y })
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

fn parse_component(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Computes the distance in kilometres between two coordinate strings.
///
/// Returns `None` when either string does not hold a valid coordinate.
///
/// # Examples
///
/// ```
/// use student_payout::calculation::distance;
/// use rust_decimal::Decimal;
///
/// assert_eq!(distance("(0,0)", "(3,4)"), Some(Decimal::from(5)));
/// assert_eq!(distance("(0,0)", "nowhere"), None);
/// ```
pub fn distance(point_a: &str, point_b: &str) -> Option<Decimal> {
    let a = Coordinate::parse(point_a)?;
    let b = Coordinate::parse(point_b)?;
    Decimal::from_f64(a.distance_to(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_three_four_five_triangle() {
        assert_eq!(distance("(0,0)", "(3,4)"), Some(dec("5")));
    }

    #[test]
    fn test_distance_is_symmetric() {
        assert_eq!(distance("(1,1)", "(7,9)"), distance("(7,9)", "(1,1)"));
        assert_eq!(distance("(1,1)", "(7,9)"), Some(dec("10")));
    }

    #[test]
    fn test_parentheses_and_spaces_are_optional() {
        assert_eq!(distance("0,0", " ( 0 , 8 ) "), Some(dec("8")));
    }

    #[test]
    fn test_negative_and_fractional_components() {
        assert_eq!(distance("(-1.5,-2)", "(1.5,2)"), Some(dec("5")));
    }

    #[test]
    fn test_zero_components_are_valid() {
        assert_eq!(distance("(0,0)", "(0,0)"), Some(Decimal::ZERO));
    }

    #[test]
    fn test_missing_component_is_none() {
        assert_eq!(distance("(0,)", "(3,4)"), None);
        assert_eq!(distance("(,0)", "(3,4)"), None);
        assert_eq!(distance("(0)", "(3,4)"), None);
        assert_eq!(distance("", "(3,4)"), None);
    }

    #[test]
    fn test_non_numeric_component_is_none() {
        assert_eq!(distance("(a,b)", "(3,4)"), None);
        assert_eq!(distance("(0,0)", "(3,NaN)"), None);
        assert_eq!(distance("(0,0)", "(inf,4)"), None);
    }

    #[test]
    fn test_extra_component_is_none() {
        assert_eq!(distance("(0,0,0)", "(3,4)"), None);
    }

    #[test]
    fn test_irrational_distance() {
        let d = distance("(0,0)", "(1,1)").unwrap();
        assert_eq!(d.round_dp(6), dec("1.414214"));
    }

    #[test]
    fn test_coordinate_parse_strips_only_spaces_and_parentheses() {
        assert_eq!(Coordinate::parse("[1,2]"), None);
        assert_eq!(
            Coordinate::parse("(1 ,2)"),
            Some(Coordinate { x: 1.0, y: 2.0 })
        );
    }
}
