//! Triangular membership functions.

use serde::Serialize;

use crate::error::FuzzyError;

/// Triangular membership function defined by control points `a <= b <= c`.
///
/// Degree is 0 outside `[a, c]`, 1 at `b`, and linear on both flanks.
/// Degenerate shoulders (`a == b` or `b == c`) evaluate to full membership at
/// the shared point, so a term like (0, 0, 5) is fully on at the lower end of
/// its universe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Triangular {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangular {
    /// Build a triangular function, rejecting non-finite or misordered points.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, FuzzyError> {
        let finite = a.is_finite() && b.is_finite() && c.is_finite();
        if !finite || a > b || b > c {
            return Err(FuzzyError::InvalidMembership { a, b, c });
        }
        Ok(Self { a, b, c })
    }

    /// Membership degree of `x`, in `[0, 1]`.
    pub fn degree(&self, x: f64) -> f64 {
        if x < self.a || x > self.c {
            0.0
        } else if x == self.b {
            1.0
        } else if x < self.b {
            (x - self.a) / (self.b - self.a)
        } else {
            (self.c - x) / (self.c - self.b)
        }
    }

    /// The control points `(a, b, c)`.
    pub fn points(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_symmetric_triangle() {
        let mf = Triangular::new(0.0, 5.0, 10.0).unwrap();

        assert_eq!(mf.degree(-1.0), 0.0);
        assert_eq!(mf.degree(0.0), 0.0);
        assert_eq!(mf.degree(2.5), 0.5);
        assert_eq!(mf.degree(5.0), 1.0);
        assert_eq!(mf.degree(7.5), 0.5);
        assert_eq!(mf.degree(10.0), 0.0);
        assert_eq!(mf.degree(11.0), 0.0);
    }

    #[test]
    fn test_degenerate_left_shoulder() {
        let mf = Triangular::new(0.0, 0.0, 5.0).unwrap();

        assert_eq!(mf.degree(0.0), 1.0);
        assert_eq!(mf.degree(2.5), 0.5);
        assert_eq!(mf.degree(5.0), 0.0);
        assert_eq!(mf.degree(-0.1), 0.0);
    }

    #[test]
    fn test_degenerate_right_shoulder() {
        let mf = Triangular::new(5.0, 10.0, 10.0).unwrap();

        assert_eq!(mf.degree(5.0), 0.0);
        assert_eq!(mf.degree(7.5), 0.5);
        assert_eq!(mf.degree(10.0), 1.0);
        assert_eq!(mf.degree(10.1), 0.0);
    }

    #[test]
    fn test_singleton() {
        let mf = Triangular::new(3.0, 3.0, 3.0).unwrap();

        assert_eq!(mf.degree(3.0), 1.0);
        assert_eq!(mf.degree(2.9), 0.0);
        assert_eq!(mf.degree(3.1), 0.0);
    }

    #[test]
    fn test_rejects_misordered_points() {
        assert!(matches!(
            Triangular::new(5.0, 0.0, 10.0),
            Err(FuzzyError::InvalidMembership { .. })
        ));
        assert!(matches!(
            Triangular::new(0.0, 10.0, 5.0),
            Err(FuzzyError::InvalidMembership { .. })
        ));
        assert!(matches!(
            Triangular::new(0.0, f64::NAN, 5.0),
            Err(FuzzyError::InvalidMembership { .. })
        ));
    }
}
