use serde::{Deserialize, Serialize};

/// A point on the complex plane, double precision.
///
/// The real part maps to the horizontal pixel axis and the imaginary part
/// to the vertical pixel axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComplexPoint {
    pub re: f64,
    pub im: f64,
}

impl ComplexPoint {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_components() {
        let p = ComplexPoint::new(-0.5, 0.25);
        assert_eq!(p.re, -0.5);
        assert_eq!(p.im, 0.25);
    }

    #[test]
    fn serialization_roundtrip() {
        let original = ComplexPoint::new(-2.0, 1.5);
        let json = serde_json::to_string(&original).unwrap();
        let restored: ComplexPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }
}
