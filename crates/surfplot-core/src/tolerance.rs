/// Tolerances for geometric comparisons.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Linear tolerance for distance and parameter-span comparisons
    pub linear: f64,
    /// Angular tolerance (in radians)
    pub angular: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-9;
    pub const DEFAULT_ANGULAR: f64 = 1e-10;

    pub fn new(linear: f64, angular: f64) -> Self {
        Self { linear, angular }
    }

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
            angular: Self::DEFAULT_ANGULAR,
        }
    }

    /// Check if two values are equal within linear tolerance
    pub fn linear_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.linear
    }

    /// Check if a value is zero within linear tolerance
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() < self.linear
    }

    /// Check that the interval `[lo, hi]` has positive length beyond tolerance.
    pub fn is_valid_span(self, lo: f64, hi: f64) -> bool {
        hi - lo > self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_eq() {
        let tol = Tolerance::default_precision();
        assert!(tol.linear_eq(1.0, 1.0 + 1e-12));
        assert!(!tol.linear_eq(1.0, 1.001));
    }

    #[test]
    fn test_valid_span() {
        let tol = Tolerance::default_precision();
        assert!(tol.is_valid_span(0.0, 1.0));
        assert!(!tol.is_valid_span(1.0, 1.0));
        assert!(!tol.is_valid_span(2.0, 1.0));
    }
}
