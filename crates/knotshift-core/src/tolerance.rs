/// Distance tolerance for matching picked locations against geometry.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Linear tolerance for distance comparisons (in model units)
    #[serde(default = "Tolerance::default_linear")]
    pub linear: f64,
}

impl Tolerance {
    /// Control point picks from interactive tools snap to about a micro-unit.
    pub const POINT_MATCH_LINEAR: f64 = 1e-6;

    pub fn point_match() -> Self {
        Self {
            linear: Self::POINT_MATCH_LINEAR,
        }
    }

    /// Check if a distance is within linear tolerance
    pub fn contains(self, distance: f64) -> bool {
        distance < self.linear
    }

    fn default_linear() -> f64 {
        Self::POINT_MATCH_LINEAR
    }
}
