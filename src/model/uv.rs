//! UV index classification.

/// Severity band for a UV index reading, following the WHO UV index scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UvLevel {
    /// UV index up to 2.
    Low,
    /// UV index above 2, up to 5.
    Moderate,
    /// UV index above 5, up to 7.
    High,
    /// UV index above 7, up to 10.
    VeryHigh,
    /// UV index above 10.
    Extreme,
}

impl UvLevel {
    /// Classify a raw UV index reading.
    pub fn from_index(uv_index: f64) -> Self {
        if uv_index <= 2.0 {
            UvLevel::Low
        } else if uv_index <= 5.0 {
            UvLevel::Moderate
        } else if uv_index <= 7.0 {
            UvLevel::High
        } else if uv_index <= 10.0 {
            UvLevel::VeryHigh
        } else {
            UvLevel::Extreme
        }
    }

    /// The description stored and served alongside the numeric index.
    pub fn label(&self) -> &'static str {
        match self {
            UvLevel::Low => "Low",
            UvLevel::Moderate => "Moderate",
            UvLevel::High => "High",
            UvLevel::VeryHigh => "Very High",
            UvLevel::Extreme => "Extreme",
        }
    }
}
