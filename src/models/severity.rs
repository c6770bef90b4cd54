//! US AQI severity scale.

use std::fmt;

/// Severity tiers of the US AQI, ordered from cleanest to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeverityTier {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl SeverityTier {
    /// Classifies an AQI value. Upper bounds are inclusive.
    pub fn from_aqi(aqi: u32) -> Self {
        match aqi {
            0..=50 => SeverityTier::Good,
            51..=100 => SeverityTier::Moderate,
            101..=150 => SeverityTier::UnhealthySensitive,
            151..=200 => SeverityTier::Unhealthy,
            201..=300 => SeverityTier::VeryUnhealthy,
            _ => SeverityTier::Hazardous,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            SeverityTier::Good => "🟢",
            SeverityTier::Moderate => "🟡",
            SeverityTier::UnhealthySensitive => "🟠",
            SeverityTier::Unhealthy => "🔴",
            SeverityTier::VeryUnhealthy => "🟣",
            SeverityTier::Hazardous => "🟤",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeverityTier::Good => "Good",
            SeverityTier::Moderate => "Moderate",
            SeverityTier::UnhealthySensitive => "Unhealthy for Sensitive Groups",
            SeverityTier::Unhealthy => "Unhealthy",
            SeverityTier::VeryUnhealthy => "Very Unhealthy",
            SeverityTier::Hazardous => "Hazardous",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
