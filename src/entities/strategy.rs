use std::fmt;

use serde::{Deserialize, Serialize};

/// Billing model of a service type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricingStrategy {
    PointToPoint,
    Hourly,
    Flat,
}

impl PricingStrategy {
    #[cfg(test)]
    pub const ALL: [PricingStrategy; 3] = [Self::PointToPoint, Self::Hourly, Self::Flat];

    pub fn name(&self) -> &'static str {
        match self {
            Self::PointToPoint => "POINT_TO_POINT",
            Self::Hourly => "HOURLY",
            Self::Flat => "FLAT",
        }
    }
}

impl fmt::Display for PricingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
