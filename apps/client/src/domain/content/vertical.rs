use super::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Content category. Every vertical shares the same reaction pattern but
/// talks to its own endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vertical {
    Video,
    PicTour,
    Qafi,
    MondoMarket,
}

impl Vertical {
    pub const ALL: [Vertical; 4] = [
        Vertical::Video,
        Vertical::PicTour,
        Vertical::Qafi,
        Vertical::MondoMarket,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Vertical::Video => "video",
            Vertical::PicTour => "pic_tour",
            Vertical::Qafi => "qafi",
            Vertical::MondoMarket => "mondo_market",
        }
    }
}

impl fmt::Display for Vertical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vertical {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "video" | "videomania" | "video_mania" => Ok(Vertical::Video),
            "pic_tour" | "pictour" | "pictours" => Ok(Vertical::PicTour),
            "qafi" => Ok(Vertical::Qafi),
            "mondo_market" | "mondomarket" | "market" => Ok(Vertical::MondoMarket),
            _ => Err(DomainError::ValidationError(format!("Unknown vertical: {s}"))),
        }
    }
}
