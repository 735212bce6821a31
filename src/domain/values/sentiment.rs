use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Lenient mapping for model output: anything that is not recognizably
    /// positive or negative is neutral. Never fails.
    pub fn from_text(s: &str) -> Self {
        let t = s.to_lowercase();
        if t.contains("positive") {
            Sentiment::Positive
        } else if t.contains("negative") {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Badge color used by both renderers.
    pub fn color(&self) -> &'static str {
        match self {
            Sentiment::Positive => "#26a69a",
            Sentiment::Negative => "#ef5350",
            Sentiment::Neutral => "#787b86",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Negative => write!(f, "Negative"),
            Sentiment::Neutral => write!(f, "Neutral"),
        }
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "negative" => Ok(Sentiment::Negative),
            "neutral" => Ok(Sentiment::Neutral),
            _ => Err(format!("Unknown sentiment: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_is_lenient() {
        assert_eq!(Sentiment::from_text("Positive"), Sentiment::Positive);
        assert_eq!(Sentiment::from_text("strongly negative"), Sentiment::Negative);
        assert_eq!(Sentiment::from_text("mixed"), Sentiment::Neutral);
        assert_eq!(Sentiment::from_text(""), Sentiment::Neutral);
    }

    #[test]
    fn test_display_roundtrip() {
        for s in [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral] {
            assert_eq!(s.to_string().parse::<Sentiment>().unwrap(), s);
        }
    }
}
