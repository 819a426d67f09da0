use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// How media creation reacts when linking one of the requested tags fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaggingPolicy {
    /// Tags are non-essential metadata: a failed link is logged, the tag is
    /// left out of the result and creation carries on.
    #[default]
    BestEffort,
    /// The first failed link stops creation before the content upload.
    Strict,
}

impl FromStr for TaggingPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "best-effort" | "best_effort" => Ok(TaggingPolicy::BestEffort),
            "strict" => Ok(TaggingPolicy::Strict),
            _ => Err(anyhow::anyhow!("Invalid tagging policy: {}", s)),
        }
    }
}

impl Display for TaggingPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            TaggingPolicy::BestEffort => write!(f, "best-effort"),
            TaggingPolicy::Strict => write!(f, "strict"),
        }
    }
}
