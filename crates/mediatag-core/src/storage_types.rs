use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Content store backend types
///
/// Defined in core because configuration selects it; the implementations live
/// in `mediatag-storage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentBackend {
    /// Ephemeral, process-local map
    #[default]
    Memory,
    /// One file per media in a directory
    Local,
}

impl FromStr for ContentBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(ContentBackend::Memory),
            "local" => Ok(ContentBackend::Local),
            _ => Err(anyhow::anyhow!("Invalid content backend: {}", s)),
        }
    }
}

impl Display for ContentBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ContentBackend::Memory => write!(f, "memory"),
            ContentBackend::Local => write!(f, "local"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backend() {
        assert_eq!("memory".parse::<ContentBackend>().unwrap(), ContentBackend::Memory);
        assert_eq!(" LOCAL ".parse::<ContentBackend>().unwrap(), ContentBackend::Local);
        assert!("s3".parse::<ContentBackend>().is_err());
        assert_eq!(ContentBackend::Local.to_string(), "local");
    }
}
