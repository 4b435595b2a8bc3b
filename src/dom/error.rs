use std::fmt;

#[derive(Debug)]
pub enum DomError {
    /// Fixture file could not be read
    FixtureRead { path: String, source: std::io::Error },

    /// Fixture JSON failed to parse
    FixtureParse { path: String, source: serde_json::Error },

    /// Fixture parsed but its tree is unusable (e.g. empty dom)
    FixtureShape(String),

    /// An element lookup came back empty
    ElementNotFound { wanted: String },
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomError::FixtureRead { path, source } => {
                write!(f, "Failed to read fixture '{}': {}", path, source)
            }
            DomError::FixtureParse { path, source } => {
                write!(f, "Fixture '{}' is not valid JSON: {}", path, source)
            }
            DomError::FixtureShape(msg) => {
                write!(f, "Unusable fixture: {}", msg)
            }
            DomError::ElementNotFound { wanted } => {
                write!(f, "No element matching {}", wanted)
            }
        }
    }
}

impl std::error::Error for DomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DomError::FixtureRead { source, .. } => Some(source),
            DomError::FixtureParse { source, .. } => Some(source),
            _ => None,
        }
    }
}
