use serde::{Deserialize, Serialize};
use std::fmt;

/// Memory type tag. Open set: unknown names are carried as [`MemoryType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MemoryType {
    Solution,
    Pattern,
    Principle,
    Debug,
    Other(String),
}

impl MemoryType {
    /// The built-in types with documented decay rates.
    pub const BUILTIN: [MemoryType; 4] = [
        Self::Solution,
        Self::Pattern,
        Self::Principle,
        Self::Debug,
    ];

    /// Canonical lowercase name.
    pub fn name(&self) -> &str {
        match self {
            Self::Solution => "solution",
            Self::Pattern => "pattern",
            Self::Principle => "principle",
            Self::Debug => "debug",
            Self::Other(name) => name,
        }
    }

    /// Parse a type name. Matching is case-insensitive; anything unknown
    /// becomes `Other` with the lowercased name.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "solution" => Self::Solution,
            "pattern" => Self::Pattern,
            "principle" => Self::Principle,
            "debug" => Self::Debug,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for MemoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for MemoryType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for MemoryType {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<MemoryType> for String {
    fn from(value: MemoryType) -> Self {
        value.name().to_string()
    }
}
