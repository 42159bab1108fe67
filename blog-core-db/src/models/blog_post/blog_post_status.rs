use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use blog_core_api::DomainError;

/// Lifecycle of a blog post
///
/// Each variant carries a key code (the stable identifier) and a display name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BlogPostStatus {
    #[default]
    Draft,
    Published,
}

impl BlogPostStatus {
    /// Every status, in key code order
    pub const ALL: [BlogPostStatus; 2] = [BlogPostStatus::Draft, BlogPostStatus::Published];

    pub fn all() -> impl Iterator<Item = BlogPostStatus> {
        Self::ALL.into_iter()
    }

    pub fn key_code(&self) -> &'static str {
        match self {
            BlogPostStatus::Draft => "DRAFT",
            BlogPostStatus::Published => "PUBLISHED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BlogPostStatus::Draft => "Draft",
            BlogPostStatus::Published => "Published",
        }
    }

    pub fn from_key_code(key_code: &str) -> Result<Self, DomainError> {
        Self::all()
            .find(|status| status.key_code() == key_code)
            .ok_or_else(|| DomainError::UnknownStatus {
                value: key_code.to_string(),
                description: "key code",
            })
    }

    pub fn from_display_name(display_name: &str) -> Result<Self, DomainError> {
        Self::all()
            .find(|status| status.display_name() == display_name)
            .ok_or_else(|| DomainError::UnknownStatus {
                value: display_name.to_string(),
                description: "display name",
            })
    }
}

impl std::fmt::Display for BlogPostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlogPostStatus::Draft => write!(f, "Draft"),
            BlogPostStatus::Published => write!(f, "Published"),
        }
    }
}

impl FromStr for BlogPostStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlogPostStatus::from_display_name(s)
    }
}

impl PartialOrd for BlogPostStatus {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BlogPostStatus {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key_code().cmp(other.key_code())
    }
}

impl Serialize for BlogPostStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.display_name())
    }
}

impl<'de> Deserialize<'de> for BlogPostStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value_str = String::deserialize(deserializer)?;
        BlogPostStatus::from_display_name(&value_str).map_err(serde::de::Error::custom)
    }
}
