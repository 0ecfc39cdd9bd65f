use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationType {
    Video,
    Text,
    Quote,
    Photo,
    Link,
}

impl PublicationType {
    pub const ALL: [PublicationType; 5] = [
        Self::Video,
        Self::Text,
        Self::Quote,
        Self::Photo,
        Self::Link,
    ];

    pub fn value(&self) -> &'static str {
        match *self {
            Self::Video => "video",
            Self::Text => "text",
            Self::Quote => "quote",
            Self::Photo => "photo",
            Self::Link => "link",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPublicationType(pub String);

impl fmt::Display for UnknownPublicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown publication type `{}`", self.0)
    }
}

impl FromStr for PublicationType {
    type Err = UnknownPublicationType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|publication_type| publication_type.value() == s)
            .ok_or_else(|| UnknownPublicationType(s.to_string()))
    }
}
