use std::fmt;

/// Kind of a publish set as reported by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishSetType {
    /// One shared URL for the whole configuration.
    SingleUrl,
    /// One URL per VM.
    MultipleUrl,
    /// Any type this tool does not act on.
    Other(String),
}

impl PublishSetType {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "single_url" => PublishSetType::SingleUrl,
            "multiple_url" => PublishSetType::MultipleUrl,
            other => PublishSetType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PublishSetType::SingleUrl => "single_url",
            PublishSetType::MultipleUrl => "multiple_url",
            PublishSetType::Other(raw) => raw,
        }
    }
}

impl fmt::Display for PublishSetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Projection of one `publish_sets` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishSetRecord {
    pub name: String,
    pub publish_set_type: PublishSetType,
    /// Present only for `single_url` sets.
    pub desktops_url: Option<String>,
}

impl PublishSetRecord {
    pub fn new(
        name: impl Into<String>,
        publish_set_type: PublishSetType,
        desktops_url: Option<String>,
    ) -> Self {
        let desktops_url = match publish_set_type {
            PublishSetType::SingleUrl => desktops_url,
            _ => None,
        };
        Self { name: name.into(), publish_set_type, desktops_url }
    }
}
