//! Static catalog — the closed sets of interests and levels plus the role roadmaps.
//!
//! Everything here is a process-wide constant. Membership in the closed sets is
//! expressed as enums so the composer can match exhaustively.

pub mod handlers;
pub mod roadmaps;

use serde::Serialize;

pub use roadmaps::{find_roadmap, RoleNotFound, ROLE_ROADMAPS};

/// Career track a student can pick. Closed set of five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Interest {
    #[serde(rename = "Artificial Intelligence")]
    ArtificialIntelligence,
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "Cloud & DevOps")]
    CloudDevOps,
    #[serde(rename = "Cybersecurity")]
    Cybersecurity,
}

impl Interest {
    pub const ALL: [Interest; 5] = [
        Interest::ArtificialIntelligence,
        Interest::DataScience,
        Interest::WebDevelopment,
        Interest::CloudDevOps,
        Interest::Cybersecurity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Interest::ArtificialIntelligence => "Artificial Intelligence",
            Interest::DataScience => "Data Science",
            Interest::WebDevelopment => "Web Development",
            Interest::CloudDevOps => "Cloud & DevOps",
            Interest::Cybersecurity => "Cybersecurity",
        }
    }

    /// Exact, case-sensitive match against the labels.
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.as_str() == label)
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|i| i.as_str()).collect()
    }
}

/// Skill level. Closed set of three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == label)
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|l| l.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interest_labels_in_order() {
        assert_eq!(
            Interest::labels(),
            vec![
                "Artificial Intelligence",
                "Data Science",
                "Web Development",
                "Cloud & DevOps",
                "Cybersecurity",
            ]
        );
    }

    #[test]
    fn test_level_labels_in_order() {
        assert_eq!(Level::labels(), vec!["Beginner", "Intermediate", "Advanced"]);
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(Interest::parse("Data Science"), Some(Interest::DataScience));
        assert_eq!(Interest::parse("data science"), None);
        assert_eq!(Interest::parse("Astrology"), None);
        assert_eq!(Level::parse("Advanced"), Some(Level::Advanced));
        assert_eq!(Level::parse("advanced"), None);
        assert_eq!(Level::parse(""), None);
    }

    #[test]
    fn test_serialized_label_matches_as_str() {
        for interest in Interest::ALL {
            assert_eq!(
                serde_json::to_value(interest).unwrap(),
                serde_json::Value::String(interest.as_str().to_string())
            );
        }
        for level in Level::ALL {
            assert_eq!(
                serde_json::to_value(level).unwrap(),
                serde_json::Value::String(level.as_str().to_string())
            );
        }
    }
}
