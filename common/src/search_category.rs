//! Closed set of category identifiers shared by catalog data and filter panels.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchCategory {
    Grade,
    Situation,
    Facility,
    Type,
    Style,
    Frequency,
    Exam,
    Location,
    Period,
    Trigger,
    Support,
}

impl SearchCategory {
    pub const ALL: [SearchCategory; 11] = [
        Self::Grade,
        Self::Situation,
        Self::Facility,
        Self::Type,
        Self::Style,
        Self::Frequency,
        Self::Exam,
        Self::Location,
        Self::Period,
        Self::Trigger,
        Self::Support,
    ];

    /// Key used in catalog JSON `searchTags` objects.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Grade => "grade",
            Self::Situation => "situation",
            Self::Facility => "facility",
            Self::Type => "type",
            Self::Style => "style",
            Self::Frequency => "frequency",
            Self::Exam => "exam",
            Self::Location => "location",
            Self::Period => "period",
            Self::Trigger => "trigger",
            Self::Support => "support",
        }
    }
}

impl Display for SearchCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for SearchCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_round_trips_through_from_str() {
        for category in SearchCategory::ALL {
            assert_eq!(category.key().parse::<SearchCategory>(), Ok(category));
        }
        assert!("colour".parse::<SearchCategory>().is_err());
    }

    #[test]
    fn unknown_category_names_the_key() {
        let err = "colour".parse::<SearchCategory>().unwrap_err();
        assert_eq!(err, UnknownCategory("colour".to_string()));
        assert_eq!(err.to_string(), "unknown search category: colour");
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn serde_key_matches_catalog_key() {
        let json = serde_json::to_string(&SearchCategory::Frequency).unwrap();
        assert_eq!(json, "\"frequency\"");
    }
}
