//! Domain enums for Hollytree.
//!
//! The remote post store persists the original Korean display labels, so all
//! enums serialize to those labels and parse them back exactly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Affiliation
// ---------------------------------------------------------------------------

/// A visitor's affiliation. Partitions the shared tree into independent rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Affiliation {
    #[serde(rename = "1학년")]
    FirstYear,
    #[serde(rename = "2학년")]
    SecondYear,
    #[serde(rename = "3학년")]
    ThirdYear,
    #[serde(rename = "전공심화")]
    AdvancedMajor,
    #[serde(rename = "교수님")]
    Professor,
}

impl Affiliation {
    /// All affiliations, in survey display order.
    pub const ALL: [Self; 5] = [
        Self::FirstYear,
        Self::SecondYear,
        Self::ThirdYear,
        Self::AdvancedMajor,
        Self::Professor,
    ];

    /// The rooms browsable via the tree view tabs. Professors place
    /// ornaments under their own affiliation but have no dedicated tab.
    pub const ROOM_TABS: [Self; 4] = [
        Self::FirstYear,
        Self::SecondYear,
        Self::ThirdYear,
        Self::AdvancedMajor,
    ];

    /// The display label, which is also the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstYear => "1학년",
            Self::SecondYear => "2학년",
            Self::ThirdYear => "3학년",
            Self::AdvancedMajor => "전공심화",
            Self::Professor => "교수님",
        }
    }

    /// Parse an exact display label. Returns `None` for anything else,
    /// including legacy rows with free-form affiliation text.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == label)
    }
}

impl fmt::Display for Affiliation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Affiliation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
            .ok_or_else(|| CoreError::Validation(format!("unknown affiliation: {s}")))
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Writing theme chosen in the survey. Determines the ornament color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    #[serde(rename = "올해의 추억")]
    YearMemory,
    #[serde(rename = "현재의 고민")]
    CurrentWorry,
    #[serde(rename = "미래를 위한 다짐")]
    FutureResolve,
}

impl Theme {
    /// All themes, in survey display order.
    pub const ALL: [Self; 3] = [Self::YearMemory, Self::CurrentWorry, Self::FutureResolve];

    /// The display label, which is also the wire representation
    /// (the store's `postType` field).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::YearMemory => "올해의 추억",
            Self::CurrentWorry => "현재의 고민",
            Self::FutureResolve => "미래를 위한 다짐",
        }
    }

    /// The ornament palette color derived from the theme.
    #[must_use]
    pub const fn color(self) -> OrnamentColor {
        match self {
            Self::YearMemory => OrnamentColor::Yellow,
            Self::CurrentWorry => OrnamentColor::Red,
            Self::FutureResolve => OrnamentColor::Green,
        }
    }

    /// Parse an exact display label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == label)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| CoreError::Validation(format!("unknown theme: {s}")))
    }
}

// ---------------------------------------------------------------------------
// OrnamentColor
// ---------------------------------------------------------------------------

/// Palette key for the ornament catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrnamentColor {
    Yellow,
    Red,
    Green,
}

impl OrnamentColor {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Green => "green",
        }
    }
}

impl fmt::Display for OrnamentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Step
// ---------------------------------------------------------------------------

/// Position in the visit flow.
///
/// ```text
/// main → survey_common → survey_grade → animation → customize → tree
///                                                                ├→ ranking
///                                                                └→ comments
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    Main,
    SurveyCommon,
    SurveyGrade,
    Animation,
    Customize,
    Tree,
    Ranking,
    Comments,
}

impl Step {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::SurveyCommon => "survey_common",
            Self::SurveyGrade => "survey_grade",
            Self::Animation => "animation",
            Self::Customize => "customize",
            Self::Tree => "tree",
            Self::Ranking => "ranking",
            Self::Comments => "comments",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn affiliation_labels_round_trip() {
        for aff in Affiliation::ALL {
            assert_eq!(Affiliation::from_label(aff.as_str()), Some(aff));
        }
        assert_eq!(Affiliation::from_label("4학년"), None);
    }

    #[test]
    fn affiliation_serializes_to_wire_label() {
        let json = serde_json::to_string(&Affiliation::AdvancedMajor).unwrap();
        assert_eq!(json, "\"전공심화\"");
        let back: Affiliation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Affiliation::AdvancedMajor);
    }

    #[test]
    fn room_tabs_exclude_professor() {
        assert!(!Affiliation::ROOM_TABS.contains(&Affiliation::Professor));
        assert_eq!(Affiliation::ROOM_TABS.len(), 4);
    }

    #[test]
    fn theme_maps_to_palette_color() {
        assert_eq!(Theme::YearMemory.color(), OrnamentColor::Yellow);
        assert_eq!(Theme::CurrentWorry.color(), OrnamentColor::Red);
        assert_eq!(Theme::FutureResolve.color(), OrnamentColor::Green);
    }

    #[test]
    fn theme_parses_from_label() {
        let theme: Theme = "현재의 고민".parse().unwrap();
        assert_eq!(theme, Theme::CurrentWorry);
        assert!("겨울방학".parse::<Theme>().is_err());
    }
}
