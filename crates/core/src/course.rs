//! Course categories and equipment tags.
//!
//! Both are stored as text columns. [`CourseType`] keeps an explicit
//! [`CourseType::Unrecognized`] arm so that rows written by other tools with
//! a category this crate does not know still load, and are refused by the
//! registration rules instead of failing the whole query. [`Support`] is a
//! closed set, enforced by a CHECK constraint on the column.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Database / wire value for [`CourseType::Individual`].
pub const COURSE_TYPE_INDIVIDUAL: &str = "INDIVIDUAL";
/// Database / wire value for [`CourseType::CollectiveChildren`].
pub const COURSE_TYPE_COLLECTIVE_CHILDREN: &str = "COLLECTIVE_CHILDREN";
/// Database / wire value for [`CourseType::CollectiveAdult`].
pub const COURSE_TYPE_COLLECTIVE_ADULT: &str = "COLLECTIVE_ADULT";

/// Category of a course, which decides the admission rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CourseType {
    /// One-to-one lesson. No age or capacity limit.
    Individual,
    /// Group lesson for skiers under 16.
    CollectiveChildren,
    /// Group lesson for skiers aged 16 and over.
    CollectiveAdult,
    /// Any stored value outside the known set. Holds the raw value.
    Unrecognized(String),
}

impl CourseType {
    /// The text stored in `courses.type_course`.
    pub fn as_str(&self) -> &str {
        match self {
            CourseType::Individual => COURSE_TYPE_INDIVIDUAL,
            CourseType::CollectiveChildren => COURSE_TYPE_COLLECTIVE_CHILDREN,
            CourseType::CollectiveAdult => COURSE_TYPE_COLLECTIVE_ADULT,
            CourseType::Unrecognized(raw) => raw,
        }
    }

    /// Whether this is one of the group categories subject to capacity.
    pub fn is_collective(&self) -> bool {
        matches!(
            self,
            CourseType::CollectiveChildren | CourseType::CollectiveAdult
        )
    }
}

impl From<String> for CourseType {
    fn from(value: String) -> Self {
        match value.as_str() {
            COURSE_TYPE_INDIVIDUAL => CourseType::Individual,
            COURSE_TYPE_COLLECTIVE_CHILDREN => CourseType::CollectiveChildren,
            COURSE_TYPE_COLLECTIVE_ADULT => CourseType::CollectiveAdult,
            _ => CourseType::Unrecognized(value),
        }
    }
}

impl From<CourseType> for String {
    fn from(value: CourseType) -> Self {
        match value {
            CourseType::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Equipment a course is taught on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Support {
    Ski,
    Snowboard,
}

impl Support {
    /// The text stored in `courses.support`.
    pub fn as_str(self) -> &'static str {
        match self {
            Support::Ski => "SKI",
            Support::Snowboard => "SNOWBOARD",
        }
    }
}

/// Returned when a stored support value is not `SKI` or `SNOWBOARD`.
#[derive(Debug, thiserror::Error)]
#[error("Unknown support value: {0}")]
pub struct UnknownSupport(pub String);

impl TryFrom<String> for Support {
    type Error = UnknownSupport;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "SKI" => Ok(Support::Ski),
            "SNOWBOARD" => Ok(Support::Snowboard),
            _ => Err(UnknownSupport(value)),
        }
    }
}

impl fmt::Display for Support {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
