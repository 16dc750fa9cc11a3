//! Domain and query-side enums for Meridian.
//!
//! Domain enums (`Gender`) use `snake_case` serialization via
//! `#[serde(rename_all = "snake_case")]`. Query-side enums (`SortOrder`,
//! `NullsOrder`, `QueryMode`) mirror the wire convention used by the generated
//! input schemas: their serialized forms appear verbatim inside filter and
//! order-by payloads.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Gender
// ---------------------------------------------------------------------------

/// Gender recorded on a patient master record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// All serialized values, in declaration order.
    pub const VALUES: &'static [&'static str] = &["male", "female", "other"];

    /// Return the string representation used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SortOrder
// ---------------------------------------------------------------------------

/// Sort direction for order-by inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub const VALUES: &'static [&'static str] = &["asc", "desc"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// NullsOrder
// ---------------------------------------------------------------------------

/// Placement of SQL NULLs when ordering by a nullable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NullsOrder {
    First,
    Last,
}

impl NullsOrder {
    pub const VALUES: &'static [&'static str] = &["first", "last"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Last => "last",
        }
    }
}

impl fmt::Display for NullsOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// QueryMode
// ---------------------------------------------------------------------------

/// Case sensitivity of string comparisons in filter inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMode {
    Default,
    Insensitive,
}

impl QueryMode {
    pub const VALUES: &'static [&'static str] = &["default", "insensitive"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Insensitive => "insensitive",
        }
    }
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(gender_male, Gender, Gender::Male, "male");
    test_serde_roundtrip!(gender_other, Gender, Gender::Other, "other");

    test_serde_roundtrip!(sort_order_asc, SortOrder, SortOrder::Asc, "asc");
    test_serde_roundtrip!(sort_order_desc, SortOrder, SortOrder::Desc, "desc");

    test_serde_roundtrip!(nulls_first, NullsOrder, NullsOrder::First, "first");
    test_serde_roundtrip!(nulls_last, NullsOrder, NullsOrder::Last, "last");

    test_serde_roundtrip!(mode_default, QueryMode, QueryMode::Default, "default");
    test_serde_roundtrip!(
        mode_insensitive,
        QueryMode,
        QueryMode::Insensitive,
        "insensitive"
    );

    #[test]
    fn values_match_variants() {
        assert_eq!(Gender::VALUES.len(), 3);
        assert_eq!(SortOrder::VALUES, &["asc", "desc"]);
        assert_eq!(NullsOrder::VALUES, &["first", "last"]);
        assert_eq!(QueryMode::VALUES, &["default", "insensitive"]);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", Gender::Female), "female");
        assert_eq!(format!("{}", SortOrder::Desc), "desc");
        assert_eq!(format!("{}", NullsOrder::Last), "last");
        assert_eq!(format!("{}", QueryMode::Insensitive), "insensitive");
    }
}
