//! Parameter categories maintained by the builder.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use hydra_filter::{Error, Result};

/// The three parameter groupings maintained as independent ordered sequences.
///
/// Category order is fixed in the rendered string: filters first, then sort,
/// then pagination. Insertion order within a category is preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Generic filters: existence, search, range, and date parameters
    Filters,
    /// Sort directives
    Sort,
    /// Pagination directives
    Pagination,
}

impl Category {
    /// Returns the category name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Filters => "filters",
            Self::Sort => "sort",
            Self::Pagination => "pagination",
        }
    }

    /// Returns all categories in rendering order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Filters, Self::Sort, Self::Pagination]
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "filters" => Ok(Self::Filters),
            "sort" => Ok(Self::Sort),
            "pagination" => Ok(Self::Pagination),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trip() {
        for category in Category::all() {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), *category);
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = "extras".parse::<Category>().unwrap_err();
        assert_eq!(err, Error::UnknownCategory("extras".to_string()));
        assert_eq!(err.error_code(), "UNKNOWN_CATEGORY");
    }

    #[test]
    fn category_serde_spelling() {
        let json = serde_json::to_string(&Category::Pagination).unwrap();
        assert_eq!(json, "\"pagination\"");

        let parsed: Category = serde_json::from_str("\"filters\"").unwrap();
        assert_eq!(parsed, Category::Filters);
    }

    #[test]
    fn rendering_order_is_fixed() {
        assert_eq!(
            Category::all(),
            &[Category::Filters, Category::Sort, Category::Pagination]
        );
    }
}
