//! The closed operator vocabulary for query parameters.
//!
//! Each parameter kind carries its own narrow operator set, modelled as a
//! dedicated enum. The [`Operator`] type unifies them for the shared
//! capability surface exposed by [`crate::param::Param`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Comparison operators for numeric range filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeOperator {
    /// Strictly less than
    Lt,
    /// Less than or equal
    Lte,
    /// Strictly greater than
    Gt,
    /// Greater than or equal
    Gte,
    /// Inclusive interval between two bounds
    Between,
}

impl RangeOperator {
    /// Returns the operator name as used inside the rendered token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Between => "between",
        }
    }

    /// Returns all range operators.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Lt, Self::Lte, Self::Gt, Self::Gte, Self::Between]
    }
}

impl FromStr for RangeOperator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lt" => Ok(Self::Lt),
            "lte" => Ok(Self::Lte),
            "gt" => Ok(Self::Gt),
            "gte" => Ok(Self::Gte),
            "between" => Ok(Self::Between),
            _ => Err(Error::UnknownOperator(s.to_string())),
        }
    }
}

impl fmt::Display for RangeOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison operators for date filters.
///
/// `After`/`Before` are inclusive; the `Strictly*` forms exclude the bound
/// itself, matching the API-Platform date filter vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOperator {
    /// On or after the given date
    After,
    /// On or before the given date
    Before,
    /// Strictly after the given date
    StrictlyAfter,
    /// Strictly before the given date
    StrictlyBefore,
}

impl DateOperator {
    /// Returns the operator name as used inside the rendered token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::After => "after",
            Self::Before => "before",
            Self::StrictlyAfter => "strictly_after",
            Self::StrictlyBefore => "strictly_before",
        }
    }

    /// Returns all date operators.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::After,
            Self::Before,
            Self::StrictlyAfter,
            Self::StrictlyBefore,
        ]
    }
}

impl FromStr for DateOperator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "after" => Ok(Self::After),
            "before" => Ok(Self::Before),
            "strictly_after" => Ok(Self::StrictlyAfter),
            "strictly_before" => Ok(Self::StrictlyBefore),
            _ => Err(Error::UnknownOperator(s.to_string())),
        }
    }
}

impl fmt::Display for DateOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction for order parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Ascending order
    Asc,
    /// Descending order
    Desc,
}

impl Direction {
    /// Returns the direction value as used inside the rendered token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Returns both sort directions.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Asc, Self::Desc]
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(Error::UnknownDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified operator tag exposed by every parameter variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Existence check (`exists[...]`)
    Exists,
    /// Exact-match search
    Equals,
    /// Sort marker (`order[...]`)
    Order,
    /// Pagination directive
    Pagination,
    /// Numeric range comparison
    Range(RangeOperator),
    /// Date comparison
    Date(DateOperator),
}

impl Operator {
    /// Returns the operator name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Exists => "exists",
            Self::Equals => "equals",
            Self::Order => "order",
            Self::Pagination => "pagination",
            Self::Range(op) => op.as_str(),
            Self::Date(op) => op.as_str(),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
