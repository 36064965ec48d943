//! # hydra-filter
//!
//! Typed filter, sort, and pagination parameters for Hydra-style REST APIs.
//!
//! This crate provides the parameter value objects consumed by the
//! `hydra-query` builder. Each parameter kind (existence check, exact-match
//! search, numeric range, date comparison, sort directive, pagination
//! directive) knows its property name, operator, and operand value, and
//! renders its own query-string token exactly once at construction time.
//!
//! No URL escaping is performed anywhere in this crate; callers are
//! responsible for supplying URL-safe property names and values, or for
//! escaping the final composed string.
//!
//! ## Modules
//!
//! - [`error`] - Error types for operator and category parsing
//! - [`operator`] - The closed operator vocabulary
//! - [`param`] - Parameter value objects and the [`Param`] sum type

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod operator;
pub mod param;

// Re-export commonly used types
pub use error::{Error, Result};
pub use operator::{DateOperator, Direction, Operator, RangeOperator};
pub use param::{
    DateFilter, Exists, Order, PageIndex, PageSize, PaginationEnabled, Param, ParamValue, Range,
    Search, DEFAULT_OPERAND, ITEMS_PER_PAGE_PROPERTY, PAGE_PROPERTY, PAGINATION_PROPERTY,
};
