//! # hydra-query
//!
//! Fluent query-string builder for Hydra-style REST API filters.
//!
//! [`QueryBuilder`] accumulates typed parameters from the `hydra-filter`
//! crate into three ordered categories (filters, sort, pagination), joins
//! their pre-rendered tokens with a configurable operand, and keeps a linear
//! history of query strings captured at each clear.
//!
//! The builder only ever produces a string; issuing the request, escaping
//! special characters, and validating property names against a remote schema
//! are all the caller's responsibility.
//!
//! ```
//! use hydra_query::{Direction, QueryBuilder, RangeOperator};
//!
//! let mut builder = QueryBuilder::new();
//! builder
//!     .exists("owner", true)
//!     .range("price", RangeOperator::Between, 10.0, Some(20.0))
//!     .order("name", Direction::Asc)
//!     .page_index(2);
//!
//! assert_eq!(
//!     builder.query(),
//!     "exists[owner]=true&price[between]=10..20&order[name]=asc&page=2"
//! );
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod builder;
pub mod category;

pub use builder::QueryBuilder;
pub use category::Category;

// Re-export the parameter surface so most callers need only this crate.
pub use hydra_filter::{
    DateFilter, DateOperator, Direction, Error, Exists, Operator, Order, PageIndex, PageSize,
    PaginationEnabled, Param, ParamValue, Range, RangeOperator, Search, DEFAULT_OPERAND,
    ITEMS_PER_PAGE_PROPERTY, PAGE_PROPERTY, PAGINATION_PROPERTY,
};

/// Convenient result alias that reuses the shared filter error type.
pub type Result<T> = hydra_filter::Result<T>;
