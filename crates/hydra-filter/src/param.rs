//! Parameter value objects.
//!
//! Each variant renders its query-string token exactly once, inside its
//! constructor. The token never changes for the lifetime of the object and
//! never carries a leading delimiter; joining tokens is the builder's job.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::operator::{DateOperator, Direction, Operator, RangeOperator};

/// Default delimiter between tokens and between multi-value search sub-tokens.
pub const DEFAULT_OPERAND: &str = "&";
/// Default property name for the pagination toggle.
pub const PAGINATION_PROPERTY: &str = "pagination";
/// Default property name for the page index.
pub const PAGE_PROPERTY: &str = "page";
/// Default property name for the page size.
pub const ITEMS_PER_PAGE_PROPERTY: &str = "itemsPerPage";

/// Existence filter, rendered as `exists[<property>]=<true|false>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Exists {
    property: String,
    value: bool,
    query: String,
}

impl Exists {
    /// Create an existence filter for the given property.
    #[must_use]
    pub fn new(property: impl Into<String>, value: bool) -> Self {
        let property = property.into();
        let query = format!("exists[{property}]={value}");
        Self {
            property,
            value,
            query,
        }
    }

    /// The API field name being filtered.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The expected existence state.
    #[must_use]
    pub const fn value(&self) -> bool {
        self.value
    }

    /// The rendered token.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Exact-match search filter.
///
/// A single value renders as `<property>=<value>`; multiple values render as
/// `<property>[]=<v1><operand><property>[]=<v2>...` with no trailing operand.
/// The operand is baked into the token at construction, so callers should
/// pass the same operand the builder joins tokens with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Search {
    property: String,
    values: Vec<String>,
    operand: String,
    query: String,
}

impl Search {
    /// Create a search filter joined with the default `&` operand.
    #[must_use]
    pub fn new(property: impl Into<String>, values: Vec<String>) -> Self {
        Self::with_operand(property, values, DEFAULT_OPERAND)
    }

    /// Create a search filter with an explicit sub-token operand.
    #[must_use]
    pub fn with_operand(
        property: impl Into<String>,
        values: Vec<String>,
        operand: impl Into<String>,
    ) -> Self {
        let property = property.into();
        let operand = operand.into();
        let query = match values.as_slice() {
            [single] => format!("{property}={single}"),
            many => many
                .iter()
                .map(|value| format!("{property}[]={value}"))
                .collect::<Vec<_>>()
                .join(&operand),
        };
        Self {
            property,
            values,
            operand,
            query,
        }
    }

    /// The API field name being searched.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The search values, in the order supplied.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The operand baked into the multi-value token.
    #[must_use]
    pub fn operand(&self) -> &str {
        &self.operand
    }

    /// The rendered token.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Numeric range filter, rendered as `<property>[<op>]=<value>` or, for
/// [`RangeOperator::Between`] with a second bound, `<property>[between]=<a>..<b>`.
///
/// The second bound is a genuine option: `Some(0.0)` renders an explicit
/// `..0` upper bound, `None` degenerates to the single-value form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Range {
    property: String,
    operator: RangeOperator,
    value: f64,
    second_value: Option<f64>,
    query: String,
}

impl Range {
    /// Create a range filter.
    ///
    /// `second_value` is only meaningful with [`RangeOperator::Between`];
    /// other operators ignore it.
    #[must_use]
    pub fn new(
        property: impl Into<String>,
        operator: RangeOperator,
        value: f64,
        second_value: Option<f64>,
    ) -> Self {
        let property = property.into();
        let query = match (operator, second_value) {
            (RangeOperator::Between, Some(second)) => {
                format!("{property}[{}]={value}..{second}", operator.as_str())
            }
            _ => format!("{property}[{}]={value}", operator.as_str()),
        };
        Self {
            property,
            operator,
            value,
            second_value,
            query,
        }
    }

    /// The API field name being filtered.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The comparison operator.
    #[must_use]
    pub const fn operator(&self) -> RangeOperator {
        self.operator
    }

    /// The primary bound.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The upper bound of a `between` interval, when present.
    #[must_use]
    pub const fn second_value(&self) -> Option<f64> {
        self.second_value
    }

    /// The rendered token.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Date comparison filter, rendered as `<property>[<op>]=<YYYY-MM-DD>`.
///
/// Only the UTC calendar date is rendered; time-of-day is discarded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateFilter {
    property: String,
    operator: DateOperator,
    value: DateTime<Utc>,
    query: String,
}

impl DateFilter {
    /// Create a date filter.
    #[must_use]
    pub fn new(property: impl Into<String>, operator: DateOperator, value: DateTime<Utc>) -> Self {
        let property = property.into();
        let query = format!(
            "{property}[{}]={}",
            operator.as_str(),
            value.format("%Y-%m-%d")
        );
        Self {
            property,
            operator,
            value,
            query,
        }
    }

    /// The API field name being filtered.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The comparison operator.
    #[must_use]
    pub const fn operator(&self) -> DateOperator {
        self.operator
    }

    /// The full timestamp supplied at construction.
    #[must_use]
    pub const fn value(&self) -> DateTime<Utc> {
        self.value
    }

    /// The rendered token.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Sort directive, rendered as `order[<property>]=<asc|desc>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    property: String,
    direction: Direction,
    query: String,
}

impl Order {
    /// Create a sort directive.
    #[must_use]
    pub fn new(property: impl Into<String>, direction: Direction) -> Self {
        let property = property.into();
        let query = format!("order[{property}]={}", direction.as_str());
        Self {
            property,
            direction,
            query,
        }
    }

    /// The API field name being sorted on.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The sort direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// The rendered token.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Pagination toggle, rendered as `<property>=<true|false>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginationEnabled {
    property: String,
    value: bool,
    query: String,
}

impl PaginationEnabled {
    /// Create a pagination toggle for the default `pagination` property.
    #[must_use]
    pub fn new(value: bool) -> Self {
        Self::with_property(value, PAGINATION_PROPERTY)
    }

    /// Create a pagination toggle for a custom property name.
    #[must_use]
    pub fn with_property(value: bool, property: impl Into<String>) -> Self {
        let property = property.into();
        let query = format!("{property}={value}");
        Self {
            property,
            value,
            query,
        }
    }

    /// The property name carrying the toggle.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Whether pagination is enabled.
    #[must_use]
    pub const fn value(&self) -> bool {
        self.value
    }

    /// The rendered token.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Page index directive, rendered as `<property>=<value>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageIndex {
    property: String,
    value: u32,
    query: String,
}

impl PageIndex {
    /// Create a page index directive for the default `page` property.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self::with_property(value, PAGE_PROPERTY)
    }

    /// Create a page index directive for a custom property name.
    #[must_use]
    pub fn with_property(value: u32, property: impl Into<String>) -> Self {
        let property = property.into();
        let query = format!("{property}={value}");
        Self {
            property,
            value,
            query,
        }
    }

    /// The property name carrying the page index.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The requested page.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// The rendered token.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Page size directive, rendered as `<property>=<value>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSize {
    property: String,
    value: u32,
    query: String,
}

impl PageSize {
    /// Create a page size directive for the default `itemsPerPage` property.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self::with_property(value, ITEMS_PER_PAGE_PROPERTY)
    }

    /// Create a page size directive for a custom property name.
    #[must_use]
    pub fn with_property(value: u32, property: impl Into<String>) -> Self {
        let property = property.into();
        let query = format!("{property}={value}");
        Self {
            property,
            value,
            query,
        }
    }

    /// The property name carrying the page size.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The requested number of items per page.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// The rendered token.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// A query parameter of any kind.
///
/// This is the sum type the builder accumulates. Every variant exposes the
/// same capability surface: [`property`](Self::property),
/// [`operator`](Self::operator), [`value`](Self::value), and the rendered
/// [`query`](Self::query) token.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Param {
    /// Existence filter
    Exists(Exists),
    /// Exact-match search filter
    Search(Search),
    /// Numeric range filter
    Range(Range),
    /// Date comparison filter
    Date(DateFilter),
    /// Sort directive
    Order(Order),
    /// Pagination toggle
    PaginationEnabled(PaginationEnabled),
    /// Page index directive
    PageIndex(PageIndex),
    /// Page size directive
    PageSize(PageSize),
}

/// Borrowed view of a parameter's operand value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue<'a> {
    /// Boolean operand (existence, pagination toggle)
    Bool(bool),
    /// Floating-point operand (range primary bound)
    Number(f64),
    /// Unsigned integer operand (page index, page size)
    Integer(u32),
    /// Ordered search values
    Strings(&'a [String]),
    /// Timestamp operand (date filters)
    Date(DateTime<Utc>),
    /// Sort direction (order directives)
    Direction(Direction),
}

impl Param {
    /// The API field name this parameter addresses.
    #[must_use]
    pub fn property(&self) -> &str {
        match self {
            Self::Exists(p) => p.property(),
            Self::Search(p) => p.property(),
            Self::Range(p) => p.property(),
            Self::Date(p) => p.property(),
            Self::Order(p) => p.property(),
            Self::PaginationEnabled(p) => p.property(),
            Self::PageIndex(p) => p.property(),
            Self::PageSize(p) => p.property(),
        }
    }

    /// The operator tag for this parameter.
    #[must_use]
    pub const fn operator(&self) -> Operator {
        match self {
            Self::Exists(_) => Operator::Exists,
            Self::Search(_) => Operator::Equals,
            Self::Range(p) => Operator::Range(p.operator()),
            Self::Date(p) => Operator::Date(p.operator()),
            Self::Order(_) => Operator::Order,
            Self::PaginationEnabled(_) | Self::PageIndex(_) | Self::PageSize(_) => {
                Operator::Pagination
            }
        }
    }

    /// The operand value supplied at construction.
    #[must_use]
    pub fn value(&self) -> ParamValue<'_> {
        match self {
            Self::Exists(p) => ParamValue::Bool(p.value()),
            Self::Search(p) => ParamValue::Strings(p.values()),
            Self::Range(p) => ParamValue::Number(p.value()),
            Self::Date(p) => ParamValue::Date(p.value()),
            Self::Order(p) => ParamValue::Direction(p.direction()),
            Self::PaginationEnabled(p) => ParamValue::Bool(p.value()),
            Self::PageIndex(p) => ParamValue::Integer(p.value()),
            Self::PageSize(p) => ParamValue::Integer(p.value()),
        }
    }

    /// The rendered token, valid as a query-string segment on its own.
    #[must_use]
    pub fn query(&self) -> &str {
        match self {
            Self::Exists(p) => p.query(),
            Self::Search(p) => p.query(),
            Self::Range(p) => p.query(),
            Self::Date(p) => p.query(),
            Self::Order(p) => p.query(),
            Self::PaginationEnabled(p) => p.query(),
            Self::PageIndex(p) => p.query(),
            Self::PageSize(p) => p.query(),
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query())
    }
}

impl From<Exists> for Param {
    fn from(param: Exists) -> Self {
        Self::Exists(param)
    }
}

impl From<Search> for Param {
    fn from(param: Search) -> Self {
        Self::Search(param)
    }
}

impl From<Range> for Param {
    fn from(param: Range) -> Self {
        Self::Range(param)
    }
}

impl From<DateFilter> for Param {
    fn from(param: DateFilter) -> Self {
        Self::Date(param)
    }
}

impl From<Order> for Param {
    fn from(param: Order) -> Self {
        Self::Order(param)
    }
}

impl From<PaginationEnabled> for Param {
    fn from(param: PaginationEnabled) -> Self {
        Self::PaginationEnabled(param)
    }
}

impl From<PageIndex> for Param {
    fn from(param: PageIndex) -> Self {
        Self::PageIndex(param)
    }
}

impl From<PageSize> for Param {
    fn from(param: PageSize) -> Self {
        Self::PageSize(param)
    }
}
