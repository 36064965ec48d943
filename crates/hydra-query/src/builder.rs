//! The accumulating query-string builder.

use chrono::{DateTime, Utc};
use std::fmt;
use tracing::debug;
use url::Url;

use crate::category::Category;
use hydra_filter::{
    DateFilter, DateOperator, Direction, Exists, Order, PageIndex, PageSize, PaginationEnabled,
    Param, Range, RangeOperator, Search, DEFAULT_OPERAND,
};

/// Accumulates typed parameters and renders them into one query string.
///
/// Parameters live in three ordered categories rendered in fixed order:
/// filters, then sort, then pagination. The visible [`query`](Self::query)
/// string is a pure function of the three sequences and the current operand;
/// it is recomputed after every structural mutation rather than patched
/// incrementally, since parameter counts are typically single-digit.
///
/// Every mutating method returns `&mut Self` so calls can be chained.
///
/// ```
/// use hydra_query::{Direction, QueryBuilder};
///
/// let mut builder = QueryBuilder::new();
/// builder
///     .search("tag", vec!["a".to_string(), "b".to_string()])
///     .order("name", Direction::Desc);
///
/// assert_eq!(builder.query(), "tag[]=a&tag[]=b&order[name]=desc");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QueryBuilder {
    operand: String,
    params: Vec<Param>,
    sort_params: Vec<Param>,
    pagination_params: Vec<Param>,
    history: Vec<String>,
    query: String,
}

impl QueryBuilder {
    /// Create an empty builder using the default `&` operand.
    #[must_use]
    pub fn new() -> Self {
        Self::with_operand(DEFAULT_OPERAND)
    }

    /// Create an empty builder with a custom token delimiter.
    #[must_use]
    pub fn with_operand(operand: impl Into<String>) -> Self {
        Self {
            operand: operand.into(),
            params: Vec::new(),
            sort_params: Vec::new(),
            pagination_params: Vec::new(),
            history: Vec::new(),
            query: String::new(),
        }
    }

    /// The delimiter currently joining tokens.
    #[must_use]
    pub fn operand(&self) -> &str {
        &self.operand
    }

    /// Replace the delimiter used for rebuilds.
    ///
    /// Already rendered multi-value search tokens keep the operand they were
    /// constructed with; only the joins between whole tokens change.
    pub fn set_operand(&mut self, operand: impl Into<String>) -> &mut Self {
        self.operand = operand.into();
        debug!(operand = %self.operand, "changed builder operand");
        self.rebuild();
        self
    }

    /// Append an exact-match search filter using the builder's current operand.
    pub fn search(&mut self, property: impl Into<String>, values: Vec<String>) -> &mut Self {
        let operand = self.operand.clone();
        self.search_with_operand(property, values, operand)
    }

    /// Append an exact-match search filter with an explicit sub-token operand.
    pub fn search_with_operand(
        &mut self,
        property: impl Into<String>,
        values: Vec<String>,
        operand: impl Into<String>,
    ) -> &mut Self {
        self.push(
            Category::Filters,
            Search::with_operand(property, values, operand).into(),
        )
    }

    /// Append an existence filter.
    pub fn exists(&mut self, property: impl Into<String>, value: bool) -> &mut Self {
        self.push(Category::Filters, Exists::new(property, value).into())
    }

    /// Append a numeric range filter.
    ///
    /// `second_value` supplies the upper bound of a
    /// [`RangeOperator::Between`] interval and is ignored by the other
    /// operators.
    pub fn range(
        &mut self,
        property: impl Into<String>,
        operator: RangeOperator,
        value: f64,
        second_value: Option<f64>,
    ) -> &mut Self {
        self.push(
            Category::Filters,
            Range::new(property, operator, value, second_value).into(),
        )
    }

    /// Append a date comparison filter; only the UTC calendar date is used.
    pub fn date(
        &mut self,
        property: impl Into<String>,
        operator: DateOperator,
        value: DateTime<Utc>,
    ) -> &mut Self {
        self.push(
            Category::Filters,
            DateFilter::new(property, operator, value).into(),
        )
    }

    /// Append a sort directive.
    pub fn order(&mut self, property: impl Into<String>, direction: Direction) -> &mut Self {
        self.push(Category::Sort, Order::new(property, direction).into())
    }

    /// Append a pagination toggle for the default `pagination` property.
    pub fn enable_pagination(&mut self, value: bool) -> &mut Self {
        self.push(Category::Pagination, PaginationEnabled::new(value).into())
    }

    /// Append a pagination toggle for a custom property name.
    pub fn enable_pagination_with_property(
        &mut self,
        value: bool,
        property: impl Into<String>,
    ) -> &mut Self {
        self.push(
            Category::Pagination,
            PaginationEnabled::with_property(value, property).into(),
        )
    }

    /// Append a page index directive for the default `page` property.
    pub fn page_index(&mut self, value: u32) -> &mut Self {
        self.push(Category::Pagination, PageIndex::new(value).into())
    }

    /// Append a page index directive for a custom property name.
    pub fn page_index_with_property(
        &mut self,
        value: u32,
        property: impl Into<String>,
    ) -> &mut Self {
        self.push(
            Category::Pagination,
            PageIndex::with_property(value, property).into(),
        )
    }

    /// Append a page size directive for the default `itemsPerPage` property.
    pub fn page_size(&mut self, value: u32) -> &mut Self {
        self.push(Category::Pagination, PageSize::new(value).into())
    }

    /// Append a page size directive for a custom property name.
    pub fn page_size_with_property(
        &mut self,
        value: u32,
        property: impl Into<String>,
    ) -> &mut Self {
        self.push(
            Category::Pagination,
            PageSize::with_property(value, property).into(),
        )
    }

    /// Append an externally built parameter to the named category.
    ///
    /// No validation is performed on the parameter beyond trusting its
    /// rendered token; a mismatched kind (say, a sort directive pushed into
    /// the pagination category) simply renders where it was put.
    pub fn push(&mut self, category: Category, param: Param) -> &mut Self {
        self.sequence_mut(category).push(param);
        self.rebuild();
        self
    }

    /// Empty one category, or all three when `None`.
    ///
    /// The full query string as it stood immediately before the clear is
    /// pushed onto [`history`](Self::history) first.
    ///
    /// ```
    /// use hydra_query::QueryBuilder;
    ///
    /// let mut builder = QueryBuilder::new();
    /// builder.exists("owner", true).clear(None);
    ///
    /// assert_eq!(builder.query(), "");
    /// assert_eq!(builder.previous_query(), Some("exists[owner]=true"));
    /// ```
    pub fn clear(&mut self, category: Option<Category>) -> &mut Self {
        self.history.push(self.query.clone());
        match category {
            Some(category) => self.sequence_mut(category).clear(),
            None => {
                self.params.clear();
                self.sort_params.clear();
                self.pagination_params.clear();
            }
        }
        debug!(
            category = category.map(|c| c.as_str()),
            history_len = self.history.len(),
            "cleared builder parameters"
        );
        self.rebuild();
        self
    }

    /// Empty the history log; current parameters and query are untouched.
    pub fn clear_history(&mut self) -> &mut Self {
        self.history.clear();
        self
    }

    /// Remove every parameter whose property matches, from the named
    /// category or from all three when `None`. History is untouched.
    pub fn remove(&mut self, property: &str, category: Option<Category>) -> &mut Self {
        let before = self.len();
        match category {
            Some(category) => self
                .sequence_mut(category)
                .retain(|param| param.property() != property),
            None => {
                self.params.retain(|param| param.property() != property);
                self.sort_params.retain(|param| param.property() != property);
                self.pagination_params
                    .retain(|param| param.property() != property);
            }
        }
        debug!(
            property,
            removed = before - self.len(),
            "removed builder parameters"
        );
        self.rebuild();
        self
    }

    /// The current filter sequence.
    #[must_use]
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Replace the filter sequence wholesale.
    pub fn set_params(&mut self, params: Vec<Param>) -> &mut Self {
        self.params = params;
        self.rebuild();
        self
    }

    /// The current sort sequence.
    #[must_use]
    pub fn sort_params(&self) -> &[Param] {
        &self.sort_params
    }

    /// Replace the sort sequence wholesale.
    pub fn set_sort_params(&mut self, params: Vec<Param>) -> &mut Self {
        self.sort_params = params;
        self.rebuild();
        self
    }

    /// The current pagination sequence.
    #[must_use]
    pub fn pagination_params(&self) -> &[Param] {
        &self.pagination_params
    }

    /// Replace the pagination sequence wholesale.
    pub fn set_pagination_params(&mut self, params: Vec<Param>) -> &mut Self {
        self.pagination_params = params;
        self.rebuild();
        self
    }

    /// The current full query string, with no leading delimiter.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Total number of parameters across all three categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len() + self.sort_params.len() + self.pagination_params.len()
    }

    /// Returns true when no parameters are held in any category.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All historical query strings in chronological order.
    ///
    /// The log grows by one entry per [`clear`](Self::clear) call and is
    /// never trimmed or capped; long-lived builders under heavy clear churn
    /// should call [`clear_history`](Self::clear_history) periodically.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// The most recent history entry, if any.
    #[must_use]
    pub fn previous_query(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    /// Install the current query string as the URL's raw query.
    ///
    /// An empty builder removes the query component. No escaping is
    /// performed on either side.
    pub fn apply_to(&self, url: &mut Url) {
        if self.query.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&self.query));
        }
    }

    fn sequence_mut(&mut self, category: Category) -> &mut Vec<Param> {
        match category {
            Category::Filters => &mut self.params,
            Category::Sort => &mut self.sort_params,
            Category::Pagination => &mut self.pagination_params,
        }
    }

    // Recompute the whole string: filters, then sort, then pagination, in
    // insertion order, joined by the current operand.
    fn rebuild(&mut self) {
        let tokens: Vec<&str> = self
            .params
            .iter()
            .chain(self.sort_params.iter())
            .chain(self.pagination_params.iter())
            .map(Param::query)
            .collect();
        self.query = tokens.join(&self.operand);
    }
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use hydra_filter::Operator;

    #[test]
    fn empty_builder_renders_empty_string() {
        let builder = QueryBuilder::new();
        assert_eq!(builder.query(), "");
        assert!(builder.is_empty());
        assert!(builder.history().is_empty());
        assert_eq!(builder.previous_query(), None);
    }

    #[test]
    fn tokens_join_in_category_then_insertion_order() {
        let mut builder = QueryBuilder::new();
        builder
            .page_index(2)
            .order("name", Direction::Asc)
            .exists("owner", true)
            .range("price", RangeOperator::Gte, 10.0, None);

        // Filters render first regardless of the call order above.
        assert_eq!(
            builder.query(),
            "exists[owner]=true&price[gte]=10&order[name]=asc&page=2"
        );
    }

    #[test]
    fn pagination_params_preserve_insertion_order() {
        let mut builder = QueryBuilder::new();
        builder.page_index(2).page_size(30).enable_pagination(true);

        assert_eq!(builder.query(), "page=2&itemsPerPage=30&pagination=true");
    }

    #[test]
    fn custom_operand_joins_tokens() {
        let mut builder = QueryBuilder::with_operand(";");
        builder.exists("owner", true).page_index(1);

        assert_eq!(builder.query(), "exists[owner]=true;page=1");
        assert_eq!(builder.operand(), ";");
    }

    #[test]
    fn search_uses_the_builder_operand() {
        let mut builder = QueryBuilder::with_operand(";");
        builder.search("tag", vec!["a".to_string(), "b".to_string()]);

        assert_eq!(builder.query(), "tag[]=a;tag[]=b");
    }

    #[test]
    fn set_operand_does_not_rebake_search_tokens() {
        let mut builder = QueryBuilder::new();
        builder
            .search("tag", vec!["a".to_string(), "b".to_string()])
            .exists("owner", true);
        builder.set_operand(";");

        // The multi-value token keeps its original `&` sub-token joins.
        assert_eq!(builder.query(), "tag[]=a&tag[]=b;exists[owner]=true");
    }

    #[test]
    fn date_filter_renders_utc_day() {
        let when = Utc.with_ymd_and_hms(2021, 5, 3, 10, 0, 0).unwrap();
        let mut builder = QueryBuilder::new();
        builder.date("createdAt", DateOperator::After, when);

        assert_eq!(builder.query(), "createdAt[after]=2021-05-03");
    }

    #[test]
    fn clear_all_records_history_and_empties_everything() {
        let mut builder = QueryBuilder::new();
        builder.exists("owner", true).order("name", Direction::Asc);
        let before = builder.query().to_string();

        builder.clear(None);

        assert_eq!(builder.query(), "");
        assert!(builder.is_empty());
        assert_eq!(builder.history(), &[before.clone()]);
        assert_eq!(builder.previous_query(), Some(before.as_str()));
    }

    #[test]
    fn clear_single_category_keeps_the_others() {
        let mut builder = QueryBuilder::new();
        builder
            .exists("owner", true)
            .order("name", Direction::Asc)
            .page_index(2);

        builder.clear(Some(Category::Sort));

        assert_eq!(builder.query(), "exists[owner]=true&page=2");
        assert_eq!(builder.history().len(), 1);
    }

    #[test]
    fn clear_on_empty_builder_still_records_history() {
        let mut builder = QueryBuilder::new();
        builder.clear(None);

        assert_eq!(builder.history(), &[String::new()]);
    }

    #[test]
    fn history_accumulates_across_clears() {
        let mut builder = QueryBuilder::new();
        builder.exists("a", true).clear(None);
        builder.exists("b", false).clear(Some(Category::Filters));
        builder.page_index(1).clear(None);

        assert_eq!(
            builder.history(),
            &[
                "exists[a]=true".to_string(),
                "exists[b]=false".to_string(),
                "page=1".to_string(),
            ]
        );
        assert_eq!(builder.previous_query(), Some("page=1"));
    }

    #[test]
    fn clear_history_leaves_parameters_alone() {
        let mut builder = QueryBuilder::new();
        builder.exists("owner", true).clear(None);
        builder.exists("owner", false);

        builder.clear_history();

        assert!(builder.history().is_empty());
        assert_eq!(builder.previous_query(), None);
        assert_eq!(builder.query(), "exists[owner]=false");
    }

    #[test]
    fn remove_from_all_categories() {
        let mut builder = QueryBuilder::new();
        builder
            .exists("name", true)
            .order("name", Direction::Asc)
            .exists("owner", true);

        builder.remove("name", None);

        assert_eq!(builder.query(), "exists[owner]=true");
        assert!(builder.history().is_empty());
    }

    #[test]
    fn remove_scoped_to_one_category() {
        let mut builder = QueryBuilder::new();
        builder.exists("name", true).order("name", Direction::Asc);

        builder.remove("name", Some(Category::Sort));

        assert_eq!(builder.query(), "exists[name]=true");
    }

    #[test]
    fn remove_matches_every_occurrence() {
        let mut builder = QueryBuilder::new();
        builder
            .range("price", RangeOperator::Gte, 10.0, None)
            .range("price", RangeOperator::Lte, 20.0, None)
            .exists("owner", true);

        builder.remove("price", Some(Category::Filters));

        assert_eq!(builder.query(), "exists[owner]=true");
    }

    #[test]
    fn setters_replace_a_sequence_and_rebuild() {
        let mut builder = QueryBuilder::new();
        builder.exists("owner", true);

        builder.set_params(vec![
            Exists::new("name", false).into(),
            Range::new("price", RangeOperator::Lt, 5.0, None).into(),
        ]);

        assert_eq!(builder.query(), "exists[name]=false&price[lt]=5");
        assert_eq!(builder.params().len(), 2);
    }

    #[test]
    fn push_places_externally_built_params() {
        let mut builder = QueryBuilder::new();
        builder.push(
            Category::Pagination,
            PageSize::with_property(25, "limit").into(),
        );

        assert_eq!(builder.query(), "limit=25");
        assert_eq!(
            builder.pagination_params()[0].operator(),
            Operator::Pagination
        );
    }

    #[test]
    fn apply_to_sets_and_removes_the_url_query() {
        let mut url = Url::parse("https://api.example.com/books").unwrap();

        let mut builder = QueryBuilder::new();
        builder.exists("owner", true).page_index(2);
        builder.apply_to(&mut url);
        assert_eq!(
            url.as_str(),
            "https://api.example.com/books?exists[owner]=true&page=2"
        );

        builder.clear(None);
        builder.apply_to(&mut url);
        assert_eq!(url.as_str(), "https://api.example.com/books");
    }

    #[test]
    fn display_matches_query() {
        let mut builder = QueryBuilder::new();
        builder.order("name", Direction::Desc);
        assert_eq!(builder.to_string(), builder.query());
    }
}
