use crate::utils::error::QueryError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Comparison operator of a [`Filter`], serialized as its short wire code.
///
/// `Other` carries a code outside the known vocabulary so that decoded
/// requests re-encode unchanged. Strict parsing (`FromStr`, serde) never
/// produces it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FilterOperator {
    #[default]
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
    GreaterThanOrEquals,
    LessThanOrEquals,
    Contains,
    NotContains,
    Null,
    NotNull,
    Other(String),
}

impl FilterOperator {
    pub const ALL: [FilterOperator; 10] = [
        FilterOperator::Equals,
        FilterOperator::NotEquals,
        FilterOperator::GreaterThan,
        FilterOperator::LessThan,
        FilterOperator::GreaterThanOrEquals,
        FilterOperator::LessThanOrEquals,
        FilterOperator::Contains,
        FilterOperator::NotContains,
        FilterOperator::Null,
        FilterOperator::NotNull,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            FilterOperator::Equals => "eq",
            FilterOperator::NotEquals => "neq",
            FilterOperator::GreaterThan => "gt",
            FilterOperator::LessThan => "lt",
            FilterOperator::GreaterThanOrEquals => "gte",
            FilterOperator::LessThanOrEquals => "lte",
            FilterOperator::Contains => "contains",
            FilterOperator::NotContains => "ncontains",
            FilterOperator::Null => "null",
            FilterOperator::NotNull => "notnull",
            FilterOperator::Other(code) => code,
        }
    }

    /// Maps any code, keeping unknown ones as `Other`.
    pub fn from_wire(code: &str) -> FilterOperator {
        code.parse()
            .unwrap_or_else(|_| FilterOperator::Other(code.to_string()))
    }

    /// Operators that take no value.
    pub fn is_unary(&self) -> bool {
        matches!(self, FilterOperator::Null | FilterOperator::NotNull)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, FilterOperator::Other(_))
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterOperator {
    type Err = QueryError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        FilterOperator::ALL
            .into_iter()
            .find(|op| op.as_str() == code)
            .ok_or_else(|| QueryError::UnknownOperator {
                code: code.to_string(),
            })
    }
}

impl TryFrom<String> for FilterOperator {
    type Error = QueryError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

impl From<FilterOperator> for String {
    fn from(op: FilterOperator) -> Self {
        match op {
            FilterOperator::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

/// Sort direction. `Other` keeps an unknown decoded code, like
/// [`FilterOperator::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
    Other(String),
}

impl SortOrder {
    pub fn as_str(&self) -> &str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
            SortOrder::Other(code) => code,
        }
    }

    pub fn from_wire(code: &str) -> SortOrder {
        code.parse()
            .unwrap_or_else(|_| SortOrder::Other(code.to_string()))
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, SortOrder::Other(_))
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = QueryError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            other => Err(QueryError::UnknownSortOrder {
                code: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for SortOrder {
    type Error = QueryError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

impl From<SortOrder> for String {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

/// Anything that can name the fields of a filter: one field or a list.
pub trait IntoFields {
    fn into_fields(self) -> Vec<String>;
}

impl IntoFields for &str {
    fn into_fields(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoFields for String {
    fn into_fields(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoFields for Vec<String> {
    fn into_fields(self) -> Vec<String> {
        self
    }
}

impl IntoFields for Vec<&str> {
    fn into_fields(self) -> Vec<String> {
        self.into_iter().map(str::to_string).collect()
    }
}

impl IntoFields for &[&str] {
    fn into_fields(self) -> Vec<String> {
        self.iter().map(|f| f.to_string()).collect()
    }
}

impl<const N: usize> IntoFields for [&str; N] {
    fn into_fields(self) -> Vec<String> {
        self.into_iter().map(str::to_string).collect()
    }
}

/// One condition over one or more fields. A match on any of the fields
/// satisfies the filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "FilterRepr")]
pub struct Filter {
    fields: Vec<String>,
    operator: FilterOperator,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    case_sensitive: bool,
}

impl Filter {
    /// Builds a case-insensitive filter. Unary operators drop any value given.
    pub fn new(
        fields: impl IntoFields,
        operator: FilterOperator,
        value: Option<String>,
    ) -> Self {
        Self::with_case_sensitive(fields, operator, value, false)
    }

    pub fn with_case_sensitive(
        fields: impl IntoFields,
        operator: FilterOperator,
        value: Option<String>,
        case_sensitive: bool,
    ) -> Self {
        let value = if operator.is_unary() { None } else { value };
        Self {
            fields: fields.into_fields(),
            operator,
            value,
            case_sensitive,
        }
    }

    pub fn equals(fields: impl IntoFields, value: impl Into<String>) -> Self {
        Self::new(fields, FilterOperator::Equals, Some(value.into()))
    }

    pub fn not_equals(fields: impl IntoFields, value: impl Into<String>) -> Self {
        Self::new(fields, FilterOperator::NotEquals, Some(value.into()))
    }

    pub fn contains(fields: impl IntoFields, value: impl Into<String>) -> Self {
        Self::new(fields, FilterOperator::Contains, Some(value.into()))
    }

    pub fn is_null(fields: impl IntoFields) -> Self {
        Self::new(fields, FilterOperator::Null, None)
    }

    pub fn is_not_null(fields: impl IntoFields) -> Self {
        Self::new(fields, FilterOperator::NotNull, None)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn operator(&self) -> &FilterOperator {
        &self.operator
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FieldsRepr {
    One(String),
    Many(Vec<String>),
}

#[derive(Deserialize)]
struct FilterRepr {
    fields: FieldsRepr,
    #[serde(default)]
    operator: FilterOperator,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    case_sensitive: bool,
}

impl From<FilterRepr> for Filter {
    fn from(repr: FilterRepr) -> Self {
        let fields = match repr.fields {
            FieldsRepr::One(field) => vec![field],
            FieldsRepr::Many(fields) => fields,
        };
        Filter::with_case_sensitive(fields, repr.operator, repr.value, repr.case_sensitive)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sorting {
    property: String,
    #[serde(default)]
    order: SortOrder,
}

impl Sorting {
    pub fn new(property: impl Into<String>, order: SortOrder) -> Self {
        Self {
            property: property.into(),
            order,
        }
    }

    pub fn asc(property: impl Into<String>) -> Self {
        Self::new(property, SortOrder::Ascending)
    }

    pub fn desc(property: impl Into<String>) -> Self {
        Self::new(property, SortOrder::Descending)
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn order(&self) -> &SortOrder {
        &self.order
    }
}

/// A skip/take window with 1-based page views.
///
/// Values are signed so that whatever integer arrives on the wire is kept;
/// non-negativity is left to [`Validate`](crate::utils::validation::Validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Paging {
    skip: i64,
    take: i64,
}

impl Paging {
    pub fn from_skip_take(skip: i64, take: i64) -> Self {
        Self { skip, take }
    }

    /// `page_number` is 1-based; anything below 1 is read as the first page.
    pub fn from_page(page_number: i64, page_size: i64) -> Self {
        Self {
            skip: (page_number.max(1) - 1).saturating_mul(page_size),
            take: page_size,
        }
    }

    pub fn skip(&self) -> i64 {
        self.skip
    }

    pub fn take(&self) -> i64 {
        self.take
    }

    /// `floor(skip / take) + 1`, or 1 when `take` is not positive.
    pub fn page(&self) -> i64 {
        if self.take <= 0 {
            return 1;
        }
        self.skip.div_euclid(self.take).saturating_add(1)
    }

    pub fn page_size(&self) -> i64 {
        self.take
    }

    pub fn next_page(&self) -> Paging {
        Paging::from_page(self.page().max(1).saturating_add(1), self.take)
    }

    pub fn previous_page(&self) -> Paging {
        Paging::from_page(self.page() - 1, self.take)
    }
}

/// Filters, sortings and an optional paging window for one search request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SearchParameters {
    #[serde(default)]
    filters: Vec<Filter>,
    #[serde(default)]
    sortings: Vec<Sorting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    paging: Option<Paging>,
}

impl SearchParameters {
    pub fn new(filters: Vec<Filter>, sortings: Vec<Sorting>, paging: Option<Paging>) -> Self {
        Self {
            filters,
            sortings,
            paging,
        }
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn sortings(&self) -> &[Sorting] {
        &self.sortings
    }

    pub fn paging(&self) -> Option<&Paging> {
        self.paging.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty() && self.sortings.is_empty() && self.paging.is_none()
    }

    /// Sortings with later duplicates of a property removed, first one kept.
    pub fn unique_sortings(&self) -> Vec<&Sorting> {
        let mut seen = HashSet::new();
        self.sortings
            .iter()
            .filter(|sorting| seen.insert(sorting.property.as_str()))
            .collect()
    }

    pub fn with_filter(&self, filter: Filter) -> Self {
        let mut next = self.clone();
        next.filters.push(filter);
        next
    }

    pub fn with_sorting(&self, sorting: Sorting) -> Self {
        let mut next = self.clone();
        next.sortings.push(sorting);
        next
    }

    pub fn with_paging(&self, paging: Paging) -> Self {
        Self {
            paging: Some(paging),
            ..self.clone()
        }
    }

    pub fn without_paging(&self) -> Self {
        Self {
            paging: None,
            ..self.clone()
        }
    }
}
