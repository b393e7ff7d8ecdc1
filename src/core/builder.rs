//! Fluent builders. Each setter returns the builder; `build` yields the
//! immutable value.

use crate::domain::model::{
    Filter, FilterOperator, IntoFields, Paging, SearchParameters, SortOrder, Sorting,
};

/// Terminal step shared by all builders.
pub trait Build: Default {
    type Output;

    fn build(self) -> Self::Output;
}

/// What a builder setter accepts: a finished value, a builder, or a closure
/// that configures a fresh builder.
pub enum Input<T, B> {
    Value(T),
    Builder(B),
    Configure(Box<dyn FnOnce(B) -> B + Send>),
}

impl<T, B: Build<Output = T>> Input<T, B> {
    pub fn configure(f: impl FnOnce(B) -> B + Send + 'static) -> Self {
        Input::Configure(Box::new(f))
    }

    pub fn resolve(self) -> T {
        match self {
            Input::Value(value) => value,
            Input::Builder(builder) => builder.build(),
            Input::Configure(configure) => configure(B::default()).build(),
        }
    }
}

pub type FilterInput = Input<Filter, FilterBuilder>;
pub type SortingInput = Input<Sorting, SortingBuilder>;
pub type PagingInput = Input<Paging, PagingBuilder>;

macro_rules! impl_input_from {
    ($value:ty, $builder:ty) => {
        impl From<$value> for Input<$value, $builder> {
            fn from(value: $value) -> Self {
                Input::Value(value)
            }
        }

        impl From<$builder> for Input<$value, $builder> {
            fn from(builder: $builder) -> Self {
                Input::Builder(builder)
            }
        }
    };
}

impl_input_from!(Filter, FilterBuilder);
impl_input_from!(Sorting, SortingBuilder);
impl_input_from!(Paging, PagingBuilder);

impl Filter {
    pub fn builder() -> FilterBuilder {
        FilterBuilder::default()
    }
}

impl Sorting {
    pub fn builder() -> SortingBuilder {
        SortingBuilder::default()
    }
}

impl Paging {
    pub fn builder() -> PagingBuilder {
        PagingBuilder::default()
    }
}

impl SearchParameters {
    pub fn builder() -> SearchParametersBuilder {
        SearchParametersBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilterBuilder {
    fields: Vec<String>,
    operator: FilterOperator,
    value: Option<String>,
    case_sensitive: bool,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one field to the OR-list.
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Replaces the field list.
    pub fn fields(mut self, fields: impl IntoFields) -> Self {
        self.fields = fields.into_fields();
        self
    }

    pub fn operator(mut self, operator: FilterOperator) -> Self {
        self.operator = operator;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }
}

impl Build for FilterBuilder {
    type Output = Filter;

    fn build(self) -> Filter {
        Filter::with_case_sensitive(self.fields, self.operator, self.value, self.case_sensitive)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SortingBuilder {
    property: String,
    order: SortOrder,
}

impl SortingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(mut self, property: impl Into<String>) -> Self {
        self.property = property.into();
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    pub fn ascending(self) -> Self {
        self.order(SortOrder::Ascending)
    }

    pub fn descending(self) -> Self {
        self.order(SortOrder::Descending)
    }
}

impl Build for SortingBuilder {
    type Output = Sorting;

    fn build(self) -> Sorting {
        Sorting::new(self.property, self.order)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PagingBuilder {
    skip: i64,
    take: i64,
}

impl PagingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skip(mut self, skip: i64) -> Self {
        self.skip = skip;
        self
    }

    pub fn take(mut self, take: i64) -> Self {
        self.take = take;
        self
    }

    /// Sets both skip and take from a 1-based page.
    pub fn page(self, page_number: i64, page_size: i64) -> Self {
        let paging = Paging::from_page(page_number, page_size);
        self.skip(paging.skip()).take(paging.take())
    }
}

impl Build for PagingBuilder {
    type Output = Paging;

    fn build(self) -> Paging {
        Paging::from_skip_take(self.skip, self.take)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchParametersBuilder {
    filters: Vec<Filter>,
    sortings: Vec<Sorting>,
    paging: Option<Paging>,
}

impl SearchParametersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: impl Into<FilterInput>) -> Self {
        self.filters.push(filter.into().resolve());
        self
    }

    pub fn filter_with(
        self,
        f: impl FnOnce(FilterBuilder) -> FilterBuilder + Send + 'static,
    ) -> Self {
        self.filter(FilterInput::configure(f))
    }

    pub fn sorting(mut self, sorting: impl Into<SortingInput>) -> Self {
        self.sortings.push(sorting.into().resolve());
        self
    }

    pub fn sorting_with(
        self,
        f: impl FnOnce(SortingBuilder) -> SortingBuilder + Send + 'static,
    ) -> Self {
        self.sorting(SortingInput::configure(f))
    }

    pub fn paging(mut self, paging: impl Into<PagingInput>) -> Self {
        self.paging = Some(paging.into().resolve());
        self
    }

    pub fn paging_with(
        self,
        f: impl FnOnce(PagingBuilder) -> PagingBuilder + Send + 'static,
    ) -> Self {
        self.paging(PagingInput::configure(f))
    }

    pub fn no_paging(mut self) -> Self {
        self.paging = None;
        self
    }
}

impl Build for SearchParametersBuilder {
    type Output = SearchParameters;

    fn build(self) -> SearchParameters {
        SearchParameters::new(self.filters, self.sortings, self.paging)
    }
}

impl From<SearchParameters> for SearchParametersBuilder {
    fn from(params: SearchParameters) -> Self {
        Self {
            filters: params.filters().to_vec(),
            sortings: params.sortings().to_vec(),
            paging: params.paging().copied(),
        }
    }
}
