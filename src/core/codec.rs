//! Wire mappings for the leaf types: [`Filter`], [`Sorting`] and [`Paging`].

use crate::domain::dictionary::FlatDictionary;
use crate::domain::model::{Filter, FilterOperator, Paging, SortOrder, Sorting};
use crate::domain::ports::{FromDictionary, ToDictionary};

pub const FILTER_FIELDS: &str = "fields";
pub const FILTER_OPERATOR: &str = "op";
pub const FILTER_VALUE: &str = "val";
pub const FILTER_CASE: &str = "case";
pub const SORTING_PROPERTY: &str = "prop";
pub const SORTING_ORDER: &str = "ord";
pub const PAGING_SKIP: &str = "skip";
pub const PAGING_TAKE: &str = "take";

const FIELD_SEPARATOR: &str = ",";
const CASE_SENSITIVE_FLAG: &str = "true";

impl ToDictionary for Filter {
    fn to_dictionary(&self) -> FlatDictionary {
        let mut dict = FlatDictionary::new();
        dict.insert(FILTER_FIELDS, self.fields().join(FIELD_SEPARATOR));
        dict.insert(FILTER_OPERATOR, self.operator().as_str());
        if let Some(value) = self.value() {
            dict.insert(FILTER_VALUE, value);
        }
        // false is expressed by absence, never as "false"
        if self.case_sensitive() {
            dict.insert(FILTER_CASE, CASE_SENSITIVE_FLAG);
        }
        dict
    }
}

impl FromDictionary for Filter {
    fn from_dictionary(dict: &FlatDictionary) -> Self {
        let fields: Vec<String> = dict
            .get(FILTER_FIELDS)
            .map(|joined| joined.split(FIELD_SEPARATOR).map(str::to_string).collect())
            .unwrap_or_default();

        let operator = dict
            .get(FILTER_OPERATOR)
            .map(FilterOperator::from_wire)
            .unwrap_or_default();
        if !operator.is_known() {
            tracing::debug!("Keeping unrecognised filter operator '{}'", operator);
        }

        let value = dict.get(FILTER_VALUE).map(str::to_string);
        let case_sensitive = dict.get(FILTER_CASE) == Some(CASE_SENSITIVE_FLAG);

        Filter::with_case_sensitive(fields, operator, value, case_sensitive)
    }
}

impl ToDictionary for Sorting {
    fn to_dictionary(&self) -> FlatDictionary {
        let mut dict = FlatDictionary::new();
        dict.insert(SORTING_PROPERTY, self.property());
        dict.insert(SORTING_ORDER, self.order().as_str());
        dict
    }
}

impl FromDictionary for Sorting {
    fn from_dictionary(dict: &FlatDictionary) -> Self {
        let property = dict.get(SORTING_PROPERTY).unwrap_or_default();
        let order = dict
            .get(SORTING_ORDER)
            .map(SortOrder::from_wire)
            .unwrap_or_default();
        if !order.is_known() {
            tracing::debug!("Keeping unrecognised sort order '{}'", order);
        }
        Sorting::new(property, order)
    }
}

impl ToDictionary for Paging {
    fn to_dictionary(&self) -> FlatDictionary {
        let mut dict = FlatDictionary::new();
        dict.insert(PAGING_SKIP, self.skip().to_string());
        dict.insert(PAGING_TAKE, self.take().to_string());
        dict
    }
}

impl Paging {
    /// All or nothing: `None` unless both `skip` and `take` parse.
    pub fn from_dictionary(dict: &FlatDictionary) -> Option<Paging> {
        let skip = dict.get(PAGING_SKIP)?.parse::<i64>().ok()?;
        let take = dict.get(PAGING_TAKE)?.parse::<i64>().ok()?;
        Some(Paging::from_skip_take(skip, take))
    }
}
