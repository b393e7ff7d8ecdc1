use crate::domain::model::{Filter, Paging, SearchParameters, Sorting};
use crate::utils::error::{QueryError, Result};
use url::Url;

/// Opt-in strict checks. Decoding never calls these.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(QueryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(QueryError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(QueryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: i64, min_value: i64) -> Result<()> {
    if value < min_value {
        return Err(QueryError::ValidationError {
            message: format!("{} must be at least {}, got {}", field_name, min_value, value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(QueryError::ValidationError {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

impl Validate for Filter {
    fn validate(&self) -> Result<()> {
        if self.fields().is_empty() {
            return Err(QueryError::ValidationError {
                message: "filter must name at least one field".to_string(),
            });
        }
        for field in self.fields() {
            validate_non_empty_string("filter field", field)?;
        }
        if !self.operator().is_known() {
            return Err(QueryError::UnknownOperator {
                code: self.operator().to_string(),
            });
        }
        if !self.operator().is_unary() && self.value().is_none() {
            return Err(QueryError::ValidationError {
                message: format!(
                    "operator '{}' on {} requires a value",
                    self.operator(),
                    self.fields().join(",")
                ),
            });
        }
        Ok(())
    }
}

impl Validate for Sorting {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("sorting property", self.property())?;
        if !self.order().is_known() {
            return Err(QueryError::UnknownSortOrder {
                code: self.order().to_string(),
            });
        }
        Ok(())
    }
}

impl Validate for Paging {
    fn validate(&self) -> Result<()> {
        validate_positive_number("skip", self.skip(), 0)?;
        validate_positive_number("take", self.take(), 1)
    }
}

impl Validate for SearchParameters {
    fn validate(&self) -> Result<()> {
        for filter in self.filters() {
            filter.validate()?;
        }
        for sorting in self.sortings() {
            sorting.validate()?;
        }
        if let Some(paging) = self.paging() {
            paging.validate()?;
        }
        Ok(())
    }
}
