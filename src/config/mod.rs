#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::model::{Filter, Paging, SearchParameters, Sorting};
use crate::utils::error::{QueryError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;
use url::Url;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern"));

/// A search request described in a TOML or JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    pub base_url: Option<String>,
    #[serde(default)]
    pub filters: Vec<Filter>,
    #[serde(default)]
    pub sortings: Vec<Sorting>,
    pub paging: Option<PagingConfig>,
}

/// Paging given either as `skip`/`take` or as `page`/`page_size`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PagingConfig {
    pub skip: Option<i64>,
    pub take: Option<i64>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl PagingConfig {
    pub fn to_paging(&self) -> Result<Paging> {
        match (self.skip, self.take, self.page, self.page_size) {
            (None, None, Some(page), Some(size)) => Ok(Paging::from_page(page, size)),
            (Some(skip), Some(take), None, None) => Ok(Paging::from_skip_take(skip, take)),
            (None, None, None, Some(size)) => Ok(Paging::from_page(1, size)),
            _ => Err(QueryError::InvalidConfigValueError {
                field: "paging".to_string(),
                value: format!("{:?}", self),
                reason: "Set either skip and take, or page_size with an optional page".to_string(),
            }),
        }
    }
}

impl SearchConfig {
    /// Loads a `.json` file as JSON and anything else as TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        tracing::debug!("Loaded search config from {}", path.display());

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_toml_str(&content),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| QueryError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(serde_json::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unset variables are kept
    /// literally.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn base_url(&self) -> Result<Option<Url>> {
        self.base_url
            .as_deref()
            .map(Url::parse)
            .transpose()
            .map_err(QueryError::from)
    }

    pub fn to_search_parameters(&self) -> Result<SearchParameters> {
        let paging = self.paging.as_ref().map(PagingConfig::to_paging).transpose()?;
        Ok(SearchParameters::new(
            self.filters.clone(),
            self.sortings.clone(),
            paging,
        ))
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base_url {
            validate_url("base_url", base_url)?;
        }
        if let Some(page) = self.paging.as_ref().and_then(|p| p.page) {
            validate_positive_number("paging.page", page, 1)?;
        }
        self.to_search_parameters()?.validate()
    }
}
