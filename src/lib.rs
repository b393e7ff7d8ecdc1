pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use config::SearchConfig;
pub use crate::core::builder::{
    Build, FilterBuilder, FilterInput, Input, PagingBuilder, PagingInput, SearchParametersBuilder,
    SortingBuilder, SortingInput,
};
pub use domain::dictionary::FlatDictionary;
pub use domain::model::{
    Filter, FilterOperator, IntoFields, Paging, SearchParameters, SortOrder, Sorting,
};
pub use domain::ports::{FromDictionary, ToDictionary};
pub use utils::error::{QueryError, Result};
pub use utils::validation::Validate;
