pub mod builder;
pub mod codec;
pub mod query_string;
pub mod search;

pub use crate::domain::dictionary::FlatDictionary;
pub use crate::domain::ports::{FromDictionary, ToDictionary};
pub use crate::utils::error::Result;
