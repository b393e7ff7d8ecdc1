//! The composite protocol: [`SearchParameters`] to and from the flat
//! dictionary, query strings and URLs.
//!
//! Children are re-keyed as `filters[i][<key>]` and `sortings[i][<key>]`;
//! paging keys stay unprefixed at the top level.

use crate::core::codec::{PAGING_SKIP, PAGING_TAKE};
use crate::core::query_string;
use crate::domain::dictionary::FlatDictionary;
use crate::domain::model::{Paging, SearchParameters};
use crate::domain::ports::{FromDictionary, ToDictionary};
use regex::Regex;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use url::Url;

pub const FILTERS_PREFIX: &str = "filters";
pub const SORTINGS_PREFIX: &str = "sortings";

static INDEXED_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(filters|sortings)\[(\d+)\]\[([^\[\]]+)\]$").expect("indexed key pattern")
});

#[derive(Debug, PartialEq, Eq)]
enum KeyKind<'a> {
    Filter(usize, &'a str),
    Sorting(usize, &'a str),
    Paging,
    Unknown,
}

fn classify(key: &str) -> KeyKind<'_> {
    if key == PAGING_SKIP || key == PAGING_TAKE {
        return KeyKind::Paging;
    }

    let Some(caps) = INDEXED_KEY.captures(key) else {
        return KeyKind::Unknown;
    };
    // Digits that overflow usize cannot address a position.
    let Ok(index) = caps[2].parse::<usize>() else {
        return KeyKind::Unknown;
    };
    let Some(prop) = caps.get(3).map(|m| m.as_str()) else {
        return KeyKind::Unknown;
    };

    match &caps[1] {
        FILTERS_PREFIX => KeyKind::Filter(index, prop),
        _ => KeyKind::Sorting(index, prop),
    }
}

fn decode_indexed<T: FromDictionary>(sections: &BTreeMap<usize, FlatDictionary>) -> Vec<T> {
    sections.values().map(T::from_dictionary).collect()
}

impl ToDictionary for SearchParameters {
    fn to_dictionary(&self) -> FlatDictionary {
        let mut dict = FlatDictionary::new();

        for (index, filter) in self.filters().iter().enumerate() {
            dict.extend_indexed(FILTERS_PREFIX, index, filter.to_dictionary());
        }

        for (index, sorting) in self.unique_sortings().into_iter().enumerate() {
            dict.extend_indexed(SORTINGS_PREFIX, index, sorting.to_dictionary());
        }

        if let Some(paging) = self.paging() {
            dict.extend(paging.to_dictionary());
        }

        dict
    }
}

impl FromDictionary for SearchParameters {
    fn from_dictionary(dict: &FlatDictionary) -> Self {
        let mut filters: BTreeMap<usize, FlatDictionary> = BTreeMap::new();
        let mut sortings: BTreeMap<usize, FlatDictionary> = BTreeMap::new();
        let mut paging = FlatDictionary::new();

        for (key, value) in dict.iter() {
            match classify(key) {
                KeyKind::Filter(index, prop) => {
                    filters.entry(index).or_default().insert(prop, value);
                }
                KeyKind::Sorting(index, prop) => {
                    sortings.entry(index).or_default().insert(prop, value);
                }
                KeyKind::Paging => paging.insert(key, value),
                KeyKind::Unknown => tracing::trace!("Ignoring unrecognized key '{}'", key),
            }
        }

        let paging = if paging.is_empty() {
            None
        } else {
            let parsed = Paging::from_dictionary(&paging);
            if parsed.is_none() {
                tracing::debug!("Dropping incomplete or unparseable paging: {:?}", paging);
            }
            parsed
        };

        SearchParameters::new(decode_indexed(&filters), decode_indexed(&sortings), paging)
    }
}

impl SearchParameters {
    pub fn to_query_string(&self) -> String {
        query_string::encode(&self.to_dictionary())
    }

    /// `base` with its query replaced by these parameters.
    pub fn to_url(&self, base: &Url) -> Url {
        query_string::apply_to_url(base, &self.to_dictionary())
    }

    pub fn from_query_string(query: &str) -> Self {
        Self::from_dictionary(&query_string::decode(query))
    }

    pub fn from_url(url: &Url) -> Self {
        Self::from_dictionary(&query_string::from_url(url))
    }
}

impl fmt::Display for SearchParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

impl FromStr for SearchParameters {
    type Err = Infallible;

    fn from_str(query: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_query_string(query))
    }
}
