use crate::domain::dictionary::FlatDictionary;
use url::{form_urlencoded, Url};

/// Encodes pairs as `application/x-www-form-urlencoded`, joined with `&`.
pub fn encode(dict: &FlatDictionary) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in dict.iter() {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

/// Decodes a query string into a flat dictionary. A leading `?` is skipped and
/// the last value wins when a key repeats.
pub fn decode(query: &str) -> FlatDictionary {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

/// Replaces the query of `base` with the encoded dictionary.
pub fn apply_to_url(base: &Url, dict: &FlatDictionary) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    if !dict.is_empty() {
        url.query_pairs_mut().extend_pairs(dict.iter());
    }
    url
}

pub fn from_url(url: &Url) -> FlatDictionary {
    url.query_pairs().into_owned().collect()
}
