//! Query-string handling for page parameters.
//!
//! The gallery is addressed with `?folder=<id|all>` and quiz pages with
//! `?kc=<manifest>&title=<title>`. Links are form-urlencoded so titles with
//! spaces or ampersands survive the round trip.

use url::form_urlencoded;

pub const DETAIL_PAGE: &str = "quiz.html";

/// Decoded query parameters, in their original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Accepts a bare query, one with a leading `?`, or a full `page?query` link.
    pub fn parse(raw: &str) -> Self {
        let query = match raw.split_once('?') {
            Some((_, query)) => query,
            None => raw,
        };
        let pairs = form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        QueryParams { pairs }
    }

    /// First value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Link to the quiz page for one catalog entry.
pub fn detail_link(file: &str, title: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("kc", file)
        .append_pair("title", title)
        .finish();
    format!("{DETAIL_PAGE}?{query}")
}
