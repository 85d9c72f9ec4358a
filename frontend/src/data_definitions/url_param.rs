//! Route segments that carry a whole serializable value.
//!
//! The value is CBOR-encoded and then base64 (URL-safe) encoded so it fits in a
//! single path segment, e.g. the filter selection of the place search results page.

use std::{fmt::Display, str::FromStr};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use serde::{Deserialize, Serialize};


// Route params need Display, FromStr and Default
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl<T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut encoded = Vec::new();
        ciborium::into_writer(&self.0, &mut encoded).map_err(|_| std::fmt::Error)?;
        write!(f, "{}", URL_SAFE.encode(encoded))
    }
}

#[derive(Debug)]
pub enum UrlParamError {
    Base64(base64::DecodeError),
    Cbor(ciborium::de::Error<std::io::Error>),
}

impl Display for UrlParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base64(err) => write!(f, "url parameter is not base64: {}", err),
            Self::Cbor(err) => write!(f, "url parameter does not decode: {}", err),
        }
    }
}

impl<T: for<'de> Deserialize<'de>> FromStr for UrlParam<T> {
    type Err = UrlParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = URL_SAFE.decode(s.as_bytes()).map_err(UrlParamError::Base64)?;
        let value = ciborium::from_reader(bytes.as_slice()).map_err(UrlParamError::Cbor)?;
        Ok(UrlParam(value))
    }
}

#[cfg(test)]
mod tests {
    use common::{filter_selection::FilterSelection, search_category::SearchCategory};

    use super::*;

    #[test]
    fn filter_selection_survives_the_url() {
        let mut selection = FilterSelection::with_keyword("座談会");
        selection.set_options(SearchCategory::Facility, ["サークル", "塾"]);
        let segment = UrlParam(selection.clone()).to_string();
        assert!(!segment.contains('/'));
        let parsed: UrlParam<FilterSelection> = segment.parse().unwrap();
        assert_eq!(parsed.0, selection);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!("!!".parse::<UrlParam<FilterSelection>>(), Err(UrlParamError::Base64(_))));
    }
}
