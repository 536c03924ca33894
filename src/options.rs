//! Composable mutations applied to an outgoing request.
//!
//! Every chain method on a call builder boils down to one or more
//! [`RequestOption`]s appended to the call. Options are applied strictly in
//! the order they were accumulated, so a later "set" under the same query
//! parameter name replaces an earlier one while "add" keeps stacking values
//! under the name. No validity checks happen here; the API decides whether a
//! parameter combination is legal.

/// A single, order-sensitive mutation of an outgoing request.
///
/// # Example
///
/// ```
/// use twitch_helix::options::RequestOption;
///
/// let first = RequestOption::set_query("first", "50");
/// let id = RequestOption::add_query("broadcaster_id", "141981764");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOption {
    /// Replace every value of the named query parameter with one value.
    SetQuery {
        /// Query parameter name.
        name: String,
        /// Query parameter value.
        value: String,
    },
    /// Append another value under the named query parameter.
    AddQuery {
        /// Query parameter name.
        name: String,
        /// Query parameter value.
        value: String,
    },
    /// Replace the named request header with one value.
    SetHeader {
        /// Header name.
        name: String,
        /// Header value.
        value: String,
    },
}

impl RequestOption {
    /// Creates an option that sets a query parameter, replacing any values
    /// previously accumulated under the same name.
    pub fn set_query(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::SetQuery {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates an option that appends a repeated query parameter, used for
    /// multi-value filters such as lists of broadcaster IDs.
    pub fn add_query(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::AddQuery {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates an option that sets a request header.
    pub fn set_header(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::SetHeader {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Accumulator the options are folded into before the request is built.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct RequestParts {
    /// Query pairs in application order. May contain repeated names.
    pub(crate) query: Vec<(String, String)>,
    /// Header pairs, one value per name.
    pub(crate) headers: Vec<(String, String)>,
}

impl RequestParts {
    /// Folds a sequence of options into request parts, in sequence order.
    pub(crate) fn from_options<'a, I>(options: I) -> Self
    where
        I: IntoIterator<Item = &'a RequestOption>,
    {
        let mut parts = Self::default();
        for opt in options {
            parts.apply(opt);
        }
        parts
    }

    /// Applies one option.
    pub(crate) fn apply(&mut self, option: &RequestOption) {
        match option {
            RequestOption::SetQuery { name, value } => {
                self.query.retain(|(n, _)| n != name);
                self.query.push((name.clone(), value.clone()));
            }
            RequestOption::AddQuery { name, value } => {
                self.query.push((name.clone(), value.clone()));
            }
            RequestOption::SetHeader { name, value } => {
                self.headers.retain(|(n, _)| n != name);
                self.headers.push((name.clone(), value.clone()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RequestOption, RequestParts};

    fn pairs(parts: &RequestParts) -> Vec<(&str, &str)> {
        parts
            .query
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn later_set_replaces_earlier_value() {
        let opts = [
            RequestOption::set_query("first", "20"),
            RequestOption::set_query("first", "50"),
        ];
        let parts = RequestParts::from_options(&opts);
        assert_eq!(pairs(&parts), [("first", "50")]);
    }

    #[test]
    fn add_accumulates_in_application_order() {
        let opts = [
            RequestOption::add_query("broadcaster_id", "1"),
            RequestOption::add_query("broadcaster_id", "2"),
            RequestOption::add_query("broadcaster_id", "3"),
        ];
        let parts = RequestParts::from_options(&opts);
        assert_eq!(
            pairs(&parts),
            [
                ("broadcaster_id", "1"),
                ("broadcaster_id", "2"),
                ("broadcaster_id", "3"),
            ]
        );
    }

    #[test]
    fn set_clears_accumulated_adds_under_the_same_name() {
        let opts = [
            RequestOption::add_query("broadcaster_id", "1"),
            RequestOption::add_query("broadcaster_id", "2"),
            RequestOption::set_query("broadcaster_id", "3"),
        ];
        let parts = RequestParts::from_options(&opts);
        assert_eq!(pairs(&parts), [("broadcaster_id", "3")]);
    }

    #[test]
    fn set_leaves_other_names_untouched() {
        let opts = [
            RequestOption::set_query("user_id", "100"),
            RequestOption::set_query("first", "20"),
            RequestOption::set_query("first", "50"),
        ];
        let parts = RequestParts::from_options(&opts);
        assert_eq!(pairs(&parts), [("user_id", "100"), ("first", "50")]);
    }

    #[test]
    fn header_set_replaces_previous_value() {
        let opts = [
            RequestOption::set_header("Accept", "text/plain"),
            RequestOption::set_header("Accept", "application/json"),
        ];
        let parts = RequestParts::from_options(&opts);
        assert_eq!(
            parts.headers,
            [("Accept".to_string(), "application/json".to_string())]
        );
    }
}
