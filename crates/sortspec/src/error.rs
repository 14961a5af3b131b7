use thiserror::Error as ThisError;

///
/// SortError
///
/// Resolution failures for client-supplied sort requests.
///
/// `InvalidSortAttribute` is a client error: the transport wrapping this
/// crate should surface it as a request rejection (4xx-class) carrying the
/// offending field name. `UnresolvableSortField` is a configuration bug —
/// the allow-list names a field with neither a registered handler nor a
/// physical column — and is detectable at startup via
/// [`SortCapabilities::verify`](crate::capability::SortCapabilities::verify).
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SortError {
    /// Client requested a sort field outside the declared allow-list.
    #[error("{field} is not valid as sort attribute")]
    InvalidSortAttribute { field: String },

    /// Allow-listed field has neither a handler nor a column on the target.
    #[error("sort field '{field}' matches neither a handler nor a column on the query target")]
    UnresolvableSortField { field: String },
}

impl SortError {
    /// Name of the field that caused the failure.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidSortAttribute { field } | Self::UnresolvableSortField { field } => field,
        }
    }
}
