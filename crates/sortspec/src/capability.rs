use crate::{config::ResourceSortConfig, error::SortError};
use std::collections::BTreeSet;

///
/// Capability
///
/// How the query target satisfies one sort field: a registered custom
/// ordering handler, or a physical column.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Capability {
    Handler,
    Column,
}

impl Capability {
    /// Stable human-readable label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Handler => "handler",
            Self::Column => "column",
        }
    }
}

///
/// SortCapabilities
///
/// Explicit, enumerable table mapping field names to capabilities, owned by
/// the query-target collaborator. A handler registered under the same name
/// as a column shadows the column, matching the dispatch order of
/// resolution.
///
/// Built once alongside the resource configuration and read-only afterwards.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SortCapabilities {
    handlers: BTreeSet<String>,
    columns: BTreeSet<String>,
}

impl SortCapabilities {
    /// Create an empty capability table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            handlers: BTreeSet::new(),
            columns: BTreeSet::new(),
        }
    }

    /// Register one physical column.
    #[must_use]
    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.columns.insert(name.into());
        self
    }

    /// Register several physical columns.
    #[must_use]
    pub fn columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns.extend(names.into_iter().map(Into::into));
        self
    }

    /// Register one named ordering handler.
    #[must_use]
    pub fn handler(mut self, name: impl Into<String>) -> Self {
        self.handlers.insert(name.into());
        self
    }

    /// Look up the capability for a field; handlers shadow columns.
    #[must_use]
    pub fn lookup(&self, field: &str) -> Option<Capability> {
        if self.handlers.contains(field) {
            Some(Capability::Handler)
        } else if self.columns.contains(field) {
            Some(Capability::Column)
        } else {
            None
        }
    }

    /// Startup-time consistency check against a resource configuration.
    ///
    /// Every allow-listed field and every default-ordering field must map to
    /// a handler or a column; a field that maps to neither would otherwise
    /// surface as a per-request `UnresolvableSortField` failure.
    pub fn verify(&self, config: &ResourceSortConfig) -> Result<(), SortError> {
        let declared = config
            .allowed()
            .iter()
            .map(String::as_str)
            .chain(config.default_order().iter().map(|f| f.field.as_str()));

        for field in declared {
            if self.lookup(field).is_none() {
                return Err(SortError::UnresolvableSortField {
                    field: field.to_string(),
                });
            }
        }

        Ok(())
    }
}
