use crate::{
    direction::Direction,
    spec::{SortField, SortSpec},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

///
/// ResourceSortConfig
///
/// Per-resource sort configuration: the allow-list of field names a client
/// may sort by, plus the default ordering applied when the client supplies
/// none. Built once at resource-registration time and read-only afterwards,
/// so it can be shared freely across concurrent request handling.
///
/// The default ordering is trusted configuration set by the same authority
/// that sets the allow-list; it is not validated against the allow-list.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ResourceSortConfig {
    allowed: BTreeSet<String>,
    default_order: SortSpec,
}

impl ResourceSortConfig {
    /// Start building a resource sort configuration.
    #[must_use]
    pub fn builder() -> ResourceSortConfigBuilder {
        ResourceSortConfigBuilder::default()
    }

    /// Return true when clients may sort by this field.
    #[must_use]
    pub fn allows(&self, field: &str) -> bool {
        self.allowed.contains(field)
    }

    /// Borrow the allow-list.
    #[must_use]
    pub const fn allowed(&self) -> &BTreeSet<String> {
        &self.allowed
    }

    /// Borrow the default ordering.
    #[must_use]
    pub const fn default_order(&self) -> &SortSpec {
        &self.default_order
    }
}

///
/// ResourceSortConfigBuilder
///
/// Declarative registration surface for resource authors.
///

#[derive(Debug, Default)]
pub struct ResourceSortConfigBuilder {
    allowed: BTreeSet<String>,
    default_order: SortSpec,
}

impl ResourceSortConfigBuilder {
    /// Declare one sortable field.
    #[must_use]
    pub fn sortable_field(mut self, name: impl Into<String>) -> Self {
        self.allowed.insert(name.into());
        self
    }

    /// Declare several sortable fields.
    #[must_use]
    pub fn sortable_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed.extend(names.into_iter().map(Into::into));
        self
    }

    /// Append one key to the default ordering (order-preserving).
    #[must_use]
    pub fn default_sort(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.default_order.push(SortField::new(field, direction));
        self
    }

    /// Finalize the configuration.
    #[must_use]
    pub fn build(self) -> ResourceSortConfig {
        ResourceSortConfig {
            allowed: self.allowed,
            default_order: self.default_order,
        }
    }
}

///
/// SortOverride
///
/// Per-call replacement for the allow-list and/or the default ordering.
/// Takes precedence over the resource configuration for that single call
/// only; the resource configuration is never mutated.
///
/// An override built from an empty allow-list or empty default collapses to
/// "absent", so an accidental empty override falls back to the resource
/// configuration instead of locking out all sorting.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SortOverride {
    allowed: Option<BTreeSet<String>>,
    default_order: Option<SortSpec>,
}

impl SortOverride {
    /// Override with no effect; resource configuration applies unchanged.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            allowed: None,
            default_order: None,
        }
    }

    /// Replace the allow-list for this call.
    #[must_use]
    pub fn allowed<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        self.allowed = if set.is_empty() { None } else { Some(set) };
        self
    }

    /// Replace the default ordering for this call.
    #[must_use]
    pub fn default_order(mut self, spec: SortSpec) -> Self {
        self.default_order = if spec.is_empty() { None } else { Some(spec) };
        self
    }

    /// Effective allow-list for one call.
    #[must_use]
    pub fn allowed_or<'a>(&'a self, config: &'a ResourceSortConfig) -> &'a BTreeSet<String> {
        self.allowed.as_ref().unwrap_or_else(|| config.allowed())
    }

    /// Effective default ordering for one call.
    #[must_use]
    pub fn default_or<'a>(&'a self, config: &'a ResourceSortConfig) -> &'a SortSpec {
        self.default_order
            .as_ref()
            .unwrap_or_else(|| config.default_order())
    }
}
