use crate::direction::Direction;
use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};

///
/// SortField
///
/// One requested ordering key: a symbolic field name plus a direction.
/// Immutable once parsed.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SortField {
    pub field: String,
    pub direction: Direction,
}

impl SortField {
    /// Construct a sort field with an explicit direction.
    #[must_use]
    pub fn new(field: impl Into<String>, direction: Direction) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Construct an ascending sort field.
    #[must_use]
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, Direction::Asc)
    }

    /// Construct a descending sort field.
    #[must_use]
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, Direction::Desc)
    }
}

///
/// SortSpec
///
/// Ordered sequence of sort fields; insertion order is the tie-break
/// precedence for multi-key ordering. Field names are unique within a spec:
/// pushing a name already present is a no-op, so the FIRST occurrence of a
/// field always wins.
///
/// `SortSpec` does not expose `DerefMut`; mutation goes through `push` to
/// preserve the uniqueness invariant.
///

#[repr(transparent)]
#[derive(Clone, Debug, Default, Deref, Eq, IntoIterator, PartialEq, Serialize)]
#[into_iterator(owned, ref)]
#[serde(transparent)]
pub struct SortSpec(Vec<SortField>);

// Deserialization must route through the first-wins dedup; a derived impl
// would fill the inner vector directly and admit duplicate field names.
impl<'de> Deserialize<'de> for SortSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let fields = Vec::<SortField>::deserialize(deserializer)?;

        Ok(Self::from_fields(fields))
    }
}

impl SortSpec {
    /// Create an empty sort spec.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a spec from fields, keeping the first occurrence of each name.
    #[must_use]
    pub fn from_fields<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = SortField>,
    {
        let mut spec = Self::new();
        for field in fields {
            spec.push(field);
        }

        spec
    }

    /// Append a field; ignored when the name is already present.
    pub fn push(&mut self, field: SortField) {
        if !self.contains_field(&field.field) {
            self.0.push(field);
        }
    }

    /// Return true when a field with this name is present.
    #[must_use]
    pub fn contains_field(&self, name: &str) -> bool {
        self.0.iter().any(|f| f.field == name)
    }

    /// Return the number of sort keys.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the spec carries no sort keys.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return an iterator over the sort fields in precedence order.
    pub fn iter(&self) -> std::slice::Iter<'_, SortField> {
        self.0.iter()
    }
}

impl FromIterator<SortField> for SortSpec {
    fn from_iter<I: IntoIterator<Item = SortField>>(iter: I) -> Self {
        Self::from_fields(iter)
    }
}
