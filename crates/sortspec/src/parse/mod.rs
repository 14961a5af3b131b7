//! Syntactic parsing of raw JSON:API sort strings.
//!
//! Parsing is purely lexical: no allow-list or capability knowledge. An
//! absent or empty input yields an empty [`SortSpec`], which signals "use
//! the resource default" downstream — it is not an error.

#[cfg(test)]
mod tests;

use crate::{
    direction::Direction,
    spec::{SortField, SortSpec},
};

/// Parse a comma-separated sort string into an ordered [`SortSpec`].
///
/// Each token is whitespace-squished; a leading `-` selects descending
/// order and is stripped from the field name. Squishing happens before the
/// prefix strip, so a `-` must immediately precede the field name —
/// whitespace between them survives as part of the name. Repeated field
/// names keep the FIRST occurrence (in either direction); later repeats
/// are dropped silently. Empty tokens are skipped.
#[must_use]
pub fn parse(raw: Option<&str>) -> SortSpec {
    let Some(raw) = raw else {
        return SortSpec::new();
    };

    let mut spec = SortSpec::new();
    for token in raw.split(',') {
        let token = squish(token);

        let (field, direction) = match token.strip_prefix('-') {
            Some(rest) => (rest, Direction::Desc),
            None => (token.as_str(), Direction::Asc),
        };

        if field.is_empty() {
            continue;
        }

        // push keeps the first occurrence on repeated names
        spec.push(SortField::new(field, direction));
    }

    spec
}

// Collapse interior whitespace runs to one space and trim both ends.
fn squish(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    for word in token.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }

    out
}
