//! Resolution of parsed sort specs against resource configuration.
//!
//! Ownership contract:
//! - `resolve` owns client-facing sort validation and emits `SortError`.
//! - Configuration consistency is checked up front by
//!   [`SortCapabilities::verify`](crate::capability::SortCapabilities::verify);
//!   a per-request `UnresolvableSortField` means that check was skipped.
//!
//! Resolution is all-or-nothing: either every key of the working spec
//! resolves to an instruction, or the call fails and nothing is applied.


use crate::{
    capability::{Capability, SortCapabilities},
    config::{ResourceSortConfig, SortOverride},
    direction::Direction,
    error::SortError,
    parse::parse,
    spec::SortSpec,
};
use derive_more::{Deref, IntoIterator};
use std::fmt;

///
/// OrderInstruction
///
/// One executor-facing ordering step. Instructions apply in sequence as
/// successive stable tie-break keys; the first instruction is the primary
/// sort key.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OrderInstruction {
    /// Delegate to the target's named ordering handler.
    Delegate { field: String, direction: Direction },

    /// Order by a physical column.
    Column { field: String, direction: Direction },
}

impl OrderInstruction {
    /// Name of the field this instruction orders by.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::Delegate { field, .. } | Self::Column { field, .. } => field,
        }
    }

    /// Direction this instruction applies.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        match self {
            Self::Delegate { direction, .. } | Self::Column { direction, .. } => *direction,
        }
    }
}

impl fmt::Display for OrderInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delegate { field, direction } => write!(f, "handler:{field} {direction}"),
            Self::Column { field, direction } => write!(f, "column:{field} {direction}"),
        }
    }
}

///
/// ResolvedOrder
///
/// Ordered instruction list produced by a successful resolution, handed to
/// the query-execution collaborator.
///

#[derive(Clone, Debug, Default, Deref, Eq, IntoIterator, PartialEq)]
#[into_iterator(owned, ref)]
pub struct ResolvedOrder(Vec<OrderInstruction>);

impl ResolvedOrder {
    /// Return the number of instructions.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no ordering applies.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return an iterator over the instructions in precedence order.
    pub fn iter(&self) -> std::slice::Iter<'_, OrderInstruction> {
        self.0.iter()
    }

    /// Apply the instructions to a target, in precedence order.
    pub fn apply_to<T: SortTarget>(&self, target: &mut T) {
        for instruction in &self.0 {
            match instruction {
                OrderInstruction::Delegate { field, direction } => {
                    target.delegate(field, *direction);
                }
                OrderInstruction::Column { field, direction } => {
                    target.apply_column(field, *direction);
                }
            }
        }
    }
}

///
/// SortTarget
///
/// Outbound contract with the query-execution collaborator. Calls arrive in
/// precedence order and must be applied as successive stable tie-break sort
/// keys (primary, secondary, ...).
///

pub trait SortTarget {
    /// Order by a physical column.
    fn apply_column(&mut self, field: &str, direction: Direction);

    /// Delegate to the named custom ordering handler.
    fn delegate(&mut self, field: &str, direction: Direction);
}

/// Resolve a parsed sort spec against resource configuration.
///
/// Client-supplied fields are validated against the effective allow-list
/// (override wins over resource configuration for this call only); the
/// first field outside it aborts with `InvalidSortAttribute`. An empty
/// parsed spec falls back to the effective default ordering, which is
/// trusted configuration and is not re-validated against the allow-list.
pub fn resolve(
    parsed: &SortSpec,
    config: &ResourceSortConfig,
    call_override: Option<&SortOverride>,
    capabilities: &SortCapabilities,
) -> Result<ResolvedOrder, SortError> {
    static NO_OVERRIDE: SortOverride = SortOverride::none();
    let call_override = call_override.unwrap_or(&NO_OVERRIDE);

    let allowed = call_override.allowed_or(config);
    for sort_field in parsed.iter() {
        if !allowed.contains(&sort_field.field) {
            return Err(SortError::InvalidSortAttribute {
                field: sort_field.field.clone(),
            });
        }
    }

    let working = if parsed.is_empty() {
        call_override.default_or(config)
    } else {
        parsed
    };

    let mut instructions = Vec::with_capacity(working.len());
    for sort_field in working.iter() {
        let instruction = match capabilities.lookup(&sort_field.field) {
            Some(Capability::Handler) => OrderInstruction::Delegate {
                field: sort_field.field.clone(),
                direction: sort_field.direction,
            },
            Some(Capability::Column) => OrderInstruction::Column {
                field: sort_field.field.clone(),
                direction: sort_field.direction,
            },
            None => {
                return Err(SortError::UnresolvableSortField {
                    field: sort_field.field.clone(),
                });
            }
        };

        instructions.push(instruction);
    }

    Ok(ResolvedOrder(instructions))
}

/// Parse and resolve a raw sort string in one call.
pub fn resolve_sort(
    raw: Option<&str>,
    config: &ResourceSortConfig,
    call_override: Option<&SortOverride>,
    capabilities: &SortCapabilities,
) -> Result<ResolvedOrder, SortError> {
    resolve(&parse(raw), config, call_override, capabilities)
}
