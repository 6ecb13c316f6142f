//! Partition the flat column list into display, group and order buckets
//! and resolve alias stand-ins.
//!
//! The flat list holds every column the upstream resolver needed to compute
//! the result: output columns in output-schema order, interleaved with alias
//! stand-ins and group/order helper columns. The planner wants only the
//! output columns, in the same order, with grouping and ordering split out.

use std::collections::BTreeMap;

use query_engine_ir::ir::{ColumnHandle, ColumnKind, Columns, GroupingSet};

/// The classifier's output buckets. Handles, not descriptors: the input
/// arena is never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedColumns {
    /// Output columns (possibly still containing stand-ins), in
    /// output-schema order. Resolve with [`resolve_display`].
    pub display: Vec<ColumnHandle>,
    pub group: Vec<ColumnHandle>,
    pub order: Vec<ColumnHandle>,
    /// Aliases that stand-ins sank onto their targets. At serialization
    /// these win over a descriptor's own alias.
    pub aliases: BTreeMap<ColumnHandle, String>,
}

/// Classify every descriptor into a bucket and propagate stand-in aliases
/// onto their targets. Pure; malformed input is a programming error
/// upstream, not a runtime condition.
///
/// Propagation and bucketing share one declaration-order pass: an alias a
/// stand-in pushed onto a later descriptor is already visible when that
/// descriptor is bucketed. The bucket rules, in order:
/// membership in the grouping set, the order-by helper kind, then
/// everything that is not a stand-in — except that aliased aggregate
/// stand-ins stay in the display bucket to keep the output schema order.
pub fn classify(columns: &Columns, grouping: Option<&GroupingSet>) -> ClassifiedColumns {
    let mut classified = ClassifiedColumns {
        display: Vec::new(),
        group: Vec::new(),
        order: Vec::new(),
        aliases: BTreeMap::new(),
    };

    for (handle, descriptor) in columns.iter() {
        let alias = classified
            .aliases
            .get(&handle)
            .cloned()
            .or_else(|| descriptor.alias.clone());

        // A stand-in sinks its alias onto the descriptor it names, unless
        // its payload already names a real column. Later stand-ins
        // overwrite earlier ones.
        if let (Some(alias), ColumnKind::StandIn { target }) = (&alias, descriptor.kind) {
            if columns.contains(target) && !descriptor.expression.names_a_column() {
                classified.aliases.insert(target, alias.clone());
            }
        }

        if grouping.is_some_and(|grouping| grouping.contains(handle)) {
            classified.group.push(handle);
        } else if matches!(descriptor.kind, ColumnKind::OrderBy { .. }) {
            classified.order.push(handle);
        } else if !matches!(descriptor.kind, ColumnKind::StandIn { .. })
            || (descriptor.is_aggregate && alias.is_some())
        {
            classified.display.push(handle);
        }
        // remaining stand-ins only existed to carry an alias; they were
        // consumed by the propagation above
    }

    classified
}

/// Replace each stand-in in the display bucket by the entry it delegates
/// to, preserving the stand-in's position.
///
/// For each stand-in, scan forward (never backward) for the first
/// not-yet-consumed non-stand-in entry whose handle equals the stand-in's
/// target; serialize that entry in the stand-in's place and skip it when
/// its own position is reached. A stand-in with no match contributes
/// nothing. This forward-only, first-match, consume-once rule is what keeps
/// the output schema order correct when several aliases name the same
/// underlying expression.
pub fn resolve_display(columns: &Columns, display: &[ColumnHandle]) -> Vec<ColumnHandle> {
    let mut consumed = vec![false; display.len()];
    let mut resolved = Vec::with_capacity(display.len());

    for position in 0..display.len() {
        if consumed[position] {
            continue;
        }
        let handle = display[position];
        let ColumnKind::StandIn { target } = columns.get(handle).kind else {
            resolved.push(handle);
            continue;
        };
        for later in position + 1..display.len() {
            if consumed[later] {
                continue;
            }
            let candidate = display[later];
            if candidate == target
                && !matches!(columns.get(candidate).kind, ColumnKind::StandIn { .. })
            {
                consumed[later] = true;
                resolved.push(candidate);
                break;
            }
        }
    }

    resolved
}
