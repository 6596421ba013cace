//! Component reduction.
//!
//! Rewrites decompositions so that any sub-tree spelling out a known
//! component is replaced by that component's character. Ternary operators
//! are matched up to associativity: `⿲ABC` also stands for `⿰A⿰BC` and
//! `⿰⿰ABC`, and likewise `⿳` for `⿱`.


use crate::ids::Ids;
use crate::table::IdsTable;
use crate::trace::{debug, debug_span, info};

/// The two binary restatements of a ternary node: `(A, (B, C))` and
/// `((A, B), C)`. `None` for leaves and binary nodes.
pub fn ternary_equivalents(ids: &Ids) -> Option<[Ids; 2]> {
    let Ids::Ternary(op, operands) = ids else {
        return None;
    };
    let binary = op.binary();
    let [a, b, c] = &**operands;
    Some([
        Ids::binary(binary, a.clone(), Ids::binary(binary, b.clone(), c.clone())),
        Ids::binary(binary, Ids::binary(binary, a.clone(), b.clone()), c.clone()),
    ])
}

/// Replace every sub-tree of `ids` equal to `target` with `component`.
///
/// Returns the rewritten tree and whether any replacement happened. An
/// unmatched ternary node is retried through its two binary restatements;
/// the first restatement that yields a replacement takes its place.
/// A leaf on either side means there is nothing to match.
pub fn optimize(ids: Ids, target: &Ids, component: char) -> (Ids, bool) {
    if ids.is_leaf() || target.is_leaf() {
        return (ids, false);
    }

    let mut optimized = false;
    let rewritten = ids.transform(&mut |node: Ids| {
        if node.is_leaf() {
            return node;
        }
        if node == *target {
            optimized = true;
            return Ids::Leaf(component);
        }
        if let Some(equivalents) = ternary_equivalents(&node) {
            for equivalent in equivalents {
                let (candidate, hit) = optimize(equivalent, target, component);
                if hit {
                    optimized = true;
                    return candidate;
                }
            }
        }
        node
    });
    (rewritten, optimized)
}

/// Component decompositions available for substitution, in file order, with
/// every ternary decomposition followed by its two binary restatements.
///
/// Components whose decomposition is a bare leaf are left out.
#[derive(Clone, Debug, Default)]
pub struct ComponentSet {
    entries: Vec<(char, Ids)>,
}

impl ComponentSet {
    pub fn new(components: &IdsTable) -> Self {
        Self::from_entries(components.iter().map(|(ch, ids)| (*ch, ids.clone())))
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (char, Ids)>) -> Self {
        let mut expanded = Vec::new();
        for (component, ids) in entries {
            if ids.is_leaf() {
                continue;
            }
            let equivalents = ternary_equivalents(&ids);
            expanded.push((component, ids));
            if let Some(equivalents) = equivalents {
                for equivalent in equivalents {
                    expanded.push((component, equivalent));
                }
            }
        }
        Self { entries: expanded }
    }

    pub fn iter(&self) -> impl Iterator<Item = &(char, Ids)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Counts from one reduction run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReduceSummary {
    /// Entries whose value was a node and so were tried against components.
    pub examined: usize,
    /// Entries whose value changed.
    pub rewritten: usize,
    /// Successful (entry, component decomposition) rewrites.
    pub replacements: usize,
}

/// Reduce every entry of `table` against `components`, in place.
///
/// Entries are visited in table order and components in set order. Each
/// successful component rewrites the entry's current value, so later
/// components see earlier replacements. Leaf entries are skipped and no
/// entry is ever removed.
pub fn reduce(table: &mut IdsTable, components: &ComponentSet) -> ReduceSummary {
    let _span = debug_span!("reduce", entries = table.len(), components = components.len()).entered();

    let mut summary = ReduceSummary::default();
    for (key, value) in table.iter_mut() {
        if value.is_leaf() {
            continue;
        }
        summary.examined += 1;

        let mut changed = false;
        for (component, decomposition) in components.iter() {
            let current = std::mem::replace(value, Ids::Leaf(*key));
            let (next, hit) = optimize(current, decomposition, *component);
            *value = next;
            if hit {
                debug!(
                    character = %key,
                    component = %component,
                    decomposition = %decomposition,
                    result = %value,
                    "replaced component"
                );
                summary.replacements += 1;
                changed = true;
            }
        }
        if changed {
            summary.rewritten += 1;
        }
    }

    info!(
        examined = summary.examined,
        rewritten = summary.rewritten,
        replacements = summary.replacements,
        "reduction finished"
    );
    summary
}
