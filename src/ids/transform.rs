//! Bottom-up rewriting and read-only traversal of IDS trees.

use super::Ids;

/// Rebuild `ids` by applying `f` to every node in post-order.
///
/// Children are fully rewritten before `f` sees their parent, so `f` always
/// observes already-rewritten operands. Leaves are passed to `f` as well.
pub fn transform<F>(ids: Ids, mut f: F) -> Ids
where
    F: FnMut(Ids) -> Ids,
{
    ids.transform(&mut f)
}

impl Ids {
    /// Post-order rewrite; see [`transform`].
    pub fn transform<F>(self, f: &mut F) -> Ids
    where
        F: FnMut(Ids) -> Ids,
    {
        let rebuilt = match self {
            Ids::Leaf(ch) => Ids::Leaf(ch),
            Ids::Binary(op, operands) => {
                let [first, second] = *operands;
                Ids::binary(op, first.transform(f), second.transform(f))
            }
            Ids::Ternary(op, operands) => {
                let [first, second, third] = *operands;
                Ids::ternary(
                    op,
                    first.transform(f),
                    second.transform(f),
                    third.transform(f),
                )
            }
        };
        f(rebuilt)
    }

    /// Leaf characters in left-to-right (serialized) order.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![self] }
    }
}

/// Iterator over the leaves of an IDS tree.
pub struct Leaves<'a> {
    stack: Vec<&'a Ids>,
}

impl Iterator for Leaves<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        while let Some(node) = self.stack.pop() {
            match node {
                Ids::Leaf(ch) => return Some(*ch),
                _ => self.stack.extend(node.operands().iter().rev()),
            }
        }
        None
    }
}
