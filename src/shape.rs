//! Shape queries and shape navigation (spec §4.1, §4.2).

use std::ptr::NonNull;

use crate::links::{size_of, Linked};

/// True iff `subtree`'s size plus one is a power of two — the *perfect*
/// binary tree test (every leaf at the same depth), not just completeness.
///
/// ```
/// # use linked_heap::is_full;
/// assert!(is_full::<linked_heap::ValueNode<i32>>(None)); // empty subtree: 0+1 = 1 = 2^0
/// ```
pub fn is_full<N: Linked>(subtree: Option<NonNull<N>>) -> bool {
    (size_of(subtree) + 1).is_power_of_two()
}

/// Descends from `root` to the node that will receive the next insertion:
/// the first node (in the order spec §4.2 defines) with fewer than two
/// children.
pub(crate) unsafe fn first_not_full<N: Linked>(mut cur: NonNull<N>) -> NonNull<N> {
    loop {
        let (left, right) = {
            let links = cur.as_ref().links();
            (links.left, links.right)
        };
        cur = match (left, right) {
            (Some(l), Some(r)) => {
                let lf = is_full(Some(l));
                let rf = is_full(Some(r));
                debug_assert!(lf || rf, "shape invariant violated: neither child is full");
                if lf && rf {
                    if size_of(Some(l)) == size_of(Some(r)) {
                        l
                    } else {
                        r
                    }
                } else if lf {
                    r
                } else {
                    l
                }
            }
            _ => return cur,
        };
    }
}

/// Descends from `root` to the rightmost node on the deepest populated
/// level — the donor for `delete`/`pop`.
pub(crate) unsafe fn last<N: Linked>(mut cur: NonNull<N>) -> NonNull<N> {
    loop {
        let (left, right) = {
            let links = cur.as_ref().links();
            (links.left, links.right)
        };
        match right {
            None => return left.unwrap_or(cur),
            Some(r) => {
                let l = left.expect("shape invariant: a right child implies a left child");
                let lf = is_full(Some(l));
                let rf = is_full(Some(r));
                debug_assert!(lf || rf, "shape invariant violated: neither child is full");
                cur = if lf && rf {
                    if size_of(Some(l)) == size_of(Some(r)) {
                        r
                    } else {
                        l
                    }
                } else if lf {
                    r
                } else {
                    l
                };
            }
        }
    }
}
