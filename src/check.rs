//! The debug-only invariant checker (spec §4.7, §6, §8): a pure predicate
//! over the whole tree. Intended for tests, not for production call sites.

use std::ptr::NonNull;

use crate::cmp::LessThan;
use crate::links::Linked;

/// Validates the subtree rooted at `node`, whose actual parent is
/// `parent`. Returns the subtree's size if every invariant holds,
/// `None` otherwise.
pub(crate) unsafe fn check_node<N: Linked, A, C: LessThan<N, A>>(
    arg: &A,
    node: NonNull<N>,
    parent: Option<NonNull<N>>,
) -> Option<u64> {
    let links = node.as_ref().links();
    if links.parent != parent {
        return None; // back-pointer invariant
    }
    if let Some(p) = parent {
        // order invariant: ¬ less(n, n.parent)
        if C::less(arg, node.as_ref(), p.as_ref()) {
            return None;
        }
    }

    let left = links.left;
    let right = links.right;

    if left.is_none() && right.is_some() {
        return None; // a right child without a left child is never complete
    }
    if left.is_some() && left == right {
        return None; // corrupted: same node linked as both children
    }

    let left_size = match left {
        Some(l) => check_node::<N, A, C>(arg, l, Some(node))?,
        None => 0,
    };
    let right_size = match right {
        Some(r) => check_node::<N, A, C>(arg, r, Some(node))?,
        None => 0,
    };

    if left.is_some() && right.is_none() && left_size != 1 {
        return None; // a lone left child must be the bottom-front leaf
    }

    if left.is_some() && right.is_some() {
        let lf = (left_size + 1).is_power_of_two();
        let rf = (right_size + 1).is_power_of_two();
        if !(lf || rf) {
            return None; // shape invariant: at least one child must be perfect
        }
        if lf && rf && !(left_size == right_size || left_size == 2 * right_size + 1) {
            return None; // both perfect: sizes must match or left exactly one level taller
        }
    }

    let size = 1 + left_size + right_size;
    if size != links.size {
        return None; // size invariant
    }

    Some(size)
}
