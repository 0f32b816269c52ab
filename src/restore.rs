//! Order restoration (spec §4.5): drive the swap kernel along a path until
//! heap order is restored.

use std::ptr::NonNull;

use crate::links::Linked;
use crate::swap::swap_parent_and_son;

/// Repeatedly swaps `n` with its parent while `less(n, parent)` holds.
/// Terminates when `n` is root or not less than its parent. O(log n).
pub(crate) unsafe fn sift_up<N: Linked>(
    mut n: NonNull<N>,
    less: &mut impl FnMut(NonNull<N>, NonNull<N>) -> bool,
) {
    loop {
        let parent = n.as_ref().links().parent;
        match parent {
            Some(p) if less(n, p) => {
                swap_parent_and_son(p, n);
                // n is now at p's former position; loop re-reads its (new)
                // parent.
            }
            _ => return,
        }
    }
}

/// Sifts `n` down while it has a child smaller than itself. Nodes may have
/// only a left child (shape invariant); in that case at most one final
/// comparison-and-swap step is possible, and no further descent follows —
/// only the left child is ever compared in that branch.
pub(crate) unsafe fn sift_down<N: Linked>(
    mut n: NonNull<N>,
    less: &mut impl FnMut(NonNull<N>, NonNull<N>) -> bool,
) {
    loop {
        let (left, right) = {
            let links = n.as_ref().links();
            (links.left, links.right)
        };
        match (left, right) {
            (Some(l), Some(r)) => {
                let min_son = if less(l, r) { l } else { r };
                if less(min_son, n) {
                    swap_parent_and_son(n, min_son);
                    // n is now a child of min_son; continue from n's new
                    // position (its children changed too).
                } else {
                    return;
                }
            }
            (Some(l), None) => {
                if less(l, n) {
                    swap_parent_and_son(n, l);
                }
                return;
            }
            (None, Some(_)) => {
                unreachable!("shape invariant: a right child implies a left child");
            }
            (None, None) => return,
        }
    }
}

/// Restores order after an external mutation of `n`'s key, without knowing
/// the direction a priori: at most one of `sift_down`/`sift_up` does any
/// work for a single-node key change, so running both unconditionally
/// covers both directions.
pub(crate) unsafe fn update<N: Linked>(
    n: NonNull<N>,
    less: &mut impl FnMut(NonNull<N>, NonNull<N>) -> bool,
) {
    sift_down(n, less);
    sift_up(n, less);
}
