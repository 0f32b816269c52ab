//! The swap kernel (spec §4.4): the only place that mutates cross-links.
//!
//! `swap_parent_and_son` exchanges two directly-connected nodes in place.
//! Preconditions: `s.parent == Some(p)` and `p`'s left or right child is
//! `s`. Postconditions: `s` takes `p`'s former position (same parent-side
//! link, same *other* child), `p` becomes `s`'s child on the side `s`
//! formerly occupied under `p`, `p` inherits `s`'s former children, and the
//! two nodes' `size` fields are exchanged rather than recomputed — the
//! positions carry the sizes, and positions are what moved.

use std::ptr::NonNull;

use crate::links::Linked;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Swaps `p` and its child `s`, preserving every cross-link a caller could
/// observe. Returns nothing: both `p` and `s` remain valid handles, just at
/// each other's former positions.
pub(crate) unsafe fn swap_parent_and_son<N: Linked>(mut p: NonNull<N>, mut s: NonNull<N>) {
    debug_assert_eq!(
        s.as_ref().links().parent,
        Some(p),
        "swap_parent_and_son: s is not a child of p"
    );

    let side = if p.as_ref().links().left == Some(s) {
        Side::Left
    } else {
        debug_assert_eq!(
            p.as_ref().links().right,
            Some(s),
            "swap_parent_and_son: s is not a child of p"
        );
        Side::Right
    };

    let grandparent = p.as_ref().links().parent;
    let p_other = match side {
        Side::Left => p.as_ref().links().right,
        Side::Right => p.as_ref().links().left,
    };
    let s_left = s.as_ref().links().left;
    let s_right = s.as_ref().links().right;

    // p inherits s's former children.
    p.as_mut().links_mut().left = s_left;
    p.as_mut().links_mut().right = s_right;
    if let Some(mut l) = s_left {
        l.as_mut().links_mut().parent = Some(p);
    }
    if let Some(mut r) = s_right {
        r.as_mut().links_mut().parent = Some(p);
    }

    // s takes p's former position: same other-side child, p fills the slot
    // s itself used to occupy.
    match side {
        Side::Left => {
            s.as_mut().links_mut().left = Some(p);
            s.as_mut().links_mut().right = p_other;
        }
        Side::Right => {
            s.as_mut().links_mut().right = Some(p);
            s.as_mut().links_mut().left = p_other;
        }
    }
    if let Some(mut other) = p_other {
        other.as_mut().links_mut().parent = Some(s);
    }
    p.as_mut().links_mut().parent = Some(s);
    s.as_mut().links_mut().parent = grandparent;

    if let Some(mut g) = grandparent {
        if g.as_ref().links().left == Some(p) {
            g.as_mut().links_mut().left = Some(s);
        } else {
            debug_assert_eq!(g.as_ref().links().right, Some(p));
            g.as_mut().links_mut().right = Some(s);
        }
    }

    // positions carry the sizes.
    let p_size = p.as_ref().links().size;
    let s_size = s.as_ref().links().size;
    p.as_mut().links_mut().size = s_size;
    s.as_mut().links_mut().size = p_size;
}
