//! The public API (spec §4.6): `insert`, `pop`, `delete`, `update`, `size`,
//! `get_min`, and the iterator. This is the crate's whole external
//! surface — everything else is a private collaborator.

use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::check::check_node;
use crate::cmp::LessThan;
use crate::iter::Iter;
use crate::links::{reset_links, size_of, Linked};
use crate::restore::{sift_up, update as restore_update};
use crate::shape::{first_not_full, last};
use crate::size::{dec_size, inc_size};

/// A pointer-based min-heap over nodes of type `N`, ordered by `C::less`
/// under the comparator argument `A`.
///
/// `N` carries the link fields (via [`Linked`]); the heap owns only the
/// topology (parent/left/right/size), never the node's storage. See the
/// crate root docs for the invariants this type maintains after every
/// public operation.
pub struct Heap<N: Linked, A, C> {
    root: Option<NonNull<N>>,
    arg: A,
    _cmp: PhantomData<fn() -> C>,
}

// `Heap` holds raw pointers, so it is conservatively !Send and !Sync: a
// caller that knows their node allocation strategy is sound across
// threads must wrap the heap in their own synchronization, per spec §5.
impl<N: Linked, A, C: LessThan<N, A>> Heap<N, A, C> {
    /// Creates an empty heap, threading `arg` into every future comparison.
    pub fn new(arg: A) -> Self {
        Heap {
            root: None,
            arg,
            _cmp: PhantomData,
        }
    }

    /// Number of nodes currently linked into the heap.
    pub fn size(&self) -> u64 {
        size_of(self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, or `None` if the heap is empty.
    pub fn peek(&self) -> Option<&N> {
        self.root.map(|r| unsafe { r.as_ref() })
    }

    /// The root node. Contract violation (panics) if the heap is empty —
    /// callers that cannot guarantee non-emptiness should use [`peek`]
    /// instead.
    ///
    /// [`peek`]: Heap::peek
    pub fn get_min(&self) -> &N {
        self.peek().expect("get_min: heap is empty")
    }

    /// A pre-order walk over every linked-in node, each exactly once.
    pub fn iter(&self) -> Iter<'_, N> {
        Iter::new(self)
    }

    pub(crate) fn root_ptr(&self) -> Option<NonNull<N>> {
        self.root
    }

    fn less(&self, a: NonNull<N>, b: NonNull<N>) -> bool {
        unsafe { C::less(&self.arg, a.as_ref(), b.as_ref()) }
    }

    /// Links a freshly initialized node into the heap.
    ///
    /// # Safety
    ///
    /// `n` must point to live, uniquely-owned storage that was
    /// `Links::new()`/`reset`-initialized and is not already linked into
    /// this or any other heap. The heap takes no ownership of that
    /// storage; it only writes the link fields.
    pub unsafe fn insert(&mut self, mut n: NonNull<N>) {
        debug_assert!(
            n.as_ref().links().parent.is_none()
                && n.as_ref().links().left.is_none()
                && n.as_ref().links().right.is_none()
                && n.as_ref().links().size == 1,
            "insert: node must be freshly initialized"
        );

        let root = match self.root {
            None => {
                self.root = Some(n);
                return;
            }
            Some(root) => root,
        };

        let mut target = first_not_full(root);
        if target.as_ref().links().left.is_none() {
            target.as_mut().links_mut().left = Some(n);
        } else {
            target.as_mut().links_mut().right = Some(n);
        }
        n.as_mut().links_mut().parent = Some(target);
        inc_size(n);

        let mut less = |a: NonNull<N>, b: NonNull<N>| self.less(a, b);
        sift_up(n, &mut less);

        self.root = Some(climb_to_root(n));
    }

    /// Removes and returns the root. Equivalent to `delete(get_min())`.
    ///
    /// # Safety
    ///
    /// The caller regains ownership of the returned node's storage; the
    /// heap clears its link fields first, per the lifecycle contract.
    /// Contract violation (panics) if the heap is empty.
    pub unsafe fn pop(&mut self) -> NonNull<N> {
        let root = self.root.expect("pop: heap is empty");
        self.delete(root)
    }

    /// Removes `v` from an arbitrary position in the heap and returns it,
    /// with its link fields cleared for immediate reuse.
    ///
    /// # Safety
    ///
    /// `v` must currently be linked into this heap.
    pub unsafe fn delete(&mut self, v: NonNull<N>) -> NonNull<N> {
        let root = self.root.expect("delete: heap is empty");
        let last_node = last(root);

        if last_node == v {
            // v is the rightmost bottom-layer node (possibly the sole node
            // in the heap) — steps 2-4 of the general algorithm degenerate
            // into simply cutting this leaf.
            match v.as_ref().links().parent {
                None => self.root = None,
                Some(mut p) => {
                    dec_size(v);
                    if p.as_ref().links().left == Some(v) {
                        p.as_mut().links_mut().left = None;
                    } else {
                        debug_assert_eq!(p.as_ref().links().right, Some(v));
                        p.as_mut().links_mut().right = None;
                    }
                }
            }
            reset_links(v);
            return v;
        }

        dec_size(last_node);

        // Cut `last_node` from its current parent. If that parent is `v`
        // itself, this also clears the corresponding slot on `v` — which
        // is exactly what we need before copying v's children into
        // `last_node` below, so the self-referential case resolves for
        // free.
        {
            let mut lp = last_node
                .as_ref()
                .links()
                .parent
                .expect("a >1 node heap's last node has a parent");
            if lp.as_ref().links().left == Some(last_node) {
                lp.as_mut().links_mut().left = None;
            } else {
                debug_assert_eq!(lp.as_ref().links().right, Some(last_node));
                lp.as_mut().links_mut().right = None;
            }
        }

        let v_parent = v.as_ref().links().parent;
        let v_left = v.as_ref().links().left;
        let v_right = v.as_ref().links().right;

        let mut last_mut = last_node;
        last_mut.as_mut().links_mut().parent = v_parent;
        last_mut.as_mut().links_mut().left = v_left;
        last_mut.as_mut().links_mut().right = v_right;
        last_mut.as_mut().links_mut().size = 1 + size_of(v_left) + size_of(v_right);

        match v_parent {
            None => self.root = Some(last_node),
            Some(mut p) => {
                if p.as_ref().links().left == Some(v) {
                    p.as_mut().links_mut().left = Some(last_node);
                } else {
                    debug_assert_eq!(p.as_ref().links().right, Some(v));
                    p.as_mut().links_mut().right = Some(last_node);
                }
            }
        }
        if let Some(mut l) = v_left {
            l.as_mut().links_mut().parent = Some(last_node);
        }
        if let Some(mut r) = v_right {
            r.as_mut().links_mut().parent = Some(last_node);
        }

        reset_links(v);

        let mut less = |a: NonNull<N>, b: NonNull<N>| self.less(a, b);
        restore_update(last_node, &mut less);

        self.root = Some(climb_to_root(last_node));

        v
    }

    /// Restores heap order after the caller has externally mutated `n`'s
    /// key in place. Correct regardless of which direction the key moved.
    ///
    /// # Safety
    ///
    /// `n` must currently be linked into this heap.
    pub unsafe fn update(&mut self, n: NonNull<N>) {
        let mut less = |a: NonNull<N>, b: NonNull<N>| self.less(a, b);
        restore_update(n, &mut less);
        self.root = Some(climb_to_root(n));
    }

    /// Debug-only predicate: true iff every linked-in node satisfies the
    /// order, shape, size, and back-pointer invariants.
    pub fn check_invariants(&self) -> bool {
        match self.root {
            None => true,
            Some(r) => unsafe { check_node::<N, A, C>(&self.arg, r, None).is_some() },
        }
    }
}

pub(crate) unsafe fn climb_to_root<N: Linked>(mut n: NonNull<N>) -> NonNull<N> {
    while let Some(p) = n.as_ref().links().parent {
        n = p;
    }
    n
}
