//! A pointer-based min-heap over a complete binary tree.
//!
//! Nodes carry explicit parent/left/right links and a per-node subtree-size
//! counter (see [`Links`]) instead of living in an array indexed
//! implicitly by position. That lets the heap support operations an
//! array-backed binary heap cannot express without external bookkeeping:
//! deleting an arbitrary node, and re-heapifying in place after a caller
//! mutates a node's key externally (`update`), without knowing up front
//! whether the key moved up or down.
//!
//! Two usage flavors share the same implementation:
//!
//! - **Intrusive**: implement [`Linked`] directly on your own struct,
//!   embedding a [`Links<Self>`] field, and write a [`LessThan`] that reads
//!   whatever other fields of that struct you like.
//! - **Value-owned**: use [`ValueNode<T>`]/[`ValueHeap<T>`], which embed a
//!   `T` and order by a plain `fn(&T, &T) -> bool`.
//!
//! The heap never allocates or frees node memory — nodes are caller-owned
//! for their whole lifetime; the heap only ever reads and rewrites their
//! link fields. A node is handed to the heap via [`Heap::insert`] already
//! initialized ([`Links::new`]), and handed back by [`Heap::pop`] /
//! [`Heap::delete`] with its link fields cleared, ready for immediate
//! reuse.
//!
//! # Invariants
//!
//! After every public operation returns, for every linked-in node `n`:
//!
//! - **Shape**: the tree is complete — every level is full except
//!   possibly the last, which fills left-to-right. Equivalently, at every
//!   node with two children, at least one child subtree is perfect.
//! - **Order**: if `n` is not the root, `n` is not less than its parent
//!   under the comparator.
//! - **Size**: `n.size == 1 + left.size + right.size` (absent children
//!   count as zero).
//! - **Back-pointers**: exactly one of `n.parent.left == n` or
//!   `n.parent.right == n` holds for every non-root `n`.
//! - **Root**: the heap's root is `None` iff it is empty; otherwise the
//!   root's parent is `None`.
//!
//! [`check_invariants`](Heap::check_invariants) verifies all of the above
//! and is intended for tests, not production call sites.
//!
//! # Concurrency
//!
//! A [`Heap`] is single-threaded: it performs no internal synchronization
//! and briefly violates its own invariants mid-mutation (inside the swap
//! kernel). Concurrent mutation, or concurrent reads during a mutation,
//! are both unsound. Callers needing multi-thread access must serialize
//! externally.

mod check;
mod cmp;
mod heap;
mod iter;
mod links;
mod restore;
mod shape;
mod size;
mod swap;
mod value;

pub use cmp::LessThan;
pub use heap::Heap;
pub use iter::Iter;
pub use links::{Linked, Links};
pub use shape::is_full;
pub use value::{ValueComparator, ValueHeap, ValueNode};
