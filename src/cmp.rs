//! The comparator contract (spec §6): a strict weak order over nodes,
//! parameterized by an opaque "argument" bag threaded into every call
//! instead of captured by a closure — this mirrors the source's static,
//! header-generic comparator rather than a `Box<dyn Fn>` vtable.
//!
//! Violating strict-weak-order voids all ordering guarantees the heap
//! makes; the heap itself cannot check this and does not try to.
pub trait LessThan<N, A> {
    fn less(arg: &A, a: &N, b: &N) -> bool;
}
