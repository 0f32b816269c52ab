//! Property-based fuzzing over arbitrary command sequences (spec §8:
//! "for every intermediate state reachable from a fuzzed command
//! sequence"), using `proptest` the way `triblespace-tribles-rust` uses it
//! for its own core data structure (`patch.rs`).

use linked_heap::{ValueHeap, ValueNode};
use proptest::prelude::*;
use std::ptr::NonNull;

#[derive(Clone, Debug)]
enum Command {
    Insert(i32),
    Pop,
    Update(usize, i32),
}

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        any::<i32>().prop_map(Command::Insert),
        Just(Command::Pop),
        (any::<usize>(), any::<i32>()).prop_map(|(idx, key)| Command::Update(idx, key)),
    ]
}

proptest! {
    #[test]
    fn invariants_hold_after_every_command(commands in proptest::collection::vec(command_strategy(), 0..200)) {
        let mut heap: ValueHeap<i32> = ValueHeap::new(|a, b| a < b);
        let mut nodes: Vec<NonNull<ValueNode<i32>>> = Vec::new();

        unsafe {
            for command in commands {
                match command {
                    Command::Insert(key) => {
                        let node = ValueNode::leak(key);
                        heap.insert(node);
                        nodes.push(node);
                    }
                    Command::Pop => {
                        if !heap.is_empty() {
                            let popped = heap.pop();
                            nodes.retain(|n| *n != popped);
                            ValueNode::into_inner(popped);
                        }
                    }
                    Command::Update(idx, key) => {
                        if !nodes.is_empty() {
                            let node = nodes[idx % nodes.len()];
                            ValueNode::set_value(node, key);
                            heap.update(node);
                        }
                    }
                }

                prop_assert!(heap.check_invariants());
                prop_assert_eq!(heap.size() as usize, nodes.len());
            }

            for node in nodes {
                ValueNode::into_inner(heap.delete(node));
            }
        }
    }
}
