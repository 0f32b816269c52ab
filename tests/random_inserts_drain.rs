use linked_heap::{ValueHeap, ValueNode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn ten_thousand_random_inserts_then_drain() {
    let mut rng = StdRng::seed_from_u64(179);
    let mut heap: ValueHeap<i32> = ValueHeap::new(|a, b| a < b);
    let mut inserted = Vec::new();
    let mut running_min = i32::MAX;

    unsafe {
        for i in 0..10_000u64 {
            let key: i32 = rng.gen_range(0..1_000_000);
            running_min = running_min.min(key);
            heap.insert(ValueNode::leak(key));
            inserted.push(key);

            assert_eq!(heap.size(), i + 1);
            assert_eq!(*heap.get_min().value(), running_min);
        }

        assert!(heap.check_invariants());

        let mut drained = Vec::new();
        while !heap.is_empty() {
            drained.push(ValueNode::into_inner(heap.pop()));
        }

        inserted.sort();
        assert_eq!(drained, inserted);
    }
}
