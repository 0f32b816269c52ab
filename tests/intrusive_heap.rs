//! Exercises the intrusive flavor end to end: a caller-defined struct
//! embeds `Links<Self>` directly and the comparator reads an arbitrary
//! field of that struct (spec §1's "nodes are embedded into caller-defined
//! structures via a static comparator"), as opposed to `ValueHeap`'s
//! embed-a-`T` flavor exercised by the other integration tests.

use std::ptr::NonNull;

use linked_heap::{Heap, Linked, LessThan, Links};

struct Job {
    links: Links<Job>,
    priority: i64,
    name: &'static str,
}

unsafe impl Linked for Job {
    fn links(&self) -> &Links<Self> {
        &self.links
    }
    fn links_mut(&mut self) -> &mut Links<Self> {
        &mut self.links
    }
}

/// The comparator argument is unused here, but still threaded through
/// every comparison per spec §6 — a real caller might use it to hold a
/// tie-break seed or a reference to shared config.
struct ByPriority;

impl LessThan<Job, ()> for ByPriority {
    fn less(_arg: &(), a: &Job, b: &Job) -> bool {
        a.priority < b.priority
    }
}

type JobQueue = Heap<Job, (), ByPriority>;

unsafe fn leak(priority: i64, name: &'static str) -> NonNull<Job> {
    NonNull::new_unchecked(Box::into_raw(Box::new(Job {
        links: Links::new(),
        priority,
        name,
    })))
}

unsafe fn reclaim(n: NonNull<Job>) -> (i64, &'static str) {
    let job = Box::from_raw(n.as_ptr());
    (job.priority, job.name)
}

#[test]
fn intrusive_jobs_drain_in_priority_order() {
    let mut queue = JobQueue::new(());

    unsafe {
        let jobs = [
            leak(30, "compact"),
            leak(10, "checkpoint"),
            leak(20, "flush"),
            leak(5, "vacuum"),
        ];
        for job in jobs {
            queue.insert(job);
        }

        assert!(queue.check_invariants());
        assert_eq!(queue.size(), 4);
        assert_eq!(queue.get_min().name, "vacuum");

        let mut drained = Vec::new();
        while !queue.is_empty() {
            let (priority, name) = reclaim(queue.pop());
            drained.push((priority, name));
        }
        assert_eq!(
            drained,
            vec![(5, "vacuum"), (10, "checkpoint"), (20, "flush"), (30, "compact")]
        );
    }
}

#[test]
fn intrusive_delete_from_middle_and_update_reorder_correctly() {
    let mut queue = JobQueue::new(());

    unsafe {
        let mut jobs = Vec::new();
        for (priority, name) in [
            (1, "a"), (7, "b"), (3, "c"), (9, "d"), (2, "e"), (8, "f"), (4, "g"),
        ] {
            let job = leak(priority, name);
            queue.insert(job);
            jobs.push(job);
        }
        assert!(queue.check_invariants());

        // delete an arbitrary non-root node ("f", priority 8)
        let target = jobs[5];
        let (priority, name) = reclaim(queue.delete(target));
        assert_eq!((priority, name), (8, "f"));
        assert!(queue.check_invariants());
        assert_eq!(queue.size(), 6);

        // mutate "d"'s priority down past the current minimum and reorder.
        let mut d = jobs[3];
        d.as_mut().priority = -5;
        queue.update(d);
        assert!(queue.check_invariants());
        assert_eq!(queue.get_min().name, "d");

        let mut remaining: Vec<&'static str> = queue.iter().map(|j| j.name).collect();
        remaining.sort();
        let mut expected = vec!["a", "b", "c", "d", "e", "g"];
        expected.sort();
        assert_eq!(remaining, expected);

        for job in jobs {
            if job == target {
                continue;
            }
            reclaim(queue.delete(job));
        }
        assert!(queue.is_empty());
    }
}
