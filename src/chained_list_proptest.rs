#![cfg(test)]

// Property tests for ChainedList kept inside the crate so they can use the
// internal link checker after every step.

use crate::chained_list::ChainedList;
use proptest::prelude::*;
use std::collections::VecDeque;

#[derive(Clone, Debug)]
enum Op {
    PushFront(u8),
    PushBack(u8),
    PopFront,
    PopBack,
    Erase(u8),
    Count(u8),
    Find(u8),
    Peek,
    SwapThrough,
    CloneReplace,
    Clear,
}

// Values are drawn from a small range so erase/count/find hit duplicates.
fn arb_op() -> impl Strategy<Value = Op> {
    let v = 0u8..6;
    prop_oneof![
        4 => v.clone().prop_map(Op::PushFront),
        4 => v.clone().prop_map(Op::PushBack),
        2 => Just(Op::PopFront),
        2 => Just(Op::PopBack),
        2 => v.clone().prop_map(Op::Erase),
        1 => v.clone().prop_map(Op::Count),
        1 => v.prop_map(Op::Find),
        1 => Just(Op::Peek),
        1 => Just(Op::SwapThrough),
        1 => Just(Op::CloneReplace),
        1 => Just(Op::Clear),
    ]
}

// Property: state-machine equivalence against VecDeque.
// After every operation:
// - the link predicate holds (endpoints, back links, no cycles, len parity);
// - forward iteration equals the model, reverse iteration equals it reversed;
// - pop/peek on an empty list underflow exactly when the model is empty.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_list_matches_vecdeque(ops in proptest::collection::vec(arb_op(), 1..80)) {
        let mut sut: ChainedList<u8> = ChainedList::new();
        let mut model: VecDeque<u8> = VecDeque::new();

        for op in ops {
            match op {
                Op::PushFront(v) => {
                    sut.push_front(v);
                    model.push_front(v);
                }
                Op::PushBack(v) => {
                    sut.push_back(v);
                    model.push_back(v);
                }
                Op::PopFront => {
                    prop_assert_eq!(sut.pop_front().ok(), model.pop_front());
                }
                Op::PopBack => {
                    prop_assert_eq!(sut.pop_back().ok(), model.pop_back());
                }
                Op::Erase(v) => {
                    let expected = sut.count(&v);
                    prop_assert_eq!(sut.erase(&v), expected);
                    prop_assert_eq!(sut.count(&v), 0);
                    model.retain(|x| *x != v);
                }
                Op::Count(v) => {
                    prop_assert_eq!(sut.count(&v), model.iter().filter(|x| **x == v).count());
                }
                Op::Find(v) => {
                    let hit = sut.find(&v);
                    let pos = model.iter().position(|x| *x == v);
                    prop_assert_eq!(hit.is_some(), pos.is_some());
                    if let (Some(node), Some(pos)) = (hit, pos) {
                        prop_assert_eq!(*node.value(), v);
                        // Walking back from the hit must reach the head in `pos` steps.
                        let mut steps = 0;
                        let mut cur = node.previous();
                        while let Some(n) = cur {
                            steps += 1;
                            cur = n.previous();
                        }
                        prop_assert_eq!(steps, pos);
                    }
                }
                Op::Peek => {
                    prop_assert_eq!(sut.front().ok(), model.front());
                    prop_assert_eq!(sut.back().ok(), model.back());
                }
                Op::SwapThrough => {
                    let mut other = ChainedList::new();
                    sut.swap(&mut other);
                    prop_assert!(sut.is_empty());
                    sut.swap(&mut other);
                    prop_assert!(other.is_empty());
                }
                Op::CloneReplace => {
                    let copy = sut.clone();
                    prop_assert!(copy.check_links().is_ok());
                    sut = copy;
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                }
            }

            if let Err(broken) = sut.check_links() {
                prop_assert!(false, "link invariant broken: {}", broken);
            }
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            let fwd: Vec<u8> = sut.iter().copied().collect();
            let mut back: Vec<u8> = sut.iter().rev().copied().collect();
            back.reverse();
            prop_assert_eq!(&fwd, &back);
            prop_assert_eq!(fwd, model.iter().copied().collect::<Vec<_>>());
        }
    }
}

// Property: FIFO via pop_front and LIFO via pop_back for values pushed with
// push_back; both end in underflow.
proptest! {
    #[test]
    fn prop_round_trip_order(values in proptest::collection::vec(any::<i32>(), 0..50)) {
        let mut fifo: ChainedList<i32> = values.iter().copied().collect();
        let mut lifo = fifo.clone();

        let mut out = Vec::new();
        while let Ok(v) = fifo.pop_front() {
            out.push(v);
        }
        prop_assert_eq!(&out, &values);
        prop_assert!(fifo.pop_front().is_err());

        let mut out = Vec::new();
        while let Ok(v) = lifo.pop_back() {
            out.push(v);
        }
        out.reverse();
        prop_assert_eq!(&out, &values);
        prop_assert!(lifo.pop_back().is_err());
    }
}
