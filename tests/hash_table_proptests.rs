// HashTable property tests.
//
// Property 1: first-match model.
//  - Model: Vec<(word, meaning)> in insertion order.
//  - Invariant: get(w) == first meaning in the model for w;
//               lookup(w) == that meaning or NOT_FOUND;
//               count(w) == number of model entries for w; len() == model.len().
//  - Operations: insert and probe, over a small word pool so duplicates
//    and misses are common.
//
// Property 2: same model under a hasher that sends every word to one
// bucket, so all resolution happens by exact match inside one chain.
//
// Property 3: bucket routing is a pure function of word and capacity.
use chained_dict::{HashTable, KeyHasher, NOT_FOUND};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Insert(usize, String),
    Probe(usize),
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<String>, Vec<Op>)> {
    (0usize..20, proptest::collection::vec("[a-d]{0,3}", 1..=8)).prop_flat_map(
        |(expected, pool)| {
            let idx = 0..pool.len();
            let op = prop_oneof![
                (idx.clone(), "[a-z ]{0,8}").prop_map(|(i, m)| Op::Insert(i, m)),
                idx.prop_map(Op::Probe),
            ];
            proptest::collection::vec(op, 1..60)
                .prop_map(move |ops| (expected, pool.clone(), ops))
        },
    )
}

fn run_model<H: KeyHasher>(
    mut sut: HashTable<H>,
    pool: &[String],
    ops: Vec<Op>,
) -> Result<(), TestCaseError> {
    let mut model: Vec<(String, String)> = Vec::new();
    let capacity = sut.capacity();

    for op in ops {
        match op {
            Op::Insert(i, meaning) => {
                sut.insert(pool[i].clone(), meaning.clone());
                model.push((pool[i].clone(), meaning));
            }
            Op::Probe(i) => {
                let word = &pool[i];
                let first = model
                    .iter()
                    .find(|(w, _)| w == word)
                    .map(|(_, m)| m.as_str());
                prop_assert_eq!(sut.get(word), first);
                prop_assert_eq!(sut.lookup(word), first.unwrap_or(NOT_FOUND));
                prop_assert_eq!(sut.contains_key(word), first.is_some());
                let all: Vec<&str> = model
                    .iter()
                    .filter(|(w, _)| w == word)
                    .map(|(_, m)| m.as_str())
                    .collect();
                prop_assert_eq!(sut.get_all(word).collect::<Vec<_>>(), all.clone());
                prop_assert_eq!(sut.count(word), all.len());
            }
        }
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.capacity(), capacity);
    }
    Ok(())
}

struct OneBucket;
impl KeyHasher for OneBucket {
    fn hash_key(&self, _key: &str) -> u64 {
        0
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn prop_first_match_model((expected, pool, ops) in arb_scenario()) {
        run_model(HashTable::new(expected), &pool, ops)?;
    }

    #[test]
    fn prop_first_match_model_single_chain((expected, pool, ops) in arb_scenario()) {
        run_model(HashTable::with_hasher(expected, OneBucket), &pool, ops)?;
    }

    #[test]
    fn prop_bucket_index_is_pure(expected in 0usize..1000, word in any::<String>()) {
        let a = HashTable::new(expected);
        let b = HashTable::new(expected);
        let index = a.bucket_index(&word);
        prop_assert!(index < a.capacity());
        prop_assert_eq!(index, b.bucket_index(&word));
        prop_assert_eq!(a.capacity(), (expected * 2).max(1));
    }
}
