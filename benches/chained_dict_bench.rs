use chained_dict::{ChainedList, HashTable};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn word(n: u64) -> String {
    format!("w{:016x}", n)
}

fn bench_table_insert_10k(c: &mut Criterion) {
    c.bench_function("table::insert_10k", |b| {
        b.iter_batched(
            || HashTable::new(10_000),
            |mut t| {
                for x in lcg(1).take(10_000) {
                    t.insert(word(x), "meaning");
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_table_lookup_hit(c: &mut Criterion) {
    c.bench_function("table::lookup_hit_on_10k", |b| {
        let mut t = HashTable::new(10_000);
        let words: Vec<_> = lcg(7).take(10_000).map(word).collect();
        for w in &words {
            t.insert(w.as_str(), "meaning");
        }
        let mut it = words.iter().cycle();
        b.iter(|| {
            let w = it.next().unwrap();
            black_box(t.lookup(w));
        })
    });
}

fn bench_table_lookup_miss(c: &mut Criterion) {
    c.bench_function("table::lookup_miss_on_10k", |b| {
        let mut t = HashTable::new(10_000);
        for x in lcg(11).take(10_000) {
            t.insert(word(x), "meaning");
        }
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            let w = word(miss.next().unwrap());
            black_box(t.lookup(&w));
        })
    });
}

fn bench_list_push_pop(c: &mut Criterion) {
    c.bench_function("list::push_back_pop_front_1k", |b| {
        let mut l = ChainedList::new();
        b.iter(|| {
            for i in 0..1_000u64 {
                l.push_back(i);
            }
            while let Ok(v) = l.pop_front() {
                black_box(v);
            }
        })
    });
}

fn bench_list_erase(c: &mut Criterion) {
    c.bench_function("list::erase_every_third_of_3k", |b| {
        b.iter_batched(
            || (0..3_000u64).map(|i| i % 3).collect::<ChainedList<u64>>(),
            |mut l| {
                black_box(l.erase(&0));
                l
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_table_insert_10k, bench_table_lookup_hit, bench_table_lookup_miss,
        bench_list_push_pop, bench_list_erase
}
criterion_main!(benches);
