// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use attache_core::{BehaviorSubject, FirstWhereExt};
use criterion::{BenchmarkId, Criterion, Throughput};
use futures::StreamExt;
use std::hint::black_box;
use tokio::runtime::Runtime;

pub fn bench_subject(c: &mut Criterion) {
    let mut group = c.benchmark_group("behavior_subject");
    let rt = Runtime::new().unwrap();

    // Subscriber counts to test scalability
    let subscriber_counts = [1usize, 8, 64, 256];

    // Scenario 1: fan-out of a single small value
    for &subs in &subscriber_counts {
        group.throughput(Throughput::Elements(subs as u64));
        let id = BenchmarkId::from_parameter(format!("fan_out_subs_{subs}"));
        group.bench_with_input(id, &subs, |bencher, &subs| {
            bencher.iter(|| {
                rt.block_on(async {
                    let subject = BehaviorSubject::<u64>::new();

                    let mut handles = Vec::with_capacity(subs);
                    for _ in 0..subs {
                        let mut stream = subject.subscribe().unwrap();
                        handles.push(tokio::spawn(async move {
                            black_box(stream.next().await);
                        }));
                    }

                    subject.send(42).unwrap();

                    for h in handles {
                        let _ = h.await;
                    }
                });
            });
        });
    }

    // Scenario 2: late subscribers resolved by the replayed value
    for &subs in &subscriber_counts {
        group.throughput(Throughput::Elements(subs as u64));
        let id = BenchmarkId::from_parameter(format!("replay_first_where_subs_{subs}"));
        group.bench_with_input(id, &subs, |bencher, &subs| {
            bencher.iter(|| {
                rt.block_on(async {
                    let subject = BehaviorSubject::with_value(7u64);

                    for _ in 0..subs {
                        let stream = subject.subscribe().unwrap();
                        let mut first = Box::pin(stream.first_where(|v: &u64| *v == 7));
                        black_box(first.next().await);
                    }
                });
            });
        });
    }

    group.finish();
}
