use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use condq::{BoundedBuffer, DEFAULT_CAPACITY};
use crossbeam_channel::bounded;
use flume::bounded as flume_bounded;
use std::sync::mpsc::sync_channel;

const MESSAGES: usize = 100_000;

fn bench_put_take_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_take_cycle");
    group.throughput(Throughput::Elements(MESSAGES as u64));

    group.bench_function("condq", |b| {
        b.iter(|| {
            let buffer = BoundedBuffer::new();
            for _ in 0..MESSAGES {
                black_box(buffer.put());
                black_box(buffer.take());
            }
        });
    });

    group.bench_function("crossbeam_channel", |b| {
        b.iter(|| {
            let (tx, rx) = bounded::<i32>(DEFAULT_CAPACITY);
            for i in 0..MESSAGES {
                tx.send(black_box(i as i32)).unwrap();
                black_box(rx.recv().unwrap());
            }
        });
    });

    group.bench_function("flume", |b| {
        b.iter(|| {
            let (tx, rx) = flume_bounded::<i32>(DEFAULT_CAPACITY);
            for i in 0..MESSAGES {
                tx.send(black_box(i as i32)).unwrap();
                black_box(rx.recv().unwrap());
            }
        });
    });

    group.bench_function("std_mpsc", |b| {
        b.iter(|| {
            let (tx, rx) = sync_channel::<i32>(DEFAULT_CAPACITY);
            for i in 0..MESSAGES {
                tx.send(black_box(i as i32)).unwrap();
                black_box(rx.recv().unwrap());
            }
        });
    });

    group.finish();
}

fn bench_fill_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_drain");
    group.throughput(Throughput::Elements(DEFAULT_CAPACITY as u64));

    group.bench_function("condq", |b| {
        let buffer = BoundedBuffer::new();
        b.iter(|| {
            for _ in 0..DEFAULT_CAPACITY {
                black_box(buffer.put());
            }
            for _ in 0..DEFAULT_CAPACITY {
                black_box(buffer.take());
            }
        });
    });

    group.bench_function("crossbeam_channel", |b| {
        let (tx, rx) = bounded::<i32>(DEFAULT_CAPACITY);
        b.iter(|| {
            for i in 0..DEFAULT_CAPACITY {
                tx.send(black_box(i as i32)).unwrap();
            }
            for _ in 0..DEFAULT_CAPACITY {
                black_box(rx.recv().unwrap());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_put_take_cycle, bench_fill_drain);
criterion_main!(benches);
