//! Line benchmark: Measure row access and row iteration.
//!
//! Frame: 512x512 `u16` samples.

use asd_lines::{lines, LineIter, LineView, Shape};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::VecDeque;

const SHAPE: Shape = Shape::new(512, 512);

fn frame() -> Vec<u16> {
    (0..SHAPE.len()).map(|i| (i % 4096) as u16).collect()
}

fn line_at_checked(c: &mut Criterion) {
    let buf = frame();
    let line = LineView::new(&buf, 200, SHAPE);

    c.bench_function("line_at_checked", |b| {
        b.iter(|| {
            let mut sum = 0_u32;
            for i in 0..SHAPE.x_pixel() {
                sum += u32::from(*line.at(black_box(i)).unwrap());
            }
            sum
        })
    });
}

#[allow(unsafe_code)]
fn line_get_unchecked(c: &mut Criterion) {
    let buf = frame();
    let line = LineView::new(&buf, 200, SHAPE);

    c.bench_function("line_get_unchecked", |b| {
        b.iter(|| {
            let mut sum = 0_u32;
            for i in 0..SHAPE.x_pixel() {
                // SAFETY: row 200 is in frame and i < x_pixel.
                sum += u32::from(unsafe { *line.get_unchecked(black_box(i)) });
            }
            sum
        })
    });
}

fn line_iter_cursor(c: &mut Criterion) {
    let buf = frame();

    c.bench_function("line_iter_cursor", |b| {
        b.iter(|| {
            let mut it = LineIter::begin(black_box(&buf), SHAPE);
            let end = LineIter::end(&buf, SHAPE);
            let mut first = 0_u32;
            while it != end {
                first += u32::from(*it.at(0).unwrap());
                it.increment();
            }
            first
        })
    });
}

fn lines_sum(c: &mut Criterion) {
    let buf = frame();
    let deque: VecDeque<u16> = buf.iter().copied().collect();

    c.bench_function("lines_sum_vec", |b| {
        b.iter(|| {
            lines(black_box(&buf), SHAPE)
                .map(|line| line.iter().map(|&s| u64::from(s)).sum::<u64>())
                .sum::<u64>()
        })
    });

    c.bench_function("lines_sum_deque", |b| {
        b.iter(|| {
            lines(black_box(&deque), SHAPE)
                .map(|line| line.iter().map(|&s| u64::from(s)).sum::<u64>())
                .sum::<u64>()
        })
    });
}

criterion_group!(
    benches,
    line_at_checked,
    line_get_unchecked,
    line_iter_cursor,
    lines_sum,
);
criterion_main!(benches);
