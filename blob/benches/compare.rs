// SPDX-License-Identifier: Apache-2.0

use criterion::{black_box, Criterion, criterion_group, criterion_main};
use blob::{Blob, BlobOptions, Compare};

const LEN: usize = 4096;

fn compare(c: &mut Criterion) {
	let mut group = c.benchmark_group("compare");
	let a = Blob::from_slice(&[0x5A; LEN]);
	let same = Blob::from_slice(&[0x5A; LEN]);
	let mut early = vec![0x5Au8; LEN];
	early[0] = 0;
	let early = Blob::from(early);

	for compare in [Compare::Fast, Compare::ConstantTime] {
		group.bench_function(format!("{compare}_equal"), |b|
			b.iter(|| black_box(&a).compare_with(black_box(&same), compare))
		);
		// Fast comparison returns at the first byte here, constant-time doesn't.
		group.bench_function(format!("{compare}_first_byte"), |b|
			b.iter(|| black_box(&a).compare_with(black_box(&early), compare))
		);
	}
	group.finish();
}

fn subset(c: &mut Criterion) {
	let blob = Blob::zeroed(LEN, BlobOptions::secret());
	c.bench_function("subset", |b| b.iter(|| black_box(&blob).subset(LEN / 2, LEN / 4)));
}

criterion_group!(benches, compare, subset);
criterion_main!(benches);
