// SPDX-License-Identifier: Apache-2.0

use criterion::{BenchmarkId, black_box, Criterion, criterion_group, criterion_main, Throughput};
use blob::{Base58, Base62, Base64, Binary, BlobOptions, Codec, Hex};

const SIZES: [usize; 3] = [32, 256, 4096];

fn data(len: usize) -> Vec<u8> {
	(0..len).map(|i| (i * 31 + 7) as u8).collect()
}

fn encode(c: &mut Criterion) {
	let mut group = c.benchmark_group("encode");

	macro_rules! gen {
		($($codec:ident)+) => {
			for len in SIZES {
				let data = data(len);
				group.throughput(Throughput::Bytes(len as u64));
				$(
				group.bench_with_input(BenchmarkId::new(stringify!($codec), len), &data, |b, data| {
					let mut buf = String::new();
					b.iter(|| {
						buf.clear();
						$codec::encode_into(black_box(data), &mut buf).len()
					})
				});
				)+
			}
		};
	}

	gen!(Binary Hex Base64);
	group.finish();
}

// Base58 and base62 are quadratic in the input length, so they get their own
// smaller sizes.
fn encode_radix(c: &mut Criterion) {
	let mut group = c.benchmark_group("encode_radix");
	for len in [16, 32, 256] {
		let data = data(len);
		group.throughput(Throughput::Bytes(len as u64));
		group.bench_with_input(BenchmarkId::new("Base58", len), &data, |b, data|
			b.iter(|| Base58::encode(black_box(data)))
		);
		group.bench_with_input(BenchmarkId::new("Base62", len), &data, |b, data|
			b.iter(|| Base62::encode(black_box(data)))
		);
	}
	group.finish();
}

fn decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("decode");
	let data = data(256);
	group.throughput(Throughput::Bytes(256));

	macro_rules! gen {
		($($codec:ident)+) => {
			$(
			let text = $codec::encode(&data);
			group.bench_function(stringify!($codec), |b| b.iter(||
				$codec::decode(black_box(text.as_bytes()), BlobOptions::new())
			));
			group.bench_function(concat!(stringify!($codec), "_strict"), |b| b.iter(||
				$codec::try_decode(black_box(text.as_bytes()), BlobOptions::new())
			));
			)+
		};
	}

	gen!(Binary Hex Base58 Base62 Base64);
	group.finish();
}

criterion_group!(benches, encode, encode_radix, decode);
criterion_main!(benches);
