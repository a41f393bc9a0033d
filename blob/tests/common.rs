// Copyright 2023 Strixpyrr
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![allow(dead_code)]

use std::fmt::{Arguments, Debug};

macro_rules! qc_assert_eq {
	($left:expr,$right:expr) => {{
		let left = $left;
		let right = $right;
		if left == right {
			TestResult::passed()
		} else {
			TestResult::error(
				common::format_qc_assert_error(&left, &right, None)
			)
		}
	}};
    ($left:expr,$right:expr,$($arg:tt)+) => {{
		let left = $left;
		let right = $right;
		if left == right {
			TestResult::passed()
		} else {
			TestResult::error(
				common::format_qc_assert_error(&left, &right, Some(format_args!($($arg)+)))
			)
		}
	}};
}

pub fn format_qc_assert_error<L: Debug, R: Debug>(left: &L, right: &R, msg: Option<Arguments>) -> String {
	if let Some(msg) = msg {
		format!(
			"assertion failed `(left == right)`: {msg}\n \
			left: `{left:?}`,\nright: `{right:?}`",
		)
	} else {
		format!(
			"assertion failed `(left == right)`:\n \
			left: `{left:?}`,\nright: `{right:?}`",
		)
	}
}

/// A fixed byte string with its expected encodings.
pub struct Vector {
	pub data: &'static [u8],
	pub binary: &'static str,
	pub hex: &'static str,
	pub base58: &'static str,
	pub base62: &'static str,
	pub base64: &'static str,
}

pub const VECTORS: [Vector; 5] = [
	Vector {
		data: b"Duis viverra pretium enim et fringilla.",
		binary: concat!(
			"01000100011101010110100101110011001000000111011001101001011101100110010101110010",
			"01110010011000010010000001110000011100100110010101110100011010010111010101101101",
			"00100000011001010110111001101001011011010010000001100101011101000010000001100110",
			"011100100110100101101110011001110110100101101100011011000110000100101110",
		),
		hex: "447569732076697665727261207072657469756D20656E696D206574206672696E67696C6C612E",
		base58: "mhWBKkZKwPKwdtXhJUUCtnqyzQyhqrVx9vYpLNZxhZyzSKyKteqQ1",
		base62: "1OPVE2tnoox6nwYZe1KAYO8ddXlYoIPG1d3vqyObL5ahbcTi5fCLW",
		base64: "RHVpcyB2aXZlcnJhIHByZXRpdW0gZW5pbSBldCBmcmluZ2lsbGEu",
	},
	Vector {
		data: b"Aliquam egestas, sapien a placerat dapib",
		binary: concat!(
			"01000001011011000110100101110001011101010110000101101101001000000110010101100111",
			"01100101011100110111010001100001011100110010110000100000011100110110000101110000",
			"01101001011001010110111000100000011000010010000001110000011011000110000101100011",
			"01100101011100100110000101110100001000000110010001100001011100000110100101100010",
		),
		hex: "416C697175616D20656765737461732C2073617069656E206120706C616365726174206461706962",
		base58: "4FYT5y5d1ULwFXYyByigriJPACdxoqWNNn86SmaxYT3oXEprpcnJCnD",
		base62: "5UyXhZA6QsoGueFiFs4u6Dzml9e1ALSWUSpsWTp2gdGFn8g4FVWodO",
		base64: "QWxpcXVhbSBlZ2VzdGFzLCBzYXBpZW4gYSBwbGFjZXJhdCBkYXBpYg",
	},
	Vector {
		data: b"Etiam dolor dui, tempor eget turpis a, ma",
		binary: concat!(
			"01000101011101000110100101100001011011010010000001100100011011110110110001101111",
			"01110010001000000110010001110101011010010010110000100000011101000110010101101101",
			"01110000011011110111001000100000011001010110011101100101011101000010000001110100",
			"01110101011100100111000001101001011100110010000001100001001011000010000001101101",
			"01100001",
		),
		hex: "457469616D20646F6C6F72206475692C2074656D706F7220656765742074757270697320612C206D61",
		base58: "GETuYeY2tmLyKpXzAv6LjQkKMGhQwNFzRhhefy3wQjy6bhgizFAadoMJ",
		base62: "O6ebEZ2kiTa4vqoTPx7sVsxG8jH6ZBI5k6nAlCZZSRdRt66htgx6agb",
		base64: "RXRpYW0gZG9sb3IgZHVpLCB0ZW1wb3IgZWdldCB0dXJwaXMgYSwgbWE",
	},
	Vector {
		data: b"Nulla rutrum laoreet eros ac mollis. Nulla",
		binary: concat!(
			"01001110011101010110110001101100011000010010000001110010011101010111010001110010",
			"01110101011011010010000001101100011000010110111101110010011001010110010101110100",
			"00100000011001010111001001101111011100110010000001100001011000110010000001101101",
			"01101111011011000110110001101001011100110010111000100000010011100111010101101100",
			"0110110001100001",
		),
		hex: "4E756C6C612072757472756D206C616F726565742065726F73206163206D6F6C6C69732E204E756C6C61",
		base58: "2JwwVuLR1Ajeaa5dmSMHYCfPLaywSzfqAq8tfnq8bxxduXs3iMsNfEk3aQ",
		base62: "1oRX89j89W5ABceJCg5JrnDzCg5ZZkVcsWWpNx4EV0QvJtNdYhsjzjc8H",
		base64: "TnVsbGEgcnV0cnVtIGxhb3JlZXQgZXJvcyBhYyBtb2xsaXMuIE51bGxh",
	},
	// Zero-led
	Vector {
		data: b"\0\0\0Test",
		binary: "00000000000000000000000001010100011001010111001101110100",
		hex: "00000054657374",
		base58: "1113A836b",
		base62: "0001Xp7Ke",
		base64: "AAAAVGVzdA",
	},
];
