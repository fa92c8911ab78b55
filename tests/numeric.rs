// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Cross-checks of the fixed-width integers against arbitrary precision.

use polykern::numeric::{mul192, mul256, I192, I256};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rug::Integer;

fn rug_of_i192(v: I192) -> Integer {
    let m = v.abs();
    let mut acc = Integer::from(m.0[2]);
    acc <<= 64;
    acc += m.0[1];
    acc <<= 64;
    acc += m.0[0];
    if v.is_negative() {
        -acc
    } else {
        acc
    }
}

fn rug_of_i256(v: I256) -> Integer {
    let m = v.abs();
    let mut acc = Integer::from(m.0[3]);
    for i in (0..3).rev() {
        acc <<= 64;
        acc += m.0[i];
    }
    if v.is_negative() {
        -acc
    } else {
        acc
    }
}

/// Operands sized so products stay inside the 192/256-bit targets.
fn sample_i128(rng: &mut SmallRng, bits: u32) -> i128 {
    let magnitude: u128 = rng.gen::<u128>() >> (128 - bits);
    let m = magnitude as i128;
    if rng.gen::<bool>() {
        -m
    } else {
        m
    }
}

#[test]
fn mul192_matches_arbitrary_precision() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..2000 {
        let a = sample_i128(&mut rng, 95);
        let b = sample_i128(&mut rng, 95);
        let exact = Integer::from(a) * Integer::from(b);
        assert_eq!(rug_of_i192(mul192(a, b)), exact, "a={a} b={b}");
    }
}

#[test]
fn mul256_matches_arbitrary_precision() {
    let mut rng = SmallRng::seed_from_u64(8);
    for _ in 0..2000 {
        let a = sample_i128(&mut rng, 126);
        let b = sample_i128(&mut rng, 126);
        let exact = Integer::from(a) * Integer::from(b);
        assert_eq!(rug_of_i256(mul256(a, b)), exact, "a={a} b={b}");
    }
}

#[test]
fn chained_products_match_arbitrary_precision() {
    // the classify pattern: a 196-bit-ish value times a 55-bit coefficient
    let mut rng = SmallRng::seed_from_u64(9);
    for _ in 0..2000 {
        let x = sample_i128(&mut rng, 120);
        let y = sample_i128(&mut rng, 70);
        let c = sample_i128(&mut rng, 55) as i64;

        let prod = mul256(mul192(x, y), c);
        let exact = Integer::from(x) * Integer::from(y) * Integer::from(c);
        assert_eq!(rug_of_i256(prod), exact);
        assert_eq!(
            rug_of_i256(mul256(x, y)),
            Integer::from(x) * Integer::from(y)
        );
    }
}

#[test]
fn add_sub_neg_match_arbitrary_precision() {
    let mut rng = SmallRng::seed_from_u64(10);
    for _ in 0..2000 {
        let a = mul256(sample_i128(&mut rng, 120), sample_i128(&mut rng, 120));
        let b = mul256(sample_i128(&mut rng, 120), sample_i128(&mut rng, 120));
        let (ra, rb) = (rug_of_i256(a), rug_of_i256(b));

        assert_eq!(rug_of_i256(a + b), ra.clone() + rb.clone());
        assert_eq!(rug_of_i256(a - b), ra.clone() - rb.clone());
        assert_eq!(rug_of_i256(-a), -ra.clone());
        assert_eq!(a.cmp(&b), ra.cmp(&rb));
        assert_eq!(a.signum() as i32, ra.cmp0() as i32);
    }
}

#[test]
fn boundary_patterns() {
    // limb-boundary operands that catch carry mistakes
    let patterns: [i128; 7] = [
        0,
        1,
        -1,
        i64::MAX as i128,
        i64::MIN as i128,
        (1i128 << 64) - 1,
        1i128 << 64,
    ];
    for &a in &patterns {
        for &b in &patterns {
            let exact = Integer::from(a) * Integer::from(b);
            assert_eq!(rug_of_i192(mul192(a, b)), exact, "a={a} b={b}");
            assert_eq!(rug_of_i256(mul256(a, b)), exact, "a={a} b={b}");
        }
    }
}

#[test]
fn shifts_match() {
    let one = I192::from(1i64);
    for s in [1u32, 63, 64, 65, 127, 128, 190] {
        let shifted = one << s;
        let exact = Integer::from(1) << s;
        assert_eq!(rug_of_i192(shifted), exact);
    }
    let v = I256::from(0x0123_4567_89ab_cdefi64);
    assert_eq!(rug_of_i256(v << 100), Integer::from(0x0123_4567_89ab_cdefi64) << 100);
}
