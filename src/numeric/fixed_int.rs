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

//! Stack-only fixed-width signed integers and bit-sized multiplication.
//!
//! Widths 32/64/128 reuse the machine types; `I192` and `I256` fill the gap
//! between 128 bits and the 253 bits a point-against-plane sign test needs.
//! Every product in the crate picks its output width from a closed-form bound
//! on the operand widths, so wrapping is impossible for in-contract inputs;
//! the truncating multiplies assert that in debug builds.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Shl, Sub};

use num_traits::{ToPrimitive, Zero};

/// 192-bit signed integer, two's complement, little-endian u64 limbs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct I192(pub [u64; 3]);

/// 256-bit signed integer, two's complement, little-endian u64 limbs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct I256(pub [u64; 4]);

macro_rules! impl_wide_int {
    ($name:ident, $limbs:expr) => {
        impl $name {
            pub const ZERO: Self = Self([0; $limbs]);

            #[inline]
            pub fn is_zero(&self) -> bool {
                self.0.iter().all(|&l| l == 0)
            }

            #[inline]
            pub fn is_negative(&self) -> bool {
                self.0[$limbs - 1] >> 63 == 1
            }

            /// -1, 0 or +1.
            #[inline]
            pub fn signum(&self) -> i8 {
                if self.is_negative() {
                    -1
                } else if self.is_zero() {
                    0
                } else {
                    1
                }
            }

            #[inline]
            pub fn abs(self) -> Self {
                if self.is_negative() { -self } else { self }
            }

            /// Magnitude limbs, zero-extended to four limbs.
            #[inline]
            pub(crate) fn magnitude_limbs(self) -> [u64; 4] {
                let m = self.abs();
                let mut out = [0u64; 4];
                out[..$limbs].copy_from_slice(&m.0);
                out
            }

            pub(crate) fn from_magnitude(mag: &[u64; 8], negative: bool) -> Self {
                debug_assert!(
                    mag[$limbs..].iter().all(|&l| l == 0) && mag[$limbs - 1] >> 63 == 0,
                    "product exceeds the declared output width"
                );
                let mut limbs = [0u64; $limbs];
                limbs.copy_from_slice(&mag[..$limbs]);
                let v = Self(limbs);
                if negative { -v } else { v }
            }

            /// Rounded conversion; exact only below 2^53.
            pub fn to_f64(&self) -> f64 {
                let m = self.magnitude_limbs();
                let mut acc = 0.0f64;
                for i in (0..4).rev() {
                    acc = acc * 18_446_744_073_709_551_616.0 + m[i] as f64;
                }
                if self.is_negative() { -acc } else { acc }
            }
        }

        impl Add for $name {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                let mut out = [0u64; $limbs];
                let mut carry = 0u64;
                for i in 0..$limbs {
                    let (s, c1) = self.0[i].overflowing_add(rhs.0[i]);
                    let (s, c2) = s.overflowing_add(carry);
                    out[i] = s;
                    carry = (c1 as u64) + (c2 as u64);
                }
                Self(out)
            }
        }

        impl Sub for $name {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                let mut out = [0u64; $limbs];
                let mut borrow = 0u64;
                for i in 0..$limbs {
                    let (d, b1) = self.0[i].overflowing_sub(rhs.0[i]);
                    let (d, b2) = d.overflowing_sub(borrow);
                    out[i] = d;
                    borrow = (b1 as u64) + (b2 as u64);
                }
                Self(out)
            }
        }

        impl Neg for $name {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                let mut out = [0u64; $limbs];
                let mut carry = 1u64;
                for i in 0..$limbs {
                    let (v, c) = (!self.0[i]).overflowing_add(carry);
                    out[i] = v;
                    carry = c as u64;
                }
                Self(out)
            }
        }

        impl Shl<u32> for $name {
            type Output = Self;
            fn shl(self, shift: u32) -> Self {
                debug_assert!((shift as usize) < $limbs * 64);
                let word = (shift / 64) as usize;
                let bits = shift % 64;
                let mut out = [0u64; $limbs];
                for i in (word..$limbs).rev() {
                    let mut v = self.0[i - word] << bits;
                    if bits > 0 && i > word {
                        v |= self.0[i - word - 1] >> (64 - bits);
                    }
                    out[i] = v;
                }
                Self(out)
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                // flip the sign bit of the top limb, then compare unsigned
                let a = self.0[$limbs - 1] ^ (1 << 63);
                let b = other.0[$limbs - 1] ^ (1 << 63);
                a.cmp(&b).then_with(|| {
                    for i in (0..$limbs - 1).rev() {
                        match self.0[i].cmp(&other.0[i]) {
                            Ordering::Equal => continue,
                            ord => return ord,
                        }
                    }
                    Ordering::Equal
                })
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl From<i64> for $name {
            #[inline]
            fn from(v: i64) -> Self {
                let fill = if v < 0 { u64::MAX } else { 0 };
                let mut limbs = [fill; $limbs];
                limbs[0] = v as u64;
                Self(limbs)
            }
        }

        impl From<i128> for $name {
            #[inline]
            fn from(v: i128) -> Self {
                let fill = if v < 0 { u64::MAX } else { 0 };
                let mut limbs = [fill; $limbs];
                limbs[0] = v as u64;
                limbs[1] = (v >> 64) as u64;
                Self(limbs)
            }
        }

        impl Zero for $name {
            fn zero() -> Self {
                Self::ZERO
            }
            fn is_zero(&self) -> bool {
                $name::is_zero(self)
            }
        }

        impl ToPrimitive for $name {
            fn to_i64(&self) -> Option<i64> {
                let sign_ok = if self.is_negative() {
                    self.0[1..].iter().all(|&l| l == u64::MAX) && self.0[0] >> 63 == 1
                } else {
                    self.0[1..].iter().all(|&l| l == 0) && self.0[0] >> 63 == 0
                };
                sign_ok.then(|| self.0[0] as i64)
            }
            fn to_u64(&self) -> Option<u64> {
                (!self.is_negative() && self.0[1..].iter().all(|&l| l == 0))
                    .then(|| self.0[0])
            }
            fn to_f64(&self) -> Option<f64> {
                Some($name::to_f64(self))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let m = self.magnitude_limbs();
                write!(
                    f,
                    "{}0x{:016x}_{:016x}_{:016x}_{:016x}",
                    if self.is_negative() { "-" } else { "" },
                    m[3],
                    m[2],
                    m[1],
                    m[0]
                )
            }
        }
    };
}

impl_wide_int!(I192, 3);
impl_wide_int!(I256, 4);

impl From<I192> for I256 {
    #[inline]
    fn from(v: I192) -> Self {
        let fill = if v.is_negative() { u64::MAX } else { 0 };
        I256([v.0[0], v.0[1], v.0[2], fill])
    }
}

/// Operand of a bit-sized multiplication: a sign plus up to four magnitude
/// limbs. Implemented for the machine integers and the wide types so any
/// mixed-width product goes through the same schoolbook core.
pub trait FixedInt: Copy {
    fn negative(self) -> bool;
    fn magnitude(self) -> [u64; 4];
}

impl FixedInt for i32 {
    #[inline]
    fn negative(self) -> bool {
        self < 0
    }
    #[inline]
    fn magnitude(self) -> [u64; 4] {
        [self.unsigned_abs() as u64, 0, 0, 0]
    }
}

impl FixedInt for i64 {
    #[inline]
    fn negative(self) -> bool {
        self < 0
    }
    #[inline]
    fn magnitude(self) -> [u64; 4] {
        [self.unsigned_abs(), 0, 0, 0]
    }
}

impl FixedInt for i128 {
    #[inline]
    fn negative(self) -> bool {
        self < 0
    }
    #[inline]
    fn magnitude(self) -> [u64; 4] {
        let m = self.unsigned_abs();
        [m as u64, (m >> 64) as u64, 0, 0]
    }
}

impl FixedInt for I192 {
    #[inline]
    fn negative(self) -> bool {
        self.is_negative()
    }
    #[inline]
    fn magnitude(self) -> [u64; 4] {
        self.magnitude_limbs()
    }
}

impl FixedInt for I256 {
    #[inline]
    fn negative(self) -> bool {
        self.is_negative()
    }
    #[inline]
    fn magnitude(self) -> [u64; 4] {
        self.magnitude_limbs()
    }
}

#[inline]
fn mul_magnitudes(a: [u64; 4], b: [u64; 4]) -> [u64; 8] {
    let mut out = [0u64; 8];
    for i in 0..4 {
        if a[i] == 0 {
            continue;
        }
        let mut carry = 0u128;
        for j in 0..4 {
            let t = a[i] as u128 * b[j] as u128 + out[i + j] as u128 + carry;
            out[i + j] = t as u64;
            carry = t >> 64;
        }
        out[i + 4] = carry as u64;
    }
    out
}

/// Product widened to 128 bits. Operand widths must sum to at most 127 bits.
#[inline]
pub fn mul128<A: Into<i128>, B: Into<i128>>(a: A, b: B) -> i128 {
    a.into() * b.into()
}

/// Product truncated to 192 bits; debug-asserts the value fits.
#[inline]
pub fn mul192<A: FixedInt, B: FixedInt>(a: A, b: B) -> I192 {
    let neg = a.negative() != b.negative();
    let mag = mul_magnitudes(a.magnitude(), b.magnitude());
    I192::from_magnitude(&mag, neg)
}

/// Product truncated to 256 bits; debug-asserts the value fits.
#[inline]
pub fn mul256<A: FixedInt, B: FixedInt>(a: A, b: B) -> I256 {
    let neg = a.negative() != b.negative();
    let mag = mul_magnitudes(a.magnitude(), b.magnitude());
    I256::from_magnitude(&mag, neg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub_roundtrip() {
        let a = I256::from(-5_000_000_000_000_000_000i64);
        let b = I256::from(i128::MAX / 3);
        assert_eq!(a + b - b, a);
        assert_eq!(a - a, I256::ZERO);
    }

    #[test]
    fn neg_and_signum() {
        let a = I192::from(42i64);
        assert_eq!((-a).signum(), -1);
        assert_eq!(a.signum(), 1);
        assert_eq!(I192::ZERO.signum(), 0);
        assert_eq!((-a).abs(), a);
    }

    #[test]
    fn ordering_crosses_zero() {
        let neg = I256::from(-1i64);
        let pos = I256::from(1i64);
        assert!(neg < I256::ZERO);
        assert!(I256::ZERO < pos);
        assert!(neg < pos);
    }

    #[test]
    fn widening_products() {
        // (2^80) * (2^80) = 2^160, representable in 192 bits
        let x = 1i128 << 80;
        let p = mul192(x, x);
        assert_eq!(p.0, [0, 0, 1 << 32]);

        let q = mul256(p, 4i64);
        assert_eq!(q.0, [0, 0, 1 << 34, 0]);

        assert_eq!(mul192(-3i64, 7i128), I192::from(-21i64));
    }

    #[test]
    fn shift_left() {
        let one = I192::from(1i64);
        assert_eq!(one << 64, I192([0, 1, 0]));
        assert_eq!(one << 65, I192([0, 2, 0]));
    }
}
