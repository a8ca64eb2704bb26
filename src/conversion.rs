//! Width changes, float/int conversions and bit reinterpretation.
//!
//! Trapping truncation follows one policy for every width: a NaN input is
//! an invalid conversion, anything whose truncated value falls outside the
//! target range (infinities included) is an integer overflow. The
//! `trunc_sat` family clamps instead and maps NaN to zero.

use crate::error::*;
use crate::reinterpret::Reinterpret;

#[inline(always)]
pub fn i32_wrap_i64(a: i64) -> i32 { a as i32 }

#[inline(always)]
pub fn i64_extend_i32_s(a: i32) -> i64 { a as i64 }
#[inline(always)]
pub fn i64_extend_i32_u(a: i32) -> i64 { a as u32 as i64 }

#[inline(always)]
pub fn i32_extend8_s(a: i32) -> i32 { a as i8 as i32 }
#[inline(always)]
pub fn i32_extend16_s(a: i32) -> i32 { a as i16 as i32 }
#[inline(always)]
pub fn i64_extend8_s(a: i64) -> i64 { a as i8 as i64 }
#[inline(always)]
pub fn i64_extend16_s(a: i64) -> i64 { a as i16 as i64 }
#[inline(always)]
pub fn i64_extend32_s(a: i64) -> i64 { a as i32 as i64 }

// Bounds are powers of two, exact in f64; f32 inputs widen to f64 exactly.
#[inline(always)]
fn checked_trunc(x: f64, lower: f64, upper: f64) -> Result<f64, Error> {
    if x.is_nan() { return trap(INVALID_CONV_TO_INT); }
    let t = x.trunc();
    if t < lower || t >= upper { return trap(INTEGER_OVERFLOW); }
    Ok(t)
}

const I32_LOWER: f64 = -2147483648.0;
const I32_UPPER: f64 = 2147483648.0;
const U32_UPPER: f64 = 4294967296.0;
const I64_LOWER: f64 = -9223372036854775808.0;
const I64_UPPER: f64 = 9223372036854775808.0;
const U64_UPPER: f64 = 18446744073709551616.0;

macro_rules! trunc {
    ($name:ident, $src:ident -> $dst:ident as $repr:ident : $lower:expr, $upper:expr) => {
        #[inline(always)]
        pub fn $name(x: $src) -> Result<$repr, Error> {
            Ok(checked_trunc(x as f64, $lower, $upper)? as $dst as $repr)
        }
    };
}

trunc!(i32_trunc_f32_s, f32 -> i32 as i32 : I32_LOWER, I32_UPPER);
trunc!(i32_trunc_f32_u, f32 -> u32 as i32 : 0.0, U32_UPPER);
trunc!(i32_trunc_f64_s, f64 -> i32 as i32 : I32_LOWER, I32_UPPER);
trunc!(i32_trunc_f64_u, f64 -> u32 as i32 : 0.0, U32_UPPER);
trunc!(i64_trunc_f32_s, f32 -> i64 as i64 : I64_LOWER, I64_UPPER);
trunc!(i64_trunc_f32_u, f32 -> u64 as i64 : 0.0, U64_UPPER);
trunc!(i64_trunc_f64_s, f64 -> i64 as i64 : I64_LOWER, I64_UPPER);
trunc!(i64_trunc_f64_u, f64 -> u64 as i64 : 0.0, U64_UPPER);

// `as` from float to int already saturates and sends NaN to zero.
macro_rules! trunc_sat {
    ($name:ident, $src:ident -> $dst:ident as $repr:ident) => {
        #[inline(always)]
        pub fn $name(x: $src) -> $repr { x as $dst as $repr }
    };
}

trunc_sat!(i32_trunc_sat_f32_s, f32 -> i32 as i32);
trunc_sat!(i32_trunc_sat_f32_u, f32 -> u32 as i32);
trunc_sat!(i32_trunc_sat_f64_s, f64 -> i32 as i32);
trunc_sat!(i32_trunc_sat_f64_u, f64 -> u32 as i32);
trunc_sat!(i64_trunc_sat_f32_s, f32 -> i64 as i64);
trunc_sat!(i64_trunc_sat_f32_u, f32 -> u64 as i64);
trunc_sat!(i64_trunc_sat_f64_s, f64 -> i64 as i64);
trunc_sat!(i64_trunc_sat_f64_u, f64 -> u64 as i64);

macro_rules! convert {
    ($name:ident, $src:ident as $view:ident -> $dst:ident) => {
        #[inline(always)]
        pub fn $name(a: $src) -> $dst { a as $view as $dst }
    };
}

convert!(f32_convert_i32_s, i32 as i32 -> f32);
convert!(f32_convert_i32_u, i32 as u32 -> f32);
convert!(f32_convert_i64_s, i64 as i64 -> f32);
convert!(f32_convert_i64_u, i64 as u64 -> f32);
convert!(f64_convert_i32_s, i32 as i32 -> f64);
convert!(f64_convert_i32_u, i32 as u32 -> f64);
convert!(f64_convert_i64_s, i64 as i64 -> f64);
convert!(f64_convert_i64_u, i64 as u64 -> f64);
convert!(f32_demote_f64, f64 as f64 -> f32);
convert!(f64_promote_f32, f32 as f32 -> f64);

#[inline(always)]
pub fn i32_reinterpret_f32(x: f32) -> i32 { x.reinterpret() }
#[inline(always)]
pub fn i64_reinterpret_f64(x: f64) -> i64 { x.reinterpret() }
#[inline(always)]
pub fn f32_reinterpret_i32(a: i32) -> f32 { a.reinterpret() }
#[inline(always)]
pub fn f64_reinterpret_i64(a: i64) -> f64 { a.reinterpret() }
