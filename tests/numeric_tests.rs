use wasm_opcore::arithmetic::*;
use wasm_opcore::bitcount::*;
use wasm_opcore::comparison::*;
use wasm_opcore::conversion::*;
use wasm_opcore::error::*;
use wasm_opcore::float::*;
use wasm_opcore::logical::*;
use wasm_opcore::shift::*;
use wasm_opcore::Reinterpret;

#[test]
fn add_sub_mul_wrap() {
    assert_eq!(i32_add(i32::MAX, 1), i32::MIN);
    assert_eq!(i32_sub(i32::MIN, 1), i32::MAX);
    assert_eq!(i32_mul(123456789, 987654321), -67153019);
    assert_eq!(i64_add(i64::MAX, 1), i64::MIN);
    assert_eq!(i64_mul(i64::MAX, 3), 9223372036854775805);
}

#[test]
fn signed_division_truncates_toward_zero() {
    assert_eq!(i32_div_s(-7, 2), Ok(-3));
    assert_eq!(i32_div_s(7, -2), Ok(-3));
    assert_eq!(i32_rem_s(-7, 2), Ok(-1));
    assert_eq!(i32_rem_s(7, -2), Ok(1));
    assert_eq!(i64_div_s(-7, 2), Ok(-3));
}

#[test]
fn min_over_minus_one_wraps() {
    assert_eq!(i32_div_s(i32::MIN, -1), Ok(i32::MIN));
    assert_eq!(i32_rem_s(i32::MIN, -1), Ok(0));
    assert_eq!(i64_div_s(i64::MIN, -1), Ok(i64::MIN));
    assert_eq!(i64_rem_s(i64::MIN, -1), Ok(0));
}

#[test]
fn zero_divisor_traps() {
    let trap32: Result<i32, Error> = Err(Error::Trap(DIVIDE_BY_ZERO));
    assert_eq!(i32_div_s(1, 0), trap32);
    assert_eq!(i32_div_u(1, 0), trap32);
    assert_eq!(i32_rem_s(1, 0), trap32);
    assert_eq!(i32_rem_u(1, 0), trap32);

    let trap64: Result<i64, Error> = Err(Error::Trap(DIVIDE_BY_ZERO));
    assert_eq!(i64_div_s(1, 0), trap64);
    assert_eq!(i64_div_u(1, 0), trap64);
    assert_eq!(i64_rem_s(1, 0), trap64);
    assert_eq!(i64_rem_u(1, 0), trap64);
    assert_eq!(i64_rem_s(i64::MIN, 0), trap64);
}

#[test]
fn unsigned_views_of_negative_bits() {
    assert_eq!(i32_div_u(-1, 2), Ok(i32::MAX));
    assert_eq!(i32_rem_u(-1, 10), Ok(5));
    assert_eq!(i64_div_u(-1, 2), Ok(i64::MAX));
    assert_eq!(i32_lt_u(-1, 1), 0);
    assert_eq!(i32_lt_s(-1, 1), 1);
    assert_eq!(i64_ge_u(-1, 0), 1);
}

#[test]
fn bit_counts() {
    assert_eq!(i32_clz(0), 32);
    assert_eq!(i32_ctz(0), 32);
    assert_eq!(i32_popcnt(0), 0);
    assert_eq!(i32_popcnt(-1), 32);
    assert_eq!(i32_clz(1), 31);
    assert_eq!(i32_ctz(i32::MIN), 31);
    assert_eq!(i64_clz(0), 64);
    assert_eq!(i64_ctz(0), 64);
    assert_eq!(i64_popcnt(-1), 64);
}

#[test]
fn comparisons_return_zero_or_one() {
    assert_eq!(i32_eqz(0), 1);
    assert_eq!(i32_eqz(7), 0);
    assert_eq!(i64_eqz(0), 1);
    assert_eq!(i32_eq(5, 5), 1);
    assert_eq!(i32_ne(5, 5), 0);
    assert_eq!(i64_le_s(-3, -3), 1);
    assert_eq!(i64_gt_u(i64::MIN, i64::MAX), 1);
}

#[test]
fn float_comparisons_with_nan() {
    let nan = f32::NAN;
    assert_eq!(f32_eq(nan, nan), 0);
    assert_eq!(f32_ne(nan, nan), 1);
    assert_eq!(f32_lt(nan, 1.0), 0);
    assert_eq!(f64_ge(f64::NAN, 1.0), 0);
    assert_eq!(f64_eq(0.0, -0.0), 1);
}

#[test]
fn logical_ops() {
    assert_eq!(i32_and(0b1100, 0b1010), 0b1000);
    assert_eq!(i32_or(0b1100, 0b1010), 0b1110);
    assert_eq!(i32_xor(0b1100, 0b1010), 0b0110);
    assert_eq!(i32_not(0), -1);
    assert_eq!(i64_not(-1), 0);
}

#[test]
fn shift_amount_taken_modulo_width() {
    assert_eq!(i32_shl(1, 32), 1);
    assert_eq!(i32_shl(1, 33), 2);
    assert_eq!(i32_shr_s(i32::MIN, 31), -1);
    assert_eq!(i32_shr_u(i32::MIN, 31), 1);
    assert_eq!(i32_shr_s(-8, -1), -1);
    assert_eq!(i64_shl(1, 64), 1);
    assert_eq!(i64_shr_u(-1, 65), i64::MAX);
}

#[test]
fn rotations() {
    assert_eq!(i32_rotl(0x12345678, 8), 878082066);
    assert_eq!(i32_rotl(i32::MIN, 1), 1);
    assert_eq!(i64_rotr(1, 1), i64::MIN);
    for n in 0..32 {
        let x = 0x1234_5678;
        assert_eq!(i32_rotr(i32_rotl(x, n), n), x, "rotation by {}", n);
    }
    for n in 0..64 {
        let x = 0x0123_4567_89ab_cdef;
        assert_eq!(i64_rotl(i64_rotr(x, n), n), x, "rotation by {}", n);
    }
}

#[test]
fn float_min_max_zeros_and_nan() {
    assert!(f32_min(0.0, -0.0).is_sign_negative());
    assert!(f32_min(-0.0, 0.0).is_sign_negative());
    assert!(f32_max(-0.0, 0.0).is_sign_positive());
    assert!(f64_max(0.0, -0.0).is_sign_positive());
    assert!(f64_min(f64::NAN, 1.0).is_nan());
    assert!(f64_max(1.0, f64::NAN).is_nan());
    assert_eq!(f32_min(1.0, 2.0), 1.0);
    assert_eq!(f64_max(1.0, 2.0), 2.0);
}

#[test]
fn float_rounding() {
    assert_eq!(f32_nearest(2.5), 2.0);
    assert_eq!(f32_nearest(3.5), 4.0);
    assert_eq!(f64_nearest(-2.5), -2.0);
    assert!(f64_nearest(-0.5).is_sign_negative());
    assert_eq!(f32_ceil(1.1), 2.0);
    assert_eq!(f64_floor(-1.1), -2.0);
    assert_eq!(f32_trunc(-1.9), -1.0);
    assert_eq!(f64_sqrt(16.0), 4.0);
}

#[test]
fn float_sign_ops() {
    assert_eq!(f32_abs(-3.5), 3.5);
    assert!(f32_neg(0.0).is_sign_negative());
    assert_eq!(f64_copysign(1.5, -0.0), -1.5);
    assert_eq!(f64_copysign(-1.5, 2.0), 1.5);
    assert_eq!(f32_div(1.0, 0.0), f32::INFINITY);
    assert!(f64_div(0.0, 0.0).is_nan());
}

#[test]
fn width_changes() {
    assert_eq!(i32_wrap_i64(0x1_0000_0005), 5);
    assert_eq!(i64_extend_i32_s(-1), -1);
    assert_eq!(i64_extend_i32_u(-1), 0xffff_ffff);
    assert_eq!(i32_extend8_s(0x80), -128);
    assert_eq!(i32_extend8_s(0x7f), 127);
    assert_eq!(i32_extend16_s(0x8000), -32768);
    assert_eq!(i64_extend8_s(0xff), -1);
    assert_eq!(i64_extend16_s(0x1_7fff), 32767);
    assert_eq!(i64_extend32_s(0x8000_0000), -2147483648);
}

#[test]
fn trapping_truncation() {
    assert_eq!(i32_trunc_f32_s(-3.9), Ok(-3));
    assert_eq!(i32_trunc_f64_s(-2147483648.9), Ok(i32::MIN));
    assert_eq!(i32_trunc_f64_u(-0.9), Ok(0));
    assert_eq!(i32_trunc_f64_u(4294967295.5), Ok(-1));
    assert_eq!(i64_trunc_f64_s(-1e18), Ok(-1_000_000_000_000_000_000));
    assert_eq!(i64_trunc_f64_u(1.8446744073709550e19), Ok(-2048));

    assert_eq!(i32_trunc_f32_s(f32::NAN), Err(Error::Trap(INVALID_CONV_TO_INT)));
    assert_eq!(i64_trunc_f64_u(f64::NAN), Err(Error::Trap(INVALID_CONV_TO_INT)));
    assert_eq!(i32_trunc_f64_s(2147483648.0), Err(Error::Trap(INTEGER_OVERFLOW)));
    assert_eq!(i32_trunc_f32_u(-1.0), Err(Error::Trap(INTEGER_OVERFLOW)));
    assert_eq!(i64_trunc_f32_s(f32::INFINITY), Err(Error::Trap(INTEGER_OVERFLOW)));
    assert_eq!(i64_trunc_f64_s(9223372036854775808.0), Err(Error::Trap(INTEGER_OVERFLOW)));
}

#[test]
fn saturating_truncation() {
    assert_eq!(i32_trunc_sat_f32_s(f32::NAN), 0);
    assert_eq!(i32_trunc_sat_f64_s(1e10), i32::MAX);
    assert_eq!(i32_trunc_sat_f64_s(-1e10), i32::MIN);
    assert_eq!(i32_trunc_sat_f64_u(-5.0), 0);
    assert_eq!(i32_trunc_sat_f32_u(f32::INFINITY), -1);
    assert_eq!(i64_trunc_sat_f64_u(f64::INFINITY), -1);
    assert_eq!(i64_trunc_sat_f32_s(f32::NEG_INFINITY), i64::MIN);
    assert_eq!(i64_trunc_sat_f64_s(-3.9), -3);
}

#[test]
fn int_to_float() {
    assert_eq!(f32_convert_i32_u(-1), 4294967296.0);
    assert_eq!(f64_convert_i32_u(-1), 4294967295.0);
    assert_eq!(f64_convert_i64_u(-1), 18446744073709551616.0);
    assert_eq!(f64_convert_i64_s(-1), -1.0);
    assert_eq!(f32_convert_i64_s(1 << 40), 1099511627776.0);
    assert_eq!(f32_demote_f64(1.5), 1.5);
    assert_eq!(f64_promote_f32(-3.5), -3.5);
}

#[test]
fn reinterpret_round_trips() {
    assert_eq!(i32_reinterpret_f32(1.0), 1065353216);
    assert_eq!(f64_reinterpret_i64(4609434218613702656), 1.5);
    assert_eq!(i64_reinterpret_f64(-0.0), i64::MIN);
    for bits in [0u32, 1, 0x7f80_0000, 0x7fc0_0001, 0xffff_ffff, 0x8000_0000] {
        let f: f32 = bits.reinterpret();
        let back: u32 = f.reinterpret();
        assert_eq!(back, bits);
        assert_eq!(i32_reinterpret_f32(f32_reinterpret_i32(bits as i32)), bits as i32);
    }
    for bits in [0u64, 1, 0x7ff0_0000_0000_0000, 0x7ff8_0000_0000_0001, u64::MAX] {
        assert_eq!(i64_reinterpret_f64(f64_reinterpret_i64(bits as i64)), bits as i64);
    }
}

#[test]
fn error_classification() {
    assert!(Error::Trap(DIVIDE_BY_ZERO).is_trap());
    assert!(!Error::Trap(DIVIDE_BY_ZERO).is_fatal());
    assert!(Error::Allocation(ALLOCATION_FAILED).is_fatal());
    assert!(!Error::Validation(TYPE_MISMATCH).is_trap());
    assert_eq!(Error::Link(DATA_SEG_DNF).to_string(), "data segment does not fit");
    assert_eq!(Error::Trap(OOB_MEMORY_ACCESS).message(), "out of bounds memory access");
}
