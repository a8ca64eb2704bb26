use crate::error::*;
use paste::paste;

macro_rules! impl_int_arith {
    ($int:ident, $uint:ident) => {
        paste! {
            #[inline(always)]
            pub fn [<$int _add>](a: $int, b: $int) -> $int { a.wrapping_add(b) }
            #[inline(always)]
            pub fn [<$int _sub>](a: $int, b: $int) -> $int { a.wrapping_sub(b) }
            #[inline(always)]
            pub fn [<$int _mul>](a: $int, b: $int) -> $int { a.wrapping_mul(b) }

            /// Truncates toward zero. `MIN / -1` wraps back to `MIN`.
            #[inline(always)]
            pub fn [<$int _div_s>](a: $int, b: $int) -> Result<$int, Error> {
                if b == 0 { return trap(DIVIDE_BY_ZERO); }
                Ok(a.wrapping_div(b))
            }

            #[inline(always)]
            pub fn [<$int _div_u>](a: $int, b: $int) -> Result<$int, Error> {
                if b == 0 { return trap(DIVIDE_BY_ZERO); }
                Ok(((a as $uint) / (b as $uint)) as $int)
            }

            /// Result takes the sign of the dividend; `MIN % -1` is 0.
            #[inline(always)]
            pub fn [<$int _rem_s>](a: $int, b: $int) -> Result<$int, Error> {
                if b == 0 { return trap(DIVIDE_BY_ZERO); }
                Ok(a.wrapping_rem(b))
            }

            #[inline(always)]
            pub fn [<$int _rem_u>](a: $int, b: $int) -> Result<$int, Error> {
                if b == 0 { return trap(DIVIDE_BY_ZERO); }
                Ok(((a as $uint) % (b as $uint)) as $int)
            }
        }
    };
}

impl_int_arith!(i32, u32);
impl_int_arith!(i64, u64);
