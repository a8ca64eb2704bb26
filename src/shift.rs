//! Shifts and rotations. The amount is always reduced modulo the operand
//! width before use (low 5 bits for i32, low 6 bits for i64).

use paste::paste;

macro_rules! impl_shift {
    ($int:ident, $uint:ident, $bits:literal) => {
        paste! {
            #[inline(always)]
            pub fn [<$int _shl>](a: $int, b: $int) -> $int {
                a.wrapping_shl((b as $uint % $bits) as u32)
            }
            /// Arithmetic shift, replicates the sign bit.
            #[inline(always)]
            pub fn [<$int _shr_s>](a: $int, b: $int) -> $int {
                a.wrapping_shr((b as $uint % $bits) as u32)
            }
            /// Logical shift, fills with zeros.
            #[inline(always)]
            pub fn [<$int _shr_u>](a: $int, b: $int) -> $int {
                (a as $uint).wrapping_shr((b as $uint % $bits) as u32) as $int
            }
            #[inline(always)]
            pub fn [<$int _rotl>](a: $int, b: $int) -> $int {
                (a as $uint).rotate_left((b as $uint % $bits) as u32) as $int
            }
            #[inline(always)]
            pub fn [<$int _rotr>](a: $int, b: $int) -> $int {
                (a as $uint).rotate_right((b as $uint % $bits) as u32) as $int
            }
        }
    };
}

impl_shift!(i32, u32, 32);
impl_shift!(i64, u64, 64);
