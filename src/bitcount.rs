use paste::paste;

macro_rules! impl_bitcount {
    ($int:ident, $uint:ident) => {
        paste! {
            /// Leading zeros from the top bit down; the full width for zero.
            #[inline(always)]
            pub fn [<$int _clz>](a: $int) -> $int { (a as $uint).leading_zeros() as $int }
            #[inline(always)]
            pub fn [<$int _ctz>](a: $int) -> $int { (a as $uint).trailing_zeros() as $int }
            #[inline(always)]
            pub fn [<$int _popcnt>](a: $int) -> $int { (a as $uint).count_ones() as $int }
        }
    };
}

impl_bitcount!(i32, u32);
impl_bitcount!(i64, u64);
