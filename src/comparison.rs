//! Relational operators. Every result is an `i32` holding 1 or 0.

use paste::paste;

macro_rules! compare {
    ($name:ident, $type:ty, $op:tt) => {
        #[inline(always)]
        pub fn $name(a: $type, b: $type) -> i32 { (a $op b) as i32 }
    };
}

macro_rules! impl_int_compare {
    ($int:ident, $uint:ident) => {
        paste! {
            #[inline(always)]
            pub fn [<$int _eqz>](a: $int) -> i32 { (a == 0) as i32 }

            compare!([<$int _eq>], $int, ==);
            compare!([<$int _ne>], $int, !=);
            compare!([<$int _lt_s>], $int, <);
            compare!([<$int _gt_s>], $int, >);
            compare!([<$int _le_s>], $int, <=);
            compare!([<$int _ge_s>], $int, >=);

            #[inline(always)]
            pub fn [<$int _lt_u>](a: $int, b: $int) -> i32 { ((a as $uint) < (b as $uint)) as i32 }
            #[inline(always)]
            pub fn [<$int _gt_u>](a: $int, b: $int) -> i32 { ((a as $uint) > (b as $uint)) as i32 }
            #[inline(always)]
            pub fn [<$int _le_u>](a: $int, b: $int) -> i32 { ((a as $uint) <= (b as $uint)) as i32 }
            #[inline(always)]
            pub fn [<$int _ge_u>](a: $int, b: $int) -> i32 { ((a as $uint) >= (b as $uint)) as i32 }
        }
    };
}

// IEEE comparisons: any NaN operand makes everything but `ne` false.
macro_rules! impl_float_compare {
    ($float:ident) => {
        paste! {
            compare!([<$float _eq>], $float, ==);
            compare!([<$float _ne>], $float, !=);
            compare!([<$float _lt>], $float, <);
            compare!([<$float _gt>], $float, >);
            compare!([<$float _le>], $float, <=);
            compare!([<$float _ge>], $float, >=);
        }
    };
}

impl_int_compare!(i32, u32);
impl_int_compare!(i64, u64);
impl_float_compare!(f32);
impl_float_compare!(f64);
