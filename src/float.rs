use paste::paste;

macro_rules! impl_float_ops {
    ($float:ident) => {
        paste! {
            #[inline(always)]
            pub fn [<$float _add>](a: $float, b: $float) -> $float { a + b }
            #[inline(always)]
            pub fn [<$float _sub>](a: $float, b: $float) -> $float { a - b }
            #[inline(always)]
            pub fn [<$float _mul>](a: $float, b: $float) -> $float { a * b }
            #[inline(always)]
            pub fn [<$float _div>](a: $float, b: $float) -> $float { a / b }

            #[inline(always)]
            pub fn [<$float _min>](a: $float, b: $float) -> $float { [<$float _minmax>](a, b, true) }
            #[inline(always)]
            pub fn [<$float _max>](a: $float, b: $float) -> $float { [<$float _minmax>](a, b, false) }

            // NaN wins over everything; among zeros -0 is the smaller one.
            #[inline(always)]
            fn [<$float _minmax>](a: $float, b: $float, want_negative: bool) -> $float {
                if a.is_nan() {
                    a
                } else if b.is_nan() {
                    b
                } else if a == b && a == 0.0 {
                    if a.is_sign_negative() == want_negative { a } else { b }
                } else if want_negative {
                    a.min(b)
                } else {
                    a.max(b)
                }
            }

            #[inline(always)]
            pub fn [<$float _copysign>](a: $float, b: $float) -> $float { a.copysign(b) }
            #[inline(always)]
            pub fn [<$float _abs>](a: $float) -> $float { a.abs() }
            #[inline(always)]
            pub fn [<$float _neg>](a: $float) -> $float { -a }
            #[inline(always)]
            pub fn [<$float _ceil>](a: $float) -> $float { a.ceil() }
            #[inline(always)]
            pub fn [<$float _floor>](a: $float) -> $float { a.floor() }
            #[inline(always)]
            pub fn [<$float _trunc>](a: $float) -> $float { a.trunc() }
            /// Round to nearest, ties to even.
            #[inline(always)]
            pub fn [<$float _nearest>](a: $float) -> $float { a.round_ties_even() }
            #[inline(always)]
            pub fn [<$float _sqrt>](a: $float) -> $float { a.sqrt() }
        }
    };
}

impl_float_ops!(f32);
impl_float_ops!(f64);
