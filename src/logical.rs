use paste::paste;

macro_rules! impl_logical {
    ($int:ident) => {
        paste! {
            #[inline(always)]
            pub fn [<$int _and>](a: $int, b: $int) -> $int { a & b }
            #[inline(always)]
            pub fn [<$int _or>](a: $int, b: $int) -> $int { a | b }
            #[inline(always)]
            pub fn [<$int _xor>](a: $int, b: $int) -> $int { a ^ b }
            #[inline(always)]
            pub fn [<$int _not>](a: $int) -> $int { !a }
        }
    };
}

impl_logical!(i32);
impl_logical!(i64);
