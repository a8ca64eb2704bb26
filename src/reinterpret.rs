//! Bit-level reinterpretation between equal-width representations.
//!
//! Everything here is a pure function of its input; there is no scratch
//! cell shared between calls, so any number of interpreters may run on any
//! number of threads.

/// Same-width bit cast. Never a numeric conversion.
pub trait Reinterpret<T> {
    fn reinterpret(self) -> T;
}

macro_rules! impl_reinterpret {
    ($float:ty, $int:ty, $uint:ty) => {
        impl Reinterpret<$int> for $float {
            #[inline(always)]
            fn reinterpret(self) -> $int { self.to_bits() as $int }
        }
        impl Reinterpret<$uint> for $float {
            #[inline(always)]
            fn reinterpret(self) -> $uint { self.to_bits() }
        }
        impl Reinterpret<$float> for $int {
            #[inline(always)]
            fn reinterpret(self) -> $float { <$float>::from_bits(self as $uint) }
        }
        impl Reinterpret<$float> for $uint {
            #[inline(always)]
            fn reinterpret(self) -> $float { <$float>::from_bits(self) }
        }
    };
}

impl_reinterpret!(f32, i32, u32);
impl_reinterpret!(f64, i64, u64);

/// Little-endian codec used by linear memory for every typed access.
pub trait LeBytes: Copy {
    const WIDTH: usize;

    /// Decodes from the first `WIDTH` bytes of `bytes`.
    fn from_le_slice(bytes: &[u8]) -> Self;

    /// Encodes into the first `WIDTH` bytes of `out`.
    fn write_le_slice(self, out: &mut [u8]);
}

macro_rules! impl_le_bytes {
    ($($type:ty),*) => {
        $(
            impl LeBytes for $type {
                const WIDTH: usize = std::mem::size_of::<$type>();

                #[inline(always)]
                fn from_le_slice(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$type>()];
                    raw.copy_from_slice(&bytes[..Self::WIDTH]);
                    <$type>::from_le_bytes(raw)
                }

                #[inline(always)]
                fn write_le_slice(self, out: &mut [u8]) {
                    out[..Self::WIDTH].copy_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}

impl_le_bytes!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);
