use crate::error::*;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValType {
    I32 = 0x7f,
    I64 = 0x7e,
    F32 = 0x7d,
    F64 = 0x7c,
}

impl ValType {
    pub fn name(self) -> &'static str {
        match self {
            ValType::I32 => "i32",
            ValType::I64 => "i64",
            ValType::F32 => "f32",
            ValType::F64 => "f64",
        }
    }

    /// Natural access width in bytes.
    #[inline]
    pub fn byte_width(self) -> u32 {
        match self {
            ValType::I32 | ValType::F32 => 4,
            ValType::I64 | ValType::F64 => 8,
        }
    }

    #[inline]
    pub fn is_int(self) -> bool { matches!(self, ValType::I32 | ValType::I64) }
}

impl Display for ValType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { f.write_str(self.name()) }
}

impl FromStr for ValType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "i32" => Ok(ValType::I32),
            "i64" => Ok(ValType::I64),
            "f32" => Ok(ValType::F32),
            "f64" => Ok(ValType::F64),
            _ => validation(TYPE_MISMATCH),
        }
    }
}

/// An operand-stack value. Unsigned integers have no variant of their own:
/// `from_u32`/`as_u32` view the same two's-complement bits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
}

impl Default for Value {
    fn default() -> Self { Value::I32(0) }
}

impl Value {
    pub fn default_for(ty: ValType) -> Self {
        match ty {
            ValType::I32 => Value::I32(0),
            ValType::I64 => Value::I64(0),
            ValType::F32 => Value::F32(0.0),
            ValType::F64 => Value::F64(0.0),
        }
    }

    #[inline]
    pub fn ty(&self) -> ValType {
        match self {
            Value::I32(_) => ValType::I32,
            Value::I64(_) => ValType::I64,
            Value::F32(_) => ValType::F32,
            Value::F64(_) => ValType::F64,
        }
    }

    #[inline] pub fn from_u32(v: u32) -> Self { Value::I32(v as i32) }
    #[inline] pub fn from_u64(v: u64) -> Self { Value::I64(v as i64) }
    #[inline] pub fn from_f32_bits(bits: u32) -> Self { Value::F32(f32::from_bits(bits)) }
    #[inline] pub fn from_f64_bits(bits: u64) -> Self { Value::F64(f64::from_bits(bits)) }

    #[inline]
    pub fn as_i32(self) -> Result<i32, Error> {
        match self { Value::I32(v) => Ok(v), _ => validation(TYPE_MISMATCH) }
    }
    #[inline]
    pub fn as_i64(self) -> Result<i64, Error> {
        match self { Value::I64(v) => Ok(v), _ => validation(TYPE_MISMATCH) }
    }
    #[inline]
    pub fn as_f32(self) -> Result<f32, Error> {
        match self { Value::F32(v) => Ok(v), _ => validation(TYPE_MISMATCH) }
    }
    #[inline]
    pub fn as_f64(self) -> Result<f64, Error> {
        match self { Value::F64(v) => Ok(v), _ => validation(TYPE_MISMATCH) }
    }
    #[inline] pub fn as_u32(self) -> Result<u32, Error> { Ok(self.as_i32()? as u32) }
    #[inline] pub fn as_u64(self) -> Result<u64, Error> { Ok(self.as_i64()? as u64) }

    /// Raw bit pattern, zero-extended to 64 bits.
    #[inline]
    pub fn bits(self) -> u64 {
        match self {
            Value::I32(v) => v as u32 as u64,
            Value::I64(v) => v as u64,
            Value::F32(v) => v.to_bits() as u64,
            Value::F64(v) => v.to_bits(),
        }
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        match self {
            Value::F32(v) => v.is_nan(),
            Value::F64(v) => v.is_nan(),
            _ => false,
        }
    }
}

impl From<i32> for Value { #[inline] fn from(v: i32) -> Self { Value::I32(v) } }
impl From<i64> for Value { #[inline] fn from(v: i64) -> Self { Value::I64(v) } }
impl From<f32> for Value { #[inline] fn from(v: f32) -> Self { Value::F32(v) } }
impl From<f64> for Value { #[inline] fn from(v: f64) -> Self { Value::F64(v) } }

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::I32(v) => write!(f, "{} (i32)", v),
            Value::I64(v) => write!(f, "{} (i64)", v),
            Value::F32(v) => write!(f, "{} (f32)", v),
            Value::F64(v) => write!(f, "{} (f64)", v),
        }
    }
}
