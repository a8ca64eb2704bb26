//! Operation lookup for the instruction dispatcher.
//!
//! Every operation is addressed by (family, width, signedness) through the
//! enums below and resolved by exhaustive `match`, so a missing combination
//! is a compile error rather than a failed name lookup at run time.
//! Operands are passed in push order: `operands[0]` is the deepest value.

use crate::arithmetic::*;
use crate::bitcount::*;
use crate::comparison::*;
use crate::conversion::*;
use crate::error::*;
use crate::float::*;
use crate::logical::*;
use crate::shift::*;
use crate::value::{ValType, Value};
use crate::wasm_memory::WasmMemory;
use paste::paste;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width { W32, W64 }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signedness { Signed, Unsigned }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntUnOp { Clz, Ctz, Popcnt, Eqz, Not }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntBinOp {
    Add,
    Sub,
    Mul,
    Div(Signedness),
    Rem(Signedness),
    And,
    Or,
    Xor,
    Shl,
    Shr(Signedness),
    Rotl,
    Rotr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntRelOp {
    Eq,
    Ne,
    Lt(Signedness),
    Gt(Signedness),
    Le(Signedness),
    Ge(Signedness),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatUnOp { Abs, Neg, Ceil, Floor, Trunc, Nearest, Sqrt }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatBinOp { Add, Sub, Mul, Div, Min, Max, Copysign }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatRelOp { Eq, Ne, Lt, Gt, Le, Ge }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConvOp {
    /// i64 -> i32, low bits.
    Wrap,
    /// i32 -> i64.
    Extend(Signedness),
    /// Sign-extend the low `bits` of an integer of the same `width`.
    ExtendInPlace { width: Width, bits: u8 },
    /// Float of width `from` -> integer of width `to`.
    Trunc { from: Width, to: Width, sign: Signedness, saturating: bool },
    /// Integer of width `from` -> float of width `to`.
    Convert { from: Width, to: Width, sign: Signedness },
    Demote,
    Promote,
    /// Integer bits -> float of the same width.
    ReinterpretFloat(Width),
    /// Float bits -> integer of the same width.
    ReinterpretInt(Width),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumOp {
    IntUnary(Width, IntUnOp),
    IntBinary(Width, IntBinOp),
    IntCompare(Width, IntRelOp),
    FloatUnary(Width, FloatUnOp),
    FloatBinary(Width, FloatBinOp),
    FloatCompare(Width, FloatRelOp),
    Convert(ConvOp),
}

macro_rules! int_unary {
    ($int:ident, $op:expr, $a:ident) => {{
        paste! {
            let a = $a.[<as_ $int>]()?;
            match $op {
                IntUnOp::Clz => Value::from([<$int _clz>](a)),
                IntUnOp::Ctz => Value::from([<$int _ctz>](a)),
                IntUnOp::Popcnt => Value::from([<$int _popcnt>](a)),
                IntUnOp::Not => Value::from([<$int _not>](a)),
                IntUnOp::Eqz => Value::I32([<$int _eqz>](a)),
            }
        }
    }};
}

macro_rules! int_binary {
    ($int:ident, $op:expr, $a:ident, $b:ident) => {{
        paste! {
            let (a, b) = ($a.[<as_ $int>]()?, $b.[<as_ $int>]()?);
            Value::from(match $op {
                IntBinOp::Add => [<$int _add>](a, b),
                IntBinOp::Sub => [<$int _sub>](a, b),
                IntBinOp::Mul => [<$int _mul>](a, b),
                IntBinOp::Div(Signedness::Signed) => [<$int _div_s>](a, b)?,
                IntBinOp::Div(Signedness::Unsigned) => [<$int _div_u>](a, b)?,
                IntBinOp::Rem(Signedness::Signed) => [<$int _rem_s>](a, b)?,
                IntBinOp::Rem(Signedness::Unsigned) => [<$int _rem_u>](a, b)?,
                IntBinOp::And => [<$int _and>](a, b),
                IntBinOp::Or => [<$int _or>](a, b),
                IntBinOp::Xor => [<$int _xor>](a, b),
                IntBinOp::Shl => [<$int _shl>](a, b),
                IntBinOp::Shr(Signedness::Signed) => [<$int _shr_s>](a, b),
                IntBinOp::Shr(Signedness::Unsigned) => [<$int _shr_u>](a, b),
                IntBinOp::Rotl => [<$int _rotl>](a, b),
                IntBinOp::Rotr => [<$int _rotr>](a, b),
            })
        }
    }};
}

macro_rules! int_compare {
    ($int:ident, $op:expr, $a:ident, $b:ident) => {{
        paste! {
            let (a, b) = ($a.[<as_ $int>]()?, $b.[<as_ $int>]()?);
            Value::I32(match $op {
                IntRelOp::Eq => [<$int _eq>](a, b),
                IntRelOp::Ne => [<$int _ne>](a, b),
                IntRelOp::Lt(Signedness::Signed) => [<$int _lt_s>](a, b),
                IntRelOp::Lt(Signedness::Unsigned) => [<$int _lt_u>](a, b),
                IntRelOp::Gt(Signedness::Signed) => [<$int _gt_s>](a, b),
                IntRelOp::Gt(Signedness::Unsigned) => [<$int _gt_u>](a, b),
                IntRelOp::Le(Signedness::Signed) => [<$int _le_s>](a, b),
                IntRelOp::Le(Signedness::Unsigned) => [<$int _le_u>](a, b),
                IntRelOp::Ge(Signedness::Signed) => [<$int _ge_s>](a, b),
                IntRelOp::Ge(Signedness::Unsigned) => [<$int _ge_u>](a, b),
            })
        }
    }};
}

macro_rules! float_unary {
    ($float:ident, $op:expr, $a:ident) => {{
        paste! {
            let a = $a.[<as_ $float>]()?;
            Value::from(match $op {
                FloatUnOp::Abs => [<$float _abs>](a),
                FloatUnOp::Neg => [<$float _neg>](a),
                FloatUnOp::Ceil => [<$float _ceil>](a),
                FloatUnOp::Floor => [<$float _floor>](a),
                FloatUnOp::Trunc => [<$float _trunc>](a),
                FloatUnOp::Nearest => [<$float _nearest>](a),
                FloatUnOp::Sqrt => [<$float _sqrt>](a),
            })
        }
    }};
}

macro_rules! float_binary {
    ($float:ident, $op:expr, $a:ident, $b:ident) => {{
        paste! {
            let (a, b) = ($a.[<as_ $float>]()?, $b.[<as_ $float>]()?);
            Value::from(match $op {
                FloatBinOp::Add => [<$float _add>](a, b),
                FloatBinOp::Sub => [<$float _sub>](a, b),
                FloatBinOp::Mul => [<$float _mul>](a, b),
                FloatBinOp::Div => [<$float _div>](a, b),
                FloatBinOp::Min => [<$float _min>](a, b),
                FloatBinOp::Max => [<$float _max>](a, b),
                FloatBinOp::Copysign => [<$float _copysign>](a, b),
            })
        }
    }};
}

macro_rules! float_compare {
    ($float:ident, $op:expr, $a:ident, $b:ident) => {{
        paste! {
            let (a, b) = ($a.[<as_ $float>]()?, $b.[<as_ $float>]()?);
            Value::I32(match $op {
                FloatRelOp::Eq => [<$float _eq>](a, b),
                FloatRelOp::Ne => [<$float _ne>](a, b),
                FloatRelOp::Lt => [<$float _lt>](a, b),
                FloatRelOp::Gt => [<$float _gt>](a, b),
                FloatRelOp::Le => [<$float _le>](a, b),
                FloatRelOp::Ge => [<$float _ge>](a, b),
            })
        }
    }};
}

fn convert(op: ConvOp, a: Value) -> Result<Value, Error> {
    use Signedness::*;
    use Width::*;
    Ok(match op {
        ConvOp::Wrap => Value::I32(i32_wrap_i64(a.as_i64()?)),
        ConvOp::Extend(Signed) => Value::I64(i64_extend_i32_s(a.as_i32()?)),
        ConvOp::Extend(Unsigned) => Value::I64(i64_extend_i32_u(a.as_i32()?)),
        ConvOp::ExtendInPlace { width: W32, bits: 8 } => Value::I32(i32_extend8_s(a.as_i32()?)),
        ConvOp::ExtendInPlace { width: W32, bits: 16 } => Value::I32(i32_extend16_s(a.as_i32()?)),
        ConvOp::ExtendInPlace { width: W64, bits: 8 } => Value::I64(i64_extend8_s(a.as_i64()?)),
        ConvOp::ExtendInPlace { width: W64, bits: 16 } => Value::I64(i64_extend16_s(a.as_i64()?)),
        ConvOp::ExtendInPlace { width: W64, bits: 32 } => Value::I64(i64_extend32_s(a.as_i64()?)),
        ConvOp::ExtendInPlace { .. } => return validation(UNKNOWN_OPERATOR),
        ConvOp::Trunc { from, to, sign, saturating: false } => match (from, to, sign) {
            (W32, W32, Signed) => Value::I32(i32_trunc_f32_s(a.as_f32()?)?),
            (W32, W32, Unsigned) => Value::I32(i32_trunc_f32_u(a.as_f32()?)?),
            (W64, W32, Signed) => Value::I32(i32_trunc_f64_s(a.as_f64()?)?),
            (W64, W32, Unsigned) => Value::I32(i32_trunc_f64_u(a.as_f64()?)?),
            (W32, W64, Signed) => Value::I64(i64_trunc_f32_s(a.as_f32()?)?),
            (W32, W64, Unsigned) => Value::I64(i64_trunc_f32_u(a.as_f32()?)?),
            (W64, W64, Signed) => Value::I64(i64_trunc_f64_s(a.as_f64()?)?),
            (W64, W64, Unsigned) => Value::I64(i64_trunc_f64_u(a.as_f64()?)?),
        },
        ConvOp::Trunc { from, to, sign, saturating: true } => match (from, to, sign) {
            (W32, W32, Signed) => Value::I32(i32_trunc_sat_f32_s(a.as_f32()?)),
            (W32, W32, Unsigned) => Value::I32(i32_trunc_sat_f32_u(a.as_f32()?)),
            (W64, W32, Signed) => Value::I32(i32_trunc_sat_f64_s(a.as_f64()?)),
            (W64, W32, Unsigned) => Value::I32(i32_trunc_sat_f64_u(a.as_f64()?)),
            (W32, W64, Signed) => Value::I64(i64_trunc_sat_f32_s(a.as_f32()?)),
            (W32, W64, Unsigned) => Value::I64(i64_trunc_sat_f32_u(a.as_f32()?)),
            (W64, W64, Signed) => Value::I64(i64_trunc_sat_f64_s(a.as_f64()?)),
            (W64, W64, Unsigned) => Value::I64(i64_trunc_sat_f64_u(a.as_f64()?)),
        },
        ConvOp::Convert { from, to, sign } => match (from, to, sign) {
            (W32, W32, Signed) => Value::F32(f32_convert_i32_s(a.as_i32()?)),
            (W32, W32, Unsigned) => Value::F32(f32_convert_i32_u(a.as_i32()?)),
            (W64, W32, Signed) => Value::F32(f32_convert_i64_s(a.as_i64()?)),
            (W64, W32, Unsigned) => Value::F32(f32_convert_i64_u(a.as_i64()?)),
            (W32, W64, Signed) => Value::F64(f64_convert_i32_s(a.as_i32()?)),
            (W32, W64, Unsigned) => Value::F64(f64_convert_i32_u(a.as_i32()?)),
            (W64, W64, Signed) => Value::F64(f64_convert_i64_s(a.as_i64()?)),
            (W64, W64, Unsigned) => Value::F64(f64_convert_i64_u(a.as_i64()?)),
        },
        ConvOp::Demote => Value::F32(f32_demote_f64(a.as_f64()?)),
        ConvOp::Promote => Value::F64(f64_promote_f32(a.as_f32()?)),
        ConvOp::ReinterpretFloat(W32) => Value::F32(f32_reinterpret_i32(a.as_i32()?)),
        ConvOp::ReinterpretFloat(W64) => Value::F64(f64_reinterpret_i64(a.as_i64()?)),
        ConvOp::ReinterpretInt(W32) => Value::I32(i32_reinterpret_f32(a.as_f32()?)),
        ConvOp::ReinterpretInt(W64) => Value::I64(i64_reinterpret_f64(a.as_f64()?)),
    })
}

impl NumOp {
    pub fn arity(&self) -> usize {
        match self {
            NumOp::IntUnary(..) | NumOp::FloatUnary(..) | NumOp::Convert(_) => 1,
            NumOp::IntBinary(..)
            | NumOp::IntCompare(..)
            | NumOp::FloatBinary(..)
            | NumOp::FloatCompare(..) => 2,
        }
    }

    /// Applies the operation to `operands` (push order). Traps come back as
    /// `Error::Trap`; operand count or tag mismatches as `Error::Validation`.
    pub fn apply(&self, operands: &[Value]) -> Result<Value, Error> {
        use Width::*;
        Ok(match (*self, operands) {
            (NumOp::IntUnary(W32, op), &[a]) => int_unary!(i32, op, a),
            (NumOp::IntUnary(W64, op), &[a]) => int_unary!(i64, op, a),
            (NumOp::IntBinary(W32, op), &[a, b]) => int_binary!(i32, op, a, b),
            (NumOp::IntBinary(W64, op), &[a, b]) => int_binary!(i64, op, a, b),
            (NumOp::IntCompare(W32, op), &[a, b]) => int_compare!(i32, op, a, b),
            (NumOp::IntCompare(W64, op), &[a, b]) => int_compare!(i64, op, a, b),
            (NumOp::FloatUnary(W32, op), &[a]) => float_unary!(f32, op, a),
            (NumOp::FloatUnary(W64, op), &[a]) => float_unary!(f64, op, a),
            (NumOp::FloatBinary(W32, op), &[a, b]) => float_binary!(f32, op, a, b),
            (NumOp::FloatBinary(W64, op), &[a, b]) => float_binary!(f64, op, a, b),
            (NumOp::FloatCompare(W32, op), &[a, b]) => float_compare!(f32, op, a, b),
            (NumOp::FloatCompare(W64, op), &[a, b]) => float_compare!(f64, op, a, b),
            (NumOp::Convert(op), &[a]) => convert(op, a)?,
            _ => return validation(INVALID_NUM_ARG),
        })
    }
}

fn parse_trunc(to: Width, rest: &str, saturating: bool) -> Option<NumOp> {
    use Signedness::*;
    let (from, sign) = match rest {
        "f32_s" => (Width::W32, Signed),
        "f32_u" => (Width::W32, Unsigned),
        "f64_s" => (Width::W64, Signed),
        "f64_u" => (Width::W64, Unsigned),
        _ => return None,
    };
    Some(NumOp::Convert(ConvOp::Trunc { from, to, sign, saturating }))
}

fn parse_int_op(width: Width, name: &str) -> Option<NumOp> {
    use NumOp::*;
    use Signedness::*;
    if let Some(rest) = name.strip_prefix("trunc_sat_") { return parse_trunc(width, rest, true); }
    if let Some(rest) = name.strip_prefix("trunc_") { return parse_trunc(width, rest, false); }
    let w32 = width == Width::W32;
    Some(match name {
        "clz" => IntUnary(width, IntUnOp::Clz),
        "ctz" => IntUnary(width, IntUnOp::Ctz),
        "popcnt" => IntUnary(width, IntUnOp::Popcnt),
        "eqz" => IntUnary(width, IntUnOp::Eqz),
        "not" => IntUnary(width, IntUnOp::Not),
        "add" => IntBinary(width, IntBinOp::Add),
        "sub" => IntBinary(width, IntBinOp::Sub),
        "mul" => IntBinary(width, IntBinOp::Mul),
        "div_s" => IntBinary(width, IntBinOp::Div(Signed)),
        "div_u" => IntBinary(width, IntBinOp::Div(Unsigned)),
        "rem_s" => IntBinary(width, IntBinOp::Rem(Signed)),
        "rem_u" => IntBinary(width, IntBinOp::Rem(Unsigned)),
        "and" => IntBinary(width, IntBinOp::And),
        "or" => IntBinary(width, IntBinOp::Or),
        "xor" => IntBinary(width, IntBinOp::Xor),
        "shl" => IntBinary(width, IntBinOp::Shl),
        "shr_s" => IntBinary(width, IntBinOp::Shr(Signed)),
        "shr_u" => IntBinary(width, IntBinOp::Shr(Unsigned)),
        "rotl" => IntBinary(width, IntBinOp::Rotl),
        "rotr" => IntBinary(width, IntBinOp::Rotr),
        "eq" => IntCompare(width, IntRelOp::Eq),
        "ne" => IntCompare(width, IntRelOp::Ne),
        "lt_s" => IntCompare(width, IntRelOp::Lt(Signed)),
        "lt_u" => IntCompare(width, IntRelOp::Lt(Unsigned)),
        "gt_s" => IntCompare(width, IntRelOp::Gt(Signed)),
        "gt_u" => IntCompare(width, IntRelOp::Gt(Unsigned)),
        "le_s" => IntCompare(width, IntRelOp::Le(Signed)),
        "le_u" => IntCompare(width, IntRelOp::Le(Unsigned)),
        "ge_s" => IntCompare(width, IntRelOp::Ge(Signed)),
        "ge_u" => IntCompare(width, IntRelOp::Ge(Unsigned)),
        "wrap_i64" if w32 => Convert(ConvOp::Wrap),
        "extend_i32_s" if !w32 => Convert(ConvOp::Extend(Signed)),
        "extend_i32_u" if !w32 => Convert(ConvOp::Extend(Unsigned)),
        "extend8_s" => Convert(ConvOp::ExtendInPlace { width, bits: 8 }),
        "extend16_s" => Convert(ConvOp::ExtendInPlace { width, bits: 16 }),
        "extend32_s" if !w32 => Convert(ConvOp::ExtendInPlace { width, bits: 32 }),
        "reinterpret_f32" if w32 => Convert(ConvOp::ReinterpretInt(width)),
        "reinterpret_f64" if !w32 => Convert(ConvOp::ReinterpretInt(width)),
        _ => return None,
    })
}

fn parse_float_op(width: Width, name: &str) -> Option<NumOp> {
    use NumOp::*;
    use Signedness::*;
    let w32 = width == Width::W32;
    Some(match name {
        "abs" => FloatUnary(width, FloatUnOp::Abs),
        "neg" => FloatUnary(width, FloatUnOp::Neg),
        "ceil" => FloatUnary(width, FloatUnOp::Ceil),
        "floor" => FloatUnary(width, FloatUnOp::Floor),
        "trunc" => FloatUnary(width, FloatUnOp::Trunc),
        "nearest" => FloatUnary(width, FloatUnOp::Nearest),
        "sqrt" => FloatUnary(width, FloatUnOp::Sqrt),
        "add" => FloatBinary(width, FloatBinOp::Add),
        "sub" => FloatBinary(width, FloatBinOp::Sub),
        "mul" => FloatBinary(width, FloatBinOp::Mul),
        "div" => FloatBinary(width, FloatBinOp::Div),
        "min" => FloatBinary(width, FloatBinOp::Min),
        "max" => FloatBinary(width, FloatBinOp::Max),
        "copysign" => FloatBinary(width, FloatBinOp::Copysign),
        "eq" => FloatCompare(width, FloatRelOp::Eq),
        "ne" => FloatCompare(width, FloatRelOp::Ne),
        "lt" => FloatCompare(width, FloatRelOp::Lt),
        "gt" => FloatCompare(width, FloatRelOp::Gt),
        "le" => FloatCompare(width, FloatRelOp::Le),
        "ge" => FloatCompare(width, FloatRelOp::Ge),
        "convert_i32_s" => Convert(ConvOp::Convert { from: Width::W32, to: width, sign: Signed }),
        "convert_i32_u" => Convert(ConvOp::Convert { from: Width::W32, to: width, sign: Unsigned }),
        "convert_i64_s" => Convert(ConvOp::Convert { from: Width::W64, to: width, sign: Signed }),
        "convert_i64_u" => Convert(ConvOp::Convert { from: Width::W64, to: width, sign: Unsigned }),
        "demote_f64" if w32 => Convert(ConvOp::Demote),
        "promote_f32" if !w32 => Convert(ConvOp::Promote),
        "reinterpret_i32" if w32 => Convert(ConvOp::ReinterpretFloat(width)),
        "reinterpret_i64" if !w32 => Convert(ConvOp::ReinterpretFloat(width)),
        _ => return None,
    })
}

/// Parses text-format mnemonics such as `i32.div_u` or `f64.convert_i64_s`.
impl FromStr for NumOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let (prefix, name) = s.split_once('.').ok_or(Error::Validation(UNKNOWN_OPERATOR))?;
        let op = match prefix {
            "i32" => parse_int_op(Width::W32, name),
            "i64" => parse_int_op(Width::W64, name),
            "f32" => parse_float_op(Width::W32, name),
            "f64" => parse_float_op(Width::W64, name),
            _ => None,
        };
        op.ok_or(Error::Validation(UNKNOWN_OPERATOR))
    }
}

// ---------------- Memory access ----------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessWidth { B8, B16, B32, B64 }

impl AccessWidth {
    pub fn bytes(self) -> u32 {
        match self {
            AccessWidth::B8 => 1,
            AccessWidth::B16 => 2,
            AccessWidth::B32 => 4,
            AccessWidth::B64 => 8,
        }
    }

    fn natural(ty: ValType) -> Self {
        if ty.byte_width() == 4 { AccessWidth::B32 } else { AccessWidth::B64 }
    }

    fn from_bits(bits: &str) -> Option<Self> {
        match bits {
            "8" => Some(AccessWidth::B8),
            "16" => Some(AccessWidth::B16),
            "32" => Some(AccessWidth::B32),
            _ => None,
        }
    }
}

/// `ty.load{width}_{sign}`: narrow integer loads extend to `ty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Load {
    pub ty: ValType,
    pub width: AccessWidth,
    pub sign: Signedness,
    pub offset: u32,
}

/// `ty.store{width}`: narrow stores keep the low bytes of the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Store {
    pub ty: ValType,
    pub width: AccessWidth,
    pub offset: u32,
}

impl Load {
    pub fn apply(&self, mem: &WasmMemory, addr: Value) -> Result<Value, Error> {
        use AccessWidth::*;
        use Signedness::*;
        let ptr = addr.as_u32()?;
        let o = self.offset;
        Ok(match (self.ty, self.width, self.sign) {
            (ValType::I32, B8, Signed) => Value::I32(mem.load_i8(ptr, o)? as i32),
            (ValType::I32, B8, Unsigned) => Value::I32(mem.load_u8(ptr, o)? as i32),
            (ValType::I32, B16, Signed) => Value::I32(mem.load_i16(ptr, o)? as i32),
            (ValType::I32, B16, Unsigned) => Value::I32(mem.load_u16(ptr, o)? as i32),
            (ValType::I32, B32, _) => Value::I32(mem.load_i32(ptr, o)?),
            (ValType::I64, B8, Signed) => Value::I64(mem.load_i8(ptr, o)? as i64),
            (ValType::I64, B8, Unsigned) => Value::I64(mem.load_u8(ptr, o)? as i64),
            (ValType::I64, B16, Signed) => Value::I64(mem.load_i16(ptr, o)? as i64),
            (ValType::I64, B16, Unsigned) => Value::I64(mem.load_u16(ptr, o)? as i64),
            (ValType::I64, B32, Signed) => Value::I64(mem.load_i32(ptr, o)? as i64),
            (ValType::I64, B32, Unsigned) => Value::I64(mem.load_u32(ptr, o)? as i64),
            (ValType::I64, B64, _) => Value::I64(mem.load_i64(ptr, o)?),
            (ValType::F32, B32, _) => Value::F32(mem.load_f32(ptr, o)?),
            (ValType::F64, B64, _) => Value::F64(mem.load_f64(ptr, o)?),
            _ => return validation(UNKNOWN_OPERATOR),
        })
    }
}

impl Store {
    pub fn apply(&self, mem: &mut WasmMemory, addr: Value, value: Value) -> Result<(), Error> {
        use AccessWidth::*;
        let ptr = addr.as_u32()?;
        let o = self.offset;
        if value.ty() != self.ty { return validation(TYPE_MISMATCH); }
        match (value, self.width) {
            (Value::I32(v), B8) => mem.store_u8(ptr, o, v as u8),
            (Value::I32(v), B16) => mem.store_u16(ptr, o, v as u16),
            (Value::I32(v), B32) => mem.store_i32(ptr, o, v),
            (Value::I64(v), B8) => mem.store_u8(ptr, o, v as u8),
            (Value::I64(v), B16) => mem.store_u16(ptr, o, v as u16),
            (Value::I64(v), B32) => mem.store_u32(ptr, o, v as u32),
            (Value::I64(v), B64) => mem.store_i64(ptr, o, v),
            (Value::F32(v), B32) => mem.store_f32(ptr, o, v),
            (Value::F64(v), B64) => mem.store_f64(ptr, o, v),
            _ => validation(UNKNOWN_OPERATOR),
        }
    }
}

impl FromStr for Load {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let (prefix, name) = s.split_once('.').ok_or(Error::Validation(UNKNOWN_OPERATOR))?;
        let ty: ValType = prefix.parse().map_err(|_| Error::Validation(UNKNOWN_OPERATOR))?;
        let rest = name.strip_prefix("load").ok_or(Error::Validation(UNKNOWN_OPERATOR))?;
        if rest.is_empty() {
            return Ok(Load { ty, width: AccessWidth::natural(ty), sign: Signedness::Signed, offset: 0 });
        }
        let (bits, sign) = match rest.split_once('_') {
            Some((bits, "s")) => (bits, Signedness::Signed),
            Some((bits, "u")) => (bits, Signedness::Unsigned),
            _ => return validation(UNKNOWN_OPERATOR),
        };
        match AccessWidth::from_bits(bits) {
            Some(width) if ty.is_int() && width.bytes() < ty.byte_width() => {
                Ok(Load { ty, width, sign, offset: 0 })
            }
            _ => validation(UNKNOWN_OPERATOR),
        }
    }
}

impl FromStr for Store {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let (prefix, name) = s.split_once('.').ok_or(Error::Validation(UNKNOWN_OPERATOR))?;
        let ty: ValType = prefix.parse().map_err(|_| Error::Validation(UNKNOWN_OPERATOR))?;
        let rest = name.strip_prefix("store").ok_or(Error::Validation(UNKNOWN_OPERATOR))?;
        if rest.is_empty() {
            return Ok(Store { ty, width: AccessWidth::natural(ty), offset: 0 });
        }
        match AccessWidth::from_bits(rest) {
            Some(width) if ty.is_int() && width.bytes() < ty.byte_width() => {
                Ok(Store { ty, width, offset: 0 })
            }
            _ => validation(UNKNOWN_OPERATOR),
        }
    }
}

// ---------------- Instructions ----------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instr {
    Num(NumOp),
    Load(Load),
    Store(Store),
    MemorySize,
    MemoryGrow,
    MemoryFill,
    MemoryCopy,
}

impl Instr {
    pub fn arity(&self) -> usize {
        match self {
            Instr::Num(op) => op.arity(),
            Instr::MemorySize => 0,
            Instr::Load(_) | Instr::MemoryGrow => 1,
            Instr::Store(_) => 2,
            Instr::MemoryFill | Instr::MemoryCopy => 3,
        }
    }

    pub fn uses_memory(&self) -> bool { !matches!(self, Instr::Num(_)) }

    /// Sets the static memarg offset of a load or store; other
    /// instructions are returned unchanged.
    pub fn with_offset(self, offset: u32) -> Self {
        match self {
            Instr::Load(load) => Instr::Load(Load { offset, ..load }),
            Instr::Store(store) => Instr::Store(Store { offset, ..store }),
            other => other,
        }
    }

    /// Runs one instruction over already-popped operands (push order) and
    /// returns the value to push, if any.
    pub fn execute(&self, memory: Option<&mut WasmMemory>, operands: &[Value]) -> Result<Option<Value>, Error> {
        if let Instr::Num(op) = self {
            return op.apply(operands).map(Some);
        }
        if operands.len() != self.arity() { return validation(INVALID_NUM_ARG); }
        let mem = memory.ok_or(Error::Validation(UNKNOWN_MEMORY))?;
        match (*self, operands) {
            (Instr::Load(load), &[addr]) => load.apply(mem, addr).map(Some),
            (Instr::Store(store), &[addr, value]) => store.apply(mem, addr, value).map(|_| None),
            (Instr::MemorySize, _) => Ok(Some(Value::from_u32(mem.size()))),
            (Instr::MemoryGrow, &[delta]) => Ok(Some(Value::I32(mem.grow(delta.as_u32()?)?))),
            (Instr::MemoryFill, &[dst, value, len]) => {
                mem.fill(dst.as_u32()?, value.as_i32()? as u8, len.as_u32()?).map(|_| None)
            }
            (Instr::MemoryCopy, &[dst, src, len]) => {
                mem.copy(dst.as_u32()?, src.as_u32()?, len.as_u32()?).map(|_| None)
            }
            _ => validation(INVALID_NUM_ARG),
        }
    }
}

impl FromStr for Instr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "memory.size" => return Ok(Instr::MemorySize),
            "memory.grow" => return Ok(Instr::MemoryGrow),
            "memory.fill" => return Ok(Instr::MemoryFill),
            "memory.copy" => return Ok(Instr::MemoryCopy),
            _ => {}
        }
        match s.split_once('.') {
            Some((_, name)) if name.starts_with("load") => s.parse().map(Instr::Load),
            Some((_, name)) if name.starts_with("store") => s.parse().map(Instr::Store),
            _ => s.parse().map(Instr::Num),
        }
    }
}
