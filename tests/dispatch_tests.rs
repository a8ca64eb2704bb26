use wasm_opcore::error::*;
use wasm_opcore::{
    AccessWidth, ConvOp, Instr, IntBinOp, IntUnOp, Load, NumOp, Signedness, Store, ValType, Value,
    WasmMemory, Width,
};

fn num(s: &str) -> NumOp {
    s.parse().unwrap_or_else(|e| panic!("{}: {}", s, e))
}

fn instr(s: &str) -> Instr {
    s.parse().unwrap_or_else(|e| panic!("{}: {}", s, e))
}

#[test]
fn parses_numeric_mnemonics() {
    assert_eq!(num("i32.add"), NumOp::IntBinary(Width::W32, IntBinOp::Add));
    assert_eq!(num("i64.div_u"), NumOp::IntBinary(Width::W64, IntBinOp::Div(Signedness::Unsigned)));
    assert_eq!(num("i64.popcnt"), NumOp::IntUnary(Width::W64, IntUnOp::Popcnt));
    assert_eq!(
        num("i32.trunc_sat_f64_u"),
        NumOp::Convert(ConvOp::Trunc { from: Width::W64, to: Width::W32, sign: Signedness::Unsigned, saturating: true })
    );
    assert_eq!(
        num("f32.convert_i64_s"),
        NumOp::Convert(ConvOp::Convert { from: Width::W64, to: Width::W32, sign: Signedness::Signed })
    );
    assert_eq!(num("i64.extend32_s"), NumOp::Convert(ConvOp::ExtendInPlace { width: Width::W64, bits: 32 }));
    assert_eq!(num("f64.promote_f32"), NumOp::Convert(ConvOp::Promote));
}

#[test]
fn rejects_unknown_mnemonics() {
    for bad in ["i32.frob", "i32", "i128.add", "i32.extend32_s", "i64.wrap_i64", "f32.promote_f32", "i32.trunc_f16_s", ""] {
        assert_eq!(bad.parse::<NumOp>(), Err(Error::Validation(UNKNOWN_OPERATOR)), "{}", bad);
    }
    for bad in ["f32.load8_s", "i32.load32_s", "i32.load8", "i64.store64", "f64.store8"] {
        assert!(bad.parse::<Instr>().is_err(), "{}", bad);
    }
}

#[test]
fn arity() {
    assert_eq!(num("i32.clz").arity(), 1);
    assert_eq!(num("f64.copysign").arity(), 2);
    assert_eq!(num("i64.extend_i32_u").arity(), 1);
    assert_eq!(instr("memory.size").arity(), 0);
    assert_eq!(instr("memory.grow").arity(), 1);
    assert_eq!(instr("i64.store16").arity(), 2);
    assert_eq!(instr("memory.copy").arity(), 3);
    assert!(instr("i32.load").uses_memory());
    assert!(!instr("i32.add").uses_memory());
}

#[test]
fn apply_numeric() {
    assert_eq!(num("i32.add").apply(&[Value::I32(i32::MAX), Value::I32(1)]), Ok(Value::I32(i32::MIN)));
    assert_eq!(num("i32.sub").apply(&[Value::I32(10), Value::I32(3)]), Ok(Value::I32(7)));
    assert_eq!(num("i64.shl").apply(&[Value::I64(1), Value::I64(65)]), Ok(Value::I64(2)));
    assert_eq!(num("i64.eqz").apply(&[Value::I64(0)]), Ok(Value::I32(1)));
    assert_eq!(num("f32.lt").apply(&[Value::F32(1.0), Value::F32(2.0)]), Ok(Value::I32(1)));
    assert_eq!(num("f64.mul").apply(&[Value::F64(1.5), Value::F64(-2.0)]), Ok(Value::F64(-3.0)));
    assert_eq!(num("i32.wrap_i64").apply(&[Value::I64(0x1_0000_0007)]), Ok(Value::I32(7)));
    assert_eq!(num("f32.convert_i32_u").apply(&[Value::I32(-1)]), Ok(Value::F32(4294967296.0)));
    assert_eq!(num("i32.reinterpret_f32").apply(&[Value::F32(1.0)]), Ok(Value::I32(1065353216)));
}

#[test]
fn apply_reports_traps_and_validation_errors() {
    assert_eq!(num("i32.div_s").apply(&[Value::I32(1), Value::I32(0)]), Err(Error::Trap(DIVIDE_BY_ZERO)));
    assert_eq!(num("i64.trunc_f64_s").apply(&[Value::F64(f64::NAN)]), Err(Error::Trap(INVALID_CONV_TO_INT)));
    assert_eq!(num("i32.add").apply(&[Value::I32(1)]), Err(Error::Validation(INVALID_NUM_ARG)));
    assert_eq!(num("i32.add").apply(&[Value::I32(1), Value::I64(1)]), Err(Error::Validation(TYPE_MISMATCH)));
    assert_eq!(num("f32.neg").apply(&[Value::F64(1.0)]), Err(Error::Validation(TYPE_MISMATCH)));
}

#[test]
fn operand_order_is_push_order() {
    assert_eq!(num("i32.sub").apply(&[Value::I32(1), Value::I32(3)]), Ok(Value::I32(-2)));
    assert_eq!(num("i32.lt_s").apply(&[Value::I32(1), Value::I32(3)]), Ok(Value::I32(1)));
    assert_eq!(num("i32.shl").apply(&[Value::I32(3), Value::I32(1)]), Ok(Value::I32(6)));
}

#[test]
fn parses_memory_access() {
    assert_eq!(
        "i64.load16_u".parse::<Load>(),
        Ok(Load { ty: ValType::I64, width: AccessWidth::B16, sign: Signedness::Unsigned, offset: 0 })
    );
    assert_eq!("f64.load".parse::<Load>().map(|l| l.width), Ok(AccessWidth::B64));
    assert_eq!(
        "i32.store8".parse::<Store>(),
        Ok(Store { ty: ValType::I32, width: AccessWidth::B8, offset: 0 })
    );
    assert_eq!(instr("i32.load").with_offset(16), Instr::Load(Load {
        ty: ValType::I32, width: AccessWidth::B32, sign: Signedness::Signed, offset: 16,
    }));
    assert_eq!(instr("i32.add").with_offset(16), instr("i32.add"));
}

#[test]
fn execute_memory_instructions() {
    let mut mem = WasmMemory::new(1, 2).unwrap();

    let store = instr("i64.store32");
    assert_eq!(store.execute(Some(&mut mem), &[Value::I32(4), Value::I64(-1)]), Ok(None));
    assert_eq!(instr("i64.load32_u").execute(Some(&mut mem), &[Value::I32(4)]), Ok(Some(Value::I64(0xffff_ffff))));
    assert_eq!(instr("i64.load32_s").execute(Some(&mut mem), &[Value::I32(4)]), Ok(Some(Value::I64(-1))));
    assert_eq!(instr("i64.load").execute(Some(&mut mem), &[Value::I32(4)]), Ok(Some(Value::I64(0xffff_ffff))));

    let offset_load = instr("i32.load8_s").with_offset(4);
    assert_eq!(offset_load.execute(Some(&mut mem), &[Value::I32(0)]), Ok(Some(Value::I32(-1))));

    assert_eq!(instr("memory.size").execute(Some(&mut mem), &[]), Ok(Some(Value::I32(1))));
    assert_eq!(instr("memory.grow").execute(Some(&mut mem), &[Value::I32(1)]), Ok(Some(Value::I32(1))));
    assert_eq!(instr("memory.grow").execute(Some(&mut mem), &[Value::I32(1)]), Ok(Some(Value::I32(-1))));

    let fill = instr("memory.fill");
    assert_eq!(fill.execute(Some(&mut mem), &[Value::I32(100), Value::I32(0x1ff), Value::I32(2)]), Ok(None));
    assert_eq!(instr("i32.load16_u").execute(Some(&mut mem), &[Value::I32(100)]), Ok(Some(Value::I32(0xffff))));

    let copy = instr("memory.copy");
    assert_eq!(copy.execute(Some(&mut mem), &[Value::I32(200), Value::I32(100), Value::I32(2)]), Ok(None));
    assert_eq!(instr("i32.load16_s").execute(Some(&mut mem), &[Value::I32(200)]), Ok(Some(Value::I32(-1))));
}

#[test]
fn execute_errors() {
    let mut mem = WasmMemory::new(1, 1).unwrap();
    assert_eq!(instr("i32.load").execute(None, &[Value::I32(0)]), Err(Error::Validation(UNKNOWN_MEMORY)));
    assert_eq!(instr("memory.size").execute(None, &[]), Err(Error::Validation(UNKNOWN_MEMORY)));
    assert_eq!(instr("i32.add").execute(None, &[Value::I32(2), Value::I32(3)]), Ok(Some(Value::I32(5))));
    assert_eq!(instr("i32.load").execute(Some(&mut mem), &[]), Err(Error::Validation(INVALID_NUM_ARG)));
    assert_eq!(
        instr("i32.store").execute(Some(&mut mem), &[Value::I32(0), Value::I64(1)]),
        Err(Error::Validation(TYPE_MISMATCH))
    );
    assert_eq!(
        instr("i32.load").execute(Some(&mut mem), &[Value::I32(65533)]),
        Err(Error::Trap(OOB_MEMORY_ACCESS))
    );
}

#[test]
fn value_helpers() {
    assert_eq!(Value::from_u32(u32::MAX), Value::I32(-1));
    assert_eq!(Value::I32(-1).as_u32(), Ok(u32::MAX));
    assert_eq!(Value::I64(1).as_i32(), Err(Error::Validation(TYPE_MISMATCH)));
    assert_eq!(Value::default_for(ValType::F64), Value::F64(0.0));
    assert_eq!(Value::from_f32_bits(0x7fc0_0000).bits(), 0x7fc0_0000);
    assert_eq!(Value::I32(-1).bits(), 0xffff_ffff);
    assert!(Value::F64(f64::NAN).is_nan());
    assert_eq!("f32".parse::<ValType>(), Ok(ValType::F32));
    assert_eq!(ValType::I64.byte_width(), 8);
    assert_eq!(ValType::F64.name(), "f64");
    assert_eq!(Value::I32(5).to_string(), "5 (i32)");
}
