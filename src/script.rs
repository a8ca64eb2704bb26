//! JSON assertion scripts in the spirit of `wast2json` output.
//!
//! A script owns at most one memory at a time. Operations are named by
//! their text mnemonic and receive their operands in push order.

use crate::dispatch::Instr;
use crate::error::Error;
use crate::value::{ValType, Value};
use crate::wasm_memory::WasmMemory;
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct ValueJSON {
    pub r#type: String,
    pub value: String,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(tag = "type")]
pub enum Command {
    #[serde(rename = "memory")]
    Memory { line: u32, min: u32, max: u32 },
    #[serde(rename = "init")]
    Init { line: u32, offset: u32, bytes: Vec<u8> },
    #[serde(rename = "action")]
    Action { line: u32, op: String, #[serde(default)] offset: u32, args: Vec<ValueJSON> },
    #[serde(rename = "assert_return")]
    AssertReturn {
        line: u32,
        op: String,
        #[serde(default)] offset: u32,
        args: Vec<ValueJSON>,
        expected: Vec<ValueJSON>,
    },
    #[serde(rename = "assert_trap")]
    AssertTrap { line: u32, op: String, #[serde(default)] offset: u32, args: Vec<ValueJSON>, text: String },
}

impl Command {
    pub fn line(&self) -> u32 {
        match self {
            Command::Memory { line, .. }
            | Command::Init { line, .. }
            | Command::Action { line, .. }
            | Command::AssertReturn { line, .. }
            | Command::AssertTrap { line, .. } => *line,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Command::Memory { .. } => "memory",
            Command::Init { .. } => "init",
            Command::Action { .. } => "action",
            Command::AssertReturn { .. } => "assert_return",
            Command::AssertTrap { .. } => "assert_trap",
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct Script {
    #[serde(default)]
    pub source_filename: String,
    pub commands: Vec<Command>,
}

impl Script {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[derive(Debug, Default)]
pub struct Report {
    pub passes: u32,
    pub failures: Vec<String>,
}

impl Report {
    pub fn is_success(&self) -> bool { self.failures.is_empty() }
}

const CANONICAL_NAN_F32: u32 = 0x7fc0_0000;
const CANONICAL_NAN_F64: u64 = 0x7ff8_0000_0000_0000;

fn is_float_literal(s: &str) -> bool {
    s.starts_with('-') || s.contains(['.', 'e', 'E']) || s.contains("inf") || s.contains("nan")
}

impl ValueJSON {
    /// Integers may be written signed or unsigned. Floats are literals when
    /// they look like one, otherwise the decimal bit pattern.
    pub fn to_value(&self) -> Result<Value, String> {
        let ty: ValType = self.r#type.parse().map_err(|_| format!("unknown value type: {}", self.r#type))?;
        let v = self.value.as_str();
        let bad = || format!("bad {} value '{}'", ty, v);
        Ok(match ty {
            ValType::I32 => match v.parse::<u32>() {
                Ok(u) => Value::from_u32(u),
                Err(_) => Value::I32(v.parse::<i32>().map_err(|_| bad())?),
            },
            ValType::I64 => match v.parse::<u64>() {
                Ok(u) => Value::from_u64(u),
                Err(_) => Value::I64(v.parse::<i64>().map_err(|_| bad())?),
            },
            ValType::F32 if v.starts_with("nan:") => Value::from_f32_bits(CANONICAL_NAN_F32),
            ValType::F64 if v.starts_with("nan:") => Value::from_f64_bits(CANONICAL_NAN_F64),
            ValType::F32 if is_float_literal(v) => Value::F32(v.parse().map_err(|_| bad())?),
            ValType::F64 if is_float_literal(v) => Value::F64(v.parse().map_err(|_| bad())?),
            ValType::F32 => Value::from_f32_bits(v.parse().map_err(|_| bad())?),
            ValType::F64 => Value::from_f64_bits(v.parse().map_err(|_| bad())?),
        })
    }
}

fn to_values(values: &[ValueJSON]) -> Result<Vec<Value>, String> {
    values.iter().map(ValueJSON::to_value).collect()
}

fn check_results(result: Option<Value>, expected: &[ValueJSON]) -> Result<(), String> {
    let exp_values = to_values(expected)?;
    let results: Vec<Value> = result.into_iter().collect();
    if results.len() != exp_values.len() {
        return Err(format!("result count mismatch: expected {}, got {}", exp_values.len(), results.len()));
    }
    for (i, (got, exp)) in results.iter().zip(&exp_values).enumerate() {
        if got.ty() != exp.ty() {
            return Err(format!("result[{}] type mismatch: expected {}, got {}", i, exp.ty(), got.ty()));
        }
        // Exact bit match first, then any NaN matches any NaN
        if got.bits() == exp.bits() || (got.is_nan() && exp.is_nan()) {
            continue;
        }
        return Err(format!("result[{}] mismatch: expected {}, got {}", i, exp, got));
    }
    Ok(())
}

struct Runner {
    memory: Option<WasmMemory>,
}

impl Runner {
    fn exec(&mut self, op: &str, offset: u32, args: &[ValueJSON]) -> Result<Result<Option<Value>, Error>, String> {
        let instr: Instr = op.parse().map_err(|e: Error| format!("{}: {}", op, e))?;
        let instr = instr.with_offset(offset);
        let operands = to_values(args)?;
        crate::debug_println!("[script] {} {:?}", op, operands);
        Ok(instr.execute(self.memory.as_mut(), &operands))
    }

    fn run(&mut self, cmd: &Command) -> Result<(), String> {
        match cmd {
            Command::Memory { min, max, .. } => {
                self.memory = Some(WasmMemory::new(*min, *max).map_err(|e| format!("memory failed: {}", e))?);
                Ok(())
            }
            Command::Init { offset, bytes, .. } => {
                let mem = self.memory.as_mut().ok_or("init without a memory")?;
                mem.init(*offset, bytes).map_err(|e| format!("init failed: {}", e))
            }
            Command::Action { op, offset, args, .. } => {
                self.exec(op, *offset, args)?.map(|_| ()).map_err(|e| e.to_string())
            }
            Command::AssertReturn { op, offset, args, expected, .. } => {
                let result = self.exec(op, *offset, args)?.map_err(|e| e.to_string())?;
                check_results(result, expected)
            }
            Command::AssertTrap { op, offset, args, text, .. } => {
                match self.exec(op, *offset, args)? {
                    Err(Error::Trap(msg)) if msg == text.as_str() || msg.starts_with(text.as_str()) => Ok(()),
                    Err(Error::Trap(msg)) => Err(format!("message mismatch: expected '{}', got '{}'", text, msg)),
                    Err(e) => Err(format!("wrong error type, expected trap '{}', got '{}'", text, e)),
                    Ok(_) => Err(format!("expected trap: '{}'", text)),
                }
            }
        }
    }
}

/// Runs every command, collecting failures instead of stopping at the
/// first one.
pub fn run_script(script: &Script) -> Report {
    let mut runner = Runner { memory: None };
    let mut report = Report::default();
    for cmd in &script.commands {
        match runner.run(cmd) {
            Ok(()) => report.passes += 1,
            Err(e) => report.failures.push(format!(
                "[{}:{}] {}: {}", script.source_filename, cmd.line(), cmd.kind(), e
            )),
        }
    }
    report
}
