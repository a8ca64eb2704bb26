use wasm_opcore::{Value, WasmMemory};

/// Parses `value:type`, e.g. `42:i32`, `-1:i64`, `3.5:f32`.
pub fn parse_value(arg: &str) -> Result<Value, String> {
    let (value_str, type_str) = arg.rsplit_once(':')
        .ok_or_else(|| format!("Invalid argument format '{}'. Expected format: value:type (e.g., 42:i32)", arg))?;

    match type_str {
        "i32" => {
            // Accept the unsigned spelling of the bit pattern as well
            let val = value_str.parse::<i32>()
                .or_else(|_| value_str.parse::<u32>().map(|u| u as i32))
                .map_err(|_| format!("Failed to parse '{}' as i32", value_str))?;
            Ok(Value::I32(val))
        }
        "i64" => {
            let val = value_str.parse::<i64>()
                .or_else(|_| value_str.parse::<u64>().map(|u| u as i64))
                .map_err(|_| format!("Failed to parse '{}' as i64", value_str))?;
            Ok(Value::I64(val))
        }
        "f32" => {
            let val = value_str.parse::<f32>()
                .map_err(|_| format!("Failed to parse '{}' as f32", value_str))?;
            Ok(Value::F32(val))
        }
        "f64" => {
            let val = value_str.parse::<f64>()
                .map_err(|_| format!("Failed to parse '{}' as f64", value_str))?;
            Ok(Value::F64(val))
        }
        _ => Err(format!("Unknown type '{}'. Supported types: i32, i64, f32, f64", type_str))
    }
}

/// Value plus its raw bits, which is what matters when checking wraparound.
pub fn format_value(val: &Value) -> String {
    match val {
        Value::I32(_) | Value::F32(_) => format!("{} [0x{:08x}]", val, val.bits()),
        Value::I64(_) | Value::F64(_) => format!("{} [0x{:016x}]", val, val.bits()),
    }
}

/// Parses `min:max` page limits.
pub fn parse_limits(arg: &str) -> Result<(u32, u32), String> {
    let (min, max) = arg.split_once(':')
        .ok_or_else(|| format!("Invalid limits '{}'. Expected format: min:max (e.g., 1:2)", arg))?;
    let min = min.parse::<u32>().map_err(|_| format!("Failed to parse '{}' as a page count", min))?;
    let max = max.parse::<u32>().map_err(|_| format!("Failed to parse '{}' as a page count", max))?;
    Ok((min, max))
}

/// Parses `offset:hexbytes` and copies the bytes into `mem`.
pub fn apply_init(mem: &mut WasmMemory, arg: &str) -> Result<(), String> {
    let (offset, hex) = arg.split_once(':')
        .ok_or_else(|| format!("Invalid init '{}'. Expected format: offset:hexbytes (e.g., 0:01020304)", arg))?;
    let offset = offset.parse::<u32>().map_err(|_| format!("Failed to parse '{}' as an offset", offset))?;
    if hex.len() % 2 != 0 {
        return Err(format!("Odd number of hex digits in '{}'", hex));
    }
    let bytes = (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16))
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|_| format!("Invalid hex bytes '{}'", hex))?;
    mem.init(offset, &bytes).map_err(|e| e.to_string())
}
