use clap::Parser;
use wasm_opcore::{Instr, Value, WasmMemory};

mod utils;
use utils::{apply_init, format_value, parse_limits, parse_value};

#[derive(Parser, Debug)]
#[command(name = "opcore-eval")]
#[command(about = "Evaluate a single WebAssembly numeric or memory instruction")]
#[command(long_about = "
opcore-eval - evaluate one instruction against the numeric/memory backend

Operands are given in push order, each as value:type.

Examples:
  # Wrapping addition
  opcore-eval i32.add 2147483647:i32 1:i32

  # Unsigned division over a negative bit pattern
  opcore-eval i32.div_u -1:i32 2:i32

  # Float to integer truncation (traps when out of range)
  opcore-eval i64.trunc_f64_s -3.9:f64

  # Store then load need a memory; loads take their address as an operand
  opcore-eval i32.load8_u 3:i32 --memory 1:1 --init 0:01020304

  # Growth beyond the maximum returns -1
  opcore-eval memory.grow 1:i32 --memory 1:1
")]
struct Args {
    /// Instruction mnemonic, e.g. i32.div_s, f64.convert_i64_u, i64.load16_s, memory.grow
    op: String,

    /// Operands in push order (format: value:type, e.g., 42:i32, 3.14:f32)
    #[arg(allow_hyphen_values = true)]
    args: Vec<String>,

    /// Create a linear memory with min:max pages
    #[arg(short, long)]
    memory: Option<String>,

    /// Data segment to copy in before execution (format: offset:hexbytes)
    #[arg(short, long)]
    init: Vec<String>,

    /// Static memarg offset for loads and stores
    #[arg(short, long, default_value_t = 0)]
    offset: u32,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let instr: Instr = args.op.parse()
        .map_err(|e| format!("Failed to parse instruction '{}': {}", args.op, e))?;
    let instr = instr.with_offset(args.offset);

    let mut memory = match &args.memory {
        Some(limits) => {
            let (min, max) = parse_limits(limits)?;
            if args.debug {
                eprintln!("Creating memory: min={} max={} pages", min, max);
            }
            Some(WasmMemory::new(min, max).map_err(|e| format!("Failed to create memory: {}", e))?)
        }
        None => None,
    };

    if !args.init.is_empty() {
        let mem = memory.as_mut().ok_or("--init requires --memory")?;
        for seg in &args.init {
            apply_init(mem, seg)?;
        }
    }

    let operands = args.args.iter()
        .map(|a| parse_value(a))
        .collect::<Result<Vec<Value>, String>>()?;

    if operands.len() != instr.arity() {
        return Err(format!(
            "'{}' expects {} operands, but {} provided",
            args.op,
            instr.arity(),
            operands.len()
        ).into());
    }

    if args.debug {
        eprintln!("Executing {:?} with {} operands", instr, operands.len());
    }

    let result = instr.execute(memory.as_mut(), &operands)
        .map_err(|e| format!("Execution failed: {} ({:?})", e, e))?;

    match result {
        Some(value) => println!("Result: {}", format_value(&value)),
        None => {
            if args.debug {
                eprintln!("Instruction completed successfully (no result)");
            }
        }
    }

    if args.debug {
        if let Some(mem) = &memory {
            eprintln!("Memory size: {} pages ({} bytes)", mem.size(), mem.size_in_bytes());
        }
    }

    Ok(())
}
