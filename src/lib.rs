#![deny(unsafe_code)]

// Debug macro that only prints when wasm_debug feature is enabled
#[cfg(feature = "wasm_debug")]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        eprintln!($($arg)*);
    };
}

#[cfg(not(feature = "wasm_debug"))]
macro_rules! debug_println {
    ($($arg:tt)*) => {};
}

pub(crate) use debug_println;

pub mod error;
pub mod value;
pub mod reinterpret;
pub mod arithmetic;
pub mod bitcount;
pub mod comparison;
pub mod logical;
pub mod shift;
pub mod conversion;
pub mod float;
pub mod wasm_memory;
pub mod dispatch;
pub mod script;

pub use error::Error;
pub use value::{Value, ValType};
pub use reinterpret::{LeBytes, Reinterpret};
pub use wasm_memory::WasmMemory;
pub use dispatch::{
    AccessWidth, ConvOp, FloatBinOp, FloatRelOp, FloatUnOp, Instr, IntBinOp, IntRelOp, IntUnOp,
    Load, NumOp, Signedness, Store, Width,
};
pub use script::{run_script, Report, Script};
