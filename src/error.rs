use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The dispatcher handed an operation something it can never accept.
    Validation(&'static str),
    /// Runtime fault; aborts the current execution, the host keeps running.
    Trap(&'static str),
    Link(&'static str),
    /// Host allocator gave up. Nothing can safely continue after this.
    Allocation(&'static str),
}

impl Error {
    #[inline]
    pub fn message(&self) -> &'static str {
        match self {
            Error::Validation(s) | Error::Trap(s) | Error::Link(s) | Error::Allocation(s) => s,
        }
    }

    #[inline]
    pub fn is_trap(&self) -> bool { matches!(self, Error::Trap(_)) }

    #[inline]
    pub fn is_fatal(&self) -> bool { matches!(self, Error::Allocation(_)) }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for Error {}

#[inline(always)]
pub fn validation<T>(msg: &'static str) -> Result<T, Error> { Err(Error::Validation(msg)) }
#[inline(always)]
pub fn trap<T>(msg: &'static str) -> Result<T, Error> { Err(Error::Trap(msg)) }
#[inline(always)]
pub fn link<T>(msg: &'static str) -> Result<T, Error> { Err(Error::Link(msg)) }
#[inline(always)]
pub fn allocation<T>(msg: &'static str) -> Result<T, Error> { Err(Error::Allocation(msg)) }

// Validation errors
pub const INVALID_NUM_ARG: &str = "invalid number of arguments";
pub const MEMORY_SIZE_LIMIT: &str = "memory size must be at most 65536 pages (4GiB)";
pub const MIN_GREATER_THAN_MAX: &str = "size minimum must not be greater than maximum";
pub const TYPE_MISMATCH: &str = "type mismatch";
pub const UNKNOWN_MEMORY: &str = "unknown memory";
pub const UNKNOWN_OPERATOR: &str = "unknown operator";
// Trap errors
pub const DIVIDE_BY_ZERO: &str = "integer divide by zero";
pub const INTEGER_OVERFLOW: &str = "integer overflow";
pub const INVALID_CONV_TO_INT: &str = "invalid conversion to integer";
pub const OOB_MEMORY_ACCESS: &str = "out of bounds memory access";
// Link errors
pub const DATA_SEG_DNF: &str = "data segment does not fit";
// Allocation errors
pub const ALLOCATION_FAILED: &str = "memory allocation failed";
