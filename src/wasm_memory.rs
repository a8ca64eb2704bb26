use crate::error::*;
use crate::reinterpret::LeBytes;

macro_rules! impl_access {
    ($type:ty, $load_name:ident, $store_name:ident) => {
        #[inline(always)]
        pub fn $load_name(&self, ptr: u32, offset: u32) -> Result<$type, Error> {
            self.read::<$type>(ptr, offset)
        }
        #[inline(always)]
        pub fn $store_name(&mut self, ptr: u32, offset: u32, v: $type) -> Result<(), Error> {
            self.write::<$type>(ptr, offset, v)
        }
    };
}

macro_rules! impl_signed_load {
    ($name:ident, $target:ty) => {
        #[inline(always)]
        pub fn $name(&self, ptr: u32, offset: u32) -> Result<$target, Error> {
            self.read::<$target>(ptr, offset)
        }
    };
}

/// Page-granular linear memory of one module instance.
///
/// The buffer always holds exactly `size() * PAGE_SIZE` bytes. Backing
/// storage is reserved as pages are exposed; `max()` is the logical ceiling.
pub struct WasmMemory {
    data: Vec<u8>,
    minimum: u32,
    current: u32,
    maximum: u32,
}

impl WasmMemory {
    pub const MAX_PAGES: u32 = 65536;
    pub const PAGE_SIZE: u32 = 65536;
    /// `grow` result when the request would pass `max()`.
    pub const GROW_FAILED: i32 = -1;

    pub fn new(initial: u32, maximum: u32) -> Result<Self, Error> {
        if initial > Self::MAX_PAGES { return validation(MEMORY_SIZE_LIMIT); }
        let maximum = maximum.min(Self::MAX_PAGES);
        if initial > maximum { return validation(MIN_GREATER_THAN_MAX); }

        let len = Self::pages_to_bytes(initial)?;
        let mut data = Vec::new();
        if data.try_reserve_exact(len).is_err() {
            crate::debug_println!("[mem] failed to reserve {} pages", initial);
            return allocation(ALLOCATION_FAILED);
        }
        data.resize(len, 0);
        crate::debug_println!("[mem] new min={} max={} bytes={}", initial, maximum, len);
        Ok(Self { data, minimum: initial, current: initial, maximum })
    }

    #[inline]
    fn pages_to_bytes(pages: u32) -> Result<usize, Error> {
        (pages as usize)
            .checked_mul(Self::PAGE_SIZE as usize)
            .ok_or(Error::Allocation(ALLOCATION_FAILED))
    }

    pub fn size(&self) -> u32 { self.current }
    pub fn min(&self) -> u32 { self.minimum }
    pub fn max(&self) -> u32 { self.maximum }
    pub fn size_in_bytes(&self) -> usize { self.data.len() }
    pub fn data(&self) -> &[u8] { &self.data }

    /// Returns the previous size in pages, or `GROW_FAILED` when the
    /// request exceeds `max()`. A host allocation failure is an error and
    /// leaves the memory untouched.
    pub fn grow(&mut self, delta: u32) -> Result<i32, Error> {
        let old = self.current;
        if delta == 0 { return Ok(old as i32); }
        if delta > self.maximum - self.current {
            crate::debug_println!("[mem] grow denied: {} + {} > {}", old, delta, self.maximum);
            return Ok(Self::GROW_FAILED);
        }
        let new_len = Self::pages_to_bytes(old + delta)?;
        if self.data.try_reserve_exact(new_len - self.data.len()).is_err() {
            crate::debug_println!("[mem] grow by {} pages failed in the host allocator", delta);
            return allocation(ALLOCATION_FAILED);
        }
        self.data.resize(new_len, 0);
        self.current = old + delta;
        crate::debug_println!("[mem] grow {} -> {} pages", old, self.current);
        Ok(old as i32)
    }

    /// Start index of `len` bytes at `ptr + offset`, if the whole range is
    /// inside the current size.
    #[inline(always)]
    fn checked_range(&self, ptr: u32, offset: u32, len: usize) -> Result<usize, Error> {
        let addr = ptr as u64 + offset as u64;
        if addr + len as u64 > self.data.len() as u64 { return trap(OOB_MEMORY_ACCESS); }
        Ok(addr as usize)
    }

    #[inline(always)]
    fn read<T: LeBytes>(&self, ptr: u32, offset: u32) -> Result<T, Error> {
        let start = self.checked_range(ptr, offset, T::WIDTH)?;
        Ok(T::from_le_slice(&self.data[start..start + T::WIDTH]))
    }

    #[inline(always)]
    fn write<T: LeBytes>(&mut self, ptr: u32, offset: u32, v: T) -> Result<(), Error> {
        let start = self.checked_range(ptr, offset, T::WIDTH)?;
        v.write_le_slice(&mut self.data[start..start + T::WIDTH]);
        Ok(())
    }

    impl_access!(u8,  load_u8,  store_u8);    impl_access!(u16, load_u16, store_u16);
    impl_access!(u32, load_u32, store_u32);   impl_access!(u64, load_u64, store_u64);
    impl_access!(i32, load_i32, store_i32);   impl_access!(i64, load_i64, store_i64);
    impl_access!(f32, load_f32, store_f32);   impl_access!(f64, load_f64, store_f64);
    impl_signed_load!(load_i8, i8);           impl_signed_load!(load_i16, i16);

    /// Copies a data segment in during instantiation.
    pub fn init(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Error> {
        let start = offset as usize;
        let end = match start.checked_add(bytes.len()) {
            Some(end) if end <= self.data.len() => end,
            _ => return link(DATA_SEG_DNF),
        };
        self.data[start..end].copy_from_slice(bytes);
        crate::debug_println!("[mem] init {} bytes at {}", bytes.len(), offset);
        Ok(())
    }

    /// `memory.fill`. The range is checked even when `len` is zero.
    pub fn fill(&mut self, dst: u32, value: u8, len: u32) -> Result<(), Error> {
        let start = self.checked_range(dst, 0, len as usize)?;
        self.data[start..start + len as usize].fill(value);
        Ok(())
    }

    /// `memory.copy`, overlapping ranges behave like `memmove`.
    pub fn copy(&mut self, dst: u32, src: u32, len: u32) -> Result<(), Error> {
        let src = self.checked_range(src, 0, len as usize)?;
        let dst = self.checked_range(dst, 0, len as usize)?;
        self.data.copy_within(src..src + len as usize, dst);
        Ok(())
    }
}
