// SPDX-FileCopyrightText: 2022 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

pub mod log;

/// A sink for single bytes.
///
/// This is the seam between serialisation and hardware: [`OutputPort`]
/// implements it with a volatile store, host tests implement it with a
/// recording buffer.
pub trait ByteSink {
    /// Write a single byte to the sink.
    fn write_byte(&mut self, byte: u8);
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    fn write_byte(&mut self, byte: u8) {
        (**self).write_byte(byte);
    }
}

/// `OutputPort` is a structure representing exclusive access to a single
/// byte-wide memory mapped output register.
#[derive(Clone, Copy)]
pub struct OutputPort {
    /// `data_addr` is a mutable pointer to the address of the data register.
    data_addr: *mut u8,
}

impl OutputPort {
    /// Create a new [`OutputPort`] instance given the address of its data
    /// register.
    ///
    /// # Safety
    ///
    /// The `addr` pointer MUST BE a valid pointer that is backed by a
    /// memory mapped output register.
    pub const unsafe fn new(addr: *mut u8) -> OutputPort {
        OutputPort { data_addr: addr }
    }

    /// Write a single byte to the data register.
    ///
    /// Each call performs exactly one volatile store to the configured
    /// address; stores are never merged, reordered or elided. The register
    /// is write-only, there is nothing to poll and the write cannot fail.
    pub fn write_byte(&mut self, byte: u8) {
        unsafe {
            self.data_addr.write_volatile(byte);
        }
    }
}

impl ByteSink for OutputPort {
    fn write_byte(&mut self, byte: u8) {
        OutputPort::write_byte(self, byte);
    }
}

impl ufmt::uWrite for OutputPort {
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for b in s.bytes() {
            self.write_byte(b);
        }
        Ok(())
    }

    type Error = ();
}

impl core::fmt::Write for OutputPort {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for b in s.bytes() {
            self.write_byte(b);
        }
        Ok(())
    }
}
