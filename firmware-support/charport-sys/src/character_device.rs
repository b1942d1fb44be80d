// SPDX-FileCopyrightText: 2022 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use crate::output_port::OutputPort;

static mut DEVICE: Option<OutputPort> = None;

pub struct CharacterDevice;

/// Initialises the character device
///
/// # Safety
///
/// The `port` argument must be backed by the character device output
/// register.
pub unsafe fn initialise(port: OutputPort) -> bool {
    match DEVICE {
        Some(_) => false,
        None => {
            DEVICE = Some(port);
            true
        }
    }
}

impl ufmt::uWrite for CharacterDevice {
    type Error = ();

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        // SAFETY: this RISC-V implementation does not support multiple threads
        //         of execution, so the access is essentially thread-local.
        let mut port = if let Some(port) = unsafe { DEVICE } {
            port
        } else {
            return Err(());
        };

        for b in s.bytes() {
            port.write_byte(b);
        }
        Ok(())
    }
}

//
// re-export of common macros from the `std` for IO.
//

#[macro_export]
macro_rules! print {
    () => {
        $crate::print!("")
    };
    ($($t:tt)*) => {{
        let _ = ufmt::uwrite!(&mut $crate::character_device::CharacterDevice, $($t)*);
    }};
}

#[macro_export]
macro_rules! println {
    () => {
        $crate::println!("")
    };
    ($($t:tt)*) => {{
        let _ = ufmt::uwriteln!(&mut $crate::character_device::CharacterDevice, $($t)*);
    }};
}
