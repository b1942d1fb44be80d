#![no_std]
#![cfg_attr(not(test), no_main)]

// SPDX-FileCopyrightText: 2022 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

#[cfg(not(test))]
use riscv_rt::entry;

use charport_sys::emitter::Emitter;
use charport_sys::output_port::OutputPort;

/// Address of the platform's character output register, the single
/// build-time configuration knob of this program.
const CHAR_PORT_ADDR: *mut u8 = 0x7000_0000 as *mut u8;

const GREETING: &[u8] = b"Marquez";
const PROBE: &[u8] = b"dummy";

#[cfg_attr(not(test), entry)]
fn main() -> ! {
    // SAFETY: CHAR_PORT_ADDR points at the write-only character device
    //         register of this platform's memory map.
    let port = unsafe { OutputPort::new(CHAR_PORT_ADDR) };

    // The console only carries panic reports; normal output goes through
    // the emitter so the port sees exactly the banner bytes.
    unsafe {
        charport_sys::character_device::initialise(port);
    }

    let mut emitter = Emitter::new(port);
    emitter.emit(GREETING);
    emitter.emit(PROBE);

    // work complete, park the core
    loop {
        continue;
    }
}
