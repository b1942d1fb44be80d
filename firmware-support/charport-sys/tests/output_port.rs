// SPDX-FileCopyrightText: 2022 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

use core::fmt::Write;

use charport_sys::output_port::OutputPort;

#[test]
fn write_byte_stores_to_the_configured_address() {
    let mut cell: u8 = 0;
    let mut port = unsafe { OutputPort::new(&mut cell) };
    port.write_byte(0x41);
    assert_eq!(cell, 0x41);
}

#[test]
fn consecutive_writes_land_on_the_same_register() {
    let mut cell: u8 = 0;
    let mut port = unsafe { OutputPort::new(&mut cell) };
    for b in *b"dummy" {
        port.write_byte(b);
    }
    assert_eq!(cell, b'y');
}

#[test]
fn formatted_output_walks_every_byte_through_the_port() {
    let mut cell: u8 = 0;
    let mut port = unsafe { OutputPort::new(&mut cell) };

    write!(port, "{:x}", 0xfeu8).unwrap();
    assert_eq!(cell, b'e');

    let _ = ufmt::uwrite!(&mut port, "ok");
    assert_eq!(cell, b'k');
}
