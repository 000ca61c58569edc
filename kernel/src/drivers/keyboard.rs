//! Polled PS/2 keyboard
//!
//! No IRQs: the controller status register is spun on until a byte is
//! ready. Only raw set-1 make codes are compared; there is no layout or
//! modifier decoding.

use crate::arch::x86_64::PortIo;

const KEYBOARD_DATA_PORT: u16 = 0x60;
const KEYBOARD_STATUS_PORT: u16 = 0x64;
const STATUS_OUTPUT_FULL: u8 = 0x01;

/// Set on break (key release) codes.
pub const RELEASE_BIT: u8 = 0x80;

pub const SC_ESCAPE: u8 = 0x01;
pub const SC_ENTER: u8 = 0x1C;
pub const SC_UP: u8 = 0x48;
pub const SC_DOWN: u8 = 0x50;

/// The keys the UI reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Escape,
}

impl Key {
    /// Map a raw scancode to a key press. Releases and unknown codes give
    /// `None`.
    pub const fn from_scancode(scancode: u8) -> Option<Key> {
        if scancode & RELEASE_BIT != 0 {
            return None;
        }
        match scancode {
            SC_UP => Some(Key::Up),
            SC_DOWN => Some(Key::Down),
            SC_ENTER => Some(Key::Enter),
            SC_ESCAPE => Some(Key::Escape),
            _ => None,
        }
    }
}

/// Blocking source of raw scancode bytes.
pub trait ScancodeSource {
    fn next_scancode(&mut self) -> u8;

    /// Block until a recognized key press arrives, discarding everything
    /// else.
    fn next_key(&mut self) -> Key {
        loop {
            if let Some(key) = Key::from_scancode(self.next_scancode()) {
                return key;
            }
        }
    }
}

pub struct Ps2Keyboard<P: PortIo> {
    ports: P,
}

impl<P: PortIo> Ps2Keyboard<P> {
    pub fn new(ports: P) -> Self {
        Ps2Keyboard { ports }
    }
}

impl<P: PortIo> ScancodeSource for Ps2Keyboard<P> {
    fn next_scancode(&mut self) -> u8 {
        while self.ports.inb(KEYBOARD_STATUS_PORT) & STATUS_OUTPUT_FULL == 0 {
            core::hint::spin_loop();
        }
        self.ports.inb(KEYBOARD_DATA_PORT)
    }
}
