//! Privileged x86 primitives: port I/O and halting

use ::x86_64::instructions::port::Port;

/// Access to the I/O port space.
///
/// Drivers take this as a parameter instead of touching ports directly so
/// they can be driven by a scripted implementation on the host.
pub trait PortIo {
    fn inb(&mut self, port: u16) -> u8;
    fn outw(&mut self, port: u16, value: u16);
}

/// The real I/O port space.
pub struct HwPorts {
    _private: (),
}

impl HwPorts {
    /// # Safety
    ///
    /// Must only be used at ring 0 (or with IOPL 3).
    pub const unsafe fn new() -> Self {
        HwPorts { _private: () }
    }
}

impl PortIo for HwPorts {
    #[inline]
    fn inb(&mut self, port: u16) -> u8 {
        unsafe { Port::<u8>::new(port).read() }
    }

    #[inline]
    fn outw(&mut self, port: u16, value: u16) {
        unsafe { Port::<u16>::new(port).write(value) }
    }
}

/// Park the processor for good.
pub fn halt_forever() -> ! {
    ::x86_64::instructions::interrupts::disable();
    loop {
        ::x86_64::instructions::hlt();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::PortIo;

    /// Port space that records writes and reads back zero.
    #[derive(Default)]
    pub struct RecordingPorts {
        pub words: Vec<(u16, u16)>,
    }

    impl PortIo for RecordingPorts {
        fn inb(&mut self, _port: u16) -> u8 {
            0
        }

        fn outw(&mut self, port: u16, value: u16) {
            self.words.push((port, value));
        }
    }
}
