//! Serial Port (COM1) debug sink
//!
//! Append-only diagnostic output. Nothing is written until [`init`] has
//! run, so code paths that log stay safe to exercise off-target.

use core::fmt::{self, Write};
use spin::Mutex;
use uart_16550::SerialPort;

const SERIAL_PORT: u16 = 0x3F8; // COM1

/// Global serial port instance
static SERIAL: Mutex<Option<SerialPort>> = Mutex::new(None);

/// Translates `\n` to `\r\n` on the way out.
struct CrLf<'a>(&'a mut SerialPort);

impl Write for CrLf<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            if byte == b'\n' {
                self.0.send(b'\r');
            }
            self.0.send(byte);
        }
        Ok(())
    }
}

/// Initialize COM1: 38400 baud, 8N1, FIFOs enabled.
pub fn init() {
    let mut port = unsafe { SerialPort::new(SERIAL_PORT) };
    port.init();
    *SERIAL.lock() = Some(port);
}

/// Output is dropped while the port is locked, e.g. when the panic
/// handler re-enters mid-write.
#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    if let Some(mut guard) = SERIAL.try_lock() {
        if let Some(port) = guard.as_mut() {
            let _ = CrLf(port).write_fmt(args);
        }
    }
}

/// `[LEVEL] message` followed by a newline.
fn write_record<W: Write>(out: &mut W, level: &str, args: fmt::Arguments) -> fmt::Result {
    writeln!(out, "[{}] {}", level, args)
}

#[doc(hidden)]
pub fn _log(level: &str, args: fmt::Arguments) {
    _print(format_args!("{}", Record { level, args }));
}

struct Record<'a> {
    level: &'a str,
    args: fmt::Arguments<'a>,
}

impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_record(f, self.level, self.args)
    }
}

/// Write formatted string to serial port
#[macro_export]
macro_rules! serial_print {
    ($($arg:tt)*) => {
        $crate::drivers::serial::_print(format_args!($($arg)*))
    };
}

/// Write formatted string with newline to serial port
#[macro_export]
macro_rules! serial_println {
    () => ($crate::serial_print!("\n"));
    ($($arg:tt)*) => ($crate::serial_print!("{}\n", format_args!($($arg)*)));
}

/// Formatted debug message
#[macro_export]
macro_rules! serial_debug {
    ($($arg:tt)*) => ($crate::drivers::serial::_log("DEBUG", format_args!($($arg)*)));
}

/// Formatted info message
#[macro_export]
macro_rules! serial_info {
    ($($arg:tt)*) => ($crate::drivers::serial::_log("INFO", format_args!($($arg)*)));
}

/// Log info message
pub fn info(message: &str) {
    _log("INFO", format_args!("{}", message));
}

/// Log debug message
pub fn debug(message: &str) {
    _log("DEBUG", format_args!("{}", message));
}

/// Log error message
pub fn error(message: &str) {
    _log("ERROR", format_args!("{}", message));
}
