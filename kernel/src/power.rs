//! Power management for BaseOS
//! Provides the shutdown path taken from the menu

use crate::arch::x86_64::{self, PortIo};
use crate::gfx::{compositor, Color, Paint, Surface};

/// QEMU ACPI PM1a control port
pub const QEMU_SHUTDOWN_PORT: u16 = 0x604;
/// Bochs / older VirtualBox ACPI PM1a control port
pub const VBOX_SHUTDOWN_PORT: u16 = 0xB004;
/// SLP_EN with sleep type S5
pub const SHUTDOWN_COMMAND: u16 = 0x2000;

pub const HALT_MESSAGE: &str = "System Halted.";

/// Ask the hypervisor to power off, trying each known port in turn.
///
/// Returns only if neither request took effect.
pub fn request_poweroff<P: PortIo>(ports: &mut P) {
    // Method 1: QEMU
    ports.outw(QEMU_SHUTDOWN_PORT, SHUTDOWN_COMMAND);
    // Method 2: Bochs / VirtualBox
    ports.outw(VBOX_SHUTDOWN_PORT, SHUTDOWN_COMMAND);
}

/// Black screen with the halt notice on the middle row.
pub fn show_halted<S: Surface + ?Sized>(surface: &mut S) {
    let m = surface.metrics();
    surface.clear(Color::Black);
    compositor::draw_string_centered(
        surface,
        HALT_MESSAGE,
        (m.height - m.line_height) / 2,
        Paint::new(Color::LightRed, Color::Black),
    );
}

/// Shut the machine down. Falls back to a halted screen if nothing
/// answered the power-off requests.
pub fn shutdown<S: Surface + ?Sized, P: PortIo>(surface: &mut S, ports: &mut P) -> ! {
    crate::drivers::serial::info("Shutdown requested");
    request_poweroff(ports);

    crate::drivers::serial::error("Power-off not acknowledged, halting");
    show_halted(surface);
    x86_64::halt_forever()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arch::x86_64::testing::RecordingPorts;
    use crate::gfx::canvas::Canvas;

    #[test]
    fn poweroff_tries_qemu_then_vbox() {
        let mut ports = RecordingPorts::default();
        request_poweroff(&mut ports);
        assert_eq!(
            ports.words,
            vec![(QEMU_SHUTDOWN_PORT, SHUTDOWN_COMMAND), (VBOX_SHUTDOWN_PORT, SHUTDOWN_COMMAND)]
        );
    }

    #[test]
    fn halt_notice_is_centered_on_middle_row() {
        let mut canvas = Canvas::text();
        show_halted(&mut canvas);
        assert_eq!(canvas.clears, vec![Color::Black]);
        assert_eq!(canvas.find_text(HALT_MESSAGE), Some(((80 - 14) / 2, 12)));
        assert_eq!(canvas.glyphs[0].3, Paint::new(Color::LightRed, Color::Black));

        let mut canvas = Canvas::pixel();
        show_halted(&mut canvas);
        assert_eq!(canvas.find_text(HALT_MESSAGE), Some(((320 - 14 * 6) / 2, 95)));
    }
}
