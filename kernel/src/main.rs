//! BaseOS Kernel Entry Point
//! Single-tasking, interrupt-free: draw the menu, poll the keyboard, repeat

#![no_std]
#![no_main]

use core::panic::PanicInfo;

use baseos::arch::x86_64::{halt_forever, HwPorts};
use baseos::drivers::{self, keyboard::Ps2Keyboard};
use baseos::{serial_info, serial_println, ui};

// ============================================================================
// PANIC HANDLER - location and message to Serial (COM1)
// ============================================================================

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    serial_println!();
    serial_println!("!!! KERNEL PANIC !!!");
    if let Some(location) = info.location() {
        serial_println!("Location: {}:{}", location.file(), location.line());
    }
    serial_println!("{}", info.message());
    serial_println!("System halted.");
    halt_forever()
}

// ============================================================================
// KERNEL ENTRY POINT
// ============================================================================

#[no_mangle]
pub extern "C" fn _start() -> ! {
    x86_64::instructions::interrupts::disable();

    drivers::serial::init();
    drivers::serial::info("Kernel started.");

    // SAFETY: we run at ring 0 and nothing else owns the port space.
    let mut keyboard = Ps2Keyboard::new(unsafe { HwPorts::new() });
    let mut ports = unsafe { HwPorts::new() };

    #[cfg(feature = "text-mode")]
    let mut surface = {
        serial_info!("Display: VGA text 80x25 @ 0xB8000");
        // SAFETY: the loader leaves the adapter in text mode 3, identity-mapped.
        unsafe { drivers::vga_buffer::TextSurface::vga() }
    };

    #[cfg(not(feature = "text-mode"))]
    let mut surface = {
        serial_info!("Display: mode 13h 320x200 @ 0xA0000");
        // SAFETY: the loader switched the adapter to mode 13h, identity-mapped.
        unsafe { drivers::framebuffer::PixelSurface::mode13h() }
    };

    serial_println!("[READY] Entering main loop");
    ui::run(&mut surface, &mut keyboard, &mut ports)
}
