// Hardware drivers: the two display backends, the polled keyboard and the
// serial debug sink

pub mod framebuffer;
pub mod keyboard;
pub mod serial;
pub mod vga_buffer;
