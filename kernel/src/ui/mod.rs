//! Menu-driven UI: one input event, one state update, at most one redraw

pub mod nav;
pub mod palette;
pub mod views;


use crate::arch::x86_64::PortIo;
use crate::drivers::keyboard::ScancodeSource;
use crate::gfx::Surface;
use crate::power;
use crate::{serial_debug, serial_info};
use nav::{Command, NavState};

/// Repaint whatever the redraw flags ask for.
///
/// Returns `false` when the state was clean and nothing was drawn.
pub fn render<S: Surface + ?Sized>(surface: &mut S, state: &mut NavState) -> bool {
    if !state.is_dirty() {
        return false;
    }
    if state.needs_full_redraw() {
        surface.clear(state.background_color());
        state.background_painted();
    }
    state.view().draw(surface, state);
    state.redraw_done();
    true
}

/// One loop iteration: redraw if needed, then block for and apply one key.
pub fn step<S, K>(surface: &mut S, keyboard: &mut K, state: &mut NavState) -> Option<Command>
where
    S: Surface + ?Sized,
    K: ScancodeSource + ?Sized,
{
    render(surface, state);

    let key = keyboard.next_key();
    let (view, background) = (state.view(), state.background());
    let command = state.handle(key);

    if state.view() != view {
        serial_debug!("view {:?} -> {:?}", view, state.view());
    }
    if state.background() != background {
        serial_info!("desktop color {}", palette::COLORS[state.background()].name);
    }
    command
}

/// Run the UI until the user picks SHUTDOWN.
pub fn run<S, K, P>(surface: &mut S, keyboard: &mut K, ports: &mut P) -> !
where
    S: Surface + ?Sized,
    K: ScancodeSource + ?Sized,
    P: PortIo,
{
    let mut state = NavState::new();
    loop {
        if let Some(Command::Shutdown) = step(surface, keyboard, &mut state) {
            power::shutdown(surface, ports);
        }
    }
}
