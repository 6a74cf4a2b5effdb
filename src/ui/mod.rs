//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::state::AppState;
use components::{banner_height, draw_banner, render_fault_screen};
use ratatui::Frame;
use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use tracing::error;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState) {
    if let Some(message) = &state.render_fault {
        render_fault_screen(frame, message);
        return;
    }

    let area = frame.area();
    let areas = layout::create_layout(area, banner_height(&state.submission, area.width));

    layout::draw_header(frame, areas.header, state);
    if areas.banner.height > 0 {
        draw_banner(frame, areas.banner, &state.submission);
    }
    forms::draw_form(frame, areas.form, state);
    layout::draw_actions(frame, areas.actions, state);
    layout::draw_status_bar(frame, areas.status, state);
}

/// Draw the UI behind the render fault barrier.
///
/// Returns the panic message when rendering failed; the fallback screen
/// has already been drawn into `frame` in that case.
pub fn draw_guarded(frame: &mut Frame, state: &AppState) -> Option<String> {
    let fault = render_with_barrier(frame, |f| draw(f, state))?;
    if let Some(nested) = render_with_barrier(frame, |f| render_fault_screen(f, &fault)) {
        error!(%nested, "fallback screen failed to render");
    }
    Some(fault)
}

thread_local! {
    static IN_BARRIER: Cell<bool> = const { Cell::new(false) };
}

/// True while the current thread is drawing behind the render barrier
pub fn render_barrier_active() -> bool {
    IN_BARRIER.with(Cell::get)
}

fn render_with_barrier<F>(frame: &mut Frame, render: F) -> Option<String>
where
    F: FnOnce(&mut Frame),
{
    let outer = IN_BARRIER.replace(true);
    let result = panic::catch_unwind(AssertUnwindSafe(|| render(frame)));
    IN_BARRIER.set(outer);
    result.err().map(|payload| panic_message(payload.as_ref()))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "An unexpected error occurred while drawing the screen".to_string()
    }
}
