//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use segbuild_app::AppState;

use crate::theme::palette;
use crate::widgets::{self, modal_overlay};

/// Side panel width as a share of the screen
const PANEL_WIDTH_PERCENT: u16 = 40;
/// Narrowest panel that still fits the footer hint
const PANEL_MIN_WIDTH: u16 = 58;

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: the host screen, the segment panel when open, then the
/// toasts on top of everything.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    frame.render_widget(widgets::Launcher::new(&state.endpoint_label), area);

    if let Some(builder) = &state.builder {
        let panel = modal_overlay::side_panel_rect(PANEL_WIDTH_PERCENT, PANEL_MIN_WIDTH, area);
        let buf = frame.buffer_mut();
        modal_overlay::dim_background(buf, area);
        modal_overlay::clear_area(buf, panel);
        frame.render_widget(widgets::SegmentModal::new(builder), panel);
    }

    frame.render_widget(
        widgets::ToastStack::new(
            &state.notifications,
            state.settings.notifications.position,
        ),
        area,
    );
}
