//! Toast notifications stacked in a corner of the screen

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use segbuild_app::config::ToastPosition;
use segbuild_app::{NotificationKind, NotificationQueue};

use super::modal_overlay::clear_area;
use crate::theme::styles;

const TOAST_WIDTH: u16 = 50;
const TOAST_HEIGHT: u16 = 3;

/// Rects for `count` toasts anchored at `position`, first toast nearest the
/// corner. Toasts that do not fit are left out.
pub fn toast_rects(area: Rect, count: usize, position: ToastPosition) -> Vec<Rect> {
    let width = TOAST_WIDTH.min(area.width.saturating_sub(2));
    if width == 0 {
        return Vec::new();
    }

    let x = match position {
        ToastPosition::TopRight | ToastPosition::BottomRight => {
            area.x + area.width.saturating_sub(width + 1)
        }
        ToastPosition::TopLeft | ToastPosition::BottomLeft => area.x + 1,
    };

    let mut rects = Vec::new();
    for i in 0..count as u16 {
        let offset = 1 + i * TOAST_HEIGHT;
        if offset + TOAST_HEIGHT > area.height {
            break;
        }
        let y = match position {
            ToastPosition::TopRight | ToastPosition::TopLeft => area.y + offset,
            ToastPosition::BottomRight | ToastPosition::BottomLeft => {
                area.y + area.height - offset - TOAST_HEIGHT
            }
        };
        rects.push(Rect::new(x, y, width, TOAST_HEIGHT));
    }
    rects
}

/// All active toasts, newest nearest the anchor corner
pub struct ToastStack<'a> {
    notifications: &'a NotificationQueue,
    position: ToastPosition,
}

impl<'a> ToastStack<'a> {
    pub fn new(notifications: &'a NotificationQueue, position: ToastPosition) -> Self {
        Self {
            notifications,
            position,
        }
    }
}

impl Widget for ToastStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.notifications.is_empty() {
            return;
        }

        let rects = toast_rects(area, self.notifications.len(), self.position);
        for (rect, toast) in rects.into_iter().zip(self.notifications.iter().rev()) {
            let style = styles::notification(toast.kind);
            let icon = match toast.kind {
                NotificationKind::Success => "✔",
                NotificationKind::Error => "✖",
            };

            clear_area(buf, rect);
            let block = styles::glass_block(false).border_style(style);
            let line = Line::from(vec![
                Span::styled(format!("{} ", icon), style),
                Span::styled(toast.message.as_str(), styles::text_primary()),
            ]);
            Paragraph::new(line).block(block).render(rect, buf);
        }
    }
}
