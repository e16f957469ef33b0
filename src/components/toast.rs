// ABOUTME: Toast surface rendering active notifications in the top-right corner
// Oldest toast on top; the focused toast shows the [x] dismiss hint

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tokio::time::Instant;

use crate::config::UiConfig;
use crate::notification::{Notification, NotificationId, NotificationKind};

const TOAST_HEIGHT: u16 = 4;
const TOAST_SPACING: u16 = 1;

pub struct ToastComponent;

impl ToastComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn accent(kind: NotificationKind) -> Color {
        match kind {
            NotificationKind::Success => Color::Green,
            NotificationKind::Error => Color::Red,
            NotificationKind::Info => Color::Cyan,
        }
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        toasts: &[Notification],
        focused: Option<NotificationId>,
        ui: &UiConfig,
    ) {
        if toasts.is_empty() {
            return;
        }

        let width = area.width.min(ui.toast_width);
        let stack = Rect {
            x: area.x + area.width.saturating_sub(width).saturating_sub(1),
            y: area.y + 1,
            width,
            height: area.height.saturating_sub(1),
        };
        let bottom = stack.y + stack.height;
        let now = Instant::now();

        let mut current_y = stack.y;
        let mut drawn = 0;
        for toast in toasts.iter().take(ui.max_visible) {
            if current_y + TOAST_HEIGHT > bottom {
                break;
            }
            let toast_area = Rect {
                x: stack.x,
                y: current_y,
                width: stack.width,
                height: TOAST_HEIGHT,
            };
            self.render_toast(frame, toast_area, toast, focused == Some(toast.id), ui, now);
            current_y += TOAST_HEIGHT + TOAST_SPACING;
            drawn += 1;
        }

        let hidden = toasts.len() - drawn;
        if hidden > 0 && current_y < bottom {
            let more_area = Rect {
                x: stack.x,
                y: current_y,
                width: stack.width,
                height: 1,
            };
            let more = Paragraph::new(format!("+{} more", hidden))
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Right);
            frame.render_widget(Clear, more_area);
            frame.render_widget(more, more_area);
        }
    }

    fn render_toast(
        &self,
        frame: &mut Frame,
        area: Rect,
        toast: &Notification,
        focused: bool,
        ui: &UiConfig,
        now: Instant,
    ) {
        frame.render_widget(Clear, area);

        let accent = Self::accent(toast.kind);
        let title = if focused {
            format!(" {} [x] ", toast.kind.label())
        } else {
            format!(" {} ", toast.kind.label())
        };
        let border_style = if focused {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(accent)
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let message = Line::from(vec![
            Span::styled(
                format!("{} ", toast.kind.icon()),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(toast.message.as_str(), Style::default().fg(Color::White)),
        ]);
        frame.render_widget(Paragraph::new(message), chunks[0]);

        if toast.is_persistent() {
            let pinned = Paragraph::new("pinned").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(pinned, chunks[1]);
        } else if ui.show_progress {
            let filled = (chunks[1].width as f64 * toast.remaining_fraction(now)) as usize;
            let bar = Paragraph::new("█".repeat(filled)).style(Style::default().fg(accent));
            frame.render_widget(bar, chunks[1]);
        }
    }
}

impl Default for ToastComponent {
    fn default() -> Self {
        Self::new()
    }
}

