// ABOUTME: Main layout component handling the course pane, toast overlay, and bottom menu bar

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
    style::{Color, Style},
};

use crate::app::AppState;
use super::{CourseListComponent, HelpComponent, ToastComponent};

pub struct LayoutComponent {
    course_list: CourseListComponent,
    toasts: ToastComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            course_list: CourseListComponent::new(),
            toasts: ToastComponent::new(),
            help: HelpComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),     // Main content
                Constraint::Length(3),  // Bottom menu bar
            ])
            .split(frame.size());

        self.course_list.render(frame, main_chunks[0], state);
        self.render_menu_bar(frame, main_chunks[1]);

        // Toasts float above the content, help above everything
        let toasts = state.toasts();
        let focused = state.focused_toast_id(&toasts);
        self.toasts.render(frame, main_chunks[0], &toasts, focused, &state.ui);

        if state.help_visible {
            self.help.render(frame, frame.size());
        }
    }

    fn render_menu_bar(&self, frame: &mut Frame, area: Rect) {
        let menu_text = "[enter]open [c]omplete [p]in [t]oast focus [x]dismiss [X]clear [?]help [q]uit";

        let menu = Paragraph::new(menu_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
            )
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);

        frame.render_widget(menu, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
