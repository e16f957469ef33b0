// ABOUTME: Course list component for the dashboard's main pane

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::app::AppState;

pub struct CourseListComponent {
    list_state: ListState,
}

impl Default for CourseListComponent {
    fn default() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { list_state }
    }
}

impl CourseListComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        self.list_state.select(state.selected_course_index);

        let items: Vec<ListItem> = state
            .courses
            .iter()
            .map(|course| {
                let badge_style = if course.pending_tasks == 0 {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Yellow)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<8}", course.code),
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("{:<24}", course.title)),
                    Span::styled(course.tasks_badge(), badge_style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title("My Courses")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title_style(Style::default().fg(Color::Yellow)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}
