// ABOUTME: Event handling system for keyboard input and app actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crate::app::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    NextCourse,
    PreviousCourse,
    GoToTop,
    GoToBottom,
    OpenCourse,
    CompleteTask,
    PinAnnouncement,
    // Toast events
    FocusNextToast,
    DismissToast,
    ClearToasts,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(AppEvent::Quit);
        }

        if state.help_visible {
            return match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Char('j') | KeyCode::Down => Some(AppEvent::NextCourse),
            KeyCode::Char('k') | KeyCode::Up => Some(AppEvent::PreviousCourse),
            KeyCode::Char('g') => Some(AppEvent::GoToTop),
            KeyCode::Char('G') => Some(AppEvent::GoToBottom),
            KeyCode::Enter => Some(AppEvent::OpenCourse),
            KeyCode::Char('c') => Some(AppEvent::CompleteTask),
            KeyCode::Char('p') => Some(AppEvent::PinAnnouncement),
            KeyCode::Char('t') | KeyCode::Tab => Some(AppEvent::FocusNextToast),
            KeyCode::Char('x') => Some(AppEvent::DismissToast),
            KeyCode::Char('X') => Some(AppEvent::ClearToasts),
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::ToggleHelp => state.toggle_help(),
            AppEvent::NextCourse => state.next_course(),
            AppEvent::PreviousCourse => state.previous_course(),
            AppEvent::GoToTop => state.go_to_first_course(),
            AppEvent::GoToBottom => state.go_to_last_course(),
            AppEvent::OpenCourse => state.open_selected_course(),
            AppEvent::CompleteTask => state.complete_selected_task(),
            AppEvent::PinAnnouncement => state.pin_announcement(),
            AppEvent::FocusNextToast => state.focus_next_toast(),
            AppEvent::DismissToast => state.dismiss_focused_toast(),
            AppEvent::ClearToasts => state.clear_toasts(),
        }
    }
}
