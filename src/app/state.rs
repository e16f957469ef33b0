// ABOUTME: Application state management for the classroom dashboard
// Dashboard actions produce notifications through an injected Notifier

use crate::config::UiConfig;
use crate::models::Course;
use crate::notification::{
    Notification, NotificationCenter, NotificationId, NotificationKind, Notifier, NotifyError,
};
use std::time::Duration;
use tokio::sync::watch;
use tracing::{error, info};

const ANNOUNCEMENTS: [&str; 3] = [
    "Office hours moved to Thursday 14:00",
    "Midterm grades are published",
    "Forum maintenance tonight at 22:00",
];

#[derive(Debug)]
pub struct AppState {
    pub courses: Vec<Course>,
    pub selected_course_index: Option<usize>,
    pub focused_toast: Option<NotificationId>,
    pub help_visible: bool,
    pub should_quit: bool,
    pub ui: UiConfig,
    announcements_posted: usize,
    notifier: Notifier,
}

impl AppState {
    pub fn new(notifier: Notifier, ui: UiConfig) -> Self {
        Self {
            courses: Vec::new(),
            selected_course_index: None,
            focused_toast: None,
            help_visible: false,
            should_quit: false,
            ui,
            announcements_posted: 0,
            notifier,
        }
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn load_mock_data(&mut self) {
        self.courses = vec![
            Course::new("MAT101", "Calculus I", 3),
            Course::new("CS201", "Data Structures", 1),
            Course::new("HIS110", "World History", 0),
            Course::new("PHY150", "Mechanics", 2),
        ];
        self.selected_course_index = Some(0);
    }

    pub fn selected_course(&self) -> Option<&Course> {
        self.courses.get(self.selected_course_index?)
    }

    pub fn next_course(&mut self) {
        if !self.courses.is_empty() {
            let current = self.selected_course_index.unwrap_or(0);
            self.selected_course_index = Some((current + 1) % self.courses.len());
        }
    }

    pub fn previous_course(&mut self) {
        if !self.courses.is_empty() {
            let current = self.selected_course_index.unwrap_or(0);
            self.selected_course_index = Some(if current == 0 {
                self.courses.len() - 1
            } else {
                current - 1
            });
        }
    }

    pub fn go_to_first_course(&mut self) {
        if !self.courses.is_empty() {
            self.selected_course_index = Some(0);
        }
    }

    pub fn go_to_last_course(&mut self) {
        if !self.courses.is_empty() {
            self.selected_course_index = Some(self.courses.len() - 1);
        }
    }

    pub fn open_selected_course(&mut self) {
        let result = match self.selected_course() {
            Some(course) => self
                .notifier
                .notify_info(format!("Opened {}", course.display_name())),
            None => self.notifier.notify_error("No course selected"),
        };
        self.report(result);
    }

    pub fn complete_selected_task(&mut self) {
        let Some(index) = self.selected_course_index else {
            let result = self.notifier.notify_error("No course selected");
            self.report(result);
            return;
        };
        let Some(course) = self.courses.get_mut(index) else {
            return;
        };

        let result = if course.complete_task() {
            info!("Completed task in {}", course.code);
            self.notifier.notify_success(format!(
                "Task completed in {} ({} left)",
                course.code, course.pending_tasks
            ))
        } else {
            self.notifier
                .notify_error(format!("No pending tasks in {}", course.code))
        };
        self.report(result);
    }

    /// Posts an announcement that stays until dismissed.
    pub fn pin_announcement(&mut self) {
        let text = ANNOUNCEMENTS[self.announcements_posted % ANNOUNCEMENTS.len()];
        self.announcements_posted += 1;
        let result = self
            .notifier
            .enqueue(text, NotificationKind::Info, Duration::ZERO);
        self.report(result);
    }

    pub fn toasts(&self) -> Vec<Notification> {
        self.notifier.snapshot()
    }

    /// The focused toast if still active, otherwise the oldest one.
    pub fn focused_toast_id(&self, toasts: &[Notification]) -> Option<NotificationId> {
        self.focused_toast
            .filter(|id| toasts.iter().any(|toast| toast.id == *id))
            .or_else(|| toasts.first().map(|toast| toast.id))
    }

    pub fn focus_next_toast(&mut self) {
        let toasts = self.toasts();
        if toasts.is_empty() {
            self.focused_toast = None;
            return;
        }
        let next = match self.focused_toast_id(&toasts) {
            Some(current) => {
                let position = toasts
                    .iter()
                    .position(|toast| toast.id == current)
                    .unwrap_or(0);
                toasts[(position + 1) % toasts.len()].id
            }
            None => toasts[0].id,
        };
        self.focused_toast = Some(next);
    }

    pub fn dismiss_focused_toast(&mut self) {
        let toasts = self.toasts();
        if let Some(id) = self.focused_toast_id(&toasts) {
            self.notifier.dismiss(id);
        }
        self.focused_toast = None;
    }

    pub fn clear_toasts(&mut self) {
        self.notifier.clear();
        self.focused_toast = None;
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn report(&self, result: Result<NotificationId, NotifyError>) {
        if let Err(e) = result {
            error!("Failed to show notification: {}", e);
        }
    }
}

pub struct App {
    pub state: AppState,
    redraw: watch::Receiver<u64>,
}

impl App {
    pub fn new(center: &NotificationCenter, ui: UiConfig) -> Self {
        Self {
            state: AppState::new(center.notifier(), ui),
            redraw: center.subscribe(),
        }
    }

    pub fn init(&mut self) {
        self.state.load_mock_data();
        info!("Loaded {} courses", self.state.courses.len());
        let result = self
            .state
            .notifier()
            .notify_info("Welcome back! Press ? for help");
        self.state.report(result);
    }

    pub fn tick(&mut self) {
        // Drop focus on toasts that expired since the last tick
        if let Some(id) = self.state.focused_toast {
            let toasts = self.state.toasts();
            if !toasts.iter().any(|toast| toast.id == id) {
                self.state.focused_toast = None;
            }
        }
    }

    /// True once per change of the active notification set.
    pub fn needs_ui_refresh(&mut self) -> bool {
        match self.redraw.has_changed() {
            Ok(true) => {
                let _ = self.redraw.borrow_and_update();
                true
            }
            _ => false,
        }
    }
}
