// ABOUTME: UI components for the dashboard including course list, toasts, and help

pub mod course_list;
pub mod help;
pub mod layout;
pub mod toast;

pub use course_list::CourseListComponent;
pub use help::HelpComponent;
pub use layout::LayoutComponent;
pub use toast::ToastComponent;
