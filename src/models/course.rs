// ABOUTME: Course data model shown on the classroom dashboard

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub code: String,
    pub title: String,
    pub pending_tasks: u32,
}

impl Course {
    pub fn new(code: impl Into<String>, title: impl Into<String>, pending_tasks: u32) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            pending_tasks,
        }
    }

    /// Returns false when nothing was pending.
    pub fn complete_task(&mut self) -> bool {
        if self.pending_tasks == 0 {
            return false;
        }
        self.pending_tasks -= 1;
        true
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.code, self.title)
    }

    pub fn tasks_badge(&self) -> String {
        match self.pending_tasks {
            0 => "all done".to_string(),
            1 => "1 task".to_string(),
            n => format!("{} tasks", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_task_stops_at_zero() {
        let mut course = Course::new("MAT101", "Calculus I", 1);
        assert!(course.complete_task());
        assert_eq!(course.pending_tasks, 0);
        assert!(!course.complete_task());
        assert_eq!(course.tasks_badge(), "all done");
    }
}
