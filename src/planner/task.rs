use super::PlannerError;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: String,
    pub description: String,
    pub completed: bool,
    pub due_date: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    pub fn mark_pending(&mut self) {
        self.completed = false;
    }

    pub fn add_tag(&mut self, tag: String) {
        self.tags.push(tag); // Duplicates allowed, insertion order kept
    }

    pub fn remove_tag(&mut self, tag: &str) -> Result<(), PlannerError> {
        match self.tags.iter().position(|t| t == tag) {
            Some(index) => {
                self.tags.remove(index);
                Ok(())
            }
            None => Err(PlannerError::TagNotFound(tag.to_string())),
        }
    }

    pub fn render(&self) -> String {
        let status = if self.completed { "Completed" } else { "Pending" };
        let mut line = format!("{} - {}", self.description, status);

        if let Some(due) = &self.due_date {
            line.push_str(&format!(", Due: {}", due));
        }

        if !self.tags.is_empty() {
            line.push_str(&format!(", Tags: {}", self.tags.join(", ")));
        }

        line
    }
}

pub struct TaskBuilder {
    description: String,
    due_date: Option<String>,
    tags: Vec<String>,
}

impl TaskBuilder {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            due_date: None,
            tags: Vec::new(),
        }
    }

    pub fn set_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    pub fn add_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn build(self) -> Task {
        Task {
            id: uuid::Uuid::new_v4().to_string(),
            description: self.description,
            completed: false,
            due_date: self.due_date,
            tags: self.tags,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_includes_due_date_and_tags() {
        let task = TaskBuilder::new("Buy milk")
            .set_due_date("2024-01-01")
            .add_tag("errand")
            .add_tag("home")
            .build();

        assert_eq!(
            task.render(),
            "Buy milk - Pending, Due: 2024-01-01, Tags: errand, home"
        );
    }

    #[test]
    fn render_omits_empty_optional_fields() {
        let mut task = TaskBuilder::new("Water plants").build();
        assert_eq!(task.render(), "Water plants - Pending");

        task.mark_completed();
        assert_eq!(task.render(), "Water plants - Completed");
    }

    #[test]
    fn builder_assigns_unique_ids() {
        let a = TaskBuilder::new("a").build();
        let b = TaskBuilder::new("a").build();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn mark_operations_are_idempotent() {
        let mut task = TaskBuilder::new("a").build();
        task.mark_completed();
        task.mark_completed();
        assert!(task.completed);
        task.mark_pending();
        task.mark_pending();
        assert!(!task.completed);
    }

    #[test]
    fn add_tag_keeps_duplicates() {
        let mut task = TaskBuilder::new("a").build();
        task.add_tag("x".to_string());
        task.add_tag("x".to_string());
        assert_eq!(task.tags, vec!["x", "x"]);
    }

    #[test]
    fn remove_tag_drops_first_occurrence_only() {
        let mut task = TaskBuilder::new("a").add_tag("x").add_tag("y").add_tag("x").build();
        task.remove_tag("x").unwrap();
        assert_eq!(task.tags, vec!["y", "x"]);
    }

    #[test]
    fn remove_missing_tag_fails_and_leaves_tags_intact() {
        let mut task = TaskBuilder::new("a").add_tag("x").build();
        let err = task.remove_tag("z").unwrap_err();
        assert_eq!(err, PlannerError::TagNotFound("z".to_string()));
        assert_eq!(task.tags, vec!["x"]);
    }
}
