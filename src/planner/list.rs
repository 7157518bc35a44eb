use super::history::History;
use super::task::Task;
use super::PlannerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewFilter {
    All,
    Completed,
    Pending,
}

impl ViewFilter {
    // Anything unrecognized means "show everything".
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "completed" => Self::Completed,
            "pending" => Self::Pending,
            _ => Self::All,
        }
    }
}

pub struct TaskList {
    tasks: Vec<Task>,
    history: History,
}

impl TaskList {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            history: History::new(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
        self.history.record(&self.tasks);
    }

    pub fn delete_task(&mut self, id: &str) -> Result<(), PlannerError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| PlannerError::TaskNotFound(id.to_string()))?;

        self.tasks.remove(index);
        self.history.record(&self.tasks);
        Ok(())
    }

    pub fn mark_completed(&mut self, id: &str) -> Result<(), PlannerError> {
        self.find_mut(id)?.mark_completed();
        self.history.record(&self.tasks);
        Ok(())
    }

    pub fn mark_pending(&mut self, id: &str) -> Result<(), PlannerError> {
        self.find_mut(id)?.mark_pending();
        self.history.record(&self.tasks);
        Ok(())
    }

    pub fn view(&self, filter: ViewFilter) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| match filter {
                ViewFilter::All => true,
                ViewFilter::Completed => t.completed,
                ViewFilter::Pending => !t.completed,
            })
            .collect()
    }

    // Replays the previous snapshot wholesale; silent no-op at the floor.
    pub fn undo(&mut self) {
        if let Some(state) = self.history.undo() {
            self.tasks = state;
        }
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Task, PlannerError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| PlannerError::TaskNotFound(id.to_string()))
    }
}
