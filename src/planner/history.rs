use super::task::Task;

// A full copy of the task collection at one point in time. Every field of
// every task is owned, so mutating live tasks never touches a stored state.
#[derive(Debug, Clone)]
pub struct Snapshot {
    state: Vec<Task>,
}

impl Snapshot {
    pub fn capture(tasks: &[Task]) -> Self {
        Self {
            state: tasks.to_vec(),
        }
    }

    pub fn state(&self) -> &[Task] {
        &self.state
    }
}

pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self {
            snapshots: Vec::new(),
        }
    }

    // One entry per mutation, always of the post-mutation state, so
    // snapshots[i] is "the state after mutation i".
    pub fn record(&mut self, tasks: &[Task]) {
        self.snapshots.push(Snapshot::capture(tasks));
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn can_undo(&self) -> bool {
        self.snapshots.len() > 1
    }

    // Pops the newest snapshot and hands back a fresh copy of the one
    // beneath it. The oldest snapshot is the floor: the empty pre-history
    // state was never recorded, so it can never be restored.
    pub fn undo(&mut self) -> Option<Vec<Task>> {
        if !self.can_undo() {
            return None;
        }
        self.snapshots.pop();
        self.snapshots.last().map(|s| s.state.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::task::TaskBuilder;

    #[test]
    fn record_grows_history_by_one() {
        let mut history = History::new();
        let tasks = vec![TaskBuilder::new("a").build()];

        history.record(&tasks);
        history.record(&tasks);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn undo_with_one_entry_is_refused() {
        let mut history = History::new();
        assert!(history.undo().is_none());

        history.record(&[TaskBuilder::new("a").build()]);
        assert!(!history.can_undo());
        assert!(history.undo().is_none());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn undo_returns_previous_state() {
        let mut history = History::new();
        let first = vec![TaskBuilder::new("a").build()];
        let mut second = first.clone();
        second.push(TaskBuilder::new("b").build());

        history.record(&first);
        history.record(&second);

        let restored = history.undo().unwrap();
        assert_eq!(restored, first);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn stored_snapshot_is_isolated_from_live_mutation() {
        let mut history = History::new();
        let mut tasks = vec![TaskBuilder::new("a").build()];
        history.record(&tasks);

        tasks[0].mark_completed();
        tasks[0].add_tag("later".to_string());

        let stored = &history.snapshots[0];
        assert!(!stored.state()[0].completed);
        assert!(stored.state()[0].tags.is_empty());
    }
}
