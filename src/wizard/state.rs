use std::cmp::Ordering;

/// Which way the wizard last moved, derived from the stored step pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    /// No move yet
    Still,
}

/// Observable wizard state. Published to subscribers after every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardState {
    pub current_step: usize,
    pub previous_step: usize,
    pub step_count: usize,
    pub is_submitted: bool,
    /// A `next`/`submit` attempt is waiting on validation
    pub pending: bool,
}

impl WizardState {
    pub fn new(step_count: usize) -> Self {
        Self {
            current_step: 0,
            previous_step: 0,
            step_count,
            is_submitted: false,
            pending: false,
        }
    }

    /// Signed step difference of the last transition. Always recomputed.
    pub fn delta(&self) -> isize {
        self.current_step as isize - self.previous_step as isize
    }

    pub fn direction(&self) -> Direction {
        match self.delta().cmp(&0) {
            Ordering::Greater => Direction::Forward,
            Ordering::Less => Direction::Backward,
            Ordering::Equal => Direction::Still,
        }
    }

    pub fn is_first_step(&self) -> bool {
        self.current_step == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step + 1 == self.step_count
    }

    pub fn can_go_back(&self) -> bool {
        !self.is_submitted && !self.is_first_step()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.is_submitted && !self.pending && !self.is_last_step()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitted && !self.pending && self.is_last_step()
    }
}
