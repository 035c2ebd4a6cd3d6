use std::fmt;

/// Score counter.  The label is rewritten on every render tick, so a change
/// shows up on the next frame without any redraw bookkeeping here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Score {
    pub value: i64,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increase_score(&mut self, amount: i64) {
        self.value += amount;
    }

    pub fn set_score(&mut self, amount: i64) {
        self.value = amount;
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score: {}", self.value)
    }
}
