use super::constants::{MILESTONE_STEP, MILESTONE_WORDS};

/// Latch that remembers the last score a milestone fired for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MilestoneState {
  last_triggered: u64,
}

impl MilestoneState {
  #[cfg(test)]
  pub fn last_triggered(&self) -> u64 {
    self.last_triggered
  }

  /// Returns `true` exactly when `score` is a fresh non-zero multiple of the step.
  pub fn check(&mut self, score: u64) -> bool {
    if score == 0 || score % MILESTONE_STEP != 0 || score == self.last_triggered {
      return false;
    }
    self.last_triggered = score;
    true
  }
}

pub fn milestone_word(score: u64) -> &'static str {
  let step = (score / MILESTONE_STEP).max(1);
  let index = ((step - 1) % MILESTONE_WORDS.len() as u64) as usize;
  MILESTONE_WORDS[index]
}
