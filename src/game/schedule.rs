use super::types::CreatureId;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingRespawn {
  pub due_ms: f64,
}

/// Deferred respawn actions, one per creature at most.
#[derive(Debug, Default)]
pub struct RespawnSchedule {
  pending: BTreeMap<CreatureId, PendingRespawn>,
}

impl RespawnSchedule {
  /// Schedules a respawn. Any action already pending for the same creature is replaced.
  pub fn schedule(&mut self, creature: CreatureId, due_ms: f64) {
    self.pending.insert(creature, PendingRespawn { due_ms });
  }

  #[cfg(test)]
  pub fn pending_for(&self, creature: CreatureId) -> Option<PendingRespawn> {
    self.pending.get(&creature).copied()
  }

  #[cfg(test)]
  pub fn len(&self) -> usize {
    self.pending.len()
  }

  /// Removes and returns every action due at `now_ms`, earliest first, ties by creature id.
  pub fn take_due(&mut self, now_ms: f64) -> Vec<CreatureId> {
    let mut due: Vec<(CreatureId, f64)> = self
      .pending
      .iter()
      .filter(|(_, pending)| pending.due_ms <= now_ms)
      .map(|(id, pending)| (*id, pending.due_ms))
      .collect();
    due.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
    for (id, _) in &due {
      self.pending.remove(id);
    }
    due.into_iter().map(|(id, _)| id).collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn take_due_orders_by_time_then_id() {
    let mut schedule = RespawnSchedule::default();
    schedule.schedule(CreatureId(3), 1500.0);
    schedule.schedule(CreatureId(1), 2500.0);
    schedule.schedule(CreatureId(2), 1500.0);
    schedule.schedule(CreatureId(4), 9000.0);

    assert!(schedule.take_due(1000.0).is_empty());
    assert_eq!(
      schedule.take_due(3000.0),
      vec![CreatureId(2), CreatureId(3), CreatureId(1)]
    );
    assert_eq!(schedule.len(), 1);
  }

  #[test]
  fn rescheduling_replaces_pending_action() {
    let mut schedule = RespawnSchedule::default();
    schedule.schedule(CreatureId(5), 100.0);
    schedule.schedule(CreatureId(5), 700.0);
    assert_eq!(schedule.len(), 1);
    assert!(schedule.take_due(500.0).is_empty());
    assert_eq!(schedule.take_due(700.0), vec![CreatureId(5)]);
  }
}
