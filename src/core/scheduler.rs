use std::time::{
    Duration,
    Instant,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Scheduled<A> {
    id: TimerId,
    due: Instant,
    action: A,
}

/// One-shot timers fired by polling. Timers die with the scheduler.
#[derive(Debug)]
pub struct Scheduler<A> {
    next_id: u64,
    pending: Vec<Scheduled<A>>,
}

impl<A> Scheduler<A> {
    pub fn new() -> Self {
        Self { next_id: 0, pending: Vec::new() }
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, action: A) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled { id, due: now + delay, action });
        id
    }

    /// Returns false if the timer already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|task| task.id != id);
        self.pending.len() != before
    }

    /// Removes and returns every action due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<A> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|task| task.due <= now);
        self.pending = pending;

        due.sort_by_key(|task| (task.due, task.id));
        due.into_iter().map(|task| task.action).collect()
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|task| task.due).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_due_order() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start, Duration::from_secs(2), "second");
        scheduler.schedule(start, Duration::from_secs(1), "first");
        scheduler.schedule(start, Duration::from_secs(5), "later");

        assert!(scheduler.take_due(start).is_empty());
        assert_eq!(scheduler.take_due(start + Duration::from_secs(2)), vec!["first", "second"]);
        assert_eq!(scheduler.len(), 1);
        assert_eq!(scheduler.next_due(), Some(start + Duration::from_secs(5)));
    }

    #[test]
    fn timers_fire_once() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start, Duration::ZERO, 1);

        assert_eq!(scheduler.take_due(start), vec![1]);
        assert!(scheduler.take_due(start + Duration::from_secs(10)).is_empty());
        assert!(scheduler.is_empty());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        let id = scheduler.schedule(start, Duration::from_millis(10), "dismiss");

        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert!(scheduler.take_due(start + Duration::from_secs(1)).is_empty());
    }
}
