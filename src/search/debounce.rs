/// Identifies one scheduled debounce timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Bookkeeping for a single-slot debounce timer.
///
/// At most one ticket is pending. Scheduling replaces the pending ticket, so a
/// timer that fires with an older ticket is ignored.
#[derive(Debug, Default)]
pub struct Debouncer {
    generation: u64,
    pending: Option<Ticket>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a new timer, cancelling any pending one.
    pub fn schedule(&mut self) -> Ticket {
        self.generation += 1;
        let ticket = Ticket(self.generation);
        self.pending = Some(ticket);
        ticket
    }

    /// Cancel the pending timer. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// A timer elapsed. Returns true only for the pending ticket, which is consumed.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn pending(&self) -> Option<Ticket> {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_fires() {
        let mut debouncer = Debouncer::new();
        let first = debouncer.schedule();
        let second = debouncer.schedule();

        assert_ne!(first, second);
        assert!(!debouncer.fire(first));
        assert!(debouncer.fire(second));
        assert_eq!(debouncer.pending(), None);
    }

    #[test]
    fn ticket_fires_once() {
        let mut debouncer = Debouncer::new();
        let ticket = debouncer.schedule();
        assert!(debouncer.fire(ticket));
        assert!(!debouncer.fire(ticket));
    }

    #[test]
    fn cancelled_ticket_never_fires() {
        let mut debouncer = Debouncer::new();
        let ticket = debouncer.schedule();
        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());
        assert!(!debouncer.fire(ticket));
    }
}
