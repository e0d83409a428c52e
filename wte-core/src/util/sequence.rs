use std::cell::Cell;

/// Identifies a single request within a [`RequestSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Monotonically increasing request counter.
///
/// Responses are only applied if their ticket is still the latest one,
/// i.e. the last issued request wins, regardless of completion order.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: Cell<u64>,
}

impl RequestSequence {
    pub fn next(&self) -> Ticket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Ticket(next)
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }

    /// Invalidates all tickets that have been issued so far.
    pub fn invalidate(&self) {
        self.next();
    }
}
