use std::cell::Cell;
use std::rc::Rc;

/// Identifies one request issued through a [`RequestSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Monotonic counter shared by all requests of one operation. Only the holder
/// of the most recently issued ticket may apply its response.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Rc<Cell<u64>>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestTicket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        RequestTicket(next)
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        self.latest.get() == ticket.0
    }
}
