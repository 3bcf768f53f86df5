//! Per-panel request tickets. Starting a request cancels the one before it, so
//! a superseded response can never write into the panel.

use std::cell::Cell;
use std::rc::Rc;

/// Captured by an in-flight request and checked when its response lands.
#[derive(Debug, Clone)]
pub struct RequestTicket {
    id: u64,
    cancelled: Rc<Cell<bool>>,
}

impl RequestTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestSlot {
    issued: u64,
    live: Option<RequestTicket>,
}

impl RequestSlot {
    pub fn begin(&mut self) -> RequestTicket {
        self.cancel();
        self.issued = self.issued.wrapping_add(1);
        let ticket = RequestTicket {
            id: self.issued,
            cancelled: Rc::new(Cell::new(false)),
        };
        self.live = Some(ticket.clone());
        ticket
    }

    pub fn cancel(&mut self) {
        if let Some(ticket) = self.live.take() {
            ticket.cancelled.set(true);
        }
    }

    /// Releases the slot if `ticket` is still the live request.
    pub fn finish(&mut self, ticket: &RequestTicket) -> bool {
        let is_live = !ticket.is_cancelled()
            && self.live.as_ref().is_some_and(|live| live.id == ticket.id);
        if is_live {
            self.live = None;
        }
        is_live
    }

    pub fn in_flight(&self) -> bool {
        self.live.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_request_cancels_older_one() {
        let mut slot = RequestSlot::default();
        let first = slot.begin();
        let second = slot.begin();

        assert!(first.is_cancelled());
        assert!(!slot.finish(&first));
        assert!(slot.finish(&second));
        assert!(!slot.in_flight());
    }

    #[test]
    fn ticket_only_finishes_once() {
        let mut slot = RequestSlot::default();
        let ticket = slot.begin();
        assert!(slot.finish(&ticket));
        assert!(!slot.finish(&ticket));
    }

    #[test]
    fn cancel_rejects_the_live_ticket() {
        let mut slot = RequestSlot::default();
        let ticket = slot.begin();
        slot.cancel();
        assert!(ticket.is_cancelled());
        assert!(!slot.finish(&ticket));
    }
}
