//! Last-load-wins sequencing for structure loads.
//!
//! Loads can complete out of order (a slow parse for structure A finishing
//! after a quick one for structure B). Every load takes a [`LoadTicket`]
//! up front; only the ticket from the most recent `begin` may commit.

/// Handle for one in-flight structure load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    /// Monotonic sequence number of this load.
    #[must_use]
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// Issues tickets and tracks which one is current.
#[derive(Debug, Clone, Default)]
pub(crate) struct LoadSequencer {
    latest: u64,
    committed: Option<u64>,
}

impl LoadSequencer {
    /// Start a new load, superseding every earlier ticket.
    pub(crate) fn begin(&mut self) -> LoadTicket {
        self.latest += 1;
        LoadTicket(self.latest)
    }

    /// Whether `ticket` is still the newest load.
    pub(crate) fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Record that `ticket` committed its structure.
    pub(crate) fn commit(&mut self, ticket: LoadTicket) {
        self.committed = Some(ticket.0);
    }

    /// Whether the newest load has committed.
    pub(crate) fn is_settled(&self) -> bool {
        self.committed == Some(self.latest)
    }
}
