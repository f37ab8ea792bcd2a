/// Identifies one issued request. Only the latest ticket may apply its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Hands out increasing [`RequestTicket`]s so late responses from superseded
/// requests can be recognised and dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestGeneration {
    latest: u64,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket that supersedes every earlier one.
    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Make every outstanding ticket stale.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}
