//! Alliance records between two players.

use atomfront_core::types::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alliance {
    pub requestor: PlayerId,
    pub recipient: PlayerId,
    /// Tick the alliance was formed.
    pub created_at: u64,
}

impl Alliance {
    /// Whether this alliance binds `a` and `b` (in either direction).
    pub fn binds(&self, a: PlayerId, b: PlayerId) -> bool {
        (self.requestor == a && self.recipient == b) || (self.requestor == b && self.recipient == a)
    }

    /// The partner of `player`, if `player` is a member.
    pub fn other(&self, player: PlayerId) -> Option<PlayerId> {
        if self.requestor == player {
            Some(self.recipient)
        } else if self.recipient == player {
            Some(self.requestor)
        } else {
            None
        }
    }
}
