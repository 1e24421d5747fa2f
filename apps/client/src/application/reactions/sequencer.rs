/// Bookkeeping for one kind of mutation (likes or comments) on one item.
///
/// Every dispatched request takes a token from a monotonic counter. Only the
/// newest token may write reconciled state. Older completions are dropped and
/// leave the track dirty; once nothing is in flight, a dirty track asks for
/// one more authoritative fetch.
///
/// `revision` counts how often server state replaced local state. A failed
/// request compares it with the value seen at dispatch to know whether its
/// own optimistic change is still on screen.
#[derive(Debug, Default)]
pub(crate) struct RequestTrack {
    latest: u64,
    in_flight: u32,
    dirty: bool,
    revision: u64,
}

impl RequestTrack {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.in_flight += 1;
        self.latest
    }

    pub fn is_latest(&self, token: u64) -> bool {
        token == self.latest
    }

    /// Token of the newest request dispatched so far (0 before any).
    pub fn epoch(&self) -> u64 {
        self.latest
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Records that one request finished. `resolved` is false when its
    /// outcome could not be written to state. Returns true when the caller
    /// should re-fetch authoritative state; the request is handed out once.
    pub fn finish(&mut self, resolved: bool) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        if !resolved {
            self.dirty = true;
        }
        if self.in_flight == 0 && self.dirty {
            self.dirty = false;
            return true;
        }
        false
    }

    /// A fetch taken at `epoch` may be applied if nothing was dispatched
    /// since and nothing is in flight.
    pub fn accepts_fetch(&self, epoch: u64) -> bool {
        self.latest == epoch && self.in_flight == 0
    }

    /// A re-fetch was discarded because newer requests went out; the next
    /// completion has to ask again.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Server state was written over local state.
    pub fn mark_applied(&mut self) {
        self.revision += 1;
    }

    /// Server state was written while idle, which also settles any pending
    /// re-fetch.
    pub fn mark_synced(&mut self) {
        self.dirty = false;
        self.revision += 1;
    }
}
