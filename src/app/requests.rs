use std::collections::HashMap;

use crate::event::RequestKind;
use crate::log_debug;

/// Sequence numbers for device requests.
///
/// Responses can arrive in any order. For reads (config, file list) only the
/// answer to the most recently issued request is applied. Writes are never
/// superseded: each one is applied, so each failure reaches the user.
#[derive(Debug, Default)]
pub struct RequestTracker {
    next_seq: u64,
    latest: HashMap<RequestKind, u64>,
    in_flight: HashMap<u64, RequestKind>,
}

impl RequestTracker {
    pub fn issue(&mut self, kind: RequestKind) -> u64 {
        self.next_seq += 1;
        self.latest.insert(kind, self.next_seq);
        self.in_flight.insert(self.next_seq, kind);
        self.next_seq
    }

    /// Whether a response should be applied. Either way the request is no longer in flight.
    pub fn complete(&mut self, kind: RequestKind, seq: u64) -> bool {
        self.in_flight.remove(&seq);
        if !kind.is_supersedable() || self.latest.get(&kind) == Some(&seq) {
            true
        } else {
            log_debug!("Dropping stale {:?} response #{}", kind, seq);
            false
        }
    }

    pub fn is_in_flight(&self, kind: RequestKind) -> bool {
        self.in_flight.values().any(|k| *k == kind)
    }

    pub fn any_in_flight(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Labels of the kinds still waiting, in a stable order
    pub fn pending_labels(&self) -> Vec<&'static str> {
        let mut labels: Vec<&'static str> = self.in_flight.values().map(|k| k.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_read_wins() {
        let mut tracker = RequestTracker::default();
        let first = tracker.issue(RequestKind::GetConfig);
        let second = tracker.issue(RequestKind::GetConfig);

        assert!(!tracker.complete(RequestKind::GetConfig, first));
        assert!(tracker.is_in_flight(RequestKind::GetConfig));
        assert!(tracker.complete(RequestKind::GetConfig, second));
        assert!(!tracker.any_in_flight());
    }

    #[test]
    fn test_writes_are_never_superseded() {
        let mut tracker = RequestTracker::default();
        let first = tracker.issue(RequestKind::RemoveFile);
        let second = tracker.issue(RequestKind::RemoveFile);

        assert!(tracker.complete(RequestKind::RemoveFile, first));
        assert!(tracker.is_in_flight(RequestKind::RemoveFile));
        assert!(tracker.complete(RequestKind::RemoveFile, second));
        assert!(!tracker.any_in_flight());
    }

    #[test]
    fn test_read_stays_busy_until_latest_answers() {
        let mut tracker = RequestTracker::default();
        let _first = tracker.issue(RequestKind::ListFiles);
        let second = tracker.issue(RequestKind::ListFiles);

        assert_eq!(tracker.pending_labels(), vec!["Get filelist"]);
        assert!(tracker.complete(RequestKind::ListFiles, second));
        assert!(tracker.is_in_flight(RequestKind::ListFiles));
    }

    #[test]
    fn test_kinds_are_independent() {
        let mut tracker = RequestTracker::default();
        let get = tracker.issue(RequestKind::GetConfig);
        let set = tracker.issue(RequestKind::SetConfig);

        assert_eq!(tracker.pending_labels(), vec!["Get config", "Set config"]);
        assert!(tracker.complete(RequestKind::SetConfig, set));
        assert!(tracker.complete(RequestKind::GetConfig, get));
    }
}
