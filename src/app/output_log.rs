use std::collections::VecDeque;

use crate::util::format::timestamp;

const MAX_ENTRIES: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct OutputEntry {
    pub time: String,
    pub title: String,
    pub body: String,
}

/// Timestamped response log, newest first
#[derive(Debug, Default)]
pub struct OutputLog {
    entries: VecDeque<OutputEntry>,
}

impl OutputLog {
    pub fn push(&mut self, title: &str, body: &str) {
        self.entries.push_front(OutputEntry {
            time: timestamp(),
            title: title.to_string(),
            body: body.to_string(),
        });
        self.entries.truncate(MAX_ENTRIES);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> impl Iterator<Item = &OutputEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&OutputEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first_and_bounded() {
        let mut log = OutputLog::default();
        for i in 0..(MAX_ENTRIES + 5) {
            log.push("Restart:", &i.to_string());
        }

        assert_eq!(log.len(), MAX_ENTRIES);
        assert_eq!(log.latest().unwrap().body, (MAX_ENTRIES + 4).to_string());

        log.clear();
        assert!(log.is_empty());
    }
}
