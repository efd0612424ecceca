//! Execution timeline (Gantt chart) model.
//!
//! The timeline is the ordered list of CPU slots produced by one run. Slots
//! are appended in start order and partition the observed time span: each
//! slot ends exactly where the next one begins.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Reserved occupant label for slots where the CPU has nothing to run.
pub const IDLE_LABEL: &str = "IDLE";

/// What occupies the CPU during a slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Occupant {
    /// A dispatched process, by id.
    Process(String),
    /// No process was ready.
    Idle,
}

impl Occupant {
    /// Label used in reports: the process id, or `IDLE`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Process(id) => id,
            Self::Idle => IDLE_LABEL,
        }
    }

    /// Process id, if this is not an idle slot.
    pub fn process_id(&self) -> Option<&str> {
        match self {
            Self::Process(id) => Some(id),
            Self::Idle => None,
        }
    }

    /// Whether this is an idle slot.
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

impl Serialize for Occupant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Occupant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s == IDLE_LABEL {
            Ok(Self::Idle)
        } else {
            Ok(Self::Process(s))
        }
    }
}

/// One contiguous interval `[start, end)` of CPU time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSlot {
    /// Process running during the slot, or idle.
    #[serde(rename = "pid")]
    pub occupant: Occupant,
    /// Slot start (inclusive).
    pub start: i64,
    /// Slot end (exclusive). Always greater than `start`.
    pub end: i64,
}

impl TimelineSlot {
    /// Creates a slot for a running process.
    pub fn running(id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            occupant: Occupant::Process(id.into()),
            start,
            end,
        }
    }

    /// Creates an idle slot.
    pub fn idle(start: i64, end: i64) -> Self {
        Self {
            occupant: Occupant::Idle,
            start,
            end,
        }
    }

    /// Slot length (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether the CPU was idle during this slot.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.occupant.is_idle()
    }
}

/// Append-only sequence of timeline slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    slots: Vec<TimelineSlot>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slot.
    pub fn push(&mut self, slot: TimelineSlot) {
        self.slots.push(slot);
    }

    /// All slots in start order.
    pub fn slots(&self) -> &[TimelineSlot] {
        &self.slots
    }

    /// Number of slots, idle ones included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot has been recorded.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Start of the first slot.
    pub fn first_start(&self) -> Option<i64> {
        self.slots.first().map(|s| s.start)
    }

    /// End of the last slot.
    pub fn last_end(&self) -> Option<i64> {
        self.slots.last().map(|s| s.end)
    }

    /// Observed span from first start to last end, idle time included.
    pub fn span(&self) -> i64 {
        match (self.first_start(), self.last_end()) {
            (Some(start), Some(end)) => end - start,
            _ => 0,
        }
    }

    /// Total time spent running processes.
    pub fn busy_time(&self) -> i64 {
        self.slots
            .iter()
            .filter(|s| !s.is_idle())
            .map(TimelineSlot::duration)
            .sum()
    }

    /// Total time the CPU sat idle inside the span.
    pub fn idle_time(&self) -> i64 {
        self.slots
            .iter()
            .filter(|s| s.is_idle())
            .map(TimelineSlot::duration)
            .sum()
    }

    /// Idle slots only.
    pub fn idle_slots(&self) -> impl Iterator<Item = &TimelineSlot> {
        self.slots.iter().filter(|s| s.is_idle())
    }

    /// The slot in which a process ran.
    pub fn slot_for_process(&self, id: &str) -> Option<&TimelineSlot> {
        self.slots
            .iter()
            .find(|s| s.occupant.process_id() == Some(id))
    }

    /// Process ids in dispatch order (idle slots skipped).
    pub fn dispatch_order(&self) -> Vec<&str> {
        self.slots
            .iter()
            .filter_map(|s| s.occupant.process_id())
            .collect()
    }

    /// Whether every slot is non-empty and ends where the next one starts.
    pub fn is_contiguous(&self) -> bool {
        self.slots.iter().all(|s| s.end > s.start)
            && self.slots.windows(2).all(|w| w[0].end == w[1].start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gap_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.push(TimelineSlot::running("P1", 0, 3));
        t.push(TimelineSlot::idle(3, 5));
        t.push(TimelineSlot::running("P2", 5, 7));
        t
    }

    #[test]
    fn test_span_and_busy_time() {
        let t = gap_timeline();
        assert_eq!(t.len(), 3);
        assert_eq!(t.first_start(), Some(0));
        assert_eq!(t.last_end(), Some(7));
        assert_eq!(t.span(), 7);
        assert_eq!(t.busy_time(), 5);
        assert_eq!(t.idle_time(), 2);
        assert_eq!(t.idle_slots().count(), 1);
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert!(t.is_empty());
        assert_eq!(t.span(), 0);
        assert_eq!(t.busy_time(), 0);
        assert_eq!(t.first_start(), None);
        assert!(t.is_contiguous());
    }

    #[test]
    fn test_dispatch_order_skips_idle() {
        let t = gap_timeline();
        assert_eq!(t.dispatch_order(), vec!["P1", "P2"]);
        assert_eq!(t.slot_for_process("P2").map(|s| s.start), Some(5));
        assert!(t.slot_for_process("IDLE").is_none());
    }

    #[test]
    fn test_contiguity() {
        assert!(gap_timeline().is_contiguous());

        let mut broken = Timeline::new();
        broken.push(TimelineSlot::running("P1", 0, 3));
        broken.push(TimelineSlot::running("P2", 4, 6));
        assert!(!broken.is_contiguous());

        let mut zero_width = Timeline::new();
        zero_width.push(TimelineSlot::running("P1", 2, 2));
        assert!(!zero_width.is_contiguous());
    }

    #[test]
    fn test_slot_serialization() {
        let json = serde_json::to_string(&gap_timeline()).unwrap();
        assert_eq!(
            json,
            r#"[{"pid":"P1","start":0,"end":3},{"pid":"IDLE","start":3,"end":5},{"pid":"P2","start":5,"end":7}]"#
        );

        let back: Timeline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, gap_timeline());
    }
}
