use std::time::Instant;

use crate::alert::Alert;

/// Single slot holding the pending alert. A write replaces whatever was there.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AlertChannel {
    #[default]
    Empty,
    Holding(Pending),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pending {
    pub alert: Alert,
    pub written_at: Instant,
}

impl AlertChannel {
    pub fn new() -> Self {
        AlertChannel::Empty
    }

    pub fn set_alert(&mut self, alert: Alert) {
        self.set_alert_at(alert, Instant::now());
    }

    pub(crate) fn set_alert_at(&mut self, alert: Alert, written_at: Instant) {
        *self = AlertChannel::Holding(Pending { alert, written_at });
    }

    pub fn clear_alert(&mut self) {
        *self = AlertChannel::Empty;
    }

    pub fn current(&self) -> Option<&Alert> {
        match self {
            AlertChannel::Empty => None,
            AlertChannel::Holding(pending) => Some(&pending.alert),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, AlertChannel::Empty)
    }

    /// True once the held alert has outlived its requested duration.
    pub fn is_expired(&self, now: Instant) -> bool {
        match self {
            AlertChannel::Empty => false,
            AlertChannel::Holding(pending) => {
                now.saturating_duration_since(pending.written_at) >= pending.alert.duration
            }
        }
    }
}
