use crate::domain::ports::Navigator;
use std::sync::{Arc, Mutex};

/// Navigator that only remembers where it was sent.
#[derive(Debug, Clone, Default)]
pub struct MemoryNavigator {
    visits: Arc<Mutex<Vec<String>>>,
}

impl MemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last navigation target, the equivalent of the current page location.
    pub fn location(&self) -> Option<String> {
        self.visits.lock().ok()?.last().cloned()
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits
            .lock()
            .map(|visits| visits.clone())
            .unwrap_or_default()
    }
}

impl Navigator for MemoryNavigator {
    fn navigate(&self, target: &str) {
        if let Ok(mut visits) = self.visits.lock() {
            visits.push(target.to_string());
        }
    }
}
