use load_status::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock StatusSink for testing that captures messages with their level
#[derive(Default, Clone)]
pub struct MockStatusSink {
    pub messages: Arc<Mutex<Vec<(StatusLevel, String)>>>,
}

#[allow(dead_code)]
impl MockStatusSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(level, _)| *level == StatusLevel::Warn)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn message_count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }

    pub fn clear(&self) {
        self.messages.lock().unwrap().clear();
    }
}

impl StatusSink for MockStatusSink {
    fn emit(&self, level: StatusLevel, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}
