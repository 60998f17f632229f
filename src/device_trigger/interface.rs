use std::sync::mpsc::Receiver;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerEvent {
    Capture,
    Quit,
}

/// Source of user actions. The stream ends when the receiver disconnects.
pub trait DeviceTrigger {
    fn events(&self) -> Receiver<TriggerEvent>;
}
