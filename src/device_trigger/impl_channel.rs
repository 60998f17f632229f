use crate::device_trigger::interface::{DeviceTrigger, TriggerEvent};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;

/// Trigger fed from elsewhere in the process, e.g. the GUI button.
/// The receiver is handed out once; later subscribers get a closed stream.
pub struct DeviceTriggerChannel {
    receiver: Mutex<Option<Receiver<TriggerEvent>>>,
}

impl DeviceTriggerChannel {
    pub fn new() -> (Self, Sender<TriggerEvent>) {
        let (tx, rx) = mpsc::channel();
        (
            Self {
                receiver: Mutex::new(Some(rx)),
            },
            tx,
        )
    }

    /// Sends the given events then closes the stream.
    #[cfg(test)]
    pub fn scripted(events: Vec<TriggerEvent>) -> Self {
        let (trigger, tx) = Self::new();
        for event in events {
            let _ = tx.send(event);
        }
        trigger
    }
}

impl DeviceTrigger for DeviceTriggerChannel {
    fn events(&self) -> Receiver<TriggerEvent> {
        let taken = self.receiver.lock().ok().and_then(|mut r| r.take());
        taken.unwrap_or_else(|| mpsc::channel().1)
    }
}
