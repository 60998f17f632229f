use crate::device_trigger::interface::{DeviceTrigger, TriggerEvent};
use crate::library::logger::interface::Logger;
use std::io::BufRead;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

/// Enter captures, `q` or end of input quits.
pub struct DeviceTriggerStdin {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceTriggerStdin {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("trigger").with_namespace("stdin"),
        }
    }
}

pub fn parse_line(line: &str) -> Option<TriggerEvent> {
    match line.trim().to_lowercase().as_str() {
        "" | "c" | "capture" => Some(TriggerEvent::Capture),
        "q" | "quit" | "exit" => Some(TriggerEvent::Quit),
        _ => None,
    }
}

impl DeviceTrigger for DeviceTriggerStdin {
    fn events(&self) -> Receiver<TriggerEvent> {
        let (tx, rx) = mpsc::channel();
        let logger = self.logger.clone();

        std::thread::spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        let _ = logger.error(&format!("Failed to read stdin: {}", e));
                        break;
                    }
                };

                match parse_line(&line) {
                    Some(event) => {
                        if tx.send(event).is_err() || event == TriggerEvent::Quit {
                            return;
                        }
                    }
                    None => {
                        let _ = logger.info(&format!("Ignoring input {:?}", line));
                    }
                }
            }
            let _ = tx.send(TriggerEvent::Quit);
        });

        rx
    }
}
