use super::main::SignReader;
use crate::device_display::interface::View;
use crate::sign_reader::core::{CyclePhase, Model, ServiceStatus};

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn status_line(model: &Model) -> String {
    let activity = if model
        .cycles
        .iter()
        .any(|c| c.phase == CyclePhase::Requesting)
    {
        "Predicting..."
    } else if !model.is_idle() {
        "Capturing..."
    } else if model.quitting {
        "Stopping"
    } else {
        "Ready"
    };

    match &model.service {
        ServiceStatus::Checking => format!("{} (checking service)", activity),
        ServiceStatus::Reachable(banner) => format!("{} ({})", activity, banner),
        ServiceStatus::Unreachable => format!("{} (service unreachable)", activity),
    }
}

pub fn view(model: &Model) -> View {
    View {
        status: status_line(model),
        result: non_empty(&model.display.result),
        message: non_empty(&model.display.message),
        error: non_empty(&model.display.error),
    }
}

impl SignReader {
    pub fn render(&self, model: &Model) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut device_display = self.device_display.lock().map_err(|e| e.to_string())?;
        device_display.show(&view(model))
    }
}
