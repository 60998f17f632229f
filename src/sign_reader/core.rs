use crate::config::Config;
use crate::device_camera::interface::StillImage;
use crate::prediction_client::interface::Prediction;

pub const CAPTURE_FAILED_MESSAGE: &str = "Failed to capture image";
pub const REQUEST_FAILED_MESSAGE: &str = "Error sending image to backend";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleId(pub u64);

impl CycleId {
    fn next(self) -> Self {
        CycleId(self.0 + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CyclePhase {
    Capturing,
    Requesting,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cycle {
    pub id: CycleId,
    pub phase: CyclePhase,
}

/// The three display fields. Empty means not shown.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Display {
    pub result: String,
    pub message: String,
    pub error: String,
}

impl Display {
    fn failed(error: &str) -> Self {
        Self {
            result: String::new(),
            message: String::new(),
            error: error.to_string(),
        }
    }

    fn succeeded(config: &Config, prediction: Prediction) -> Self {
        Self {
            result: config.label_map.translate(&prediction.sign),
            message: prediction.message.unwrap_or_default(),
            error: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ServiceStatus {
    #[default]
    Checking,
    Reachable(String),
    Unreachable,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Model {
    pub display: Display,
    pub cycles: Vec<Cycle>,
    pub next_cycle: CycleId,
    pub service: ServiceStatus,
    pub quitting: bool,
}

impl Model {
    pub fn is_idle(&self) -> bool {
        self.cycles.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.quitting && self.is_idle()
    }

    fn finish_cycle(&mut self, cycle: CycleId) -> bool {
        let before = self.cycles.len();
        self.cycles.retain(|c| c.id != cycle);
        self.cycles.len() != before
    }
}

#[derive(Debug)]
pub enum Msg {
    Trigger,
    Quit,
    FrameCaptureDone {
        cycle: CycleId,
        result: Result<StillImage, Box<dyn std::error::Error + Send + Sync>>,
    },
    PredictDone {
        cycle: CycleId,
        result: Result<Prediction, Box<dyn std::error::Error + Send + Sync>>,
    },
    ServiceCheckDone(Result<String, Box<dyn std::error::Error + Send + Sync>>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SubscribeTrigger,
    CheckService,
    CaptureFrame { cycle: CycleId },
    Predict { cycle: CycleId, image: StillImage },
}

pub fn init() -> (Model, Vec<Effect>) {
    (
        Model::default(),
        vec![Effect::SubscribeTrigger, Effect::CheckService],
    )
}

pub fn transition(config: &Config, model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    let mut model = model;

    match msg {
        Msg::Trigger => {
            if model.quitting {
                return (model, vec![]);
            }

            let cycle = model.next_cycle;
            model.next_cycle = cycle.next();
            model.display.error.clear();
            model.cycles.push(Cycle {
                id: cycle,
                phase: CyclePhase::Capturing,
            });

            (model, vec![Effect::CaptureFrame { cycle }])
        }

        Msg::FrameCaptureDone { cycle, result } => {
            let position = model
                .cycles
                .iter()
                .position(|c| c.id == cycle && c.phase == CyclePhase::Capturing);
            let Some(position) = position else {
                return (model, vec![]);
            };

            match result {
                Ok(image) if !image.is_empty() => {
                    model.cycles[position].phase = CyclePhase::Requesting;
                    (model, vec![Effect::Predict { cycle, image }])
                }
                _ => {
                    model.finish_cycle(cycle);
                    model.display = Display::failed(CAPTURE_FAILED_MESSAGE);
                    (model, vec![])
                }
            }
        }

        Msg::PredictDone { cycle, result } => {
            if !model.finish_cycle(cycle) {
                return (model, vec![]);
            }

            model.display = match result {
                Ok(prediction) => Display::succeeded(config, prediction),
                Err(_) => Display::failed(REQUEST_FAILED_MESSAGE),
            };
            (model, vec![])
        }

        Msg::ServiceCheckDone(result) => {
            model.service = match result {
                Ok(banner) => ServiceStatus::Reachable(banner),
                Err(_) => ServiceStatus::Unreachable,
            };
            (model, vec![])
        }

        Msg::Quit => {
            model.quitting = true;
            (model, vec![])
        }
    }
}
