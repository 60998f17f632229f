use crate::device_camera::interface::StillImage;
use serde::{Deserialize, Serialize};

/// Reply of the prediction service. `sign` is empty when the model was not
/// confident enough to name a sign.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    pub sign: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub image: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ServiceBanner {
    pub message: String,
}

pub trait PredictionClient {
    /// Exactly one request, no retry.
    fn predict(&self, image: &StillImage)
        -> Result<Prediction, Box<dyn std::error::Error + Send + Sync>>;

    fn health_check(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}
