use crate::device_camera::interface::StillImage;
use crate::library::logger::interface::Logger;
use crate::prediction_client::interface::{Prediction, PredictionClient};
use rand::distr::{Distribution, Uniform};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

const MIN_CONFIDENCE: f32 = 0.8;

/// Stand-in for the prediction service. Scripted replies are served first,
/// then it guesses like the real model does, including low-confidence misses.
pub struct PredictionClientFake {
    logger: Arc<dyn Logger + Send + Sync>,
    signs: Vec<String>,
    scripted: Mutex<VecDeque<Result<Prediction, String>>>,
    calls: AtomicUsize,
}

impl PredictionClientFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, signs: Vec<String>) -> Self {
        Self {
            logger: logger.with_namespace("prediction_client").with_namespace("fake"),
            signs,
            scripted: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    #[cfg(test)]
    pub fn with_replies(
        logger: Arc<dyn Logger + Send + Sync>,
        replies: Vec<Result<Prediction, String>>,
    ) -> Self {
        let fake = Self::new(logger, vec![]);
        if let Ok(mut scripted) = fake.scripted.lock() {
            scripted.extend(replies);
        }
        fake
    }

    #[cfg(test)]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn guess(&self) -> Result<Prediction, Box<dyn std::error::Error + Send + Sync>> {
        if self.signs.is_empty() {
            return Err("no signs to guess from".into());
        }

        let mut rng = rand::rng();
        let index_dist = Uniform::new(0, self.signs.len())?;
        let confidence_dist = Uniform::new(0.0f32, 1.0f32)?;

        if confidence_dist.sample(&mut rng) < MIN_CONFIDENCE {
            return Ok(Prediction {
                sign: String::new(),
                message: Some("Sign not recognized, please try one of the supported signs!".to_string()),
            });
        }

        Ok(Prediction {
            sign: self.signs[index_dist.sample(&mut rng)].clone(),
            message: Some("Prediction successful!".to_string()),
        })
    }
}

impl PredictionClient for PredictionClientFake {
    fn predict(
        &self,
        image: &StillImage,
    ) -> Result<Prediction, Box<dyn std::error::Error + Send + Sync>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.logger
            .info(&format!("Predicting {:?}", image))?;

        let scripted = self
            .scripted
            .lock()
            .map_err(|e| e.to_string())?
            .pop_front();

        match scripted {
            Some(reply) => reply.map_err(|e| e.into()),
            None => self.guess(),
        }
    }

    fn health_check(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok("Sign Language Recognition Backend (fake)".to_string())
    }
}
