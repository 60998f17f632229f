use super::main::SignReader;
use crate::device_trigger::interface::TriggerEvent;
use crate::sign_reader::core::{Effect, Msg};

impl SignReader {
    pub fn execute_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::SubscribeTrigger => {
                let events = self.device_trigger.events();
                for event in events.iter() {
                    let msg = match event {
                        TriggerEvent::Capture => Msg::Trigger,
                        TriggerEvent::Quit => Msg::Quit,
                    };
                    if self.send(msg).is_err() {
                        return;
                    }
                }
                let _ = self.send(Msg::Quit);
            }
            Effect::CheckService => {
                let result = self.prediction_client.health_check();
                match &result {
                    Ok(banner) => {
                        let _ = self.logger.info(&format!("Service reachable: {}", banner));
                    }
                    Err(e) => {
                        let _ = self.logger.error(&format!("Service unreachable: {}", e));
                    }
                }
                let _ = self.send(Msg::ServiceCheckDone(result));
            }
            Effect::CaptureFrame { cycle } => {
                let result = self.device_camera.capture_frame();
                if let Err(e) = &result {
                    let _ = self
                        .logger
                        .error(&format!("Capture failed for {:?}: {}", cycle, e));
                }
                let _ = self.send(Msg::FrameCaptureDone { cycle, result });
            }
            Effect::Predict { cycle, image } => {
                let result = self.prediction_client.predict(&image);
                if let Err(e) = &result {
                    let _ = self
                        .logger
                        .error(&format!("Prediction failed for {:?}: {}", cycle, e));
                }
                let _ = self.send(Msg::PredictDone { cycle, result });
            }
        }
    }
}
