use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::device_display::interface::DeviceDisplay;
use crate::device_trigger::interface::DeviceTrigger;
use crate::library::logger::interface::Logger;
use crate::prediction_client::interface::PredictionClient;
use crate::sign_reader::core::Msg;
use std::sync::mpsc::{channel, Receiver, SendError, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct SignReader {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    pub device_trigger: Arc<dyn DeviceTrigger + Send + Sync>,
    pub device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    pub prediction_client: Arc<dyn PredictionClient + Send + Sync>,
    msg_sender: Sender<Msg>,
    msg_receiver: Arc<Mutex<Receiver<Msg>>>,
}

impl SignReader {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        device_trigger: Arc<dyn DeviceTrigger + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        prediction_client: Arc<dyn PredictionClient + Send + Sync>,
    ) -> Self {
        let (msg_sender, msg_receiver) = channel();

        Self {
            config,
            logger: logger.with_namespace("sign_reader"),
            device_camera,
            device_trigger,
            device_display,
            prediction_client,
            msg_sender,
            msg_receiver: Arc::new(Mutex::new(msg_receiver)),
        }
    }

    pub fn send(&self, msg: Msg) -> Result<(), SendError<Msg>> {
        self.msg_sender.send(msg)
    }

    pub fn recv(&self) -> Result<Msg, Box<dyn std::error::Error + Send + Sync>> {
        let receiver = self.msg_receiver.lock().map_err(|e| e.to_string())?;
        Ok(receiver.recv()?)
    }
}
