use crate::device_display::interface::{DeviceDisplay, View};
use crate::library::logger::interface::Logger;
use std::error::Error;
use std::sync::Arc;

/// Records every view it is asked to show.
pub struct DeviceDisplayFake {
    logger: Arc<dyn Logger + Send + Sync>,
    pub views: Vec<View>,
}

impl DeviceDisplayFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("display").with_namespace("fake"),
            views: vec![],
        }
    }

    pub fn last_view(&self) -> Option<&View> {
        self.views.last()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info("DeviceDisplayFake::init()")?;
        Ok(())
    }

    fn show(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger
            .info(&format!("DeviceDisplayFake::show({:?})", view))?;
        self.views.push(view.clone());
        Ok(())
    }
}
