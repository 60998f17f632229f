use crate::device_camera::interface::{DeviceCamera, StillImage};
use crate::library::logger::interface::Logger;
use std::path::PathBuf;
use std::sync::Arc;

/// Reads the latest frame an external capture process keeps writing to disk,
/// e.g. `fswebcam --loop 1 /tmp/frame.jpg`.
pub struct DeviceCameraSnapshotFile {
    path: PathBuf,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraSnapshotFile {
    pub fn new(path: PathBuf, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            path,
            logger: logger.with_namespace("camera").with_namespace("snapshot_file"),
        }
    }
}

impl DeviceCamera for DeviceCameraSnapshotFile {
    fn capture_frame(&self) -> Result<StillImage, Box<dyn std::error::Error + Send + Sync>> {
        self.logger
            .info(&format!("Reading frame from {}", self.path.display()))?;

        let bytes = std::fs::read(&self.path)
            .map_err(|e| format!("camera not ready ({}): {}", self.path.display(), e))?;
        if bytes.is_empty() {
            return Ok(StillImage::new(bytes, "image/jpeg"));
        }

        let format = image::guess_format(&bytes)?;
        Ok(StillImage::new(bytes, format.to_mime_type()))
    }
}
