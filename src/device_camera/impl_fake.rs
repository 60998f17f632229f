use crate::device_camera::interface::{DeviceCamera, StillImage};
use crate::library::logger::interface::Logger;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use rand::distr::{Distribution, Uniform};
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FakeCameraMode {
    Streaming,
    Unavailable,
    EmptyFrame,
}

pub struct DeviceCameraFake {
    logger: Arc<dyn Logger + Send + Sync>,
    mode: FakeCameraMode,
    captures: AtomicUsize,
}

impl DeviceCameraFake {
    #[cfg(test)]
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self::with_mode(logger, FakeCameraMode::Streaming)
    }

    pub fn with_mode(logger: Arc<dyn Logger + Send + Sync>, mode: FakeCameraMode) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
            mode,
            captures: AtomicUsize::new(0),
        }
    }

    #[cfg(test)]
    pub fn captures(&self) -> usize {
        self.captures.load(Ordering::SeqCst)
    }

    fn synthetic_frame() -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        let mut rng = rand::rng();
        let shade = Uniform::new_inclusive(0u8, 255u8)?;
        let base = Rgb([
            shade.sample(&mut rng),
            shade.sample(&mut rng),
            shade.sample(&mut rng),
        ]);

        let frame = RgbImage::from_fn(64, 48, |x, y| {
            let Rgb([r, g, b]) = base;
            Rgb([r.wrapping_add(x as u8), g.wrapping_add(y as u8), b])
        });

        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(frame).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)?;
        Ok(bytes)
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn capture_frame(&self) -> Result<StillImage, Box<dyn std::error::Error + Send + Sync>> {
        self.captures.fetch_add(1, Ordering::SeqCst);
        self.logger.info("Capturing frame...")?;

        match self.mode {
            FakeCameraMode::Unavailable => Err("camera not ready".into()),
            FakeCameraMode::EmptyFrame => Ok(StillImage::new(vec![], "image/jpeg")),
            FakeCameraMode::Streaming => {
                let bytes = Self::synthetic_frame()?;
                self.logger
                    .info(&format!("Frame captured ({} bytes)", bytes.len()))?;
                Ok(StillImage::new(bytes, "image/jpeg"))
            }
        }
    }
}
