use crate::device_camera::impl_fake::FakeCameraMode;
use crate::label_translator::LabelMap;
use chrono::Offset;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum CameraSource {
    Fake(FakeCameraMode),
    SnapshotFile(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PredictionBackend {
    Http,
    Fake,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayKind {
    Console,
    Gui,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub predict_url: String,
    pub service_url: String,
    /// `None` leaves the request without a deadline.
    pub request_timeout: Option<Duration>,
    pub label_map: LabelMap,
    pub camera: CameraSource,
    pub prediction_backend: PredictionBackend,
    pub display: DisplayKind,
    pub gui_font: Option<PathBuf>,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            predict_url: "http://localhost:8000/predict".to_string(),
            service_url: "http://localhost:8000/".to_string(),
            request_timeout: None,
            label_map: LabelMap::nepali(),
            camera: CameraSource::Fake(FakeCameraMode::Streaming),
            prediction_backend: PredictionBackend::Http,
            display: DisplayKind::Console,
            gui_font: None,
            logger_timezone: utc_offset_hours(0),
        }
    }
}

impl Config {
    /// Defaults overridden by `SIGN_READER_*` environment variables, plus a
    /// warning for every value that was not understood.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut warnings = vec![];

        if let Some(url) = lookup("SIGN_READER_PREDICT_URL") {
            config.predict_url = url;
        }
        if let Some(url) = lookup("SIGN_READER_SERVICE_URL") {
            config.service_url = url;
        }
        if let Some(secs) = lookup("SIGN_READER_TIMEOUT_SECS") {
            match secs.trim().parse::<u64>() {
                // A zero deadline would fail every request; treat it as unset.
                Ok(0) => config.request_timeout = None,
                Ok(secs) => config.request_timeout = Some(Duration::from_secs(secs)),
                Err(_) => warnings.push(format!(
                    "SIGN_READER_TIMEOUT_SECS={:?} is not a number of seconds, using no timeout",
                    secs
                )),
            }
        }
        if let Some(camera) = lookup("SIGN_READER_CAMERA") {
            config.camera = match camera.as_str() {
                "" | "fake" => CameraSource::Fake(FakeCameraMode::Streaming),
                "fake:unavailable" => CameraSource::Fake(FakeCameraMode::Unavailable),
                "fake:empty" => CameraSource::Fake(FakeCameraMode::EmptyFrame),
                other if other.starts_with("fake:") => {
                    warnings.push(format!(
                        "SIGN_READER_CAMERA={:?} is not a known fake mode, using fake",
                        other
                    ));
                    CameraSource::Fake(FakeCameraMode::Streaming)
                }
                path => CameraSource::SnapshotFile(PathBuf::from(path)),
            };
        }
        if let Some(backend) = lookup("SIGN_READER_BACKEND") {
            config.prediction_backend = match backend.to_lowercase().as_str() {
                "http" => PredictionBackend::Http,
                "fake" => PredictionBackend::Fake,
                _ => {
                    warnings.push(format!(
                        "SIGN_READER_BACKEND={:?} is not http or fake, using http",
                        backend
                    ));
                    PredictionBackend::Http
                }
            };
        }
        if let Some(display) = lookup("SIGN_READER_DISPLAY") {
            config.display = match display.to_lowercase().as_str() {
                "console" => DisplayKind::Console,
                "gui" => DisplayKind::Gui,
                _ => {
                    warnings.push(format!(
                        "SIGN_READER_DISPLAY={:?} is not console or gui, using console",
                        display
                    ));
                    DisplayKind::Console
                }
            };
        }
        if let Some(font) = lookup("SIGN_READER_FONT") {
            config.gui_font = Some(PathBuf::from(font));
        }
        if let Some(hours) = lookup("SIGN_READER_UTC_OFFSET_HOURS") {
            match hours.trim().parse() {
                Ok(hours) => config.logger_timezone = utc_offset_hours(hours),
                Err(_) => warnings.push(format!(
                    "SIGN_READER_UTC_OFFSET_HOURS={:?} is not a whole number, using UTC",
                    hours
                )),
            }
        }

        (config, warnings)
    }
}

fn utc_offset_hours(hours: i32) -> chrono::FixedOffset {
    hours
        .checked_mul(3600)
        .and_then(chrono::FixedOffset::east_opt)
        .unwrap_or(chrono::Utc.fix())
}
