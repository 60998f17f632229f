use config::{CameraSource, Config, DisplayKind, PredictionBackend};
use device_camera::impl_fake::DeviceCameraFake;
use device_camera::impl_snapshot_file::DeviceCameraSnapshotFile;
use device_camera::interface::DeviceCamera;
use device_display::impl_console::DeviceDisplayConsole;
use device_display::impl_gui::DeviceDisplayGui;
use device_trigger::impl_channel::DeviceTriggerChannel;
use device_trigger::impl_stdin::DeviceTriggerStdin;
use device_trigger::interface::TriggerEvent;
use library::logger::{impl_console::LoggerConsole, interface::Logger};
use prediction_client::impl_fake::PredictionClientFake;
use prediction_client::impl_http::PredictionClientHttp;
use prediction_client::interface::PredictionClient;
use sign_reader::main::SignReader;
use std::sync::{Arc, Mutex};

mod config;
mod device_camera;
mod device_display;
mod device_trigger;
mod label_translator;
mod library;
mod prediction_client;
mod sign_reader;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let (config, warnings) = Config::from_env();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));
    for warning in &warnings {
        logger.error(warning)?;
    }

    let device_camera: Arc<dyn DeviceCamera + Send + Sync> = match &config.camera {
        CameraSource::Fake(mode) => Arc::new(DeviceCameraFake::with_mode(logger.clone(), *mode)),
        CameraSource::SnapshotFile(path) => {
            Arc::new(DeviceCameraSnapshotFile::new(path.clone(), logger.clone()))
        }
    };

    let prediction_client: Arc<dyn PredictionClient + Send + Sync> =
        match config.prediction_backend {
            PredictionBackend::Http => Arc::new(PredictionClientHttp::new(&config, logger.clone())?),
            PredictionBackend::Fake => Arc::new(PredictionClientFake::new(
                logger.clone(),
                config.label_map.codes().map(str::to_string).collect(),
            )),
        };

    match config.display.clone() {
        DisplayKind::Console => {
            let sign_reader = SignReader::new(
                config,
                logger.clone(),
                device_camera,
                Arc::new(DeviceTriggerStdin::new(logger)),
                Arc::new(Mutex::new(DeviceDisplayConsole::new())),
                prediction_client,
            );
            sign_reader.run()?;
        }
        DisplayKind::Gui => {
            let (device_trigger, trigger_sender) = DeviceTriggerChannel::new();
            let (device_display, window) =
                DeviceDisplayGui::new(trigger_sender.clone(), config.gui_font.clone());

            let sign_reader = SignReader::new(
                config,
                logger,
                device_camera,
                Arc::new(device_trigger),
                Arc::new(Mutex::new(device_display)),
                prediction_client,
            );
            let handle = std::thread::spawn(move || sign_reader.run().map(|_| ()));

            // The window owns the main thread; closing it ends the reader.
            let window_result = window.run();
            let _ = trigger_sender.send(TriggerEvent::Quit);
            drop(trigger_sender);

            handle
                .join()
                .map_err(|_| "sign reader thread panicked")??;
            window_result?;
        }
    }

    Ok(())
}
