use crate::config::{Config, DisplayKind};
use crate::device_camera::impl_nokhwa::DeviceCameraNokhwa;
use crate::device_camera::interface::DeviceCamera;
use crate::device_display::impl_console::DeviceDisplayConsole;
use crate::device_display::impl_gui::DeviceDisplayGui;
use crate::device_display::interface::DeviceDisplay;
use crate::frame_capture::FrameCapture;
use crate::image_classifier::impl_tract::ImageClassifierTract;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::impl_console::LoggerConsole;
use crate::library::logger::interface::Logger;
use crate::skin_scan::main::SkinScan;
use std::sync::{Arc, Mutex};

mod config;
mod device_camera;
mod device_display;
mod frame_capture;
mod image_classifier;
mod library;
mod skin_scan;

fn main() {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let device_camera: Arc<dyn DeviceCamera + Send + Sync> = Arc::new(DeviceCameraNokhwa::new(
        config.camera_device_index,
        logger.clone(),
    ));

    let device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>> = match config.display {
        DisplayKind::Console => Arc::new(Mutex::new(DeviceDisplayConsole::new())),
        DisplayKind::Gui => Arc::new(Mutex::new(DeviceDisplayGui::new())),
    };

    let image_classifier: Arc<dyn ImageClassifier + Send + Sync> = Arc::new(
        ImageClassifierTract::new(config.model.clone(), logger.clone()),
    );

    let frame_capture = FrameCapture::new(device_camera, config.model.input_size, logger.clone());

    let skin_scan = SkinScan::new(
        config,
        logger,
        frame_capture,
        image_classifier,
        device_display,
    );

    skin_scan.run();
}
