use crate::device_camera::interface::{CameraError, DeviceCamera, StreamInfo};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{ApiBackend, CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::Camera;
use std::sync::{Arc, Mutex};

pub struct DeviceCameraNokhwa {
    camera: Mutex<Option<Camera>>,
    device_index: u32,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraNokhwa {
    pub fn new(device_index: u32, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            camera: Mutex::new(None),
            device_index,
            logger: logger.with_namespace("camera"),
        }
    }
}

impl DeviceCamera for DeviceCameraNokhwa {
    fn setup(&self) -> Result<StreamInfo, CameraError> {
        let devices = nokhwa::query(ApiBackend::Auto)
            .map_err(|e| CameraError::UnsupportedEnvironment(e.to_string()))?;

        if devices.is_empty() {
            return Err(CameraError::PermissionDenied(
                "no capture device found".to_string(),
            ));
        }

        let requested =
            RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution);

        let mut camera = Camera::new(CameraIndex::Index(self.device_index), requested)
            .map_err(|e| CameraError::PermissionDenied(e.to_string()))?;

        camera
            .open_stream()
            .map_err(|e| CameraError::PermissionDenied(e.to_string()))?;

        let resolution = camera.resolution();
        let info = StreamInfo {
            width: resolution.width(),
            height: resolution.height(),
        };

        let _ = self
            .logger
            .info(&format!("Stream opened at {}x{}", info.width, info.height));

        *self.camera.lock().unwrap() = Some(camera);

        Ok(info)
    }

    fn capture_frame(&self) -> Result<DynamicImage, CameraError> {
        let mut guard = self.camera.lock().unwrap();
        let camera = guard
            .as_mut()
            .ok_or_else(|| CameraError::Capture("camera stream not started".to_string()))?;

        let buffer = camera
            .frame()
            .map_err(|e| CameraError::Capture(e.to_string()))?;

        let decoded = buffer
            .decode_image::<RgbFormat>()
            .map_err(|e| CameraError::Capture(e.to_string()))?;

        Ok(DynamicImage::ImageRgb8(decoded))
    }

    fn stop(&self) -> Result<(), CameraError> {
        let mut guard = self.camera.lock().unwrap();
        if let Some(mut camera) = guard.take() {
            camera
                .stop_stream()
                .map_err(|e| CameraError::Capture(e.to_string()))?;
            let _ = self.logger.info("Stream stopped");
        }
        Ok(())
    }
}
