use crate::device_camera::interface::{CameraError, DeviceCamera, StreamInfo};
use crate::library::logger::interface::Logger;
use image::{DynamicImage, ImageBuffer, Rgb};
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

/// Stands in for camera hardware. Produces random-noise frames at a fixed
/// resolution; can be configured to refuse access.
#[allow(dead_code)]
pub struct DeviceCameraFake {
    logger: Arc<dyn Logger + Send + Sync>,
    width: u32,
    height: u32,
    deny_access: bool,
}

impl DeviceCameraFake {
    #[allow(dead_code)]
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
            width: 640,
            height: 480,
            deny_access: false,
        }
    }

    #[allow(dead_code)]
    pub fn new_denying_access(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            deny_access: true,
            ..Self::new(logger)
        }
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn setup(&self) -> Result<StreamInfo, CameraError> {
        if self.deny_access {
            return Err(CameraError::PermissionDenied(
                "access denied by user".to_string(),
            ));
        }
        let _ = self.logger.info("Stream opened");
        Ok(StreamInfo {
            width: self.width,
            height: self.height,
        })
    }

    fn capture_frame(&self) -> Result<DynamicImage, CameraError> {
        let mut rng = rand::rng();
        let dist = Uniform::new_inclusive(0u8, 255)
            .map_err(|e| CameraError::Capture(e.to_string()))?;

        let frame = ImageBuffer::from_fn(self.width, self.height, |_, _| {
            Rgb([
                dist.sample(&mut rng),
                dist.sample(&mut rng),
                dist.sample(&mut rng),
            ])
        });

        Ok(DynamicImage::ImageRgb8(frame))
    }

    fn stop(&self) -> Result<(), CameraError> {
        let _ = self.logger.info("Stream stopped");
        Ok(())
    }
}
