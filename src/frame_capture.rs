use crate::device_camera::interface::{CameraError, DeviceCamera, StreamInfo};
use crate::library::logger::interface::Logger;
use image::{imageops, DynamicImage};
use std::sync::Arc;
use tract_onnx::prelude::*;

/// Samples single frames from a live camera stream and turns them into
/// batched model input tensors.
#[derive(Clone)]
pub struct FrameCapture {
    device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    input_size: u32,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl FrameCapture {
    pub fn new(
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        input_size: u32,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            device_camera,
            input_size,
            logger: logger.with_namespace("frame_capture"),
        }
    }

    /// Acquires the camera and resolves once the stream's native resolution
    /// is known.
    pub fn setup(&self) -> Result<StreamInfo, CameraError> {
        let info = self.device_camera.setup()?;
        let _ = self.logger.info(&format!(
            "Camera ready, native resolution {}x{}",
            info.width, info.height
        ));
        Ok(info)
    }

    /// Samples the current frame, resizes it bilinearly to the square model
    /// input resolution, center-crops to `min(width, height)`, and returns a
    /// single-image batch tensor of shape `[1, size, size, 3]`.
    ///
    /// Pixel values stay in the raw 0..255 range; the classifier owns
    /// normalization.
    pub fn capture(&self) -> Result<Tensor, CameraError> {
        let frame = self.device_camera.capture_frame()?;

        let resized = frame.resize_exact(
            self.input_size,
            self.input_size,
            imageops::FilterType::Triangle,
        );
        let cropped = crop_center_square(&resized);

        Ok(batched_tensor(&cropped))
    }
}

/// Centered square crop with `size = min(width, height)`. Identity for
/// already-square images.
pub fn crop_center_square(image: &DynamicImage) -> DynamicImage {
    let size = image.width().min(image.height());
    let x = (image.width() - size) / 2;
    let y = (image.height() - size) / 2;
    image.crop_imm(x, y, size, size)
}

/// NHWC f32 tensor with a leading batch dimension of 1, raw 0..255 values.
fn batched_tensor(image: &DynamicImage) -> Tensor {
    let rgb = image.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);

    tract_ndarray::Array4::from_shape_fn((1, height, width, 3), |(_, y, x, c)| {
        rgb.get_pixel(x as u32, y as u32)[c] as f32
    })
    .into_tensor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device_camera::impl_fake::DeviceCameraFake;
    use crate::library::logger::impl_console::LoggerConsole;
    use image::{ImageBuffer, Rgb};

    fn fixture() -> FrameCapture {
        let logger = Arc::new(LoggerConsole::new(chrono::FixedOffset::east_opt(0).unwrap()));
        let camera = Arc::new(DeviceCameraFake::new(logger.clone()));
        FrameCapture::new(camera, 224, logger)
    }

    #[test]
    fn test_capture_shape() {
        let frame_capture = fixture();
        frame_capture.setup().unwrap();

        let tensor = frame_capture.capture().unwrap();

        assert_eq!(tensor.shape(), &[1, 224, 224, 3]);
    }

    #[test]
    fn test_crop_center_square_landscape() {
        let mut img = ImageBuffer::new(200, 100);
        for (x, _, pixel) in img.enumerate_pixels_mut() {
            // Left half black, right half white
            *pixel = if x < 100 { Rgb([0, 0, 0]) } else { Rgb([255, 255, 255]) };
        }
        let image = DynamicImage::ImageRgb8(img);

        let cropped = crop_center_square(&image);

        assert_eq!(cropped.width(), 100);
        assert_eq!(cropped.height(), 100);
        // Crop starts at x=50, so column 0 is black and column 99 is white
        let rgb = cropped.to_rgb8();
        assert_eq!(rgb.get_pixel(0, 0)[0], 0);
        assert_eq!(rgb.get_pixel(99, 0)[0], 255);
    }

    #[test]
    fn test_crop_center_square_is_identity_for_square() {
        let img = ImageBuffer::from_pixel(64, 64, Rgb([7u8, 7, 7]));
        let image = DynamicImage::ImageRgb8(img);

        let cropped = crop_center_square(&image);

        assert_eq!((cropped.width(), cropped.height()), (64, 64));
    }

    #[test]
    fn test_tensor_values_are_raw_pixels() {
        let img = ImageBuffer::from_pixel(8, 8, Rgb([255u8, 0, 128]));
        let image = DynamicImage::ImageRgb8(img);

        let tensor = batched_tensor(&image);
        let view = tensor.to_array_view::<f32>().unwrap();

        assert_eq!(view[[0, 0, 0, 0]], 255.0);
        assert_eq!(view[[0, 0, 0, 1]], 0.0);
        assert_eq!(view[[0, 0, 0, 2]], 128.0);
    }
}
