use image::DynamicImage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CameraError {
    /// Access was denied or no capture device exists.
    #[error("camera access denied: {0}")]
    PermissionDenied(String),
    /// No capture backend is available in this environment at all. Fatal,
    /// never retried.
    #[error("no camera capture backend available: {0}")]
    UnsupportedEnvironment(String),
    #[error("frame capture failed: {0}")]
    Capture(String),
}

/// Native resolution of a live camera stream, known once `setup` resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamInfo {
    pub width: u32,
    pub height: u32,
}

impl StreamInfo {
    /// Display-surface dimensions that preserve the stream's aspect ratio,
    /// so a centered square crop never includes letterboxing. `base` is the
    /// length of the shorter display edge.
    pub fn display_size(&self, base: u32) -> (u32, u32) {
        let aspect = self.width as f32 / self.height as f32;
        if self.width >= self.height {
            ((base as f32 * aspect) as u32, base)
        } else {
            (base, (base as f32 / aspect) as u32)
        }
    }
}

pub trait DeviceCamera {
    /// Requests camera access (video only) and binds the live stream.
    /// Resolves with the stream's native resolution.
    fn setup(&self) -> Result<StreamInfo, CameraError>;
    /// Reads whatever frame the device currently buffers. No frame-timing
    /// guarantee.
    fn capture_frame(&self) -> Result<DynamicImage, CameraError>;
    #[allow(dead_code)]
    fn stop(&self) -> Result<(), CameraError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_size_landscape() {
        let info = StreamInfo {
            width: 640,
            height: 480,
        };
        let (w, h) = info.display_size(480);
        assert_eq!(h, 480);
        assert_eq!(w, 640);
    }

    #[test]
    fn test_display_size_portrait() {
        let info = StreamInfo {
            width: 480,
            height: 640,
        };
        let (w, h) = info.display_size(480);
        assert_eq!(w, 480);
        assert_eq!(h, 640);
    }

    #[test]
    fn test_display_size_square() {
        let info = StreamInfo {
            width: 720,
            height: 720,
        };
        assert_eq!(info.display_size(480), (480, 480));
    }
}
