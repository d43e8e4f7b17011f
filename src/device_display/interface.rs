use std::error::Error;
use std::sync::mpsc::Receiver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceDisplayEvent {
    /// The user dismissed the blocking privacy notice.
    NoticeAcknowledged,
    /// The user triggered the capture control.
    CaptureClicked,
}

/// Status surface with a line buffer, a capture control, and a blocking
/// startup notice.
pub trait DeviceDisplay: Send + Sync {
    /// Bring up the display surface. Call once before any other method.
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Present the blocking privacy notice. The acknowledgement arrives as a
    /// `NoticeAcknowledged` event, not as a return value.
    fn show_notice(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Clear all status lines.
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Write text to a status line (0-based). Errors when the line index is
    /// outside the surface.
    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Enable or disable the capture control.
    fn set_capture_enabled(&mut self, enabled: bool) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Resize the preview surface to the camera stream's aspect ratio.
    fn set_preview_size(
        &mut self,
        width: u32,
        height: u32,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// User interaction events. The receiver can be taken once; later calls
    /// get a channel that never produces events.
    fn events(&mut self) -> Receiver<DeviceDisplayEvent>;

    /// Number of status lines supported by this surface.
    fn num_lines(&self) -> u8 {
        8
    }
}
