use crate::device_display::interface::{DeviceDisplay, DeviceDisplayEvent};
use std::error::Error;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Mutex;

/// Records everything written to it. Tests inject user interaction through
/// the sender side of the event channel.
#[allow(dead_code)]
pub struct DeviceDisplayFake {
    pub lines: Vec<(u8, String)>,
    pub notices: Vec<String>,
    pub capture_enabled: bool,
    pub preview_size: Option<(u32, u32)>,
    event_sender: Sender<DeviceDisplayEvent>,
    event_receiver: Mutex<Option<Receiver<DeviceDisplayEvent>>>,
}

impl DeviceDisplayFake {
    #[allow(dead_code)]
    pub fn new() -> Self {
        let (event_sender, event_receiver) = channel();
        Self {
            lines: Vec::new(),
            notices: Vec::new(),
            capture_enabled: false,
            preview_size: None,
            event_sender,
            event_receiver: Mutex::new(Some(event_receiver)),
        }
    }

    #[allow(dead_code)]
    pub fn event_sender(&self) -> Sender<DeviceDisplayEvent> {
        self.event_sender.clone()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn show_notice(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.notices.push(text.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.lines.clear();
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line >= self.num_lines() {
            return Err("Invalid line number".into());
        }
        self.lines.push((line, text.to_string()));
        Ok(())
    }

    fn set_capture_enabled(&mut self, enabled: bool) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.capture_enabled = enabled;
        Ok(())
    }

    fn set_preview_size(
        &mut self,
        width: u32,
        height: u32,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.preview_size = Some((width, height));
        Ok(())
    }

    fn events(&mut self) -> Receiver<DeviceDisplayEvent> {
        self.event_receiver
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| channel().1)
    }
}
