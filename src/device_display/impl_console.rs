use crate::device_display::interface::{DeviceDisplay, DeviceDisplayEvent};
use std::error::Error;
use std::io::BufRead;
use std::sync::mpsc::{channel, Receiver};

const LINES: usize = 8;
const CHARS_PER_LINE: usize = 40;

/// Box-drawn status panel on stdout. The first Enter on stdin acknowledges
/// the privacy notice; every later Enter is a capture click.
pub struct DeviceDisplayConsole {
    display_buffer: [[char; CHARS_PER_LINE]; LINES],
    capture_enabled: bool,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self {
            display_buffer: [[' '; CHARS_PER_LINE]; LINES],
            capture_enabled: false,
        }
    }

    fn render_display(&self) {
        println!("┌{}┐", "─".repeat(CHARS_PER_LINE));
        for row in &self.display_buffer {
            let text: String = row.iter().collect();
            println!("│{}│", text);
        }
        println!("└{}┘", "─".repeat(CHARS_PER_LINE));
        if self.capture_enabled {
            println!("(press Enter to capture)");
        }
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.render_display();
        Ok(())
    }

    fn show_notice(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!();
        println!("{}", text);
        println!("(press Enter to continue)");
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.display_buffer = [[' '; CHARS_PER_LINE]; LINES];
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line as usize >= LINES {
            return Err("Invalid line number".into());
        }

        self.display_buffer[line as usize] = [' '; CHARS_PER_LINE];
        for (i, c) in text.chars().take(CHARS_PER_LINE).enumerate() {
            self.display_buffer[line as usize][i] = c;
        }

        self.render_display();
        Ok(())
    }

    fn set_capture_enabled(&mut self, enabled: bool) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.capture_enabled = enabled;
        Ok(())
    }

    fn set_preview_size(
        &mut self,
        _width: u32,
        _height: u32,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        // No preview surface on the console
        Ok(())
    }

    fn events(&mut self) -> Receiver<DeviceDisplayEvent> {
        let (event_tx, event_rx) = channel();

        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            let mut acknowledged = false;
            for line in stdin.lock().lines() {
                if line.is_err() {
                    break;
                }
                let event = if acknowledged {
                    DeviceDisplayEvent::CaptureClicked
                } else {
                    acknowledged = true;
                    DeviceDisplayEvent::NoticeAcknowledged
                };
                if event_tx.send(event).is_err() {
                    break;
                }
            }
        });

        event_rx
    }
}
