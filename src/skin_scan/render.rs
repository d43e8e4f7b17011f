use crate::skin_scan::core::State;
use crate::skin_scan::main::SkinScan;

impl SkinScan {
    pub fn render(&self, state: &State) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut device_display = self.device_display.lock().unwrap();

        device_display.clear()?;

        match state {
            State::Initializing => {
                device_display.set_capture_enabled(false)?;
                device_display.write_line(0, "Awaiting privacy acknowledgement...")?;
            }
            State::AwaitingPermission => {
                device_display.set_capture_enabled(false)?;
                device_display.write_line(0, "Requesting camera access...")?;
            }
            State::LoadingModel { .. } => {
                device_display.set_capture_enabled(false)?;
                device_display.write_line(0, "Loading model...")?;
            }
            State::Ready { ranked, .. } => {
                device_display.set_capture_enabled(true)?;
                match ranked {
                    None => {
                        device_display.write_line(0, "Ready")?;
                    }
                    Some(ranked) => {
                        device_display.write_line(0, "Top predictions:")?;
                        let num_lines = device_display.num_lines();
                        for (i, prediction) in ranked.iter().enumerate() {
                            let line = (i + 1) as u8;
                            if line >= num_lines {
                                break;
                            }
                            device_display.write_line(
                                line,
                                &format!("{}. {} {:.2}", i + 1, prediction.label, prediction.score),
                            )?;
                        }
                    }
                }
            }
            State::Predicting { .. } => {
                device_display.set_capture_enabled(false)?;
                device_display.write_line(0, "Predicting...")?;
            }
            State::Halted { message } => {
                device_display.set_capture_enabled(false)?;
                device_display.write_line(0, "Halted")?;
                device_display.write_line(1, message)?;
            }
        }

        Ok(())
    }
}
