use crate::device_display::interface::{DeviceDisplay, DeviceDisplayEvent};
use eframe::egui;
use std::error::Error;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;

const LINES: usize = 8;

struct WindowState {
    lines: [String; LINES],
    notice: Option<String>,
    capture_enabled: bool,
    preview_size: (u32, u32),
    event_sender: Sender<DeviceDisplayEvent>,
}

#[derive(Clone)]
struct DisplayWindow {
    state: Arc<Mutex<WindowState>>,
}

impl eframe::App for DisplayWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut state = self.state.lock().unwrap();

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(notice) = state.notice.clone() {
                ui.add_space(20.0);
                ui.label(egui::RichText::new(notice).size(16.0));
                ui.add_space(10.0);
                if ui.button("I understand").clicked() {
                    let _ = state
                        .event_sender
                        .send(DeviceDisplayEvent::NoticeAcknowledged);
                    state.notice = None;
                }
                return;
            }

            ui.vertical_centered(|ui| {
                let (preview_width, preview_height) = state.preview_size;
                if preview_width > 0 && preview_height > 0 {
                    let (rect, _) = ui.allocate_exact_size(
                        egui::vec2(preview_width as f32, preview_height as f32),
                        egui::Sense::hover(),
                    );
                    ui.painter()
                        .rect_filled(rect, 0.0, egui::Color32::from_rgb(30, 30, 30));
                }

                for line in state.lines.iter() {
                    ui.label(egui::RichText::new(line.clone()).monospace().size(14.0));
                }

                ui.add_space(10.0);
                if ui
                    .add_enabled(state.capture_enabled, egui::Button::new("Capture"))
                    .clicked()
                {
                    let _ = state.event_sender.send(DeviceDisplayEvent::CaptureClicked);
                }
            });
        });

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

pub struct DeviceDisplayGui {
    state: Arc<Mutex<WindowState>>,
    event_receiver: Mutex<Option<Receiver<DeviceDisplayEvent>>>,
}

impl DeviceDisplayGui {
    #[allow(dead_code)]
    pub fn new() -> Self {
        let (event_sender, event_receiver) = channel();

        Self {
            state: Arc::new(Mutex::new(WindowState {
                lines: std::array::from_fn(|_| String::new()),
                notice: None,
                capture_enabled: false,
                preview_size: (0, 0),
                event_sender,
            })),
            event_receiver: Mutex::new(Some(event_receiver)),
        }
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let window = DisplayWindow {
            state: self.state.clone(),
        };

        // The window blocks its own thread until closed
        thread::spawn(move || {
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([720.0, 640.0])
                    .with_resizable(false),
                ..Default::default()
            };

            let _ = eframe::run_native("Skin Scan", options, Box::new(|_cc| Box::new(window)));
        });

        Ok(())
    }

    fn show_notice(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.state.lock().unwrap().notice = Some(text.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut state = self.state.lock().unwrap();
        state.lines = std::array::from_fn(|_| String::new());
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line as usize >= LINES {
            return Err("Invalid line number".into());
        }
        self.state.lock().unwrap().lines[line as usize] = text.to_string();
        Ok(())
    }

    fn set_capture_enabled(&mut self, enabled: bool) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.state.lock().unwrap().capture_enabled = enabled;
        Ok(())
    }

    fn set_preview_size(
        &mut self,
        width: u32,
        height: u32,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.state.lock().unwrap().preview_size = (width, height);
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
