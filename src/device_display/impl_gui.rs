use crate::device_display::interface::{DeviceDisplay, View};
use crate::device_trigger::interface::TriggerEvent;
use std::error::Error;
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const LABEL_FONT: &str = "label";

/// The egui window. Must run on the main thread; the reader loop writes into
/// it through [`DeviceDisplayGui`].
pub struct GuiWindow {
    view: Arc<Mutex<View>>,
    trigger_sender: Sender<TriggerEvent>,
    font: Option<PathBuf>,
}

impl eframe::App for GuiWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let view = match self.view.lock() {
            Ok(view) => view.clone(),
            Err(_) => return,
        };
        let trigger_sender = &self.trigger_sender;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.heading("Sign Language Recognition");
                ui.label(egui::RichText::new(&view.status).weak());
                ui.add_space(16.0);

                if ui.button("Capture & Predict").clicked() {
                    let _ = trigger_sender.send(TriggerEvent::Capture);
                }

                ui.add_space(16.0);
                if let Some(result) = &view.result {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new("Predicted Sign:").size(20.0));
                        ui.label(egui::RichText::new(result).strong().size(20.0));
                    });
                }
                if let Some(message) = &view.message {
                    ui.label(egui::RichText::new(message).color(egui::Color32::GRAY));
                }
                if let Some(error) = &view.error {
                    ui.label(egui::RichText::new(error).color(egui::Color32::RED));
                }
            });
        });

        ctx.request_repaint_after(Duration::from_millis(200));
    }
}

impl GuiWindow {
    /// Blocks until the window is closed.
    pub fn run(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([480.0, 320.0])
                .with_resizable(false),
            ..Default::default()
        };

        let font = match &self.font {
            Some(path) => Some(std::fs::read(path)?),
            None => None,
        };

        eframe::run_native(
            "Sign Language Recognition",
            options,
            Box::new(move |cc| {
                if let Some(font) = font {
                    install_label_font(&cc.egui_ctx, font);
                }
                Box::new(self)
            }),
        )
        .map_err(|e| e.to_string())?;

        Ok(())
    }
}

/// The default egui fonts have no Devanagari glyphs.
fn install_label_font(ctx: &egui::Context, font: Vec<u8>) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(LABEL_FONT.to_string(), egui::FontData::from_owned(font));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .push(LABEL_FONT.to_string());
    ctx.set_fonts(fonts);
}

pub struct DeviceDisplayGui {
    view: Arc<Mutex<View>>,
}

impl DeviceDisplayGui {
    pub fn new(trigger_sender: Sender<TriggerEvent>, font: Option<PathBuf>) -> (Self, GuiWindow) {
        let view = Arc::new(Mutex::new(View::default()));
        let window = GuiWindow {
            view: view.clone(),
            trigger_sender,
            font,
        };
        (Self { view }, window)
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn show(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut current = self.view.lock().map_err(|e| e.to_string())?;
        *current = view.clone();
        Ok(())
    }
}
