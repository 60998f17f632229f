use crate::device_display::interface::{DeviceDisplay, View};
use std::error::Error;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const WIDTH: usize = 40;

pub struct DeviceDisplayConsole {
    last_view: Option<View>,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self { last_view: None }
    }

    fn lines(view: &View) -> Vec<String> {
        let mut lines = vec![view.status.clone()];
        if let Some(result) = &view.result {
            lines.push(format!("Predicted Sign: {}", result));
        }
        if let Some(message) = &view.message {
            lines.push(message.clone());
        }
        if let Some(error) = &view.error {
            lines.push(format!("Error: {}", error));
        }
        lines
    }

    /// Splits `text` into rows no wider than `WIDTH` terminal columns,
    /// breaking on whitespace and only splitting words longer than a row.
    fn wrap(text: &str) -> Vec<String> {
        let mut rows = vec![];
        let mut row = String::new();

        for word in text.split_whitespace() {
            let separator = if row.is_empty() { 0 } else { 1 };
            if row.width() + separator + word.width() <= WIDTH {
                if separator == 1 {
                    row.push(' ');
                }
                row.push_str(word);
                continue;
            }

            if !row.is_empty() {
                rows.push(std::mem::take(&mut row));
            }
            for c in word.chars() {
                if row.width() + c.width().unwrap_or(0) > WIDTH {
                    rows.push(std::mem::take(&mut row));
                }
                row.push(c);
            }
        }

        if !row.is_empty() || rows.is_empty() {
            rows.push(row);
        }
        rows
    }

    fn rows(view: &View) -> Vec<String> {
        let mut rows = vec![format!("┌{}┐", "─".repeat(WIDTH))];
        for line in Self::lines(view) {
            for text in Self::wrap(&line) {
                let padding = WIDTH.saturating_sub(text.width());
                rows.push(format!("│{}{}│", text, " ".repeat(padding)));
            }
        }
        rows.push(format!("└{}┘", "─".repeat(WIDTH)));
        rows
    }

    fn render_display(view: &View) {
        for row in Self::rows(view) {
            println!("{}", row);
        }
        println!("[Enter] capture & predict   [q] quit");
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!("Sign Language Recognition");
        Ok(())
    }

    fn show(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>> {
        // Redraw only on change; every loop message triggers a render.
        if self.last_view.as_ref() == Some(view) {
            return Ok(());
        }
        Self::render_display(view);
        self.last_view = Some(view.clone());
        Ok(())
    }
}
