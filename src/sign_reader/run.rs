use super::{core::Effect, core::Model, main::SignReader};
use crate::sign_reader::core::{init, transition};

impl SignReader {
    /// Runs until a quit was requested and no cycle is left in flight.
    pub fn run(&self) -> Result<Model, Box<dyn std::error::Error + Send + Sync>> {
        let (mut current_model, effects) = init();

        self.device_display
            .lock()
            .map_err(|e| e.to_string())?
            .init()?;
        self.render(&current_model)?;
        self.execute_effects(effects);

        while !current_model.is_finished() {
            let msg = self.recv()?;

            let _ = self.logger.info(&format!(
                "\nold model:\n\t{:?}\n\nmsg:\n\t{:?}",
                current_model, msg,
            ));

            let (new_model, effects) = transition(&self.config, current_model, msg);

            let _ = self.logger.info(&format!(
                "\nnew model:\n\t{:?}\n\neffects:\n\t{:?}",
                new_model, effects
            ));

            current_model = new_model;

            if let Err(e) = self.render(&current_model) {
                let _ = self.logger.error(&format!("Failed to render: {}", e));
            }

            self.execute_effects(effects);
        }

        Ok(current_model)
    }

    fn execute_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.execute_effect(effect));
        }
    }
}
