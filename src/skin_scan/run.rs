use crate::skin_scan::core::{init, transition, Effect, State};
use crate::skin_scan::main::SkinScan;

impl SkinScan {
    pub fn run(&self) {
        if let Err(e) = self.device_display.lock().unwrap().init() {
            let _ = self
                .logger
                .error(&format!("Failed to initialize display: {}", e));
            return;
        }

        let (mut current_state, effects) = init();

        let _ = self.render(&current_state);
        self.execute_effects(effects);

        loop {
            let event = match self.event_receiver.lock().unwrap().recv() {
                Ok(event) => event,
                Err(_) => break,
            };

            let _ = self.logger.info(&format!("event: {:?}", event));

            let (new_state, effects) = transition(current_state, event);

            if let State::Halted { message } = &new_state {
                let _ = self.logger.error(message);
            }

            current_state = new_state;

            let _ = self.render(&current_state);

            self.execute_effects(effects);
        }
    }

    fn execute_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.interpret_effect(effect));
        }
    }
}
