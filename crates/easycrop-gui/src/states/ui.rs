/// Log lines shown in the status panel.
const MAX_LOG_MESSAGES: usize = 200;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    /// Log messages, oldest first.
    pub log_messages: Vec<String>,
    pub show_about: bool,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
        if self.log_messages.len() > MAX_LOG_MESSAGES {
            let excess = self.log_messages.len() - MAX_LOG_MESSAGES;
            self.log_messages.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_is_bounded() {
        let mut ui = UIState::default();
        for i in 0..MAX_LOG_MESSAGES + 5 {
            ui.add_log(format!("line {i}"));
        }
        assert_eq!(ui.log_messages.len(), MAX_LOG_MESSAGES);
        assert_eq!(ui.log_messages[0], "line 5");
    }
}
