//! List command handler

use crate::error::AppResult;
use crate::services::notifications::NotificationService;

/// Handler for the list command
pub struct ListCommandHandler {
    service: NotificationService,
}

impl ListCommandHandler {
    pub fn new(service: NotificationService) -> Self {
        Self { service }
    }

    /// Print every configured provider, one per line
    pub fn execute(&self) -> AppResult<()> {
        for line in self.render() {
            println!("{}", line);
        }
        Ok(())
    }

    fn render(&self) -> Vec<String> {
        if self.service.is_empty() {
            return vec!["No notifications configured".to_string()];
        }

        self.service
            .providers()
            .into_iter()
            .map(|info| format!("{} ({}) - {}", info.name, info.implementation, info.link))
            .collect()
    }
}
