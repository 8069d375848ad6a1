//! # Notifications Widget
//!
//! Toast notifications for wallet and swap events, backed by egui-notify.

use egui_notify::Toasts;
use lib_swap::Notifier;
use tracing::debug;

/// How many delivered notifications are remembered.
const HISTORY_LIMIT: usize = 20;

/// A delivered notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

/// Notification manager for the widget
#[derive(Default)]
pub struct NotificationManager {
    /// Toast notification system
    toasts: Toasts,
    /// Most recent notices, oldest first
    history: Vec<Notice>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[Notice] {
        &self.history
    }

    pub fn last(&self) -> Option<&Notice> {
        self.history.last()
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }

    fn remember(&mut self, notice: Notice) {
        if self.history.len() == HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.history.push(notice);
    }
}

impl Notifier for NotificationManager {
    fn notify(&mut self, title: &str, description: &str) {
        debug!(title, description, "Notification");
        self.toasts.info(format!("{}\n{}", title, description));
        self.remember(Notice {
            title: title.to_string(),
            description: description.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_records_history() {
        let mut notifications = NotificationManager::new();
        notifications.notify("Wallet Connected", "Successfully connected your wallet");

        assert_eq!(notifications.history().len(), 1);
        assert_eq!(
            notifications.last(),
            Some(&Notice {
                title: "Wallet Connected".to_string(),
                description: "Successfully connected your wallet".to_string(),
            })
        );
    }

    #[test]
    fn test_history_is_bounded() {
        let mut notifications = NotificationManager::new();
        for i in 0..HISTORY_LIMIT + 5 {
            notifications.notify("Swap Initiated", &format!("#{}", i));
        }

        assert_eq!(notifications.history().len(), HISTORY_LIMIT);
        assert_eq!(notifications.history()[0].description, "#5");
    }
}
