use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::notify::{Notification, NotificationSink, Role};

/// Everything a state may consult or emit during one evaluation.
pub struct EvalContext<'a> {
    pub env: GameEnv<'a>,
    pub notifications: &'a mut dyn NotificationSink,
    pub role: Role,
}

impl<'a> EvalContext<'a> {
    pub fn new(env: GameEnv<'a>, notifications: &'a mut dyn NotificationSink, role: Role) -> Self {
        Self {
            env,
            notifications,
            role,
        }
    }

    pub fn config(&self) -> &'a GameConfig {
        self.env.config()
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.notify(notification);
    }

    /// Emits `notification` only when this process replicates state.
    pub fn sync(&mut self, notification: Notification) {
        if self.role.is_authoritative() {
            self.notifications.notify(notification);
        }
    }
}
