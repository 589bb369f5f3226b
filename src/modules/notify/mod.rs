mod notifier;

pub use notifier::{ComplaintNotifier, NotificationContext};
