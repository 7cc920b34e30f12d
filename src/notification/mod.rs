//! Notification module for cinesearch
//!
//! Provides transient, non-blocking messages ("toasts") shown in the top-right
//! corner. Fire-and-forget: nothing waits for the user to acknowledge them.

mod render;
mod state;

pub use render::render_notification;
pub use state::{Notification, NotificationKind, NotificationState};
