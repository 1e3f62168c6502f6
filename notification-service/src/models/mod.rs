pub mod notification;

pub use notification::{NotificationPayload, SendNotificationResponse};
