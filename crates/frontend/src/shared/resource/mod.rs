//! Generic list controller shared by every editable resource screen.

pub mod config;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod notify;
pub mod payload;
pub mod session;
pub mod store;
pub mod traits;

pub use config::{ApiConfig, ConfigError, ResourceKind};
pub use controller::{ResourceListController, SubmitOutcome};
pub use error::GatewayError;
pub use gateway::{HttpGateway, ResourceGateway, Verb};
pub use notify::{Notification, NotificationLevel, Notifier};
pub use payload::{FieldBag, FileUpload, ImageField};
pub use session::SessionState;
pub use traits::Resource;
