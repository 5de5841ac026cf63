//! Notifications shown through thaw's toaster.

use crate::shared::resource::{Notification, NotificationLevel, Notifier};
use leptos::prelude::*;
use thaw::*;

pub struct ToastNotifier {
    toaster: ToasterInjection,
}

impl ToastNotifier {
    /// Must be called under a `ToasterProvider`
    pub fn from_context() -> Self {
        Self {
            toaster: ToasterInjection::expect_context(),
        }
    }
}

fn intent(level: NotificationLevel) -> ToastIntent {
    match level {
        NotificationLevel::Success => ToastIntent::Success,
        NotificationLevel::Error => ToastIntent::Error,
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        log::debug!("toast {:?}: {}", notification.level, notification.message);
        let Notification { level, message } = notification;
        self.toaster.dispatch_toast(
            move || {
                view! {
                    <Toast>
                        <ToastTitle>{message}</ToastTitle>
                    </Toast>
                }
            },
            ToastOptions::default().with_intent(intent(level)),
        );
    }
}
