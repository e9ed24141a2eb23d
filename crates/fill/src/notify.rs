//! Query-string notification processing.
//!
//! A page can arrive with a notification payload encoded in its query string
//! (typically placed there by the previous page before a redirect). On load,
//! the payload is displayed through the toast widget and the URL is rewritten
//! in place with the notification parameters stripped, so a reload or
//! bookmark does not replay the toast.

use pagekit_types::{NotificationKind, SharedPage, lock};
use pagekit_util::{parse_notification, strip_notification_parameters};
use tracing::debug;

/// External toast widget: renders a dismissible alert of the given kind.
pub trait Toast: Send + Sync {
    fn show(&self, kind: NotificationKind, message: &str, title: &str);
}

/// Display a query-string notification, if present, and strip its parameters
/// from the page URL.
pub fn process_query_notification(page: &SharedPage, toast: &dyn Toast) {
    let url = lock(page).url.clone();
    let Some(notification) = parse_notification(&url) else {
        return;
    };

    debug!(kind = notification.kind.as_str(), "displaying query notification");
    toast.show(notification.kind, &notification.message, &notification.title);

    lock(page).url = strip_notification_parameters(&url);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagekit_types::{Notification, Page, shared};
    use pagekit_util::notification_query;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingToast {
        shown: Mutex<Vec<Notification>>,
    }

    impl Toast for RecordingToast {
        fn show(&self, kind: NotificationKind, message: &str, title: &str) {
            self.shown.lock().unwrap().push(Notification {
                kind,
                message: message.to_string(),
                title: title.to_string(),
            });
        }
    }

    #[test]
    fn displays_and_strips_the_notification() {
        let query = notification_query(NotificationKind::Success, "Saved", "OK");
        let page = shared(Page::new(format!("https://example.com/orders?id=7&{query}")));

        let toast = RecordingToast::default();
        process_query_notification(&page, &toast);

        let shown = toast.shown.lock().unwrap();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].kind, NotificationKind::Success);
        assert_eq!(shown[0].message, "Saved");
        assert_eq!(shown[0].title, "OK");
        drop(shown);

        assert_eq!(lock(&page).url, "https://example.com/orders?id=7");
    }

    #[test]
    fn pages_without_a_notification_are_untouched() {
        let page = shared(Page::new("https://example.com/orders?id=7"));
        let toast = RecordingToast::default();
        process_query_notification(&page, &toast);

        assert!(toast.shown.lock().unwrap().is_empty());
        assert_eq!(lock(&page).url, "https://example.com/orders?id=7");
    }

    #[test]
    fn processing_twice_shows_the_toast_once() {
        let query = notification_query(NotificationKind::Info, "Hello", "");
        let page = shared(Page::new(format!("https://example.com/?{query}")));

        let toast = RecordingToast::default();
        process_query_notification(&page, &toast);
        process_query_notification(&page, &toast);

        assert_eq!(toast.shown.lock().unwrap().len(), 1);
    }
}
