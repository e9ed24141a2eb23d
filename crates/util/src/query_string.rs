//! Query-string parameter handling.
//!
//! Three recognized parameter names carry a notification payload through the
//! query string: kind, message, and title. The page-load hook in
//! `pagekit-fill` displays the notification and rewrites the URL with
//! [`strip_notification_parameters`], which drops the three parameters and
//! re-serializes the remainder so no stray separators are left behind.

use pagekit_types::{Notification, NotificationKind};
use url::Url;
use url::form_urlencoded::Serializer;

/// Query parameter naming the notification kind.
pub const NOTIFY_KIND_PARAM: &str = "notify";
/// Query parameter carrying the notification message.
pub const NOTIFY_MESSAGE_PARAM: &str = "notifyMessage";
/// Query parameter carrying the notification title.
pub const NOTIFY_TITLE_PARAM: &str = "notifyTitle";

/// Decoded value of a named query parameter.
///
/// Returns `None` when the URL does not parse, the parameter is absent, or
/// the parameter is present without a value.
pub fn query_parameter(url: &str, name: &str) -> Option<String> {
    let url = Url::parse(url).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Encode a notification triple as a query-string fragment.
pub fn notification_query(kind: NotificationKind, message: &str, title: &str) -> String {
    Serializer::new(String::new())
        .append_pair(NOTIFY_KIND_PARAM, kind.as_str())
        .append_pair(NOTIFY_MESSAGE_PARAM, message)
        .append_pair(NOTIFY_TITLE_PARAM, title)
        .finish()
}

/// Parse the notification triple out of a URL's query string.
///
/// The kind parameter gates the whole payload: absent or unrecognized kinds
/// yield `None`. Message and title decode to empty strings when missing.
pub fn parse_notification(url: &str) -> Option<Notification> {
    let kind = NotificationKind::parse(&query_parameter(url, NOTIFY_KIND_PARAM)?)?;
    Some(Notification {
        kind,
        message: query_parameter(url, NOTIFY_MESSAGE_PARAM).unwrap_or_default(),
        title: query_parameter(url, NOTIFY_TITLE_PARAM).unwrap_or_default(),
    })
}

/// Remove the notification parameters from a URL.
///
/// The surviving query pairs are re-serialized, which normalizes any leftover
/// separator characters; an emptied query is dropped entirely. URLs that do
/// not parse are returned unchanged.
pub fn strip_notification_parameters(url: &str) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        return url.to_string();
    };

    let survivors: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(key, _)| {
            key != NOTIFY_KIND_PARAM && key != NOTIFY_MESSAGE_PARAM && key != NOTIFY_TITLE_PARAM
        })
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    if survivors.is_empty() {
        parsed.set_query(None);
    } else {
        let mut serializer = Serializer::new(String::new());
        for (key, value) in &survivors {
            serializer.append_pair(key, value);
        }
        parsed.set_query(Some(&serializer.finish()));
    }

    parsed.to_string()
}
