//! # Pagekit utilities
//!
//! Stateless helpers shared across the workspace: query-string parameter
//! handling, GUID generation, email-shape validation, and text fitting to a
//! pixel width.

pub mod email;
pub mod ident;
pub mod query_string;
pub mod text_fit;

pub use email::is_valid_email;
pub use ident::guid;
pub use query_string::{
    NOTIFY_KIND_PARAM, NOTIFY_MESSAGE_PARAM, NOTIFY_TITLE_PARAM, notification_query, parse_notification,
    query_parameter, strip_notification_parameters,
};
pub use text_fit::{DEFAULT_FONT_SIZE, DisplayWidthMeasure, Measure, PageScratchMeasure, fit_text_to_width};
