//! Shared types for the pagekit workspace.
//!
//! This crate defines the headless page model that fillers mutate, the fill
//! configuration consumed once per load, and the small value types shared
//! across crates: records, change events, and notification payloads.

pub mod config;
pub mod notify;
pub mod page;
pub mod record;

pub use config::{CallbackSlot, ColumnSpec, FillConfig, RadioLayout};
pub use notify::{Notification, NotificationKind};
pub use page::{
    ChangeEvent, ClickHandler, Element, ElementContent, Handler, Page, RadioItem, SelectOption,
    SharedPage, TableRow, emit_change, emit_click, lock, shared,
};
pub use record::{Record, field_text};
