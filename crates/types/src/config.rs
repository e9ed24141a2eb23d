//! Fill configuration.
//!
//! A [`FillConfig`] is constructed by the caller and consumed once per load
//! operation. Callback slots are a small tagged union: a slot either holds a
//! handler, designates "use the other named callback", or is empty. Alias
//! resolution happens once, before any invocation.

use crate::page::{ChangeEvent, Handler};
use std::fmt;
use std::sync::Arc;

/// A configured callback: empty, a concrete handler, or an alias designating
/// the other named callback of the same configuration.
#[derive(Clone, Default)]
pub enum CallbackSlot {
    #[default]
    None,
    Handler(Handler),
    /// Use the other slot's handler (`on_load` aliases `on_change` and vice
    /// versa). Two aliasing slots resolve to no handler.
    OtherCallback,
}

impl CallbackSlot {
    /// Wrap a closure as a concrete handler slot.
    pub fn handler(f: impl Fn(Option<&ChangeEvent>) + Send + Sync + 'static) -> Self {
        Self::Handler(Arc::new(f))
    }

    /// Resolve this slot against the other named slot of the configuration.
    pub fn resolve(&self, other: &CallbackSlot) -> Option<Handler> {
        match self {
            Self::Handler(handler) => Some(handler.clone()),
            Self::OtherCallback => match other {
                CallbackSlot::Handler(handler) => Some(handler.clone()),
                _ => None,
            },
            Self::None => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Debug for CallbackSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Handler(_) => f.write_str("Handler(..)"),
            Self::OtherCallback => f.write_str("OtherCallback"),
        }
    }
}

/// Radio group render mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RadioLayout {
    /// Each option wrapped in its own block-level container.
    #[default]
    Grouped,
    /// All options appended flat with the inline style class.
    Inline,
}

/// One table column: the record field to read and the header to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub field: String,
    pub display: String,
}

impl ColumnSpec {
    pub fn new(field: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            display: display.into(),
        }
    }
}

/// Configuration for one filler load.
#[derive(Debug, Clone)]
pub struct FillConfig {
    /// Id of the pre-existing target element.
    pub target: String,
    /// Source URL for the JSON endpoint.
    pub url: String,
    /// Query parameters appended to the request.
    pub parameters: Vec<(String, String)>,
    /// Record field supplying option values.
    pub value_field: String,
    /// Record field supplying option display text.
    pub text_field: String,
    /// Table columns; unused by the dropdown and radio fillers.
    pub columns: Vec<ColumnSpec>,
    /// Value marking one rendered option/radio as initially chosen. Falls
    /// back to the target's `data-value` attribute when absent.
    pub preselect: Option<String>,
    /// Text of a disabled, pre-selected placeholder prepended before the
    /// records.
    pub first_item_text: Option<String>,
    pub loading_text: Option<String>,
    pub empty_text: Option<String>,
    pub error_text: Option<String>,
    /// Disable the control when the endpoint returns zero records.
    pub disable_on_empty: bool,
    pub on_load: CallbackSlot,
    pub on_change: CallbackSlot,
    /// Element whose clicks re-run the whole load sequence.
    pub refresh_button: Option<String>,
    /// Radio input group name; the target id is used when empty.
    pub group_name: String,
    pub layout: RadioLayout,
    /// Append an unwired delete-button cell to each table row.
    pub delete_column: bool,
}

impl FillConfig {
    pub const DEFAULT_VALUE_FIELD: &'static str = "Value";
    pub const DEFAULT_TEXT_FIELD: &'static str = "Text";
    pub const DEFAULT_EMPTY_TEXT: &'static str = "No results";
    pub const DEFAULT_ERROR_TEXT: &'static str = "Error";

    pub fn new(target: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            url: url.into(),
            parameters: Vec::new(),
            value_field: Self::DEFAULT_VALUE_FIELD.into(),
            text_field: Self::DEFAULT_TEXT_FIELD.into(),
            columns: Vec::new(),
            preselect: None,
            first_item_text: None,
            loading_text: None,
            empty_text: None,
            error_text: None,
            disable_on_empty: true,
            on_load: CallbackSlot::None,
            on_change: CallbackSlot::None,
            refresh_button: None,
            group_name: String::new(),
            layout: RadioLayout::default(),
            delete_column: false,
        }
    }

    /// The on-load handler with the alias resolved.
    pub fn resolved_on_load(&self) -> Option<Handler> {
        self.on_load.resolve(&self.on_change)
    }

    /// The on-change handler with the alias resolved.
    pub fn resolved_on_change(&self) -> Option<Handler> {
        self.on_change.resolve(&self.on_load)
    }

    /// The empty-state text, defaulted.
    pub fn empty_text(&self) -> &str {
        self.empty_text.as_deref().unwrap_or(Self::DEFAULT_EMPTY_TEXT)
    }

    /// The error text, defaulted.
    pub fn error_text(&self) -> &str {
        self.error_text.as_deref().unwrap_or(Self::DEFAULT_ERROR_TEXT)
    }

    /// The radio input group name, falling back to the target id.
    pub fn group_name(&self) -> &str {
        if self.group_name.is_empty() {
            &self.target
        } else {
            &self.group_name
        }
    }
}
