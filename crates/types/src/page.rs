//! Headless page model.
//!
//! A [`Page`] is an ordered collection of [`Element`]s keyed by id, plus the
//! current page URL. It stands in for the document that the fillers mutate:
//! elements carry classes, data attributes, visibility and disabled flags,
//! hover text, and typed content (select options, radio items, table rows).
//!
//! Mutation happens on one task at a time through a [`SharedPage`]; fillers
//! take the lock only between suspension points, never across an `.await`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Handler invoked for load and change notifications.
///
/// Load invocations pass `None`; change invocations pass the event. A single
/// handler type keeps the two callback slots interchangeable, which is what
/// the alias resolution in [`crate::CallbackSlot`] relies on.
pub type Handler = Arc<dyn Fn(Option<&ChangeEvent>) + Send + Sync>;

/// Handler invoked when a click is emitted on an element.
pub type ClickHandler = Arc<dyn Fn() + Send + Sync>;

/// A page shared between the caller and in-flight load tasks.
pub type SharedPage = Arc<Mutex<Page>>;

/// Wrap a page for sharing with spawned load tasks.
pub fn shared(page: Page) -> SharedPage {
    Arc::new(Mutex::new(page))
}

/// Lock a shared page, recovering the guard if a panicking task poisoned it.
pub fn lock(page: &SharedPage) -> MutexGuard<'_, Page> {
    page.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The payload forwarded to change handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Id of the element the change originated from.
    pub element_id: String,
    /// The element's current value at the time of the event.
    pub value: String,
}

/// One option of a select control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
    pub disabled: bool,
    pub selected: bool,
}

/// One radio input of a radio group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioItem {
    pub value: String,
    pub label: String,
    /// Shared input group name; radios with the same group are exclusive.
    pub group: String,
    pub checked: bool,
    pub disabled: bool,
    /// True when the item sits in its own block-level wrapper (grouped
    /// layout); false for the flat inline layout.
    pub wrapped: bool,
}

/// One body row of a table element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<String>,
    /// Present but unwired: the delete cell has no click binding.
    pub delete_button: bool,
}

/// Typed content of an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementContent {
    /// A plain block element with no structured content.
    Empty,
    Select {
        options: Vec<SelectOption>,
    },
    RadioGroup {
        items: Vec<RadioItem>,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<TableRow>,
    },
}

/// A single page element.
///
/// Event bindings are owned handler slots: an element holds at most one
/// change binding and one click binding, and rebinding replaces the previous
/// handler wholesale.
#[derive(Clone)]
pub struct Element {
    pub id: String,
    pub classes: Vec<String>,
    pub data: HashMap<String, String>,
    pub visible: bool,
    pub disabled: bool,
    /// Hover text; fillers set this to the error text on fetch failure.
    pub title: Option<String>,
    /// Flagged for tooltip activation.
    pub tooltip: bool,
    pub content: ElementContent,
    change_binding: Option<Handler>,
    click_binding: Option<ClickHandler>,
}

impl Element {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            classes: Vec::new(),
            data: HashMap::new(),
            visible: true,
            disabled: false,
            title: None,
            tooltip: false,
            content: ElementContent::Empty,
            change_binding: None,
            click_binding: None,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn with_tooltip(mut self) -> Self {
        self.tooltip = true;
        self
    }

    /// The `data-value` attribute, used as the preselect fallback.
    pub fn data_value(&self) -> Option<&str> {
        self.data.get("value").map(String::as_str)
    }

    /// True when any class carries the `prefix-` visibility-group convention.
    pub fn has_class_with_prefix(&self, prefix: &str) -> bool {
        let needle = format!("{prefix}-");
        self.classes.iter().any(|class| class.starts_with(&needle))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|candidate| candidate == class)
    }

    /// The element's current value: the selected option or checked radio.
    pub fn current_value(&self) -> String {
        match &self.content {
            ElementContent::Select { options } => options
                .iter()
                .find(|option| option.selected)
                .map(|option| option.value.clone())
                .unwrap_or_default(),
            ElementContent::RadioGroup { items } => items
                .iter()
                .find(|item| item.checked)
                .map(|item| item.value.clone())
                .unwrap_or_default(),
            _ => String::new(),
        }
    }

    /// Replace the change binding, releasing any prior handler.
    pub fn bind_change(&mut self, handler: Handler) {
        self.change_binding = Some(handler);
    }

    pub fn unbind_change(&mut self) {
        self.change_binding = None;
    }

    /// Replace the click binding, releasing any prior handler.
    pub fn bind_click(&mut self, handler: ClickHandler) {
        self.click_binding = Some(handler);
    }

    pub fn unbind_click(&mut self) {
        self.click_binding = None;
    }

    pub fn change_binding(&self) -> Option<Handler> {
        self.change_binding.clone()
    }

    pub fn click_binding(&self) -> Option<ClickHandler> {
        self.click_binding.clone()
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.id)
            .field("classes", &self.classes)
            .field("visible", &self.visible)
            .field("disabled", &self.disabled)
            .field("title", &self.title)
            .field("content", &self.content)
            .field("change_bound", &self.change_binding.is_some())
            .field("click_bound", &self.click_binding.is_some())
            .finish()
    }
}

/// The page: ordered elements plus the current URL.
#[derive(Debug, Clone, Default)]
pub struct Page {
    elements: IndexMap<String, Element>,
    /// The current page URL, read and rewritten by the query-string
    /// notification round-trip.
    pub url: String,
}

impl Page {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            elements: IndexMap::new(),
            url: url.into(),
        }
    }

    /// Insert an element, replacing any element with the same id.
    pub fn insert(&mut self, element: Element) {
        self.elements.insert(element.id.clone(), element);
    }

    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.elements.shift_remove(id)
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    pub fn elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.elements.values_mut()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Emit a change event on an element, invoking its bound change handler.
///
/// The handler is cloned out under the lock and invoked after the lock is
/// released, so handlers are free to lock the page themselves.
pub fn emit_change(page: &SharedPage, id: &str) {
    let cloned = {
        let guard = lock(page);
        guard.element(id).map(|element| {
            (
                element.change_binding(),
                ChangeEvent {
                    element_id: element.id.clone(),
                    value: element.current_value(),
                },
            )
        })
    };
    if let Some((Some(handler), event)) = cloned {
        handler(Some(&event));
    }
}

/// Emit a click on an element, invoking its bound click handler.
pub fn emit_click(page: &SharedPage, id: &str) {
    let handler = {
        let guard = lock(page);
        guard.element(id).and_then(Element::click_binding)
    };
    if let Some(handler) = handler {
        handler();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn data_value_reads_the_value_attribute() {
        let element = Element::new("country").with_data("value", "no");
        assert_eq!(element.data_value(), Some("no"));
        assert_eq!(Element::new("bare").data_value(), None);
    }

    #[test]
    fn current_value_reflects_selection() {
        let mut element = Element::new("sel");
        element.content = ElementContent::Select {
            options: vec![
                SelectOption {
                    value: "a".into(),
                    text: "A".into(),
                    disabled: false,
                    selected: false,
                },
                SelectOption {
                    value: "b".into(),
                    text: "B".into(),
                    disabled: false,
                    selected: true,
                },
            ],
        };
        assert_eq!(element.current_value(), "b");
    }

    #[test]
    fn rebinding_replaces_the_previous_change_handler() {
        let first_calls = Arc::new(AtomicUsize::new(0));
        let second_calls = Arc::new(AtomicUsize::new(0));

        let mut page = Page::new("https://example.com/");
        page.insert(Element::new("sel"));
        let page = shared(page);

        let counter = first_calls.clone();
        lock(&page)
            .element_mut("sel")
            .unwrap()
            .bind_change(Arc::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }));
        let counter = second_calls.clone();
        lock(&page)
            .element_mut("sel")
            .unwrap()
            .bind_change(Arc::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }));

        emit_change(&page, "sel");
        assert_eq!(first_calls.load(Ordering::SeqCst), 0);
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn emit_change_on_unbound_element_is_a_no_op() {
        let mut page = Page::new("https://example.com/");
        page.insert(Element::new("sel"));
        let page = shared(page);
        emit_change(&page, "sel");
        emit_change(&page, "missing");
    }

    #[test]
    fn class_prefix_matching() {
        let element = Element::new("panel").with_class("group-no").with_class("card");
        assert!(element.has_class_with_prefix("group"));
        assert!(!element.has_class_with_prefix("grp"));
        assert!(element.has_class("card"));
    }
}
