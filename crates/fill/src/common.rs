//! Shared load/render plumbing for the dropdown and radio fillers.

use pagekit_types::{ChangeEvent, Element, FillConfig, SharedPage, lock};

/// The effective preselect value: configuration first, then the target's
/// `data-value` attribute.
pub(crate) fn preselect_value(config: &FillConfig, element: &Element) -> Option<String> {
    config
        .preselect
        .clone()
        .or_else(|| element.data_value().map(str::to_string))
}

/// Invoke the resolved on-load handler, if any, with no event.
pub(crate) fn invoke_on_load(config: &FillConfig) {
    if let Some(handler) = config.resolved_on_load() {
        handler(None);
    }
}

/// Synthesize a change notification for a preselected value.
pub(crate) fn synthesize_change(config: &FillConfig, value: &str) {
    if let Some(handler) = config.resolved_on_change() {
        let event = ChangeEvent {
            element_id: config.target.clone(),
            value: value.to_string(),
        };
        handler(Some(&event));
    }
}

/// Rebind the target's change binding, replacing any prior handler, so native
/// change events forward to the resolved on-change callback.
pub(crate) fn rebind_change(page: &SharedPage, config: &FillConfig) {
    let handler = config.resolved_on_change();
    let mut guard = lock(page);
    if let Some(element) = guard.element_mut(&config.target) {
        match handler {
            Some(handler) => element.bind_change(handler),
            None => element.unbind_change(),
        }
    }
}
