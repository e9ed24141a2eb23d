//! Tooltip activation.

use pagekit_types::{SharedPage, lock};

/// External tooltip widget: takes an element and attaches hover UI.
///
/// Activation must tolerate repeat calls for the same element; the
/// initializer re-walks the whole page after dynamic content loads.
pub trait TooltipActivator: Send + Sync {
    fn activate(&self, element_id: &str);
}

/// Activate tooltip behavior on every element flagged for it.
pub fn init_tooltips(page: &SharedPage, activator: &dyn TooltipActivator) {
    let flagged: Vec<String> = {
        let guard = lock(page);
        guard
            .elements()
            .filter(|element| element.tooltip)
            .map(|element| element.id.clone())
            .collect()
    };
    for id in &flagged {
        activator.activate(id);
    }
}
