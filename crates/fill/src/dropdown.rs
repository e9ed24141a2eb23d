//! Dropdown filler.
//!
//! Populates a single-select control from a JSON endpoint. A load clears any
//! disabled/error state, fetches, renders options, synthesizes a change for a
//! preselected value, invokes the on-load callback, and rebinds the change
//! handler. Network failure is recovered locally: the control renders the
//! error text and sets it as hover text; nothing propagates to the caller.

use std::sync::Arc;

use pagekit_api::Fetch;
use pagekit_types::{ElementContent, FillConfig, Record, SelectOption, SharedPage, field_text, lock};
use tracing::{debug, warn};

use crate::common::{invoke_on_load, preselect_value, rebind_change, synthesize_change};

/// Run one full load sequence against the configured target.
pub async fn fill_dropdown<F>(page: &SharedPage, fetch: &Arc<F>, config: &FillConfig)
where
    F: Fetch + ?Sized,
{
    begin_load(page, config);

    let result = fetch.fetch_records(&config.url, &config.parameters).await;
    let fired = match result {
        Ok(records) if records.is_empty() => {
            render_empty(page, config);
            None
        }
        Ok(records) => render_options(page, config, &records),
        Err(error) => {
            warn!(element = %config.target, %error, "dropdown load failed");
            render_error(page, config);
            None
        }
    };

    if let Some(value) = fired {
        synthesize_change(config, &value);
    }
    invoke_on_load(config);
    rebind_change(page, config);
}

/// Wire the configured refresh button to re-run the whole load sequence.
///
/// Each click spawns an independent load. Overlapping loads are not coalesced
/// and there is no cancellation: a rapid double-click produces two in-flight
/// fetches and the most recently completed render wins.
pub fn wire_refresh<F>(page: &SharedPage, fetch: &Arc<F>, config: &FillConfig)
where
    F: Fetch + ?Sized + 'static,
{
    let Some(button) = config.refresh_button.clone() else {
        return;
    };

    let page_ref = page.clone();
    let fetch_ref = fetch.clone();
    let config = config.clone();
    let mut guard = lock(page);
    let Some(element) = guard.element_mut(&button) else {
        warn!(%button, "refresh button not found");
        return;
    };
    element.bind_click(Arc::new(move || {
        let page = page_ref.clone();
        let fetch = fetch_ref.clone();
        let config = config.clone();
        debug!(element = %config.target, "refresh requested");
        tokio::spawn(async move {
            fill_dropdown(&page, &fetch, &config).await;
        });
    }));
}

fn begin_load(page: &SharedPage, config: &FillConfig) {
    let mut guard = lock(page);
    let Some(element) = guard.element_mut(&config.target) else {
        return;
    };
    element.disabled = false;
    element.title = None;
    if let Some(loading) = &config.loading_text {
        element.content = ElementContent::Select {
            options: vec![SelectOption {
                value: String::new(),
                text: loading.clone(),
                disabled: true,
                selected: true,
            }],
        };
    }
}

fn render_empty(page: &SharedPage, config: &FillConfig) {
    let mut guard = lock(page);
    let Some(element) = guard.element_mut(&config.target) else {
        return;
    };
    element.content = ElementContent::Select {
        options: vec![SelectOption {
            value: String::new(),
            text: config.empty_text().to_string(),
            disabled: true,
            selected: true,
        }],
    };
    element.disabled = config.disable_on_empty;
}

fn render_error(page: &SharedPage, config: &FillConfig) {
    let mut guard = lock(page);
    let Some(element) = guard.element_mut(&config.target) else {
        return;
    };
    let text = config.error_text().to_string();
    element.content = ElementContent::Select {
        options: vec![SelectOption {
            value: String::new(),
            text: text.clone(),
            disabled: true,
            selected: true,
        }],
    };
    element.disabled = true;
    element.title = Some(text);
}

/// Render one option per record. Returns the value whose change notification
/// should fire: the first option matching the preselect value.
fn render_options(page: &SharedPage, config: &FillConfig, records: &[Record]) -> Option<String> {
    let mut guard = lock(page);
    let element = guard.element_mut(&config.target)?;
    let preselect = preselect_value(config, element);

    let mut options = Vec::with_capacity(records.len() + 1);
    let mut fired = None;
    for record in records {
        let value = field_text(record, &config.value_field);
        let text = field_text(record, &config.text_field);
        let selected = preselect.as_deref() == Some(value.as_str());
        if selected && fired.is_none() {
            fired = Some(value.clone());
        }
        options.push(SelectOption {
            value,
            text,
            disabled: false,
            selected,
        });
    }

    if let Some(first) = &config.first_item_text {
        options.insert(
            0,
            SelectOption {
                value: String::new(),
                text: first.clone(),
                disabled: true,
                selected: fired.is_none(),
            },
        );
    }

    element.content = ElementContent::Select { options };
    element.disabled = false;
    fired
}
