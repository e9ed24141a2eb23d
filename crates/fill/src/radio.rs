//! Radio group filler.
//!
//! Shares the fetch/empty/error contract of the dropdown filler but renders
//! into a container of radio inputs. Options render either grouped (each item
//! in its own block-level wrapper) or inline (appended flat). There is no
//! refresh-button wiring here; the dropdown filler has it and this filler
//! never did, an asymmetry preserved as-is.

use std::sync::Arc;

use pagekit_api::Fetch;
use pagekit_types::{ElementContent, FillConfig, RadioItem, RadioLayout, Record, SharedPage, field_text, lock};
use tracing::warn;

use crate::common::{invoke_on_load, preselect_value, rebind_change, synthesize_change};

/// Run one full load sequence against the configured container.
pub async fn fill_radio_group<F>(page: &SharedPage, fetch: &Arc<F>, config: &FillConfig)
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
        Ok(records) => render_items(page, config, &records),
        Err(error) => {
            warn!(element = %config.target, %error, "radio group load failed");
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

fn begin_load(page: &SharedPage, config: &FillConfig) {
    let mut guard = lock(page);
    let Some(element) = guard.element_mut(&config.target) else {
        return;
    };
    element.disabled = false;
    element.title = None;
}

fn placeholder_item(config: &FillConfig, text: String) -> RadioItem {
    RadioItem {
        value: String::new(),
        label: text,
        group: config.group_name().to_string(),
        checked: false,
        disabled: true,
        wrapped: config.layout == RadioLayout::Grouped,
    }
}

fn render_empty(page: &SharedPage, config: &FillConfig) {
    let mut guard = lock(page);
    let Some(element) = guard.element_mut(&config.target) else {
        return;
    };
    element.content = ElementContent::RadioGroup {
        items: vec![placeholder_item(config, config.empty_text().to_string())],
    };
    element.disabled = config.disable_on_empty;
}

fn render_error(page: &SharedPage, config: &FillConfig) {
    let mut guard = lock(page);
    let Some(element) = guard.element_mut(&config.target) else {
        return;
    };
    let text = config.error_text().to_string();
    element.content = ElementContent::RadioGroup {
        items: vec![placeholder_item(config, text.clone())],
    };
    element.disabled = true;
    element.title = Some(text);
}

/// Render one radio per record. Returns the value whose change notification
/// should fire: the first item matching the preselect value.
fn render_items(page: &SharedPage, config: &FillConfig, records: &[Record]) -> Option<String> {
    let mut guard = lock(page);
    let element = guard.element_mut(&config.target)?;
    let preselect = preselect_value(config, element);
    let wrapped = config.layout == RadioLayout::Grouped;

    let mut items = Vec::with_capacity(records.len());
    let mut fired = None;
    for record in records {
        let value = field_text(record, &config.value_field);
        let label = field_text(record, &config.text_field);
        let checked = preselect.as_deref() == Some(value.as_str());
        if checked && fired.is_none() {
            fired = Some(value.clone());
        }
        items.push(RadioItem {
            value,
            label,
            group: config.group_name().to_string(),
            checked,
            disabled: false,
            wrapped,
        });
    }

    element.content = ElementContent::RadioGroup { items };
    element.disabled = false;
    fired
}
