//! Table filler.
//!
//! Clears the target table, renders one header per configured column and one
//! row per record. The optional delete column appends a button cell per row
//! with no click binding; wiring it up is a known incomplete feature. A
//! failed fetch leaves the table in its cleared state with no user feedback
//! beyond a log line.

use std::sync::Arc;

use pagekit_api::Fetch;
use pagekit_types::{ElementContent, FillConfig, Record, SharedPage, TableRow, field_text, lock};
use tracing::warn;

/// Clear and repopulate the configured table.
pub async fn fill_table<F>(page: &SharedPage, fetch: &Arc<F>, config: &FillConfig)
where
    F: Fetch + ?Sized,
{
    clear(page, config);

    let records = match fetch.fetch_records(&config.url, &config.parameters).await {
        Ok(records) => records,
        Err(error) => {
            // No error rendering here: the table stays cleared.
            warn!(element = %config.target, %error, "table load failed");
            return;
        }
    };

    render(page, config, &records);
}

fn clear(page: &SharedPage, config: &FillConfig) {
    let mut guard = lock(page);
    if let Some(element) = guard.element_mut(&config.target) {
        element.content = ElementContent::Table {
            headers: Vec::new(),
            rows: Vec::new(),
        };
    }
}

fn render(page: &SharedPage, config: &FillConfig, records: &[Record]) {
    let mut guard = lock(page);
    let Some(element) = guard.element_mut(&config.target) else {
        return;
    };

    let mut headers: Vec<String> = config.columns.iter().map(|column| column.display.clone()).collect();
    if config.delete_column {
        headers.push(String::new());
    }

    let rows = records
        .iter()
        .map(|record| TableRow {
            cells: config
                .columns
                .iter()
                .map(|column| field_text(record, &column.field))
                .collect(),
            delete_button: config.delete_column,
        })
        .collect();

    element.content = ElementContent::Table { headers, rows };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FailFetch, StubFetch};
    use pagekit_types::{ColumnSpec, Element, Page, shared};
    use serde_json::json;

    fn table_content(page: &SharedPage, id: &str) -> (Vec<String>, Vec<TableRow>) {
        let guard = lock(page);
        match guard.element(id).map(|element| &element.content) {
            Some(ElementContent::Table { headers, rows }) => (headers.clone(), rows.clone()),
            _ => panic!("element {id} is not a table"),
        }
    }

    fn page_and_config() -> (SharedPage, FillConfig) {
        let mut page = Page::new("https://example.com/");
        page.insert(Element::new("orders"));
        let config = FillConfig {
            columns: vec![
                ColumnSpec::new("OrderId", "Order"),
                ColumnSpec::new("Customer", "Customer name"),
            ],
            ..FillConfig::new("orders", "https://example.com/orders")
        };
        (shared(page), config)
    }

    #[tokio::test]
    async fn renders_headers_and_one_row_per_record() {
        let (page, config) = page_and_config();
        let fetch = StubFetch::records(json!([
            {"OrderId": 1001, "Customer": "Ada"},
            {"OrderId": 1002, "Customer": "Grace"},
        ]));

        fill_table(&page, &fetch, &config).await;

        let (headers, rows) = table_content(&page, "orders");
        assert_eq!(headers, vec!["Order", "Customer name"]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells, vec!["1001", "Ada"]);
        assert!(!rows[0].delete_button);
    }

    #[tokio::test]
    async fn missing_fields_render_as_empty_cells() {
        let (page, config) = page_and_config();
        let fetch = StubFetch::records(json!([{"OrderId": 1001}]));

        fill_table(&page, &fetch, &config).await;

        let (_, rows) = table_content(&page, "orders");
        assert_eq!(rows[0].cells, vec!["1001", ""]);
    }

    #[tokio::test]
    async fn delete_column_appends_an_unwired_button_cell() {
        let (page, mut config) = page_and_config();
        config.delete_column = true;
        let fetch = StubFetch::records(json!([{"OrderId": 1001, "Customer": "Ada"}]));

        fill_table(&page, &fetch, &config).await;

        let (headers, rows) = table_content(&page, "orders");
        assert_eq!(headers.len(), 3);
        assert!(rows[0].delete_button);
        // Placeholder only: nothing binds a click for the delete cell.
        assert!(lock(&page).element("orders").unwrap().click_binding().is_none());
    }

    #[tokio::test]
    async fn failed_fetch_leaves_the_table_cleared() {
        let (page, config) = page_and_config();
        {
            let mut guard = lock(&page);
            guard.element_mut("orders").unwrap().content = ElementContent::Table {
                headers: vec!["Stale".into()],
                rows: vec![TableRow {
                    cells: vec!["old".into()],
                    delete_button: false,
                }],
            };
        }

        fill_table(&page, &FailFetch::new(), &config).await;

        let (headers, rows) = table_content(&page, "orders");
        assert!(headers.is_empty());
        assert!(rows.is_empty());
        let guard = lock(&page);
        assert!(guard.element("orders").unwrap().title.is_none());
    }
}
