//! Test doubles and helpers shared by the filler tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use anyhow::bail;
use async_trait::async_trait;
use pagekit_api::{Fetch, records_from_payload};
use pagekit_types::{ElementContent, Record, SelectOption, SharedPage, lock};
use serde_json::Value;

/// Returns a fixed record list for every request.
pub(crate) struct StubFetch {
    records: Vec<Record>,
}

impl StubFetch {
    pub(crate) fn records(payload: Value) -> Arc<Self> {
        Arc::new(Self {
            records: records_from_payload(payload).expect("test payload is a record list"),
        })
    }
}

#[async_trait]
impl Fetch for StubFetch {
    async fn fetch_records(&self, _url: &str, _parameters: &[(String, String)]) -> anyhow::Result<Vec<Record>> {
        Ok(self.records.clone())
    }
}

/// Fails every request.
pub(crate) struct FailFetch;

impl FailFetch {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self)
    }
}

#[async_trait]
impl Fetch for FailFetch {
    async fn fetch_records(&self, _url: &str, _parameters: &[(String, String)]) -> anyhow::Result<Vec<Record>> {
        bail!("connection refused")
    }
}

/// Returns records after a delay, counting completed fetches.
pub(crate) struct SlowFetch {
    records: Vec<Record>,
    delay: Duration,
    completed: AtomicUsize,
}

impl SlowFetch {
    pub(crate) fn new(payload: Value, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            records: records_from_payload(payload).expect("test payload is a record list"),
            delay,
            completed: AtomicUsize::new(0),
        })
    }

    pub(crate) fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetch for SlowFetch {
    async fn fetch_records(&self, _url: &str, _parameters: &[(String, String)]) -> anyhow::Result<Vec<Record>> {
        tokio::time::sleep(self.delay).await;
        self.completed.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.clone())
    }
}

/// The select options of an element, empty when it holds none.
pub(crate) fn select_options(page: &SharedPage, id: &str) -> Vec<SelectOption> {
    let guard = lock(page);
    match guard.element(id).map(|element| &element.content) {
        Some(ElementContent::Select { options }) => options.clone(),
        _ => Vec::new(),
    }
}

/// Poll until a condition holds, panicking after the deadline.
pub(crate) async fn wait_until(deadline: Duration, mut condition: impl FnMut() -> bool) {
    let start = Instant::now();
    while !condition() {
        if start.elapsed() > deadline {
            panic!("condition not met within {deadline:?}");
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}
