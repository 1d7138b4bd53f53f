//! Query service bridging the dropdown to a host-supplied option source.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use sifter_model::prelude::OptionItem;

use super::error::QueryError;

/// Host-supplied async option source.
///
/// Implementations resolve a keyword to the options it matches. Returning an
/// empty list is a valid answer; errors are reserved for the source itself
/// failing.
#[async_trait]
pub trait OptionsProvider: fmt::Debug + Send + Sync {
    async fn options_by_query(&self, keyword: &str) -> Result<Vec<OptionItem>, QueryError>;
}

/// Executes option queries against the provider, if one is configured.
#[derive(Debug, Clone, Default)]
pub struct QueryService {
    provider: Option<Arc<dyn OptionsProvider>>,
}

impl QueryService {
    pub fn new(provider: Option<Arc<dyn OptionsProvider>>) -> Self {
        Self { provider }
    }

    /// Whether a query source is present at all.
    pub fn is_queryable(&self) -> bool {
        self.provider.is_some()
    }

    /// Run one query under the given time limit.
    pub async fn query(
        &self,
        keyword: &str,
        limit: Duration,
    ) -> Result<Vec<OptionItem>, QueryError> {
        let Some(provider) = &self.provider else {
            return Err(QueryError::Source("no query source configured".to_owned()));
        };

        log::debug!("option query starting: '{keyword}'");
        let start = Instant::now();

        let result = match tokio::time::timeout(limit, provider.options_by_query(keyword)).await {
            Ok(result) => result,
            Err(_) => Err(QueryError::TimedOut(limit)),
        };

        match &result {
            Ok(rows) => log::info!(
                "option query completed: '{}' -> {} row(s) in {}ms",
                keyword,
                rows.len(),
                start.elapsed().as_millis()
            ),
            Err(error) => log::warn!("option query failed: '{keyword}': {error}"),
        }

        result
    }
}

/// In-memory provider over a fixed catalog; the demo host and tests use it
/// as their stand-in for a remote source.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    rows: Vec<OptionItem>,
    latency: Option<Duration>,
}

impl StaticProvider {
    pub fn new(rows: Vec<OptionItem>) -> Self {
        Self {
            rows,
            latency: None,
        }
    }

    /// Simulate a slow source; useful for exercising debounce and timeout
    /// behavior.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }
}

#[async_trait]
impl OptionsProvider for StaticProvider {
    async fn options_by_query(&self, keyword: &str) -> Result<Vec<OptionItem>, QueryError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let needle = keyword.trim().to_lowercase();
        Ok(self
            .rows
            .iter()
            .filter(|option| option.label.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}
