// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Concurrent classification of block ranges.
//!
//! The engine itself is synchronous. This module drives it over a range of
//! heights: block results are fetched through a [`BlockResultsSource`] with
//! bounded concurrency and each block is classified on a blocking worker
//! against one shared, read-only [`EventHandlerRegistry`].
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use taxscan::{BlockEventIndexer, EventHandlerRegistry, TaxscanConfig};
//!
//! let config = TaxscanConfig::default();
//! let registry = Arc::new(EventHandlerRegistry::bootstrap(&config.chain_id));
//! let indexer = BlockEventIndexer::from_config(Arc::new(rpc_source), registry, &config);
//!
//! for block in indexer.index_range(10_000, 10_099).await? {
//!     println!("{}: {} taxable events", block.height, block.records.len());
//! }
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt, TryStreamExt};
use std::sync::Arc;
use tracing::{debug, Instrument};

use crate::config::TaxscanConfig;
use crate::errors::IndexingError;
use crate::events::{process_block_events, EventHandlerRegistry, EventRelevantInformation};
use crate::spans;
use crate::types::BlockResults;

/// Error type reported by a [`BlockResultsSource`]
pub type SourceError = Box<dyn std::error::Error + Send + Sync>;

/// Provider of already-decoded block results (an RPC client, a cache, fixtures)
#[async_trait]
pub trait BlockResultsSource: Send + Sync {
    /// Fetch the begin/end block events and timestamp for one height.
    async fn block_results(&self, height: u64) -> Result<BlockResults, SourceError>;
}

#[async_trait]
impl<T: BlockResultsSource + ?Sized> BlockResultsSource for Arc<T> {
    async fn block_results(&self, height: u64) -> Result<BlockResults, SourceError> {
        (**self).block_results(height).await
    }
}

/// Classified events of one block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedBlock {
    pub height: u64,
    pub time: DateTime<Utc>,
    pub records: Vec<EventRelevantInformation>,
}

/// Fetches and classifies blocks with bounded concurrency
pub struct BlockEventIndexer<S: BlockResultsSource + ?Sized> {
    source: Arc<S>,
    registry: Arc<EventHandlerRegistry>,
    max_concurrent_blocks: usize,
}

impl<S: BlockResultsSource + ?Sized + 'static> BlockEventIndexer<S> {
    /// Create an indexer processing one block at a time
    pub fn new(source: Arc<S>, registry: Arc<EventHandlerRegistry>) -> Self {
        Self {
            source,
            registry,
            max_concurrent_blocks: 1,
        }
    }

    /// Create an indexer using the configured concurrency
    pub fn from_config(
        source: Arc<S>,
        registry: Arc<EventHandlerRegistry>,
        config: &TaxscanConfig,
    ) -> Self {
        Self::new(source, registry).with_max_concurrent_blocks(config.effective_concurrency())
    }

    /// Set how many blocks are in flight at once (minimum one)
    pub fn with_max_concurrent_blocks(mut self, max: usize) -> Self {
        self.max_concurrent_blocks = max.max(1);
        self
    }

    /// Registry the indexer classifies against
    pub fn registry(&self) -> &EventHandlerRegistry {
        &self.registry
    }

    /// Fetch and classify a single block.
    pub async fn index_block(&self, height: u64) -> Result<IndexedBlock, IndexingError> {
        let block = self
            .source
            .block_results(height)
            .await
            .map_err(|e| IndexingError::fetch_failed(height, e.to_string()))?;

        let registry = Arc::clone(&self.registry);
        let time = block.time;
        let records = tokio::task::spawn_blocking(move || process_block_events(&registry, &block))
            .await
            .map_err(|e| IndexingError::worker_failed(height, e.to_string()))??;

        debug!(height, records = records.len(), "Indexed block");
        Ok(IndexedBlock {
            height,
            time,
            records,
        })
    }

    /// Fetch and classify every block in `from..=to`.
    ///
    /// Results are returned in height order. The first failing height aborts
    /// the range and no results are returned.
    pub async fn index_range(&self, from: u64, to: u64) -> Result<Vec<IndexedBlock>, IndexingError> {
        if from > to {
            return Err(IndexingError::InvalidRange { from, to });
        }

        let span = spans::index_range(from, to, self.max_concurrent_blocks);
        stream::iter(from..=to)
            .map(|height| self.index_block(height))
            .buffered(self.max_concurrent_blocks)
            .try_collect()
            .instrument(span)
            .await
    }
}
