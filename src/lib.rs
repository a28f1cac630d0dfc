// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Classification of Cosmos SDK block events and transaction messages into
//! labeled, currency-converted taxable rows.
//!
//! - [`process_block_events`] dispatches a block's begin/end block events
//!   through an [`EventHandlerRegistry`]
//! - [`MessageHandlerRegistry`] classifies decoded transaction messages
//!   against their execution logs
//! - [`RowReducer`] turns the resulting facts into [`OutputRow`]s
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use taxscan::{process_block_events, BlockResults, EventHandlerRegistry, RawEvent};
//!
//! let registry = EventHandlerRegistry::bootstrap("osmosis-1");
//!
//! let mut block = BlockResults::new(1, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
//! block.end_block_events.push(
//!     RawEvent::new("distribution")
//!         .with_attribute("receiver", "osmo1alice")
//!         .with_attribute("amount", "250uosmo"),
//! );
//!
//! let records = process_block_events(&registry, &block).unwrap();
//! assert_eq!(records[0].address, "osmo1alice");
//! ```

mod config;
mod conversion;
mod errors;
pub mod events;
mod indexer;
pub mod messages;
mod rows;
mod spans;
mod taxable;
mod types;

pub use config::constants;
pub use config::{TaxscanConfig, TaxscanConfigBuilder};
pub use conversion::{convert_units, ConvertedAmount, DenomMetadataSource};
pub use errors::*;
pub use events::{
    chain_handlers, process_block_events, EventHandler, EventHandlerFactory,
    EventHandlerRegistry, EventHandlerRegistryBuilder, EventRelevantInformation, HandlerMap,
};
pub use indexer::{BlockEventIndexer, BlockResultsSource, IndexedBlock, SourceError};
pub use messages::{
    ClassifiedMessage, Direction, MessageHandler, MessageHandlerRegistry, Msg, TokenMovement,
};
pub use rows::{Label, OutputRow, RowReducer};
pub use taxable::{BlockContext, CoinAmount, Fee, TaxableEvent, TaxableTransaction, TxContext};
pub use types::*;
