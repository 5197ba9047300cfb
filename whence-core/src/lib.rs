//! # whence-core
//!
//! Core library for whence - timestamp display components for terminal UIs.
//!
//! The building blocks:
//! - Relative and absolute timestamp formatting
//! - A live-updating [`DateLabel`] backed by a repeating ticker
//! - Dismissable notice state persisted through a key-value store
//! - A render boundary for containing display failures
//! - Configuration and logging infrastructure
//!
//! ## Design
//!
//! Data flows one way: wall clock + stored timestamp in, display string out.
//! The formatters are pure functions; [`DateLabel`] adds the only state
//! (which form to show, and a ticker subscription that forces periodic
//! recomputation).
//!
//! ## Example
//!
//! ```rust
//! use whence_core::{format_relative, DateLabel, LabelOptions, TimeInput};
//! use chrono::Utc;
//!
//! // Pure formatting against an explicit "now"
//! let text = format_relative(Utc::now(), Utc::now() - chrono::Duration::hours(2));
//! assert_eq!(text, "2 hours ago");
//!
//! // Or a label that keeps itself current
//! let label = DateLabel::with_system_clock(
//!     Some(TimeInput::from("2023-11-14T22:13:20Z")),
//!     LabelOptions::default(),
//! );
//! let _ = label.text();
//! ```

// Curated re-exports so callers rarely need the module paths
pub use boundary::{BoundaryState, RenderBoundary};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::{Error, Result};
pub use field_errors::FieldErrors;
pub use format::{format_absolute, format_relative};
pub use label::{DateLabel, PLACEHOLDER};
pub use notice::{Notice, NoticeState};
pub use store::{FileStore, KvStore, MemoryStore};
pub use ticker::{repeat, TickerHandle};
pub use types::{FormatOptions, LabelOptions, TimeInput};

pub mod boundary;
pub mod clock;
pub mod config;
pub mod error;
pub mod field_errors;
pub mod format;
pub mod label;
pub mod logging;
pub mod notice;
pub mod store;
pub mod ticker;
pub mod types;
