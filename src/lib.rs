//! # pawreport
//!
//! Dependency-free PDF rendering core for pet personality reports.
//!
//! Takes a structured [`ReportData`] record (scores, strengths, advice,
//! narrative text) and produces a complete multi-page PDF 1.4 byte
//! sequence, hand-assembled from byte buffers: exact object offset
//! bookkeeping, metrics-driven text layout over fixed Helvetica advance
//! tables, Bezier-approximated vector artwork, and a cursor-driven
//! page-break state machine. No PDF library sits underneath.
//!
//! ## Quick start
//!
//! ```ignore
//! use pawreport::{render, ReportData};
//!
//! let report: ReportData = serde_json::from_str(&input)?;
//! let pdf = render(&report)?;
//! std::fs::write("report.pdf", pdf)?;
//! ```
//!
//! ## Layers
//!
//! - [`fonts`] / [`encoding`]: text measurement and WinAnsi string encoding
//! - [`writer`]: objects, content streams, and document assembly
//! - [`layout`]: cursor, page chrome, and reusable report widgets
//! - [`renderer`]: section composition over the layout API
//! - [`services`]: traits for the external collaborators (profile
//!   generation, payments, mail); implementations live elsewhere
//!
//! Rendering is synchronous and deterministic: identical input produces
//! byte-identical output.

#![warn(missing_docs)]
#![allow(clippy::too_many_arguments)]

pub mod encoding;
pub mod error;
pub mod fonts;
pub mod layout;
pub mod object;
pub mod renderer;
pub mod report;
pub mod services;
pub mod writer;

pub use error::{Error, Result};
pub use renderer::{render, render_with_options, RenderOptions};
pub use report::{Analysis, CompatibilityEntry, ReportData};

/// Library version from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
