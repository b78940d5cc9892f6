//! PDF serialization stack.
//!
//! Three layers, lowest first:
//!
//! ```text
//! [ObjectSerializer]     object values -> byte syntax
//! [ContentStreamBuilder] draw/text operators -> stream bytes
//! [PdfWriter]            pages -> complete document with xref + trailer
//! ```
//!
//! Higher-level layout lives in [`crate::layout`]; nothing in this module
//! knows about report sections or page chrome.

pub mod content_stream;
pub mod object_serializer;
pub mod pdf_writer;

pub use content_stream::{Color, ContentStreamBuilder, ContentStreamOp};
pub use object_serializer::ObjectSerializer;
pub use pdf_writer::PdfWriter;
