//! PDF document writer.
//!
//! Assembles a complete PDF 1.4 document: header, body objects in id
//! order, xref table, and trailer. Object ids follow emission order so the
//! xref can be written in a single pass: the pages tree is id 1 (its kids
//! are known up front because page ids are computable), the catalog id 2,
//! the three shared font objects ids 3 to 5, then each page contributes a
//! content stream object followed by its page object.
//!
//! The writer emits no Info dictionary and no timestamps; identical input
//! therefore produces byte-identical output.

use super::content_stream::ContentStreamBuilder;
use super::object_serializer::ObjectSerializer;
use crate::error::{Error, Result};
use crate::object::Object;
use std::collections::HashMap;
use std::io::Write;

/// Id of the pages tree object.
const PAGES_ID: u32 = 1;
/// Id of the catalog object.
const CATALOG_ID: u32 = 2;
/// Ids of the three shared font objects, in resource order F1, F2, F3.
const FONT_IDS: [u32; 3] = [3, 4, 5];
/// First id available for per-page objects.
const FIRST_PAGE_OBJ_ID: u32 = 6;

/// Resource name and base font for each shared font object.
const FONTS: [(&str, &str); 3] = [
    ("F1", "Helvetica"),
    ("F2", "Helvetica-Bold"),
    ("F3", "Helvetica-Oblique"),
];

/// A page awaiting assembly.
struct PageData {
    width: f32,
    height: f32,
    content: ContentStreamBuilder,
}

/// PDF document writer.
///
/// Collects pages and assembles them into a complete document with
/// [`finish`](PdfWriter::finish).
#[derive(Default)]
pub struct PdfWriter {
    pages: Vec<PageData>,
}

impl PdfWriter {
    /// Create a writer with no pages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page and return its content stream builder.
    pub fn add_page(&mut self, width: f32, height: f32) -> &mut ContentStreamBuilder {
        self.pages.push(PageData {
            width,
            height,
            content: ContentStreamBuilder::new(),
        });
        // Just pushed, so the vec is nonempty
        &mut self.pages.last_mut().unwrap().content
    }

    /// Append a fully composed page.
    pub fn push_page(&mut self, width: f32, height: f32, content: ContentStreamBuilder) {
        self.pages.push(PageData {
            width,
            height,
            content,
        });
    }

    /// Assemble the complete document.
    ///
    /// Documents must have at least one page. Every object's byte offset is
    /// recorded as it is written and re-verified against the buffer before
    /// the xref is emitted; a mismatch aborts the render rather than
    /// producing a file readers cannot seek in.
    pub fn finish(self) -> Result<Vec<u8>> {
        if self.pages.is_empty() {
            return Err(Error::Invariant("document has no pages".to_string()));
        }

        let serializer = ObjectSerializer::compact();
        let mut output = Vec::new();
        let mut offsets: Vec<(u32, usize)> = Vec::new();

        writeln!(output, "%PDF-1.4")?;
        // Binary marker keeps transfer tools from treating the file as text
        output.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");

        // Page object ids: content stream first, page object second
        let page_ids: Vec<(u32, u32)> = (0..self.pages.len() as u32)
            .map(|i| (FIRST_PAGE_OBJ_ID + 2 * i, FIRST_PAGE_OBJ_ID + 2 * i + 1))
            .collect();
        let next_obj_id = FIRST_PAGE_OBJ_ID + 2 * self.pages.len() as u32;

        let write_obj = |output: &mut Vec<u8>,
                             offsets: &mut Vec<(u32, usize)>,
                             id: u32,
                             obj: &Object| {
            offsets.push((id, output.len()));
            output.extend_from_slice(&serializer.serialize_indirect(id, 0, obj));
        };

        // Pages tree
        let kids: Vec<Object> = page_ids
            .iter()
            .map(|&(_, page_id)| ObjectSerializer::reference(page_id, 0))
            .collect();
        let pages_obj = ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Pages")),
            ("Kids", ObjectSerializer::array(kids)),
            ("Count", ObjectSerializer::integer(self.pages.len() as i64)),
        ]);
        write_obj(&mut output, &mut offsets, PAGES_ID, &pages_obj);

        // Catalog
        let catalog_obj = ObjectSerializer::dict(vec![
            ("Type", ObjectSerializer::name("Catalog")),
            ("Pages", ObjectSerializer::reference(PAGES_ID, 0)),
        ]);
        write_obj(&mut output, &mut offsets, CATALOG_ID, &catalog_obj);

        // Shared font objects
        for (&id, &(_, base_font)) in FONT_IDS.iter().zip(FONTS.iter()) {
            let font_obj = ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Font")),
                ("Subtype", ObjectSerializer::name("Type1")),
                ("BaseFont", ObjectSerializer::name(base_font)),
                ("Encoding", ObjectSerializer::name("WinAnsiEncoding")),
            ]);
            write_obj(&mut output, &mut offsets, id, &font_obj);
        }

        // Shared font resource dictionary, same reference on every page
        let font_resources: HashMap<String, Object> = FONT_IDS
            .iter()
            .zip(FONTS.iter())
            .map(|(&id, &(resource, _))| {
                (resource.to_string(), ObjectSerializer::reference(id, 0))
            })
            .collect();

        // Per-page objects
        for (page, &(content_id, page_id)) in self.pages.iter().zip(page_ids.iter()) {
            let content_bytes = page.content.build()?;
            let content_obj = Object::Stream {
                dict: HashMap::new(),
                data: bytes::Bytes::from(content_bytes),
            };
            write_obj(&mut output, &mut offsets, content_id, &content_obj);

            let page_obj = ObjectSerializer::dict(vec![
                ("Type", ObjectSerializer::name("Page")),
                ("Parent", ObjectSerializer::reference(PAGES_ID, 0)),
                (
                    "MediaBox",
                    ObjectSerializer::rect(0.0, 0.0, page.width as f64, page.height as f64),
                ),
                ("Contents", ObjectSerializer::reference(content_id, 0)),
                (
                    "Resources",
                    ObjectSerializer::dict(vec![(
                        "Font",
                        Object::Dictionary(font_resources.clone()),
                    )]),
                ),
            ]);
            write_obj(&mut output, &mut offsets, page_id, &page_obj);
        }

        // Verify every recorded offset points at its object header
        for &(id, offset) in &offsets {
            let header = format!("{} 0 obj", id);
            if !output[offset..].starts_with(header.as_bytes()) {
                return Err(Error::Invariant(format!(
                    "xref offset mismatch for object {}",
                    id
                )));
            }
        }
        if offsets.len() as u32 != next_obj_id - 1 {
            return Err(Error::Invariant(format!(
                "expected {} objects, wrote {}",
                next_obj_id - 1,
                offsets.len()
            )));
        }

        // Cross-reference table: free slot for object 0, then one
        // fixed-width entry per object in id order
        let xref_start = output.len();
        writeln!(output, "xref")?;
        writeln!(output, "0 {}", next_obj_id)?;
        writeln!(output, "0000000000 65535 f ")?;
        for &(_, offset) in &offsets {
            writeln!(output, "{:010} 00000 n ", offset)?;
        }

        let trailer = ObjectSerializer::dict(vec![
            ("Size", ObjectSerializer::integer(next_obj_id as i64)),
            ("Root", ObjectSerializer::reference(CATALOG_ID, 0)),
        ]);
        writeln!(output, "trailer")?;
        output.extend_from_slice(&serializer.serialize(&trailer));
        writeln!(output)?;
        writeln!(output, "startxref")?;
        writeln!(output, "{}", xref_start)?;
        write!(output, "%%EOF")?;

        log::debug!(
            "assembled {} page(s), {} objects, {} bytes",
            self.pages.len(),
            offsets.len(),
            output.len()
        );

        Ok(output)
    }
}
