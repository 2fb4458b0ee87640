//! In-memory output document.
//!
//! An [`OutputBuffer`] accumulates pages for exactly one output file. It
//! starts as an empty catalog with an empty page tree and is consumed by
//! the writer when flushed.

use std::collections::HashSet;

use lopdf::{Dictionary, Document, Object, ObjectId, dictionary};

use crate::error::{PdfSplitError, Result};
use crate::utils::copy_references;

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Pages collected for one output file.
#[derive(Debug)]
pub struct OutputBuffer {
    document: Document,
    pages_id: ObjectId,
    page_count: usize,
}

impl OutputBuffer {
    pub fn new() -> Self {
        let mut document = Document::with_version("1.5");
        let pages_id = document.new_object_id();
        let catalog_id = document.new_object_id();

        document.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => Vec::<Object>::new(),
                "Count" => 0,
            }),
        );
        document.objects.insert(
            catalog_id,
            Object::Dictionary(dictionary! {
                "Type" => "Catalog",
                "Pages" => pages_id,
            }),
        );
        document.trailer.set("Root", catalog_id);

        Self {
            document,
            pages_id,
            page_count: 0,
        }
    }

    /// Append page `page` (1-based) of `source` to this buffer.
    ///
    /// `source` is consumed: its objects are renumbered above this buffer's
    /// ids before the page and everything it references are copied over.
    /// `rotate_delta` is added to the page's clockwise `/Rotate`.
    pub fn add_page(&mut self, mut source: Document, page: u32, rotate_delta: i64) -> Result<()> {
        source.renumber_objects_with(self.document.max_id + 1);

        let page_id = *source.get_pages().get(&page).ok_or_else(|| {
            PdfSplitError::other(format!("page {page} is not in the source page tree"))
        })?;

        let mut page_dict = source.get_object(page_id)?.as_dict()?.clone();
        inherit_attributes(&source, &mut page_dict);
        page_dict.set("Parent", Object::Reference(self.pages_id));

        if rotate_delta != 0 {
            let current = page_dict.get(b"Rotate").and_then(|r| r.as_i64()).unwrap_or(0);
            page_dict.set("Rotate", Object::Integer((current + rotate_delta).rem_euclid(360)));
        }

        let page_object = Object::Dictionary(page_dict);
        self.document.objects.insert(page_id, page_object.clone());
        copy_references(&mut self.document, &source, &page_object);
        self.document.max_id = self.document.max_id.max(source.max_id);

        let pages_dict = self.document.get_object_mut(self.pages_id)?.as_dict_mut()?;
        pages_dict
            .get_mut(b"Kids")?
            .as_array_mut()?
            .push(Object::Reference(page_id));
        self.page_count += 1;
        pages_dict.set("Count", Object::Integer(self.page_count as i64));

        Ok(())
    }

    /// Number of pages added so far.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn is_empty(&self) -> bool {
        self.page_count == 0
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy inheritable attributes down from the page's ancestors, nearest
/// ancestor first, without overriding what the page sets itself.
///
/// The walk stops at the first node seen twice, so a `/Parent` cycle in a
/// damaged page tree ends it instead of looping.
fn inherit_attributes(source: &Document, page: &mut Dictionary) {
    let mut visited = HashSet::new();
    let mut parent = page.get(b"Parent").and_then(|p| p.as_reference()).ok();

    while let Some(parent_id) = parent {
        if !visited.insert(parent_id) {
            break;
        }

        let Ok(node) = source.get_object(parent_id).and_then(|n| n.as_dict()) else {
            break;
        };

        for key in INHERITABLE {
            if !page.has(key)
                && let Ok(value) = node.get(key)
            {
                page.set(key.to_vec(), value.clone());
            }
        }

        parent = node.get(b"Parent").and_then(|p| p.as_reference()).ok();
    }
}
