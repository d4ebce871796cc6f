//! PDF source document
//!
//! Thin wrapper over `lopdf` that exposes the handful of codec capabilities
//! the splitter needs: open, page count, ordered page handles, and building
//! a new document from a page range.

use super::ChunkSpec;
use crate::error::{CodecStage, SplitError};
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::BTreeSet;
use std::path::Path;

/// Page attributes a page may inherit from its ancestors in the page tree
const INHERITABLE: [&str; 4] = ["Resources", "MediaBox", "CropBox", "Rotate"];

/// Guard against cyclic `/Parent` chains in damaged files
const MAX_TREE_DEPTH: usize = 64;

/// A loaded PDF, held read-only for the duration of a split
pub struct SourcePdf {
    doc: Document,
    /// Page object IDs in document order
    pages: Vec<ObjectId>,
    /// Same IDs, for membership checks
    page_set: BTreeSet<ObjectId>,
}

impl SourcePdf {
    /// Load a PDF from disk
    pub fn open(path: &Path) -> Result<Self, SplitError> {
        let doc = Document::load(path).map_err(|e| SplitError::codec(CodecStage::Open, e))?;
        // get_pages is keyed by 1-based page number, so values come out in order
        let pages: Vec<ObjectId> = doc.get_pages().into_values().collect();
        let page_set = pages.iter().copied().collect();

        Ok(Self {
            doc,
            pages,
            page_set,
        })
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Page handles in document order
    pub fn page_ids(&self) -> &[ObjectId] {
        &self.pages
    }

    /// Build a new document holding only the pages of `chunk`.
    ///
    /// Page objects keep their IDs and content. Only objects reachable from
    /// the kept pages (and the document info) are copied, so the cost is
    /// proportional to the part, not the source. References to pages outside
    /// the chunk, such as link targets, become null.
    pub fn extract(&self, chunk: &ChunkSpec) -> Result<Document, SplitError> {
        let total = self.page_count();
        if chunk.is_empty() || chunk.end > total {
            return Err(extract_error(format!(
                "pages {} out of range (document has {} pages)",
                chunk.page_range_label(),
                total
            )));
        }

        let kept_ids = &self.pages[chunk.start..chunk.end];
        let kept: BTreeSet<ObjectId> = kept_ids.iter().copied().collect();
        let is_dropped = |id: ObjectId| self.page_set.contains(&id) && !kept.contains(&id);

        let mut out = Document::with_version(self.doc.version.clone());
        out.max_id = self.doc.max_id;
        let pages_id = out.new_object_id();

        let mut pending = Vec::new();

        for &page_id in kept_ids {
            let mut page = match self.doc.objects.get(&page_id) {
                Some(Object::Dictionary(dict)) => dict.clone(),
                _ => {
                    return Err(extract_error(format!(
                        "page object {} {} R is not a dictionary",
                        page_id.0, page_id.1
                    )))
                }
            };

            for (key, value) in self.inherited_attributes(&page) {
                page.set(key, value);
            }
            page.remove(b"Parent");
            for (_, value) in page.iter_mut() {
                relink(value, &is_dropped, &mut pending);
            }
            page.set("Parent", Object::Reference(pages_id));

            out.objects.insert(page_id, Object::Dictionary(page));
        }

        if let Ok(info) = self.doc.trailer.get(b"Info").and_then(Object::as_reference) {
            pending.push(info);
            out.trailer.set("Info", Object::Reference(info));
        }

        while let Some(id) = pending.pop() {
            if out.objects.contains_key(&id) {
                continue;
            }
            // Dangling references in the source stay dangling
            let Some(object) = self.doc.objects.get(&id) else {
                continue;
            };
            let mut object = object.clone();
            relink(&mut object, &is_dropped, &mut pending);
            out.objects.insert(id, object);
        }

        out.objects.insert(
            pages_id,
            Object::Dictionary(Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Pages".to_vec())),
                (
                    "Kids",
                    Object::Array(kept_ids.iter().map(|id| Object::Reference(*id)).collect()),
                ),
                ("Count", Object::Integer(kept_ids.len() as i64)),
            ])),
        );
        let catalog_id = out.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]));
        out.trailer.set("Root", Object::Reference(catalog_id));

        let built = out.get_pages().len();
        if built != chunk.len() {
            return Err(extract_error(format!(
                "expected {} pages for part {}, page tree yielded {}",
                chunk.len(),
                chunk.index,
                built
            )));
        }

        Ok(out)
    }

    /// Attributes `page` inherits from its ancestors and does not set itself
    fn inherited_attributes(&self, page: &Dictionary) -> Vec<(&'static str, Object)> {
        let mut missing: Vec<&'static str> = INHERITABLE
            .iter()
            .copied()
            .filter(|key| !page.has(key.as_bytes()))
            .collect();
        let mut found = Vec::new();
        let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
        let mut depth = 0;

        while let Some(node_id) = parent {
            if missing.is_empty() || depth >= MAX_TREE_DEPTH {
                break;
            }
            let Some(Object::Dictionary(node)) = self.doc.objects.get(&node_id) else {
                break;
            };

            missing.retain(|key| match node.get(key.as_bytes()) {
                Ok(value) => {
                    found.push((*key, value.clone()));
                    false
                }
                Err(_) => true,
            });
            parent = node.get(b"Parent").and_then(Object::as_reference).ok();
            depth += 1;
        }

        found
    }
}

/// Queue every reference inside `object`, nulling those that point at dropped pages
fn relink(object: &mut Object, is_dropped: &impl Fn(ObjectId) -> bool, pending: &mut Vec<ObjectId>) {
    match object {
        Object::Reference(id) => {
            let id = *id;
            if is_dropped(id) {
                *object = Object::Null;
            } else {
                pending.push(id);
            }
        }
        Object::Array(items) => {
            for item in items.iter_mut() {
                relink(item, is_dropped, pending);
            }
        }
        Object::Dictionary(dict) => {
            for (_, value) in dict.iter_mut() {
                relink(value, is_dropped, pending);
            }
        }
        Object::Stream(stream) => {
            for (_, value) in stream.dict.iter_mut() {
                relink(value, is_dropped, pending);
            }
        }
        _ => {}
    }
}

fn extract_error(message: String) -> SplitError {
    SplitError::codec(CodecStage::Extract, message)
}
