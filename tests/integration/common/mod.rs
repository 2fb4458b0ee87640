//! Shared fixtures for the integration tests.
//!
//! Fixture PDFs are generated on the fly. Page `n` of every generated
//! document has a MediaBox width of `100 + n`, so a page can be recognised
//! after it has been copied into another file.

use lopdf::{Document, Object, dictionary};
use std::path::{Path, PathBuf};

/// Write a `pages`-page PDF to `dir/name` and return its path.
pub fn create_test_pdf(dir: &Path, name: &str, pages: u32) -> PathBuf {
    let path = dir.join(name);

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let kids: Vec<Object> = (1..=pages)
        .map(|n| {
            let content = format!("BT /F1 24 Tf 20 400 Td (Page {n}) Tj ET");
            let content_id = doc.add_object(lopdf::Stream::new(
                dictionary! {},
                content.into_bytes(),
            ));
            doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), (100 + n as i64).into(), 842.into()],
                "Contents" => content_id,
            })
            .into()
        })
        .collect();

    doc.objects.insert(
        pages_id,
        dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
            },
        }
        .into(),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(&path).expect("Failed to write fixture");

    path
}

/// Page markers (MediaBox width minus 100) of the PDF at `path`, in order.
pub fn page_markers(path: &Path) -> Vec<i64> {
    let doc = Document::load(path).expect("Failed to load output");
    doc.get_pages()
        .into_values()
        .map(|id| {
            let page = doc.get_object(id).unwrap().as_dict().unwrap();
            let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
            media_box[2].as_float().unwrap() as i64 - 100
        })
        .collect()
}

/// Clockwise `/Rotate` of the first page of the PDF at `path`.
pub fn first_page_rotation(path: &Path) -> i64 {
    let doc = Document::load(path).expect("Failed to load output");
    let (_, id) = doc.get_pages().into_iter().next().expect("no pages");
    doc.get_object(id)
        .unwrap()
        .as_dict()
        .unwrap()
        .get(b"Rotate")
        .and_then(|r| r.as_i64())
        .unwrap_or(0)
}

/// Sorted file names in `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_pages_are_marked() {
        let dir = tempfile::tempdir().unwrap();
        let path = create_test_pdf(dir.path(), "fixture.pdf", 3);
        assert_eq!(page_markers(&path), vec![1, 2, 3]);
        assert_eq!(first_page_rotation(&path), 0);
    }
}
