//! End-to-end tests through the real lopdf backend.
//!
//! Fixture PDFs are generated in-process with lopdf (one text line per
//! page), written to a temp directory, then indexed and searched exactly
//! as the CLI would.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use refscan_core::extraction::lopdf_backend::LopdfExtractor;
use refscan_core::{build_index, search_directory, PdfExtractor};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Build a minimal PDF with one page per entry in `page_texts`.
fn write_pdf(path: &Path, page_texts: &[&str]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in page_texts {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![100.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content stream"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).expect("save fixture pdf");
}

#[test]
fn extractor_returns_one_page_per_physical_page() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("two-pages.pdf");
    write_pdf(&path, &["first page text", "second page text"]);

    let pages = LopdfExtractor::new()
        .extract_pages(&fs::read(&path).unwrap())
        .unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].page_number, 1);
    assert_eq!(pages[1].page_number, 2);
    assert!(pages[0].text().unwrap().contains("first page text"));
    assert!(pages[1].text().unwrap().contains("second page text"));
}

#[test]
fn generated_pdfs_are_indexed_end_to_end() {
    let dir = TempDir::new().unwrap();
    write_pdf(&dir.path().join("test_dup_1.pdf"), &["Ref: 88887777"]);
    write_pdf(&dir.path().join("test_dup_2.pdf"), &["Ref: 88887777"]);
    write_pdf(&dir.path().join("other.pdf"), &["Ref Number: 99998888"]);

    let outcome = build_index(dir.path(), &LopdfExtractor::new()).unwrap();

    assert_eq!(outcome.files_scanned, 3);
    assert!(outcome.failures.is_empty());
    assert_eq!(
        outcome.index.get("88887777").unwrap(),
        ["test_dup_1.pdf", "test_dup_2.pdf"]
    );
    assert_eq!(outcome.index.get("99998888").unwrap(), ["other.pdf"]);
}

#[test]
fn generated_pdfs_are_searchable_with_page_numbers() {
    let dir = TempDir::new().unwrap();
    write_pdf(
        &dir.path().join("manual.pdf"),
        &["intro page", "serial 55500001 here", "outro page"],
    );

    let outcome = search_directory("55500001", dir.path(), &LopdfExtractor::new()).unwrap();
    assert_eq!(outcome.matches.len(), 1);
    assert_eq!(outcome.matches[0].document, "manual.pdf");
    assert_eq!(outcome.matches[0].page_number, 2);

    let missing = search_directory("00000000", dir.path(), &LopdfExtractor::new()).unwrap();
    assert!(!missing.found_any());
}

#[test]
fn non_pdf_bytes_in_pdf_file_are_reported_not_fatal() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("fake.pdf"), b"plain text, not a pdf").unwrap();
    write_pdf(&dir.path().join("real.pdf"), &["Ref: 11223344"]);

    let outcome = build_index(dir.path(), &LopdfExtractor::new()).unwrap();

    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].document, "fake.pdf");
    assert_eq!(outcome.index.get("11223344").unwrap(), ["real.pdf"]);
}
