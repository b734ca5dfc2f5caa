//! In-memory PDF fixtures built with lopdf.

#![allow(dead_code)]

use std::io::Write;

use lopdf::{Object, Stream, dictionary};

/// Build a PDF with one page per content stream.
pub fn pdf_with_pages(contents: &[Vec<u8>]) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for content in contents {
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.clone()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(612),
                Object::Integer(792),
            ],
            "Contents" => Object::Reference(content_id),
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => Object::Reference(font_id) },
            },
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => Object::Integer(count),
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Text of the cell at (`row`, `col`) in [`ruled_table`].
pub fn cell_text(row: usize, col: usize) -> String {
    format!("r{}c{}", row + 1, col + 1)
}

/// Content stream drawing a `rows` x `cols` grid of ruled cells, each holding
/// [`cell_text`].
pub fn ruled_table(rows: usize, cols: usize) -> Vec<u8> {
    let (left, top, cell_w, cell_h) = (100, 700, 100, 20);
    let right = left + cell_w * cols;
    let bottom = top - cell_h * rows;

    let mut content = String::from("1 w\n");
    for r in 0..=rows {
        let y = top - cell_h * r;
        content.push_str(&format!("{left} {y} m {right} {y} l S\n"));
    }
    for c in 0..=cols {
        let x = left + cell_w * c;
        content.push_str(&format!("{x} {top} m {x} {bottom} l S\n"));
    }
    for r in 0..rows {
        for c in 0..cols {
            let x = left + cell_w * c + 10;
            let y = top - cell_h * r - 15;
            content.push_str(&format!(
                "BT /F1 10 Tf {x} {y} Td ({}) Tj ET\n",
                cell_text(r, c)
            ));
        }
    }
    content.into_bytes()
}

/// Text of the cell at (`row`, `col`) in [`aligned_columns`].
pub fn aligned_text(row: usize, col: usize) -> String {
    format!("s{}c{}", row + 1, col + 1)
}

/// Content stream laying out `rows` x `cols` words in whitespace-separated
/// columns, with no ruling lines at all.
pub fn aligned_columns(rows: usize, cols: usize) -> Vec<u8> {
    let (left, top, col_gap, row_gap) = (100, 700, 150, 20);

    let mut content = String::new();
    for r in 0..rows {
        for c in 0..cols {
            let x = left + col_gap * c;
            let y = top - row_gap * r;
            content.push_str(&format!(
                "BT /F1 10 Tf {x} {y} Td ({}) Tj ET\n",
                aligned_text(r, c)
            ));
        }
    }
    content.into_bytes()
}

/// Content stream with a single line of prose and no table structure.
pub fn plain_text() -> Vec<u8> {
    b"BT /F1 12 Tf 72 720 Td (Hello, no tables here.) Tj ET".to_vec()
}

/// Write PDF bytes to a temporary file and return it.
pub fn write_temp_pdf(bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    f.write_all(bytes).unwrap();
    f.flush().unwrap();
    f
}
