//! PDF file export.
//!
//! Lays the labeled block out on A4 pages in Courier so line wrapping can be
//! computed exactly from character counts. Text is written with the built-in
//! WinAnsi encoding; characters outside it are replaced with `?`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use encoding_rs::WINDOWS_1252;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

use crate::error::{Error, Result};
use crate::options::Options;

/// A4 page size in points.
const PAGE_WIDTH_PT: i64 = 595;
const PAGE_HEIGHT_PT: i64 = 842;

/// Courier advance width as a fraction of the font size.
const COURIER_ADVANCE: f64 = 0.6;

/// Line height as a multiple of the font size.
const LINE_SPACING: f64 = 1.15;

fn mm_to_pt(mm: u16) -> f64 {
    f64::from(mm) * 72.0 / 25.4
}

fn pdf_error(err: impl std::fmt::Display) -> Error {
    Error::Pdf(err.to_string())
}

/// Page geometry derived from the options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    font_size: i64,
    line_height: i64,
    margin: i64,
    chars_per_line: usize,
    lines_per_page: usize,
}

impl Layout {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from_options(options: &Options) -> Self {
        let font_size = f64::from(options.pdf_font_size.max(1));
        let margin = mm_to_pt(options.pdf_margin_mm);
        let text_width = mm_to_pt(options.pdf_text_width_mm)
            .min(PAGE_WIDTH_PT as f64 - 2.0 * margin);
        let line_height = (font_size * LINE_SPACING).ceil();
        let usable_height = PAGE_HEIGHT_PT as f64 - 2.0 * margin;

        Self {
            font_size: font_size as i64,
            line_height: line_height as i64,
            margin: margin.round() as i64,
            chars_per_line: ((text_width / (font_size * COURIER_ADVANCE)).floor() as usize).max(1),
            lines_per_page: ((usable_height / line_height).floor() as usize).max(1),
        }
    }
}

/// Wrap text to at most `width` characters per line.
///
/// Existing line breaks are kept, words are packed greedily, and a word
/// longer than `width` is split across lines.
#[must_use]
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0usize;

        for word in paragraph.split(' ').filter(|w| !w.is_empty()) {
            let mut chars: Vec<char> = word.chars().collect();

            if current_len > 0 && current_len + 1 + chars.len() <= width {
                current.push(' ');
                current.extend(chars.iter());
                current_len += 1 + chars.len();
                continue;
            }
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            while chars.len() > width {
                let rest = chars.split_off(width);
                lines.push(chars.into_iter().collect());
                chars = rest;
            }
            current.extend(chars.iter());
            current_len = chars.len();
        }

        lines.push(current);
    }

    lines
}

/// Encode a line as WinAnsi bytes for a Type1 base font.
fn win_ansi(line: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(line.len());
    let mut buf = [0u8; 4];
    for c in line.chars() {
        if c.is_ascii() {
            bytes.push(c as u8);
            continue;
        }
        let (encoded, _, had_errors) = WINDOWS_1252.encode(c.encode_utf8(&mut buf));
        if had_errors || encoded.len() != 1 {
            bytes.push(b'?');
        } else {
            bytes.extend_from_slice(&encoded);
        }
    }
    bytes
}

fn page_content(lines: &[String], layout: Layout) -> Content {
    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![Object::Name(b"F1".to_vec()), Object::Integer(layout.font_size)],
        ),
        Operation::new("TL", vec![Object::Integer(layout.line_height)]),
        Operation::new(
            "Td",
            vec![
                Object::Integer(layout.margin),
                Object::Integer(PAGE_HEIGHT_PT - layout.margin - layout.font_size),
            ],
        ),
    ];
    for line in lines {
        operations.push(Operation::new(
            "Tj",
            vec![Object::String(win_ansi(line), StringFormat::Literal)],
        ));
        operations.push(Operation::new("T*", vec![]));
    }
    operations.push(Operation::new("ET", vec![]));
    Content { operations }
}

/// Lay `text` out into a PDF document and return its bytes.
///
/// # Errors
///
/// Returns `Error::Pdf` if a content stream or the document cannot be
/// serialized.
pub fn layout_pdf(text: &str, options: &Options) -> Result<Vec<u8>> {
    let layout = Layout::from_options(options);
    let lines = wrap_lines(text, layout.chars_per_line);

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for page_lines in lines.chunks(layout.lines_per_page) {
        let content = page_content(page_lines, layout).encode().map_err(pdf_error)?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, content));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = i64::try_from(kids.len()).map_err(pdf_error)?;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(PAGE_WIDTH_PT),
            Object::Integer(PAGE_HEIGHT_PT),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::String(win_ansi(&options.share_title), StringFormat::Literal),
        "Producer" => Object::string_literal(env!("CARGO_PKG_NAME")),
        "CreationDate" => Object::string_literal(Utc::now().format("D:%Y%m%d%H%M%SZ").to_string()),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).map_err(pdf_error)?;
    Ok(bytes)
}

/// Lay `text` out as a PDF and write it to `path`.
///
/// # Errors
///
/// Returns `Error::Pdf` if generation fails and `Error::Io` if the file
/// cannot be written.
pub fn save_pdf(text: &str, path: &Path, options: &Options) -> Result<PathBuf> {
    let bytes = layout_pdf(text, options)?;
    fs::write(path, &bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote pdf export");
    Ok(path.to_path_buf())
}
