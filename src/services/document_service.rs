use chrono::{DateTime, Utc};
use lopdf::{
    content::{Content, Operation},
    dictionary, Document, Object, ObjectId, Stream,
};

use crate::{
    errors::{AppError, AppResult},
    models::{domain::StudyContent, dto::request::DocumentFormat},
};

pub const DEFAULT_TITLE: &str = "Study Guide";

// A4 in points.
const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN: i64 = 56;

// Average Helvetica glyph width is roughly half the font size.
const AVERAGE_GLYPH_WIDTH: f64 = 0.5;

/// A rendered, downloadable document.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub filename: String,
}

pub struct DocumentService;

impl DocumentService {
    pub fn render(
        content: &StudyContent,
        title: Option<&str>,
        format: DocumentFormat,
    ) -> AppResult<RenderedDocument> {
        let title = title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TITLE);
        let generated_at = Utc::now();
        let stamp = generated_at.format("%Y%m%d-%H%M%S");

        log::info!(
            "Rendering {} section(s) as {:?}",
            content.section_count(),
            format
        );

        match format {
            DocumentFormat::Html => Ok(RenderedDocument {
                bytes: Self::render_html(content, title, generated_at).into_bytes(),
                content_type: "text/html; charset=utf-8",
                filename: format!("study-guide-{}.html", stamp),
            }),
            DocumentFormat::Pdf => Ok(RenderedDocument {
                bytes: Self::render_pdf(content, title, generated_at)?,
                content_type: "application/pdf",
                filename: format!("study-guide-{}.pdf", stamp),
            }),
        }
    }

    /// Self-contained HTML document with print styles.
    pub fn render_html(content: &StudyContent, title: &str, generated_at: DateTime<Utc>) -> String {
        let mut body = String::new();

        for section in &content.topic {
            body.push_str("<section class=\"topic\">\n");
            body.push_str(&format!("<h2>{}</h2>\n", escape_html(&section.topic_title)));
            push_paragraphs(&mut body, &section.main_description, "lead");

            for sub in &section.subtopics {
                body.push_str(&format!("<h3>{}</h3>\n", escape_html(&sub.sub_topic_title)));
                push_paragraphs(&mut body, &sub.sub_content_text, "");
            }
            body.push_str("</section>\n");
        }

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>{title}</title>
<style>
@page {{ size: A4; margin: 2cm; }}
body {{ font-family: Helvetica, Arial, sans-serif; line-height: 1.5; color: #1f2933; max-width: 48rem; margin: 0 auto; }}
h1 {{ color: #2563eb; border-bottom: 2px solid #2563eb; padding-bottom: 0.25em; }}
h2 {{ color: #1e3a8a; margin-top: 2em; page-break-after: avoid; }}
h3 {{ color: #334155; page-break-after: avoid; }}
p.lead {{ font-size: 1.05em; }}
section.topic {{ page-break-inside: auto; }}
footer {{ margin-top: 3em; font-size: 0.8em; color: #64748b; }}
</style>
</head>
<body>
<h1>{title}</h1>
{body}<footer>Generated {generated}</footer>
</body>
</html>
"#,
            title = escape_html(title),
            body = body,
            generated = generated_at.format("%Y-%m-%d %H:%M UTC"),
        )
    }

    /// A4 PDF using the standard Helvetica faces, wrapped and paginated.
    pub fn render_pdf(
        content: &StudyContent,
        title: &str,
        generated_at: DateTime<Utc>,
    ) -> AppResult<Vec<u8>> {
        let lines = layout_lines(content, title, generated_at);
        let pages = paginate(&lines);

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let regular_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let bold_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => regular_id,
                "F2" => bold_id,
            },
        });

        let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
        for page in &pages {
            let page_id = add_page(&mut doc, pages_id, resources_id, page)?;
            kids.push(Object::Reference(page_id));
        }

        let page_count = kids.len() as i64;
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => media_box(),
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| AppError::DocumentError(format!("Failed to write PDF: {}", e)))?;
        Ok(bytes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Face {
    Regular,
    Bold,
}

impl Face {
    fn resource_name(&self) -> &'static str {
        match self {
            Face::Regular => "F1",
            Face::Bold => "F2",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Line {
    face: Face,
    size: i64,
    text: String,
    space_before: i64,
}

impl Line {
    fn leading(&self) -> i64 {
        self.size + self.size / 3 + self.space_before
    }
}

fn layout_lines(content: &StudyContent, title: &str, generated_at: DateTime<Utc>) -> Vec<Line> {
    let mut lines = Vec::new();
    push_wrapped(&mut lines, title, Face::Bold, 20, 0);
    push_wrapped(
        &mut lines,
        &format!("Generated {}", generated_at.format("%Y-%m-%d %H:%M UTC")),
        Face::Regular,
        9,
        2,
    );

    for section in &content.topic {
        push_wrapped(&mut lines, &section.topic_title, Face::Bold, 15, 18);
        push_wrapped(&mut lines, &section.main_description, Face::Regular, 11, 4);

        for sub in &section.subtopics {
            push_wrapped(&mut lines, &sub.sub_topic_title, Face::Bold, 12, 10);
            push_wrapped(&mut lines, &sub.sub_content_text, Face::Regular, 11, 2);
        }
    }

    lines
}

fn push_wrapped(lines: &mut Vec<Line>, text: &str, face: Face, size: i64, space_before: i64) {
    let usable_width = (PAGE_WIDTH - 2 * MARGIN) as f64;
    let max_chars = (usable_width / (size as f64 * AVERAGE_GLYPH_WIDTH)).floor() as usize;

    let mut first = true;
    for paragraph in text.split('\n').map(str::trim).filter(|p| !p.is_empty()) {
        for wrapped in wrap_text(paragraph, max_chars) {
            lines.push(Line {
                face,
                size,
                text: wrapped,
                space_before: if first { space_before } else { 0 },
            });
            first = false;
        }
    }
}

/// Greedy word wrap; words longer than a line are split.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(word.drain(..max_chars).collect());
        }
        let word: String = word.into_iter().collect();
        if word.is_empty() {
            continue;
        }

        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Positioned lines for each page.
fn paginate(lines: &[Line]) -> Vec<Vec<(i64, &Line)>> {
    let top = PAGE_HEIGHT - MARGIN;
    let mut pages: Vec<Vec<(i64, &Line)>> = vec![Vec::new()];
    let mut y = top;

    for line in lines {
        let mut next_y = y - line.leading();
        let page_is_empty = pages.last().is_some_and(|p| p.is_empty());
        if next_y < MARGIN && !page_is_empty {
            pages.push(Vec::new());
            next_y = top - line.size;
        }
        if let Some(page) = pages.last_mut() {
            page.push((next_y, line));
        }
        y = next_y;
    }

    pages
}

fn add_page(
    doc: &mut Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page: &[(i64, &Line)],
) -> AppResult<ObjectId> {
    let mut operations = Vec::with_capacity(page.len() * 5);
    for (y, line) in page {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![
                Object::Name(line.face.resource_name().as_bytes().to_vec()),
                Object::Integer(line.size),
            ],
        ));
        operations.push(Operation::new(
            "Td",
            vec![Object::Integer(MARGIN), Object::Integer(*y)],
        ));
        operations.push(Operation::new(
            "Tj",
            vec![Object::string_literal(encode_win_ansi(&line.text))],
        ));
        operations.push(Operation::new("ET", vec![]));
    }

    let encoded = Content { operations }
        .encode()
        .map_err(|e| AppError::DocumentError(format!("Failed to encode page content: {}", e)))?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

    Ok(doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => media_box(),
    }))
}

fn media_box() -> Vec<Object> {
    vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(PAGE_WIDTH),
        Object::Integer(PAGE_HEIGHT),
    ]
}

/// Encode text for the standard fonts' WinAnsi encoding, replacing anything unrepresentable with `?`.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2026}' => 0x85,
            '\u{20AC}' => 0x80,
            '\t' => b' ',
            c if (' '..='~').contains(&c) || ('\u{A0}'..='\u{FF}').contains(&c) => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn push_paragraphs(html: &mut String, text: &str, class: &str) {
    for paragraph in text.split("\n\n").map(str::trim).filter(|p| !p.is_empty()) {
        let paragraph = escape_html(paragraph).replace('\n', "<br>");
        if class.is_empty() {
            html.push_str(&format!("<p>{}</p>\n", paragraph));
        } else {
            html.push_str(&format!("<p class=\"{}\">{}</p>\n", class, paragraph));
        }
    }
}
