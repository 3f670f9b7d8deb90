use crate::errors::{AppError, AppResult};

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Clone, Default)]
pub struct UploadedFile {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn display_name(&self) -> &str {
        self.filename.as_deref().unwrap_or("<unnamed>")
    }

    /// True when the declared content type or the leading bytes say PDF.
    pub fn is_pdf(&self) -> bool {
        let declared = self
            .content_type
            .as_deref()
            .unwrap_or("")
            .to_ascii_lowercase();
        declared.contains("application/pdf") || self.bytes.starts_with(PDF_MAGIC)
    }
}

pub struct PdfTextService;

impl PdfTextService {
    /// Extracts the text of every page of every file, in upload order.
    pub async fn extract_text(files: Vec<UploadedFile>, max_bytes: usize) -> AppResult<String> {
        Self::check_uploads(&files, max_bytes)?;

        log::info!("Extracting text from {} PDF file(s)", files.len());
        let text = tokio::task::spawn_blocking(move || -> AppResult<String> {
            let mut documents = Vec::with_capacity(files.len());
            for file in &files {
                documents.push(Self::extract_file(file)?);
            }
            Ok(documents.join("\n\n"))
        })
        .await
        .map_err(|e| AppError::ExtractionError(format!("PDF extraction aborted: {}", e)))??;

        log::info!("Extracted {} characters of text", text.chars().count());
        Ok(text)
    }

    pub fn check_uploads(files: &[UploadedFile], max_bytes: usize) -> AppResult<()> {
        if files.is_empty() {
            return Err(AppError::ValidationError(
                "At least one PDF file is required".to_string(),
            ));
        }

        let mut total = 0usize;
        for file in files {
            if file.bytes.is_empty() {
                return Err(AppError::ValidationError(format!(
                    "File {} is empty",
                    file.display_name()
                )));
            }
            if !file.is_pdf() {
                return Err(AppError::ValidationError(format!(
                    "File {} is not a PDF",
                    file.display_name()
                )));
            }
            total += file.bytes.len();
        }

        if total > max_bytes {
            return Err(AppError::ValidationError(format!(
                "Upload exceeds the {} byte limit",
                max_bytes
            )));
        }
        Ok(())
    }

    fn extract_file(file: &UploadedFile) -> AppResult<String> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(&file.bytes)
            .map_err(|e| AppError::from(e).context(&format!("Could not read {}", file.display_name())))?;

        log::debug!("{} has {} page(s)", file.display_name(), pages.len());
        Ok(pages
            .iter()
            .map(|page| page.trim())
            .filter(|page| !page.is_empty())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::{
        models::domain::{ContentSection, StudyContent},
        services::document_service::DocumentService,
    };

    fn file(name: &str, content_type: Option<&str>, bytes: &[u8]) -> UploadedFile {
        UploadedFile {
            filename: Some(name.to_string()),
            content_type: content_type.map(str::to_string),
            bytes: bytes.to_vec(),
        }
    }

    #[test]
    fn is_pdf_accepts_magic_bytes_or_content_type() {
        assert!(file("a.pdf", None, b"%PDF-1.7 ...").is_pdf());
        assert!(file("a.bin", Some("Application/PDF"), b"junk").is_pdf());
        assert!(!file("a.txt", Some("text/plain"), b"hello").is_pdf());
    }

    #[test]
    fn check_uploads_rejects_empty_request() {
        let err = PdfTextService::check_uploads(&[], 1024).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn check_uploads_rejects_non_pdf_files() {
        let files = vec![
            file("notes.pdf", None, b"%PDF-1.4"),
            file("notes.docx", Some("application/msword"), b"PK\x03\x04"),
        ];

        let err = PdfTextService::check_uploads(&files, 1024).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(msg) if msg.contains("notes.docx")));
    }

    #[test]
    fn check_uploads_rejects_empty_file() {
        let err = PdfTextService::check_uploads(&[file("x.pdf", Some("application/pdf"), b"")], 1024)
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(msg) if msg.contains("empty")));
    }

    #[test]
    fn check_uploads_enforces_total_size() {
        let files = vec![
            file("a.pdf", None, &[b"%PDF-".as_slice(), &[b'x'; 600]].concat()),
            file("b.pdf", None, &[b"%PDF-".as_slice(), &[b'x'; 600]].concat()),
        ];

        assert!(PdfTextService::check_uploads(&files, 4096).is_ok());
        let err = PdfTextService::check_uploads(&files, 1024).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(msg) if msg.contains("limit")));
    }

    #[tokio::test]
    async fn extract_text_reports_unreadable_pdf() {
        let files = vec![file("broken.pdf", None, b"%PDF-1.4\nnot really a pdf")];

        let err = PdfTextService::extract_text(files, 1024).await.unwrap_err();
        assert!(matches!(err, AppError::ExtractionError(_)));
    }

    #[tokio::test]
    async fn extract_text_joins_files_in_upload_order() {
        let section = |title: &str, text: &str| StudyContent {
            topic: vec![ContentSection {
                topic_title: title.to_string(),
                main_description: text.to_string(),
                subtopics: Vec::new(),
            }],
        };
        let first = DocumentService::render_pdf(&section("Alpha", "Opening lecture."), "Week 1", Utc::now())
            .expect("pdf should render");
        let second = DocumentService::render_pdf(&section("Omega", "Closing lecture."), "Week 2", Utc::now())
            .expect("pdf should render");
        let files = vec![
            file("week1.pdf", Some("application/pdf"), &first),
            file("week2.pdf", Some("application/pdf"), &second),
        ];

        let text = PdfTextService::extract_text(files, 1024 * 1024)
            .await
            .expect("both files should extract");

        let alpha = text.find("Alpha").expect("first file text");
        let omega = text.find("Omega").expect("second file text");
        assert!(alpha < omega);
        assert!(text.contains("\n\n"));
    }
}
