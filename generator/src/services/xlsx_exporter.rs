//! Excel export of generated titles

use rust_xlsxwriter::{Format, Workbook};
use tracing::debug;

use crate::error::{GeneratorError, GeneratorResult};
use crate::traits::TitleExporter;

/// File name offered for the title download
pub const EXPORT_FILE_NAME: &str = "blog_titles.xlsx";

/// MIME type of the title download
pub const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Header of the single title column
pub const TITLE_COLUMN_HEADER: &str = "Blog Title";

/// Writes titles into a one-column xlsx workbook
#[derive(Debug, Clone, Default)]
pub struct XlsxTitleExporter;

impl XlsxTitleExporter {
    pub fn new() -> Self {
        Self
    }
}

impl TitleExporter for XlsxTitleExporter {
    fn file_name(&self) -> &'static str {
        EXPORT_FILE_NAME
    }

    fn content_type(&self) -> &'static str {
        XLSX_CONTENT_TYPE
    }

    fn export(&self, titles: &[String]) -> GeneratorResult<Vec<u8>> {
        if titles.is_empty() {
            return Err(GeneratorError::InvalidRequest {
                message: "No titles to export".to_string(),
            });
        }

        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.write_string_with_format(0, 0, TITLE_COLUMN_HEADER, &header_format)?;
        for (row, title) in titles.iter().enumerate() {
            worksheet.write_string(row as u32 + 1, 0, title)?;
        }
        worksheet.set_column_width(0, 70)?;

        let bytes = workbook.save_to_buffer()?;
        debug!(titles = titles.len(), bytes = bytes.len(), "Exported titles to xlsx");
        Ok(bytes)
    }
}
