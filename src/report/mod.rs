pub mod json;
pub mod md;
pub mod text;

use crate::error::ShindanError;
use crate::types::catalog::Catalog;
use crate::types::outcome::DiagnosisReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
    Md,
}

pub fn render(
    report: &DiagnosisReport,
    catalog: &Catalog,
    format: OutputFormat,
) -> Result<String, ShindanError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(report, catalog)),
        OutputFormat::Json => json::to_json(report, catalog).map_err(ShindanError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report, catalog)),
    }
}
