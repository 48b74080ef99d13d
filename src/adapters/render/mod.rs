//! Report renderers. Implement RendererPort.

pub mod csv;
pub mod html;

pub use self::csv::CsvRenderer;
pub use self::html::HtmlRenderer;

use crate::domain::DomainError;
use crate::ports::RendererPort;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Html,
    Csv,
}

impl FromStr for ReportFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(ReportFormat::Html),
            "csv" => Ok(ReportFormat::Csv),
            other => Err(DomainError::Config(format!(
                "unknown report format '{}' (expected html or csv)",
                other
            ))),
        }
    }
}

pub fn renderer_for(format: ReportFormat) -> Arc<dyn RendererPort> {
    match format {
        ReportFormat::Html => Arc::new(HtmlRenderer),
        ReportFormat::Csv => Arc::new(CsvRenderer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_formats() {
        assert_eq!("HTML".parse::<ReportFormat>().unwrap(), ReportFormat::Html);
        assert_eq!(" csv ".parse::<ReportFormat>().unwrap(), ReportFormat::Csv);
        assert!("pdf".parse::<ReportFormat>().is_err());
        assert_eq!(renderer_for(ReportFormat::Csv).extension(), "csv");
    }
}
