//! CSV report. Uses the `csv` crate for quoting; rows follow report order.

use crate::domain::{DomainError, Report};
use crate::ports::RendererPort;

#[derive(Debug, Default, Clone, Copy)]
pub struct CsvRenderer;

impl RendererPort for CsvRenderer {
    fn render(&self, report: &Report) -> Result<String, DomainError> {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.write_record(["name", "member_count", "creation_date", "invite_link"])
            .map_err(|e| DomainError::Render(e.to_string()))?;
        for chat in &report.chats {
            let members = chat.member_count.to_string();
            let created = chat.created.to_string();
            wtr.write_record([
                chat.title.as_str(),
                members.as_str(),
                created.as_str(),
                chat.invite_link.as_deref().unwrap_or(""),
            ])
            .map_err(|e| DomainError::Render(e.to_string()))?;
        }
        let bytes = wtr
            .into_inner()
            .map_err(|e| DomainError::Render(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| DomainError::Render(e.to_string()))
    }

    fn extension(&self) -> &'static str {
        "csv"
    }
}
