//! Application use cases. Orchestrate domain logic via ports.

pub mod assembler;
pub mod auth_service;
pub mod creation_date;
pub mod enricher;
pub mod extractor;
pub mod invite;
pub mod report_service;

#[cfg(test)]
pub(crate) mod testing;

pub use assembler::{assemble, assemble_at};
pub use auth_service::AuthService;
pub use enricher::EnrichService;
pub use extractor::{extract, extract_detailed, ExtractMethod, Extraction};
pub use invite::{InviteChain, InviteStrategy};
pub use report_service::{ReportService, RunOutcome};
