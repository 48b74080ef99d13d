//! End-to-end run: extract ids -> authenticate -> enrich -> assemble -> render -> write.
//!
//! - No remote call is made when the payload yields no identifiers
//! - Input and auth failures abort the run; per-chat failures never do
//! - A run with zero enriched chats writes nothing and is reported as its own outcome

use crate::domain::DomainError;
use crate::ports::{PayloadSourcePort, RendererPort, ReportSinkPort};
use crate::usecases::assembler::assemble;
use crate::usecases::auth_service::AuthService;
use crate::usecases::enricher::EnrichService;
use crate::usecases::extractor::extract_detailed;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// How a run ended, when it did not abort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Report written with `included` of `requested` identifiers.
    Reported {
        requested: usize,
        included: usize,
        path: PathBuf,
    },
    /// Every identifier was skipped; no report was produced.
    NothingEnriched { requested: usize },
}

pub struct ReportService {
    auth: AuthService,
    enricher: EnrichService,
    renderer: Arc<dyn RendererPort>,
    sink: Arc<dyn ReportSinkPort>,
}

impl ReportService {
    pub fn new(
        auth: AuthService,
        enricher: EnrichService,
        renderer: Arc<dyn RendererPort>,
        sink: Arc<dyn ReportSinkPort>,
    ) -> Self {
        Self {
            auth,
            enricher,
            renderer,
            sink,
        }
    }

    /// Read the payload from `source`, then [`run`](Self::run). A read failure is an input error.
    pub async fn run_from(&self, source: &dyn PayloadSourcePort) -> Result<RunOutcome, DomainError> {
        let payload = source.read_payload().await.map_err(|e| match e {
            DomainError::Input(msg) => DomainError::Input(msg),
            other => DomainError::Input(other.to_string()),
        })?;
        self.run(&payload).await
    }

    pub async fn run(&self, payload: &str) -> Result<RunOutcome, DomainError> {
        let extraction = extract_detailed(payload);
        if extraction.ids.is_empty() {
            return Err(DomainError::Input(
                "no valid chat IDs found (expected a JSON list such as [-1001234567890, -1009876543210])"
                    .into(),
            ));
        }
        let requested = extraction.ids.len();
        info!(count = requested, method = ?extraction.method, "found chat IDs");

        self.auth.authenticate().await?;

        info!(count = requested, "processing chats");
        let records = self.enricher.enrich_all(&extraction.ids).await;
        if records.is_empty() {
            warn!(requested, "no chat could be processed, skipping report");
            return Ok(RunOutcome::NothingEnriched { requested });
        }

        let report = assemble(records);
        let document = self.renderer.render(&report)?;
        let path = self.sink.write(&document).await?;
        info!(
            included = report.len(),
            requested,
            path = %path.display(),
            "report generated"
        );

        Ok(RunOutcome::Reported {
            requested,
            included: report.len(),
            path,
        })
    }
}
