//! The panel controller: three backend flows reflected into a surface.
//!
//! All network I/O goes through the injected [`Backend`]; all visible
//! outcomes go through the injected [`Surface`]. Failures never escape a
//! flow boundary — each one degrades to a surface change and a log line.

use std::time::Duration;

use tracing::{debug, error, warn};

use crate::api::{Backend, UploadFile};
use crate::error::PanelError;
use crate::event::UiEvent;
use crate::surface::{BannerTone, Surface, Tone};

/// Fixed settle delay before the post-upload status re-check.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(2);

/// Stand-in shown in the document count region. The status endpoint does not
/// report a count, so this is a deliberate placeholder, not computed data.
const DOC_COUNT_PLACEHOLDER: &str = "3 documents";

/// Where the query flow currently is.
///
/// Idle is both initial and terminal; the flow is re-entrant and has no
/// cancellation. A question fired while another is still in flight is not
/// guarded against — the later response can be overwritten by the earlier
/// one's late arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryPhase {
    Idle,
    Submitting,
    Answered,
    Errored,
}

/// The page controller, generic over its two injected dependencies.
pub struct PanelController<B, S> {
    backend: B,
    surface: S,
    settle_delay: Duration,
    query_phase: QueryPhase,
}

impl<B: Backend, S: Surface> PanelController<B, S> {
    pub fn new(backend: B, surface: S) -> Self {
        Self {
            backend,
            surface,
            settle_delay: DEFAULT_SETTLE_DELAY,
            query_phase: QueryPhase::Idle,
        }
    }

    /// Override the post-upload settle delay (default 2 s).
    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Run the initial status check. Call once after construction.
    pub async fn init(&mut self) {
        self.check_system_status().await;
    }

    pub fn phase(&self) -> QueryPhase {
        self.query_phase
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Route one gesture to its flow.
    pub async fn dispatch(&mut self, event: UiEvent) {
        match event {
            UiEvent::Submit => self.ask_question().await,
            UiEvent::FilesChosen(files) => self.handle_file_upload(files).await,
            UiEvent::FilesDropped(files) => {
                self.surface.set_drop_hover(false);
                self.handle_file_upload(files).await;
            }
            UiEvent::DragOver => self.surface.set_drop_hover(true),
            UiEvent::DragLeave => self.surface.set_drop_hover(false),
            UiEvent::RefreshStatus => self.check_system_status().await,
        }
    }

    // -----------------------------------------------------------------------
    // Status flow
    // -----------------------------------------------------------------------

    /// Fetch the root status endpoint and reflect it into the indicators.
    ///
    /// Failures are terminal to this call: the API indicator degrades to
    /// Offline, the error is logged, nothing is retried and nothing escapes.
    /// The vector indicator keeps its previous value on failure.
    pub async fn check_system_status(&mut self) {
        match self.backend.fetch_status().await {
            Ok(snapshot) => {
                self.surface.set_api_status("Online", Tone::Ready);
                if snapshot.vector_store_loaded {
                    self.surface.set_vector_status("Loaded", Tone::Ready);
                } else {
                    self.surface.set_vector_status("Not Loaded", Tone::NotReady);
                }
                self.surface.set_doc_count(DOC_COUNT_PLACEHOLDER, Tone::Ready);
            }
            Err(e) => {
                warn!(error = %e, "status check failed");
                self.surface.set_api_status("Offline", Tone::NotReady);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Upload flow
    // -----------------------------------------------------------------------

    /// Upload a batch of files strictly in order, one request in flight at a
    /// time. The batch is all-or-abort-on-first-failure: the first failed
    /// file stops everything after it.
    ///
    /// On full success the status check is re-run after [`Self::settle_delay`]
    /// so the server-side ingestion has a moment to catch up.
    pub async fn handle_file_upload(&mut self, files: Vec<UploadFile>) {
        if files.is_empty() {
            return;
        }

        let total = files.len();
        self.surface.show_upload_progress(true);
        self.surface.hide_upload_banner();

        for (index, file) in files.iter().enumerate() {
            let percent = (index + 1) as f64 / total as f64 * 100.0;
            self.surface.set_upload_progress(percent, &format!("Uploading {}...", file.name));

            match self.backend.upload_file(file).await {
                Ok(receipt) => {
                    debug!(file = %file.name, file_id = ?receipt.file_id, "file accepted");
                }
                Err(e) => {
                    error!(error = %e, file = %file.name, "upload failed, aborting batch");
                    self.surface.show_upload_progress(false);
                    self.surface.show_upload_banner(
                        &format!("Upload failed: {e}"),
                        BannerTone::Error,
                    );
                    return;
                }
            }
        }

        self.surface.show_upload_progress(false);
        self.surface.show_upload_banner(
            &format!("Successfully uploaded {total} file(s). Processing documents..."),
            BannerTone::Success,
        );

        // Loose synchronization point: server-side processing is asynchronous,
        // so the re-read happens after a fixed delay rather than a signal.
        tokio::time::sleep(self.settle_delay).await;
        self.check_system_status().await;
    }

    // -----------------------------------------------------------------------
    // Query flow
    // -----------------------------------------------------------------------

    /// Submit the current input text as a question.
    ///
    /// Empty or whitespace-only input is a no-op — no request, no surface
    /// change. Success writes the answer and clears the input; failure writes
    /// `Error: {message}` into the same region and preserves the input so the
    /// user can retry. The submit control is re-enabled and the loading
    /// indicator hidden exactly once in every branch.
    pub async fn ask_question(&mut self) {
        let question = self.surface.question_text().trim().to_string();
        if question.is_empty() {
            return;
        }

        self.query_phase = QueryPhase::Submitting;
        self.surface.set_ask_enabled(false);
        self.surface.show_loading(true);
        self.surface.hide_answer();

        match self.backend.submit_query(&question).await {
            Ok(response) => {
                debug!(
                    processing_time = ?response.processing_time,
                    documents_used = ?response.documents_used,
                    chunks_retrieved = ?response.chunks_retrieved,
                    "query answered"
                );
                self.query_phase = QueryPhase::Answered;
                self.surface.show_answer(&response.answer);
                self.surface.clear_question();
            }
            Err(e) => {
                error!(error = %e, "query failed");
                self.query_phase = QueryPhase::Errored;
                self.surface.show_answer(&format!("Error: {e}"));
            }
        }

        // Unconditional cleanup: runs once whichever branch was taken.
        self.surface.set_ask_enabled(true);
        self.surface.show_loading(false);
        self.query_phase = QueryPhase::Idle;
    }
}

/// Convenience for embedders that want the raw error text a flow would have
/// rendered, without a surface.
pub fn render_error(err: &PanelError) -> String {
    format!("Error: {err}")
}
