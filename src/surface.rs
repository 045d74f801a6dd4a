//! The UI-adapter seam the controller mutates.
//!
//! Every region of the page the original markup exposed becomes one trait
//! method, so the flows can be exercised headlessly against a recording fake
//! and rendered by any concrete surface.

/// Visual tone of a status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Ready,
    NotReady,
}

/// Visual tone of the upload banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerTone {
    Success,
    Error,
}

/// A rendering surface for the panel.
///
/// Implementations must treat each method as targeting one fixed region;
/// the controller never mutates a region outside the flow that owns it.
pub trait Surface {
    /// API reachability indicator ("Online" / "Offline").
    fn set_api_status(&mut self, text: &str, tone: Tone);

    /// Vector store indicator ("Loaded" / "Not Loaded").
    fn set_vector_status(&mut self, text: &str, tone: Tone);

    /// Document count indicator.
    fn set_doc_count(&mut self, text: &str, tone: Tone);

    /// Highlight the drop target while a drag hovers over it.
    fn set_drop_hover(&mut self, active: bool);

    /// Show or hide the upload progress region.
    fn show_upload_progress(&mut self, visible: bool);

    /// Update the progress fill percentage and its label.
    fn set_upload_progress(&mut self, percent: f64, label: &str);

    /// Show the upload outcome banner.
    fn show_upload_banner(&mut self, message: &str, tone: BannerTone);

    /// Hide the upload outcome banner.
    fn hide_upload_banner(&mut self);

    /// Enable or disable the submit control.
    fn set_ask_enabled(&mut self, enabled: bool);

    /// Show or hide the query loading indicator.
    fn show_loading(&mut self, visible: bool);

    /// Write plain text into the answer region and make it visible.
    /// Errors and answers share this region; only the text differs.
    fn show_answer(&mut self, text: &str);

    /// Hide the answer region.
    fn hide_answer(&mut self);

    /// Current text of the question input.
    fn question_text(&self) -> String;

    /// Replace the question input's text (the user typing).
    fn set_question(&mut self, text: &str);

    /// Clear the question input.
    fn clear_question(&mut self);
}
