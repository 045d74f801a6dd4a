//! Colored terminal rendering of the panel surface.

use colored::*;

use crate::surface::{BannerTone, Surface, Tone};

fn paint(text: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Ready => text.bright_green(),
        Tone::NotReady => text.bright_red(),
    }
}

/// An append-only terminal surface.
///
/// Each region change prints one line; hide operations print nothing since a
/// terminal transcript cannot be un-written. The question input is a plain
/// field the event loop fills in before dispatching a submit.
#[derive(Debug)]
pub struct TermSurface {
    question: String,
    ask_enabled: bool,
}

impl Default for TermSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TermSurface {
    pub fn new() -> Self {
        Self { question: String::new(), ask_enabled: true }
    }

    /// Whether the submit control is currently enabled.
    pub fn ask_enabled(&self) -> bool {
        self.ask_enabled
    }
}

impl Surface for TermSurface {
    fn set_api_status(&mut self, text: &str, tone: Tone) {
        println!("{} {}", "API:".bright_yellow(), paint(text, tone));
    }

    fn set_vector_status(&mut self, text: &str, tone: Tone) {
        println!("{} {}", "Vector store:".bright_yellow(), paint(text, tone));
    }

    fn set_doc_count(&mut self, text: &str, tone: Tone) {
        println!("{} {}", "Documents:".bright_yellow(), paint(text, tone));
    }

    fn set_drop_hover(&mut self, _active: bool) {
        // No drag surface on a terminal.
    }

    fn show_upload_progress(&mut self, visible: bool) {
        if visible {
            println!("{}", "Uploading...".bright_blue());
        }
    }

    fn set_upload_progress(&mut self, percent: f64, label: &str) {
        println!("  [{percent:>5.1}%] {}", label.bright_white());
    }

    fn show_upload_banner(&mut self, message: &str, tone: BannerTone) {
        match tone {
            BannerTone::Success => println!("{}", message.bright_green()),
            BannerTone::Error => println!("{}", message.bright_red()),
        }
    }

    fn hide_upload_banner(&mut self) {}

    fn set_ask_enabled(&mut self, enabled: bool) {
        self.ask_enabled = enabled;
    }

    fn show_loading(&mut self, visible: bool) {
        if visible {
            println!("{}", "Thinking...".dimmed());
        }
    }

    fn show_answer(&mut self, text: &str) {
        println!("{}", "Answer:".bright_green());
        println!("{text}");
    }

    fn hide_answer(&mut self) {}

    fn question_text(&self) -> String {
        self.question.clone()
    }

    fn set_question(&mut self, text: &str) {
        self.question = text.to_string();
    }

    fn clear_question(&mut self) {
        self.question.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_field_roundtrips() {
        let mut surface = TermSurface::new();
        surface.set_question("what is a vector store?");
        assert_eq!(surface.question_text(), "what is a vector store?");
        surface.clear_question();
        assert_eq!(surface.question_text(), "");
    }

    #[test]
    fn ask_enabled_tracks_setter() {
        let mut surface = TermSurface::new();
        assert!(surface.ask_enabled());
        surface.set_ask_enabled(false);
        assert!(!surface.ask_enabled());
        surface.set_ask_enabled(true);
        assert!(surface.ask_enabled());
    }

    #[test]
    fn print_paths_do_not_panic() {
        let mut surface = TermSurface::new();
        surface.set_api_status("Online", Tone::Ready);
        surface.set_vector_status("Not Loaded", Tone::NotReady);
        surface.set_doc_count("3 documents", Tone::Ready);
        surface.show_upload_progress(true);
        surface.set_upload_progress(50.0, "Uploading notes.pdf...");
        surface.show_upload_banner("Upload failed: boom", BannerTone::Error);
        surface.show_upload_banner("Successfully uploaded 1 file(s). Processing documents...", BannerTone::Success);
        surface.show_loading(true);
        surface.show_answer("42");
        surface.show_upload_progress(false);
        surface.show_loading(false);
        surface.hide_answer();
        surface.hide_upload_banner();
        surface.set_drop_hover(true);
    }
}
