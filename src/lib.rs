//! ragpanel — a terminal front-end for a document question-answering backend.
//!
//! The crate is a page controller rebuilt as an explicit object: network I/O
//! goes through the [`api::Backend`] seam, visible output through the
//! [`surface::Surface`] seam, and user gestures arrive as [`event::UiEvent`]s.
//! The shipped binary renders onto a colored terminal; the controller itself
//! is headless and test-driven with fakes.

pub mod api;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod format;
pub mod notify;
pub mod surface;
pub mod term;

pub use api::{ApiClient, Backend, UploadFile};
pub use controller::{PanelController, QueryPhase};
pub use error::PanelError;
pub use event::UiEvent;
pub use surface::Surface;
