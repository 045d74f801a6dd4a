//! Abstract UI gestures, decoupled from any rendering surface.

use crate::api::UploadFile;

/// One user gesture, dispatched to the controller.
///
/// The original page bound these as DOM listeners; here any event source
/// (terminal loop, test script) feeds the same enum through
/// [`PanelController::dispatch`](crate::controller::PanelController::dispatch).
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Submit the current question (button click or Enter keypress).
    Submit,
    /// Files picked through the file chooser.
    FilesChosen(Vec<UploadFile>),
    /// Files released onto the drop target.
    FilesDropped(Vec<UploadFile>),
    /// A drag entered the drop target.
    DragOver,
    /// A drag left the drop target without dropping.
    DragLeave,
    /// Re-run the status check.
    RefreshStatus,
}
