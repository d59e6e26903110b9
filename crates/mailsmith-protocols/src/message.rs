//! Process-wide background messaging.
//!
//! The composer's overlay delegates privileged actions (opening the
//! dashboard) to a background task over a channel, mirroring how a browser
//! extension content script talks to its background worker.

use tokio::sync::oneshot;

use crate::template::Template;

/// A request handled by the background task.
#[derive(Debug)]
pub enum BackgroundRequest {
    /// Open the dashboard in a new browser tab.
    OpenDashboard,

    /// List templates known to the background process.
    ///
    /// Answered with an empty list; template storage lives with the
    /// dashboard backend, not here.
    GetTemplates {
        reply: oneshot::Sender<Vec<Template>>,
    },
}
