//! Page navigation seam.
//!
//! The HTTP client and the auth service force navigations (401 handling,
//! logout). They go through [`Navigator`] so the browser, native shells and
//! tests can each decide what a navigation means.

use std::sync::{Arc, Mutex};

pub trait Navigator: Send + Sync + 'static {
    /// Navigate to `path`, replacing the current page.
    fn navigate(&self, path: &str);
}

/// Full page navigation through `window.location` on the web; a log line on
/// native targets where there is no page to leave.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(path) {
                    tracing::error!("Failed to navigate to {}: {:?}", path, e);
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::info!("Navigation requested: {}", path);
        }
    }
}

/// Records navigation targets instead of performing them.
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    visits: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().map(|v| v.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<String> {
        self.visits().pop()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        if let Ok(mut visits) = self.visits.lock() {
            visits.push(path.to_string());
        }
    }
}
