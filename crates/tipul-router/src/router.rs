use tokio::sync::watch;
use tracing::debug;

use crate::path::RoutePath;

/// Single source of truth for "where the app currently is", driven by the
/// location fragment. Calling [`HashRouter::navigate`] is the only way the
/// path changes besides the user editing the fragment directly, which the
/// hosting shell feeds through `navigate` as well.
pub struct HashRouter {
    fragment: watch::Sender<String>,
}

impl HashRouter {
    /// Router positioned at the root path.
    pub fn new() -> Self {
        Self::with_fragment("/")
    }

    pub fn with_fragment(fragment: &str) -> Self {
        let (tx, _rx) = watch::channel(fragment.to_string());
        HashRouter { fragment: tx }
    }

    /// Set the location fragment. Every call notifies subscribers, even
    /// when the fragment is unchanged; rapid navigation is not debounced.
    pub fn navigate(&self, to: &str) {
        debug!(to, "navigate");
        self.fragment.send_replace(to.to_string());
    }

    /// The current fragment, parsed.
    pub fn current(&self) -> RoutePath {
        RoutePath::parse(&self.fragment.borrow())
    }

    /// Fragment-change notifications for the lifetime of the application;
    /// dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.fragment.subscribe()
    }
}

impl Default for HashRouter {
    fn default() -> Self {
        Self::new()
    }
}
