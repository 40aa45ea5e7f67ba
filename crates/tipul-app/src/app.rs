use std::sync::Arc;

use tracing::debug;

use tipul_auth::session::Session;
use tipul_data::directory::Directory;
use tipul_router::resolve::{Resolution, Screen, resolve};
use tipul_router::router::HashRouter;

/// The application shell: owns the session, the router, and the directory
/// handle, and decides which screen is mounted for the current identity
/// and path.
pub struct App {
    pub session: Session,
    pub router: HashRouter,
    directory: Arc<dyn Directory>,
}

impl App {
    pub fn new(directory: Arc<dyn Directory>) -> Self {
        App {
            session: Session::new(directory.clone()),
            router: HashRouter::new(),
            directory,
        }
    }

    pub fn directory(&self) -> &dyn Directory {
        self.directory.as_ref()
    }

    /// Run the resolver against the current path, applying redirects until
    /// a screen renders. The resolver never redirects to the path it was
    /// handed, so this settles in at most two passes; the same-target
    /// guard keeps navigation idempotent regardless.
    pub fn settle(&self) -> Screen {
        loop {
            let route = self.router.current();
            match resolve(self.session.user(), &route) {
                Resolution::Render(screen) => return screen,
                Resolution::Redirect(target) => {
                    if route.path() == target {
                        // Already at the redirect target; mount its screen
                        // directly instead of re-navigating.
                        return if self.session.is_authenticated() {
                            Screen::Dashboard
                        } else {
                            Screen::Login
                        };
                    }
                    debug!(from = route.path(), to = %target, "redirecting");
                    self.router.navigate(&target);
                }
            }
        }
    }
}
