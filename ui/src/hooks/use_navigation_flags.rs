use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

use crate::nav_flags::NavigationFlags;

/// The navigation bar's flags. The shell that provides them owns them: they
/// start all false on mount and are dropped with it.
pub type SharedNavigationFlags = Signal<NavigationFlags>;

/// Creates fresh flags and shares them with every component below the caller.
pub fn use_navigation_flags_provider() -> SharedNavigationFlags {
    use_context_provider(|| Signal::new(NavigationFlags::default()))
}

pub fn use_navigation_flags() -> SharedNavigationFlags {
    use_context::<SharedNavigationFlags>()
}

/// Closes the overlays when a navigation link is followed. A link to the page
/// already shown never changes the route, so this can't wait for one.
pub fn close_for_navigation(mut flags: SharedNavigationFlags, target: &str) {
    if flags.peek().any_overlay_open() {
        debug!("followed link to {target}, closing overlays");
    }
    flags.write().on_navigate(target);
}
