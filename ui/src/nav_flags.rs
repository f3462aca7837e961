//! Overlay and scroll state of the navigation bar, plus its static link list.

/// A destination in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLinkEntry {
    pub label: &'static str,
    pub path: &'static str,
}

impl NavLinkEntry {
    /// Whether this entry should be highlighted for `current_path`.
    pub fn is_active(&self, current_path: &str) -> bool {
        is_active(self.path, current_path)
    }
}

/// The navigation destinations, in display order.
pub static NAV_LINKS: [NavLinkEntry; 4] = [
    NavLinkEntry { label: "Home", path: "/" },
    NavLinkEntry { label: "Shop", path: "/shop" },
    NavLinkEntry { label: "About", path: "/about" },
    NavLinkEntry { label: "Contact", path: "/contact" },
];

/// Exact path match. Nested paths do not activate their parent entry.
pub fn is_active(path: &str, current_path: &str) -> bool {
    path == current_path
}

/// Flags owned by one mounted navigation bar. All false on mount.
///
/// The mobile menu and the cart dropdown are independent: opening one leaves
/// the other as it was.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationFlags {
    pub scrolled: bool,
    pub mobile_menu_open: bool,
    pub cart_open: bool,
}

impl NavigationFlags {
    /// Whether a vertical scroll offset counts as scrolled.
    pub fn scrolled_at(offset: f64) -> bool {
        offset > 0.0
    }

    pub fn on_scroll(&mut self, offset: f64) {
        self.scrolled = Self::scrolled_at(offset);
    }

    /// Closes both overlays, whatever the new path is.
    pub fn on_route_change(&mut self, _new_path: &str) {
        self.close_overlays();
    }

    /// Following a navigation link closes both overlays, also when the link
    /// points at the page already shown and no route change follows.
    pub fn on_navigate(&mut self, _target: &str) {
        self.close_overlays();
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn toggle_cart(&mut self) {
        self.cart_open = !self.cart_open;
    }

    pub fn close_overlays(&mut self) {
        self.mobile_menu_open = false;
        self.cart_open = false;
    }

    /// The backdrop is shown while this holds.
    pub fn any_overlay_open(&self) -> bool {
        self.mobile_menu_open || self.cart_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Gesture {
        ToggleMenu,
        ToggleCart,
        Scroll(f64),
        Backdrop,
    }

    fn gesture() -> impl Strategy<Value = Gesture> {
        prop_oneof![
            Just(Gesture::ToggleMenu),
            Just(Gesture::ToggleCart),
            (0.0f64..2000.0).prop_map(Gesture::Scroll),
            Just(Gesture::Backdrop),
        ]
    }

    #[test]
    fn mount_state_is_all_closed() {
        let flags = NavigationFlags::default();
        assert!(!flags.scrolled);
        assert!(!flags.any_overlay_open());
    }

    #[test]
    fn scrolled_only_past_the_top() {
        let mut flags = NavigationFlags::default();
        flags.on_scroll(0.0);
        assert!(!flags.scrolled);
        flags.on_scroll(0.5);
        assert!(flags.scrolled);
        flags.on_scroll(0.0);
        assert!(!flags.scrolled);
    }

    #[test]
    fn both_overlays_can_be_open_at_once() {
        let mut flags = NavigationFlags::default();
        flags.toggle_mobile_menu();
        flags.toggle_cart();
        assert!(flags.mobile_menu_open && flags.cart_open);
    }

    #[test]
    fn route_change_closes_both_overlays() {
        let mut flags = NavigationFlags {
            scrolled: true,
            mobile_menu_open: true,
            cart_open: true,
        };
        flags.on_route_change("/shop");
        assert!(!flags.mobile_menu_open);
        assert!(!flags.cart_open);
        assert!(flags.scrolled);
    }

    #[test]
    fn following_a_link_to_the_current_page_closes_both_overlays() {
        let current = "/";
        let mut flags = NavigationFlags::default();
        flags.toggle_mobile_menu();
        flags.toggle_cart();
        let target = NAV_LINKS
            .iter()
            .find(|e| e.is_active(current))
            .map(|e| e.path)
            .unwrap();
        flags.on_navigate(target);
        assert!(!flags.any_overlay_open());
    }

    #[test]
    fn backdrop_closes_both_overlays() {
        let mut flags = NavigationFlags::default();
        flags.toggle_cart();
        assert!(flags.any_overlay_open());
        flags.close_overlays();
        assert!(!flags.any_overlay_open());
    }

    #[test]
    fn exactly_one_entry_is_active_for_a_known_route() {
        for entry in NAV_LINKS {
            let active: Vec<_> = NAV_LINKS
                .iter()
                .filter(|e| e.is_active(entry.path))
                .collect();
            assert_eq!(active, vec![&entry]);
        }
    }

    #[test]
    fn no_entry_is_active_for_an_unknown_route() {
        assert!(NAV_LINKS.iter().all(|e| !e.is_active("/checkout")));
        assert!(NAV_LINKS.iter().all(|e| !e.is_active("/shop/42")));
    }

    proptest! {
        #[test]
        fn toggles_only_touch_their_own_overlay(gestures in prop::collection::vec(gesture(), 0..40)) {
            let mut flags = NavigationFlags::default();
            for g in gestures {
                let before = flags;
                match g {
                    Gesture::ToggleMenu => {
                        flags.toggle_mobile_menu();
                        prop_assert_eq!(flags.cart_open, before.cart_open);
                        prop_assert_ne!(flags.mobile_menu_open, before.mobile_menu_open);
                    }
                    Gesture::ToggleCart => {
                        flags.toggle_cart();
                        prop_assert_eq!(flags.mobile_menu_open, before.mobile_menu_open);
                        prop_assert_ne!(flags.cart_open, before.cart_open);
                    }
                    Gesture::Scroll(offset) => {
                        flags.on_scroll(offset);
                        prop_assert_eq!(flags.mobile_menu_open, before.mobile_menu_open);
                        prop_assert_eq!(flags.cart_open, before.cart_open);
                    }
                    Gesture::Backdrop => {
                        flags.close_overlays();
                        prop_assert!(!flags.any_overlay_open());
                    }
                }
            }
            flags.on_route_change("/about");
            prop_assert!(!flags.mobile_menu_open);
            prop_assert!(!flags.cart_open);
        }

        #[test]
        fn is_active_is_idempotent(route in "/[a-z]{0,8}") {
            let first: Vec<bool> = NAV_LINKS.iter().map(|e| e.is_active(&route)).collect();
            let second: Vec<bool> = NAV_LINKS.iter().map(|e| e.is_active(&route)).collect();
            prop_assert_eq!(&first, &second);
            prop_assert!(first.iter().filter(|a| **a).count() <= 1);
        }
    }
}
