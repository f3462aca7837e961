use dioxus::prelude::*;

use crate::hooks::use_navigation_flags::close_for_navigation;
use crate::hooks::use_navigation_flags::use_navigation_flags;
use crate::Route;

/// How far the logo follows the pointer, as a share of its distance from the
/// logo's centre.
const MAGNET_STRENGTH: f64 = 0.15;

/// Offset of the logo for a pointer at (`x`, `y`) inside a box of
/// `width` × `height`, both in element coordinates.
pub fn magnetic_offset(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    (
        (x - width / 2.0) * MAGNET_STRENGTH,
        (y - height / 2.0) * MAGNET_STRENGTH,
    )
}

/// The logo's box in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LogoBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl LogoBox {
    /// Offset for a pointer given in client coordinates. Unlike element
    /// coordinates these don't depend on which child is under the pointer.
    pub fn offset_for(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        magnetic_offset(
            client_x - self.left,
            client_y - self.top,
            self.width,
            self.height,
        )
    }
}

/// The brand mark. Leans toward the pointer and springs back when it leaves.
#[component]
pub fn Logo(brand: String) -> Element {
    let flags = use_navigation_flags();
    let mut element = use_signal(|| None::<std::rc::Rc<MountedData>>);
    let mut bounds = use_signal(LogoBox::default);
    let mut offset = use_signal(|| (0.0, 0.0));
    let (dx, dy) = offset();

    // The bar moves with scrolling and resizing, so measure on every entry.
    let measure = move || async move {
        let Some(mounted) = element.peek().clone() else {
            return;
        };
        if let Ok(rect) = mounted.get_client_rect().await {
            bounds.set(LogoBox {
                left: rect.origin.x,
                top: rect.origin.y,
                width: rect.width(),
                height: rect.height(),
            });
        }
    };

    rsx! {
        div {
            class: "logo",
            style: format!("transform: translate({dx:.2}px, {dy:.2}px);"),
            onmounted: move |evt| {
                element.set(Some(evt.data()));
                measure()
            },
            onmouseenter: move |_| measure(),
            onmousemove: move |evt| {
                let point = evt.client_coordinates();
                offset.set(bounds().offset_for(point.x, point.y));
            },
            onmouseleave: move |_| offset.set((0.0, 0.0)),
            Link {
                to: Route::HomeScreen {},
                class: "logo-link",
                onclick: move |_| close_for_navigation(flags, "/"),
                span { class: "logo-text", "{brand}" }
                span { class: "logo-glow", "aria-hidden": "true" }
            }
        }
    }
}
