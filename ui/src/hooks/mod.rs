pub mod use_cart;
pub mod use_navigation_flags;
pub mod use_scroll_offset;
