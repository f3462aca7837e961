//! Shared components of the storefront shell. The navigation bar and the cart
//! dropdown hold the behavior; the rest are presentational pieces.
pub mod cart_dropdown;
pub mod cart_icon;
pub mod cart_item;
pub mod effects;
pub mod empty_state;
pub mod logo;
pub mod mobile_menu;
pub mod nav_link;
pub mod navbar;
pub mod product_card;
