// This file makes the screen modules available to the rest of the application.

pub mod about;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod shop;
