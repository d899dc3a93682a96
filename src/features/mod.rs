pub mod admin;
pub mod auth;
pub mod catalog;
pub mod categories;
pub mod contact;
pub mod products;
pub mod site_content;
pub mod testimonials;
pub mod uploads;
