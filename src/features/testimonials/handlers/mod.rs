mod testimonial_handler;

pub use testimonial_handler::*;
