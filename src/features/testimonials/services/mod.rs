mod testimonial_service;

pub use testimonial_service::TestimonialService;
