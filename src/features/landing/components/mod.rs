pub mod faq;
pub mod header;
pub mod sections;

pub use faq::Faq;
pub use header::LandingHeader;
pub use sections::{Features, Footer, Hero, HowItWorks, Impact, Testimonials};
