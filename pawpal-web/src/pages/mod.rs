mod booking;
mod home;
mod layout;
mod reviews;
mod services;

pub use booking::Booking;
pub use home::Home;
pub use layout::SiteLayout;
pub use reviews::Reviews;
pub use services::Services;
