//! Page modules

pub mod callback;
pub mod landing;
pub mod menu;
pub mod select;

pub use callback::AuthCallbackPage;
pub use landing::LandingPage;
pub use menu::MenuPage;
