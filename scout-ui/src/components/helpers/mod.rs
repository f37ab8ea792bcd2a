//! Common helper UI components

mod cover_image;
mod loading_spinner;
mod notice_banner;

pub use cover_image::CoverImage;
pub use loading_spinner::LoadingSpinner;
pub use notice_banner::NoticeBanner;
