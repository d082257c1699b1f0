// egui rendering for each destination
pub mod article;
pub mod category;
pub mod head;
pub mod home;
pub mod image;
pub mod navbar;
pub mod project;
pub mod viewport;

pub use head::EguiHead;
pub use image::ImageResolver;
pub use viewport::EguiViewport;
