pub mod controller;
pub mod export;
pub mod timeline;

pub use controller::Session;
pub use timeline::Timeline;
