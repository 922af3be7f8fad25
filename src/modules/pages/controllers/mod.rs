pub mod page_controller;

pub use page_controller::configure;
