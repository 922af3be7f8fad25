// Health module: liveness probe

pub mod controllers;

pub use controllers::configure;
