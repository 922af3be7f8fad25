// Pages module: HTML surface for the demo frontend

pub mod controllers;

pub use controllers::configure;
