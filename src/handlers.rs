// src/handlers.rs

pub mod leads;
pub mod properties;
pub mod seo;
pub mod services;
pub mod system;
