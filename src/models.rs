// src/models.rs

pub mod lead;
pub mod property;
pub mod seo;
pub mod service;
