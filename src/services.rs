// src/services.rs

pub mod crm_forwarder;
pub mod scoring;
