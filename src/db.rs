// src/db.rs

pub mod filter;
pub mod lead_repo;
pub mod property_repo;
pub mod seed;
pub mod service_repo;
pub mod store;

pub use lead_repo::LeadRepository;
pub use property_repo::PropertyRepository;
pub use service_repo::ServiceRepository;
