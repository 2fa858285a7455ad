pub mod apartment_repo;

pub use apartment_repo::ApartmentRepo;
