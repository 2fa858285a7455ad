pub mod apartments;
