pub mod db;
pub mod error;
pub mod memory {
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
