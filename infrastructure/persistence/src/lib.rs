pub mod cart {
    pub mod id_generator;
    pub mod repository;
}
pub mod catalog {
    pub mod repository;
}
