pub mod hexastore;
pub mod indexing {
    pub mod dictionary;
    pub mod hexa_index;
}
