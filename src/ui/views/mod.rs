pub mod cleanup;
pub mod zones;
