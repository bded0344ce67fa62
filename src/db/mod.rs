pub mod internal_key;
pub mod internal_key_comparator;
