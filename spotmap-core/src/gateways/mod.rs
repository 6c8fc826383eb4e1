pub mod notify;
pub mod object_storage;
pub mod token_cache;
