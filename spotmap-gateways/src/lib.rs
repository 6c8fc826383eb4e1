pub mod notify;
pub mod s3;
pub mod token_cache;
