pub mod cancel;
pub mod limit;
