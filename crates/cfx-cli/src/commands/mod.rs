pub mod dispatch;
pub mod report;
pub mod session;
pub mod shared;
pub mod status;
pub mod sync;
pub mod view;
