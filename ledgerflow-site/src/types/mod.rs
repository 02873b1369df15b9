pub mod datetime;
pub mod response;

pub use datetime::IsoTimestamp;
pub use response::ApiResponse;
