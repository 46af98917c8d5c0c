pub mod analysis;
pub mod dashboard;
pub mod dispatch;
pub mod paper;
pub mod schema;
pub mod shared;
pub mod subject;
