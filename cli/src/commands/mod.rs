pub mod call;
pub mod host;
pub mod list;
pub mod serve;
