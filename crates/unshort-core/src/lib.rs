pub mod config;
pub mod logging;

pub mod column;
pub mod error;
pub mod naming;
pub mod pipeline;
pub mod resolve;
pub mod table;
pub mod transform;
