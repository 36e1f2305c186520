pub mod backsolve;
pub mod check;
pub mod error;
pub mod io;
pub mod paths;
pub mod projection;
pub mod report;
pub mod scenario;
pub mod types;

pub use error::{ForecastError, Result};
