pub mod cadre;
pub mod cli;
pub mod error;
pub mod io;
pub mod model;
pub mod predict;
pub mod scenario;
pub mod schema;
