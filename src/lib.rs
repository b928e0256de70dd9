mod config;
mod error;
mod export;
mod literal;
mod raster;

#[cfg(test)]
mod test_util;

pub use config::*;
pub use error::*;
pub use export::*;
pub use literal::*;
pub use raster::*;
