pub mod brownian;
pub mod cache;
pub mod params;
pub mod paths;
pub mod summary;
