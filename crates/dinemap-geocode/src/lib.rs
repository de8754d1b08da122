pub mod cache;
pub mod client;
pub mod error;
pub mod resolver;
mod throttle;
pub mod types;

pub use cache::{EvictionPolicy, GeocodeCache, NoEviction};
pub use client::NominatimClient;
pub use error::GeocodeError;
pub use resolver::{GeocodeRequest, Geocoder, DEFAULT_REGION_SUFFIX};
pub use types::{Candidate, Coordinates, Resolution};
