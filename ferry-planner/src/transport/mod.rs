//! Journey-planning API integration.
//!
//! Client for a `transport.rest` (HAFAS) instance: stop lookup and bus
//! journey search, plus conversion of its JSON into domain journeys.

mod client;
mod convert;
mod error;
mod types;

pub use client::{JourneyQuery, TransportClient, TransportConfig};
pub use convert::{ConversionError, convert_journey, convert_journeys, first_stop_id};
pub use error::TransportError;
pub use types::{
    JourneyDto, JourneysResponse, LegDto, LineDto, LocationDto, PlaceDto, RemarkDto,
};
