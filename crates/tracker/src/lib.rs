//! Event-driven glue between the flight endpoints, the scene, and the
//! camera: decode flight batches, draw their arcs, frame the result, and
//! surface failures as user-facing alerts.

pub mod airports;
pub mod alerts;
pub mod camera;
pub mod config;
pub mod error;
pub mod flights;
pub mod tracker;

pub use alerts::{Alert, AlertLevel, AlertLog, AlertSink};
pub use camera::CameraFlight;
pub use config::TrackerConfig;
pub use error::TrackerError;
pub use flights::{FlightRecord, Place, decode_flights};
pub use tracker::FlightTracker;
