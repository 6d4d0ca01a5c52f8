//! The tracker controller: one instance per widget, driven synchronously by
//! pick events and endpoint responses.

use foundation::bounds::BoundingSphere;
use foundation::math::Ecef;
use routes::arc::{ArcParams, distance, generate_arc};
use routes::path::{FlightPaths, PathStyle, spawn_flight_path};
use scene::World;
use scene::components::{FeatureKind, Rgba};
use scene::picking::PickHit;
use scene::query::find_by_property;
use tracing::{debug, warn};

use crate::airports::{AIRPORT_SYMBOL, ICAO_CODE_KEY, MARKER_SYMBOL_KEY};
use crate::alerts::{AlertLevel, AlertSink};
use crate::camera::CameraFlight;
use crate::config::TrackerConfig;
use crate::error::TrackerError;
use crate::flights::{FlightRecord, Place};

pub const NO_FLIGHTS_MESSAGE: &str = "No flights found.";

#[derive(Debug, Default)]
pub struct FlightTracker {
    config: TrackerConfig,
    paths: FlightPaths,
}

impl FlightTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            paths: FlightPaths::new(),
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn paths(&self) -> &FlightPaths {
        &self.paths
    }

    /// React to a pick on the globe.
    ///
    /// Returns the ICAO code to push into the airport form field when the
    /// picked entity is an airport marker; any other hit is ignored.
    pub fn handle_pick(&self, world: &World, hit: &PickHit) -> Option<String> {
        let props = world.properties(hit.entity)?;
        if props.get(MARKER_SYMBOL_KEY) != Some(AIRPORT_SYMBOL) {
            return None;
        }
        props.get(ICAO_CODE_KEY).map(str::to_owned)
    }

    /// Full airport-query response handling: alert on failure, otherwise
    /// draw and return the camera flight to the queried airport.
    pub fn process_airport_response(
        &mut self,
        world: &mut World,
        alerts: &mut dyn AlertSink,
        response: Result<Vec<FlightRecord>, TrackerError>,
        place: Place,
    ) -> Option<CameraFlight> {
        let shown = response.and_then(|flights| {
            self.show_airport_flights(world, alerts, flights, place)
        });
        match shown {
            Ok(camera) => camera,
            Err(err) => {
                warn!(%err, "airport query failed");
                alerts.alert(AlertLevel::Danger, &err.to_string());
                None
            }
        }
    }

    /// Full aircraft-track response handling.
    pub fn process_aircraft_response(
        &mut self,
        world: &mut World,
        alerts: &mut dyn AlertSink,
        response: Result<Vec<FlightRecord>, TrackerError>,
    ) -> Option<CameraFlight> {
        match response {
            Ok(flights) => self.show_aircraft_flights(world, alerts, flights),
            Err(err) => {
                warn!(%err, "aircraft query failed");
                alerts.alert(AlertLevel::Danger, &err.to_string());
                None
            }
        }
    }

    /// Replace the drawn paths with an airport query's flights and frame
    /// the queried airport.
    ///
    /// An empty batch leaves the scene untouched and raises an Info alert.
    /// A missing target airport marker is an error, surfaced after the
    /// drawable flights have been added.
    pub fn show_airport_flights(
        &mut self,
        world: &mut World,
        alerts: &mut dyn AlertSink,
        flights: Vec<FlightRecord>,
        place: Place,
    ) -> Result<Option<CameraFlight>, TrackerError> {
        if flights.is_empty() {
            alerts.alert(AlertLevel::Info, NO_FLIGHTS_MESSAGE);
            return Ok(None);
        }

        self.paths.clear(world);
        self.add_flight_paths(world, &flights, Rgba::RED);

        let target = match place {
            Place::Departure => flights[0].departure_airport.as_deref(),
            Place::Arrival => flights[0].arrival_airport.as_deref(),
        }
        .unwrap_or_default();

        let position = find_by_property(world, FeatureKind::Marker, ICAO_CODE_KEY, target)
            .and_then(|entity| world.marker_position(entity))
            .ok_or_else(|| TrackerError::AirportNotFound {
                icao: target.to_owned(),
            })?;

        let sphere =
            BoundingSphere::from_center_radius(position, self.config.airport_frame_radius_m);
        Ok(Some(CameraFlight::frame(sphere, &self.config)))
    }

    /// Replace the drawn paths with a tracked aircraft's flights and frame
    /// all of them at once.
    pub fn show_aircraft_flights(
        &mut self,
        world: &mut World,
        alerts: &mut dyn AlertSink,
        flights: Vec<FlightRecord>,
    ) -> Option<CameraFlight> {
        if flights.is_empty() {
            alerts.alert(AlertLevel::Info, NO_FLIGHTS_MESSAGE);
            return None;
        }

        self.paths.clear(world);
        self.add_flight_paths(world, &flights, Rgba::YELLOW);

        let sphere = BoundingSphere::from_points(&self.paths.endpoints(world))?;
        Some(CameraFlight::frame(sphere, &self.config))
    }

    /// Add one path per drawable flight.
    ///
    /// Per-flight failures (unknown airports, degenerate arcs, duplicate
    /// ids) skip that flight and keep the batch going.
    fn add_flight_paths(&mut self, world: &mut World, flights: &[FlightRecord], color: Rgba) {
        for flight in flights {
            let (Some(dep), Some(arr)) = (
                flight.departure_airport.as_deref(),
                flight.arrival_airport.as_deref(),
            ) else {
                debug!(flight = %flight.flight_id, "no airport estimate, skipping flight");
                continue;
            };

            let Some(dep_pos) = self.airport_position(world, dep) else {
                debug!(flight = %flight.flight_id, airport = dep, "airport not on map, skipping flight");
                continue;
            };
            let Some(arr_pos) = self.airport_position(world, arr) else {
                debug!(flight = %flight.flight_id, airport = arr, "airport not on map, skipping flight");
                continue;
            };

            let params = ArcParams {
                height_offset_m: self.config.height_offset_m,
                sample_spacing_m: self.config.sample_spacing_m,
            };
            let vertices = match generate_arc(dep_pos, arr_pos, params) {
                Ok(vertices) => vertices,
                Err(err) => {
                    warn!(flight = %flight.flight_id, %err, "arc generation failed, skipping flight");
                    continue;
                }
            };

            let key = format!("flight-{}", flight.flight_id);
            let properties = vec![
                ("name".to_owned(), format!("Flight {}", flight.flight_id)),
                ("Departure Airport".to_owned(), dep.to_owned()),
                ("Arrival Airport".to_owned(), arr.to_owned()),
                ("Departure Time".to_owned(), flight.departure_time.clone()),
                ("Arrival Time".to_owned(), flight.arrival_time.clone()),
                (
                    "Distance".to_owned(),
                    format!("{:.2} meters", distance(dep_pos, arr_pos)),
                ),
                ("Aircraft ID (ICAO24)".to_owned(), flight.icao24.clone()),
            ];
            let style = PathStyle {
                width: self.config.path_width,
                color,
            };
            let Some(entity) = spawn_flight_path(world, &key, vertices, style, properties) else {
                debug!(key = %key, "flight already on the map, skipping");
                continue;
            };
            self.paths.push(entity);
        }
    }

    fn airport_position(&self, world: &World, icao: &str) -> Option<Ecef> {
        let entity = find_by_property(world, FeatureKind::Marker, ICAO_CODE_KEY, icao)?;
        world.marker_position(entity)
    }
}
