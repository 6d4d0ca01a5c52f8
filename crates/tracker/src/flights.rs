//! The flight endpoints' data contract.
//!
//! Both endpoints answer with `{"flights": [...]}` on success and
//! `{"error": "..."}` with a non-success status otherwise. Transport is the
//! host's concern; this module only decodes the payloads.

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// One flight as the endpoints report it.
///
/// Airport codes are nullable: the upstream feed estimates them and leaves
/// them out when it cannot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub flight_id: String,
    pub departure_airport: Option<String>,
    pub arrival_airport: Option<String>,
    pub departure_time: String,
    pub arrival_time: String,
    pub icao24: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightsResponse {
    pub flights: Vec<FlightRecord>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Which end of a flight the airport form queried for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Place {
    Departure,
    Arrival,
}

/// Fallback when a failing endpoint's body carries no usable message.
pub const UNKNOWN_ENDPOINT_ERROR: &str = "An unknown error occurred.";

/// Decode an endpoint response: `ok` is whether the HTTP status was a
/// success, `body` the response text.
pub fn decode_flights(ok: bool, body: &str) -> Result<Vec<FlightRecord>, TrackerError> {
    if !ok {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| UNKNOWN_ENDPOINT_ERROR.to_owned());
        return Err(TrackerError::Endpoint { message });
    }

    let parsed: FlightsResponse =
        serde_json::from_str(body).map_err(|err| TrackerError::Endpoint {
            message: err.to_string(),
        })?;
    Ok(parsed.flights)
}

#[cfg(test)]
mod tests {
    use super::{Place, UNKNOWN_ENDPOINT_ERROR, decode_flights};
    use crate::error::TrackerError;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_success_payload() {
        let body = r#"{
            "flights": [{
                "flight_id": "AAL123",
                "departure_airport": "KLAX",
                "arrival_airport": null,
                "departure_time": "2024-03-01 08:15:00",
                "arrival_time": "2024-03-01 16:40:00",
                "icao24": "a1b2c3"
            }]
        }"#;
        let flights = decode_flights(true, body).expect("decoded");
        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].flight_id, "AAL123");
        assert_eq!(flights[0].departure_airport.as_deref(), Some("KLAX"));
        assert_eq!(flights[0].arrival_airport, None);
    }

    #[test]
    fn error_payload_surfaces_its_message() {
        let err = decode_flights(false, r#"{"error": "No flights found."}"#).unwrap_err();
        assert_eq!(
            err,
            TrackerError::Endpoint {
                message: "No flights found.".into()
            }
        );
    }

    #[test]
    fn unreadable_error_body_gets_fallback_message() {
        let err = decode_flights(false, "<html>502</html>").unwrap_err();
        assert_eq!(
            err,
            TrackerError::Endpoint {
                message: UNKNOWN_ENDPOINT_ERROR.into()
            }
        );
    }

    #[test]
    fn unreadable_success_body_is_an_endpoint_error() {
        assert!(matches!(
            decode_flights(true, "not json"),
            Err(TrackerError::Endpoint { .. })
        ));
    }

    #[test]
    fn place_matches_the_form_encoding() {
        assert_eq!(serde_json::to_string(&Place::Departure).unwrap(), "\"departure\"");
        assert_eq!(
            serde_json::from_str::<Place>("\"arrival\"").unwrap(),
            Place::Arrival
        );
    }
}
