use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// Non-success response from a flights endpoint, carrying the
    /// endpoint's message.
    #[error("{message}")]
    Endpoint { message: String },

    /// An expected airport marker is missing from the scene.
    #[error("airport {icao:?} is not on the map")]
    AirportNotFound { icao: String },
}

#[cfg(test)]
mod tests {
    use super::TrackerError;

    #[test]
    fn messages_are_human_readable() {
        let e = TrackerError::Endpoint {
            message: "The time difference cannot be more than 7 days.".into(),
        };
        assert_eq!(
            e.to_string(),
            "The time difference cannot be more than 7 days."
        );

        let e = TrackerError::AirportNotFound { icao: "KLAX".into() };
        assert_eq!(e.to_string(), "airport \"KLAX\" is not on the map");
    }
}
