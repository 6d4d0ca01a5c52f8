//! Airport markers.
//!
//! The host feeds its airport catalog into the scene through
//! `spawn_airport_marker`; flights later resolve their endpoints against
//! these markers by ICAO code.

use foundation::math::{Ecef, Ellipsoid, Geodetic};
use scene::World;
use scene::entity::EntityId;
use scene::prefabs::spawn_marker;

pub const MARKER_SYMBOL_KEY: &str = "marker-symbol";
pub const AIRPORT_SYMBOL: &str = "airport";
pub const ICAO_CODE_KEY: &str = "ICAO Code";

#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    pub icao: String,
    pub name: String,
    pub iata: Option<String>,
    pub lon_deg: f64,
    pub lat_deg: f64,
    pub height_m: f64,
}

impl Airport {
    pub fn position(&self) -> Ecef {
        Ellipsoid::WGS84.to_ecef(Geodetic::from_degrees(
            self.lon_deg,
            self.lat_deg,
            self.height_m,
        ))
    }
}

/// Spawn an airport marker with the attribute set picking and lookups key
/// off of.
pub fn spawn_airport_marker(
    world: &mut World,
    airport: &Airport,
    pick_radius_m: f64,
) -> EntityId {
    let mut properties = vec![
        (MARKER_SYMBOL_KEY.to_owned(), AIRPORT_SYMBOL.to_owned()),
        ("marker-size".to_owned(), "small".to_owned()),
        ("Name".to_owned(), airport.name.clone()),
        (ICAO_CODE_KEY.to_owned(), airport.icao.clone()),
        ("Latitude".to_owned(), airport.lat_deg.to_string()),
        ("Longitude".to_owned(), airport.lon_deg.to_string()),
    ];
    if let Some(iata) = &airport.iata {
        properties.push(("Abbreviation".to_owned(), iata.clone()));
    }

    spawn_marker(world, airport.position(), pick_radius_m, properties)
}

#[cfg(test)]
mod tests {
    use super::{Airport, ICAO_CODE_KEY, spawn_airport_marker};
    use scene::World;
    use scene::components::FeatureKind;
    use scene::query::find_by_property;

    #[test]
    fn spawned_airport_is_resolvable_by_icao() {
        let mut world = World::new();
        let lax = Airport {
            icao: "KLAX".into(),
            name: "Los Angeles International".into(),
            iata: Some("LAX".into()),
            lon_deg: -118.4085,
            lat_deg: 33.9416,
            height_m: 38.0,
        };
        let entity = spawn_airport_marker(&mut world, &lax, 10_000.0);

        assert_eq!(
            find_by_property(&world, FeatureKind::Marker, ICAO_CODE_KEY, "KLAX"),
            Some(entity)
        );
        assert_eq!(world.marker_position(entity), Some(lax.position()));
        assert_eq!(
            world.properties(entity).and_then(|p| p.get("Abbreviation")),
            Some("LAX")
        );
    }
}
