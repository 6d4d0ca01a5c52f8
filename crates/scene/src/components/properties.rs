/// Tagged attributes on a feature, in insertion order.
///
/// The glue layer identifies airports by `("marker-symbol", "airport")` and
/// resolves them by `("ICAO Code", ...)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentProperties {
    pub pairs: Vec<(String, String)>,
}

impl ComponentProperties {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::ComponentProperties;

    #[test]
    fn get_returns_first_match() {
        let props = ComponentProperties::new(vec![
            ("ICAO Code".into(), "KLAX".into()),
            ("Name".into(), "Los Angeles International".into()),
        ]);
        assert_eq!(props.get("ICAO Code"), Some("KLAX"));
        assert_eq!(props.get("IATA"), None);
    }
}
