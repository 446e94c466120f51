//! Planet entity.

/// A planet that missions can target.
///
/// `distance_from_earth` is measured in light-years; both it and
/// `nearest_star` are optional in the catalog.
#[derive(Debug, Clone)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub distance_from_earth: Option<i64>,
    pub nearest_star: Option<String>,
}

impl Planet {
    /// Creates a new Planet instance.
    pub fn new(
        id: i64,
        name: String,
        distance_from_earth: Option<i64>,
        nearest_star: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            distance_from_earth,
            nearest_star,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planet_creation() {
        let planet = Planet::new(
            1,
            "Kepler-442b".to_string(),
            Some(1206),
            Some("Kepler-442".to_string()),
        );

        assert_eq!(planet.id, 1);
        assert_eq!(planet.name, "Kepler-442b");
        assert_eq!(planet.distance_from_earth, Some(1206));
        assert_eq!(planet.nearest_star.as_deref(), Some("Kepler-442"));
    }

    #[test]
    fn test_planet_without_optional_fields() {
        let planet = Planet::new(2, "X-17b".to_string(), None, None);

        assert!(planet.distance_from_earth.is_none());
        assert!(planet.nearest_star.is_none());
    }
}
