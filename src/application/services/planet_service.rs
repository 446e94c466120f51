//! Planet catalog service.

use crate::domain::entities::Planet;
use crate::domain::repositories::PlanetRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Read-only service over the planet catalog.
pub struct PlanetService<P: PlanetRepository> {
    planets: Arc<P>,
}

impl<P: PlanetRepository> PlanetService<P> {
    /// Creates a new planet service.
    pub fn new(planets: Arc<P>) -> Self {
        Self { planets }
    }

    /// Lists all planets.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_planets(&self) -> Result<Vec<Planet>, AppError> {
        self.planets.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockPlanetRepository;

    #[tokio::test]
    async fn test_list_planets() {
        let mut planets = MockPlanetRepository::new();

        let catalog = vec![
            Planet::new(1, "Mars".to_string(), Some(0), Some("Sol".to_string())),
            Planet::new(2, "Kepler-442b".to_string(), Some(1206), None),
        ];

        planets
            .expect_list()
            .times(1)
            .returning(move || Ok(catalog.clone()));

        let service = PlanetService::new(Arc::new(planets));

        let result = service.list_planets().await.unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "Mars");
    }
}
