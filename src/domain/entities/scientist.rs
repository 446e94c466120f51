//! Scientist entity.

/// A scientist who can be assigned to missions.
#[derive(Debug, Clone)]
pub struct Scientist {
    pub id: i64,
    pub name: String,
    pub field_of_study: String,
}

impl Scientist {
    /// Creates a new Scientist instance.
    pub fn new(id: i64, name: String, field_of_study: String) -> Self {
        Self {
            id,
            name,
            field_of_study,
        }
    }
}

/// Input data for creating a new scientist.
#[derive(Debug, Clone)]
pub struct NewScientist {
    pub name: String,
    pub field_of_study: String,
}

/// Partial update for an existing scientist.
///
/// `None` fields are left unchanged. Only fields listed here can be
/// changed through the API.
#[derive(Debug, Clone, Default)]
pub struct ScientistPatch {
    pub name: Option<String>,
    pub field_of_study: Option<String>,
}

impl ScientistPatch {
    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.field_of_study.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scientist_creation() {
        let scientist = Scientist::new(1, "Ada".to_string(), "Astrophysics".to_string());

        assert_eq!(scientist.id, 1);
        assert_eq!(scientist.name, "Ada");
        assert_eq!(scientist.field_of_study, "Astrophysics");
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(ScientistPatch::default().is_empty());

        let patch = ScientistPatch {
            name: Some("Grace".to_string()),
            field_of_study: None,
        };
        assert!(!patch.is_empty());
    }
}
