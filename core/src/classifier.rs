//! Classification stub — stands in for a real inference service.
//!
//! Only the interface shape matters: a fixed category→department mapping,
//! a bounded pseudo-random confidence, and a templated explanation.
//! Substituting real inference later leaves the rest of the core untouched.

use crate::{
    intake::{Category, Priority},
    rng::ComponentRng,
};
use serde::{Deserialize, Serialize};

/// Fallback department for categories with no dedicated owner.
pub const GENERAL_SERVICES: &str = "General Services";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub department: String,
    pub confidence: f64,
    pub note: String,
}

/// Department routing for a category.
pub fn department_for(category: Category) -> &'static str {
    match category {
        Category::Electricity => "Electricity Department",
        Category::Water => "Water Department",
        Category::Road => "Road Maintenance",
        Category::Waste => "Waste Management",
        Category::Other => GENERAL_SERVICES,
    }
}

/// Confidence is uniform in [0.7, 1.0) — tests check the range, never an
/// exact value. The stream is deterministic per session seed.
pub fn classify(category: Category, priority: Priority, rng: &mut ComponentRng) -> Classification {
    let confidence = 0.7 + rng.next_f64() * 0.3;
    Classification {
        department: department_for(category).to_string(),
        confidence,
        note: format!(
            "AI analyzed this {category} complaint and determined it requires {priority} priority attention."
        ),
    }
}
