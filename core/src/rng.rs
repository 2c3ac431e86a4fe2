//! Deterministic random number generation.
//!
//! RULE: Nothing in the core may call any platform RNG.
//! All randomness flows through ComponentRng instances derived
//! from the single master seed recorded on the Session.
//!
//! Each component gets its own stream, seeded deterministically from
//! (master_seed XOR component_index), so adding a component never
//! changes existing components' streams and a fixed seed reproduces
//! every classifier confidence and allocated id.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for a single component.
pub struct ComponentRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl ComponentRng {
    /// Create a component RNG from the master seed and a stable
    /// component index. The index must never change once assigned.
    pub fn new(master_seed: u64, component_index: u64) -> Self {
        let derived_seed = master_seed ^ (component_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        use rand::RngCore;
        self.inner.next_u64()
    }
}

/// All component RNGs for a single session, indexed by stable slot.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_component(&self, slot: ComponentSlot) -> ComponentRng {
        ComponentRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable component slot assignments.
/// NEVER reorder or remove entries — only append.
/// Reordering changes every component's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum ComponentSlot {
    Classifier = 0,
    IdAlloc = 1,
    // Add new components here — append only.
}

impl ComponentSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Classifier => "classifier",
            Self::IdAlloc => "id_alloc",
        }
    }
}
