use nalgebra::Vector3;

use crate::components::AeroModuleState;

/// Flow scalars shared by every section on a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionFlow {
    /// Ambient density [kg/m^3]
    pub density: f64,
    pub mach_number: f64,
    /// Reynolds number per metre of characteristic length [1/m]
    pub reynolds_per_length: f64,
    pub skin_friction_coefficient: f64,
}

impl SectionFlow {
    /// Reynolds number for a body of the given characteristic length.
    pub fn reynolds_for(&self, characteristic_length: f64) -> f64 {
        self.reynolds_per_length * characteristic_length
    }
}

/// Inputs handed to a section's force model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionInputs {
    /// Contribution-weighted velocity of the modules under the section, world space
    pub velocity: Vector3<f64>,
    pub angular_velocity: Vector3<f64>,
    pub density: f64,
    pub mach_number: f64,
    /// Already re-scaled to this section's characteristic length
    pub reynolds_number: f64,
    pub skin_friction_coefficient: f64,
}

/// Load produced by one section, world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionLoad {
    pub force: Vector3<f64>,
    pub torque: Vector3<f64>,
}

impl SectionLoad {
    pub fn zero() -> Self {
        Self {
            force: Vector3::zeros(),
            torque: Vector3::zeros(),
        }
    }
}

/// Cross-section force math, supplied by the geometry analysis.
pub trait SectionForceModel: Send + Sync {
    fn section_load(&self, inputs: &SectionInputs) -> SectionLoad;
}

/// Share of a section's load carried by one module.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModuleContribution {
    /// Index into the module list delivered with this section
    pub module: usize,
    pub weight: f64,
}

/// Per-cross-section aerodynamic actor.
pub struct AeroSectionState {
    characteristic_length: f64,
    contributions: Vec<ModuleContribution>,
    model: Box<dyn SectionForceModel>,
}

impl std::fmt::Debug for AeroSectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AeroSectionState")
            .field("characteristic_length", &self.characteristic_length)
            .field("contributions", &self.contributions)
            .finish_non_exhaustive()
    }
}

impl AeroSectionState {
    /// Contribution weights are normalized to sum to one; non-positive weights are dropped.
    pub fn new(
        characteristic_length: f64,
        contributions: Vec<ModuleContribution>,
        model: Box<dyn SectionForceModel>,
    ) -> Self {
        let mut contributions: Vec<_> = contributions
            .into_iter()
            .filter(|c| c.weight > 0.0)
            .collect();
        let total: f64 = contributions.iter().map(|c| c.weight).sum();
        if total > 0.0 {
            for c in contributions.iter_mut() {
                c.weight /= total;
            }
        }

        Self {
            characteristic_length,
            contributions,
            model,
        }
    }

    pub fn characteristic_length(&self) -> f64 {
        self.characteristic_length
    }

    pub fn contributions(&self) -> &[ModuleContribution] {
        &self.contributions
    }

    /// Compute this section's load from the shared flow and distribute it onto
    /// the attached modules it covers. Modules must already carry this tick's velocity.
    pub fn calculate_forces(&self, modules: &mut [AeroModuleState], flow: &SectionFlow) {
        let mut velocity = Vector3::zeros();
        let mut angular_velocity = Vector3::zeros();
        let mut covered = 0.0;

        for c in &self.contributions {
            if let Some(m) = modules.get(c.module).filter(|m| m.is_attached()) {
                velocity += m.velocity * c.weight;
                angular_velocity += m.angular_velocity * c.weight;
                covered += c.weight;
            }
        }

        // every module under this section is gone
        if covered <= 0.0 {
            return;
        }

        let inputs = SectionInputs {
            velocity: velocity / covered,
            angular_velocity: angular_velocity / covered,
            density: flow.density,
            mach_number: flow.mach_number,
            reynolds_number: flow.reynolds_for(self.characteristic_length),
            skin_friction_coefficient: flow.skin_friction_coefficient,
        };
        let load = self.model.section_load(&inputs);

        for c in &self.contributions {
            if let Some(m) = modules.get_mut(c.module).filter(|m| m.is_attached()) {
                let share = c.weight / covered;
                m.add_load(load.force * share, load.torque * share);
            }
        }
    }
}
