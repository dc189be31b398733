use aerovox::{
    components::{
        AeroModuleState, AeroSectionState, ModuleContribution, PartBounds, PartId, PartSnapshot,
        SectionForceModel, SectionInputs, SectionLoad, VehicleClass, VehicleSnapshot,
    },
    systems::aerodynamics::{
        AnalysisCompletion, AnalysisHandle, AnalysisJob, AnalysisOutput, AnalysisRequest,
        Voxelizer,
    },
};
use nalgebra::Vector3;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Plain quadratic drag on a section of fixed frontal area.
pub struct DragSection {
    pub area: f64,
    pub drag_coefficient: f64,
}

impl SectionForceModel for DragSection {
    fn section_load(&self, inputs: &SectionInputs) -> SectionLoad {
        let speed = inputs.velocity.norm();
        SectionLoad {
            force: -0.5
                * inputs.density
                * speed
                * inputs.velocity
                * self.drag_coefficient
                * self.area,
            torque: Vector3::zeros(),
        }
    }
}

/// Stand-in geometry analysis: one module and one drag section per part with
/// bounds, length measured along the requested axis.
pub struct BoxVoxelizer;

impl Voxelizer for BoxVoxelizer {
    fn analyze(&self, request: &AnalysisRequest) -> AnalysisOutput {
        let mut modules = Vec::new();
        let mut sections = Vec::new();
        let mut min_station = f64::MAX;
        let mut max_station = f64::MIN;
        let mut max_area: f64 = 0.0;

        for part in &request.parts {
            let Some(bounds) = part.bounds else { continue };
            let area = bounds.volume() / bounds.size.dot(&request.axis.abs()).max(1e-6);
            let station = part.position.dot(&request.axis);
            min_station = min_station.min(station);
            max_station = max_station.max(station);
            max_area = max_area.max(area);

            sections.push(AeroSectionState::new(
                1.0,
                vec![ModuleContribution {
                    module: modules.len(),
                    weight: 1.0,
                }],
                Box::new(DragSection {
                    area,
                    drag_coefficient: 1.0,
                }),
            ));
            modules.push(AeroModuleState::new(part.id));
        }

        let length = if modules.is_empty() {
            0.0
        } else {
            max_station - min_station + 1.0
        };

        AnalysisOutput {
            modules,
            sections,
            length,
            max_cross_section_area: max_area,
        }
    }
}

/// Runs the voxelizer inline at launch and hands the result out on the next
/// poll, so tests see deterministic timing.
#[derive(Clone, Default)]
pub struct ImmediateJob {
    pub requests: Arc<Mutex<Vec<AnalysisRequest>>>,
    ready: Arc<Mutex<VecDeque<AnalysisCompletion>>>,
}

impl ImmediateJob {
    pub fn launches(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl AnalysisJob for ImmediateJob {
    fn launch(&mut self, request: AnalysisRequest) -> AnalysisHandle {
        let output = BoxVoxelizer.analyze(&request);
        let mut requests = self.requests.lock().unwrap();
        let handle = AnalysisHandle(requests.len() as u64);
        requests.push(request);
        self.ready
            .lock()
            .unwrap()
            .push_back(AnalysisCompletion { handle, output });
        handle
    }

    fn poll(&mut self) -> Option<AnalysisCompletion> {
        self.ready.lock().unwrap().pop_front()
    }
}

/// Three unit parts stacked along the vehicle's forward axis, flying forward.
pub fn create_test_vehicle(speed: f64) -> VehicleSnapshot {
    let velocity = Vector3::new(0.0, 0.0, -speed);
    let parts = (0..3)
        .map(|i| {
            PartSnapshot::new(
                PartId(i),
                Vector3::new(0.0, 0.0, -1.0),
                Some(PartBounds::new(1.0, 1.0, 2.0)),
            )
            .with_position(Vector3::new(0.0, 0.0, -2.0 * i as f64))
            .with_velocity(velocity)
        })
        .collect();

    let mut vehicle = VehicleSnapshot::new("test_vessel", VehicleClass::Plane, parts);
    vehicle.altitude = 1000.0;
    vehicle.surface_velocity = velocity;
    vehicle
}
