use aerovox::{
    components::{PhysicsComponent, VehicleSnapshot},
    plugins::{AeroModulesReplaced, ShapeChanged, VesselAeroPlugin},
    resources::{AeroConfig, EnvironmentConfig},
    systems::aerodynamics::{AnalysisJob, ForcePipeline},
};
use bevy::prelude::*;

/// Builder for a headless app running the vessel aerodynamics
#[derive(Default)]
pub struct TestAppBuilder {
    aero_config: Option<AeroConfig>,
    environment_config: Option<EnvironmentConfig>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_aero_config(mut self, config: AeroConfig) -> Self {
        self.aero_config = Some(config);
        self
    }

    pub fn with_environment(mut self, config: EnvironmentConfig) -> Self {
        self.environment_config = Some(config);
        self
    }

    pub fn build(self) -> TestApp {
        let aero_config = self.aero_config.unwrap_or_default();
        let mut app = App::new();

        app.add_plugins(MinimalPlugins).add_plugins(
            VesselAeroPlugin::new()
                .with_config(aero_config.clone())
                .with_environment(self.environment_config.unwrap_or_default()),
        );

        TestApp { app, aero_config }
    }
}

/// Test application wrapper. Ticks are driven by running `FixedUpdate`
/// directly so their count is exact.
pub struct TestApp {
    pub app: App,
    pub aero_config: AeroConfig,
}

impl TestApp {
    pub fn spawn_vehicle(
        &mut self,
        vehicle: VehicleSnapshot,
        job: impl AnalysisJob + 'static,
    ) -> Entity {
        let pipeline = ForcePipeline::new(Box::new(job), &self.aero_config);
        self.app
            .world_mut()
            .spawn((vehicle, pipeline, PhysicsComponent::default()))
            .id()
    }

    pub fn run_ticks(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    pub fn send_shape_change(&mut self, vehicle: Entity) {
        self.app.world_mut().send_event(ShapeChanged { vehicle });
    }

    pub fn pipeline(&self, vehicle: Entity) -> &ForcePipeline {
        self.app.world().get::<ForcePipeline>(vehicle).unwrap()
    }

    pub fn physics(&self, vehicle: Entity) -> &PhysicsComponent {
        self.app.world().get::<PhysicsComponent>(vehicle).unwrap()
    }

    pub fn physics_mut(&mut self, vehicle: Entity) -> Mut<PhysicsComponent> {
        self.app
            .world_mut()
            .get_mut::<PhysicsComponent>(vehicle)
            .unwrap()
    }

    pub fn vehicle_mut(&mut self, vehicle: Entity) -> Mut<VehicleSnapshot> {
        self.app
            .world_mut()
            .get_mut::<VehicleSnapshot>(vehicle)
            .unwrap()
    }

    /// Take every module replacement notification sent so far.
    pub fn drain_replaced(&mut self) -> Vec<AeroModulesReplaced> {
        self.app
            .world_mut()
            .resource_mut::<Events<AeroModulesReplaced>>()
            .drain()
            .collect()
    }
}
