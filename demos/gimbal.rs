// demos/gimbal.rs

use core::time::Duration;
use gimbal_stabilization::{
    Axis, AxisValues, CameraStabBus, CameraStabConfig, CameraStabModule, CameraStabSettings,
    GimbalType, InputSource, PeriodicScheduler, StabilizationMode,
};

// Simulated aircraft and operator.
struct SimBus {
    settings: CameraStabSettings<f32>,
    attitude: AxisValues<f32>,
    tilt_stick: Option<f32>,
    ticks: u32,
    output: AxisValues<f32>,
}

impl CameraStabBus<f32> for SimBus {
    fn settings(&self) -> CameraStabSettings<f32> {
        self.settings
    }

    fn attitude(&self) -> AxisValues<f32> {
        self.attitude
    }

    fn accessory(&self, instance: u8) -> Option<f32> {
        match instance {
            0 => self.tilt_stick,
            _ => None,
        }
    }

    fn tick_count(&self) -> u32 {
        self.ticks
    }

    fn set_camera_desired(&mut self, axis: Axis, value: f32) {
        self.output[axis] = value;
    }
}

struct SimScheduler;

impl PeriodicScheduler for SimScheduler {
    type Error = ();

    fn register_periodic(&mut self, period: Duration) -> Result<(), Self::Error> {
        println!("registered periodic trigger every {:?}", period);
        Ok(())
    }
}

fn main() {
    let mut settings = CameraStabSettings::<f32>::new();

    // Tilt is held by the operator's stick, roll and yaw are stabilized only.
    settings.axes[Axis::Pitch].input = InputSource::Accessory(0);
    settings.set_stabilization_mode(Axis::Pitch, StabilizationMode::AxisLock);
    settings.axes[Axis::Pitch].input_range = 45.0;
    settings.axes[Axis::Pitch].input_rate = 30.0;
    settings.axes[Axis::Pitch].output_range = 45.0;

    // Smooth roll and anticipate fast motion.
    settings.axes[Axis::Roll].response_time = 0.03;
    settings.axes[Axis::Roll].feed_forward = 0.4;
    settings.axes[Axis::Roll].accel_time = 0.05;
    settings.axes[Axis::Roll].decel_time = 0.1;
    settings.set_gimbal_type(GimbalType::YawRollPitch);

    let mut config = CameraStabConfig::new();
    config.enabled = true;

    let mut module = match CameraStabModule::<f32>::initialize(&config, 0, &mut SimScheduler) {
        Ok(module) => module,
        Err(err) => {
            eprintln!("{}", err);
            return;
        }
    };
    let _ = module.start();

    let mut bus = SimBus {
        settings,
        attitude: AxisValues::splat(0.0),
        tilt_stick: Some(0.0),
        ticks: 0,
        output: AxisValues::splat(0.0),
    };

    println!("                      Roll,    Pitch,      Yaw");
    for step in 0..=200u32 {
        let t = step as f32 * 0.01;

        // simulate aircraft motion and operator input
        bus.ticks = step * 10;
        bus.attitude = AxisValues::new(
            15.0 * (t * 3.0).sin(),
            5.0 * (t * 1.3).cos(),
            (t * 20.0) % 360.0 - 180.0,
        );
        bus.tilt_stick = if (50..100).contains(&step) {
            Some(-0.8)
        } else {
            Some(0.0)
        };

        if let Err(err) = module.attitude_updated(&mut bus) {
            eprintln!("{}", err);
            return;
        }

        if step % 20 == 0 {
            println!("t = {:.3}", t);
            println!(
                "    Attitude:     {:-8.3}, {:-8.3}, {:-8.3}",
                bus.attitude.roll(),
                bus.attitude.pitch(),
                bus.attitude.yaw()
            );
            println!(
                "    Output:       {:-8.3}, {:-8.3}, {:-8.3}",
                bus.output.roll(),
                bus.output.pitch(),
                bus.output.yaw()
            );
        }
    }
}
