//! The four-module train and its per-tick pipeline

use core::fmt;

use swerve_errors::Result;
use tracing::{debug, info, trace, warn};

use crate::config::SwerveConfig;
use crate::direction::Direction;
use crate::heading::{FieldHeadingSource, field_relative};
use crate::homing::{HomingController, nearest_equivalent};
use crate::input::{AxisInput, AxisSource, DeadzoneFilter};
use crate::module::{ModuleActuator, ModuleCommand, ModuleId, PerModule};
use crate::telemetry::{NullTelemetry, TelemetrySink};
use crate::units::RotationUnitConverter;
use crate::zero::ZeroReferenceStore;

/// Owns four module actuators and drives them as one.
///
/// Every operation touches the modules in [`ModuleId::ALL`] order and returns
/// before the next tick. The only state carried between ticks is the
/// [`ZeroReferenceStore`]; everything else lives in the actuators.
pub struct SwerveTrain<M, T = NullTelemetry> {
    modules: PerModule<M>,
    zeros: ZeroReferenceStore,
    deadzone: DeadzoneFilter,
    converter: RotationUnitConverter,
    homing: HomingController,
    telemetry: T,
    heading: Option<Box<dyn FieldHeadingSource + Send>>,
}

impl<M: fmt::Debug, T: fmt::Debug> fmt::Debug for SwerveTrain<M, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwerveTrain")
            .field("modules", &self.modules)
            .field("zeros", &self.zeros)
            .field("deadzone", &self.deadzone)
            .field("converter", &self.converter)
            .field("telemetry", &self.telemetry)
            .field("field_relative", &self.heading.is_some())
            .finish_non_exhaustive()
    }
}

impl<M: ModuleActuator, T: TelemetrySink> SwerveTrain<M, T> {
    /// Take ownership of four modules.
    ///
    /// Each module's current azimuth reading becomes its zero reference until
    /// [`capture_zero_positions`](Self::capture_zero_positions) is called.
    pub fn new(config: &SwerveConfig, modules: PerModule<M>, telemetry: T) -> Self {
        let power_on = PerModule::from_fn(|id| modules.get(id).swerve_position());
        info!(
            deadzone = config.deadzone_threshold(),
            period = config.mechanical_period(),
            "Swerve train initialized with power-on zeros"
        );
        Self {
            modules,
            zeros: ZeroReferenceStore::from_power_on(power_on),
            deadzone: DeadzoneFilter::new(config.deadzone_threshold()),
            converter: RotationUnitConverter::from(config),
            homing: HomingController::new(config.mechanical_period()),
            telemetry,
            heading: None,
        }
    }

    /// Translate controller input into the field frame using `source`.
    pub fn with_heading_source(mut self, source: impl FieldHeadingSource + Send + 'static) -> Self {
        self.heading = Some(Box::new(source));
        self
    }

    /// Broadcast one drive output to all modules.
    pub fn set_drive_speed(&mut self, speed: f64) {
        for id in ModuleId::ALL {
            self.modules.get_mut(id).set_drive_speed(speed);
        }
    }

    /// Broadcast one azimuth output to all modules.
    pub fn set_swerve_speed(&mut self, speed: f64) {
        for id in ModuleId::ALL {
            self.modules.get_mut(id).set_swerve_speed(speed);
        }
    }

    /// Record one module's current azimuth as its zero. No motion.
    pub fn capture_zero(&mut self, id: ModuleId, verbose: bool) -> f64 {
        let raw = self.modules.get(id).swerve_position();
        self.zeros.capture(id, raw);
        debug!(module = %id, zero = raw, "Captured zero");
        if verbose {
            self.telemetry.put_number(id.zero_key(), raw);
        }
        raw
    }

    /// Record every module's current azimuth as its zero, then publish all
    /// four if `verbose`.
    pub fn capture_zero_positions(&mut self, verbose: bool) {
        for id in ModuleId::ALL {
            self.capture_zero(id, false);
        }
        info!("Captured zero positions");
        if verbose {
            for (id, zero) in self.zeros.all().iter() {
                self.telemetry.put_number(id.zero_key(), *zero);
            }
        }
    }

    /// Command one module to its stored zero.
    pub fn home_module_to_zero(&mut self, id: ModuleId) -> f64 {
        self.homing.home_to_zero(self.modules.get_mut(id), &self.zeros, id)
    }

    /// Command one module to the equivalent of its zero nearest its position.
    pub fn home_module_to_nearest_zero(&mut self, id: ModuleId) -> f64 {
        self.homing
            .home_to_nearest_zero(self.modules.get_mut(id), &self.zeros, id)
    }

    /// Command every module to its stored zero. Returns the raw targets.
    pub fn home_to_zero(&mut self) -> PerModule<f64> {
        info!("Homing all modules to zero");
        PerModule::from_fn(|id| self.home_module_to_zero(id))
    }

    /// Command every module to its nearest zero, each from its own position.
    /// Returns the raw targets.
    pub fn home_to_nearest_zero(&mut self) -> PerModule<f64> {
        info!("Homing all modules to nearest zero");
        PerModule::from_fn(|id| self.home_module_to_nearest_zero(id))
    }

    /// Publish every module's live azimuth reading. No motion.
    pub fn publish_positions(&mut self) {
        for id in ModuleId::ALL {
            let position = self.modules.get(id).swerve_position();
            self.telemetry.put_number(id.position_key(), position);
        }
    }

    /// The command a tick with `input` would broadcast. Touches no module.
    ///
    /// A centered stick yields [`ModuleCommand::STOP`]. Otherwise the target
    /// is in encoder units clockwise from each module's zero.
    pub fn command_for(&self, input: &AxisInput) -> ModuleCommand {
        if self.deadzone.is_centered(input) {
            return ModuleCommand::STOP;
        }

        let mut direction = Direction::from_xy(input.x(), input.y());
        if let Some(source) = &self.heading {
            let heading = source.heading_radians();
            if heading.is_finite() {
                direction = field_relative(direction, heading);
            } else {
                warn!(heading, "Non-finite field heading, driving control-relative");
            }
        }

        ModuleCommand {
            drive_speed: direction.magnitude,
            swerve_target: Some(self.converter.units_from_angle(direction.angle)),
        }
    }

    /// Issue `command` to all four modules.
    ///
    /// Each module steers to the equivalent of `zero + swerve_target` nearest
    /// its current position, then takes the drive output. A command with no
    /// target zeroes the azimuth output so the module holds where it is.
    pub fn dispatch(&mut self, command: &ModuleCommand) {
        let period = self.converter.mechanical_period();
        for id in ModuleId::ALL {
            let zero = self.zeros.get(id);
            let module = self.modules.get_mut(id);
            match command.swerve_target {
                Some(offset) => {
                    let target = nearest_equivalent(zero + offset, module.swerve_position(), period);
                    module.assume_swerve_position(target);
                }
                None => module.set_swerve_speed(0.0),
            }
            module.set_drive_speed(command.drive_speed);
        }
    }

    /// One full tick: deadzone, direction, units, optional heading, dispatch.
    pub fn drive_from_controller(&mut self, input: &AxisInput) -> ModuleCommand {
        let command = self.command_for(input);
        trace!(
            x = input.x(),
            y = input.y(),
            z = input.z(),
            drive = command.drive_speed,
            swerve_target = ?command.swerve_target,
            "Drive tick"
        );
        self.dispatch(&command);
        command
    }

    /// Read one sample from `source` and run a tick with it.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the sample is non-finite or out of range.
    /// The train is stopped before the error is returned.
    pub fn drive_from_source<S: AxisSource + ?Sized>(&mut self, source: &mut S) -> Result<ModuleCommand> {
        let [x, y, z] = source.read_axes();
        match AxisInput::new(x, y, z) {
            Ok(input) => Ok(self.drive_from_controller(&input)),
            Err(err) => {
                warn!(x, y, z, error = %err, "Rejected controller sample, stopping");
                self.dispatch(&ModuleCommand::STOP);
                Err(err)
            }
        }
    }

    /// Current zero references.
    pub fn zero_references(&self) -> &ZeroReferenceStore {
        &self.zeros
    }

    /// The owned modules.
    pub fn modules(&self) -> &PerModule<M> {
        &self.modules
    }

    /// Exclusive access to the owned modules, e.g. to advance a simulation.
    pub fn modules_mut(&mut self) -> &mut PerModule<M> {
        &mut self.modules
    }

    /// The telemetry sink.
    pub fn telemetry(&self) -> &T {
        &self.telemetry
    }

    /// Give back the modules and the sink.
    pub fn into_parts(self) -> (PerModule<M>, T) {
        (self.modules, self.telemetry)
    }
}
