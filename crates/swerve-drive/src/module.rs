//! Module identities, per-module storage, and the actuator contract

use core::fmt;

use serde::{Deserialize, Serialize};

/// Physical position of a module on the chassis.
///
/// [`ModuleId::ALL`] is the fixed order in which every bulk operation is
/// issued within a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleId {
    /// Front right
    FrontRight,
    /// Front left
    FrontLeft,
    /// Rear left
    RearLeft,
    /// Rear right
    RearRight,
}

impl ModuleId {
    /// All modules in dispatch order.
    pub const ALL: [ModuleId; 4] = [
        ModuleId::FrontRight,
        ModuleId::FrontLeft,
        ModuleId::RearLeft,
        ModuleId::RearRight,
    ];

    /// Two-letter label used in telemetry names.
    pub const fn label(self) -> &'static str {
        match self {
            ModuleId::FrontRight => "FR",
            ModuleId::FrontLeft => "FL",
            ModuleId::RearLeft => "RL",
            ModuleId::RearRight => "RR",
        }
    }

    /// Telemetry name for the live azimuth position.
    pub const fn position_key(self) -> &'static str {
        match self {
            ModuleId::FrontRight => "FR Swrv Pos",
            ModuleId::FrontLeft => "FL Swrv Pos",
            ModuleId::RearLeft => "RL Swrv Pos",
            ModuleId::RearRight => "RR Swrv Pos",
        }
    }

    /// Telemetry name for the captured zero reference.
    pub const fn zero_key(self) -> &'static str {
        match self {
            ModuleId::FrontRight => "FR Swrv Pos0",
            ModuleId::FrontLeft => "FL Swrv Pos0",
            ModuleId::RearLeft => "RL Swrv Pos0",
            ModuleId::RearRight => "RR Swrv Pos0",
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One value per module, addressed by [`ModuleId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerModule<T> {
    /// Front right
    pub front_right: T,
    /// Front left
    pub front_left: T,
    /// Rear left
    pub rear_left: T,
    /// Rear right
    pub rear_right: T,
}

impl<T> PerModule<T> {
    /// Build from values in dispatch order.
    pub fn new(front_right: T, front_left: T, rear_left: T, rear_right: T) -> Self {
        Self {
            front_right,
            front_left,
            rear_left,
            rear_right,
        }
    }

    /// Build by calling `f` once per module, in dispatch order.
    pub fn from_fn(mut f: impl FnMut(ModuleId) -> T) -> Self {
        let front_right = f(ModuleId::FrontRight);
        let front_left = f(ModuleId::FrontLeft);
        let rear_left = f(ModuleId::RearLeft);
        let rear_right = f(ModuleId::RearRight);
        Self::new(front_right, front_left, rear_left, rear_right)
    }

    /// Shared access to one module's value.
    pub fn get(&self, id: ModuleId) -> &T {
        match id {
            ModuleId::FrontRight => &self.front_right,
            ModuleId::FrontLeft => &self.front_left,
            ModuleId::RearLeft => &self.rear_left,
            ModuleId::RearRight => &self.rear_right,
        }
    }

    /// Exclusive access to one module's value.
    pub fn get_mut(&mut self, id: ModuleId) -> &mut T {
        match id {
            ModuleId::FrontRight => &mut self.front_right,
            ModuleId::FrontLeft => &mut self.front_left,
            ModuleId::RearLeft => &mut self.rear_left,
            ModuleId::RearRight => &mut self.rear_right,
        }
    }

    /// Iterate in dispatch order.
    pub fn iter(&self) -> impl Iterator<Item = (ModuleId, &T)> {
        ModuleId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }

    /// Transform every value, in dispatch order.
    pub fn map<U>(self, mut f: impl FnMut(ModuleId, T) -> U) -> PerModule<U> {
        PerModule {
            front_right: f(ModuleId::FrontRight, self.front_right),
            front_left: f(ModuleId::FrontLeft, self.front_left),
            rear_left: f(ModuleId::RearLeft, self.rear_left),
            rear_right: f(ModuleId::RearRight, self.rear_right),
        }
    }
}

/// Capability contract for one physical swerve module.
///
/// Every write is fire-and-forget: the module owns its own closed-loop
/// control, there is no acknowledgment, and a failed write is invisible to
/// the caller. Implementations must not block or retry inside these calls,
/// since they run inside the control tick.
pub trait ModuleActuator {
    /// Open-loop drive (wheel spin) output.
    fn set_drive_speed(&mut self, speed: f64);

    /// Open-loop azimuth (steering) output.
    fn set_swerve_speed(&mut self, speed: f64);

    /// Raw azimuth encoder reading, in encoder units.
    fn swerve_position(&self) -> f64;

    /// Steer toward `target` (raw encoder units) using the module's own
    /// position control.
    fn assume_swerve_position(&mut self, target: f64);
}

impl<A: ModuleActuator + ?Sized> ModuleActuator for &mut A {
    fn set_drive_speed(&mut self, speed: f64) {
        (**self).set_drive_speed(speed);
    }

    fn set_swerve_speed(&mut self, speed: f64) {
        (**self).set_swerve_speed(speed);
    }

    fn swerve_position(&self) -> f64 {
        (**self).swerve_position()
    }

    fn assume_swerve_position(&mut self, target: f64) {
        (**self).assume_swerve_position(target);
    }
}

impl<A: ModuleActuator + ?Sized> ModuleActuator for Box<A> {
    fn set_drive_speed(&mut self, speed: f64) {
        (**self).set_drive_speed(speed);
    }

    fn set_swerve_speed(&mut self, speed: f64) {
        (**self).set_swerve_speed(speed);
    }

    fn swerve_position(&self) -> f64 {
        (**self).swerve_position()
    }

    fn assume_swerve_position(&mut self, target: f64) {
        (**self).assume_swerve_position(target);
    }
}

/// The command broadcast identically to all four modules in one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ModuleCommand {
    /// Drive output.
    pub drive_speed: f64,
    /// Azimuth target in encoder units clockwise from each module's zero.
    /// `None` holds the azimuth where it is.
    pub swerve_target: Option<f64>,
}

impl ModuleCommand {
    /// Zero drive, azimuth held.
    pub const STOP: ModuleCommand = ModuleCommand {
        drive_speed: 0.0,
        swerve_target: None,
    };

    /// True for the stop command.
    pub fn is_stop(&self) -> bool {
        self.swerve_target.is_none() && self.drive_speed.abs() < f64::EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_order() {
        let labels: Vec<&str> = ModuleId::ALL.iter().map(|id| id.label()).collect();
        assert_eq!(labels, ["FR", "FL", "RL", "RR"]);
    }

    #[test]
    fn test_telemetry_keys() {
        assert_eq!(ModuleId::RearLeft.position_key(), "RL Swrv Pos");
        assert_eq!(ModuleId::FrontRight.zero_key(), "FR Swrv Pos0");
        assert_eq!(ModuleId::RearRight.to_string(), "RR");
    }

    #[test]
    fn test_per_module_from_fn_visits_in_order() {
        let mut seen = Vec::new();
        let values = PerModule::from_fn(|id| {
            seen.push(id);
            id.label().len()
        });
        assert_eq!(seen, ModuleId::ALL);
        assert_eq!(*values.get(ModuleId::RearLeft), 2);
    }

    #[test]
    fn test_per_module_get_mut_and_iter() {
        let mut values = PerModule::new(1, 2, 3, 4);
        *values.get_mut(ModuleId::FrontLeft) = 20;
        let collected: Vec<(ModuleId, i32)> = values.iter().map(|(id, v)| (id, *v)).collect();
        assert_eq!(
            collected,
            [
                (ModuleId::FrontRight, 1),
                (ModuleId::FrontLeft, 20),
                (ModuleId::RearLeft, 3),
                (ModuleId::RearRight, 4),
            ]
        );
    }

    #[test]
    fn test_per_module_map() {
        let values = PerModule::new(1.0, 2.0, 3.0, 4.0).map(|_, v| v * 10.0);
        assert_eq!(values, PerModule::new(10.0, 20.0, 30.0, 40.0));
    }

    #[test]
    fn test_stop_command() {
        assert!(ModuleCommand::STOP.is_stop());
        assert!(ModuleCommand::default().is_stop());
        let moving = ModuleCommand {
            drive_speed: 0.5,
            swerve_target: Some(10.0),
        };
        assert!(!moving.is_stop());
    }
}
