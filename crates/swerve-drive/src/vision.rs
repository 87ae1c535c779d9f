//! Vision target readout from a published number table

use std::collections::HashMap;
use std::hash::BuildHasher;

use serde::Serialize;

/// Read-only view of a table of named numbers.
pub trait NumberTable {
    /// Value under `key`, or `default` if absent.
    fn get_number(&self, key: &str, default: f64) -> f64;
}

impl<S: BuildHasher> NumberTable for HashMap<String, f64, S> {
    fn get_number(&self, key: &str, default: f64) -> f64 {
        self.get(key).copied().unwrap_or(default)
    }
}

impl<T: NumberTable + ?Sized> NumberTable for &T {
    fn get_number(&self, key: &str, default: f64) -> f64 {
        (**self).get_number(key, default)
    }
}

/// One snapshot of the camera's best target.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TargetReading {
    /// Horizontal offset to the target (`tx`).
    pub horizontal_offset: f64,
    /// Vertical offset to the target (`ty`).
    pub vertical_offset: f64,
    /// Target area (`ta`).
    pub area: f64,
    /// Whether a target is in sight (`tv`).
    pub has_target: bool,
}

/// Limelight-style camera table: `tx`, `ty`, `ta`, `tv`, each defaulting to 0.
#[derive(Debug, Clone)]
pub struct LimelightTable<T> {
    table: T,
}

impl<T: NumberTable> LimelightTable<T> {
    /// Wrap a table.
    pub fn new(table: T) -> Self {
        Self { table }
    }

    /// `tx`
    pub fn horizontal_offset(&self) -> f64 {
        self.table.get_number("tx", 0.0)
    }

    /// `ty`
    pub fn vertical_offset(&self) -> f64 {
        self.table.get_number("ty", 0.0)
    }

    /// `ta`
    pub fn target_area(&self) -> f64 {
        self.table.get_number("ta", 0.0)
    }

    /// `tv` is non-zero.
    pub fn has_target(&self) -> bool {
        self.table.get_number("tv", 0.0) != 0.0
    }

    /// All four values at once.
    pub fn reading(&self) -> TargetReading {
        TargetReading {
            horizontal_offset: self.horizontal_offset(),
            vertical_offset: self.vertical_offset(),
            area: self.target_area(),
            has_target: self.has_target(),
        }
    }
}
