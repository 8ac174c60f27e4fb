//! SDR Device Query Interface
//!
//! This module defines the read-only capability interface a software-defined-radio
//! device layer exposes to the report generator. The device layer itself (driver
//! discovery, streaming, hardware I/O) lives outside this crate; anything that can
//! answer the queries below can be probed.
//!
//! The interface is built around the [`DeviceQuery`] trait which provides methods for:
//! - Identifying the device (driver key, hardware key, hardware info)
//! - Reporting the channel topology for each [`Direction`]
//! - Listing per-channel antennas, gains, frequencies, sample rates and sensors
//! - Listing device-wide peripherals (clock/time sources, sensors, GPIO banks, UARTs)
//!
//! # Example
//! ```no_run
//! use sdr_probe::{DeviceQuery, Direction};
//!
//! fn describe<D: DeviceQuery>(device: &D) -> Result<(), D::Error> {
//!     let rx = device.num_channels(Direction::Rx)?;
//!     let tx = device.num_channels(Direction::Tx)?;
//!     let _ = (device.driver_key()?, rx, tx);
//!     Ok(())
//! }
//! ```

use alloc::{string::String, vec::Vec};
use core::fmt;

/// Ordered key/value pairs reported by a device.
///
/// Entries keep the order the device yields them in.
pub type Kwargs = Vec<(String, String)>;

/// Signal path direction of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Receive path
    Rx,
    /// Transmit path
    Tx,
}

impl Direction {
    /// Short upper-case name used in report headers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rx => "RX",
            Self::Tx => "TX",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed interval describing the bounds of a tunable parameter.
///
/// `step` is the tuning resolution, `0.0` when the parameter is continuous.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Range {
    /// Lower bound (inclusive)
    pub minimum: f64,
    /// Upper bound (inclusive)
    pub maximum: f64,
    /// Tuning step, `0.0` for continuous ranges
    pub step: f64,
}

impl Range {
    /// Creates a continuous range.
    pub const fn new(minimum: f64, maximum: f64) -> Self {
        Self {
            minimum,
            maximum,
            step: 0.0,
        }
    }

    /// Creates a range tunable in increments of `step`.
    pub const fn with_step(minimum: f64, maximum: f64, step: f64) -> Self {
        Self {
            minimum,
            maximum,
            step,
        }
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Read-only capability queries of an opened SDR device.
///
/// Every query returns the device layer's own error type; the report generator never
/// inspects or wraps it.
///
/// Queries for optional capabilities have default implementations reporting the
/// capability as absent, so a minimal device only provides identification, topology
/// and the core channel queries.
///
/// # Errors
/// Each method fails with [`DeviceQuery::Error`] when the device layer cannot answer,
/// e.g. the query is unsupported or the device has gone away.
pub trait DeviceQuery {
    /// Error raised by the device layer.
    type Error;

    /// Key of the driver that opened the device.
    fn driver_key(&self) -> Result<String, Self::Error>;

    /// Key identifying the hardware model.
    fn hardware_key(&self) -> Result<String, Self::Error>;

    /// Additional hardware information (serial numbers, firmware versions, ...).
    fn hardware_info(&self) -> Result<Kwargs, Self::Error> {
        Ok(Kwargs::new())
    }

    /// Number of channels available in the given direction.
    fn num_channels(&self, direction: Direction) -> Result<usize, Self::Error>;

    /// Whether the channel can operate while the opposite direction is active.
    fn full_duplex(&self, direction: Direction, channel: usize) -> Result<bool, Self::Error>;

    /// Names of the antennas selectable on the channel.
    fn list_antennas(
        &self,
        direction: Direction,
        channel: usize,
    ) -> Result<Vec<String>, Self::Error>;

    /// Whether automatic DC offset removal is supported.
    fn has_dc_offset_mode(&self, direction: Direction, channel: usize) -> Result<bool, Self::Error> {
        let _ = (direction, channel);
        Ok(false)
    }

    /// Whether a manual DC offset correction is supported.
    fn has_dc_offset(&self, direction: Direction, channel: usize) -> Result<bool, Self::Error> {
        let _ = (direction, channel);
        Ok(false)
    }

    /// Whether IQ balance correction is supported.
    fn has_iq_balance(&self, direction: Direction, channel: usize) -> Result<bool, Self::Error> {
        let _ = (direction, channel);
        Ok(false)
    }

    /// Overall gain range of the channel in dB.
    fn gain_range(&self, direction: Direction, channel: usize) -> Result<Range, Self::Error>;

    /// Names of the individually adjustable gain elements of the channel.
    fn list_gains(&self, direction: Direction, channel: usize) -> Result<Vec<String>, Self::Error>;

    /// Gain range of a single named gain element in dB.
    fn gain_element_range(
        &self,
        direction: Direction,
        channel: usize,
        name: &str,
    ) -> Result<Range, Self::Error>;

    /// Overall tunable frequency ranges of the channel in Hz.
    fn frequency_range(
        &self,
        direction: Direction,
        channel: usize,
    ) -> Result<Vec<Range>, Self::Error>;

    /// Names of the individually tunable frequency components (RF, baseband, ...).
    fn list_frequencies(
        &self,
        direction: Direction,
        channel: usize,
    ) -> Result<Vec<String>, Self::Error>;

    /// Tunable frequency ranges of a single named component in Hz.
    fn component_frequency_range(
        &self,
        direction: Direction,
        channel: usize,
        name: &str,
    ) -> Result<Vec<Range>, Self::Error>;

    /// Discrete sample rates supported by the channel in samples per second.
    fn list_sample_rates(
        &self,
        direction: Direction,
        channel: usize,
    ) -> Result<Vec<f64>, Self::Error>;

    /// Discrete baseband filter bandwidths supported by the channel in Hz.
    fn list_bandwidths(&self, direction: Direction, channel: usize) -> Result<Vec<f64>, Self::Error> {
        let _ = (direction, channel);
        Ok(Vec::new())
    }

    /// Names of the sensors attached to the channel.
    fn list_channel_sensors(
        &self,
        direction: Direction,
        channel: usize,
    ) -> Result<Vec<String>, Self::Error> {
        let _ = (direction, channel);
        Ok(Vec::new())
    }

    /// Whether the device keeps a hardware time base for timestamps.
    fn has_hardware_time(&self) -> Result<bool, Self::Error> {
        Ok(false)
    }

    /// Names of the selectable reference clock sources.
    fn list_clock_sources(&self) -> Result<Vec<String>, Self::Error> {
        Ok(Vec::new())
    }

    /// Names of the selectable time sources.
    fn list_time_sources(&self) -> Result<Vec<String>, Self::Error> {
        Ok(Vec::new())
    }

    /// Names of the device-wide sensors.
    fn list_sensors(&self) -> Result<Vec<String>, Self::Error> {
        Ok(Vec::new())
    }

    /// Names of the available GPIO banks.
    fn list_gpio_banks(&self) -> Result<Vec<String>, Self::Error> {
        Ok(Vec::new())
    }

    /// Names of the available UARTs.
    fn list_uarts(&self) -> Result<Vec<String>, Self::Error> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_names() {
        assert_eq!(Direction::Rx.as_str(), "RX");
        assert_eq!(alloc::format!("{}", Direction::Tx), "TX");
    }

    #[test]
    fn range_constructors() {
        let continuous = Range::new(-10.0, 73.0);
        assert_eq!(continuous.step, 0.0);

        let stepped = Range::with_step(0.0, 62.0, 2.0);
        assert_eq!(stepped.maximum, 62.0);
        assert_eq!(stepped.step, 2.0);

        assert_eq!(Range::default(), Range::new(0.0, 0.0));
    }
}
