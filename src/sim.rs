//! Simulated SDR device
//!
//! An in-memory [`DeviceQuery`] implementation whose capabilities are set up front
//! with builder methods. It stands in for real hardware when producing reports offline,
//! in documentation and in tests.
//!
//! # Example
//! ```
//! use sdr_probe::sim::{SimulatedChannel, SimulatedDevice};
//! use sdr_probe::{format_device, Direction, Range};
//!
//! let device = SimulatedDevice::new("rtlsdr", "R820T").with_channel(
//!     Direction::Rx,
//!     SimulatedChannel::new()
//!         .with_antennas(["RX"])
//!         .with_gain("TUNER", Range::new(0.0, 49.6))
//!         .with_gain_range(Range::new(0.0, 49.6))
//!         .with_frequency_range([Range::new(24e6, 1766e6)])
//!         .with_sample_rates([0.25e6, 1.024e6, 2.048e6]),
//! );
//!
//! let report = format_device(&device).unwrap();
//! assert!(report.contains("-- RX Channel 0"));
//! ```

use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::device::{DeviceQuery, Direction, Kwargs, Range};

/// Errors raised by a [`SimulatedDevice`]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SimError {
    /// The device was configured to fail every query
    Unavailable,
    /// No channel with this index exists in the given direction
    NoSuchChannel {
        /// Direction that was queried
        direction: Direction,
        /// Index that was queried
        channel: usize,
    },
    /// The named gain element or frequency component is not listed by the channel
    UnknownElement,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => f.write_str("device unavailable"),
            Self::NoSuchChannel { direction, channel } => {
                write!(f, "no {direction} channel {channel}")
            }
            Self::UnknownElement => f.write_str("unknown gain element or frequency component"),
        }
    }
}

fn to_strings<I>(names: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    names.into_iter().map(Into::into).collect()
}

/// Capabilities of one simulated channel.
///
/// All lists are reported in insertion order.
#[derive(Debug, Clone, Default)]
pub struct SimulatedChannel {
    full_duplex: bool,
    antennas: Vec<String>,
    dc_offset_mode: bool,
    dc_offset: bool,
    iq_balance: bool,
    gain_range: Range,
    gains: Vec<(String, Range)>,
    frequency_range: Vec<Range>,
    frequencies: Vec<(String, Vec<Range>)>,
    sample_rates: Vec<f64>,
    bandwidths: Vec<f64>,
    sensors: Vec<String>,
}

impl SimulatedChannel {
    /// Creates a half-duplex channel with no capabilities.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_full_duplex(mut self, full_duplex: bool) -> Self {
        self.full_duplex = full_duplex;
        self
    }

    pub fn with_antennas<I>(mut self, antennas: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.antennas = to_strings(antennas);
        self
    }

    pub fn with_dc_offset_mode(mut self, supported: bool) -> Self {
        self.dc_offset_mode = supported;
        self
    }

    pub fn with_dc_offset(mut self, supported: bool) -> Self {
        self.dc_offset = supported;
        self
    }

    pub fn with_iq_balance(mut self, supported: bool) -> Self {
        self.iq_balance = supported;
        self
    }

    /// Sets the overall gain range in dB.
    pub fn with_gain_range(mut self, range: Range) -> Self {
        self.gain_range = range;
        self
    }

    /// Appends a named gain element with its range in dB.
    pub fn with_gain(mut self, name: impl Into<String>, range: Range) -> Self {
        self.gains.push((name.into(), range));
        self
    }

    /// Sets the overall frequency ranges in Hz.
    pub fn with_frequency_range<I>(mut self, ranges: I) -> Self
    where
        I: IntoIterator<Item = Range>,
    {
        self.frequency_range = ranges.into_iter().collect();
        self
    }

    /// Appends a named frequency component with its ranges in Hz.
    pub fn with_frequency<I>(mut self, name: impl Into<String>, ranges: I) -> Self
    where
        I: IntoIterator<Item = Range>,
    {
        self.frequencies
            .push((name.into(), ranges.into_iter().collect()));
        self
    }

    /// Sets the discrete sample rates in samples per second.
    pub fn with_sample_rates<I>(mut self, rates: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        self.sample_rates = rates.into_iter().collect();
        self
    }

    /// Sets the discrete filter bandwidths in Hz.
    pub fn with_bandwidths<I>(mut self, bandwidths: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        self.bandwidths = bandwidths.into_iter().collect();
        self
    }

    pub fn with_sensors<I>(mut self, sensors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.sensors = to_strings(sensors);
        self
    }
}

/// In-memory SDR device.
#[derive(Debug, Clone)]
pub struct SimulatedDevice {
    driver: String,
    hardware: String,
    info: Kwargs,
    rx: Vec<SimulatedChannel>,
    tx: Vec<SimulatedChannel>,
    hardware_time: bool,
    clock_sources: Vec<String>,
    time_sources: Vec<String>,
    sensors: Vec<String>,
    gpio_banks: Vec<String>,
    uarts: Vec<String>,
    failure: Option<SimError>,
}

impl SimulatedDevice {
    /// Creates a device without channels or peripherals.
    ///
    /// # Arguments
    /// * `driver` - Driver key reported by the device
    /// * `hardware` - Hardware key reported by the device
    pub fn new(driver: impl Into<String>, hardware: impl Into<String>) -> Self {
        Self {
            driver: driver.into(),
            hardware: hardware.into(),
            info: Kwargs::new(),
            rx: Vec::new(),
            tx: Vec::new(),
            hardware_time: false,
            clock_sources: Vec::new(),
            time_sources: Vec::new(),
            sensors: Vec::new(),
            gpio_banks: Vec::new(),
            uarts: Vec::new(),
            failure: None,
        }
    }

    /// Appends a hardware info pair.
    pub fn with_info(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.info.push((key.into(), value.into()));
        self
    }

    /// Appends a channel; its index is the number of channels already added in `direction`.
    pub fn with_channel(mut self, direction: Direction, channel: SimulatedChannel) -> Self {
        match direction {
            Direction::Rx => self.rx.push(channel),
            Direction::Tx => self.tx.push(channel),
        }
        self
    }

    pub fn with_hardware_time(mut self, hardware_time: bool) -> Self {
        self.hardware_time = hardware_time;
        self
    }

    pub fn with_clock_sources<I>(mut self, sources: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.clock_sources = to_strings(sources);
        self
    }

    pub fn with_time_sources<I>(mut self, sources: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.time_sources = to_strings(sources);
        self
    }

    pub fn with_sensors<I>(mut self, sensors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.sensors = to_strings(sensors);
        self
    }

    pub fn with_gpio_banks<I>(mut self, banks: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.gpio_banks = to_strings(banks);
        self
    }

    pub fn with_uarts<I>(mut self, uarts: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.uarts = to_strings(uarts);
        self
    }

    /// Makes every subsequent query fail with `error`.
    pub fn failing_with(mut self, error: SimError) -> Self {
        self.failure = Some(error);
        self
    }

    fn check(&self) -> Result<(), SimError> {
        match self.failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn channel(&self, direction: Direction, channel: usize) -> Result<&SimulatedChannel, SimError> {
        self.check()?;
        let channels = match direction {
            Direction::Rx => &self.rx,
            Direction::Tx => &self.tx,
        };
        channels
            .get(channel)
            .ok_or(SimError::NoSuchChannel { direction, channel })
    }
}

impl DeviceQuery for SimulatedDevice {
    type Error = SimError;

    fn driver_key(&self) -> Result<String, Self::Error> {
        self.check()?;
        Ok(self.driver.clone())
    }

    fn hardware_key(&self) -> Result<String, Self::Error> {
        self.check()?;
        Ok(self.hardware.clone())
    }

    fn hardware_info(&self) -> Result<Kwargs, Self::Error> {
        self.check()?;
        Ok(self.info.clone())
    }

    fn num_channels(&self, direction: Direction) -> Result<usize, Self::Error> {
        self.check()?;
        Ok(match direction {
            Direction::Rx => self.rx.len(),
            Direction::Tx => self.tx.len(),
        })
    }

    fn full_duplex(&self, direction: Direction, channel: usize) -> Result<bool, Self::Error> {
        Ok(self.channel(direction, channel)?.full_duplex)
    }

    fn list_antennas(
        &self,
        direction: Direction,
        channel: usize,
    ) -> Result<Vec<String>, Self::Error> {
        Ok(self.channel(direction, channel)?.antennas.clone())
    }

    fn has_dc_offset_mode(&self, direction: Direction, channel: usize) -> Result<bool, Self::Error> {
        Ok(self.channel(direction, channel)?.dc_offset_mode)
    }

    fn has_dc_offset(&self, direction: Direction, channel: usize) -> Result<bool, Self::Error> {
        Ok(self.channel(direction, channel)?.dc_offset)
    }

    fn has_iq_balance(&self, direction: Direction, channel: usize) -> Result<bool, Self::Error> {
        Ok(self.channel(direction, channel)?.iq_balance)
    }

    fn gain_range(&self, direction: Direction, channel: usize) -> Result<Range, Self::Error> {
        Ok(self.channel(direction, channel)?.gain_range)
    }

    fn list_gains(&self, direction: Direction, channel: usize) -> Result<Vec<String>, Self::Error> {
        let gains = &self.channel(direction, channel)?.gains;
        Ok(gains.iter().map(|(name, _)| name.clone()).collect())
    }

    fn gain_element_range(
        &self,
        direction: Direction,
        channel: usize,
        name: &str,
    ) -> Result<Range, Self::Error> {
        self.channel(direction, channel)?
            .gains
            .iter()
            .find(|(element, _)| element == name)
            .map(|(_, range)| *range)
            .ok_or(SimError::UnknownElement)
    }

    fn frequency_range(
        &self,
        direction: Direction,
        channel: usize,
    ) -> Result<Vec<Range>, Self::Error> {
        Ok(self.channel(direction, channel)?.frequency_range.clone())
    }

    fn list_frequencies(
        &self,
        direction: Direction,
        channel: usize,
    ) -> Result<Vec<String>, Self::Error> {
        let frequencies = &self.channel(direction, channel)?.frequencies;
        Ok(frequencies.iter().map(|(name, _)| name.clone()).collect())
    }

    fn component_frequency_range(
        &self,
        direction: Direction,
        channel: usize,
        name: &str,
    ) -> Result<Vec<Range>, Self::Error> {
        self.channel(direction, channel)?
            .frequencies
            .iter()
            .find(|(component, _)| component == name)
            .map(|(_, ranges)| ranges.clone())
            .ok_or(SimError::UnknownElement)
    }

    fn list_sample_rates(
        &self,
        direction: Direction,
        channel: usize,
    ) -> Result<Vec<f64>, Self::Error> {
        Ok(self.channel(direction, channel)?.sample_rates.clone())
    }

    fn list_bandwidths(&self, direction: Direction, channel: usize) -> Result<Vec<f64>, Self::Error> {
        Ok(self.channel(direction, channel)?.bandwidths.clone())
    }

    fn list_channel_sensors(
        &self,
        direction: Direction,
        channel: usize,
    ) -> Result<Vec<String>, Self::Error> {
        Ok(self.channel(direction, channel)?.sensors.clone())
    }

    fn has_hardware_time(&self) -> Result<bool, Self::Error> {
        self.check()?;
        Ok(self.hardware_time)
    }

    fn list_clock_sources(&self) -> Result<Vec<String>, Self::Error> {
        self.check()?;
        Ok(self.clock_sources.clone())
    }

    fn list_time_sources(&self) -> Result<Vec<String>, Self::Error> {
        self.check()?;
        Ok(self.time_sources.clone())
    }

    fn list_sensors(&self) -> Result<Vec<String>, Self::Error> {
        self.check()?;
        Ok(self.sensors.clone())
    }

    fn list_gpio_banks(&self) -> Result<Vec<String>, Self::Error> {
        self.check()?;
        Ok(self.gpio_banks.clone())
    }

    fn list_uarts(&self) -> Result<Vec<String>, Self::Error> {
        self.check()?;
        Ok(self.uarts.clone())
    }
}
