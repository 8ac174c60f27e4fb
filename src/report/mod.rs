//! Device capability report
//!
//! This module renders a text snapshot of a device's capabilities. The report is made
//! of fixed sections, each introduced by a divider-framed title:
//!
//! - `Device identification`: driver key, hardware key and hardware info pairs
//! - `Peripheral summary`: channel counts, hardware time, clock/time sources,
//!   sensors, GPIO banks and UARTs
//! - `RX Channel N` for every RX channel, then `TX Channel N` for every TX channel
//!   (see [`channel`])
//!
//! # Layout Rules
//! - Every line ends with a newline, every section starts with a blank line
//! - Frequencies, sample rates and bandwidths are shown in MHz, gains in dB
//! - Name lists that come back empty leave their line out of the report
//! - Flags are shown as `YES` / `NO`
//!
//! # Errors
//! Queries run strictly in report order. The first query that fails aborts the whole
//! report and its error is returned unchanged; no partial text is handed out.

use alloc::{format, string::String, vec::Vec};

pub mod channel;
pub mod number;
pub mod values;

pub use channel::{format_channel, Corrections};
pub use number::General;

use crate::device::{DeviceQuery, Direction};

/// Frame line above and below every section title.
pub const DIVIDER: &str = "----------------------------------------------------";

/// Scale turning Hz and samples per second into the displayed MHz.
pub const MEGA: f64 = 1e6;

/// Line accumulator joined once when the report is complete.
#[derive(Debug, Default)]
pub(crate) struct Report {
    lines: Vec<String>,
}

impl Report {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Starts a new section: blank line, divider, `-- <title>`, divider.
    pub(crate) fn section(&mut self, title: String) {
        self.lines.push(String::new());
        self.lines.push(String::from(DIVIDER));
        self.lines.push(format!("-- {title}"));
        self.lines.push(String::from(DIVIDER));
    }

    pub(crate) fn line(&mut self, line: String) {
        self.lines.push(line);
    }

    /// Adds `  <label>: <names>` unless there is nothing to list.
    pub(crate) fn listing(&mut self, label: &str, names: String) {
        if names.is_empty() {
            log::trace!("no {} to report", label);
            return;
        }
        self.lines.push(format!("  {label}: {names}"));
    }

    /// Joins all lines, each terminated by a newline.
    pub(crate) fn finish(self) -> String {
        let size: usize = self.lines.iter().map(|line| line.len() + 1).sum();
        let mut text = String::with_capacity(size);
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

/// Renders the full capability report of a device.
///
/// # Arguments
/// * `device` - Device to query
///
/// # Returns
/// The report text, identification and peripheral summary first, followed by one
/// section per RX channel and then one per TX channel.
///
/// # Errors
/// Any error raised by the device is returned unchanged and no text is produced.
pub fn format_device<D>(device: &D) -> Result<String, D::Error>
where
    D: DeviceQuery + ?Sized,
{
    let mut report = Report::new();

    let driver = device.driver_key()?;
    log::debug!("probing device with driver {}", driver);

    report.section(String::from("Device identification"));
    report.line(format!("  driver={driver}"));
    report.line(format!("  hardware={}", device.hardware_key()?));
    for (key, value) in device.hardware_info()? {
        report.line(format!("  {key}={value}"));
    }

    report.section(String::from("Peripheral summary"));
    let rx_channels = device.num_channels(Direction::Rx)?;
    let tx_channels = device.num_channels(Direction::Tx)?;
    report.line(format!("  Channels: {rx_channels} Rx, {tx_channels} Tx"));
    report.line(format!(
        "  Timestamps: {}",
        values::yes_no(device.has_hardware_time()?)
    ));
    report.listing("Clock sources", values::names(&device.list_clock_sources()?));
    report.listing("Time sources", values::names(&device.list_time_sources()?));
    report.listing("Sensors", values::names(&device.list_sensors()?));
    report.listing("GPIOs", values::names(&device.list_gpio_banks()?));
    report.listing("UARTs", values::names(&device.list_uarts()?));

    for channel in 0..rx_channels {
        channel::write_channel(&mut report, device, Direction::Rx, channel)?;
    }
    for channel in 0..tx_channels {
        channel::write_channel(&mut report, device, Direction::Tx, channel)?;
    }

    Ok(report.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Range;
    use crate::sim::{SimError, SimulatedChannel, SimulatedDevice};

    fn basic_channel() -> SimulatedChannel {
        SimulatedChannel::new()
            .with_antennas(["RX"])
            .with_gain_range(Range::new(0.0, 40.0))
            .with_frequency_range([Range::new(1e6, 6e9)])
            .with_sample_rates([2e6, 10e6, 20e6])
    }

    #[test]
    fn report_lines_are_newline_terminated() {
        let mut report = Report::new();
        report.section(String::from("Title"));
        report.line(String::from("  a=b"));
        report.listing("Empty", String::new());

        assert_eq!(report.finish(), alloc::format!("\n{DIVIDER}\n-- Title\n{DIVIDER}\n  a=b\n"));
        assert_eq!(Report::new().finish(), "");
    }

    #[test]
    fn identification_keeps_device_order() {
        let device = SimulatedDevice::new("hackrf", "HackRF One")
            .with_info("version", "2023.01.1")
            .with_info("part_id", "a000cb3c00614b63")
            .with_info("serial", "0000000000000000457863dc2b2d6a5f");

        let text = format_device(&device).unwrap();
        let version = text.find("  version=2023.01.1\n").unwrap();
        let part = text.find("  part_id=a000cb3c00614b63\n").unwrap();
        let serial = text.find("  serial=0000000000000000457863dc2b2d6a5f\n").unwrap();
        assert!(text.starts_with(&alloc::format!(
            "\n{DIVIDER}\n-- Device identification\n{DIVIDER}\n  driver=hackrf\n  hardware=HackRF One\n"
        )));
        assert!(version < part && part < serial);
    }

    #[test]
    fn peripheral_summary_lists_present_peripherals() {
        let device = SimulatedDevice::new("uhd", "B210")
            .with_channel(Direction::Rx, basic_channel())
            .with_channel(Direction::Tx, basic_channel())
            .with_hardware_time(true)
            .with_clock_sources(["internal", "external", "gpsdo"])
            .with_time_sources(["none", "external", "gpsdo"])
            .with_sensors(["ref_locked"])
            .with_gpio_banks(["FP0"]);

        let text = format_device(&device).unwrap();
        assert!(text.contains("  Channels: 1 Rx, 1 Tx\n"));
        assert!(text.contains("  Timestamps: YES\n"));
        assert!(text.contains("  Clock sources: internal, external, gpsdo\n"));
        assert!(text.contains("  Time sources: none, external, gpsdo\n"));
        assert!(text.contains("  Sensors: ref_locked\n"));
        assert!(text.contains("  GPIOs: FP0\n"));
        assert!(!text.contains("UARTs"));
    }

    #[test]
    fn channels_follow_summary_rx_first() {
        let device = SimulatedDevice::new("uhd", "B210")
            .with_channel(Direction::Tx, basic_channel())
            .with_channel(Direction::Rx, basic_channel())
            .with_channel(Direction::Tx, basic_channel())
            .with_channel(Direction::Rx, basic_channel());

        let text = format_device(&device).unwrap();
        let headers: Vec<&str> = text.lines().filter(|l| l.starts_with("-- ")).collect();
        assert_eq!(
            headers,
            [
                "-- Device identification",
                "-- Peripheral summary",
                "-- RX Channel 0",
                "-- RX Channel 1",
                "-- TX Channel 0",
                "-- TX Channel 1",
            ]
        );
    }

    #[test]
    fn first_failure_aborts_report() {
        let device = SimulatedDevice::new("uhd", "B210")
            .with_channel(Direction::Rx, basic_channel())
            .failing_with(SimError::Unavailable);

        assert_eq!(format_device(&device), Err(SimError::Unavailable));
    }
}
