//! Per-channel report section
//!
//! One section is rendered for every RX and TX channel of a device:
//! - Full-duplex capability
//! - Selectable antennas
//! - Supported signal corrections
//! - Overall and per-element gain ranges (dB)
//! - Overall and per-component frequency ranges (MHz)
//! - Sample rates and filter bandwidths (MHz)
//! - Channel sensors
//!
//! Lines for empty name lists are left out, except for the gain, frequency and
//! sample rate lines which are always present.

use alloc::{format, string::String};
use bitflags::bitflags;

use super::{values, Report, MEGA};
use crate::device::{DeviceQuery, Direction};

bitflags! {
    /// Signal corrections a channel supports
    ///
    /// Collected from the DC offset mode, DC offset and IQ balance queries.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Corrections: u8 {
        /// Automatic DC offset removal
        const DC_REMOVAL = 1;
        /// Manual DC offset correction
        const DC_OFFSET = 1 << 1;
        /// IQ imbalance correction
        const IQ_BALANCE = 1 << 2;
    }
}

/// Report labels, in the order they are listed.
const CORRECTION_LABELS: [(Corrections, &str); 3] = [
    (Corrections::DC_REMOVAL, "DC removal"),
    (Corrections::DC_OFFSET, "DC offset"),
    (Corrections::IQ_BALANCE, "IQ balance"),
];

impl Corrections {
    /// Queries which corrections the channel supports.
    ///
    /// # Errors
    /// Any error raised by the device is returned unchanged.
    pub fn query<D>(device: &D, direction: Direction, channel: usize) -> Result<Self, D::Error>
    where
        D: DeviceQuery + ?Sized,
    {
        let mut corrections = Self::empty();
        corrections.set(
            Self::DC_REMOVAL,
            device.has_dc_offset_mode(direction, channel)?,
        );
        corrections.set(Self::DC_OFFSET, device.has_dc_offset(direction, channel)?);
        corrections.set(Self::IQ_BALANCE, device.has_iq_balance(direction, channel)?);
        Ok(corrections)
    }

    /// Labels of the supported corrections.
    pub fn labels(self) -> impl Iterator<Item = &'static str> {
        CORRECTION_LABELS
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, label)| label)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Corrections {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Corrections({=u8:#b})", self.bits())
    }
}

/// Renders the report section of a single channel.
///
/// # Arguments
/// * `device` - Device to query
/// * `direction` - Signal path of the channel
/// * `channel` - Channel index within `direction`
///
/// # Errors
/// Any error raised by the device is returned unchanged and no text is produced.
pub fn format_channel<D>(device: &D, direction: Direction, channel: usize) -> Result<String, D::Error>
where
    D: DeviceQuery + ?Sized,
{
    let mut report = Report::new();
    write_channel(&mut report, device, direction, channel)?;
    Ok(report.finish())
}

pub(super) fn write_channel<D>(
    report: &mut Report,
    device: &D,
    direction: Direction,
    channel: usize,
) -> Result<(), D::Error>
where
    D: DeviceQuery + ?Sized,
{
    log::debug!("probing {} channel {}", direction, channel);

    report.section(format!("{direction} Channel {channel}"));

    report.line(format!(
        "  Full-duplex: {}",
        values::yes_no(device.full_duplex(direction, channel)?)
    ));

    report.listing("Antennas", values::names(&device.list_antennas(direction, channel)?));

    let corrections = Corrections::query(device, direction, channel)?;
    let labels: alloc::vec::Vec<&str> = corrections.labels().collect();
    report.listing("Corrections", values::names(&labels));

    report.line(format!(
        "  Full gain range: {} dB",
        values::range(&device.gain_range(direction, channel)?)
    ));
    for name in device.list_gains(direction, channel)? {
        let range = device.gain_element_range(direction, channel, &name)?;
        report.line(format!("    {name} gain range: {} dB", values::range(&range)));
    }

    report.line(format!(
        "  Full freq range: {} MHz",
        values::range_list(&device.frequency_range(direction, channel)?, MEGA)
    ));
    for name in device.list_frequencies(direction, channel)? {
        let ranges = device.component_frequency_range(direction, channel, &name)?;
        report.line(format!(
            "    {name} freq range: {} MHz",
            values::range_list(&ranges, MEGA)
        ));
    }

    report.line(format!(
        "  Sample rates: {} MHz",
        values::number_list(&device.list_sample_rates(direction, channel)?, MEGA)
    ));

    let bandwidths = device.list_bandwidths(direction, channel)?;
    if bandwidths.is_empty() {
        log::trace!("{} channel {} reports no filter bandwidths", direction, channel);
    } else {
        report.line(format!(
            "  Filter bandwidths: {} MHz",
            values::number_list(&bandwidths, MEGA)
        ));
    }

    report.listing(
        "Sensors",
        values::names(&device.list_channel_sensors(direction, channel)?),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Range;
    use crate::sim::{SimError, SimulatedChannel, SimulatedDevice};
    use alloc::vec::Vec;

    fn lime_rx() -> SimulatedChannel {
        SimulatedChannel::new()
            .with_full_duplex(true)
            .with_antennas(["NONE", "LNAH", "LNAL", "LNAW"])
            .with_dc_offset_mode(true)
            .with_iq_balance(true)
            .with_gain_range(Range::new(-12.0, 61.0))
            .with_gain("TIA", Range::new(0.0, 12.0))
            .with_gain("LNA", Range::new(0.0, 30.0))
            .with_gain("PGA", Range::new(-12.0, 19.0))
            .with_frequency_range([Range::new(0.0, 3.8e9)])
            .with_frequency("RF", [Range::new(30e6, 3.8e9)])
            .with_frequency("BB", [Range::new(-61.44e6, 61.44e6)])
            .with_sample_rates([0.1e6, 1e6, 10e6, 61.44e6])
            .with_bandwidths([1.4e6, 5e6, 10e6])
            .with_sensors(["lo_locked"])
    }

    #[test]
    fn corrections_follow_queries() {
        let device = SimulatedDevice::new("lime", "LimeSDR-USB")
            .with_channel(Direction::Rx, lime_rx());

        let corrections = Corrections::query(&device, Direction::Rx, 0).unwrap();
        assert_eq!(corrections, Corrections::DC_REMOVAL | Corrections::IQ_BALANCE);
        assert_eq!(
            corrections.labels().collect::<Vec<_>>(),
            ["DC removal", "IQ balance"]
        );
        assert_eq!(Corrections::empty().labels().count(), 0);
    }

    #[test]
    fn full_channel_section() {
        let device = SimulatedDevice::new("lime", "LimeSDR-USB")
            .with_channel(Direction::Rx, lime_rx());

        let text = format_channel(&device, Direction::Rx, 0).unwrap();
        let expected = "\n\
            ----------------------------------------------------\n\
            -- RX Channel 0\n\
            ----------------------------------------------------\n  \
            Full-duplex: YES\n  \
            Antennas: NONE, LNAH, LNAL, LNAW\n  \
            Corrections: DC removal, IQ balance\n  \
            Full gain range: [-12, 61] dB\n    \
            TIA gain range: [0, 12] dB\n    \
            LNA gain range: [0, 30] dB\n    \
            PGA gain range: [-12, 19] dB\n  \
            Full freq range: [0, 3800] MHz\n    \
            RF freq range: [30, 3800] MHz\n    \
            BB freq range: [-61.44, 61.44] MHz\n  \
            Sample rates: [0.1, 61.44] MHz\n  \
            Filter bandwidths: [1.4, 5, 10] MHz\n  \
            Sensors: lo_locked\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_listings_are_left_out() {
        let device = SimulatedDevice::new("rtlsdr", "R820T").with_channel(
            Direction::Rx,
            SimulatedChannel::new()
                .with_gain_range(Range::new(0.0, 49.6))
                .with_frequency_range([Range::new(24e6, 1766e6)])
                .with_sample_rates([0.25e6, 1.024e6, 2.048e6]),
        );

        let text = format_channel(&device, Direction::Rx, 0).unwrap();
        assert!(text.contains("  Full-duplex: NO\n"));
        assert!(text.contains("  Full gain range: [0, 49.6] dB\n"));
        assert!(text.contains("  Full freq range: [24, 1766] MHz\n"));
        assert!(text.contains("  Sample rates: [0.25, 1.024, 2.048] MHz\n"));
        assert!(!text.contains("Antennas"));
        assert!(!text.contains("Corrections"));
        assert!(!text.contains("\n    "));
        assert!(!text.contains("Filter bandwidths"));
        assert!(!text.contains("Sensors"));
    }

    #[test]
    fn device_errors_pass_through() {
        let device = SimulatedDevice::new("lime", "LimeSDR-USB")
            .with_channel(Direction::Rx, lime_rx());

        assert_eq!(
            format_channel(&device, Direction::Tx, 0),
            Err(SimError::NoSuchChannel {
                direction: Direction::Tx,
                channel: 0,
            })
        );
        assert!(format_channel(&device, Direction::Rx, 0).is_ok());
    }
}
