#![cfg_attr(not(test), no_std)]
//! SDR Device Capability Report
//!
//! This crate renders a human readable capability report for software-defined-radio
//! devices. It queries a fixed set of read-only capability accessors (antennas, gains,
//! frequency ranges, sample rates, sensors, clock/time sources, GPIO banks and UARTs)
//! and formats the answers into a text snapshot suitable for a console or a log file.
//!
//! # Features
//! - Works against any device layer implementing [`DeviceQuery`]
//! - Fixed report layout, stable across devices
//! - Frequencies, sample rates and bandwidths shown in MHz, gains in dB
//! - Device errors propagated untouched
//! - `no_std` compatible (requires `alloc`)
//!
//! # Architecture
//! The crate is organized into several modules:
//!
//! - [`device`]: Capability query interface consumed by the report
//!   - [`DeviceQuery`] trait with default answers for optional capabilities
//!   - [`Direction`], [`Range`] and [`Kwargs`] value types
//!
//! - [`report`]: Report generation
//!   - [`report::channel`]: Per-channel sections and the [`Corrections`] flag set
//!   - [`report::values`]: Rendering of name lists, ranges and number lists
//!   - [`report::number`]: Six significant digit number rendering
//!
//! - [`sim`]: In-memory simulated device for offline reports and tests
//!
//! # Report Layout
//! ```text
//!
//! ----------------------------------------------------
//! -- Device identification
//! ----------------------------------------------------
//!   driver=rtlsdr
//!   hardware=R820T
//!
//! ----------------------------------------------------
//! -- Peripheral summary
//! ----------------------------------------------------
//!   Channels: 1 Rx, 0 Tx
//!   Timestamps: NO
//!
//! ----------------------------------------------------
//! -- RX Channel 0
//! ----------------------------------------------------
//!   Full-duplex: NO
//!   Antennas: RX
//!   Full gain range: [0, 49.6] dB
//!     TUNER gain range: [0, 49.6] dB
//!   Full freq range: [24, 1766] MHz
//!   Sample rates: [0.25, 1.024, 2.048] MHz
//! ```
//!
//! # Important Notes
//! - Queries are issued sequentially, in report order, through `&self`
//! - Lines for empty name lists are left out of the report
//! - Hardware info pairs are listed in the order the device yields them
//! - The first failing query aborts the report, no partial text is returned
//! - The crate does not install a logger; `log` records are emitted at debug/trace
//!
//! # Example
//! ```no_run
//! use sdr_probe::{format_device, DeviceQuery};
//!
//! fn print_report<D: DeviceQuery>(device: &D) -> Result<(), D::Error> {
//!     let report = format_device(device)?;
//!     # let _ = report;
//!     Ok(())
//! }
//! ```

extern crate alloc;

pub mod device;
pub mod report;
pub mod sim;

pub use device::{DeviceQuery, Direction, Kwargs, Range};
pub use report::{format_channel, format_device, Corrections};
