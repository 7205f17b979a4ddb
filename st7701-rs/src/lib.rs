// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files LICENSE-MIT.txt and LICENSE-APACHE-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Interface to ST7701 MIPI-DSI LCD controllers
//!
//! The controller only needs to be configured over its command bus; pixels
//! are streamed by a separate MIPI DPI panel. [`St7701`] wraps such a panel,
//! takes over initialization, reset, mirroring, color inversion and deletion,
//! and forwards everything else.
//!
//! ```ignore
//! let mipi_config = MipiConfig::new(&mut dsi_bus, &dpi_config).lane_num(2);
//! let config = PanelConfig::new(ColorSpace::Rgb, 24, VendorConfig::new(mipi_config));
//!
//! let mut panel = St7701::new(Some(io), Some(reset_pin), delay, config)?;
//! panel.reset()?;
//! panel.init()?;
//! panel.draw_bitmap(0, 0, 480, 800, &frame)?;
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod blocking;
pub use self::blocking::St7701;

pub mod command;

mod config;
pub use self::config::ColorSpace;
pub use self::config::InitCommand;
pub use self::config::MipiConfig;
pub use self::config::PanelConfig;
pub use self::config::PixelFormat;
pub use self::config::VendorConfig;
pub use self::config::MAX_PARAMETERS;

mod error;
pub use self::error::Error;

mod io;
pub use self::io::PanelIo;
pub use self::io::SpiInterface;

mod panel;
pub use self::panel::DpiBus;
pub use self::panel::Panel;

pub mod sequence;
