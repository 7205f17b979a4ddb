// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files LICENSE-MIT.txt and LICENSE-APACHE-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Panel configuration

use crate::DpiBus;
use crate::Error;

/// Maximal number of parameter bytes in an initialization command
pub const MAX_PARAMETERS: usize = 16;

/// Order of color components on the panel
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ColorSpace {
    /// Red, green, blue
    Rgb,

    /// Blue, green, red
    Bgr,

    /// Single channel
    ///
    /// The ST7701 is a color controller, so this is always rejected.
    Monochrome,
}

/// Pixel format accepted by the interface
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PixelFormat {
    /// 16 bits per pixel
    Rgb565,

    /// 18 bits per pixel
    Rgb666,

    /// 24 bits per pixel
    Rgb888,
}

impl PixelFormat {
    /// Get the number of bits per pixel
    #[must_use]
    pub const fn bits_per_pixel(self) -> u8 {
        match self {
            Self::Rgb565 => 16,
            Self::Rgb666 => 18,
            Self::Rgb888 => 24,
        }
    }

    /// Get the value of the interface pixel format register
    #[must_use]
    pub const fn colmod(self) -> u8 {
        match self {
            Self::Rgb565 => 0x50,
            Self::Rgb666 => 0x60,
            Self::Rgb888 => 0x70,
        }
    }
}

impl TryFrom<u8> for PixelFormat {
    type Error = Error;

    fn try_from(bits_per_pixel: u8) -> Result<Self, Self::Error> {
        match bits_per_pixel {
            16 => Ok(Self::Rgb565),
            18 => Ok(Self::Rgb666),
            24 => Ok(Self::Rgb888),
            _ => Err(Error::NotSupported),
        }
    }
}

/// A command of an initialization sequence
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct InitCommand<'a> {
    /// Command code
    pub command: u8,

    /// Parameter bytes, at most [`MAX_PARAMETERS`]
    pub data: &'a [u8],

    /// Delay after the command in milliseconds
    pub delay_ms: u32,
}

impl<'a> InitCommand<'a> {
    /// Create a new initialization command
    #[must_use]
    pub const fn new(command: u8, data: &'a [u8], delay_ms: u32) -> Self {
        Self {
            command,
            data,
            delay_ms,
        }
    }
}

/// Configuration of the MIPI interface
pub struct MipiConfig<'b, BUS: DpiBus> {
    /// Bus the DPI panel is created on
    pub dsi_bus: Option<&'b mut BUS>,

    /// Configuration of the DPI panel
    pub dpi_config: Option<&'b BUS::Config>,

    /// Number of data lanes
    pub lane_num: u8,
}

impl<'b, BUS: DpiBus> MipiConfig<'b, BUS> {
    /// Create a new MIPI configuration using two data lanes
    #[must_use]
    pub fn new(dsi_bus: &'b mut BUS, dpi_config: &'b BUS::Config) -> Self {
        Self {
            dsi_bus: Some(dsi_bus),
            dpi_config: Some(dpi_config),
            lane_num: 2,
        }
    }

    /// Set the number of data lanes
    #[must_use]
    pub fn lane_num(mut self, lane_num: u8) -> Self {
        self.lane_num = lane_num;
        self
    }
}

/// Configuration specific to the ST7701
pub struct VendorConfig<'a, 'b, BUS: DpiBus> {
    /// Initialization sequence replacing the default one
    pub init_commands: Option<&'a [InitCommand<'a>]>,

    /// Configuration of the MIPI interface
    pub mipi_config: MipiConfig<'b, BUS>,
}

impl<'a, 'b, BUS: DpiBus> VendorConfig<'a, 'b, BUS> {
    /// Create a new vendor configuration using the default initialization
    /// sequence
    #[must_use]
    pub fn new(mipi_config: MipiConfig<'b, BUS>) -> Self {
        Self {
            init_commands: None,
            mipi_config,
        }
    }

    /// Use a custom initialization sequence
    #[must_use]
    pub fn init_commands(mut self, init_commands: &'a [InitCommand<'a>]) -> Self {
        self.init_commands = Some(init_commands);
        self
    }
}

/// Configuration of a panel
pub struct PanelConfig<'a, 'b, BUS: DpiBus> {
    /// Order of color components
    pub color_space: ColorSpace,

    /// Bits per pixel, one of 16, 18 and 24
    pub bits_per_pixel: u8,

    /// Whether the reset line is active high
    pub reset_active_high: bool,

    /// Configuration specific to the ST7701
    pub vendor_config: Option<VendorConfig<'a, 'b, BUS>>,
}

impl<'a, 'b, BUS: DpiBus> PanelConfig<'a, 'b, BUS> {
    /// Create a new panel configuration with an active low reset line
    #[must_use]
    pub fn new(
        color_space: ColorSpace,
        bits_per_pixel: u8,
        vendor_config: VendorConfig<'a, 'b, BUS>,
    ) -> Self {
        Self {
            color_space,
            bits_per_pixel,
            reset_active_high: false,
            vendor_config: Some(vendor_config),
        }
    }

    /// Set whether the reset line is active high
    #[must_use]
    pub fn reset_active_high(mut self, reset_active_high: bool) -> Self {
        self.reset_active_high = reset_active_high;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_depths_map_to_formats() {
        assert_eq!(PixelFormat::try_from(16_u8), Ok(PixelFormat::Rgb565));
        assert_eq!(PixelFormat::try_from(18_u8), Ok(PixelFormat::Rgb666));
        assert_eq!(PixelFormat::try_from(24_u8), Ok(PixelFormat::Rgb888));
    }

    #[test]
    fn unsupported_depths_are_rejected() {
        for bits_per_pixel in [0_u8, 1, 8, 12, 15, 17, 20, 32, 255] {
            assert_eq!(
                PixelFormat::try_from(bits_per_pixel),
                Err(Error::NotSupported),
                "{bits_per_pixel} bits per pixel"
            );
        }
    }

    #[test]
    fn colmod_values() {
        assert_eq!(PixelFormat::Rgb565.colmod(), 0x50);
        assert_eq!(PixelFormat::Rgb666.colmod(), 0x60);
        assert_eq!(PixelFormat::Rgb888.colmod(), 0x70);
    }

    #[test]
    fn bits_per_pixel_is_inverse_of_try_from() {
        for format in [PixelFormat::Rgb565, PixelFormat::Rgb666, PixelFormat::Rgb888] {
            assert_eq!(PixelFormat::try_from(format.bits_per_pixel()), Ok(format));
        }
    }
}
