// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files LICENSE-MIT.txt and LICENSE-APACHE-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Blocking panel

use log::debug;
use log::info;
use log::log_enabled;
use log::trace;
use log::Level::Trace;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::digital::PinState;

use crate::command;
use crate::sequence::DEFAULT_INIT_SEQUENCE;
use crate::ColorSpace;
use crate::DpiBus;
use crate::Error;
use crate::InitCommand;
use crate::Panel;
use crate::PanelConfig;
use crate::PanelIo;
use crate::PixelFormat;
use crate::MAX_PARAMETERS;

/// Time the reset line is held active
const RESET_ACTIVE_MS: u32 = 10;

/// Time the controller needs to come out of reset
const RESET_RECOVERY_MS: u32 = 20;

/// Initial value of the memory data access control register
const MADCTL_DEFAULT: u8 = 0x00;

/// An ST7701 panel on top of a MIPI DPI panel
///
/// Initialization, reset, mirroring, color inversion and deletion talk to the
/// controller over `IO`; every other operation goes to the `BASE` panel.
pub struct St7701<'a, IO: PanelIo, RST: OutputPin, DELAY: DelayNs, BASE: Panel> {
    /// Command transport
    io: Option<IO>,

    /// Reset pin
    rst: Option<RST>,

    /// Delay
    delay: DELAY,

    /// Current value of the memory data access control register
    madctl: u8,

    /// Pixel format
    pixel_format: PixelFormat,

    /// Custom initialization sequence
    init_commands: Option<&'a [InitCommand<'a>]>,

    /// Number of MIPI data lanes
    lane_num: u8,

    /// Whether the reset line is active high
    reset_active_high: bool,

    /// Wrapped DPI panel
    base: BASE,
}

impl<'a, IO, RST, DELAY, BASE> St7701<'a, IO, RST, DELAY, BASE>
where
    IO: PanelIo,
    RST: OutputPin,
    DELAY: DelayNs,
    BASE: Panel,
{
    /// Create a new panel
    ///
    /// The DPI panel is created on the bus found in the vendor configuration.
    /// On failure the reset pin is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the transport, the vendor
    /// configuration, the DSI bus or the DPI configuration are missing, or if
    /// a custom initialization command has too many parameters.
    ///
    /// Returns [`Error::NotSupported`] if the color space or the pixel depth
    /// are not supported.
    ///
    /// Returns an error if the reset pin cannot be driven or if the DPI panel
    /// cannot be created.
    pub fn new<BUS>(
        io: Option<IO>,
        rst: Option<RST>,
        delay: DELAY,
        config: PanelConfig<'a, '_, BUS>,
    ) -> Result<Self, Error>
    where
        BUS: DpiBus<Panel = BASE>,
    {
        info!("version: {}", env!("CARGO_PKG_VERSION"));

        let Some(io) = io else {
            debug!("Missing panel IO");
            return Err(Error::InvalidArgument);
        };
        let Some(vendor_config) = config.vendor_config else {
            debug!("Missing vendor config");
            return Err(Error::InvalidArgument);
        };
        let mipi_config = vendor_config.mipi_config;
        let (Some(dsi_bus), Some(dpi_config)) = (mipi_config.dsi_bus, mipi_config.dpi_config)
        else {
            debug!("Missing DSI bus or DPI config");
            return Err(Error::InvalidArgument);
        };

        let madctl = match config.color_space {
            ColorSpace::Rgb => MADCTL_DEFAULT & !command::MADCTL_BGR,
            ColorSpace::Bgr => MADCTL_DEFAULT | command::MADCTL_BGR,
            ColorSpace::Monochrome => {
                debug!("Unsupported color space {:?}", config.color_space);
                return Err(Error::NotSupported);
            }
        };

        let pixel_format = PixelFormat::try_from(config.bits_per_pixel).map_err(|error| {
            debug!("Unsupported pixel width {}", config.bits_per_pixel);
            error
        })?;

        if let Some(init_commands) = vendor_config.init_commands {
            if init_commands
                .iter()
                .any(|init_command| init_command.data.len() > MAX_PARAMETERS)
            {
                debug!("Custom init command with more than {MAX_PARAMETERS} parameters");
                return Err(Error::InvalidArgument);
            }
        }

        let mut rst = rst;
        if let Some(pin) = rst.as_mut() {
            debug!("Configure reset pin");
            pin.set_state(PinState::from(!config.reset_active_high))
                .map_err(Error::from_digital)?;
        }

        debug!("Create MIPI DPI panel");
        let base = dsi_bus.new_dpi_panel(dpi_config)?;
        debug!("Create MIPI DPI panel / Done");

        Ok(Self {
            io: Some(io),
            rst,
            delay,
            madctl,
            pixel_format,
            init_commands: vendor_config.init_commands,
            lane_num: mipi_config.lane_num,
            reset_active_high: config.reset_active_high,
            base,
        })
    }

    /// Get the pixel format
    #[must_use]
    pub fn pixel_format(&self) -> PixelFormat {
        self.pixel_format
    }

    /// Get the current value of the memory data access control register
    #[must_use]
    pub fn madctl(&self) -> u8 {
        self.madctl
    }

    /// Get the number of MIPI data lanes
    #[must_use]
    pub fn lane_num(&self) -> u8 {
        self.lane_num
    }

    /// Check whether the reset line is active high
    #[must_use]
    pub fn reset_active_high(&self) -> bool {
        self.reset_active_high
    }

    /// Get the wrapped DPI panel
    #[must_use]
    pub fn base(&self) -> &BASE {
        &self.base
    }

    /// Get the wrapped DPI panel mutably
    pub fn base_mut(&mut self) -> &mut BASE {
        &mut self.base
    }

    /// Detach the command transport
    ///
    /// Afterwards mirroring, inverting and initializing fail with
    /// [`Error::InvalidState`], and reset without a reset pin does nothing.
    pub fn take_io(&mut self) -> Option<IO> {
        self.io.take()
    }

    /// Delete the DPI panel and return inner hardware
    ///
    /// # Errors
    ///
    /// Returns an error if the DPI panel cannot be deleted
    pub fn release(self) -> Result<(Option<IO>, Option<RST>, DELAY), Error> {
        debug!("Release panel");
        self.base.delete()?;
        debug!("Release panel / Done");

        Ok((self.io, self.rst, self.delay))
    }

    /// Send the initialization sequence
    ///
    /// # Errors
    ///
    /// Returns an error if any commands to the panel fails
    fn send_init_commands(&mut self) -> Result<(), Error> {
        let io = self.io.as_mut().ok_or(Error::InvalidState)?;
        let init_commands = self.init_commands.unwrap_or(DEFAULT_INIT_SEQUENCE);

        debug!("Send {} init commands", init_commands.len());
        for init_command in init_commands {
            if log_enabled!(Trace) {
                trace!(
                    "Send command {:#04x} with {} parameters",
                    init_command.command,
                    init_command.data.len()
                );
            }
            io.tx_param(init_command.command, init_command.data)?;
            self.delay.delay_ms(init_command.delay_ms);
        }
        debug!("Send init commands / Done");

        Ok(())
    }

    /// Reset the panel by toggling the reset pin
    ///
    /// # Errors
    ///
    /// Returns an error if setting the pin fails.
    fn hardware_reset(&mut self) -> Result<(), Error> {
        let Some(rst) = self.rst.as_mut() else {
            return Ok(());
        };

        debug!("Hardware reset");
        let active = PinState::from(self.reset_active_high);

        trace!("Set RST active");
        rst.set_state(active).map_err(Error::from_digital)?;
        self.delay.delay_ms(RESET_ACTIVE_MS);

        trace!("Set RST inactive");
        rst.set_state(!active).map_err(Error::from_digital)?;
        self.delay.delay_ms(RESET_RECOVERY_MS);
        debug!("Hardware reset / Done");

        Ok(())
    }

    /// Send a reset command to the panel
    ///
    /// # Errors
    ///
    /// Returns an error if sending the command fails.
    fn software_reset(&mut self) -> Result<(), Error> {
        let Some(io) = self.io.as_mut() else {
            debug!("No reset pin and no panel IO, skip reset");
            return Ok(());
        };

        debug!("Software reset");
        io.tx_param(command::SOFTWARE_RESET, &[])?;
        self.delay.delay_ms(RESET_RECOVERY_MS);
        debug!("Software reset / Done");

        Ok(())
    }
}

impl<IO, RST, DELAY, BASE> Panel for St7701<'_, IO, RST, DELAY, BASE>
where
    IO: PanelIo,
    RST: OutputPin,
    DELAY: DelayNs,
    BASE: Panel,
{
    fn init(&mut self) -> Result<(), Error> {
        debug!("Initialize panel");
        self.send_init_commands()?;

        debug!("Initialize MIPI DPI panel");
        self.base.init()?;
        debug!("Initialize panel / Done");

        Ok(())
    }

    fn draw_bitmap(
        &mut self,
        x_start: u16,
        y_start: u16,
        x_end: u16,
        y_end: u16,
        color_data: &[u8],
    ) -> Result<(), Error> {
        self.base
            .draw_bitmap(x_start, y_start, x_end, y_end, color_data)
    }

    fn reset(&mut self) -> Result<(), Error> {
        if self.rst.is_some() {
            self.hardware_reset()
        } else {
            self.software_reset()
        }
    }

    /// Mirror the panel
    ///
    /// The controller has no bit for mirroring along the Y axis, so
    /// `_mirror_y` is ignored.
    fn mirror(&mut self, mirror_x: bool, _mirror_y: bool) -> Result<(), Error> {
        let io = self.io.as_mut().ok_or(Error::InvalidState)?;

        let madctl = if mirror_x {
            self.madctl | command::MADCTL_ML
        } else {
            self.madctl & !command::MADCTL_ML
        };

        debug!("Set MADCTL to {madctl:#04x}");
        io.tx_param(command::MEMORY_DATA_ACCESS_CONTROL, &[madctl])?;
        self.madctl = madctl;

        Ok(())
    }

    fn swap_xy(&mut self, swap: bool) -> Result<(), Error> {
        self.base.swap_xy(swap)
    }

    fn set_gap(&mut self, x_gap: i32, y_gap: i32) -> Result<(), Error> {
        self.base.set_gap(x_gap, y_gap)
    }

    fn invert_color(&mut self, invert: bool) -> Result<(), Error> {
        let io = self.io.as_mut().ok_or(Error::InvalidState)?;

        let code = if invert {
            command::DISPLAY_INVERSION_ON
        } else {
            command::DISPLAY_INVERSION_OFF
        };

        debug!("Set color inversion to {invert}");
        io.tx_param(code, &[])
    }

    fn display_on(&mut self, on: bool) -> Result<(), Error> {
        self.base.display_on(on)
    }

    fn sleep(&mut self, sleep: bool) -> Result<(), Error> {
        self.base.sleep(sleep)
    }

    fn delete(self) -> Result<(), Error> {
        debug!("Delete panel");
        let Self { rst, base, .. } = self;

        if rst.is_some() {
            trace!("Release reset pin");
        }
        drop(rst);

        base.delete()?;
        debug!("Delete panel / Done");

        Ok(())
    }
}
