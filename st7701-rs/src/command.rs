// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files LICENSE-MIT.txt and LICENSE-APACHE-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Commands
//!
//! Registers in the `0xB0..=0xED` range have a different meaning depending on
//! which Command2 bank is selected with [`COMMAND2_BANK_SELECT`].

/// Command for software reset
pub const SOFTWARE_RESET: u8 = 0x01;

/// Command for exiting sleep mode
pub const SLEEP_OUT: u8 = 0x11;

/// Command for turning on normal display mode
pub const NORMAL_DISPLAY_MODE_ON: u8 = 0x13;

/// Command for turning off display inversion
pub const DISPLAY_INVERSION_OFF: u8 = 0x20;

/// Command for turning on display inversion
pub const DISPLAY_INVERSION_ON: u8 = 0x21;

/// Command for turning on the display
pub const DISPLAY_ON: u8 = 0x29;

/// Command for memory data access control
pub const MEMORY_DATA_ACCESS_CONTROL: u8 = 0x36;

/// Command for selecting the regular page or a Command2 bank
pub const COMMAND2_BANK_SELECT: u8 = 0xFF;

/// Command2 BK0: display line setting
pub const LINE_SETTING: u8 = 0xC0;

/// Command2 BK0: porch control
pub const PORCH_CONTROL: u8 = 0xC1;

/// Command2 BK0: inversion selection and frame rate control
pub const INVERSION_SELECTION: u8 = 0xC2;

/// Command2 BK0: positive voltage gamma control
pub const POSITIVE_GAMMA_CONTROL: u8 = 0xB0;

/// Command2 BK0: negative voltage gamma control
pub const NEGATIVE_GAMMA_CONTROL: u8 = 0xB1;

/// Command2 BK1: Vop amplitude
pub const VOP_AMPLITUDE: u8 = 0xB0;

/// Command2 BK1: VCOM amplitude
pub const VCOM_AMPLITUDE: u8 = 0xB1;

/// Command2 BK1: VGH voltage
pub const VGH_VOLTAGE: u8 = 0xB2;

/// Command2 BK1: test command
pub const TEST_COMMAND: u8 = 0xB3;

/// Command2 BK1: VGL voltage
pub const VGL_VOLTAGE: u8 = 0xB5;

/// Command2 BK1: power control 1
pub const POWER_CONTROL_1: u8 = 0xB7;

/// Command2 BK1: power control 2
pub const POWER_CONTROL_2: u8 = 0xB8;

/// Command2 BK1: digital gamma look-up table for red
pub const DIGITAL_GAMMA_LUT_RED: u8 = 0xB9;

/// Command2 BK1: source pre-drive timing set 1
pub const SOURCE_PRE_DRIVE_1: u8 = 0xC1;

/// Command2 BK1: source pre-drive timing set 2
pub const SOURCE_PRE_DRIVE_2: u8 = 0xC2;

/// Command2 BK1: MIPI setting 1
pub const MIPI_SETTING_1: u8 = 0xD0;

/// Bit of the memory data access control register selecting BGR order
pub const MADCTL_BGR: u8 = 1 << 3;

/// Bit of the memory data access control register reversing the scan
/// direction of source lines
pub const MADCTL_ML: u8 = 1 << 4;
