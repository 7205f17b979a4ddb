// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files LICENSE-MIT.txt and LICENSE-APACHE-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Default initialization sequence
//!
//! Values come from the panel vendor and differ between manufacturers; panels
//! not matching them should be given their own sequence through
//! [`VendorConfig::init_commands`](crate::VendorConfig::init_commands).
//!
//! Bank registers are only valid while their bank is selected, so entries must
//! not be reordered.

use crate::command;
use crate::InitCommand;

/// Parameters selecting the regular command page
const REGULAR_PAGE: &[u8] = &[0x77, 0x01, 0x00, 0x00, 0x00];

/// Parameters selecting Command2 bank 0
const COMMAND2_BANK0: &[u8] = &[0x77, 0x01, 0x00, 0x00, 0x10];

/// Parameters selecting Command2 bank 1
const COMMAND2_BANK1: &[u8] = &[0x77, 0x01, 0x00, 0x00, 0x11];

/// Sequence sent by [`Panel::init`](crate::Panel::init) when no custom one is
/// configured
pub const DEFAULT_INIT_SEQUENCE: &[InitCommand<'static>] = &[
    InitCommand::new(command::COMMAND2_BANK_SELECT, REGULAR_PAGE, 0),
    InitCommand::new(command::NORMAL_DISPLAY_MODE_ON, &[], 0),
    InitCommand::new(0xEF, &[0x08], 0),
    //
    InitCommand::new(command::COMMAND2_BANK_SELECT, COMMAND2_BANK0, 0),
    // (0x63 + 1) * 8 = 800 lines
    InitCommand::new(command::LINE_SETTING, &[0x63, 0x00], 0),
    // VBP = 16, VFP = 2
    InitCommand::new(command::PORCH_CONTROL, &[0x10, 0x02], 0),
    // PCLK = 512 + 8 * 16 = 640
    InitCommand::new(command::INVERSION_SELECTION, &[0x37, 0x08], 0),
    InitCommand::new(0xCC, &[0x38], 0),
    InitCommand::new(
        command::POSITIVE_GAMMA_CONTROL,
        &[
            0x40, 0xC9, 0x90, 0x0D, 0x0F, 0x04, 0x00, 0x07, 0x07, 0x1C, 0x04, 0x52, 0x0F, 0xDF,
            0x26, 0xCF,
        ],
        0,
    ),
    InitCommand::new(
        command::NEGATIVE_GAMMA_CONTROL,
        &[
            0x40, 0xC9, 0xCF, 0x0C, 0x90, 0x04, 0x00, 0x07, 0x08, 0x1B, 0x06, 0x55, 0x13, 0x62,
            0xE7, 0xCF,
        ],
        0,
    ),
    //
    InitCommand::new(command::COMMAND2_BANK_SELECT, COMMAND2_BANK1, 0),
    InitCommand::new(command::VOP_AMPLITUDE, &[0x5D], 0),
    InitCommand::new(command::VCOM_AMPLITUDE, &[0x2D], 0),
    InitCommand::new(command::VGH_VOLTAGE, &[0x07], 0),
    InitCommand::new(command::TEST_COMMAND, &[0x80], 0),
    InitCommand::new(command::VGL_VOLTAGE, &[0x08], 0),
    InitCommand::new(command::POWER_CONTROL_1, &[0x85], 0),
    InitCommand::new(command::POWER_CONTROL_2, &[0x20], 0),
    InitCommand::new(command::DIGITAL_GAMMA_LUT_RED, &[0x10], 0),
    InitCommand::new(command::SOURCE_PRE_DRIVE_1, &[0x78], 0),
    InitCommand::new(command::SOURCE_PRE_DRIVE_2, &[0x78], 0),
    InitCommand::new(command::MIPI_SETTING_1, &[0x88], 100),
    // Gate timing
    InitCommand::new(0xE0, &[0x00, 0x19, 0x02], 0),
    InitCommand::new(
        0xE1,
        &[
            0x05, 0xA0, 0x07, 0xA0, 0x04, 0xA0, 0x06, 0xA0, 0x00, 0x44, 0x44,
        ],
        0,
    ),
    InitCommand::new(
        0xE2,
        &[
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ],
        0,
    ),
    InitCommand::new(0xE3, &[0x00, 0x00, 0x33, 0x33], 0),
    InitCommand::new(0xE4, &[0x44, 0x44], 0),
    InitCommand::new(
        0xE5,
        &[
            0x0D, 0x31, 0xC8, 0xAF, 0x0F, 0x33, 0xC8, 0xAF, 0x09, 0x2D, 0xC8, 0xAF, 0x0B, 0x2F,
            0xC8, 0xAF,
        ],
        0,
    ),
    InitCommand::new(0xE6, &[0x00, 0x00, 0x33, 0x33], 0),
    InitCommand::new(0xE7, &[0x44, 0x44], 0),
    InitCommand::new(
        0xE8,
        &[
            0x0C, 0x30, 0xC8, 0xAF, 0x0E, 0x32, 0xC8, 0xAF, 0x08, 0x2C, 0xC8, 0xAF, 0x0A, 0x2E,
            0xC8, 0xAF,
        ],
        0,
    ),
    InitCommand::new(0xEB, &[0x02, 0x00, 0xE4, 0xE4, 0x44, 0x00, 0x40], 0),
    InitCommand::new(0xEC, &[0x3C, 0x00], 0),
    InitCommand::new(
        0xED,
        &[
            0xAB, 0x89, 0x76, 0x54, 0x01, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x10, 0x45, 0x67,
            0x98, 0xBA,
        ],
        0,
    ),
    //
    InitCommand::new(command::COMMAND2_BANK_SELECT, REGULAR_PAGE, 0),
    InitCommand::new(command::SLEEP_OUT, &[], 120),
    InitCommand::new(command::DISPLAY_ON, &[], 50),
];
