// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files LICENSE-MIT.txt and LICENSE-APACHE-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Generic panel operations
//!
//! A [`Panel`] is the set of operations every LCD panel offers. Controllers
//! that only need to customize a few of them wrap another panel and forward
//! the rest, the way [`St7701`](crate::St7701) wraps a DPI panel.

use crate::Error;

/// Operations of an LCD panel
///
/// Optional operations return [`Error::NotSupported`] unless the panel
/// implements them.
pub trait Panel {
    /// Initialize the panel
    ///
    /// # Errors
    ///
    /// Returns an error if the panel cannot be brought up
    fn init(&mut self) -> Result<(), Error>;

    /// Draw a bitmap in the half-open window `[x_start, x_end) × [y_start, y_end)`
    ///
    /// # Errors
    ///
    /// Returns an error if the bitmap cannot be transferred
    fn draw_bitmap(
        &mut self,
        x_start: u16,
        y_start: u16,
        x_end: u16,
        y_end: u16,
        color_data: &[u8],
    ) -> Result<(), Error>;

    /// Reset the panel
    ///
    /// # Errors
    ///
    /// Returns an error if the reset fails
    fn reset(&mut self) -> Result<(), Error> {
        Err(Error::NotSupported)
    }

    /// Mirror the panel along the X and Y axes
    ///
    /// # Errors
    ///
    /// Returns an error if mirroring fails
    fn mirror(&mut self, _mirror_x: bool, _mirror_y: bool) -> Result<(), Error> {
        Err(Error::NotSupported)
    }

    /// Swap the X and Y axes
    ///
    /// # Errors
    ///
    /// Returns an error if swapping fails
    fn swap_xy(&mut self, _swap: bool) -> Result<(), Error> {
        Err(Error::NotSupported)
    }

    /// Set the offset of the drawing window
    ///
    /// # Errors
    ///
    /// Returns an error if the gap cannot be set
    fn set_gap(&mut self, _x_gap: i32, _y_gap: i32) -> Result<(), Error> {
        Err(Error::NotSupported)
    }

    /// Invert the colors of the panel
    ///
    /// # Errors
    ///
    /// Returns an error if inversion fails
    fn invert_color(&mut self, _invert: bool) -> Result<(), Error> {
        Err(Error::NotSupported)
    }

    /// Turn the display on or off
    ///
    /// # Errors
    ///
    /// Returns an error if the display cannot be switched
    fn display_on(&mut self, _on: bool) -> Result<(), Error> {
        Err(Error::NotSupported)
    }

    /// Enter or exit sleep mode
    ///
    /// # Errors
    ///
    /// Returns an error if the sleep mode cannot be changed
    fn sleep(&mut self, _sleep: bool) -> Result<(), Error> {
        Err(Error::NotSupported)
    }

    /// Delete the panel and release its resources
    ///
    /// # Errors
    ///
    /// Returns an error if the resources cannot be released
    fn delete(self) -> Result<(), Error>
    where
        Self: Sized,
    {
        Ok(())
    }
}

/// A bus on which DPI panels can be created
pub trait DpiBus {
    /// Configuration of a DPI panel
    type Config;

    /// Panel created on this bus
    type Panel: Panel;

    /// Create a new DPI panel
    ///
    /// # Errors
    ///
    /// Returns an error if the panel cannot be created
    fn new_dpi_panel(&mut self, config: &Self::Config) -> Result<Self::Panel, Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A panel implementing only the required operations
    struct MinimalPanel;

    impl Panel for MinimalPanel {
        fn init(&mut self) -> Result<(), Error> {
            Ok(())
        }

        fn draw_bitmap(
            &mut self,
            _x_start: u16,
            _y_start: u16,
            _x_end: u16,
            _y_end: u16,
            _color_data: &[u8],
        ) -> Result<(), Error> {
            Ok(())
        }
    }

    #[test]
    fn optional_operations_are_not_supported_by_default() {
        let mut panel = MinimalPanel;

        assert_eq!(panel.reset(), Err(Error::NotSupported));
        assert_eq!(panel.mirror(true, false), Err(Error::NotSupported));
        assert_eq!(panel.swap_xy(true), Err(Error::NotSupported));
        assert_eq!(panel.set_gap(4, 8), Err(Error::NotSupported));
        assert_eq!(panel.invert_color(true), Err(Error::NotSupported));
        assert_eq!(panel.display_on(true), Err(Error::NotSupported));
        assert_eq!(panel.sleep(true), Err(Error::NotSupported));
    }

    #[test]
    fn delete_succeeds_by_default() {
        assert_eq!(MinimalPanel.delete(), Ok(()));
    }
}
