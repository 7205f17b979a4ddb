// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files LICENSE-MIT.txt and LICENSE-APACHE-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Command transport

use log::debug;
use log::log_enabled;
use log::trace;
use log::Level::Trace;

use embedded_hal::spi::SpiDevice;

use crate::Error;
use crate::MAX_PARAMETERS;

/// Number of bits in a serial frame
const FRAME_BITS: usize = 9;

/// Size of the largest transfer, a command with all its parameters
const BUFFER_SIZE: usize = ((MAX_PARAMETERS + 1) * FRAME_BITS).div_ceil(8);

/// A transport for sending commands and their parameters to a panel
pub trait PanelIo {
    /// Send a command followed by its parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the transfer fails
    fn tx_param(&mut self, command: u8, params: &[u8]) -> Result<(), Error>;
}

impl<T> PanelIo for &mut T
where
    T: PanelIo + ?Sized,
{
    fn tx_param(&mut self, command: u8, params: &[u8]) -> Result<(), Error> {
        (**self).tx_param(command, params)
    }
}

/// A 3-wire SPI transport with 9-bit frames
///
/// Every byte travels in a frame whose first bit is low for a command and
/// high for a parameter. Frames are packed back to back into 8-bit words, so
/// any [`SpiDevice`] can carry them. The padding bits at the end of a transfer
/// are discarded by the controller when chip select is released.
pub struct SpiInterface<SPI: SpiDevice> {
    /// SPI interface
    spi: SPI,
}

impl<SPI> SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    /// Create a new transport
    #[must_use]
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Release transport and return inner hardware
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> PanelIo for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    fn tx_param(&mut self, command: u8, params: &[u8]) -> Result<(), Error> {
        if params.len() > MAX_PARAMETERS {
            debug!(
                "Command {command:#04x} has {} parameters, more than {MAX_PARAMETERS}",
                params.len()
            );
            return Err(Error::InvalidArgument);
        }

        let mut frames = Frames::default();
        frames.push(false, command);
        for &param in params {
            frames.push(true, param);
        }

        let bytes = frames.as_bytes();
        if log_enabled!(Trace) {
            trace!(
                "Write command {command:#04x} as {} bytes to SPI",
                bytes.len()
            );
        }
        self.spi.write(bytes)?;

        Ok(())
    }
}

/// 9-bit frames packed most significant bit first
struct Frames {
    /// Packed frames
    bytes: [u8; BUFFER_SIZE],

    /// Number of bits written so far
    bits: usize,
}

impl Default for Frames {
    fn default() -> Self {
        Self {
            bytes: [0; BUFFER_SIZE],
            bits: 0,
        }
    }
}

impl Frames {
    /// Append a frame carrying a command or a parameter
    fn push(&mut self, is_data: bool, byte: u8) {
        let frame = (u16::from(is_data) << 8) | u16::from(byte);
        for shift in (0..FRAME_BITS).rev() {
            if (frame >> shift) & 1 == 1 {
                if let Some(slot) = self.bytes.get_mut(self.bits / 8) {
                    *slot |= 0x80 >> (self.bits % 8);
                }
            }
            self.bits += 1;
        }
    }

    /// Get the bytes holding all frames written so far
    fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.bits.div_ceil(8)]
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::cell::RefCell;

    use std::rc::Rc;
    use std::vec;
    use std::vec::Vec;

    use embedded_hal::spi::ErrorKind as SpiErrorKind;
    use embedded_hal::spi::ErrorType as SpiErrorType;
    use embedded_hal::spi::Operation;

    use super::*;

    /// Shared record of SPI writes
    type Writes = Rc<RefCell<Vec<Vec<u8>>>>;

    /// Error returned by a failing SPI mock
    #[derive(Debug)]
    struct Overrun;

    impl embedded_hal::spi::Error for Overrun {
        fn kind(&self) -> SpiErrorKind {
            SpiErrorKind::Overrun
        }
    }

    /// SPI device recording every write
    struct MockSpi {
        /// Record of writes
        writes: Writes,

        /// Whether every transfer fails
        failing: bool,
    }

    impl SpiErrorType for MockSpi {
        type Error = Overrun;
    }

    impl SpiDevice for MockSpi {
        fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Overrun> {
            if self.failing {
                return Err(Overrun);
            }
            for operation in operations.iter() {
                if let Operation::Write(data) = *operation {
                    self.writes.borrow_mut().push(data.to_vec());
                }
            }
            Ok(())
        }
    }

    /// Create a transport over a mock
    fn interface(failing: bool) -> (SpiInterface<MockSpi>, Writes) {
        let writes = Writes::default();
        let spi = MockSpi {
            writes: Rc::clone(&writes),
            failing,
        };
        (SpiInterface::new(spi), writes)
    }

    #[test]
    fn command_without_parameters_is_a_single_frame() {
        let (mut interface, writes) = interface(false);

        assert_eq!(interface.tx_param(0x11, &[]), Ok(()));

        // 0_0001_0001, padded to two bytes
        assert_eq!(*writes.borrow(), vec![vec![0x08, 0x80]]);
    }

    #[test]
    fn parameters_are_flagged_with_a_high_first_bit() {
        let (mut interface, writes) = interface(false);

        assert_eq!(interface.tx_param(0x36, &[0x18]), Ok(()));

        // 0_0011_0110 1_0001_1000, padded to three bytes
        assert_eq!(*writes.borrow(), vec![vec![0x1B, 0x46, 0x00]]);
    }

    #[test]
    fn eight_frames_fill_nine_bytes() {
        let (mut interface, writes) = interface(false);

        assert_eq!(interface.tx_param(0xFF, &[0xFF; 7]), Ok(()));

        let mut expected = vec![0xFF_u8; 9];
        expected[0] = 0x7F;
        assert_eq!(*writes.borrow(), vec![expected]);
    }

    #[test]
    fn longest_command_is_sent_in_one_transfer() {
        let (mut interface, writes) = interface(false);

        assert_eq!(interface.tx_param(0xB0, &[0x00; MAX_PARAMETERS]), Ok(()));

        let recorded = writes.borrow();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].len(), BUFFER_SIZE);
    }

    #[test]
    fn too_many_parameters_are_rejected() {
        let (mut interface, writes) = interface(false);

        assert_eq!(
            interface.tx_param(0xB0, &[0x00; MAX_PARAMETERS + 1]),
            Err(Error::InvalidArgument)
        );
        assert!(writes.borrow().is_empty());
    }

    #[test]
    fn spi_failure_is_reported_with_its_kind() {
        let (mut interface, _writes) = interface(true);

        assert_eq!(
            interface.tx_param(0x29, &[]),
            Err(Error::Spi(SpiErrorKind::Overrun))
        );
    }

    #[test]
    fn mutable_reference_is_a_transport() {
        /// Send a command through a transport taken by value
        fn sleep_out<IO: PanelIo>(mut io: IO) -> Result<(), Error> {
            io.tx_param(0x11, &[])
        }

        let (mut interface, writes) = interface(false);

        assert_eq!(sleep_out(&mut interface), Ok(()));
        assert_eq!(sleep_out(&mut interface), Ok(()));

        assert_eq!(writes.borrow().len(), 2);
        let _spi = interface.release();
    }
}
