// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files LICENSE-MIT.txt and LICENSE-APACHE-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Data structures and functions for error handling

use embedded_hal::digital::Error as DigitalError;
use embedded_hal::digital::ErrorKind as DigitalErrorKind;
use embedded_hal::spi::Error as SpiError;
use embedded_hal::spi::ErrorKind as SpiErrorKind;

/// An error
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A required argument was missing or malformed
    InvalidArgument,

    /// The requested color space or pixel depth is not supported
    NotSupported,

    /// A collaborator could not allocate memory
    NoMemory,

    /// The operation requires a transport, but the panel has none
    InvalidState,

    /// An error in the underlying SPI bus
    Spi(SpiErrorKind),

    /// An error in the underlying digital system
    Digital(DigitalErrorKind),

    /// An error code reported by the platform layer
    Platform(i32),
}

impl<E> From<E> for Error
where
    E: SpiError,
{
    fn from(error: E) -> Self {
        Self::Spi(error.kind())
    }
}

impl Error {
    /// Convert a digital error to an error
    #[allow(clippy::needless_pass_by_value)]
    pub fn from_digital<E>(error: E) -> Self
    where
        E: DigitalError,
    {
        Self::Digital(error.kind())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            Self::InvalidArgument => write!(f, "invalid argument"),
            Self::NotSupported => write!(f, "not supported"),
            Self::NoMemory => write!(f, "out of memory"),
            Self::InvalidState => write!(f, "invalid panel state"),
            Self::Spi(kind) => write!(f, "SPI error: {kind}"),
            Self::Digital(kind) => write!(f, "digital error: {kind}"),
            Self::Platform(code) => write!(f, "platform error {code}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A pin error that always reports the same kind
    #[derive(Debug)]
    struct PinFailure;

    impl DigitalError for PinFailure {
        fn kind(&self) -> DigitalErrorKind {
            DigitalErrorKind::Other
        }
    }

    /// A bus error that always reports a mode fault
    #[derive(Debug)]
    struct BusFailure;

    impl SpiError for BusFailure {
        fn kind(&self) -> SpiErrorKind {
            SpiErrorKind::ModeFault
        }
    }

    #[test]
    fn spi_error_keeps_its_kind() {
        let error: Error = BusFailure.into();
        assert_eq!(error, Error::Spi(SpiErrorKind::ModeFault));
    }

    #[test]
    fn digital_error_keeps_its_kind() {
        let error = Error::from_digital(PinFailure);
        assert_eq!(error, Error::Digital(DigitalErrorKind::Other));
    }

    #[test]
    fn question_mark_converts_spi_errors() {
        fn send() -> Result<(), Error> {
            Err::<(), _>(BusFailure)?;
            Ok(())
        }

        assert_eq!(send(), Err(Error::Spi(SpiErrorKind::ModeFault)));
    }
}
