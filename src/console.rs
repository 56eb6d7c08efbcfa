use core::fmt;

use embedded_hal::blocking::serial;

/// Text console over a blocking serial transmitter.
///
/// Bytes go out exactly as formatted; line endings are the caller's choice.
pub struct SerialConsole<W> {
    serial: W,
}

impl<W> SerialConsole<W>
where
    W: serial::Write<u8>,
{
    pub fn new(serial: W) -> Self {
        Self { serial }
    }

    /// Block until everything written so far has left the transmitter.
    pub fn flush(&mut self) -> Result<(), W::Error> {
        self.serial.bflush()
    }

    pub fn release(self) -> W {
        self.serial
    }
}

impl<W> fmt::Write for SerialConsole<W>
where
    W: serial::Write<u8>,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.serial.bwrite_all(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

#[cfg(test)]
mod tests {
    use core::fmt::Write;

    use super::*;
    use crate::mock::FakeSerial;

    #[test]
    fn writes_bytes_verbatim() {
        let mut console = SerialConsole::new(FakeSerial::default());
        write!(console, "{}|{:6}\r\n", "\x1b[2J", -50).unwrap();
        console.flush().unwrap();
        let serial = console.release();
        assert_eq!(serial.bytes, b"\x1b[2J|   -50\r\n");
        assert_eq!(serial.flushes, 1);
    }

    #[test]
    fn transmit_errors_surface_as_fmt_errors() {
        let mut console = SerialConsole::new(FakeSerial::failing());
        assert_eq!(console.write_str("x"), Err(fmt::Error));
    }
}
