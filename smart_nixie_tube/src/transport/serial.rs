use super::Transport;
use crate::error::{Error, Result};
use serialport::{ClearBuffer, SerialPort};
use std::{
    io::{self, Write},
    time::Duration,
};

/// Baud rate the tube controllers listen on. The rest of the port setup is
/// the serial default, 8N1.
const BAUD_RATE: u32 = 115_200;

const WRITE_TIMEOUT: Duration = Duration::from_millis(100);

/// Production transport: a point-to-point serial link to the first tube in
/// the chain.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
}

impl SerialTransport {
    /// Opens the named port eagerly. The port is released when the value is
    /// dropped.
    pub fn open(port_name: &str) -> Result<Self> {
        if port_name.is_empty() {
            return Err(Error::TransportUnavailable(
                "no serial port specified".to_string(),
            ));
        }
        let port = serialport::new(port_name, BAUD_RATE)
            .timeout(WRITE_TIMEOUT)
            .open()
            .map_err(|err| {
                Error::TransportUnavailable(format!(
                    "error opening serial port {port_name}: {err}"
                ))
            })?;
        Ok(SerialTransport { port })
    }
}

impl Transport for SerialTransport {
    fn clear_buffers(&mut self) -> io::Result<()> {
        self.port.clear(ClearBuffer::All).map_err(io::Error::from)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.port.write_all(buf)?;
        self.port.flush()
    }
}
