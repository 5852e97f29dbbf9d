mod serial;

pub use serial::SerialTransport;

use std::io;

/// Byte-delivery seam between the display core and the physical link.
///
/// The protocol has no return channel, so the core only ever pushes finished
/// frames down the wire. Releasing the link happens when the implementor is
/// dropped.
pub trait Transport {
    /// Discards anything buffered on the link, in both directions.
    fn clear_buffers(&mut self) -> io::Result<()>;

    /// Delivers a complete frame.
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn clear_buffers(&mut self) -> io::Result<()> {
        (**self).clear_buffers()
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        (**self).write_all(buf)
    }
}
