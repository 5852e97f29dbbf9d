use crate::{
    error::{Error, Result},
    transport::Transport,
    tube::{validate_channel, Tube, FRAGMENT_LEN},
};
use std::{thread, time::Duration};

/// How long the hardware needs to latch a frame before the next write may
/// begin.
pub const DEFAULT_SETTLE_INTERVAL: Duration = Duration::from_millis(100);

/// Initial state for a freshly constructed display. Brightness and color
/// defaults are fanned out to every tube through the bulk setters, so an
/// out-of-range value fails construction.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub tube_count: usize,
    pub brightness: i64,
    pub red: i64,
    pub green: i64,
    pub blue: i64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            tube_count: 1,
            brightness: 0,
            red: 0,
            green: 0,
            blue: 0,
        }
    }
}

impl DisplayConfig {
    /// Config for a chain of `tube_count` blanked tubes.
    pub fn with_tube_count(tube_count: usize) -> Self {
        DisplayConfig {
            tube_count,
            ..DisplayConfig::default()
        }
    }
}

fn closed() -> Error {
    Error::TransportUnavailable("display has been closed".to_string())
}

/// A chain of Smart Nixie Tubes driven over one exclusively owned transport.
///
/// Tubes are ordered the way they are installed, left to right; the tube at
/// index 0 is the leftmost one. The display owns the transport from
/// construction until [`close`](NixieDisplay::close) (or drop), after which
/// every mutator and [`send`](NixieDisplay::send) fails with
/// [`Error::TransportUnavailable`].
#[derive(Debug)]
pub struct NixieDisplay<T: Transport> {
    tubes: Vec<Tube>,
    brightness: u8,
    red: u8,
    green: u8,
    blue: u8,
    transport: Option<T>,
    settle_interval: Duration,
}

impl<T: Transport> NixieDisplay<T> {
    /// Builds a display of `config.tube_count` blanked tubes over an already
    /// opened transport, then applies the configured defaults to every tube.
    pub fn new(transport: T, config: DisplayConfig) -> Result<Self> {
        if config.tube_count < 1 {
            return Err(Error::InvalidArgument("tube count must be greater than 0"));
        }
        let mut display = NixieDisplay {
            tubes: vec![Tube::default(); config.tube_count],
            brightness: 0,
            red: 0,
            green: 0,
            blue: 0,
            transport: Some(transport),
            settle_interval: DEFAULT_SETTLE_INTERVAL,
        };
        display.set_brightness(config.brightness)?;
        display.set_red(config.red)?;
        display.set_green(config.green)?;
        display.set_blue(config.blue)?;
        Ok(display)
    }

    fn ensure_open(&self) -> Result<()> {
        if self.transport.is_some() {
            Ok(())
        } else {
            Err(closed())
        }
    }

    pub fn tube_count(&self) -> usize {
        self.tubes.len()
    }

    pub fn tubes(&self) -> &[Tube] {
        &self.tubes
    }

    /// Mutable access to a single tube for per-tube digit and decimal point
    /// control.
    pub fn tube_mut(&mut self, index: usize) -> Result<&mut Tube> {
        self.ensure_open()?;
        self.tubes
            .get_mut(index)
            .ok_or(Error::InvalidArgument("tube index out of bounds"))
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    pub fn settle_interval(&self) -> Duration {
        self.settle_interval
    }

    /// Overrides the pause inserted after each transmitted frame. The
    /// default of [`DEFAULT_SETTLE_INTERVAL`] matches the latching time of
    /// the stock hardware.
    pub fn set_settle_interval(&mut self, interval: Duration) {
        self.settle_interval = interval;
    }

    /// Sets the PWM brightness of the whole display: the value is validated
    /// once, then overwrites the brightness of every tube.
    pub fn set_brightness(&mut self, value: i64) -> Result<()> {
        self.ensure_open()?;
        let value = validate_channel("brightness", value)?;
        self.brightness = value;
        for tube in &mut self.tubes {
            tube.store_brightness(value);
        }
        Ok(())
    }

    /// Sets the red backlight channel of the whole display.
    pub fn set_red(&mut self, value: i64) -> Result<()> {
        self.ensure_open()?;
        let value = validate_channel("red", value)?;
        self.red = value;
        for tube in &mut self.tubes {
            tube.store_red(value);
        }
        Ok(())
    }

    /// Sets the green backlight channel of the whole display.
    pub fn set_green(&mut self, value: i64) -> Result<()> {
        self.ensure_open()?;
        let value = validate_channel("green", value)?;
        self.green = value;
        for tube in &mut self.tubes {
            tube.store_green(value);
        }
        Ok(())
    }

    /// Sets the blue backlight channel of the whole display.
    pub fn set_blue(&mut self, value: i64) -> Result<()> {
        self.ensure_open()?;
        let value = validate_channel("blue", value)?;
        self.blue = value;
        for tube in &mut self.tubes {
            tube.store_blue(value);
        }
        Ok(())
    }

    /// Blanks every digit and zeroes every channel. Decimal points are left
    /// untouched so separator dots survive a digit reset; this differs from
    /// [`Tube::turn_off`], which clears them.
    pub fn reset(&mut self) -> Result<()> {
        self.ensure_open()?;
        for tube in &mut self.tubes {
            tube.set_digit('-');
            tube.store_brightness(0);
            tube.store_red(0);
            tube.store_green(0);
            tube.store_blue(0);
        }
        Ok(())
    }

    /// Spreads the decimal rendering of a non-negative `number` across the
    /// chain, zero-padded on the left so the first tube carries the most
    /// significant digit.
    pub fn set_number(&mut self, number: i64) -> Result<()> {
        self.ensure_open()?;
        if number < 0 {
            return Err(Error::InvalidArgument("display number must be positive"));
        }
        let digits = number.to_string();
        if digits.len() > self.tubes.len() {
            return Err(Error::NotEnoughTubes { number });
        }
        let padded = format!("{number:0width$}", width = self.tubes.len());
        for (tube, digit) in self.tubes.iter_mut().zip(padded.chars()) {
            tube.set_digit(digit);
        }
        Ok(())
    }

    /// Encodes the full command frame for the current state.
    ///
    /// Fragments are emitted in reverse installation order: every byte
    /// written shifts through the daisy chain one tube at a time, so the
    /// rightmost tube's data has to go first for it to sit at the far end
    /// when the `!` latch byte arrives.
    pub fn encode_frame(&self) -> String {
        let mut frame = String::with_capacity(self.tubes.len() * (FRAGMENT_LEN + 1) + 1);
        for tube in self.tubes.iter().rev() {
            frame.push('$');
            frame.push_str(&tube.encode_fragment());
        }
        frame.push('!');
        frame
    }

    /// Transmits the current state: clears whatever is buffered on the link,
    /// writes the encoded frame, then sleeps for the settle interval so the
    /// chain can latch before the next write.
    ///
    /// A failed transmission leaves the in-memory state untouched; nothing
    /// is retried.
    pub fn send(&mut self) -> Result<()> {
        let frame = self.encode_frame();
        let transport = self.transport.as_mut().ok_or_else(closed)?;
        log::trace!("Transmitting frame {frame:?}");
        transport.clear_buffers()?;
        transport.write_all(frame.as_bytes())?;
        thread::sleep(self.settle_interval);
        Ok(())
    }

    /// Blanks the hardware and releases the transport. Errors are logged
    /// and swallowed; a failed blanking transmission leaves the last frame
    /// on the tubes. Closing an already closed display is a no-op, and
    /// dropping the display performs the same teardown.
    pub fn close(&mut self) {
        if self.transport.is_none() {
            return;
        }
        if let Err(err) = self.reset().and_then(|_| self.send()) {
            log::warn!("Failed to blank display during shutdown: {err}");
        }
        self.transport = None;
    }

    /// Releases the transport without the blanking teardown, leaving
    /// whatever was last transmitted latched on the hardware. Returns `None`
    /// if the display was already closed.
    pub fn into_transport(mut self) -> Option<T> {
        self.transport.take()
    }
}

impl<T: Transport> Drop for NixieDisplay<T> {
    fn drop(&mut self) {
        self.close();
    }
}
