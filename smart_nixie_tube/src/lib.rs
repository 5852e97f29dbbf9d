//! Driver for chained Smart Nixie Tube display units over a serial link.
//!
//! Each tube in the chain latches one digit, two decimal points, a PWM
//! brightness level and an RGB backlight color. The whole chain is updated
//! with a single framed command string per transmission:
//!
//! ```text
//! $[DIGIT],[LEFT DECIMAL POINT],[RIGHT DECIMAL POINT],[BRIGHTNESS],[RED],[GREEN],[BLUE]!
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use smart_nixie_tube::{DisplayConfig, NixieDisplay, SerialTransport};
//!
//! # fn main() -> smart_nixie_tube::Result<()> {
//! let transport = SerialTransport::open("/dev/ttyUSB0")?;
//! let mut display = NixieDisplay::new(transport, DisplayConfig::with_tube_count(4))?;
//! display.set_brightness(128)?;
//! display.set_number(1234)?;
//! display.send()?;
//! # Ok(())
//! # }
//! ```

pub mod error;

mod display;
mod transport;
mod tube;

pub use display::{DisplayConfig, NixieDisplay, DEFAULT_SETTLE_INTERVAL};
pub use error::{Error, Result};
pub use transport::{SerialTransport, Transport};
pub use tube::Tube;

#[cfg(test)]
mod tests;
