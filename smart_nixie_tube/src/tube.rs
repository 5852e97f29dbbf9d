use crate::error::{Error, Result};

/// ASCII length of one encoded fragment: 7 comma-separated fields,
/// "D,L,R,BBB,RRR,GGG,BBB".
pub(crate) const FRAGMENT_LEN: usize = 21;

/// State of a single tube in the chain: one digit, two decimal points, PWM
/// brightness and an RGB backlight.
///
/// A tube has no identity of its own; it is addressed by its position in the
/// owning [`NixieDisplay`](crate::NixieDisplay).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tube {
    digit: char,
    left_decimal_point: bool,
    right_decimal_point: bool,
    brightness: u8,
    red: u8,
    green: u8,
    blue: u8,
}

impl Default for Tube {
    /// A blanked tube: no digit, decimal points off, all channels at 0.
    fn default() -> Self {
        Tube {
            digit: '-',
            left_decimal_point: false,
            right_decimal_point: false,
            brightness: 0,
            red: 0,
            green: 0,
            blue: 0,
        }
    }
}

/// Range-checks a channel value and narrows it to what the hardware latches.
pub(crate) fn validate_channel(field: &'static str, value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| Error::OutOfRange { field, value })
}

fn yn(flag: bool) -> char {
    if flag {
        'Y'
    } else {
        'N'
    }
}

impl Tube {
    /// Characters the tube can latch into its digit position.
    const DIGITS: &'static str = "0123456789-";

    /// Sets the displayed digit. Anything outside `0`-`9` falls back to `-`,
    /// which blanks the tube; the fallback is defined behavior, not an error.
    pub fn set_digit(&mut self, digit: char) {
        self.digit = if Self::DIGITS.contains(digit) {
            digit
        } else {
            '-'
        };
    }

    pub fn set_left_decimal_point(&mut self, lit: bool) {
        self.left_decimal_point = lit;
    }

    pub fn set_right_decimal_point(&mut self, lit: bool) {
        self.right_decimal_point = lit;
    }

    /// Sets the PWM brightness of the digit, 0-255.
    pub fn set_brightness(&mut self, value: i64) -> Result<()> {
        self.brightness = validate_channel("brightness", value)?;
        Ok(())
    }

    /// Sets the red channel of the RGB backlight, 0-255.
    pub fn set_red(&mut self, value: i64) -> Result<()> {
        self.red = validate_channel("red", value)?;
        Ok(())
    }

    /// Sets the green channel of the RGB backlight, 0-255.
    pub fn set_green(&mut self, value: i64) -> Result<()> {
        self.green = validate_channel("green", value)?;
        Ok(())
    }

    /// Sets the blue channel of the RGB backlight, 0-255.
    pub fn set_blue(&mut self, value: i64) -> Result<()> {
        self.blue = validate_channel("blue", value)?;
        Ok(())
    }

    /// Returns the tube to its blank state: digit off, both decimal points
    /// off, brightness and backlight at 0.
    pub fn turn_off(&mut self) {
        *self = Tube::default();
    }

    pub fn digit(&self) -> char {
        self.digit
    }

    pub fn left_decimal_point(&self) -> bool {
        self.left_decimal_point
    }

    pub fn right_decimal_point(&self) -> bool {
        self.right_decimal_point
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

    // Channel writes that skip validation; the value was range-checked by the
    // caller once for the whole chain.
    pub(crate) fn store_brightness(&mut self, value: u8) {
        self.brightness = value;
    }

    pub(crate) fn store_red(&mut self, value: u8) {
        self.red = value;
    }

    pub(crate) fn store_green(&mut self, value: u8) {
        self.green = value;
    }

    pub(crate) fn store_blue(&mut self, value: u8) {
        self.blue = value;
    }

    /// Encodes this tube's state as its fragment of the wire frame. Decimal
    /// points render as `Y`/`N`, channels as exactly 3 zero-padded decimal
    /// digits. The `$` prefix and the frame terminator are added by the
    /// owning display.
    pub fn encode_fragment(&self) -> String {
        format!(
            "{},{},{},{:03},{:03},{:03},{:03}",
            self.digit,
            yn(self.left_decimal_point),
            yn(self.right_decimal_point),
            self.brightness,
            self.red,
            self.green,
            self.blue
        )
    }
}
