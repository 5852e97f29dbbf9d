use crate::serial::SerialConf;
use clap::{Args, Parser, Subcommand};
use smart_nixie_tube::DisplayConfig;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lists connected serial devices
    List,
    /// Show a number on the display
    Show(ShowConf),
    /// Blank the display and turn all backlights off
    Clear(ClearConf),
}

#[derive(Args)]
pub struct ShowConf {
    /// Number to display, most significant digit on the leftmost tube
    #[clap(value_parser)]
    pub number: i64,

    /// Amount of tubes in the connected chain
    #[clap(short, long, value_parser, default_value_t = 4)]
    pub tubes: usize,

    /// PWM brightness for every tube, 0-255
    #[clap(short, long, value_parser, default_value_t = 128)]
    pub brightness: i64,

    /// Red channel of the backlight, 0-255
    #[clap(long, value_parser, default_value_t = 0)]
    pub red: i64,

    /// Green channel of the backlight, 0-255
    #[clap(long, value_parser, default_value_t = 0)]
    pub green: i64,

    /// Blue channel of the backlight, 0-255
    #[clap(long, value_parser, default_value_t = 0)]
    pub blue: i64,

    #[clap(flatten)]
    pub serial: SerialConf,
}

impl ShowConf {
    pub fn display_config(&self) -> DisplayConfig {
        DisplayConfig {
            tube_count: self.tubes,
            brightness: self.brightness,
            red: self.red,
            green: self.green,
            blue: self.blue,
        }
    }
}

#[derive(Args)]
pub struct ClearConf {
    /// Amount of tubes in the connected chain
    #[clap(short, long, value_parser, default_value_t = 4)]
    pub tubes: usize,

    #[clap(flatten)]
    pub serial: SerialConf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_conf_maps_onto_display_config() {
        let conf = ShowConf {
            number: 42,
            tubes: 6,
            brightness: 128,
            red: 1,
            green: 2,
            blue: 3,
            serial: SerialConf {
                serial: "/dev/null".to_string(),
            },
        };
        let config = conf.display_config();
        assert_eq!(config.tube_count, 6);
        assert_eq!(config.brightness, 128);
        assert_eq!(config.red, 1);
        assert_eq!(config.green, 2);
        assert_eq!(config.blue, 3);
    }
}
