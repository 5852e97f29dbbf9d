use clap::Args;
use simple_eyre::{eyre::eyre, Result};
use smart_nixie_tube::{DisplayConfig, NixieDisplay, SerialTransport};

#[derive(Args)]
pub struct SerialConf {
    /// Name of serial port that should be used
    #[clap(short, long, value_parser)]
    pub serial: String,
}

pub type SerialDisplay = NixieDisplay<SerialTransport>;

impl SerialConf {
    pub fn open_display(&self, config: DisplayConfig) -> Result<SerialDisplay> {
        let transport = SerialTransport::open(&self.serial)
            .map_err(|err| eyre!("Could not open serial port: {err}"))?;
        NixieDisplay::new(transport, config)
            .map_err(|err| eyre!("Could not set up display: {err}"))
    }
}
