mod cli;
mod serial;

use clap::Parser;
use simple_eyre::Result;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use cli::{Cli, ClearConf, Commands, ShowConf};
use smart_nixie_tube::DisplayConfig;

fn main() -> Result<()> {
    simple_eyre::install()?;
    let cli = Cli::parse();
    env_logger::init();

    match &cli.command {
        Commands::List => list_serial(),
        Commands::Show(conf) => show_number(conf),
        Commands::Clear(conf) => clear_display(conf),
    }
}

/// Returns std::io::Write stream with coloring enabled if program is run interactively
fn get_stdout() -> StandardStream {
    StandardStream::stdout(if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    })
}

fn list_serial() -> Result<()> {
    let mut stdout = get_stdout();
    let paths = serialport::available_ports()?;
    if paths.is_empty() {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
        writeln!(&mut stdout, "No connected serial ports found.")?;
    } else {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        writeln!(&mut stdout, "Connected serial ports:")?;
    }
    stdout.reset()?;
    paths.iter().for_each(|p| println!("{}", p.port_name));

    Ok(())
}

fn show_number(conf: &ShowConf) -> Result<()> {
    log::debug!("Showing {} on a chain of {} tubes", conf.number, conf.tubes);
    let mut display = conf.serial.open_display(conf.display_config())?;
    display.set_number(conf.number)?;
    display.send()?;
    // Hand the port back without the blanking teardown so the number stays
    // latched after this process exits.
    let _ = display.into_transport();
    Ok(())
}

fn clear_display(conf: &ClearConf) -> Result<()> {
    let mut display = conf
        .serial
        .open_display(DisplayConfig::with_tube_count(conf.tubes))?;
    // Closing transmits the blanked frame.
    display.close();
    Ok(())
}
