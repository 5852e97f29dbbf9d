
use crate::{transport::Transport, DisplayConfig, NixieDisplay};
use std::{io, time::Duration};

/// Transport that records every frame and never fails.
#[derive(Debug, Default)]
pub(crate) struct RecordingTransport {
    pub frames: Vec<Vec<u8>>,
    pub cleared: usize,
}

impl Transport for RecordingTransport {
    fn clear_buffers(&mut self) -> io::Result<()> {
        self.cleared += 1;
        Ok(())
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.frames.push(buf.to_vec());
        Ok(())
    }
}

/// A display of blanked tubes over a recording transport, with the settle
/// pause disabled so tests don't wait on it.
pub(crate) fn blank_display(tube_count: usize) -> NixieDisplay<RecordingTransport> {
    let mut display = NixieDisplay::new(
        RecordingTransport::default(),
        DisplayConfig::with_tube_count(tube_count),
    )
    .unwrap();
    display.set_settle_interval(Duration::ZERO);
    display
}
