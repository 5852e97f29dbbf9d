use claims::{assert_matches, assert_ok};
use mockall::{mock, Sequence};
use smart_nixie_tube::{DisplayConfig, Error, NixieDisplay, Transport};
use std::{io, time::Duration};

mock! {
    pub Transport {}
    impl Transport for Transport {
        fn clear_buffers(&mut self) -> io::Result<()>;
        fn write_all(&mut self, buf: &[u8]) -> io::Result<()>;
    }
}

fn display_over(mock: MockTransport, tube_count: usize) -> NixieDisplay<MockTransport> {
    let mut display =
        NixieDisplay::new(mock, DisplayConfig::with_tube_count(tube_count)).unwrap();
    display.set_settle_interval(Duration::ZERO);
    display
}

#[test]
fn send_clears_buffers_before_writing() {
    let mut mock = MockTransport::new();
    let mut seq = Sequence::new();
    mock.expect_clear_buffers()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(()));
    mock.expect_write_all()
        .withf(|buf| buf == b"$5,N,N,000,000,000,000!".as_slice())
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    // Dropping the display transmits one blanked frame.
    mock.expect_clear_buffers()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(()));
    mock.expect_write_all()
        .withf(|buf| buf == b"$-,N,N,000,000,000,000!".as_slice())
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));

    let mut display = display_over(mock, 1);
    display.tube_mut(0).unwrap().set_digit('5');
    assert_ok!(display.send());
}

#[test]
fn write_failures_surface_without_rolling_back_state() {
    let mut mock = MockTransport::new();
    mock.expect_clear_buffers().returning(|| Ok(()));
    mock.expect_write_all()
        .returning(|_| Err(io::Error::new(io::ErrorKind::BrokenPipe, "wire fell out")));

    let mut display = display_over(mock, 2);
    assert_ok!(display.set_number(42));
    assert_matches!(display.send(), Err(Error::Transport(_)));

    // A failed transmission leaves the in-memory state untouched.
    assert_eq!(display.tubes()[0].digit(), '4');
    assert_eq!(display.tubes()[1].digit(), '2');
    // The teardown on drop fails the same way; those errors are swallowed.
}

#[test]
fn flush_failures_surface_before_any_write() {
    let mut mock = MockTransport::new();
    mock.expect_clear_buffers()
        .returning(|| Err(io::Error::new(io::ErrorKind::Other, "flush failed")));
    mock.expect_write_all().never();

    let mut display = display_over(mock, 1);
    assert_matches!(display.send(), Err(Error::Transport(_)));
}

#[test]
fn send_after_close_performs_no_write() {
    let mut mock = MockTransport::new();
    // Only the close() teardown may touch the transport.
    mock.expect_clear_buffers().times(1).returning(|| Ok(()));
    mock.expect_write_all().times(1).returning(|_| Ok(()));

    let mut display = display_over(mock, 1);
    display.close();
    assert_matches!(display.send(), Err(Error::TransportUnavailable(_)));
}
