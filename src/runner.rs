use std::io;
use std::time::{Duration, Instant};

use crate::desktop::Desktop;
use crate::drivers::{InputDriver, OutputDriver};
use crate::event_loop::{ControlFlow, EventLoop};

/// Drive `desktop` until it asks to quit.
///
/// Every event is handled to completion as it arrives. On each frame tick the
/// coalesced drag move is flushed and, if anything changed since the last
/// frame, the desktop is redrawn. Mouse capture is enabled for the duration
/// of the run.
pub fn run_desktop<O, D>(
    output: &mut O,
    input: D,
    desktop: &mut Desktop,
    poll_interval: Duration,
) -> io::Result<()>
where
    O: OutputDriver,
    D: InputDriver,
{
    let size = output.size()?;
    desktop.resize_terminal(size.width, size.height);

    let mut event_loop = EventLoop::new(input, poll_interval);
    event_loop.driver().set_mouse_capture(true)?;

    let mut dirty = true;
    let mut drawn_revision = desktop.store().revision();
    let result = event_loop.run(|_, event| {
        match event {
            Some(event) => {
                dirty = true;
                Ok(desktop.handle_event(&event, Instant::now()))
            }
            None => {
                let moved = desktop.tick();
                let revision = desktop.store().revision();
                if dirty || moved || revision != drawn_revision {
                    output.draw(|mut frame| desktop.render(&mut frame))?;
                    dirty = false;
                    drawn_revision = revision;
                }
                Ok(ControlFlow::Continue)
            }
        }
    });

    if let Err(err) = event_loop.driver().set_mouse_capture(false) {
        tracing::debug!(error = %err, "could not release mouse capture");
    }
    result
}
