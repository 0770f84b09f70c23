//! Interactive loop: read commands, trigger fetches, drain screen events.
//!
//! The shutdown future is pinned once and raced against every wait,
//! including the final drain after input closes, so an interrupt always
//! ends the session promptly.

use std::future::Future;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::screen::Screen;
use crate::view::View;

/// Why [`drive`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The user typed `q`.
    Quit,
    /// The shutdown future resolved.
    Interrupted,
    /// Input reached end of file and outstanding work drained.
    InputClosed,
    /// The screen's event channel closed.
    ScreenClosed,
}

/// Run the session until the user quits, input closes or `shutdown`
/// resolves.
///
/// Each input line other than `q` triggers a fetch for a random id.
pub async fn drive<V, R, F>(
    screen: &mut Screen<V>,
    input: R,
    shutdown: F,
) -> std::io::Result<ExitReason>
where
    V: View,
    R: AsyncBufRead + Unpin,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let mut lines = input.lines();

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                tracing::info!("Interrupted");
                return Ok(ExitReason::Interrupted);
            }
            line = lines.next_line() => match line? {
                Some(input) if input.trim().eq_ignore_ascii_case("q") => {
                    return Ok(ExitReason::Quit);
                }
                Some(_) => {
                    screen.trigger();
                }
                None => {
                    tracing::debug!(in_flight = screen.in_flight(), "Input closed, draining");
                    return tokio::select! {
                        _ = &mut shutdown => {
                            tracing::info!("Interrupted while draining");
                            Ok(ExitReason::Interrupted)
                        }
                        _ = screen.settle() => Ok(ExitReason::InputClosed),
                    };
                }
            },
            outcome = screen.next_event() => {
                if outcome.is_none() {
                    return Ok(ExitReason::ScreenClosed);
                }
            }
        }
    }
}
