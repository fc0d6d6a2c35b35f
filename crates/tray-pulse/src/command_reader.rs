//! Line-oriented command input.
//!
//! Reads host commands from any async reader (standard input in production)
//! and forwards them to the application loop.

use crate::{AppError, AppResult, HostCommand};

use std::panic::Location;

use error_location::ErrorLocation;
use tokio::{
    io::{AsyncBufReadExt, AsyncRead, BufReader},
    sync::mpsc,
};
use tracing::{debug, info, instrument, warn};

/// Forward parsed commands from `input` until end of input or `quit`.
///
/// Malformed lines are logged and skipped.
#[instrument(skip_all)]
pub(crate) async fn read_commands<R>(input: R, command_tx: mpsc::Sender<HostCommand>) -> AppResult<()>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(input);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "Ignoring non UTF-8 input line");
                continue;
            }
        };

        let command = match HostCommand::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!(line = %line.trim_end(), error = %e, "Ignoring input line");
                continue;
            }
        };

        debug!(?command, "Command received");
        let shutdown = command == HostCommand::Shutdown;

        command_tx
            .send(command)
            .await
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to send command: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if shutdown {
            return Ok(());
        }
    }

    info!("End of input");

    Ok(())
}
