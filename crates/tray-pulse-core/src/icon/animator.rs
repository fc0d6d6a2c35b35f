//! Status icon animator.
//!
//! Picks the icon for the current [`Status`] under the active [`Theme`] and
//! drives the busy animation from a dedicated ticker thread. All state lives
//! behind one mutex; the presentation callback is invoked while that mutex is
//! held, so two presentations never interleave and each one sees a complete
//! update.

use crate::{
    CoreResult, IconError,
    icon::{BUSY_FRAME_COUNT, IconKind, NOTIFY_ICON, Status, Theme},
};

use std::{
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
    str::FromStr,
    sync::{Arc, Mutex, MutexGuard},
    thread::{self, JoinHandle},
    time::Duration,
};

use crossbeam_channel::{Receiver, Sender, never, select, tick, unbounded};
use error_location::ErrorLocation;
use tempfile::TempPath;
use tracing::{debug, error, info, info_span, instrument, trace, warn};
use uuid::Uuid;

/// Delay between two busy animation frames.
pub const ANIMATION_INTERVAL: Duration = Duration::from_millis(333);

/// Callback receiving the icon bytes to display.
///
/// Runs with the animator lock held: it must return quickly and must not
/// call back into the animator.
pub type PresentFn = Box<dyn FnMut(&'static [u8]) + Send>;

/// Messages for the ticker thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerCommand {
    /// Restart the periodic timer from now.
    Start,
    /// Stop the periodic timer.
    Stop,
    /// Leave the ticker loop for good.
    Shutdown,
}

struct IconState {
    theme: Theme,
    status: Option<Status>,
    frame: usize,
    /// Mirrors whether the ticker should be firing. Checked on every tick so a
    /// tick already in flight is dropped once `set` or `cleanup` disarmed it.
    ticking: bool,
    cancelled: bool,
    present: PresentFn,
}

impl IconState {
    /// Present the icon for the current status and frame. No status yet
    /// renders as paused.
    fn present_current(&mut self) {
        let kind = self
            .status
            .as_ref()
            .map_or(IconKind::Pause, Status::icon_kind);
        let bytes = self.theme.assets().icon(kind, self.frame);
        (self.present)(bytes);
    }

    fn advance(&mut self) {
        if self.cancelled || !self.ticking {
            return;
        }
        self.frame = (self.frame + 1) % BUSY_FRAME_COUNT;
        trace!(frame = self.frame, "Busy frame advanced");
        let bytes = self.theme.assets().busy[self.frame];
        (self.present)(bytes);
    }
}

/// Thread-safe animated status icon.
///
/// Create one with [`StatusIconAnimator::new`], feed it statuses with
/// [`set`](Self::set) and call [`cleanup`](Self::cleanup) on shutdown.
pub struct StatusIconAnimator {
    id: Uuid,
    state: Arc<Mutex<IconState>>,
    timer_tx: Sender<TimerCommand>,
    ticker: Mutex<Option<JoinHandle<()>>>,
    notify_icon: Mutex<Option<TempPath>>,
    notify_icon_path: PathBuf,
}

impl StatusIconAnimator {
    /// Create the animator, store the notification icon on disk and present the
    /// paused icon.
    ///
    /// # Errors
    ///
    /// - [`IconError::AssetStore`] if the notification icon cannot be written.
    /// - [`IconError::InvalidTheme`] if `theme` is not `"light"` or `"dark"`.
    /// - [`IconError::TickerSpawn`] if the ticker thread cannot be started.
    ///
    /// Nothing is left behind on error: the temporary file is removed and no
    /// thread is running.
    #[track_caller]
    #[instrument(skip(present))]
    pub fn new<F>(theme: &str, present: F) -> CoreResult<Self>
    where
        F: FnMut(&'static [u8]) + Send + 'static,
    {
        let id = Uuid::new_v4();
        let notify_icon = store_notify_icon()?;
        let notify_icon_path = notify_icon.to_path_buf();

        let theme = Theme::from_str(theme)?;

        let state = Arc::new(Mutex::new(IconState {
            theme,
            status: None,
            frame: 0,
            ticking: false,
            cancelled: false,
            present: Box::new(present),
        }));

        let (timer_tx, timer_rx) = unbounded();
        let ticker_state = Arc::clone(&state);
        let ticker = thread::Builder::new()
            .name("tray-pulse-ticker".to_string())
            .spawn(move || run_ticker(id, ticker_state, timer_rx))
            .map_err(|e| IconError::TickerSpawn {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        lock_or_recover(&state).present_current();

        info!(
            animator = %id,
            theme = %theme,
            notify_icon = ?notify_icon_path,
            "Status icon animator started"
        );

        Ok(Self {
            id,
            state,
            timer_tx,
            ticker: Mutex::new(Some(ticker)),
            notify_icon: Mutex::new(Some(notify_icon)),
            notify_icon_path,
        })
    }

    /// Switch to another built-in theme.
    ///
    /// If a status was already set, the icon for it is presented again right
    /// away with the new assets.
    ///
    /// # Errors
    ///
    /// [`IconError::InvalidTheme`] for an unknown name; the active theme is kept.
    #[track_caller]
    #[instrument(skip(self), fields(animator = %self.id))]
    pub fn set_theme(&self, theme: &str) -> CoreResult<()> {
        let mut state = lock_or_recover(&self.state);
        let theme = Theme::from_str(theme)?;

        if state.cancelled {
            warn!(theme = %theme, "Theme change after cleanup ignored");
            return Ok(());
        }

        state.theme = theme;
        if state.status.is_some() {
            state.present_current();
        }

        debug!(theme = %theme, "Theme applied");

        Ok(())
    }

    /// Record a new status and present its icon immediately.
    ///
    /// Entering `busy` or `index` from any other status restarts the animation
    /// timer; any other status stops it before this call returns, so no frame
    /// advance is presented afterwards.
    #[instrument(skip(self, status), fields(animator = %self.id))]
    pub fn set(&self, status: impl Into<Status>) {
        let status = status.into();
        let mut state = lock_or_recover(&self.state);

        if state.cancelled {
            warn!(status = %status, "Status change after cleanup ignored");
            return;
        }

        let was_animated = state.status.as_ref().is_some_and(Status::is_animated);
        if status.is_animated() {
            if !was_animated {
                state.ticking = true;
                self.send_timer(TimerCommand::Start);
            }
        } else {
            state.ticking = false;
            self.send_timer(TimerCommand::Stop);
        }

        if let Status::Unrecognized(word) = &status {
            debug!(status = %word, "Unrecognized status, showing error icon");
        }

        state.status = Some(status);
        state.present_current();
    }

    /// Stop the animation, end the ticker thread and delete the notification
    /// icon file.
    ///
    /// The ticker is always stopped before the file is removed. Calling this
    /// again is a no-op returning `Ok(())`.
    ///
    /// # Errors
    ///
    /// [`IconError::AssetRemove`] if the temporary file cannot be deleted.
    #[track_caller]
    #[instrument(skip(self), fields(animator = %self.id))]
    pub fn cleanup(&self) -> CoreResult<()> {
        {
            let mut state = lock_or_recover(&self.state);
            state.ticking = false;
            state.cancelled = true;
        }

        // The ticker may already be gone after a first cleanup.
        let _ = self.timer_tx.send(TimerCommand::Shutdown);

        let ticker = lock_or_recover(&self.ticker).take();
        if let Some(handle) = ticker {
            if handle.join().is_err() {
                error!("Ticker thread panicked");
            }
        }

        let Some(notify_icon) = lock_or_recover(&self.notify_icon).take() else {
            return Ok(());
        };

        notify_icon.close().map_err(|e| IconError::AssetRemove {
            path: self.notify_icon_path.clone(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(notify_icon = ?self.notify_icon_path, "Status icon animator cleaned up");

        Ok(())
    }

    /// Path of the static notification icon written at construction.
    pub fn notify_icon(&self) -> &Path {
        &self.notify_icon_path
    }

    /// Active theme.
    pub fn theme(&self) -> Theme {
        lock_or_recover(&self.state).theme
    }

    /// Last status passed to [`set`](Self::set), if any.
    pub fn status(&self) -> Option<Status> {
        lock_or_recover(&self.state).status.clone()
    }

    /// Current busy animation frame index.
    pub fn frame(&self) -> usize {
        lock_or_recover(&self.state).frame
    }

    fn send_timer(&self, command: TimerCommand) {
        if self.timer_tx.send(command).is_err() {
            warn!(?command, "Ticker thread is not running");
        }
    }
}

impl Drop for StatusIconAnimator {
    fn drop(&mut self) {
        let mut state = lock_or_recover(&self.state);
        if !state.cancelled {
            state.ticking = false;
            state.cancelled = true;
            drop(state);
            let _ = self.timer_tx.send(TimerCommand::Shutdown);
            debug!(animator = %self.id, "Animator dropped without cleanup");
        }
    }
}

/// Write [`NOTIFY_ICON`] to a fresh temporary file. The returned [`TempPath`]
/// deletes the file when dropped.
#[track_caller]
fn store_notify_icon() -> CoreResult<TempPath> {
    let location = Location::caller();
    let store_err = |e: std::io::Error| IconError::AssetStore {
        source: e,
        location: ErrorLocation::from(location),
    };

    let mut file = tempfile::Builder::new()
        .prefix("tray_pulse_notify_icon")
        .suffix(".png")
        .tempfile()
        .map_err(store_err)?;

    file.write_all(NOTIFY_ICON).map_err(store_err)?;
    file.flush().map_err(store_err)?;

    Ok(file.into_temp_path())
}

/// Ticker loop: waits for timer control messages or ticks until shut down.
fn run_ticker(id: Uuid, state: Arc<Mutex<IconState>>, commands: Receiver<TimerCommand>) {
    let _span = info_span!("ticker", animator = %id).entered();
    let mut ticker = never();

    loop {
        let command = select! {
            recv(commands) -> command => Some(command),
            recv(ticker) -> _ => None,
        };

        match command {
            None => lock_or_recover(&state).advance(),
            Some(Ok(TimerCommand::Start)) => ticker = tick(ANIMATION_INTERVAL),
            Some(Ok(TimerCommand::Stop)) => ticker = never(),
            Some(Ok(TimerCommand::Shutdown)) | Some(Err(_)) => break,
        }
    }

    debug!("Ticker stopped");
}

/// A panicking presentation callback poisons the lock, but every mutation
/// completes before the callback runs, so the state is still consistent.
fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| {
        error!("Status icon lock poisoned, recovering: {}", e);
        e.into_inner()
    })
}
