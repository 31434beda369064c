//! Cooperative tick scheduler.
//!
//! One tick: copy one audio quantum if a track is playing, service the upload
//! session if one is open, then run exactly one navigation step with at most
//! one input event. Nothing in a tick blocks; the only wait is the sleep
//! between ticks in [`Scheduler::run`].

use embassy_time::{Duration, Instant};
use library::FileCatalog;
use platform::{AudioEngine, InputSource, RemoteAccess, Renderer};
use ui::{Devices, NavError, NavState, Navigator, StepOutcome};

/// Why [`Scheduler::run`] stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// The navigator hit a fatal error and shows it on screen.
    Halted(NavError),
    /// The navigator halted without recording a cause.
    HaltedUnknown,
}

impl core::fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Halted(err) => write!(f, "navigation halted: {err}"),
            Self::HaltedUnknown => f.write_str("navigation halted"),
        }
    }
}

impl std::error::Error for SchedulerError {}

/// Owns the navigator and every collaborator.
pub struct Scheduler<C, A, R, D, I> {
    nav: Navigator,
    catalog: C,
    audio: A,
    remote: R,
    renderer: D,
    input: I,
    restarts: u32,
}

impl<C, A, R, D, I> Scheduler<C, A, R, D, I>
where
    C: FileCatalog,
    A: AudioEngine,
    R: RemoteAccess,
    D: Renderer,
    I: InputSource,
{
    pub fn new(nav: Navigator, catalog: C, audio: A, remote: R, renderer: D, input: I) -> Self {
        Self {
            nav,
            catalog,
            audio,
            remote,
            renderer,
            input,
            restarts: 0,
        }
    }

    /// Run one tick at `now`.
    ///
    /// A `Restart` outcome has already been acted on when this returns: the
    /// navigator is back in `Init` and the next tick rebuilds the root menu.
    pub fn tick(&mut self, now: Instant) -> StepOutcome {
        if self.audio.is_active() {
            self.audio.copy_quantum();
        }
        if self.nav.uploading() {
            self.remote.service_step();
        }
        let event = self.input.poll_event();
        let mut dev = Devices {
            catalog: &mut self.catalog,
            audio: &mut self.audio,
            remote: &mut self.remote,
            renderer: &mut self.renderer,
        };
        let outcome = self.nav.step(event, now, &mut dev);
        if outcome == StepOutcome::Restart {
            self.restart();
        }
        outcome
    }

    /// Full reset after an unrecoverable network failure.
    fn restart(&mut self) {
        self.restarts = self.restarts.saturating_add(1);
        tracing::warn!(restarts = self.restarts, "restarting player");
        self.audio.stop();
        self.remote.disconnect();
        self.nav.reset();
    }

    /// Tick every `period` until the navigator halts.
    ///
    /// `clock` is sampled once per tick. Returns the halt cause; a healthy
    /// player never returns.
    pub fn run(
        &mut self,
        period: Duration,
        mut clock: impl FnMut() -> Instant,
    ) -> Result<(), SchedulerError> {
        let pause = std::time::Duration::from_micros(period.as_micros());
        tracing::info!(period_ms = period.as_millis(), "scheduler running");
        loop {
            if self.tick(clock()) == StepOutcome::Halted {
                return Err(self
                    .nav
                    .fault()
                    .cloned()
                    .map_or(SchedulerError::HaltedUnknown, SchedulerError::Halted));
            }
            std::thread::sleep(pause);
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    pub fn state(&self) -> NavState {
        self.nav.state()
    }

    pub fn restarts(&self) -> u32 {
        self.restarts
    }

    pub fn catalog_mut(&mut self) -> &mut C {
        &mut self.catalog
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn renderer(&self) -> &D {
        &self.renderer
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#[allow(clippy::arithmetic_side_effects)]
mod tests {
    use super::*;
    use library::{CatalogError, MemoryCatalog};
    use platform::mocks::{MockAudio, MockInput, MockRemote, MockRenderer};
    use platform::{Button, InputEvent};
    use ui::NavigatorConfig;

    type TestScheduler = Scheduler<MemoryCatalog, MockAudio, MockRemote, MockRenderer, MockInput>;

    fn scheduler(remote: MockRemote) -> TestScheduler {
        let catalog = MemoryCatalog::new()
            .with_song("A", "X", "1.mp3")
            .with_song("A", "X", "2.mp3");
        Scheduler::new(
            Navigator::default(),
            catalog,
            MockAudio::new(),
            remote,
            MockRenderer::new(),
            MockInput::new(),
        )
    }

    /// Tick with a 5 ms clock starting at `*t`.
    fn ticks(s: &mut TestScheduler, t: &mut u64, n: usize) -> StepOutcome {
        let mut outcome = StepOutcome::Continue;
        for _ in 0..n {
            outcome = s.tick(Instant::from_millis(*t));
            *t += 5;
        }
        outcome
    }

    fn press(s: &mut TestScheduler, t: &mut u64, button: Button) -> StepOutcome {
        s.input_mut().add_event(InputEvent::single(button)).unwrap();
        ticks(s, t, 1)
    }

    #[test]
    fn test_audio_quantum_only_while_playing() {
        let mut s = scheduler(MockRemote::succeeding_on(1));
        let mut t = 0;
        ticks(&mut s, &mut t, 2);
        assert_eq!(s.audio().bytes_copied(), 0);

        press(&mut s, &mut t, Button::Plus);
        for _ in 0..4 {
            press(&mut s, &mut t, Button::Select);
            ticks(&mut s, &mut t, 1);
        }
        assert_eq!(s.audio().last_play(), Some("/A/X/1.mp3"));
        ticks(&mut s, &mut t, 4);
        assert_eq!(s.audio().bytes_copied(), 4 * platform::config::AUDIO_COPY_QUANTUM);
    }

    #[test]
    fn test_upload_session_serviced_every_tick() {
        let mut s = scheduler(MockRemote::succeeding_on(1));
        let mut t = 0;
        ticks(&mut s, &mut t, 2);
        press(&mut s, &mut t, Button::Minus);
        press(&mut s, &mut t, Button::Select);
        ticks(&mut s, &mut t, 2);
        assert!(s.navigator().uploading());
        assert_eq!(s.remote().service_steps(), 0);

        ticks(&mut s, &mut t, 3);
        assert_eq!(s.remote().service_steps(), 3);
    }

    #[test]
    fn test_restart_resets_navigator() {
        let mut s = Scheduler::new(
            Navigator::new(NavigatorConfig {
                network_attempts: 1,
                network_error_repeats: 1,
                network_error_display: Duration::from_millis(10),
                ..NavigatorConfig::default()
            }),
            MemoryCatalog::new(),
            MockAudio::new(),
            MockRemote::unreachable(),
            MockRenderer::new(),
            MockInput::new(),
        );
        let mut t = 0;
        ticks(&mut s, &mut t, 2);
        press(&mut s, &mut t, Button::Minus);
        press(&mut s, &mut t, Button::Select);

        let mut outcome = StepOutcome::Continue;
        for _ in 0..20 {
            outcome = ticks(&mut s, &mut t, 1);
            if outcome == StepOutcome::Restart {
                break;
            }
        }
        assert_eq!(outcome, StepOutcome::Restart);
        assert_eq!(s.restarts(), 1);
        assert_eq!(s.state(), NavState::Init);
        assert_eq!(s.remote().disconnects(), 1);

        ticks(&mut s, &mut t, 2);
        assert_eq!(s.state(), NavState::RootMenuWait);
    }

    #[test]
    fn test_run_returns_halt_cause() {
        let mut s = scheduler(MockRemote::succeeding_on(1));
        s.catalog_mut().set_unavailable(true);
        // Init and RootMenu would swallow queued events.
        let mut t = 0;
        ticks(&mut s, &mut t, 2);
        s.input_mut().add_event(InputEvent::single(Button::Plus)).unwrap();
        s.input_mut().add_event(InputEvent::single(Button::Select)).unwrap();

        let mut now = t;
        let err = s
            .run(Duration::from_millis(1), || {
                now += 5;
                Instant::from_millis(now)
            })
            .unwrap_err();
        assert_eq!(
            err,
            SchedulerError::Halted(NavError::Catalog(CatalogError::unavailable("/")))
        );
        assert_eq!(s.state(), NavState::Halted);
    }
}
