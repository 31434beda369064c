//! Navigation state machine.
//!
//! One [`Navigator`] owns the [`WindowedList`], the accumulated path and the
//! playback flags. Each [`Navigator::step`] consumes at most one input event,
//! performs one transition of [`NavState`] and issues commands to the
//! collaborators passed in [`Devices`]. No step ever blocks: Bluetooth and
//! network waits are deadline-checked sub-states.

use alloc::string::{String, ToString};

use bluetooth::PairingMonitor;
use embassy_time::{Duration, Instant};
use library::{Catalog, CatalogError, Domain, FileCatalog, MusicPath};
use platform::config::{
    APP_NAME, DISPLAY_TIMEOUT_MS, MAX_LINE_LENGTH, NETWORK_ERROR_DISPLAY_MS,
    NETWORK_ERROR_REPEATS, NETWORK_JOIN_ATTEMPTS, NETWORK_RETRY_MS, PAGE_SIZE, PAIRING_POLL_MS,
};
use platform::{AudioEngine, Button, Click, InputEvent, RemoteAccess, Renderer};

use crate::list_box::{ContextError, WindowedList};
use crate::now_playing::NowPlayingState;
use crate::screen::{NavState, Phase, PlaybackOrigin};

/// Runtime navigator settings. `Default` uses the platform constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorConfig {
    /// Visible list rows
    pub page_size: usize,
    /// Characters per list row
    pub clip_width: usize,
    /// Backlight-off delay without input
    pub display_timeout: Duration,
    /// Interval between pairing checks
    pub pairing_poll: Duration,
    /// Network join attempts before giving up
    pub network_attempts: u32,
    /// Interval between join attempts
    pub network_retry: Duration,
    /// Times the network error is shown before restarting
    pub network_error_repeats: u32,
    /// How long each network error stays up
    pub network_error_display: Duration,
    /// Seed for the random picker
    pub seed: u64,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            clip_width: MAX_LINE_LENGTH,
            display_timeout: Duration::from_millis(DISPLAY_TIMEOUT_MS),
            pairing_poll: Duration::from_millis(PAIRING_POLL_MS),
            network_attempts: NETWORK_JOIN_ATTEMPTS,
            network_retry: Duration::from_millis(NETWORK_RETRY_MS),
            network_error_repeats: NETWORK_ERROR_REPEATS,
            network_error_display: Duration::from_millis(NETWORK_ERROR_DISPLAY_MS),
            seed: 0x5EED_CAFE,
        }
    }
}

/// Collaborators borrowed for one step.
pub struct Devices<'a> {
    /// Artist, album and song listings
    pub catalog: &'a mut dyn FileCatalog,
    /// Playback and pairing
    pub audio: &'a mut dyn AudioEngine,
    /// Network join and upload session
    pub remote: &'a mut dyn RemoteAccess,
    /// Screen output
    pub renderer: &'a mut dyn Renderer,
}

/// What the scheduler should do after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepOutcome {
    /// Keep ticking.
    Continue,
    /// Network gave up: reset everything and start over.
    Restart,
    /// Fatal error shown: stop ticking.
    Halted,
}

/// How the next song is chosen when a track ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlayMode {
    /// Next song in list order, wrapping.
    #[default]
    Sequential,
    /// Repeat-avoiding random song of the album.
    Random,
}

/// Root menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operation {
    /// Pair the audio sink
    ConnectBluetooth,
    /// Browse and play in list order
    PlaySongs,
    /// Browse and play the album in random order
    RandomPlay,
    /// Random songs across the whole library
    ShufflePlay,
    /// Join the network and accept uploads
    UploadMusic,
}

impl Operation {
    /// Every operation, in menu order.
    pub const ALL: [Operation; 5] = [
        Operation::ConnectBluetooth,
        Operation::PlaySongs,
        Operation::RandomPlay,
        Operation::ShufflePlay,
        Operation::UploadMusic,
    ];

    /// Menu row text.
    pub const fn label(self) -> &'static str {
        match self {
            Operation::ConnectBluetooth => "Connect Bluetooth",
            Operation::PlaySongs => "Play Songs",
            Operation::RandomPlay => "Random Play",
            Operation::ShufflePlay => "Shuffle Play",
            Operation::UploadMusic => "Upload Music",
        }
    }

    /// Operation at menu row `index`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The operations catalog shown by the root menu.
    pub fn catalog() -> Catalog {
        Catalog::fixed(&Self::ALL.map(Operation::label))
    }
}

/// Fatal navigation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// A catalog could not be read
    Catalog(CatalogError),
    /// The menu stack was misused
    Context(ContextError),
}

impl core::fmt::Display for NavError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Catalog(err) => err.fmt(f),
            Self::Context(err) => err.fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NavError {}

impl From<CatalogError> for NavError {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}

impl From<ContextError> for NavError {
    fn from(err: ContextError) -> Self {
        Self::Context(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

impl Direction {
    fn of(button: Button) -> Option<Self> {
        match button {
            Button::Minus => Some(Self::Up),
            Button::Plus => Some(Self::Down),
            _ => None,
        }
    }
}

fn later(now: Instant, by: Duration) -> Instant {
    now.checked_add(by).unwrap_or(Instant::MAX)
}

/// The navigation state machine.
pub struct Navigator {
    config: NavigatorConfig,
    list: WindowedList,
    state: NavState,
    path: MusicPath,
    mode: PlayMode,
    now_playing: NowPlayingState,
    pairing: PairingMonitor,
    skip_next: bool,
    backlight: bool,
    display_deadline: Option<Instant>,
    shuffle_loaded: bool,
    shuffle_artist: usize,
    uploading: bool,
    fault: Option<NavError>,
}

impl Navigator {
    /// Navigator in `Init` with an empty stack and path.
    pub fn new(config: NavigatorConfig) -> Self {
        Self {
            list: WindowedList::new(config.page_size, config.clip_width, config.seed),
            state: NavState::Init,
            path: MusicPath::new(),
            mode: PlayMode::Sequential,
            now_playing: NowPlayingState::default(),
            pairing: PairingMonitor::new(config.pairing_poll),
            skip_next: false,
            backlight: true,
            display_deadline: None,
            shuffle_loaded: false,
            shuffle_artist: 0,
            uploading: false,
            fault: None,
            config,
        }
    }

    /// Full reset: back to `Init` with an empty stack, path and flags.
    pub fn reset(&mut self) {
        tracing::info!(from = self.state.name(), "navigator reset");
        self.state = NavState::Init;
        self.list.reset();
        self.path.clear();
        self.mode = PlayMode::Sequential;
        self.now_playing = NowPlayingState::default();
        self.pairing.reset();
        self.skip_next = false;
        self.shuffle_loaded = false;
        self.shuffle_artist = 0;
        self.uploading = false;
        self.fault = None;
    }

    // ── Accessors ───────────────────────────────────────────────────────────

    /// Current state.
    pub fn state(&self) -> NavState {
        self.state
    }

    /// The list box.
    pub fn list(&self) -> &WindowedList {
        &self.list
    }

    /// Accumulated `/artist/album/song` path.
    pub fn path(&self) -> &MusicPath {
        &self.path
    }

    /// How the next song is chosen.
    pub fn mode(&self) -> PlayMode {
        self.mode
    }

    /// Whether the current song repeats.
    pub fn looping(&self) -> bool {
        self.now_playing.looping
    }

    /// Whether the backlight is on.
    pub fn backlight(&self) -> bool {
        self.backlight
    }

    /// `true` while an upload session needs `service_step` every tick.
    pub fn uploading(&self) -> bool {
        self.uploading
    }

    /// The error that halted the navigator.
    pub fn fault(&self) -> Option<&NavError> {
        self.fault.as_ref()
    }

    // ── Step ────────────────────────────────────────────────────────────────

    /// Run one tick of the state machine.
    pub fn step(
        &mut self,
        event: Option<InputEvent>,
        now: Instant,
        dev: &mut Devices<'_>,
    ) -> StepOutcome {
        let event = self.screen_timeout(event, now, dev.renderer);
        if let Some(ev) = event {
            tracing::trace!(button = ev.button.name(), click = ev.click.name(), "input");
        }
        let before = self.state;
        let outcome = match self.transition(event, now, dev) {
            Ok(outcome) => outcome,
            Err(err) => self.halt(err, dev.renderer),
        };
        if self.list.take_repaint() && self.state.phase() != Phase::Terminal {
            dev.renderer.paint_list(&self.list.view());
        }
        if before != self.state {
            tracing::debug!(from = before.name(), to = self.state.name(), "nav transition");
        }
        outcome
    }

    /// Backlight handling. Returns the event left for the state machine.
    fn screen_timeout(
        &mut self,
        event: Option<InputEvent>,
        now: Instant,
        renderer: &mut dyn Renderer,
    ) -> Option<InputEvent> {
        let timeout = self.config.display_timeout;
        let deadline = *self.display_deadline.get_or_insert_with(|| later(now, timeout));
        let Some(ev) = event else {
            if self.backlight && now >= deadline {
                renderer.set_backlight(false);
                self.backlight = false;
                self.skip_next = true;
                tracing::debug!("display timeout");
            }
            return None;
        };
        self.display_deadline = Some(later(now, timeout));
        if !self.backlight {
            renderer.set_backlight(true);
            self.backlight = true;
        }
        if core::mem::take(&mut self.skip_next) {
            tracing::debug!(button = ev.button.name(), "wake-up input absorbed");
            return None;
        }
        Some(ev)
    }

    fn halt(&mut self, err: NavError, renderer: &mut dyn Renderer) -> StepOutcome {
        let reason = err.to_string();
        tracing::error!(state = self.state.name(), reason = %reason, "navigation halted");
        renderer.message(&["Error", reason.as_str()]);
        self.fault = Some(err);
        self.state = NavState::Halted;
        StepOutcome::Halted
    }

    fn transition(
        &mut self,
        event: Option<InputEvent>,
        now: Instant,
        dev: &mut Devices<'_>,
    ) -> Result<StepOutcome, NavError> {
        match self.state {
            NavState::Init => {
                self.build_root();
                self.state = NavState::RootMenu;
            }
            NavState::RootMenu => {
                self.list.request_repaint();
                self.state = NavState::RootMenuWait;
            }
            NavState::RootMenuWait => {
                if let Some(ev) = event {
                    self.root_input(ev, now, dev)?;
                }
            }

            // ── Bluetooth ───────────────────────────────────────────────────
            NavState::BtConnectStart => {
                dev.renderer.message(&["Connecting", "Bluetooth..."]);
                self.pairing.start(&mut *dev.audio, now);
                self.state = NavState::BtConnectWait;
            }
            NavState::BtConnectWait => {
                if self.pairing.poll(&*dev.audio, now).connected() {
                    self.state = NavState::BtConnected;
                }
            }
            NavState::BtConnected => {
                self.list.pop()?;
                self.list.selection_down(true);
                self.state = NavState::RootMenuWait;
            }

            // ── Browse ──────────────────────────────────────────────────────
            NavState::ArtistsLoad => {
                let artists = dev.catalog.list_artists()?;
                self.show_level(Domain::Artists, artists, "Artists");
                self.state = NavState::ArtistsWait;
            }
            NavState::AlbumsLoad => {
                let albums = dev.catalog.list_albums(&self.path.to_path_string())?;
                let title = self.path.last().unwrap_or("Albums").to_string();
                self.show_level(Domain::Albums, albums, &title);
                self.state = NavState::AlbumsWait;
            }
            NavState::SongsLoad => {
                let songs = dev.catalog.list_songs(&self.path.to_path_string())?;
                let title = self.path.last().unwrap_or("Songs").to_string();
                self.show_level(Domain::Songs, songs, &title);
                self.state = NavState::SongsWait;
            }
            NavState::ArtistsWait => {
                if let Some(ev) = event {
                    self.browse_input(ev, Domain::Artists)?;
                }
            }
            NavState::AlbumsWait => {
                if let Some(ev) = event {
                    self.browse_input(ev, Domain::Albums)?;
                }
            }
            NavState::SongsWait => {
                if let Some(ev) = event {
                    self.browse_input(ev, Domain::Songs)?;
                }
            }

            // ── Song playback ───────────────────────────────────────────────
            NavState::SongPlayStart => {
                dev.audio.stop();
                match self.list.selection().map(ToString::to_string) {
                    Some(song) => {
                        self.path.push(&song);
                        self.start_track(dev);
                        self.state = NavState::SongPlayCheck;
                    }
                    None => {
                        self.list.pop()?;
                        self.state = NavState::SongsWait;
                    }
                }
            }
            NavState::SongPlayCheck => match event.map(|ev| ev.button) {
                Some(button @ (Button::Minus | Button::Plus)) => {
                    dev.audio.stop();
                    self.path.truncate_last();
                    match Direction::of(button) {
                        Some(Direction::Up) => self.list.selection_up(false),
                        _ => self.list.selection_down(false),
                    }
                    self.list.update_push()?;
                    self.state = NavState::SongPlayStart;
                }
                Some(Button::Back) => {
                    dev.audio.stop();
                    self.list.pop()?;
                    self.path.truncate_last();
                    self.state = NavState::SongsWait;
                }
                Some(Button::Select | Button::Touched) => {
                    dev.audio.stop();
                    self.state = NavState::ActionsShow {
                        origin: PlaybackOrigin::Song,
                    };
                }
                None => {
                    if !dev.audio.is_active() {
                        tracing::info!(track = %self.path, "track ended");
                        self.state = NavState::SongPlayNext;
                    }
                }
            },
            NavState::SongPlayNext => {
                self.path.truncate_last();
                if !self.now_playing.looping {
                    match self.mode {
                        PlayMode::Sequential => self.list.selection_down(false),
                        PlayMode::Random => self.list.select_random_entry(false),
                    }
                }
                self.list.update_push()?;
                self.state = NavState::SongPlayStart;
            }

            // ── Action overlay ──────────────────────────────────────────────
            NavState::ActionsShow { origin } => {
                self.now_playing.set_overlay(true);
                self.paint_now_playing(dev);
                self.state = NavState::ActionsWait { origin };
            }
            NavState::ActionsWait { origin } => {
                if let Some(ev) = event {
                    self.actions_input(ev, origin, dev);
                }
            }

            // ── Shuffle ─────────────────────────────────────────────────────
            NavState::ShufflePick => self.shuffle_pick(dev)?,
            NavState::ShufflePlayStart => {
                dev.audio.stop();
                match self.list.selection().map(ToString::to_string) {
                    Some(song) => {
                        self.path.push(&song);
                        self.start_track(dev);
                        self.state = NavState::ShuffleCheck;
                    }
                    None => self.no_songs(dev)?,
                }
            }
            NavState::ShuffleCheck => match event.map(|ev| ev.button) {
                Some(Button::Minus | Button::Plus) => {
                    dev.audio.stop();
                    self.state = NavState::ShufflePick;
                }
                Some(Button::Back) => {
                    dev.audio.stop();
                    self.path.clear();
                    self.list.pop()?;
                    self.state = NavState::RootMenuWait;
                }
                Some(Button::Select | Button::Touched) => {
                    dev.audio.stop();
                    self.state = NavState::ActionsShow {
                        origin: PlaybackOrigin::Shuffle,
                    };
                }
                None => {
                    if !dev.audio.is_active() {
                        tracing::info!(track = %self.path, "track ended");
                        if self.now_playing.looping {
                            self.path.truncate_last();
                            self.state = NavState::ShufflePlayStart;
                        } else {
                            self.state = NavState::ShufflePick;
                        }
                    }
                }
            },

            // ── Remote access ───────────────────────────────────────────────
            NavState::RemoteJoin {
                attempts_left,
                next_try,
            } => {
                if event.is_some() {
                    self.cancel_remote(dev);
                } else if now >= next_try {
                    self.join_attempt(attempts_left, now, dev);
                }
            }
            NavState::RemoteJoinFailed { shown, next } => {
                if now >= next {
                    if shown >= self.config.network_error_repeats {
                        tracing::error!("network unavailable, restarting");
                        self.state = NavState::Restart;
                        return Ok(StepOutcome::Restart);
                    }
                    dev.renderer.message(&["Network unavailable", "Restarting..."]);
                    self.state = NavState::RemoteJoinFailed {
                        shown: shown.saturating_add(1),
                        next: later(now, self.config.network_error_display),
                    };
                }
            }
            NavState::RemoteConnected => {
                let address = dev.remote.address();
                tracing::info!(address, "upload session open");
                dev.renderer.message(&[Operation::UploadMusic.label(), address]);
                self.uploading = true;
                self.state = NavState::RemoteUploading;
            }
            NavState::RemoteUploading => {
                if event.is_some() {
                    self.cancel_remote(dev);
                }
            }

            NavState::Restart => return Ok(StepOutcome::Restart),
            NavState::Halted => return Ok(StepOutcome::Halted),
        }
        Ok(StepOutcome::Continue)
    }

    // ── Root menu ───────────────────────────────────────────────────────────

    fn build_root(&mut self) {
        self.list.populate(Domain::Operations, Operation::catalog());
        self.list.set_domain(Domain::Operations);
        self.list.clear();
        self.list.set_title(APP_NAME);
        self.list.set_center(true);
    }

    fn root_input(
        &mut self,
        ev: InputEvent,
        now: Instant,
        dev: &mut Devices<'_>,
    ) -> Result<(), NavError> {
        if let Some(dir) = Direction::of(ev.button) {
            self.scroll(dir, ev.click, true);
            return Ok(());
        }
        if ev.button != Button::Select {
            return Ok(());
        }
        let Some(op) = Operation::from_index(self.list.selection_index()) else {
            return Ok(());
        };
        self.list.push()?;
        tracing::info!(operation = op.label(), "operation selected");
        self.state = match op {
            Operation::ConnectBluetooth => NavState::BtConnectStart,
            Operation::PlaySongs => {
                self.mode = PlayMode::Sequential;
                NavState::ArtistsLoad
            }
            Operation::RandomPlay => {
                self.mode = PlayMode::Random;
                NavState::ArtistsLoad
            }
            Operation::ShufflePlay => {
                self.shuffle_loaded = false;
                self.path.clear();
                NavState::ShufflePick
            }
            Operation::UploadMusic => {
                dev.renderer.message(&[op.label(), "Joining network..."]);
                NavState::RemoteJoin {
                    attempts_left: self.config.network_attempts,
                    next_try: now,
                }
            }
        };
        Ok(())
    }

    // ── Browse ──────────────────────────────────────────────────────────────

    fn show_level(&mut self, domain: Domain, catalog: Catalog, title: &str) {
        tracing::debug!(domain = domain.name(), entries = catalog.len(), "catalog loaded");
        self.list.populate(domain, catalog);
        self.list.set_domain(domain);
        self.list.clear();
        self.list.set_title(title);
        self.list.request_repaint();
    }

    fn browse_input(&mut self, ev: InputEvent, level: Domain) -> Result<(), NavError> {
        if let Some(dir) = Direction::of(ev.button) {
            self.scroll(dir, ev.click, level != Domain::Songs);
            return Ok(());
        }
        match ev.button {
            Button::Select => {
                let Some(name) = self.list.selection().map(ToString::to_string) else {
                    return Ok(());
                };
                self.list.push()?;
                self.state = match level {
                    Domain::Artists => {
                        self.path.push(&name);
                        NavState::AlbumsLoad
                    }
                    Domain::Albums => {
                        self.path.push(&name);
                        NavState::SongsLoad
                    }
                    Domain::Songs | Domain::Operations => NavState::SongPlayStart,
                };
            }
            Button::Back => {
                self.list.pop()?;
                self.state = match level {
                    Domain::Albums => {
                        self.path.truncate_last();
                        NavState::ArtistsWait
                    }
                    Domain::Songs => {
                        self.path.truncate_last();
                        NavState::AlbumsWait
                    }
                    Domain::Artists | Domain::Operations => NavState::RootMenuWait,
                };
            }
            _ => {}
        }
        Ok(())
    }

    /// Single clicks move one row with an immediate repaint. When `batch` is
    /// set, a double click moves `count / 4` rows and a long click
    /// `count / 2`, painted once.
    fn scroll(&mut self, dir: Direction, click: Click, batch: bool) {
        let count = self.list.count();
        let steps = match click {
            Click::Double if batch => count / 4,
            Click::Long if batch => count / 2,
            _ => {
                self.move_once(dir, true);
                return;
            }
        };
        for _ in 0..steps {
            self.move_once(dir, false);
        }
        self.list.request_repaint();
    }

    fn move_once(&mut self, dir: Direction, repaint: bool) {
        match dir {
            Direction::Up => self.list.selection_up(repaint),
            Direction::Down => self.list.selection_down(repaint),
        }
    }

    // ── Playback ────────────────────────────────────────────────────────────

    fn start_track(&mut self, dev: &mut Devices<'_>) {
        let track = self.path.to_path_string();
        if dev.audio.play(&track) {
            tracing::info!(track = %track, "playing");
        } else {
            tracing::warn!(track = %track, "cannot play track");
        }
        self.now_playing.set_overlay(false);
        self.paint_now_playing(dev);
    }

    fn paint_now_playing(&self, dev: &mut Devices<'_>) {
        let view = self.now_playing.view(&self.path, dev.audio.volume());
        dev.renderer.now_playing(&view);
    }

    fn actions_input(&mut self, ev: InputEvent, origin: PlaybackOrigin, dev: &mut Devices<'_>) {
        match ev.button {
            Button::Minus => dev.audio.volume_down(),
            Button::Plus => dev.audio.volume_up(),
            Button::Back => {
                let looping = self.now_playing.toggle_looping();
                tracing::debug!(looping, "looping toggled");
            }
            Button::Select => {
                dev.audio.resume();
                self.now_playing.set_overlay(false);
                self.state = match origin {
                    PlaybackOrigin::Song => NavState::SongPlayCheck,
                    PlaybackOrigin::Shuffle => NavState::ShuffleCheck,
                };
            }
            Button::Touched => return,
        }
        self.paint_now_playing(dev);
    }

    // ── Shuffle ─────────────────────────────────────────────────────────────

    fn shuffle_pick(&mut self, dev: &mut Devices<'_>) -> Result<(), NavError> {
        if self.shuffle_loaded {
            self.list.set_domain(Domain::Artists);
            self.list.jump_to(self.shuffle_artist);
            self.list.select_random_entry(false);
        } else {
            let artists = dev.catalog.list_artists()?;
            self.list.populate(Domain::Artists, artists);
            self.list.set_domain(Domain::Artists);
            self.list.clear();
            self.list.select_random_fresh(false);
            self.shuffle_loaded = true;
        }
        self.shuffle_artist = self.list.selection_index();
        let Some(artist) = self.list.selection().map(ToString::to_string) else {
            return self.no_songs(dev);
        };
        self.path.clear();
        self.path.push(&artist);

        let albums = dev.catalog.list_albums(&self.path.to_path_string())?;
        let Some(album) = self.pick_fresh(Domain::Albums, albums) else {
            return self.no_songs(dev);
        };
        self.path.push(&album);

        let songs = dev.catalog.list_songs(&self.path.to_path_string())?;
        if self.pick_fresh(Domain::Songs, songs).is_none() {
            return self.no_songs(dev);
        }
        self.state = NavState::ShufflePlayStart;
        Ok(())
    }

    /// Load `catalog` into `domain` and land on a random entry of it.
    fn pick_fresh(&mut self, domain: Domain, catalog: Catalog) -> Option<String> {
        self.list.populate(domain, catalog);
        self.list.set_domain(domain);
        self.list.clear();
        self.list.select_random_fresh(false);
        self.list.selection().map(ToString::to_string)
    }

    fn no_songs(&mut self, dev: &mut Devices<'_>) -> Result<(), NavError> {
        tracing::warn!(path = %self.path, "shuffle found no songs");
        dev.renderer.message(&["No songs"]);
        self.path.clear();
        self.list.pop()?;
        // The root menu is repainted on the next step so the message shows.
        self.list.take_repaint();
        self.state = NavState::RootMenu;
        Ok(())
    }

    // ── Remote access ───────────────────────────────────────────────────────

    fn join_attempt(&mut self, attempts_left: u32, now: Instant, dev: &mut Devices<'_>) {
        if dev.remote.connect() {
            self.state = NavState::RemoteConnected;
            return;
        }
        let left = attempts_left.saturating_sub(1);
        tracing::debug!(left, "network join attempt failed");
        self.state = if left == 0 {
            tracing::warn!("network unavailable");
            NavState::RemoteJoinFailed { shown: 0, next: now }
        } else {
            NavState::RemoteJoin {
                attempts_left: left,
                next_try: later(now, self.config.network_retry),
            }
        };
    }

    fn cancel_remote(&mut self, dev: &mut Devices<'_>) {
        dev.remote.disconnect();
        tracing::info!("remote access cancelled");
        self.reset();
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(NavigatorConfig::default())
    }
}
