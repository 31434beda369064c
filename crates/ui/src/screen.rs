//! Navigation states - every screen, wait and sub-state the navigator can be
//! in. Timed sub-states carry their deadline.

use embassy_time::Instant;

/// Which playback screen the action overlay returns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlaybackOrigin {
    /// Song chosen from the song list
    Song,
    /// Shuffle playback
    Shuffle,
}

/// Coarse grouping of [`NavState`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Building, painting or waiting on the root menu
    RootMenu,
    /// Pairing the audio sink
    Bluetooth,
    /// Artist, album and song lists
    Browse,
    /// Playing a song picked from the list
    SongPlayback,
    /// Action overlay over a playing track
    Actions,
    /// Shuffle playback across the whole library
    Shuffle,
    /// Network join and upload session
    Remote,
    /// Restart or halt
    Terminal,
}

/// The navigator's single state variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    /// Build the root menu.
    Init,
    /// Paint the root menu.
    RootMenu,
    /// Root menu waiting for input.
    RootMenuWait,
    /// Show the connect message and request pairing.
    BtConnectStart,
    /// Polling the sink.
    BtConnectWait,
    /// Sink up: back to the root menu.
    BtConnected,
    /// Read the artist folders and show them.
    ArtistsLoad,
    /// Artist list waiting for input.
    ArtistsWait,
    /// Read the selected artist's albums.
    AlbumsLoad,
    /// Album list waiting for input.
    AlbumsWait,
    /// Read the selected album's songs.
    SongsLoad,
    /// Song list waiting for input.
    SongsWait,
    /// Append the song, play it, show now-playing.
    SongPlayStart,
    /// Watching for track end and playback input.
    SongPlayCheck,
    /// Track ended: pick the next one.
    SongPlayNext,
    /// Open the action overlay.
    ActionsShow {
        /// Screen to return to on resume
        origin: PlaybackOrigin,
    },
    /// Overlay waiting for input.
    ActionsWait {
        /// Screen to return to on resume
        origin: PlaybackOrigin,
    },
    /// Pick artist, album and song at random.
    ShufflePick,
    /// Play the shuffled song and show now-playing.
    ShufflePlayStart,
    /// Watching for track end and shuffle input.
    ShuffleCheck,
    /// Network join; the next attempt waits for `next_try`.
    RemoteJoin {
        /// Join attempts still allowed
        attempts_left: u32,
        /// Earliest time for the next attempt
        next_try: Instant,
    },
    /// Join gave up; the error has been shown `shown` times.
    RemoteJoinFailed {
        /// Times the error message was painted
        shown: u32,
        /// When to paint it again
        next: Instant,
    },
    /// Joined: show the address.
    RemoteConnected,
    /// Upload session running until any input.
    RemoteUploading,
    /// Unrecoverable network failure; the scheduler restarts from scratch.
    Restart,
    /// Fatal error shown; nothing more happens.
    Halted,
}

impl NavState {
    /// Short name used in logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::RootMenu => "root_menu",
            Self::RootMenuWait => "root_menu_wait",
            Self::BtConnectStart => "bt_connect_start",
            Self::BtConnectWait => "bt_connect_wait",
            Self::BtConnected => "bt_connected",
            Self::ArtistsLoad => "artists_load",
            Self::ArtistsWait => "artists_wait",
            Self::AlbumsLoad => "albums_load",
            Self::AlbumsWait => "albums_wait",
            Self::SongsLoad => "songs_load",
            Self::SongsWait => "songs_wait",
            Self::SongPlayStart => "song_play_start",
            Self::SongPlayCheck => "song_play_check",
            Self::SongPlayNext => "song_play_next",
            Self::ActionsShow { .. } => "actions_show",
            Self::ActionsWait { .. } => "actions_wait",
            Self::ShufflePick => "shuffle_pick",
            Self::ShufflePlayStart => "shuffle_play_start",
            Self::ShuffleCheck => "shuffle_check",
            Self::RemoteJoin { .. } => "remote_join",
            Self::RemoteJoinFailed { .. } => "remote_join_failed",
            Self::RemoteConnected => "remote_connected",
            Self::RemoteUploading => "remote_uploading",
            Self::Restart => "restart",
            Self::Halted => "halted",
        }
    }

    /// Group this state belongs to.
    pub const fn phase(&self) -> Phase {
        match self {
            Self::Init | Self::RootMenu | Self::RootMenuWait => Phase::RootMenu,
            Self::BtConnectStart | Self::BtConnectWait | Self::BtConnected => Phase::Bluetooth,
            Self::ArtistsLoad
            | Self::ArtistsWait
            | Self::AlbumsLoad
            | Self::AlbumsWait
            | Self::SongsLoad
            | Self::SongsWait => Phase::Browse,
            Self::SongPlayStart | Self::SongPlayCheck | Self::SongPlayNext => Phase::SongPlayback,
            Self::ActionsShow { .. } | Self::ActionsWait { .. } => Phase::Actions,
            Self::ShufflePick | Self::ShufflePlayStart | Self::ShuffleCheck => Phase::Shuffle,
            Self::RemoteJoin { .. }
            | Self::RemoteJoinFailed { .. }
            | Self::RemoteConnected
            | Self::RemoteUploading => Phase::Remote,
            Self::Restart | Self::Halted => Phase::Terminal,
        }
    }
}
