//! Theme sound playback
//!
//! Playback is best-effort: a missing asset, an unsupported codec, or an
//! unavailable output device is logged at debug level and otherwise
//! ignored. Nothing here ever surfaces an error to the caller.

use std::fs::File;
use std::io::BufReader;

use tracing::debug;

/// Seam for audio output, so the engine can run headless (and tests can
/// observe playback attempts).
pub trait SoundPlayer {
    /// Attempt to play the asset at `path` at the given volume (0.0-1.0).
    fn play(&self, path: &str, volume: f32);
}

/// Swallows every request; used when no output device is available.
pub struct NullPlayer;

impl SoundPlayer for NullPlayer {
    fn play(&self, path: &str, _volume: f32) {
        debug!("sound playback unavailable, skipping {}", path);
    }
}

/// Plays sounds through the default output device via rodio.
pub struct RodioPlayer {
    // The stream must stay alive for the handle to keep working.
    _stream: rodio::OutputStream,
    handle: rodio::OutputStreamHandle,
}

impl RodioPlayer {
    pub fn new() -> Option<Self> {
        match rodio::OutputStream::try_default() {
            Ok((stream, handle)) => Some(Self {
                _stream: stream,
                handle,
            }),
            Err(e) => {
                debug!("no audio output device: {}", e);
                None
            }
        }
    }
}

impl SoundPlayer for RodioPlayer {
    fn play(&self, path: &str, volume: f32) {
        // Theme asset paths are backend-style ("/static/sounds/...");
        // resolve them relative to the working directory.
        let rel = path.trim_start_matches('/');

        let file = match File::open(rel) {
            Ok(f) => f,
            Err(e) => {
                debug!("sound asset {} unavailable: {}", rel, e);
                return;
            }
        };

        let source = match rodio::Decoder::new(BufReader::new(file)) {
            Ok(s) => s,
            Err(e) => {
                debug!("could not decode {}: {}", rel, e);
                return;
            }
        };

        match rodio::Sink::try_new(&self.handle) {
            Ok(sink) => {
                sink.set_volume(volume.clamp(0.0, 1.0));
                sink.append(source);
                sink.detach();
            }
            Err(e) => debug!("could not open audio sink: {}", e),
        }
    }
}

/// Best available player: rodio if an output device exists, otherwise null.
pub fn default_player() -> Box<dyn SoundPlayer> {
    match RodioPlayer::new() {
        Some(player) => Box::new(player),
        None => Box::new(NullPlayer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_player_never_panics() {
        NullPlayer.play("/static/sounds/does-not-exist.mp3", 0.5);
        NullPlayer.play("", 2.0);
    }
}
