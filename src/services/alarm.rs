//! Completion alarm playback

use std::{io::Write, path::PathBuf};
use tracing::{debug, info};

/// How the completion alarm is sounded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alarm {
    /// Play a sound file (falls back to the bell without the `sound` feature)
    Sound(PathBuf),
    /// Ring the terminal bell
    Bell,
    /// Do nothing
    Silent,
}

impl Alarm {
    /// Play the alarm once.
    ///
    /// Errors are meant to be logged and skipped by the caller; a missing
    /// alarm never affects the countdown.
    pub async fn play(&self) -> Result<(), String> {
        match self {
            Alarm::Sound(path) => play_sound(path.clone()).await,
            Alarm::Bell => ring_bell(),
            Alarm::Silent => {
                debug!("Alarm is silent, skipping playback");
                Ok(())
            }
        }
    }
}

/// Ring the terminal bell on stdout
pub fn ring_bell() -> Result<(), String> {
    let mut stdout = std::io::stdout();
    stdout.write_all(b"\x07")
        .and_then(|_| stdout.flush())
        .map_err(|e| format!("Failed to ring terminal bell: {}", e))?;
    info!("Rang terminal bell");
    Ok(())
}

#[cfg(feature = "sound")]
async fn play_sound(path: PathBuf) -> Result<(), String> {
    if !path.exists() {
        return Err(format!("Alarm sound not found: {}", path.display()));
    }

    info!("Playing alarm sound {}", path.display());
    tokio::task::spawn_blocking(move || -> Result<(), String> {
        use rodio::{Decoder, OutputStream, Sink};
        use std::{fs::File, io::BufReader};

        let (_stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| format!("No audio output device: {}", e))?;
        let file = File::open(&path)
            .map_err(|e| format!("Failed to open {}: {}", path.display(), e))?;
        let source = Decoder::new(BufReader::new(file))
            .map_err(|e| format!("Failed to decode {}: {}", path.display(), e))?;
        let sink = Sink::try_new(&stream_handle)
            .map_err(|e| format!("Failed to create audio sink: {}", e))?;

        sink.append(source);
        sink.sleep_until_end();
        Ok(())
    })
    .await
    .map_err(|e| format!("Alarm playback task failed: {}", e))?
}

#[cfg(not(feature = "sound"))]
async fn play_sound(path: PathBuf) -> Result<(), String> {
    debug!("Built without sound support, ringing bell instead of {}", path.display());
    ring_bell()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn silent_alarm_succeeds() {
        assert_eq!(Alarm::Silent.play().await, Ok(()));
    }

    #[cfg(feature = "sound")]
    #[tokio::test]
    async fn missing_sound_file_is_an_error() {
        let alarm = Alarm::Sound(PathBuf::from("/definitely/not/here/alarm.mp3"));
        let err = alarm.play().await.unwrap_err();
        assert!(err.contains("not found"));
    }
}
