use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rodio::{Decoder, OutputStream, Sink};

/// The one shared click-cue player.
pub(crate) trait CuePlayer {
    /// Play the cue from position zero, cutting off any playback in progress.
    fn restart(&mut self) -> Result<(), CueError>;
    fn is_playing(&self) -> bool;
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum CueError {
    #[error("cannot read cue asset {path:?}: {source}")]
    Asset {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("no audio output: {0}")]
    Output(String),
    #[error("cannot decode cue asset: {0}")]
    Decode(String),
}

pub(crate) struct RodioCue {
    // Dropping the stream silences the sink.
    _stream: OutputStream,
    sink: Sink,
    clip: Arc<[u8]>,
}

impl RodioCue {
    pub(crate) fn open(asset: &Path) -> Result<Self, CueError> {
        let clip: Arc<[u8]> = fs::read(asset)
            .map_err(|source| CueError::Asset {
                path: asset.to_path_buf(),
                source,
            })?
            .into();
        // Reject an undecodable asset up front.
        decode(&clip)?;

        let (stream, handle) =
            OutputStream::try_default().map_err(|err| CueError::Output(err.to_string()))?;
        let sink = Sink::try_new(&handle).map_err(|err| CueError::Output(err.to_string()))?;
        Ok(Self {
            _stream: stream,
            sink,
            clip,
        })
    }
}

impl CuePlayer for RodioCue {
    fn restart(&mut self) -> Result<(), CueError> {
        let source = decode(&self.clip)?;
        self.sink.clear();
        self.sink.append(source);
        self.sink.play();
        Ok(())
    }

    fn is_playing(&self) -> bool {
        !self.sink.empty() && !self.sink.is_paused()
    }
}

fn decode(clip: &Arc<[u8]>) -> Result<Decoder<Cursor<Arc<[u8]>>>, CueError> {
    Decoder::new(Cursor::new(Arc::clone(clip))).map_err(|err| CueError::Decode(err.to_string()))
}

/// Stand-in when no asset or output device is available.
pub(crate) struct SilentCue;

impl CuePlayer for SilentCue {
    fn restart(&mut self) -> Result<(), CueError> {
        Ok(())
    }

    fn is_playing(&self) -> bool {
        false
    }
}
