/// Session host that logs what a cast session layer would publish
use castdeck_playback::{MediaInfo, SessionHost};
use tracing::info;

#[derive(Debug, Default)]
pub struct LoggingSessionHost {
    current: Option<MediaInfo>,
    broadcasts: u64,
}

impl LoggingSessionHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Media info most recently published
    pub fn current(&self) -> Option<&MediaInfo> {
        self.current.as_ref()
    }

    pub fn broadcasts(&self) -> u64 {
        self.broadcasts
    }
}

impl SessionHost for LoggingSessionHost {
    fn set_media_information(&mut self, info: MediaInfo) {
        info!(
            content_id = %info.content_id,
            title = %info.metadata.title,
            track = ?info.metadata.track_number,
            duration = info.duration,
            "Now playing"
        );
        self.current = Some(info);
    }

    fn broadcast_status(&mut self) {
        self.broadcasts += 1;
        tracing::debug!(broadcasts = self.broadcasts, "Status broadcast");
    }
}
