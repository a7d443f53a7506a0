/// An image asset reference: the key of an asset uploaded to the Discord
/// application, plus its hover tooltip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub key: String,
    pub text: String,
}

/// The presence record pushed to Discord.
///
/// Built once when the module activates and mutated in place before each
/// transmission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Activity {
    details: Option<String>,
    state: Option<String>,
    large_image: Option<ImageAsset>,
    small_image: Option<ImageAsset>,
    start: Option<u64>,
}

impl Activity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Main text line.
    pub fn set_details(&mut self, details: impl Into<String>) {
        self.details = Some(details.into());
    }

    /// Secondary text line.
    pub fn set_state(&mut self, state: impl Into<String>) {
        self.state = Some(state.into());
    }

    pub fn set_large_image(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.large_image = Some(ImageAsset {
            key: key.into(),
            text: text.into(),
        });
    }

    pub fn set_small_image(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.small_image = Some(ImageAsset {
            key: key.into(),
            text: text.into(),
        });
    }

    /// Session start, in seconds since the Unix epoch. Discord renders this
    /// as an elapsed-time counter.
    pub fn set_start(&mut self, epoch_secs: u64) {
        self.start = Some(epoch_secs);
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn large_image(&self) -> Option<&ImageAsset> {
        self.large_image.as_ref()
    }

    pub fn small_image(&self) -> Option<&ImageAsset> {
        self.small_image.as_ref()
    }

    pub fn start(&self) -> Option<u64> {
        self.start
    }
}
