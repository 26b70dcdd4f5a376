/// A single timed comment, before any layout decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Danmu {
    /// Seconds from the start of the video.
    pub timeline_s: f64,
    pub content: String,
}
