mod format;
mod timestamp;
mod track;
mod video_id;

pub use format::Format;
pub use timestamp::Timestamp;
pub use track::{Track, Tracklist};
pub use video_id::VideoId;
