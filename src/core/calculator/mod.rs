pub mod agenda;
pub mod blocks;
pub mod days;
pub mod filter;
pub mod timeline;

pub use agenda::mobile_agenda;
pub use blocks::{TimeBlock, group_by_start};
pub use days::{day_of, extract_days};
pub use filter::{DayView, filter_by_day};
pub use timeline::{
    Geometry, PIXELS_PER_MINUTE, TimelineConfig, compute_timeline, compute_timeline_scaled,
};
