pub mod primitives;
pub mod projector;
pub mod time_range;
pub mod types;

pub use primitives::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE};
pub use projector::Projector;
pub use time_range::TimeRange;
pub use types::{AxisMargins, Viewport};
