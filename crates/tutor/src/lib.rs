pub mod driver;
pub mod stepped;
pub mod sweep;
pub mod tween;
pub mod view;

pub use driver::{driver_for, HighlightDriver};
pub use stepped::SteppedDriver;
pub use sweep::SweepDriver;
pub use tween::Tween;
pub use view::{PracticeViewState, TransportIcon};
