pub mod estimate;
pub mod polyline;
pub mod position;

pub use estimate::{estimate, estimate_default, AssumedSpeed, Estimate};
pub use polyline::decode;
pub use position::{acquire_current_position, Permission, PositionProvider, ReportedPosition};
