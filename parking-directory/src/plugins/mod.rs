mod destination;
mod lots;
pub use destination::DestinationPin;
pub use lots::Lots;

/// How close, in points, a click must land to a marker to select it.
const CLICK_RADIUS: f32 = 14.;
