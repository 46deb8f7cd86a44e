mod coordinates;
pub use coordinates::Coordinates;

mod flags;
pub use flags::{is_yes, Amenity, PassType};

mod lot;
pub use lot::LotRecord;

mod destination;
pub use destination::{Destination, Place};

mod map_bounds;
pub use map_bounds::MapBounds;
