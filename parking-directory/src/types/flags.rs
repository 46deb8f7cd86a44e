/// Returns true when a Y/N cell reads as "yes": a case-insensitive `y` anywhere in the text.
pub fn is_yes(cell: &str) -> bool {
    cell.chars().any(|c| c.eq_ignore_ascii_case(&'y'))
}

/// Parking permit categories a lot may accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PassType {
    Visitor,
    Yellow,
    Orange,
    Blue,
    Gold,
    Housing,
}

impl PassType {
    pub const ALL: [PassType; 6] = [
        PassType::Visitor,
        PassType::Yellow,
        PassType::Orange,
        PassType::Blue,
        PassType::Gold,
        PassType::Housing,
    ];

    /// Identifier used for filter checkbox ids and badge classes.
    pub fn as_str(&self) -> &'static str {
        match self {
            PassType::Visitor => "visitor",
            PassType::Yellow => "yellow",
            PassType::Orange => "orange",
            PassType::Blue => "blue",
            PassType::Gold => "gold",
            PassType::Housing => "housing",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PassType::Visitor => "Visitor Paid Parking",
            PassType::Yellow => "Yellow Pass",
            PassType::Orange => "Orange Pass",
            PassType::Blue => "Blue Pass",
            PassType::Gold => "Gold Pass",
            PassType::Housing => "Housing Lot",
        }
    }

    /// Badge color as RGB.
    pub fn color(&self) -> [u8; 3] {
        match self {
            PassType::Visitor => [120, 120, 120],
            PassType::Yellow => [240, 200, 30],
            PassType::Orange => [240, 130, 20],
            PassType::Blue => [30, 90, 200],
            PassType::Gold => [190, 150, 40],
            PassType::Housing => [40, 150, 80],
        }
    }
}

/// Lot features that can be required by the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Amenity {
    Bus,
    Handicap,
    Van,
    Motorcycle,
    Ev,
}

impl Amenity {
    pub const ALL: [Amenity; 5] = [
        Amenity::Bus,
        Amenity::Handicap,
        Amenity::Van,
        Amenity::Motorcycle,
        Amenity::Ev,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Amenity::Bus => "bus",
            Amenity::Handicap => "handicap",
            Amenity::Van => "van",
            Amenity::Motorcycle => "motorcycle",
            Amenity::Ev => "ev",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Amenity::Bus => "Bus Service",
            Amenity::Handicap => "Handicap",
            Amenity::Van => "Van Spaces",
            Amenity::Motorcycle => "Motorcycle",
            Amenity::Ev => "EV Charging",
        }
    }

    pub fn icon(&self) -> char {
        match self {
            Amenity::Bus => '🚌',
            Amenity::Handicap => '♿',
            Amenity::Van => '🚐',
            Amenity::Motorcycle => '🏍',
            Amenity::Ev => '🔌',
        }
    }
}
