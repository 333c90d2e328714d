//! Embedded resort list used whenever live data is unavailable.
//!
//! Records are built in code rather than parsed at startup so the fallback
//! can never fail to load.

use skidir_core::{
    Coordinates, Elevation, LiftTicketPrice, Lifts, Location, ResortRecord, SeasonDates,
    Snowmaking, Trails,
};

/// One embedded resort. The numeric groups reuse the canonical `Copy`
/// types so every value is named where it is defined.
struct Seed {
    id: &'static str,
    name: &'static str,
    state: &'static str,
    city: &'static str,
    coordinates: Coordinates,
    elevation: Elevation,
    lifts: Lifts,
    trails: Trails,
    skiable_acres: i64,
    snowmaking: Snowmaking,
    season: Option<SeasonSeed>,
    website: &'static str,
    description: &'static str,
    amenities: &'static [&'static str],
    price: LiftTicketPrice,
}

struct SeasonSeed {
    opening: &'static str,
    closing: &'static str,
}

const NEW_ENGLAND: &[Seed] = &[
    Seed {
        id: "killington-vt",
        name: "Killington Resort",
        state: "Vermont",
        city: "Killington",
        coordinates: Coordinates {
            latitude: 43.6041,
            longitude: -72.8092,
        },
        elevation: Elevation {
            base: 1165,
            summit: 4241,
            vertical: 3076,
        },
        lifts: Lifts {
            total: 22,
            chairlifts: 18,
            surface_lifts: 4,
            gondolas: Some(2),
            funiculars: None,
        },
        trails: Trails {
            total: 155,
            beginner: 20,
            intermediate: 58,
            advanced: 45,
            expert: 32,
        },
        skiable_acres: 1509,
        snowmaking: Snowmaking {
            percentage: 70,
            acres: Some(600),
        },
        season: Some(SeasonSeed {
            opening: "November",
            closing: "May",
        }),
        website: "https://www.killington.com",
        description: "The Beast of the East - Vermont's largest ski resort",
        amenities: &[
            "Base Lodge",
            "Summit Restaurant",
            "Ski School",
            "Rental Shop",
            "Terrain Parks",
        ],
        price: LiftTicketPrice {
            adult: 129.0,
            child: Some(99.0),
            senior: Some(99.0),
        },
    },
    Seed {
        id: "stowe-vt",
        name: "Stowe Mountain Resort",
        state: "Vermont",
        city: "Stowe",
        coordinates: Coordinates {
            latitude: 44.5305,
            longitude: -72.7825,
        },
        elevation: Elevation {
            base: 1339,
            summit: 4395,
            vertical: 3056,
        },
        lifts: Lifts {
            total: 13,
            chairlifts: 11,
            surface_lifts: 2,
            gondolas: Some(1),
            funiculars: None,
        },
        trails: Trails {
            total: 116,
            beginner: 16,
            intermediate: 59,
            advanced: 25,
            expert: 16,
        },
        skiable_acres: 485,
        snowmaking: Snowmaking {
            percentage: 73,
            acres: None,
        },
        season: None,
        website: "https://www.stowe.com",
        description: "Vermont's premier mountain resort on Mt. Mansfield",
        amenities: &[
            "Village",
            "Spa",
            "Fine Dining",
            "Ski School",
            "Cross Country",
        ],
        price: LiftTicketPrice {
            adult: 139.0,
            child: Some(109.0),
            senior: Some(109.0),
        },
    },
    Seed {
        id: "sunday-river-me",
        name: "Sunday River",
        state: "Maine",
        city: "Newry",
        coordinates: Coordinates {
            latitude: 44.4697,
            longitude: -70.8519,
        },
        elevation: Elevation {
            base: 800,
            summit: 3140,
            vertical: 2340,
        },
        lifts: Lifts {
            total: 15,
            chairlifts: 13,
            surface_lifts: 2,
            gondolas: None,
            funiculars: None,
        },
        trails: Trails {
            total: 135,
            beginner: 25,
            intermediate: 56,
            advanced: 35,
            expert: 19,
        },
        skiable_acres: 870,
        snowmaking: Snowmaking {
            percentage: 95,
            acres: None,
        },
        season: None,
        website: "https://www.sundayriver.com",
        description: "Maine's premier ski destination with reliable snow",
        amenities: &[
            "Multiple Base Lodges",
            "Terrain Parks",
            "Ski School",
            "Day Care",
        ],
        price: LiftTicketPrice {
            adult: 119.0,
            child: Some(89.0),
            senior: Some(89.0),
        },
    },
    Seed {
        id: "cannon-mountain-nh",
        name: "Cannon Mountain",
        state: "New Hampshire",
        city: "Franconia",
        coordinates: Coordinates {
            latitude: 44.1567,
            longitude: -71.6981,
        },
        elevation: Elevation {
            base: 1930,
            summit: 4080,
            vertical: 2150,
        },
        lifts: Lifts {
            total: 11,
            chairlifts: 9,
            surface_lifts: 1,
            gondolas: Some(1),
            funiculars: None,
        },
        trails: Trails {
            total: 97,
            beginner: 14,
            intermediate: 44,
            advanced: 25,
            expert: 14,
        },
        skiable_acres: 285,
        snowmaking: Snowmaking {
            percentage: 98,
            acres: None,
        },
        season: None,
        website: "https://www.cannonmt.com",
        description: "New Hampshire state-owned mountain with challenging terrain",
        amenities: &[
            "Tramway",
            "Base Lodge",
            "Ski School",
            "Racing Programs",
        ],
        price: LiftTicketPrice {
            adult: 89.0,
            child: Some(69.0),
            senior: Some(69.0),
        },
    },
    Seed {
        id: "loon-mountain-nh",
        name: "Loon Mountain Resort",
        state: "New Hampshire",
        city: "Lincoln",
        coordinates: Coordinates {
            latitude: 44.0364,
            longitude: -71.6206,
        },
        elevation: Elevation {
            base: 950,
            summit: 3050,
            vertical: 2100,
        },
        lifts: Lifts {
            total: 12,
            chairlifts: 10,
            surface_lifts: 2,
            gondolas: None,
            funiculars: None,
        },
        trails: Trails {
            total: 61,
            beginner: 20,
            intermediate: 35,
            advanced: 4,
            expert: 2,
        },
        skiable_acres: 370,
        snowmaking: Snowmaking {
            percentage: 98,
            acres: None,
        },
        season: None,
        website: "https://www.loonmtn.com",
        description: "Family-friendly resort in the White Mountains",
        amenities: &[
            "Adventure Center",
            "Terrain Parks",
            "Tubing",
            "Kids Programs",
        ],
        price: LiftTicketPrice {
            adult: 109.0,
            child: Some(89.0),
            senior: Some(89.0),
        },
    },
    Seed {
        id: "wachusett-ma",
        name: "Wachusett Mountain",
        state: "Massachusetts",
        city: "Princeton",
        coordinates: Coordinates {
            latitude: 42.4826,
            longitude: -71.8856,
        },
        elevation: Elevation {
            base: 1000,
            summit: 2006,
            vertical: 1006,
        },
        lifts: Lifts {
            total: 8,
            chairlifts: 6,
            surface_lifts: 2,
            gondolas: None,
            funiculars: None,
        },
        trails: Trails {
            total: 27,
            beginner: 7,
            intermediate: 15,
            advanced: 3,
            expert: 2,
        },
        skiable_acres: 110,
        snowmaking: Snowmaking {
            percentage: 100,
            acres: None,
        },
        season: None,
        website: "https://www.wachusett.com",
        description: "Central Massachusetts skiing close to Boston",
        amenities: &[
            "Base Lodge",
            "Terrain Park",
            "Night Skiing",
            "Racing",
        ],
        price: LiftTicketPrice {
            adult: 79.0,
            child: Some(59.0),
            senior: Some(59.0),
        },
    },
];

impl Seed {
    fn to_record(&self) -> ResortRecord {
        ResortRecord {
            id: self.id.to_string(),
            name: self.name.to_string(),
            location: Location {
                state: self.state.to_string(),
                city: Some(self.city.to_string()),
                coordinates: Some(self.coordinates),
            },
            elevation: self.elevation,
            lifts: self.lifts,
            trails: self.trails,
            skiable_acres: self.skiable_acres,
            snowmaking: self.snowmaking,
            season_dates: self.season.as_ref().map(|season| SeasonDates {
                opening: Some(season.opening.to_string()),
                closing: Some(season.closing.to_string()),
            }),
            website: Some(self.website.to_string()),
            phone_number: None,
            description: Some(self.description.to_string()),
            amenities: self.amenities.iter().map(|a| (*a).to_string()).collect(),
            lift_ticket_price: Some(self.price),
        }
    }
}

/// The embedded New England resort list, in display order.
#[must_use]
pub fn fallback_resorts() -> Vec<ResortRecord> {
    NEW_ENGLAND.iter().map(Seed::to_record).collect()
}

/// Concatenates datasets in order. Records sharing an `id` are kept as-is;
/// no deduplication is attempted.
#[must_use]
pub fn merge_datasets<I>(datasets: I) -> Vec<ResortRecord>
where
    I: IntoIterator<Item = Vec<ResortRecord>>,
{
    datasets.into_iter().flatten().collect()
}
