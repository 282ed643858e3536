pub mod adapter;
pub mod fixture;
pub mod normalize;
pub mod types;

pub use adapter::{active_ephemeris_path, Ephemeris, EphemerisError, SwissEphemerisAdapter, ZodiacMode};
pub use fixture::FixedEphemeris;
pub use normalize::{angular_difference, format_degrees, normalize_degrees, parse_birth_input, round_longitude, BirthInput};
pub use types::{Body, BodyPosition, GeoLocation, Instant, Positions};
