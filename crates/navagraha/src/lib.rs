pub mod ephemeris;
pub mod error;
pub mod report;
pub mod settings;
pub mod vedic;

pub use ephemeris::{BirthInput, Body, Ephemeris, EphemerisError, FixedEphemeris, GeoLocation, Instant, SwissEphemerisAdapter};
pub use error::{ChartError, ValidationError};
pub use report::{generate_chart_report, ChartReport, ChartRequest};
pub use settings::{EngineSettings, LunarNodeKind};
