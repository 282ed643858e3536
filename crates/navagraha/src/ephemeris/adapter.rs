use crate::ephemeris::types::{Body, GeoLocation, Instant};
use crate::settings::{EngineSettings, LunarNodeKind};
use std::env;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use swisseph::swe::{calc_ut, houses_ex, set_ephe_path};
use swisseph::AscMc;
use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Invalid ayanamsa: {ayanamsa}. Valid ayanamsas: {valid:?}")]
    InvalidAyanamsa { ayanamsa: String, valid: Vec<String> },
    #[error("Failed to calculate position for {body} at JD {julian_day}: {message}")]
    CalculationFailed {
        body: Body,
        julian_day: f64,
        message: String,
    },
    #[error("Ephemeris returned invalid {what}: {value}")]
    InvalidData { what: String, value: f64 },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
}

/// Source of raw astronomical positions.
///
/// Longitudes come back in the adapter's configured frame; the engine only
/// ever constructs sidereal adapters. The ascendant is always tropical and is
/// corrected with `ayanamsa` by the caller.
pub trait Ephemeris {
    /// Longitude (degrees) and speed in longitude (degrees/day) of a body.
    fn longitude_and_speed(&self, instant: &Instant, body: Body) -> Result<(f64, f64), EphemerisError>;

    /// Tropical ascendant (degrees) for an instant and location.
    fn tropical_ascendant(&self, instant: &Instant, location: &GeoLocation) -> Result<f64, EphemerisError>;

    /// Ayanamsa (degrees) at an instant.
    fn ayanamsa(&self, instant: &Instant) -> Result<f64, EphemerisError>;
}

/// Reference frame for body longitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZodiacMode {
    Tropical,
    Sidereal,
}

// Swiss Ephemeris calculation flags
const FLG_SWIEPH: i32 = 2;
const FLG_NONUT: i32 = 64;
const FLG_SPEED: i32 = 256;

/// Pseudo-body returning obliquity and nutation.
const ECL_NUT: i32 = -1;

const MEAN_NODE: i32 = 10;
const TRUE_NODE: i32 = 11;

const PLACIDUS: u8 = b'P';

const J2000_JD: f64 = 2_451_545.0;
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Ayanamsa values at J2000.0 (degrees), mean equinox.
const AYANAMSAS: &[(&str, f64)] = &[
    ("lahiri", 23.853),
    ("chitrapaksha", 23.853),
    ("krishnamurti", 23.850),
    ("raman", 22.370),
    ("fagan_bradley", 24.736),
    ("de_luce", 21.619),
    ("djwhal_khul", 22.883),
    ("yukteshwar", 22.376),
];

/// Swiss Ephemeris planet ID for a body; Ketu has none.
fn swiss_planet_code(body: Body, node: LunarNodeKind) -> Option<i32> {
    match body {
        Body::Sun => Some(0),
        Body::Moon => Some(1),
        Body::Mercury => Some(2),
        Body::Venus => Some(3),
        Body::Mars => Some(4),
        Body::Jupiter => Some(5),
        Body::Saturn => Some(6),
        Body::Rahu => Some(match node {
            LunarNodeKind::Mean => MEAN_NODE,
            LunarNodeKind::True => TRUE_NODE,
        }),
        Body::Ketu => None,
    }
}

/// Map ayanamsa string to its J2000 reference value
pub fn resolve_ayanamsa(name: &str) -> Result<f64, EphemerisError> {
    let key = name.to_lowercase();
    AYANAMSAS
        .iter()
        .find(|(n, _)| *n == key)
        .map(|(_, value)| *value)
        .ok_or_else(|| EphemerisError::InvalidAyanamsa {
            ayanamsa: name.to_string(),
            valid: AYANAMSAS.iter().map(|(n, _)| n.to_string()).collect(),
        })
}

/// IAU 2006 general precession in longitude, in degrees, `t` in Julian centuries from J2000.
fn general_precession_deg(t: f64) -> f64 {
    let arcsec = t * (5028.796195 + t * (1.1054348 + t * (0.00007964 + t * (-0.000023857 + t * -0.0000000383))));
    arcsec / 3600.0
}

/// Mean ayanamsa at a Julian day for a given J2000 reference value.
pub fn mean_ayanamsa(reference_j2000: f64, julian_day: f64) -> f64 {
    let t = (julian_day - J2000_JD) / DAYS_PER_CENTURY;
    reference_j2000 + general_precession_deg(t)
}

lazy_static::lazy_static! {
    /// Data path currently loaded into the process-wide Swiss Ephemeris state.
    static ref ACTIVE_PATH: Mutex<Option<String>> = Mutex::new(None);
}

/// Run `f` against the backend with `path` loaded.
///
/// The C library keeps one global data path and is not reentrant, so every
/// call is serialized and the path is only reloaded when it changes.
fn with_backend<T>(path: &str, f: impl FnOnce() -> T) -> T {
    let mut active = ACTIVE_PATH.lock().unwrap_or_else(PoisonError::into_inner);
    if active.as_deref() != Some(path) {
        log::debug!("Loading Swiss Ephemeris data from {}", path);
        set_ephe_path(path);
        *active = Some(path.to_string());
    }
    f()
}

/// Data path most recently handed to the Swiss Ephemeris backend.
pub fn active_ephemeris_path() -> Option<String> {
    ACTIVE_PATH.lock().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Swiss Ephemeris adapter implementation
///
/// Configuration (data path, ayanamsa, node model, frame) is fixed at
/// construction and scoped to this instance.
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
    backend_path: String,
    ayanamsa_reference: f64,
    node: LunarNodeKind,
    mode: ZodiacMode,
}

impl SwissEphemerisAdapter {
    /// Create a sidereal adapter from engine settings
    pub fn new(settings: &EngineSettings) -> Result<Self, EphemerisError> {
        Self::with_mode(settings, ZodiacMode::Sidereal)
    }

    pub fn with_mode(settings: &EngineSettings, mode: ZodiacMode) -> Result<Self, EphemerisError> {
        let path = settings.ephemeris_path.clone().unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/usr/local/share/swisseph"))
        });

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        // The backend takes a C string
        let backend_path = path
            .to_str()
            .filter(|p| !p.contains('\0'))
            .map(str::to_string)
            .ok_or_else(|| EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path must be valid UTF-8 without NUL bytes.".to_string(),
            })?;

        let ayanamsa_reference = resolve_ayanamsa(&settings.ayanamsa)?;
        log::debug!(
            "Swiss ephemeris adapter: path={}, ayanamsa={} ({:.3} at J2000), node={:?}, mode={:?}",
            path.display(),
            settings.ayanamsa,
            ayanamsa_reference,
            settings.lunar_node,
            mode
        );

        Ok(Self {
            ephemeris_path: path,
            backend_path,
            ayanamsa_reference,
            node: settings.lunar_node,
            mode,
        })
    }

    pub fn ephemeris_path(&self) -> &PathBuf {
        &self.ephemeris_path
    }

    /// The backend reports the ephemeris it actually used; without data files
    /// under the configured path it silently drops to the analytical one.
    fn require_data_files(&self, returned_flags: i32) -> Result<(), EphemerisError> {
        if returned_flags & FLG_SWIEPH == 0 {
            return Err(EphemerisError::FileNotFound {
                path: self.backend_path.clone(),
                message: "Swiss Ephemeris data files were not found under the configured path.".to_string(),
            });
        }
        Ok(())
    }

    fn tropical_longitude_and_speed(&self, julian_day: f64, body: Body) -> Result<(f64, f64), EphemerisError> {
        let code = swiss_planet_code(body, self.node).ok_or_else(|| EphemerisError::CalculationFailed {
            body,
            julian_day,
            message: "Ketu is derived from Rahu and has no ephemeris entry".to_string(),
        })?;

        // Mean equinox of date, the frame the ayanamsa is referred to
        let flags = FLG_SWIEPH | FLG_NONUT | FLG_SPEED;
        let result = with_backend(&self.backend_path, || calc_ut(julian_day, code as u32, flags as u32)).map_err(
            |e| EphemerisError::CalculationFailed {
                body,
                julian_day,
                message: format!("Swiss Ephemeris error: {}", e),
            },
        )?;
        self.require_data_files(result.code)?;

        let longitude = result.out[0];
        let speed = result.out[3];
        if !longitude.is_finite() {
            return Err(EphemerisError::InvalidData {
                what: format!("{} longitude", body),
                value: longitude,
            });
        }
        if !speed.is_finite() {
            return Err(EphemerisError::InvalidData {
                what: format!("{} speed", body),
                value: speed,
            });
        }
        Ok((longitude, speed))
    }
}

impl Ephemeris for SwissEphemerisAdapter {
    fn longitude_and_speed(&self, instant: &Instant, body: Body) -> Result<(f64, f64), EphemerisError> {
        let (longitude, speed) = self.tropical_longitude_and_speed(instant.julian_day, body)?;
        match self.mode {
            ZodiacMode::Tropical => Ok((longitude, speed)),
            ZodiacMode::Sidereal => Ok((longitude - self.ayanamsa(instant)?, speed)),
        }
    }

    fn tropical_ascendant(&self, instant: &Instant, location: &GeoLocation) -> Result<f64, EphemerisError> {
        let julian_day = instant.julian_day;
        let (angles, nutation) = with_backend(&self.backend_path, || {
            let (_cusps, angles) = houses_ex(julian_day, FLG_SWIEPH, location.lat, location.lon, PLACIDUS as i32);
            (angles, calc_ut(julian_day, ECL_NUT as u32, FLG_SWIEPH as u32))
        });
        let nutation = nutation.map_err(|e| EphemerisError::HouseCalculationFailed {
            message: format!("nutation unavailable at JD {}: {}", julian_day, e),
        })?;

        // houses_ex works on the true equinox; out[2] is nutation in longitude
        let ascendant = AscMc::from_array(angles).ascendant - nutation.out[2];
        if !ascendant.is_finite() {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!("non-finite ascendant {} at JD {}", ascendant, julian_day),
            });
        }
        Ok(ascendant)
    }

    fn ayanamsa(&self, instant: &Instant) -> Result<f64, EphemerisError> {
        Ok(mean_ayanamsa(self.ayanamsa_reference, instant.julian_day))
    }
}
