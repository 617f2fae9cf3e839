//! Natal chart orchestration.
//!
//! The service owns one ephemeris backend, chosen the first time it is
//! initialized and kept for its lifetime. Chart calculation itself is
//! synchronous and reentrant.

use crate::aspects::AspectCalculator;
use crate::chart::types::{BirthData, BirthInput, NatalChart};
use crate::ephemeris::{AnalyticEphemeris, Body, EphemerisBackend, EphemerisMode, SwissEphemerisAdapter};
use crate::houses::HouseSystem;
use crate::time::to_julian_day;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use thiserror::Error;

/// The one error callers of [`NatalChartService`] see.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("natal chart calculation failed")]
    CalculationFailed,
}

/// Internal causes, logged but never returned.
#[derive(Error, Debug)]
enum AssemblyError {
    #[error("invalid birth coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
    #[error("non-finite position for {0}")]
    NonFinitePosition(Body),
}

/// Backend selection options.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Swiss Ephemeris data directory
    pub ephemeris_path: Option<PathBuf>,
    /// Probe the real ephemeris before settling on the analytic model
    pub prefer_real: bool,
    /// Substitute analytic positions for bodies the real ephemeris fails on
    pub per_body_fallback: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            ephemeris_path: None,
            prefer_real: true,
            per_body_fallback: false,
        }
    }
}

impl ServiceConfig {
    /// Skip the probe and use the mean-motion model.
    pub fn analytic() -> Self {
        Self {
            prefer_real: false,
            ..Self::default()
        }
    }
}

/// Lifecycle of a [`NatalChartService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Uninitialized,
    Initializing,
    Ready(EphemerisMode),
}

/// Pick the backend for a configuration.
///
/// Any failure to open or probe the Swiss Ephemeris settles on the analytic
/// model.
pub fn select_backend(config: &ServiceConfig) -> Box<dyn EphemerisBackend> {
    if !config.prefer_real {
        log::info!("Using analytic ephemeris (real ephemeris disabled)");
        return Box::new(AnalyticEphemeris::new());
    }

    let probed = SwissEphemerisAdapter::new(config.ephemeris_path.clone())
        .and_then(|adapter| adapter.probe().map(|_| adapter));

    match probed {
        Ok(adapter) => {
            log::info!(
                "Using Swiss Ephemeris from {}",
                adapter.ephemeris_path().display()
            );
            Box::new(adapter.with_body_fallback(config.per_body_fallback))
        }
        Err(e) => {
            log::warn!("{}; using analytic ephemeris", e);
            Box::new(AnalyticEphemeris::new())
        }
    }
}

/// Chooses a backend for a configuration.
type BackendSelector = fn(&ServiceConfig) -> Box<dyn EphemerisBackend>;

/// State shared with the blocking pool while the backend is chosen.
struct Shared {
    config: ServiceConfig,
    backend: OnceLock<Box<dyn EphemerisBackend>>,
    initializing: AtomicBool,
    selector: BackendSelector,
}

impl Shared {
    /// Single-flight: concurrent callers block on the one selection in progress.
    fn backend(&self) -> &dyn EphemerisBackend {
        self.backend
            .get_or_init(|| {
                self.initializing.store(true, Ordering::Release);
                (self.selector)(&self.config)
            })
            .as_ref()
    }
}

/// Computes natal charts.
pub struct NatalChartService {
    shared: Arc<Shared>,
    aspects: AspectCalculator,
}

impl NatalChartService {
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_selector(config, select_backend)
    }

    fn with_selector(config: ServiceConfig, selector: BackendSelector) -> Self {
        Self {
            shared: Arc::new(Shared {
                config,
                backend: OnceLock::new(),
                initializing: AtomicBool::new(false),
                selector,
            }),
            aspects: AspectCalculator::new(),
        }
    }

    /// A service that is ready immediately with the given backend.
    pub fn with_backend(backend: Box<dyn EphemerisBackend>) -> Self {
        let service = Self::new(ServiceConfig::default());
        // Freshly created, so the cell is empty.
        let _ = service.shared.backend.set(backend);
        service
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.shared.config
    }

    pub fn state(&self) -> ServiceState {
        match self.shared.backend.get() {
            Some(backend) => ServiceState::Ready(backend.mode()),
            None if self.shared.initializing.load(Ordering::Acquire) => ServiceState::Initializing,
            None => ServiceState::Uninitialized,
        }
    }

    /// Choose the backend, running the probe on the blocking pool.
    ///
    /// Shares one selection with [`NatalChartService::init_blocking`] and with
    /// chart calls made meanwhile. Once ready, later calls return the cached mode.
    pub async fn init(&self) -> EphemerisMode {
        if let Some(backend) = self.shared.backend.get() {
            return backend.mode();
        }

        let shared = Arc::clone(&self.shared);
        match tokio::task::spawn_blocking(move || shared.backend().mode()).await {
            Ok(mode) => mode,
            Err(e) => {
                log::warn!("Ephemeris probe task failed ({}); using analytic ephemeris", e);
                self.shared
                    .backend
                    .get_or_init(|| -> Box<dyn EphemerisBackend> { Box::new(AnalyticEphemeris::new()) })
                    .mode()
            }
        }
    }

    /// Synchronous variant of [`NatalChartService::init`].
    pub fn init_blocking(&self) -> EphemerisMode {
        self.shared.backend().mode()
    }

    /// Compute a natal chart, initializing the service first if needed.
    ///
    /// Unparseable dates, failing bodies and failing house computations all
    /// degrade inside their components. Only input that cannot describe a
    /// place on Earth yields [`ChartError::CalculationFailed`].
    pub fn calculate_natal_chart(&self, input: &BirthInput) -> Result<NatalChart, ChartError> {
        self.assemble(input).map_err(|e| {
            log::error!("Natal chart calculation failed: {}", e);
            ChartError::CalculationFailed
        })
    }

    fn assemble(&self, input: &BirthInput) -> Result<NatalChart, AssemblyError> {
        if !input.has_valid_coordinates() {
            return Err(AssemblyError::InvalidCoordinates {
                latitude: input.latitude,
                longitude: input.longitude,
            });
        }

        let backend = self.shared.backend();
        let moment = to_julian_day(&input.date, &input.time);
        let system = HouseSystem::resolve(&input.house_system);

        let planets = backend.compute_planets(moment.julian_day);
        if let Some(bad) = planets.iter().find(|p| !p.longitude.is_finite()) {
            return Err(AssemblyError::NonFinitePosition(bad.body));
        }

        let houses =
            backend.compute_houses(moment.julian_day, input.latitude, input.longitude, system);
        let aspects = self.aspects.compute_aspects(&planets);

        log::debug!(
            "Chart at JD {:.5}: {} planets, {} aspects, {} houses{}",
            moment.julian_day,
            planets.len(),
            aspects.len(),
            houses.system,
            if houses.fallback { " (fallback)" } else { "" }
        );

        Ok(NatalChart {
            planets,
            houses,
            aspects,
            birth_data: BirthData {
                input: input.clone(),
                moment,
            },
            ephemeris: backend.mode(),
        })
    }
}

impl Default for NatalChartService {
    fn default() -> Self {
        Self::new(ServiceConfig::default())
    }
}
