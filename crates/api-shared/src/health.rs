use crate::types::HealthRes;

/// Simple health service used by the REST API.
///
/// Provides a standardised way to report liveness of the service.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Creates a new instance of HealthService.
    pub fn new() -> Self {
        Self
    }

    /// Static method to check health without creating an instance.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Health analysis API is alive".into(),
        }
    }
}
