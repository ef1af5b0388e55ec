pub mod metrics;
pub mod middleware;
pub mod tracing;

pub use self::metrics::{Metrics, MetricsError};
pub use self::middleware::{observability_middleware, StoreTracer};
pub use self::tracing::{
    get_current_trace_id, init_observability, shutdown_observability, ObservabilityError,
    ObservabilitySettings,
};
