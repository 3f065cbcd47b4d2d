mod classify;
mod metrics;
mod projector;

pub use self::metrics::*;
pub use classify::*;
pub use projector::*;
