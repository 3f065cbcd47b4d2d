mod fallback;
mod health;
mod metrics;

pub use self::metrics::*;
pub use fallback::*;
pub use health::*;
