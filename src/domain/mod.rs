mod classification;
mod envelope;
mod error;
mod map;
mod outcome;
mod pagination;
mod projection;

pub use classification::*;
pub use envelope::*;
pub use error::*;
pub use map::*;
pub use outcome::*;
pub use pagination::*;
pub use projection::*;

pub type Unit = ();
