mod line;
mod section;
mod station;

pub use line::*;
pub use section::*;
pub use station::*;
