mod location;
mod narration;
mod route;
mod selection;

pub use location::*;
pub use narration::*;
pub use route::*;
pub use selection::*;
