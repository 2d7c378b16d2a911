pub mod catalog;
pub mod config;
pub mod geolocation;
pub mod map;
pub mod narration;
pub mod notice;
pub mod planner;
pub mod route;
pub mod selection;
pub mod shared;
pub mod view;

pub mod prelude {
    pub use crate::catalog::{Catalog, Category, Location, Query};
    pub use crate::config::{CAMPUS_CENTER, Config};
    pub use crate::geolocation::{GeolocationProbe, PositionError, PositionSource, Probe};
    pub use crate::map::{MapSurface, RouteStatus};
    pub use crate::narration::{NarrationBackend, Narrator, SelectionKind, SpeechOptions};
    pub use crate::notice::Notice;
    pub use crate::planner::{PickMode, SearchPanel};
    pub use crate::route::{RouteRequest, RouteResult};
    pub use crate::selection::{Selection, SelectionEvent};
    pub use crate::shared::{Coordinate, Distance, Duration};
    pub use crate::view::View;
}
