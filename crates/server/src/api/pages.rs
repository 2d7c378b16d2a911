use crate::{
    dto::{LocationDto, MarkerDto, SelectionDto},
    state::AppState,
};
use axum::{
    Json,
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use campus_map::{
    catalog::Category,
    map::{TileLayer, Viewport},
    view::View,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Serialize)]
struct Page<T: Serialize> {
    view: View,
    title: &'static str,
    path: Option<&'static str>,
    /// Links for the navigation bar.
    nav: Vec<NavLink>,
    content: T,
}

#[derive(Debug, Serialize)]
struct NavLink {
    title: &'static str,
    path: &'static str,
}

#[derive(Debug, Serialize)]
struct HomeContent {
    location_count: usize,
    categories: Vec<CategoryCount>,
}

#[derive(Debug, Serialize)]
struct CategoryCount {
    category: Category,
    count: usize,
}

#[derive(Debug, Serialize)]
struct MapContent {
    tile_layer: TileLayer,
    viewport: Viewport,
    markers: Vec<MarkerDto>,
    selection: SelectionDto,
}

#[derive(Debug, Serialize)]
struct AboutContent {
    description: &'static str,
    attribution: String,
}

#[derive(Debug, Serialize)]
struct NotFoundContent {
    message: &'static str,
    home: &'static str,
}

/// Serves the page model for any path that isn't part of the api.
pub async fn page(uri: Uri, State(state): State<Arc<AppState>>) -> Response {
    let view = View::resolve(uri.path());
    debug!("Rendering {view:?} for {}", uri.path());
    match view {
        View::Home => {
            let categories = Category::CAMPUS
                .into_iter()
                .map(|category| CategoryCount {
                    category,
                    count: state.catalog.by_category(category).count(),
                })
                .collect();
            render(
                view,
                HomeContent {
                    location_count: state.catalog.len(),
                    categories,
                },
            )
        }
        View::Map => {
            let session = state.session.lock().await;
            render(
                view,
                MapContent {
                    tile_layer: session.surface.tile_layer().clone(),
                    viewport: session.surface.viewport(),
                    markers: session
                        .surface
                        .markers(&state.catalog, session.current.as_ref())
                        .into_iter()
                        .map(MarkerDto::from)
                        .collect(),
                    selection: SelectionDto::from(&*session),
                },
            )
        }
        View::Locations => {
            let locations: Vec<_> = state
                .catalog
                .locations()
                .iter()
                .map(LocationDto::from)
                .collect();
            render(view, locations)
        }
        View::About => render(
            view,
            AboutContent {
                description: "Find your way around campus: browse buildings, plan a route between two points and have directions read out loud.",
                attribution: state.config.tile_layer.attribution.clone(),
            },
        ),
        View::NotFound => {
            let page = Page::new(
                view,
                NotFoundContent {
                    message: "The page you are looking for doesn't exist.",
                    home: "/",
                },
            );
            (StatusCode::NOT_FOUND, Json(page)).into_response()
        }
    }
}

fn render<T: Serialize>(view: View, content: T) -> Response {
    Json(Page::new(view, content)).into_response()
}

impl<T: Serialize> Page<T> {
    fn new(view: View, content: T) -> Self {
        let nav = View::ALL
            .into_iter()
            .filter_map(|view| {
                view.path().map(|path| NavLink {
                    title: view.title(),
                    path,
                })
            })
            .collect();
        Self {
            view,
            title: view.title(),
            path: view.path(),
            nav,
            content,
        }
    }
}
