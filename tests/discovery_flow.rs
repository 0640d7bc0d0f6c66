//! End-to-end discovery flow: events through the state machine, actions into
//! the worker and map, responses back into state and view models.

use eatery_map::app::{handle_event, Action, AppState, Event};
use eatery_map::catalog::StaticCatalog;
use eatery_map::domain::{Eatery, EateryId, ExternalReview, Result};
use eatery_map::map::{MapView, MapWidget, MarkerDef};
use eatery_map::reviews::ReviewsGateway;
use eatery_map::ui::ReviewsSection;
use eatery_map::worker::{FetchWorker, WorkerMessage};
use eatery_map::{Config, Coordinates};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

fn eatery(id: EateryId, name: &str, category: &str, place_id: Option<&str>) -> Eatery {
    Eatery {
        id,
        name: name.to_string(),
        description: format!("{name} in town"),
        city: "Lusaka".to_string(),
        category: category.to_string(),
        latitude: Some(-15.4 - id as f64 * 0.01),
        longitude: Some(28.3),
        media: vec![],
        review: None,
        place_id: place_id.map(ToString::to_string),
    }
}

fn catalog() -> Vec<Eatery> {
    vec![
        eatery(1, "Little Bird", "Cafe", Some("place-1")),
        eatery(2, "Bo'jangles", "Restaurant", Some("place-2")),
        eatery(3, "Mint Lounge", "Lounge", None),
    ]
}

struct ScriptedReviews;

impl ReviewsGateway for ScriptedReviews {
    fn fetch(&self, place_id: &str) -> Result<Vec<ExternalReview>> {
        Ok(vec![ExternalReview {
            author_name: format!("Reviewer of {place_id}"),
            rating: 5,
            text: "Lovely".to_string(),
            timestamp_seconds: 1_700_000_000,
        }])
    }
}

#[derive(Clone, Default)]
struct RecordingWidget {
    markers: Rc<RefCell<Vec<EateryId>>>,
    flights: Rc<RefCell<Vec<EateryId>>>,
}

impl MapWidget for RecordingWidget {
    fn add_marker(&mut self, marker: &MarkerDef) {
        self.markers.borrow_mut().push(marker.id);
    }
    fn remove_marker(&mut self, id: EateryId) {
        self.markers.borrow_mut().retain(|m| *m != id);
    }
    fn fly_to(&mut self, _target: Coordinates, _zoom: f64, _duration: Duration) {}
    fn clear_markers(&mut self) {
        self.markers.borrow_mut().clear();
    }
}

#[test]
fn startup_select_and_read_reviews() {
    let config = Config::default();
    let mut state = eatery_map::initialize(&config);
    let mut worker = FetchWorker::new(
        Box::new(StaticCatalog(catalog())),
        Box::new(ScriptedReviews),
    );
    let widget = RecordingWidget::default();
    let flights = Rc::clone(&widget.flights);
    let markers = Rc::clone(&widget.markers);
    let mut view = MapView::new(widget, config.selection_zoom, Duration::from_millis(1200));

    // Startup: catalog loads, all three eateries listed and mapped.
    let response = worker.handle_message(WorkerMessage::LoadCatalog);
    handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
    view.sync_markers(&state.filtered);
    assert_eq!(state.sidebar_viewmodel().items.len(), 3);
    assert_eq!(markers.borrow().len(), 3);

    // Select from the list: overlay opens, map flies, reviews load.
    let (changed, actions) = handle_event(&mut state, &Event::EateryClicked(1)).unwrap();
    assert!(changed);
    assert_eq!(actions.len(), 2);
    for action in actions {
        match action {
            Action::FlyTo { eatery_id, .. } => {
                flights.borrow_mut().push(eatery_id);
                view.execute(&Action::FlyTo {
                    eatery_id,
                    target: Coordinates { lat: -15.41, lon: 28.3 },
                });
            }
            Action::PostToWorker(message) => {
                let response = worker.handle_message(message);
                handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
            }
        }
    }

    assert_eq!(*flights.borrow(), vec![1]);
    let overlay = state.overlay_viewmodel().expect("overlay is open");
    assert_eq!(overlay.name, "Little Bird");
    match overlay.reviews {
        ReviewsSection::Reviews(reviews) => {
            assert_eq!(reviews.len(), 1);
            assert_eq!(reviews[0].author_name, "Reviewer of place-1");
        }
        other => panic!("expected reviews, got {other:?}"),
    }
}

#[test]
fn filtering_keeps_selection_and_map_consistent() {
    let mut state = AppState::with_catalog(catalog());
    let widget = RecordingWidget::default();
    let markers = Rc::clone(&widget.markers);
    let mut view = MapView::new(widget, 13.0, Duration::from_millis(1200));
    view.sync_markers(&state.filtered);
    assert_eq!(markers.borrow().len(), 3);

    // Narrow to the Cafe category: one marker remains.
    handle_event(&mut state, &Event::CategorySelected("Cafe".to_string())).unwrap();
    view.sync_markers(&state.filtered);
    assert_eq!(*markers.borrow(), vec![1]);

    // A marker click on a filtered-out eatery still resolves catalog-wide.
    let (changed, _) = handle_event(&mut state, &Event::MarkerClicked(2)).unwrap();
    assert!(changed);
    assert_eq!(state.selected, Some(2));
    assert!(state.overlay_open);
    // The filtered view (and its markers) are unchanged by the selection.
    view.sync_markers(&state.filtered);
    assert_eq!(*markers.borrow(), vec![1]);
}

#[test]
fn rapid_reselection_discards_the_stale_response() {
    let mut state = AppState::with_catalog(catalog());
    let mut worker = FetchWorker::new(
        Box::new(StaticCatalog(Vec::new())),
        Box::new(ScriptedReviews),
    );

    // Select eatery 1, but before its response lands, select eatery 2.
    let (_, first_actions) = handle_event(&mut state, &Event::EateryClicked(1)).unwrap();
    let (_, second_actions) = handle_event(&mut state, &Event::EateryClicked(2)).unwrap();

    let fetch_for = |actions: Vec<Action>| {
        actions.into_iter().find_map(|a| match a {
            Action::PostToWorker(m @ WorkerMessage::FetchReviews { .. }) => Some(m),
            _ => None,
        })
    };
    let first_fetch = fetch_for(first_actions).expect("first selection fetches");
    let second_fetch = fetch_for(second_actions).expect("second selection fetches");

    // Deliver the responses out of selection order: eatery 1's arrives late.
    let late = worker.handle_message(first_fetch);
    let current = worker.handle_message(second_fetch);
    handle_event(&mut state, &Event::WorkerResponse(current)).unwrap();
    handle_event(&mut state, &Event::WorkerResponse(late)).unwrap();

    let overlay = state.overlay_viewmodel().expect("overlay is open");
    assert_eq!(overlay.eatery_id, 2);
    match overlay.reviews {
        ReviewsSection::Reviews(reviews) => {
            assert_eq!(reviews[0].author_name, "Reviewer of place-2");
        }
        other => panic!("expected eatery 2's reviews, got {other:?}"),
    }
}

#[test]
fn close_and_reopen_reuses_cached_reviews() {
    let mut state = AppState::with_catalog(catalog());
    let mut worker = FetchWorker::new(
        Box::new(StaticCatalog(Vec::new())),
        Box::new(ScriptedReviews),
    );

    let (_, actions) = handle_event(&mut state, &Event::EateryClicked(1)).unwrap();
    for action in actions {
        if let Action::PostToWorker(message) = action {
            let response = worker.handle_message(message);
            handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
        }
    }

    handle_event(&mut state, &Event::CloseOverlay).unwrap();
    assert!(!state.overlay_open);

    // Reopening the same eatery issues no actions at all.
    let (changed, actions) = handle_event(&mut state, &Event::EateryClicked(1)).unwrap();
    assert!(changed);
    assert!(actions.is_empty());
    let overlay = state.overlay_viewmodel().expect("overlay reopened");
    assert!(matches!(overlay.reviews, ReviewsSection::Reviews(_)));
}

#[test]
fn eatery_without_place_id_shows_unavailable_reviews() {
    let mut state = AppState::with_catalog(catalog());

    let (changed, actions) = handle_event(&mut state, &Event::EateryClicked(3)).unwrap();
    assert!(changed);
    // A fly-to may be issued, but no fetch.
    assert!(actions
        .iter()
        .all(|a| !matches!(a, Action::PostToWorker(WorkerMessage::FetchReviews { .. }))));

    let overlay = state.overlay_viewmodel().expect("overlay is open");
    assert!(matches!(overlay.reviews, ReviewsSection::Unavailable));
}
