use rede_directory::*;

// ----------------------------------------------------------------------------
// Mock backends
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
enum ListCall {
    Replace(Vec<String>),
    Highlight(usize, bool),
    Scroll(usize),
}

#[derive(Debug, Default)]
struct MockList {
    entries: Vec<ListEntry>,
    highlighted: Vec<usize>,
    calls: Vec<ListCall>,
}

impl ListBackend for MockList {
    fn replace_entries(&mut self, entries: Vec<ListEntry>) {
        self.calls
            .push(ListCall::Replace(entries.iter().map(|e| e.name.clone()).collect()));
        self.entries = entries;
        self.highlighted.clear();
    }

    fn set_highlighted(&mut self, position: usize, highlighted: bool) {
        self.calls.push(ListCall::Highlight(position, highlighted));
        self.highlighted.retain(|p| *p != position);
        if highlighted {
            self.highlighted.push(position);
        }
    }

    fn scroll_into_view(&mut self, position: usize) {
        self.calls.push(ListCall::Scroll(position));
    }
}

#[derive(Debug, Clone, PartialEq)]
enum MapCall {
    CreateMap(LatLng, u8),
    TileLayer(String),
    AddMarker(u32, LabId, &'static str),
    RemoveMarker(u32),
    OpenPopup(u32),
    FitBounds(LatLngBounds),
    SetView(LatLng, u8),
    InvalidateSize,
}

#[derive(Debug, Default)]
struct MockMap {
    next_marker: u32,
    live: Vec<(u32, LatLng)>,
    calls: Vec<MapCall>,
}

impl MockMap {
    fn last_fit(&self) -> Option<LatLngBounds> {
        self.calls.iter().rev().find_map(|call| match call {
            MapCall::FitBounds(bounds) => Some(*bounds),
            _ => None,
        })
    }

    fn count(&self, matches: impl Fn(&MapCall) -> bool) -> usize {
        self.calls.iter().filter(|c| matches(*c)).count()
    }
}

impl MapBackend for MockMap {
    type Marker = u32;

    fn create_map(&mut self, center: LatLng, zoom: u8) {
        self.calls.push(MapCall::CreateMap(center, zoom));
    }

    fn add_tile_layer(&mut self, url_template: &str, _attribution: &str) {
        self.calls.push(MapCall::TileLayer(url_template.to_string()));
    }

    fn add_marker(
        &mut self,
        position: LatLng,
        icon: &MarkerIcon,
        _popup: &PopupContent,
        lab: LabId,
    ) -> u32 {
        let marker = self.next_marker;
        self.next_marker += 1;
        self.live.push((marker, position));
        self.calls.push(MapCall::AddMarker(marker, lab, icon.color));
        marker
    }

    fn remove_marker(&mut self, marker: &u32) {
        self.live.retain(|(m, _)| m != marker);
        self.calls.push(MapCall::RemoveMarker(*marker));
    }

    fn open_popup(&mut self, marker: &u32) {
        self.calls.push(MapCall::OpenPopup(*marker));
    }

    fn fit_bounds(&mut self, bounds: LatLngBounds) {
        self.calls.push(MapCall::FitBounds(bounds));
    }

    fn set_view(&mut self, center: LatLng, zoom: u8) {
        self.calls.push(MapCall::SetView(center, zoom));
    }

    fn invalidate_size(&mut self) {
        self.calls.push(MapCall::InvalidateSize);
    }
}

type Controller = DirectoryController<MockList, MockMap>;

// ----------------------------------------------------------------------------
// Fixtures
// ----------------------------------------------------------------------------

fn raw(name: &str, location: &str, region: &str, coords: Option<(f64, f64)>) -> RawLabRecord {
    RawLabRecord {
        name: name.to_string(),
        location: location.to_string(),
        description: format!("{name} em {location}"),
        region: Region::parse(region),
        latitude: coords.map(|c| c.0),
        longitude: coords.map(|c| c.1),
    }
}

/// The two-record dataset: Lab A (Sul, 1,1) and Lab B (Sudeste, no coordinates).
fn scenario_store() -> RecordStore {
    RecordStore::from_raw(vec![
        raw("Lab A", "Curitiba, PR", "Sul", Some((1.0, 1.0))),
        raw("Lab B", "Rio de Janeiro, RJ", "Sudeste", None),
    ])
}

fn network_store() -> RecordStore {
    RecordStore::from_raw(vec![
        raw("Fab Lab Livre SP", "São Paulo, SP", "Sudeste", Some((-23.55, -46.63))),
        raw("Fab Lab Floripa", "Florianópolis, SC", "Sul", Some((-27.59, -48.55))),
        raw("Fab Lab Recife", "Recife, PE", "Nordeste", Some((-8.05, -34.88))),
        raw("Fab Lab Brasília", "Brasília, DF", "Centro-Oeste", Some((-15.79, -47.88))),
        raw("Fab Lab Itinerante", "Vários locais", "Sudeste", None),
        raw("Fab Lab Belém", "Belém, PA", "Norte", Some((-1.45, -48.49))),
        raw("Fab Lab Poa", "Porto Alegre, RS", "Sul", Some((-30.03, -51.23))),
    ])
}

fn started(store: RecordStore) -> Controller {
    let mut controller = DirectoryController::new(
        store,
        MockList::default(),
        MockMap::default(),
        MapConfig::default(),
    );
    controller.start();
    controller
}

fn visible_names(controller: &Controller) -> Vec<String> {
    controller
        .visible_records()
        .iter()
        .map(|r| r.name.clone())
        .collect()
}

// ----------------------------------------------------------------------------
// Scenarios
// ----------------------------------------------------------------------------

#[test]
fn test_scenario_search_keeps_both_and_maps_one() {
    let mut controller = started(scenario_store());
    controller.set_search_term("lab");

    assert_eq!(visible_names(&controller), vec!["Lab A", "Lab B"]);
    assert_eq!(controller.map().marker_labs(), vec![LabId(0)]);
    assert_eq!(controller.map().backend().live.len(), 1);
    assert_eq!(controller.list().backend().entries.len(), 2);
}

#[test]
fn test_scenario_lowercase_region_identifier() {
    let mut controller = started(scenario_store());
    controller.set_region(RegionFilter::parse("sul"));
    assert_eq!(visible_names(&controller), vec!["Lab A"]);
}

#[test]
fn test_scenario_select_without_coordinates() {
    let mut controller = started(scenario_store());
    let calls_before = controller.map().backend().calls.len();

    let selected = controller.click_list_entry(1);

    assert_eq!(selected, Some(LabId(1)));
    assert_eq!(controller.selection(), Selection::Selected(LabId(1)));
    assert_eq!(controller.list().backend().highlighted, vec![1]);
    assert_eq!(controller.map().backend().calls.len(), calls_before);
}

#[test]
fn test_fitted_bounds_contain_every_marker() {
    let mut controller = started(network_store());
    controller.set_region(RegionFilter::parse("sul"));

    let bounds = controller.map().backend().last_fit().unwrap();
    for (_, position) in &controller.map().backend().live {
        assert!(bounds.contains(*position), "{position:?} outside {bounds:?}");
    }
    assert_eq!(controller.map().fitted_bounds(), Some(bounds));
}

// ----------------------------------------------------------------------------
// Map view
// ----------------------------------------------------------------------------

#[test]
fn test_start_creates_map_once() {
    let mut controller = started(network_store());
    controller.start();

    let map = controller.map().backend();
    assert_eq!(map.count(|c| matches!(c, MapCall::CreateMap(..))), 1);
    assert_eq!(map.count(|c| matches!(c, MapCall::TileLayer(_))), 1);
    assert_eq!(
        map.calls[0],
        MapCall::CreateMap(LatLng::new(-15.7939869, -47.8828), 4)
    );
}

#[test]
fn test_rerender_does_not_accumulate_markers() {
    let mut controller = started(network_store());
    let first = controller.map().marker_labs();

    controller.refresh();
    controller.refresh();

    assert_eq!(controller.map().marker_labs(), first);
    assert_eq!(controller.map().backend().live.len(), first.len());
    assert_eq!(first.len(), 6);
}

#[test]
fn test_marker_colors_follow_region() {
    let controller = started(network_store());
    let colors: Vec<&str> = controller
        .map()
        .backend()
        .calls
        .iter()
        .filter_map(|c| match c {
            MapCall::AddMarker(_, _, color) => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(
        colors,
        vec!["#e74c3c", "#3498db", "#f39c12", "#27ae60", "#666666", "#3498db"]
    );
}

#[test]
fn test_empty_result_leaves_viewport() {
    let mut controller = started(network_store());
    let fits_before = controller
        .map()
        .backend()
        .count(|c| matches!(c, MapCall::FitBounds(_)));

    controller.set_search_term("manaus");

    assert!(controller.visible_records().is_empty());
    assert_eq!(controller.map().marker_count(), 0);
    assert!(controller.map().backend().live.is_empty());
    assert_eq!(
        controller
            .map()
            .backend()
            .count(|c| matches!(c, MapCall::FitBounds(_))),
        fits_before
    );
    assert!(controller.list().is_empty());
}

#[test]
fn test_list_click_centers_and_opens_popup() {
    let mut controller = started(network_store());
    controller.click_list_entry(2);

    let marker = *controller.map().marker_for(LabId(2)).unwrap();
    let calls = &controller.map().backend().calls;
    let tail = &calls[calls.len() - 2..];
    assert_eq!(
        tail,
        &[
            MapCall::SetView(LatLng::new(-8.05, -34.88), 10),
            MapCall::OpenPopup(marker),
        ]
    );
}

#[test]
fn test_resize_invalidates_map() {
    let mut controller = started(network_store());
    controller.resize();
    assert_eq!(
        controller.map().backend().calls.last(),
        Some(&MapCall::InvalidateSize)
    );
}

#[test]
fn test_uninitialized_map_is_skipped() {
    let mut controller = DirectoryController::new(
        network_store(),
        MockList::default(),
        MockMap::default(),
        MapConfig::default(),
    );
    controller.refresh();
    controller.click_list_entry(0);
    controller.resize();

    assert!(controller.map().backend().calls.is_empty());
    assert_eq!(controller.list().len(), 7);
    assert_eq!(controller.selection(), Selection::Selected(LabId(0)));
}

// ----------------------------------------------------------------------------
// Filtering through the controller
// ----------------------------------------------------------------------------

#[test]
fn test_region_and_search_apply_together() {
    let mut controller = started(network_store());
    controller.set_region(RegionFilter::parse("Sudeste"));
    controller.set_search_term("  ITINERANTE ");

    assert_eq!(visible_names(&controller), vec!["Fab Lab Itinerante"]);
    assert_eq!(controller.filter().search_term.as_str(), "itinerante");

    // Changing the region keeps the search term.
    controller.set_region(RegionFilter::All);
    assert_eq!(visible_names(&controller), vec!["Fab Lab Itinerante"]);

    controller.set_search_term("");
    assert_eq!(controller.visible_records().len(), 7);
}

#[test]
fn test_list_renders_in_visible_order() {
    let mut controller = started(network_store());
    controller.set_region(RegionFilter::parse("sul"));
    assert_eq!(
        controller.list().backend().calls.last(),
        Some(&ListCall::Replace(vec![
            "Fab Lab Floripa".to_string(),
            "Fab Lab Poa".to_string(),
        ]))
    );
    assert_eq!(controller.list().entry_at(1), Some(LabId(6)));
    assert_eq!(controller.list().entry_at(2), None);
}

// ----------------------------------------------------------------------------
// Selection
// ----------------------------------------------------------------------------

#[test]
fn test_marker_click_highlights_and_scrolls() {
    let mut controller = started(network_store());
    assert!(controller.click_marker(LabId(3)));

    let list = controller.list().backend();
    assert_eq!(list.highlighted, vec![3]);
    assert_eq!(
        &list.calls[list.calls.len() - 2..],
        &[ListCall::Highlight(3, true), ListCall::Scroll(3)]
    );
    assert_eq!(controller.selected_index(), Some(3));
}

#[test]
fn test_new_selection_clears_previous_highlight() {
    let mut controller = started(network_store());
    controller.click_marker(LabId(0));
    controller.click_list_entry(5);

    let list = controller.list().backend();
    assert_eq!(list.highlighted, vec![5]);
    assert!(list.calls.contains(&ListCall::Highlight(0, false)));
    assert_eq!(controller.selection(), Selection::Selected(LabId(5)));
}

#[test]
fn test_selection_follows_record_across_filter() {
    let mut controller = started(network_store());
    controller.click_marker(LabId(6));
    assert_eq!(controller.selected_index(), Some(6));

    controller.set_region(RegionFilter::parse("sul"));

    assert_eq!(controller.selection(), Selection::Selected(LabId(6)));
    assert_eq!(controller.selected_index(), Some(1));
    assert_eq!(controller.list().backend().highlighted, vec![1]);
}

#[test]
fn test_filtered_out_selection_is_cleared() {
    let mut controller = started(network_store());
    controller.click_marker(LabId(2));

    controller.set_region(RegionFilter::parse("sul"));

    assert_eq!(controller.selection(), Selection::Unselected);
    assert_eq!(controller.selected_index(), None);
    assert!(controller.list().backend().highlighted.is_empty());

    // Bringing the record back does not restore the old selection.
    controller.set_region(RegionFilter::All);
    assert_eq!(controller.selection(), Selection::Unselected);
}

#[test]
fn test_click_on_missing_entry_is_ignored() {
    let mut controller = started(scenario_store());
    assert_eq!(controller.click_list_entry(5), None);
    assert!(!controller.click_marker(LabId(42)));
    assert_eq!(controller.selection(), Selection::Unselected);
}

#[test]
fn test_empty_dataset() {
    let mut controller = started(RecordStore::default());
    controller.set_search_term("lab");
    assert!(controller.visible_records().is_empty());
    assert!(controller.list().is_empty());
    assert_eq!(controller.map().marker_count(), 0);
    assert_eq!(controller.map().fitted_bounds(), None);
}
