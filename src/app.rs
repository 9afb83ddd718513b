//! Application state management for EarthSentinel
//!
//! This module contains the main application state: the selected tab, the
//! region store and the datasets generated for it, per-view interaction
//! state, keyboard handling and the loading timers that gate each view.

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;

use crate::api::{self, ApiSnapshot};
use crate::cli::StartupConfig;
use crate::data::{
    emission_sources, filter_reports, generate_carbon, generate_fire_alerts, generate_forecast,
    generate_map_alerts, generate_weather, high_risk_count, impact,
    mock_reports, regional_fire_risk,
    regions::{region_label, selectable_codes},
    status_counts, total_balance, CarbonRegion, FireAlert, Forecast, RegionCode, RiskLevel,
    StatusCounts, StatusFilter, UserReport, WeatherRecord,
};
use crate::loading::{
    LoadingTask, DASHBOARD_ENTRY, IMPACT_PROGRESS, MAP_LOAD, REGION_SWITCH, SUBMISSION,
};
use crate::projection::MarkerSelection;
use crate::report_form::{
    FixedGeolocator, FormField, Geolocator, ReportDraft, UnavailableGeolocator,
};
use crate::store::{RegionStore, RegionSubscription};

/// Top-level application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Dashboard entry delay
    Loading,
    /// Tabs are interactive
    Dashboard,
}

/// Dashboard tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Weather,
    Forecast,
    Fires,
    Carbon,
    Reports,
    Impact,
    Report,
}

impl View {
    pub const ALL: [View; 7] = [
        View::Weather,
        View::Forecast,
        View::Fires,
        View::Carbon,
        View::Reports,
        View::Impact,
        View::Report,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            View::Weather => "Weather",
            View::Forecast => "Forecast",
            View::Fires => "Fire Alerts",
            View::Carbon => "Carbon",
            View::Reports => "My Reports",
            View::Impact => "My Impact",
            View::Report => "Report Fire",
        }
    }

    /// Parses a view name as used on the command line
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "weather" => Some(View::Weather),
            "forecast" => Some(View::Forecast),
            "fires" | "fire" => Some(View::Fires),
            "carbon" => Some(View::Carbon),
            "reports" => Some(View::Reports),
            "impact" => Some(View::Impact),
            "report" => Some(View::Report),
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// How the fire alerts tab presents its alerts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FireMode {
    /// Regional alerts as a list
    #[default]
    List,
    /// Regional alerts on the map
    Map,
    /// The nationwide 30-alert map
    National,
    /// The nationwide alerts as a list
    NationalList,
}

impl FireMode {
    pub fn next(&self) -> Self {
        match self {
            FireMode::List => FireMode::Map,
            FireMode::Map => FireMode::National,
            FireMode::National => FireMode::NationalList,
            FireMode::NationalList => FireMode::List,
        }
    }

    /// Whether this mode shows the nationwide dataset
    pub fn is_national(&self) -> bool {
        matches!(self, FireMode::National | FireMode::NationalList)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FireMode::List => "List",
            FireMode::Map => "Map",
            FireMode::National => "National map",
            FireMode::NationalList => "National list",
        }
    }
}

/// Sub-tab of the carbon view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarbonTab {
    #[default]
    Regions,
    Sources,
}

/// Where typed characters go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the reports search box
    Search,
    /// Editing the report form
    Form,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A toast shown above the footer until the next key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

/// Minimum-risk filters the fire tab cycles through
const RISK_FILTERS: [Option<RiskLevel>; 4] = [
    None,
    Some(RiskLevel::Medium),
    Some(RiskLevel::High),
    Some(RiskLevel::Extreme),
];

/// Main application struct managing state and data
pub struct App {
    pub state: AppState,
    pub view: View,
    pub should_quit: bool,
    pub show_help: bool,
    pub input_mode: InputMode,
    /// Cursor in the region picker; `Some` while the picker is open
    pub region_picker: Option<usize>,
    pub notification: Option<Notification>,
    pub last_refresh: DateTime<Local>,

    pub weather: Vec<WeatherRecord>,
    pub forecast: Forecast,
    pub fire_alerts: Vec<FireAlert>,
    pub carbon: Vec<CarbonRegion>,

    pub fire_mode: FireMode,
    pub fire_cursor: usize,
    pub min_risk: Option<RiskLevel>,
    pub markers: MarkerSelection,
    /// Nationwide map dataset, generated when the national map opens
    pub map_alerts: Vec<FireAlert>,

    pub carbon_tab: CarbonTab,

    pub reports: Vec<UserReport>,
    pub report_query: String,
    pub report_filter: StatusFilter,
    pub report_cursor: usize,

    pub draft: ReportDraft,
    pub form_field: FormField,
    pending_report: Option<UserReport>,

    store: RegionStore,
    region: RegionSubscription,
    rng: ChaCha8Rng,
    geolocator: Box<dyn Geolocator>,
    api_sync_pending: bool,

    entry_loading: LoadingTask,
    region_loading: LoadingTask,
    map_loading: LoadingTask,
    impact_loading: LoadingTask,
    submission: LoadingTask,
}

impl App {
    /// Creates a new App instance with default state
    pub fn new() -> Self {
        Self::with_startup_config(StartupConfig::default())
    }

    /// Creates a new App instance with the given startup configuration.
    ///
    /// The initial region's datasets are generated immediately; the dashboard
    /// stays in `Loading` until the entry delay elapses and `tick` runs.
    pub fn with_startup_config(config: StartupConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let geolocator: Box<dyn Geolocator> = match config.position {
            Some(coords) => Box::new(FixedGeolocator(coords)),
            None => Box::new(UnavailableGeolocator),
        };
        let store = RegionStore::new(config.region.clone());
        let region = store.subscribe();

        let mut app = Self {
            state: AppState::Loading,
            view: View::Weather,
            should_quit: false,
            show_help: false,
            input_mode: InputMode::Normal,
            region_picker: None,
            notification: None,
            last_refresh: Local::now(),
            weather: Vec::new(),
            forecast: Forecast::default(),
            fire_alerts: Vec::new(),
            carbon: Vec::new(),
            fire_mode: FireMode::List,
            fire_cursor: 0,
            min_risk: None,
            markers: MarkerSelection::default(),
            map_alerts: Vec::new(),
            carbon_tab: CarbonTab::Regions,
            reports: mock_reports(),
            report_query: String::new(),
            report_filter: StatusFilter::All,
            report_cursor: 0,
            draft: ReportDraft::default(),
            form_field: FormField::default(),
            pending_report: None,
            store,
            region,
            rng,
            geolocator,
            api_sync_pending: false,
            entry_loading: LoadingTask::spawn(DASHBOARD_ENTRY),
            region_loading: LoadingTask::finished(),
            map_loading: LoadingTask::finished(),
            impact_loading: LoadingTask::finished(),
            submission: LoadingTask::finished(),
        };
        app.regenerate(&config.region);
        app.set_view(config.view);
        app
    }

    /// The selected region
    pub fn region(&self) -> RegionCode {
        self.store.current()
    }

    pub fn region_label(&self) -> String {
        region_label(&self.store.current())
    }

    pub fn fire_risk(&self) -> RiskLevel {
        regional_fire_risk(&self.store.current())
    }

    /// Selects a region and regenerates every dataset for it
    pub fn select_region(&mut self, code: RegionCode) {
        self.store.set(code);
        self.poll_region();
    }

    /// Advances timers: finishes the entry delay, applies region changes
    /// and completes a pending submission.
    pub fn tick(&mut self) {
        if self.state == AppState::Loading && !self.entry_loading.is_loading() {
            self.state = AppState::Dashboard;
        }
        self.poll_region();
        self.finish_submission();
    }

    /// Whether the current view should show its loading state
    pub fn is_view_loading(&self) -> bool {
        if self.state == AppState::Loading || self.region_loading.is_loading() {
            return true;
        }
        match self.view {
            View::Fires => self.fire_mode.is_national() && self.map_loading.is_loading(),
            _ => false,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.pending_report.is_some()
    }

    /// Contribution level shown by the impact gauge
    pub fn impact_level(&self) -> u8 {
        if self.impact_loading.is_loading() {
            0
        } else {
            impact::CONTRIBUTION_LEVEL
        }
    }

    /// Alerts the fire tab currently shows, after the risk filter
    pub fn visible_fire_alerts(&self) -> Vec<&FireAlert> {
        self.fire_dataset()
            .iter()
            .filter(|alert| self.min_risk.map_or(true, |min| alert.risk >= min))
            .collect()
    }

    /// The unfiltered alert set behind the current fire mode
    pub fn fire_dataset(&self) -> &[FireAlert] {
        if self.fire_mode.is_national() {
            &self.map_alerts
        } else {
            &self.fire_alerts
        }
    }

    pub fn focused_fire_alert(&self) -> Option<&FireAlert> {
        self.visible_fire_alerts().get(self.fire_cursor).copied()
    }

    pub fn filtered_reports(&self) -> Vec<&UserReport> {
        filter_reports(&self.reports, &self.report_query, self.report_filter)
    }

    /// Per-status counts for the current search query
    pub fn report_counts(&self) -> StatusCounts {
        status_counts(&filter_reports(&self.reports, &self.report_query, StatusFilter::All))
    }

    /// Returns true once after every region change, so the caller can ask
    /// the remote endpoints for data
    pub fn take_api_sync(&mut self) -> bool {
        std::mem::take(&mut self.api_sync_pending)
    }

    /// Queries the remote endpoints for the current region
    pub async fn sync_api(&mut self) {
        let snapshot = api::fetch_all(&self.store.current()).await;
        self.apply_api_snapshot(snapshot);
    }

    /// Replaces generated datasets with non-empty remote results
    ///
    /// Failed or empty endpoints leave the generated data in place. Results
    /// for a region that is no longer selected are discarded.
    pub fn apply_api_snapshot(&mut self, snapshot: ApiSnapshot) {
        if snapshot.region != self.store.current() {
            tracing::debug!(region = %snapshot.region, "discarding stale api snapshot");
            return;
        }

        match snapshot.weather {
            Ok(records) if !records.is_empty() => self.weather = records,
            Ok(_) => {}
            Err(err) => tracing::warn!(error = %err, "weather fetch failed, keeping generated data"),
        }
        match snapshot.forecast {
            Ok(days) if !days.is_empty() => self.forecast.days = days,
            Ok(_) => {}
            Err(err) => tracing::warn!(error = %err, "forecast fetch failed, keeping generated data"),
        }
        match snapshot.fires {
            Ok(alerts) if !alerts.is_empty() => {
                self.fire_alerts = alerts;
                self.fire_cursor = 0;
            }
            Ok(_) => {}
            Err(err) => tracing::warn!(error = %err, "fire alert fetch failed, keeping generated data"),
        }
        match snapshot.carbon {
            Ok(regions) if !regions.is_empty() => self.carbon = regions,
            Ok(_) => {}
            Err(err) => tracing::warn!(error = %err, "carbon fetch failed, keeping generated data"),
        }
    }

    /// Serialises the data behind a view, for `--dump`
    pub fn snapshot_json(&self, view: View) -> Result<String, serde_json::Error> {
        let region = self.store.current();
        let value = match view {
            View::Weather => json!({
                "region": region,
                "label": self.region_label(),
                "weather": self.weather,
            }),
            View::Forecast => json!({
                "region": region,
                "forecast": self.forecast,
            }),
            View::Fires => {
                let risk = self.fire_risk();
                json!({
                    "region": region,
                    "fire_risk": risk,
                    "advisory": risk.advisory(),
                    "high_risk_alerts": high_risk_count(&self.fire_alerts),
                    "alerts": self.fire_alerts,
                })
            }
            View::Carbon => json!({
                "region": region,
                "total_balance": total_balance(&self.carbon),
                "regions": self.carbon,
                "sources": emission_sources(),
            }),
            View::Reports => json!({
                "counts": self.report_counts(),
                "reports": self.filtered_reports(),
            }),
            View::Impact => json!({
                "contribution_level": impact::CONTRIBUTION_LEVEL,
                "summary": impact::impact_summary(),
                "months": impact::impact_months(),
                "badges": impact::badges(),
            }),
            View::Report => json!({
                "max_images": crate::report_form::MAX_IMAGES,
                "draft": self.draft,
            }),
        };
        serde_json::to_string_pretty(&value)
    }

    /// Handles keyboard input events
    ///
    /// Global keys (outside text entry):
    /// - `q`: Quit
    /// - `Tab`/`Shift-Tab`, `1`-`7`: Switch tab
    /// - `r`: Open the region picker
    /// - `?`: Toggle help
    ///
    /// Per-tab keys are listed in the help overlay.
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        self.notification = None;

        // Help overlay intercepts all keys when shown
        if self.show_help {
            if matches!(
                key_event.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return;
        }

        if self.state == AppState::Loading {
            if key_event.code == KeyCode::Char('q') {
                self.should_quit = true;
            }
            return;
        }

        if self.region_picker.is_some() {
            self.handle_picker_key(key_event);
            return;
        }

        if self.view == View::Report && key_event.modifiers.contains(KeyModifiers::CONTROL) {
            match key_event.code {
                KeyCode::Char('g') => self.locate(),
                KeyCode::Char('s') => self.submit_report(),
                _ => {}
            }
            return;
        }

        match self.input_mode {
            InputMode::Search => self.handle_search_key(key_event),
            InputMode::Form => self.handle_form_key(key_event),
            InputMode::Normal => self.handle_normal_key(key_event),
        }
    }

    fn handle_normal_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab => self.set_view(self.view.next()),
            KeyCode::BackTab => self.set_view(self.view.previous()),
            KeyCode::Char(c @ '1'..='7') => {
                let index = c as usize - '1' as usize;
                self.set_view(View::ALL[index]);
            }
            KeyCode::Char('r') => self.open_region_picker(),
            _ => match self.view {
                View::Fires => self.handle_fires_key(key_event.code),
                View::Carbon => {
                    if key_event.code == KeyCode::Char('t') {
                        self.carbon_tab = match self.carbon_tab {
                            CarbonTab::Regions => CarbonTab::Sources,
                            CarbonTab::Sources => CarbonTab::Regions,
                        };
                    }
                }
                View::Reports => self.handle_reports_key(key_event.code),
                View::Report => {
                    if matches!(key_event.code, KeyCode::Enter | KeyCode::Char('i')) {
                        self.input_mode = InputMode::Form;
                    }
                }
                View::Weather | View::Forecast | View::Impact => {}
            },
        }
    }

    fn handle_picker_key(&mut self, key_event: KeyEvent) {
        let codes = selectable_codes();
        let Some(cursor) = self.region_picker else {
            return;
        };
        match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => self.region_picker = None,
            KeyCode::Up | KeyCode::Char('k') => {
                self.region_picker = Some(wrap_up(cursor, codes.len()));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.region_picker = Some(wrap_down(cursor, codes.len()));
            }
            KeyCode::Enter => {
                self.region_picker = None;
                if let Some(code) = codes.get(cursor) {
                    self.select_region(code.clone());
                }
            }
            _ => {}
        }
    }

    fn handle_fires_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('m') => self.set_fire_mode(self.fire_mode.next()),
            KeyCode::Char('f') => {
                let i = RISK_FILTERS
                    .iter()
                    .position(|f| *f == self.min_risk)
                    .unwrap_or(0);
                self.min_risk = RISK_FILTERS[(i + 1) % RISK_FILTERS.len()];
                self.fire_cursor = 0;
                self.markers.clear();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.fire_cursor = wrap_up(self.fire_cursor, self.visible_fire_alerts().len());
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.fire_cursor = wrap_down(self.fire_cursor, self.visible_fire_alerts().len());
            }
            KeyCode::Enter => {
                if let Some(id) = self.focused_fire_alert().map(|a| a.id.clone()) {
                    self.markers.toggle(&id);
                }
            }
            KeyCode::Esc => self.markers.clear(),
            _ => {}
        }
    }

    fn handle_reports_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('/') => self.input_mode = InputMode::Search,
            KeyCode::Char('s') => {
                self.report_filter = self.report_filter.next();
                self.report_cursor = 0;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.report_cursor = wrap_up(self.report_cursor, self.filtered_reports().len());
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.report_cursor = wrap_down(self.report_cursor, self.filtered_reports().len());
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Enter => self.input_mode = InputMode::Normal,
            KeyCode::Esc => {
                self.report_query.clear();
                self.input_mode = InputMode::Normal;
            }
            code => edit_text(&mut self.report_query, code),
        }
        self.report_cursor = 0;
    }

    fn handle_form_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Tab | KeyCode::Down => self.form_field = self.form_field.next(),
            KeyCode::BackTab | KeyCode::Up => self.form_field = self.form_field.previous(),
            code => match self.form_field {
                FormField::Location => edit_text(&mut self.draft.location, code),
                FormField::Description => edit_text(&mut self.draft.description, code),
                FormField::Intensity => {
                    if matches!(
                        code,
                        KeyCode::Left | KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ')
                    ) {
                        self.draft.cycle_intensity();
                    }
                }
                FormField::Images => match code {
                    KeyCode::Enter => self.attach_images(),
                    KeyCode::Backspace if self.draft.image_input.is_empty() => {
                        let last = self.draft.images.len().checked_sub(1);
                        if let Some(index) = last {
                            self.draft.remove_image(index);
                        }
                    }
                    code => edit_text(&mut self.draft.image_input, code),
                },
            },
        }
    }

    /// Switches tab, starting the tab's entry animation where it has one
    pub fn set_view(&mut self, view: View) {
        if self.view == view && self.state == AppState::Dashboard {
            return;
        }
        self.view = view;
        self.input_mode = InputMode::Normal;
        if view == View::Impact {
            self.impact_loading = LoadingTask::spawn(IMPACT_PROGRESS);
        }
    }

    /// Switches fire presentation
    ///
    /// Entering the nationwide dataset generates it and starts the map
    /// delay. Moving between the national map and list keeps both.
    pub fn set_fire_mode(&mut self, mode: FireMode) {
        let was_national = self.fire_mode.is_national();
        self.fire_mode = mode;
        self.fire_cursor = 0;
        self.markers.clear();
        if !mode.is_national() {
            self.map_loading = LoadingTask::finished();
        } else if !was_national {
            self.map_alerts = generate_map_alerts(&mut self.rng, Local::now());
            self.map_loading = LoadingTask::spawn(MAP_LOAD);
        }
    }

    fn open_region_picker(&mut self) {
        let current = self.store.current();
        let cursor = selectable_codes()
            .iter()
            .position(|code| *code == current)
            .unwrap_or(0);
        self.region_picker = Some(cursor);
    }

    /// Fills the form location from the configured position source
    pub fn locate(&mut self) {
        match self.draft.locate(self.geolocator.as_ref()) {
            Ok(coords) => {
                self.notify(
                    NotificationLevel::Success,
                    "Location found",
                    format!("Coordinates: {:.6}, {:.6}", coords.lat, coords.lng),
                );
            }
            Err(err) => {
                tracing::warn!(error = %err, "geolocation failed");
                self.notify(NotificationLevel::Error, "Could not get location", err.to_string());
            }
        }
    }

    fn attach_images(&mut self) {
        match self.draft.commit_image_input() {
            Ok(0) => {}
            Ok(added) => tracing::debug!(added, total = self.draft.images.len(), "images attached"),
            Err(err) => self.notify(NotificationLevel::Error, "Image limit exceeded", err.to_string()),
        }
    }

    /// Validates the draft and starts the simulated submission
    pub fn submit_report(&mut self) {
        if self.is_submitting() {
            return;
        }
        let id = format!("REP-{:03}", self.reports.len() + 1);
        match self.draft.to_report(id, Local::now().naive_local()) {
            Ok(report) => {
                tracing::info!(id = %report.id, intensity = report.intensity.label(), "submitting report");
                self.pending_report = Some(report);
                self.submission = LoadingTask::spawn(SUBMISSION);
                self.input_mode = InputMode::Normal;
            }
            Err(err) => self.notify(NotificationLevel::Error, "Report incomplete", err.to_string()),
        }
    }

    fn finish_submission(&mut self) {
        if self.submission.is_loading() {
            return;
        }
        if let Some(report) = self.pending_report.take() {
            tracing::info!(id = %report.id, "report submitted");
            self.reports.insert(0, report);
            self.draft.clear();
            self.form_field = FormField::default();
            self.notify(
                NotificationLevel::Success,
                "Report sent successfully",
                "Thank you for contributing to environmental monitoring.".to_string(),
            );
        }
    }

    fn notify(&mut self, level: NotificationLevel, title: &str, message: String) {
        self.notification = Some(Notification {
            level,
            title: title.to_string(),
            message,
        });
    }

    fn poll_region(&mut self) {
        if let Some(region) = self.region.take_changed() {
            self.regenerate(&region);
            self.region_loading = LoadingTask::spawn(REGION_SWITCH);
        }
    }

    fn regenerate(&mut self, region: &RegionCode) {
        let now = Local::now();
        self.weather = generate_weather(region, &mut self.rng, now);
        self.forecast = generate_forecast(region, &mut self.rng, now);
        self.fire_alerts = generate_fire_alerts(region, &mut self.rng, now);
        self.carbon = generate_carbon(region, &mut self.rng);
        self.fire_cursor = 0;
        self.markers.clear();
        self.last_refresh = now;
        self.api_sync_pending = true;

        tracing::info!(
            %region,
            weather = self.weather.len(),
            alerts = self.fire_alerts.len(),
            carbon = self.carbon.len(),
            "datasets regenerated"
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies a typing key to a text buffer
fn edit_text(buffer: &mut String, code: KeyCode) {
    match code {
        KeyCode::Char(c) => buffer.push(c),
        KeyCode::Backspace => {
            buffer.pop();
        }
        _ => {}
    }
}

/// Moves a cursor up, wrapping to the bottom
fn wrap_up(cursor: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if cursor == 0 {
        len - 1
    } else {
        (cursor - 1).min(len - 1)
    }
}

/// Moves a cursor down, wrapping to the top
fn wrap_down(cursor: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (cursor + 1) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::data::{Coordinates, ReportStatus};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::time::Duration;

    /// Helper to create a KeyEvent for testing
    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key_event(KeyCode::Char(c)));
        }
    }

    fn seeded(region: &str) -> StartupConfig {
        StartupConfig {
            region: RegionCode::new(region),
            seed: Some(7),
            ..Default::default()
        }
    }

    /// App past the dashboard entry delay
    fn ready_app(config: StartupConfig) -> App {
        let mut app = App::with_startup_config(config);
        app.tick();
        app
    }

    // ========================================================================
    // Startup
    // ========================================================================

    #[test]
    fn test_initial_state_is_loading() {
        let app = App::new();
        assert_eq!(app.state, AppState::Loading);
        assert_eq!(app.view, View::Weather);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_tick_finishes_entry_without_runtime() {
        let mut app = App::new();
        app.tick();
        assert_eq!(app.state, AppState::Dashboard);
        assert!(!app.is_view_loading());
    }

    #[test]
    fn test_startup_generates_initial_region_data() {
        let app = App::with_startup_config(seeded("all"));
        assert_eq!(app.weather.len(), 6);
        assert_eq!(app.forecast.days.len(), 5);
        assert_eq!(app.fire_alerts.len(), 8);
        assert_eq!(app.carbon.len(), 5);
        assert_eq!(app.reports.len(), 12);
    }

    #[test]
    fn test_startup_config_applies_region_and_view() {
        let config = StartupConfig {
            view: View::Carbon,
            ..seeded("rs")
        };
        let app = App::with_startup_config(config);
        assert_eq!(app.region(), RegionCode::new("rs"));
        assert_eq!(app.view, View::Carbon);
        assert_eq!(app.carbon[0].region, "Capital (RS)");
    }

    #[test]
    fn test_same_seed_produces_same_data() {
        let a = App::with_startup_config(seeded("mt"));
        let b = App::with_startup_config(seeded("mt"));
        let temps = |app: &App| app.weather.iter().map(|w| w.temperature).collect::<Vec<_>>();
        assert_eq!(temps(&a), temps(&b));
        assert_eq!(a.fire_alerts.len(), b.fire_alerts.len());
    }

    #[test]
    fn test_keys_ignored_during_loading() {
        let mut app = App::new();
        app.handle_key(key_event(KeyCode::Tab));
        assert_eq!(app.view, View::Weather);

        app.handle_key(key_event(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    // ========================================================================
    // Tabs and help
    // ========================================================================

    #[test]
    fn test_tab_cycles_views_and_wraps() {
        let mut app = ready_app(seeded("all"));
        for expected in View::ALL.iter().skip(1) {
            app.handle_key(key_event(KeyCode::Tab));
            assert_eq!(app.view, *expected);
        }
        app.handle_key(key_event(KeyCode::Tab));
        assert_eq!(app.view, View::Weather);
    }

    #[test]
    fn test_backtab_wraps_to_last_view() {
        let mut app = ready_app(seeded("all"));
        app.handle_key(key_event(KeyCode::BackTab));
        assert_eq!(app.view, View::Report);
    }

    #[test]
    fn test_number_keys_select_views() {
        let mut app = ready_app(seeded("all"));
        app.handle_key(key_event(KeyCode::Char('3')));
        assert_eq!(app.view, View::Fires);
        app.handle_key(key_event(KeyCode::Char('7')));
        assert_eq!(app.view, View::Report);
        app.handle_key(key_event(KeyCode::Char('1')));
        assert_eq!(app.view, View::Weather);
    }

    #[test]
    fn test_view_from_str() {
        assert_eq!(View::from_str("Impact"), Some(View::Impact));
        assert_eq!(View::from_str("fire"), Some(View::Fires));
        assert_eq!(View::from_str("map"), None);
    }

    #[test]
    fn test_help_overlay_intercepts_keys() {
        let mut app = ready_app(seeded("all"));
        app.handle_key(key_event(KeyCode::Char('?')));
        assert!(app.show_help);

        app.handle_key(key_event(KeyCode::Tab));
        assert_eq!(app.view, View::Weather);

        app.handle_key(key_event(KeyCode::Esc));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_q_quits() {
        let mut app = ready_app(seeded("all"));
        app.handle_key(key_event(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    // ========================================================================
    // Region picker
    // ========================================================================

    #[test]
    fn test_region_picker_opens_at_current_region() {
        let mut app = ready_app(seeded("all"));
        app.handle_key(key_event(KeyCode::Char('r')));
        assert_eq!(app.region_picker, Some(0));
    }

    #[test]
    fn test_region_picker_selects_region_and_regenerates() {
        let mut app = ready_app(seeded("all"));
        app.handle_key(key_event(KeyCode::Char('r')));
        app.handle_key(key_event(KeyCode::Down));
        app.handle_key(key_event(KeyCode::Enter));

        // First state after "all" is Acre
        assert_eq!(app.region_picker, None);
        assert_eq!(app.region(), RegionCode::new("ac"));
        assert_eq!(app.region_label(), "Acre");
        assert_eq!(app.weather.len(), 3);
        assert!(app.fire_alerts.iter().all(|a| a.region == "AC"));
    }

    #[test]
    fn test_region_picker_wraps_at_top() {
        let mut app = ready_app(seeded("all"));
        app.handle_key(key_event(KeyCode::Char('r')));
        app.handle_key(key_event(KeyCode::Up));
        assert_eq!(app.region_picker, Some(27));
    }

    #[test]
    fn test_region_picker_esc_keeps_region() {
        let mut app = ready_app(seeded("sp"));
        app.handle_key(key_event(KeyCode::Char('r')));
        app.handle_key(key_event(KeyCode::Down));
        app.handle_key(key_event(KeyCode::Esc));
        assert_eq!(app.region(), RegionCode::new("sp"));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_region_change_requests_api_sync_once() {
        let mut app = ready_app(seeded("all"));
        assert!(app.take_api_sync());
        assert!(!app.take_api_sync());

        app.select_region(RegionCode::new("pa"));
        assert!(app.take_api_sync());
    }

    #[test]
    fn test_selecting_current_region_does_not_regenerate() {
        let mut app = ready_app(seeded("go"));
        app.take_api_sync();
        let before: Vec<String> = app.fire_alerts.iter().map(|a| a.location.clone()).collect();

        app.select_region(RegionCode::new("GO"));

        assert!(!app.take_api_sync());
        let after: Vec<String> = app.fire_alerts.iter().map(|a| a.location.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_fire_risk_follows_region() {
        let mut app = ready_app(seeded("all"));
        assert_eq!(app.fire_risk(), RiskLevel::Medium);
        app.select_region(RegionCode::new("mt"));
        assert_eq!(app.fire_risk(), RiskLevel::Extreme);
    }

    #[tokio::test(start_paused = true)]
    async fn test_region_switch_shows_loading_for_800ms() {
        let mut app = App::with_startup_config(seeded("all"));
        assert!(app.is_view_loading());

        tokio::time::sleep(Duration::from_millis(1001)).await;
        app.tick();
        assert_eq!(app.state, AppState::Dashboard);
        assert!(!app.is_view_loading());

        app.select_region(RegionCode::new("ba"));
        assert!(app.is_view_loading());

        tokio::time::sleep(Duration::from_millis(700)).await;
        assert!(app.is_view_loading());

        tokio::time::sleep(Duration::from_millis(101)).await;
        assert!(!app.is_view_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_region_switches_restart_loading() {
        let mut app = App::with_startup_config(seeded("all"));
        tokio::time::sleep(Duration::from_millis(1001)).await;
        app.tick();

        app.select_region(RegionCode::new("ba"));
        tokio::time::sleep(Duration::from_millis(600)).await;
        app.select_region(RegionCode::new("pe"));
        tokio::time::sleep(Duration::from_millis(600)).await;

        assert!(app.is_view_loading(), "first switch's timer cleared the second");
        assert_eq!(app.region(), RegionCode::new("pe"));
    }

    // ========================================================================
    // Fire alerts
    // ========================================================================

    #[test]
    fn test_fire_mode_cycles() {
        let mut app = ready_app(seeded("all"));
        app.set_view(View::Fires);
        app.handle_key(key_event(KeyCode::Char('m')));
        assert_eq!(app.fire_mode, FireMode::Map);
        app.handle_key(key_event(KeyCode::Char('m')));
        assert_eq!(app.fire_mode, FireMode::National);
        app.handle_key(key_event(KeyCode::Char('m')));
        assert_eq!(app.fire_mode, FireMode::NationalList);
        app.handle_key(key_event(KeyCode::Char('m')));
        assert_eq!(app.fire_mode, FireMode::List);
    }

    #[test]
    fn test_national_list_keeps_national_alerts() {
        let mut app = ready_app(seeded("sp"));
        app.set_view(View::Fires);
        app.set_fire_mode(FireMode::National);
        let ids: Vec<String> = app.map_alerts.iter().map(|a| a.id.clone()).collect();

        app.handle_key(key_event(KeyCode::Char('m')));

        assert_eq!(app.fire_mode, FireMode::NationalList);
        let visible: Vec<String> = app.visible_fire_alerts().iter().map(|a| a.id.clone()).collect();
        assert_eq!(visible, ids);
    }

    #[test]
    fn test_national_map_has_thirty_alerts() {
        let mut app = ready_app(seeded("sp"));
        app.set_view(View::Fires);
        app.set_fire_mode(FireMode::National);
        assert_eq!(app.visible_fire_alerts().len(), 30);
    }

    #[test]
    fn test_enter_toggles_focused_marker() {
        let mut app = ready_app(seeded("all"));
        app.set_view(View::Fires);
        app.handle_key(key_event(KeyCode::Char('m')));
        app.handle_key(key_event(KeyCode::Down));

        let id = app.focused_fire_alert().unwrap().id.clone();
        app.handle_key(key_event(KeyCode::Enter));
        assert!(app.markers.is_active(&id));

        app.handle_key(key_event(KeyCode::Enter));
        assert_eq!(app.markers.active(), None);
    }

    #[test]
    fn test_opening_another_marker_replaces_the_first() {
        let mut app = ready_app(seeded("all"));
        app.set_view(View::Fires);
        app.handle_key(key_event(KeyCode::Enter));
        let first = app.markers.active().unwrap().to_string();

        app.handle_key(key_event(KeyCode::Down));
        app.handle_key(key_event(KeyCode::Enter));
        let second = app.markers.active().unwrap().to_string();
        assert_ne!(first, second);
    }

    #[test]
    fn test_fire_cursor_wraps() {
        let mut app = ready_app(seeded("all"));
        app.set_view(View::Fires);
        app.handle_key(key_event(KeyCode::Up));
        assert_eq!(app.fire_cursor, app.visible_fire_alerts().len() - 1);
        app.handle_key(key_event(KeyCode::Down));
        assert_eq!(app.fire_cursor, 0);
    }

    #[test]
    fn test_risk_filter_cycles_and_filters() {
        let mut app = ready_app(seeded("all"));
        app.set_view(View::Fires);
        app.set_fire_mode(FireMode::National);

        app.handle_key(key_event(KeyCode::Char('f')));
        assert_eq!(app.min_risk, Some(RiskLevel::Medium));
        app.handle_key(key_event(KeyCode::Char('f')));
        assert_eq!(app.min_risk, Some(RiskLevel::High));
        assert!(app
            .visible_fire_alerts()
            .iter()
            .all(|a| a.risk >= RiskLevel::High));

        app.handle_key(key_event(KeyCode::Char('f')));
        app.handle_key(key_event(KeyCode::Char('f')));
        assert_eq!(app.min_risk, None);
        assert_eq!(app.visible_fire_alerts().len(), 30);
    }

    #[test]
    fn test_region_change_closes_marker() {
        let mut app = ready_app(seeded("all"));
        app.set_view(View::Fires);
        app.handle_key(key_event(KeyCode::Enter));
        assert!(app.markers.active().is_some());

        app.select_region(RegionCode::new("am"));
        assert_eq!(app.markers.active(), None);
        assert_eq!(app.fire_cursor, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_national_map_loads_for_1500ms() {
        let mut app = App::with_startup_config(seeded("all"));
        tokio::time::sleep(Duration::from_millis(1001)).await;
        app.tick();
        app.set_view(View::Fires);

        app.set_fire_mode(FireMode::National);
        assert!(app.is_view_loading());

        tokio::time::sleep(Duration::from_millis(1501)).await;
        assert!(!app.is_view_loading());
    }

    // ========================================================================
    // Carbon
    // ========================================================================

    #[test]
    fn test_carbon_tab_toggle() {
        let mut app = ready_app(seeded("all"));
        app.set_view(View::Carbon);
        app.handle_key(key_event(KeyCode::Char('t')));
        assert_eq!(app.carbon_tab, CarbonTab::Sources);
        app.handle_key(key_event(KeyCode::Char('t')));
        assert_eq!(app.carbon_tab, CarbonTab::Regions);
    }

    // ========================================================================
    // Reports
    // ========================================================================

    #[test]
    fn test_search_mode_filters_reports() {
        let mut app = ready_app(seeded("all"));
        app.set_view(View::Reports);
        app.handle_key(key_event(KeyCode::Char('/')));
        assert_eq!(app.input_mode, InputMode::Search);

        // 'q' is typed into the search box, not treated as quit
        type_text(&mut app, "tijuca");
        assert!(!app.should_quit);
        app.handle_key(key_event(KeyCode::Enter));

        assert_eq!(app.input_mode, InputMode::Normal);
        let ids: Vec<&str> = app.filtered_reports().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["REP-012"]);
    }

    #[test]
    fn test_search_esc_clears_query() {
        let mut app = ready_app(seeded("all"));
        app.set_view(View::Reports);
        app.handle_key(key_event(KeyCode::Char('/')));
        type_text(&mut app, "xyz");
        app.handle_key(key_event(KeyCode::Esc));

        assert!(app.report_query.is_empty());
        assert_eq!(app.filtered_reports().len(), 12);
    }

    #[test]
    fn test_search_backspace() {
        let mut app = ready_app(seeded("all"));
        app.set_view(View::Reports);
        app.handle_key(key_event(KeyCode::Char('/')));
        type_text(&mut app, "mtx");
        app.handle_key(key_event(KeyCode::Backspace));
        assert_eq!(app.report_query, "mt");
    }

    #[test]
    fn test_status_filter_cycles_with_s() {
        let mut app = ready_app(seeded("all"));
        app.set_view(View::Reports);
        app.handle_key(key_event(KeyCode::Char('s')));
        assert_eq!(app.report_filter, StatusFilter::Only(ReportStatus::Pending));
        assert_eq!(app.filtered_reports().len(), 2);

        app.handle_key(key_event(KeyCode::Char('s')));
        app.handle_key(key_event(KeyCode::Char('s')));
        assert_eq!(app.report_filter, StatusFilter::Only(ReportStatus::Resolved));
        assert_eq!(app.filtered_reports().len(), 6);
    }

    #[test]
    fn test_report_counts_follow_query() {
        let mut app = ready_app(seeded("all"));
        app.report_query = ", BA".to_string();
        let counts = app.report_counts();
        assert_eq!(counts.all, 2);
        assert_eq!(counts.resolved, 1);
        assert_eq!(counts.verified, 1);
    }

    #[test]
    fn test_report_cursor_wraps() {
        let mut app = ready_app(seeded("all"));
        app.set_view(View::Reports);
        app.handle_key(key_event(KeyCode::Up));
        assert_eq!(app.report_cursor, 11);
        app.handle_key(key_event(KeyCode::Down));
        assert_eq!(app.report_cursor, 0);
    }

    // ========================================================================
    // Impact
    // ========================================================================

    #[test]
    fn test_impact_level_without_runtime_is_immediate() {
        let mut app = ready_app(seeded("all"));
        app.set_view(View::Impact);
        assert_eq!(app.impact_level(), 85);
    }

    #[tokio::test(start_paused = true)]
    async fn test_impact_gauge_animates_after_500ms() {
        let mut app = App::with_startup_config(seeded("all"));
        tokio::time::sleep(Duration::from_millis(1001)).await;
        app.tick();

        app.set_view(View::Impact);
        assert_eq!(app.impact_level(), 0);

        tokio::time::sleep(Duration::from_millis(501)).await;
        assert_eq!(app.impact_level(), 85);
    }

    // ========================================================================
    // Report form
    // ========================================================================

    fn form_app(position: Option<Coordinates>) -> App {
        let config = StartupConfig {
            view: View::Report,
            position,
            ..seeded("all")
        };
        let mut app = ready_app(config);
        app.handle_key(key_event(KeyCode::Enter));
        app
    }

    fn fill_form(app: &mut App) {
        type_text(app, "Pantanal, MS");
        app.handle_key(key_event(KeyCode::Tab));
        app.handle_key(key_event(KeyCode::Char(' ')));
        app.handle_key(key_event(KeyCode::Right));
        app.handle_key(key_event(KeyCode::Tab));
        type_text(app, "Smoke column near the river");
    }

    #[test]
    fn test_enter_starts_form_editing() {
        let app = form_app(None);
        assert_eq!(app.input_mode, InputMode::Form);
        assert_eq!(app.form_field, FormField::Location);
    }

    #[test]
    fn test_form_typing_and_intensity() {
        let mut app = form_app(None);
        fill_form(&mut app);

        assert_eq!(app.draft.location, "Pantanal, MS");
        assert_eq!(app.draft.intensity, Some(crate::data::Intensity::Medium));
        assert_eq!(app.draft.description, "Smoke column near the river");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_geolocation_success_fills_location() {
        let mut app = form_app(Some(Coordinates::new(-19.0, -57.6)));
        app.handle_key(ctrl('g'));

        assert_eq!(app.draft.location, "-19.000000, -57.600000");
        let note = app.notification.clone().unwrap();
        assert_eq!(note.level, NotificationLevel::Success);
    }

    #[test]
    fn test_geolocation_failure_shows_error_notification() {
        let mut app = form_app(None);
        app.handle_key(ctrl('g'));

        let note = app.notification.clone().unwrap();
        assert_eq!(note.level, NotificationLevel::Error);
        assert_eq!(note.title, "Could not get location");
        assert!(app.draft.location.is_empty());
    }

    #[test]
    fn test_fourth_image_shows_error() {
        let mut app = form_app(None);
        app.form_field = FormField::Images;
        type_text(&mut app, "a.jpg,b.jpg,c.jpg");
        app.handle_key(key_event(KeyCode::Enter));
        assert_eq!(app.draft.images.len(), 3);

        type_text(&mut app, "d.jpg");
        app.handle_key(key_event(KeyCode::Enter));

        assert_eq!(app.draft.images.len(), 3);
        let note = app.notification.clone().unwrap();
        assert_eq!(note.level, NotificationLevel::Error);
        assert_eq!(note.title, "Image limit exceeded");
    }

    #[test]
    fn test_backspace_on_empty_image_input_removes_last_image() {
        let mut app = form_app(None);
        app.form_field = FormField::Images;
        type_text(&mut app, "a.jpg,b.jpg");
        app.handle_key(key_event(KeyCode::Enter));
        app.handle_key(key_event(KeyCode::Backspace));
        assert_eq!(app.draft.images.len(), 1);
    }

    #[test]
    fn test_incomplete_submit_shows_error() {
        let mut app = form_app(None);
        app.handle_key(ctrl('s'));

        assert!(!app.is_submitting());
        let note = app.notification.clone().unwrap();
        assert_eq!(note.level, NotificationLevel::Error);
        assert!(note.message.contains("location"));
    }

    #[test]
    fn test_submit_appends_pending_report_and_clears_form() {
        let mut app = form_app(None);
        fill_form(&mut app);
        app.handle_key(ctrl('s'));
        assert!(app.is_submitting());
        assert_eq!(app.input_mode, InputMode::Normal);

        app.tick();

        assert!(!app.is_submitting());
        assert_eq!(app.reports.len(), 13);
        assert_eq!(app.reports[0].id, "REP-013");
        assert_eq!(app.reports[0].status, ReportStatus::Pending);
        assert_eq!(app.draft, ReportDraft::default());
        assert_eq!(
            app.notification.as_ref().map(|n| n.title.as_str()),
            Some("Report sent successfully")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_submission_takes_two_seconds() {
        let config = StartupConfig {
            view: View::Report,
            ..seeded("all")
        };
        let mut app = App::with_startup_config(config);
        tokio::time::sleep(Duration::from_millis(1001)).await;
        app.tick();
        app.handle_key(key_event(KeyCode::Enter));
        fill_form(&mut app);
        app.handle_key(ctrl('s'));

        tokio::time::sleep(Duration::from_millis(1900)).await;
        app.tick();
        assert!(app.is_submitting());
        assert_eq!(app.reports.len(), 12);

        tokio::time::sleep(Duration::from_millis(101)).await;
        app.tick();
        assert!(!app.is_submitting());
        assert_eq!(app.reports.len(), 13);
    }

    #[test]
    fn test_esc_leaves_form_editing() {
        let mut app = form_app(None);
        app.handle_key(key_event(KeyCode::Esc));
        assert_eq!(app.input_mode, InputMode::Normal);

        app.handle_key(key_event(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_notification_dismissed_by_next_key() {
        let mut app = form_app(None);
        app.handle_key(ctrl('g'));
        assert!(app.notification.is_some());
        app.handle_key(key_event(KeyCode::Tab));
        assert!(app.notification.is_none());
    }

    // ========================================================================
    // API sync and dump
    // ========================================================================

    #[tokio::test]
    async fn test_sync_api_keeps_generated_data_on_empty_results() {
        let mut app = ready_app(seeded("sp"));
        let before = app.weather.len();
        app.sync_api().await;
        assert_eq!(app.weather.len(), before);
        assert_eq!(app.forecast.days.len(), 5);
    }

    #[test]
    fn test_api_errors_keep_generated_data() {
        let mut app = ready_app(seeded("sp"));
        let snapshot = ApiSnapshot {
            region: RegionCode::new("sp"),
            weather: Err(ApiError::RequestFailed {
                endpoint: "weather",
                message: "timeout".to_string(),
            }),
            forecast: Ok(Vec::new()),
            fires: Ok(Vec::new()),
            carbon: Ok(Vec::new()),
        };
        app.apply_api_snapshot(snapshot);
        assert_eq!(app.weather.len(), 3);
    }

    #[test]
    fn test_non_empty_api_results_replace_generated_data() {
        let mut app = ready_app(seeded("sp"));
        let single = app.carbon[..1].to_vec();
        let snapshot = ApiSnapshot {
            region: RegionCode::new("sp"),
            weather: Ok(Vec::new()),
            forecast: Ok(Vec::new()),
            fires: Ok(Vec::new()),
            carbon: Ok(single),
        };
        app.apply_api_snapshot(snapshot);
        assert_eq!(app.carbon.len(), 1);
    }

    #[test]
    fn test_stale_api_snapshot_is_discarded() {
        let mut app = ready_app(seeded("sp"));
        let single = app.carbon[..1].to_vec();
        app.select_region(RegionCode::new("rj"));
        let snapshot = ApiSnapshot {
            region: RegionCode::new("sp"),
            weather: Ok(Vec::new()),
            forecast: Ok(Vec::new()),
            fires: Ok(Vec::new()),
            carbon: Ok(single),
        };
        app.apply_api_snapshot(snapshot);
        assert_eq!(app.carbon.len(), 3);
    }

    #[test]
    fn test_snapshot_json_is_valid_for_every_view() {
        let app = ready_app(seeded("mg"));
        for view in View::ALL {
            let json = app.snapshot_json(view).unwrap();
            let value: serde_json::Value = serde_json::from_str(&json).unwrap();
            assert!(value.is_object(), "{:?} did not dump an object", view);
        }
    }

    #[test]
    fn test_snapshot_json_fire_fields() {
        let app = ready_app(seeded("mt"));
        let value: serde_json::Value =
            serde_json::from_str(&app.snapshot_json(View::Fires).unwrap()).unwrap();
        assert_eq!(value["region"], "mt");
        assert_eq!(value["fire_risk"], "extreme");
        assert!(value["alerts"].as_array().unwrap().len() >= 2);
    }

    #[test]
    fn test_wrap_helpers_handle_empty_lists() {
        assert_eq!(wrap_up(0, 0), 0);
        assert_eq!(wrap_down(3, 0), 0);
        assert_eq!(wrap_up(5, 3), 2);
    }
}
