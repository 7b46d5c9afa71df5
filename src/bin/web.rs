//! JSON server over a match record file: stats, matchups, and windowed record rows.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Records come from RECORDS_CSV (default data/matches.csv) and are re-read when the file changes.
//! DECK_TEMPLATES may point at a JSON list of {name, theme} used to colour deck chips.

use actix_web::{
    get, post,
    web::{Data, Query},
    App, HttpResponse, HttpServer, Responder,
};
use duel_log_stats::{
    compute_matchups, compute_snapshot, filter_records, materialize, mode_colors, rank_colors,
    seasons, win_rate_class, CsvRecordSource, DeckPalette, DeckStatRow, DeckTemplate, MatchQuery,
    MatchRecord, MatchupRow, Mode, RecordSource, Scheme, SortKey, StatsError, StatsSnapshot,
    ThemeColors, VirtualRow, WindowState, DEFAULT_OVERSCAN, DEFAULT_ROW_HEIGHT,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::RwLock;
use std::time::{Duration, SystemTime};

/// Current record set plus the file timestamp it was read at (for change detection).
struct RecordEntry {
    records: Vec<MatchRecord>,
    modified: Option<SystemTime>,
}

/// Shared state: the record set is replaced wholesale on every reload, never patched.
type AppState = Data<RwLock<RecordEntry>>;

struct Server {
    source: CsvRecordSource,
    palette: DeckPalette,
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Query scope shared by every read endpoint.
#[derive(Deserialize)]
struct ScopeParams {
    season: Option<String>,
    mode: Option<String>,
}

impl ScopeParams {
    fn to_query(&self) -> Result<MatchQuery, StatsError> {
        let mode = match self.mode.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(m) => Some(Mode::parse(m).ok_or_else(|| StatsError::UnknownMode(m.to_string()))?),
        };
        Ok(MatchQuery {
            season_code: self.season.clone().filter(|s| !s.trim().is_empty()),
            mode,
        })
    }
}

#[derive(Deserialize)]
struct SortParams {
    sort: Option<String>,
}

impl SortParams {
    fn key(&self) -> Result<SortKey, StatsError> {
        match self.sort.as_deref() {
            None | Some("") => Ok(SortKey::default()),
            Some(s) => SortKey::parse(s).ok_or_else(|| StatsError::UnknownSortKey(s.to_string())),
        }
    }
}

#[derive(Deserialize)]
struct DeckParams {
    deck: Option<String>,
}

impl DeckParams {
    /// Selected own deck; a blank `deck=` means nothing is selected.
    fn selected(&self) -> Option<&str> {
        self.deck.as_deref().map(str::trim).filter(|d| !d.is_empty())
    }
}

#[derive(Deserialize)]
struct WindowParams {
    /// "records" (default) or "matchups" (needs `deck`).
    table: Option<String>,
    scroll_offset: Option<f64>,
    viewport: Option<f64>,
    item_size: Option<f64>,
    overscan: Option<usize>,
    #[serde(default)]
    scheme: Scheme,
}

/// Deck row with the colour classes for its three win rates.
#[derive(Serialize)]
struct DeckRowView<'a> {
    #[serde(flatten)]
    row: &'a DeckStatRow,
    win_rate_class: &'static str,
    first_win_rate_class: &'static str,
    second_win_rate_class: &'static str,
}

impl<'a> From<&'a DeckStatRow> for DeckRowView<'a> {
    fn from(row: &'a DeckStatRow) -> Self {
        Self {
            row,
            win_rate_class: win_rate_class(row.win_rate),
            first_win_rate_class: win_rate_class(row.first_win_rate),
            second_win_rate_class: win_rate_class(row.second_win_rate),
        }
    }
}

#[derive(Serialize)]
struct MatchupRowView<'a> {
    #[serde(flatten)]
    row: &'a MatchupRow,
    win_rate_class: &'static str,
}

impl<'a> From<&'a MatchupRow> for MatchupRowView<'a> {
    fn from(row: &'a MatchupRow) -> Self {
        Self {
            row,
            win_rate_class: win_rate_class(row.win_rate),
        }
    }
}

/// Snapshot totals plus the capped deck table.
#[derive(Serialize)]
struct StatsResponse<'a> {
    total: u32,
    wins: u32,
    losses: u32,
    win_rate: f64,
    win_rate_class: &'static str,
    first_count: u32,
    second_count: u32,
    first_wins: u32,
    second_wins: u32,
    first_rate: f64,
    first_win_rate: f64,
    second_win_rate: f64,
    deck_sort: SortKey,
    /// Number of decks before the display cap.
    deck_count: usize,
    my_decks: Vec<DeckRowView<'a>>,
}

impl<'a> From<&'a StatsSnapshot> for StatsResponse<'a> {
    fn from(s: &'a StatsSnapshot) -> Self {
        Self {
            total: s.total,
            wins: s.wins,
            losses: s.losses,
            win_rate: s.win_rate,
            win_rate_class: win_rate_class(s.win_rate),
            first_count: s.first_count,
            second_count: s.second_count,
            first_wins: s.first_wins,
            second_wins: s.second_wins,
            first_rate: s.first_rate,
            first_win_rate: s.first_win_rate,
            second_win_rate: s.second_win_rate,
            deck_sort: s.deck_sort,
            deck_count: s.my_decks.len(),
            my_decks: s.top_decks().iter().map(DeckRowView::from).collect(),
        }
    }
}

/// A materialized matchup row.
#[derive(Serialize)]
struct MatchupWindowRow<'a> {
    #[serde(flatten)]
    row: VirtualRow,
    matchup: MatchupRowView<'a>,
}

/// A materialized record row with the colour classes the table draws it with.
#[derive(Serialize)]
struct RecordRowView<'a> {
    #[serde(flatten)]
    row: VirtualRow,
    record: &'a MatchRecord,
    rank_class: &'static str,
    mode_class: &'static str,
    my_deck_colors: ThemeColors,
    opp_deck_colors: ThemeColors,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_records_csv() -> PathBuf {
    PathBuf::from("data/matches.csv")
}

fn default_reload_secs() -> u64 {
    30
}

fn default_viewport() -> f64 {
    600.0
}

fn bad_request(e: StatsError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

/// Records in scope, newest first (ties broken by id so the order is stable).
fn scoped_records(state: &AppState, query: &MatchQuery) -> Option<Vec<MatchRecord>> {
    let g = state.read().ok()?;
    let mut records = filter_records(&g.records, query);
    records.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));
    Some(records)
}

fn load_deck_palette(path: Option<PathBuf>) -> DeckPalette {
    let Some(path) = path else {
        return DeckPalette::default();
    };
    let templates: Result<Vec<DeckTemplate>, String> = std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|s| serde_json::from_str(&s).map_err(|e| e.to_string()));
    match templates {
        Ok(templates) => {
            log::info!("Loaded {} deck templates from {}", templates.len(), path.display());
            DeckPalette::from_templates(&templates)
        }
        Err(e) => {
            log::warn!("Ignoring deck templates at {}: {}", path.display(), e);
            DeckPalette::default()
        }
    }
}

/// Re-read the source and swap the record set in. A failed read keeps the previous set.
async fn reload(state: &AppState, server: &Data<Server>) -> Result<usize, StatsError> {
    let source = server.source.clone();
    let modified = tokio::fs::metadata(source.path())
        .await
        .and_then(|m| m.modified())
        .ok();
    let records = tokio::task::spawn_blocking(move || source.fetch_all())
        .await
        .map_err(|e| StatsError::Io(e.to_string()))??;
    let count = records.len();
    let mut g = state
        .write()
        .map_err(|_| StatsError::Io("lock error".to_string()))?;
    *g = RecordEntry { records, modified };
    Ok(count)
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "duel-log-stats",
    })
}

/// Avoid 404 in browser tab.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Season codes present in the record set.
#[get("/api/seasons")]
async fn api_seasons(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    HttpResponse::Ok().json(seasons(&g.records))
}

/// Overall totals and the top deck rows for the scope.
#[get("/api/stats")]
async fn api_stats(state: AppState, scope: Query<ScopeParams>, sort: Query<SortParams>) -> HttpResponse {
    let (query, key) = match (scope.to_query(), sort.key()) {
        (Ok(q), Ok(k)) => (q, k),
        (Err(e), _) | (_, Err(e)) => return bad_request(e),
    };
    let records = match scoped_records(&state, &query) {
        Some(r) => r,
        None => return lock_error(),
    };
    let snapshot = compute_snapshot(&records, key);
    HttpResponse::Ok().json(StatsResponse::from(&snapshot))
}

/// Opponent breakdown for one own deck. No deck selected gives an empty list.
#[get("/api/matchups")]
async fn api_matchups(
    state: AppState,
    scope: Query<ScopeParams>,
    sort: Query<SortParams>,
    deck: Query<DeckParams>,
) -> HttpResponse {
    let (query, key) = match (scope.to_query(), sort.key()) {
        (Ok(q), Ok(k)) => (q, k),
        (Err(e), _) | (_, Err(e)) => return bad_request(e),
    };
    let records = match scoped_records(&state, &query) {
        Some(r) => r,
        None => return lock_error(),
    };
    let matchups = compute_matchups(&records, deck.selected(), key);
    let rows: Vec<MatchupRowView> = matchups.iter().map(MatchupRowView::from).collect();
    HttpResponse::Ok().json(rows)
}

/// Rows of the record (or matchup) table to materialize for a scroll position.
#[get("/api/records/window")]
async fn api_records_window(
    state: AppState,
    server: Data<Server>,
    scope: Query<ScopeParams>,
    sort: Query<SortParams>,
    deck: Query<DeckParams>,
    params: Query<WindowParams>,
) -> HttpResponse {
    let (query, key) = match (scope.to_query(), sort.key()) {
        (Ok(q), Ok(k)) => (q, k),
        (Err(e), _) | (_, Err(e)) => return bad_request(e),
    };
    let window = match WindowState::new(
        params.item_size.unwrap_or(DEFAULT_ROW_HEIGHT),
        params.viewport.unwrap_or_else(default_viewport),
    ) {
        Ok(w) => w.with_overscan(params.overscan.unwrap_or(DEFAULT_OVERSCAN)),
        Err(e) => return bad_request(e),
    };
    let records = match scoped_records(&state, &query) {
        Some(r) => r,
        None => return lock_error(),
    };

    match params.table.as_deref().unwrap_or("records") {
        "records" => {
            let mut window = window.with_item_count(records.len());
            window.set_scroll_offset(params.scroll_offset.unwrap_or(0.0));
            let range = window.range();
            let scheme = params.scheme;
            let rows: Vec<RecordRowView> = materialize(&records, &range)
                .map(|(row, record)| RecordRowView {
                    row,
                    record,
                    rank_class: rank_colors(&record.rank, scheme),
                    mode_class: mode_colors(record.mode, scheme),
                    my_deck_colors: server.palette.colors(&record.my_deck.main),
                    opp_deck_colors: server.palette.colors(&record.opp_deck.main),
                })
                .collect();
            HttpResponse::Ok().json(serde_json::json!({ "range": range, "rows": rows }))
        }
        "matchups" => {
            let matchups = compute_matchups(&records, deck.selected(), key);
            let mut window = window.with_item_count(matchups.len());
            window.set_scroll_offset(params.scroll_offset.unwrap_or(0.0));
            let range = window.range();
            let rows: Vec<MatchupWindowRow> = materialize(&matchups, &range)
                .map(|(row, matchup)| MatchupWindowRow {
                    row,
                    matchup: matchup.into(),
                })
                .collect();
            HttpResponse::Ok().json(serde_json::json!({ "range": range, "rows": rows }))
        }
        other => HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": format!("Unknown table '{}'", other) })),
    }
}

/// Re-read the record source now.
#[post("/api/records/reload")]
async fn api_reload(state: AppState, server: Data<Server>) -> HttpResponse {
    match reload(&state, &server).await {
        Ok(count) => HttpResponse::Ok().json(serde_json::json!({ "records": count })),
        Err(e) => HttpResponse::BadGateway().json(serde_json::json!({ "error": e.to_string() })),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let records_csv = std::env::var("RECORDS_CSV")
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_records_csv());
    let reload_secs: u64 = std::env::var("RELOAD_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|&s| s > 0)
        .unwrap_or_else(default_reload_secs);
    let palette = load_deck_palette(std::env::var("DECK_TEMPLATES").ok().map(PathBuf::from));

    let state = Data::new(RwLock::new(RecordEntry {
        records: Vec::new(),
        modified: None,
    }));
    let server = Data::new(Server {
        source: CsvRecordSource::new(records_csv),
        palette,
    });
    if let Err(e) = reload(&state, &server).await {
        log::warn!("Starting with no records: {}", e);
    }

    // Background task: re-read the record file whenever its modification time moves.
    let state_reload = state.clone();
    let server_reload = server.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(reload_secs));
        loop {
            interval.tick().await;
            let current = tokio::fs::metadata(server_reload.source.path())
                .await
                .and_then(|m| m.modified())
                .ok();
            let seen = match state_reload.read() {
                Ok(g) => g.modified,
                Err(_) => continue,
            };
            if current.is_none() || current == seen {
                continue;
            }
            match reload(&state_reload, &server_reload).await {
                Ok(count) => log::info!("Record file changed; reloaded {} records", count),
                Err(e) => log::warn!("Reload failed, keeping previous records: {}", e),
            }
        }
    });

    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(server.clone())
            .service(api_health)
            .service(api_seasons)
            .service(api_stats)
            .service(api_matchups)
            .service(api_records_window)
            .service(api_reload)
            .service(favicon)
    })
    .bind(bind)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use duel_log_stats::{Deck, MatchResult, PlayOrder};

    fn record(my: &str, opp: &str, result: MatchResult) -> MatchRecord {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        MatchRecord::new(date, Deck::main_only(my), Deck::main_only(opp), PlayOrder::First, result)
    }

    fn deck_params(deck: Option<&str>) -> DeckParams {
        DeckParams {
            deck: deck.map(str::to_string),
        }
    }

    #[test]
    fn blank_deck_param_selects_nothing() {
        assert_eq!(deck_params(None).selected(), None);
        assert_eq!(deck_params(Some("")).selected(), None);
        assert_eq!(deck_params(Some("   ")).selected(), None);
        assert_eq!(deck_params(Some(" A ")).selected(), Some("A"));

        // A record with a blank own deck must not leak into the breakdown.
        let records = vec![
            record("", "X", MatchResult::Win),
            record("A", "Y", MatchResult::Win),
        ];
        let params = deck_params(Some(""));
        assert!(compute_matchups(&records, params.selected(), SortKey::Games).is_empty());
        let params = deck_params(Some("A"));
        let rows = compute_matchups(&records, params.selected(), SortKey::Games);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Y");
    }

    #[test]
    fn stats_response_colours_win_rates_and_caps_decks() {
        let mut records: Vec<MatchRecord> = (0..35)
            .map(|i| record(&format!("D{:02}", i), "X", MatchResult::Loss))
            .collect();
        records.push(record("D00", "X", MatchResult::Win));
        records.push(record("D00", "X", MatchResult::Win));
        let snapshot = compute_snapshot(&records, SortKey::Games);

        let json = serde_json::to_value(StatsResponse::from(&snapshot)).unwrap();
        assert_eq!(json["total"], 37);
        assert_eq!(json["win_rate_class"], "text-red-500");
        assert_eq!(json["deck_count"], 35);
        let decks = json["my_decks"].as_array().unwrap();
        assert_eq!(decks.len(), 30);
        // D00: 2 wins of 3, all played first
        assert_eq!(decks[0]["name"], "D00");
        assert_eq!(decks[0]["games"], 3);
        assert_eq!(decks[0]["win_rate_class"], "text-green-500");
        assert_eq!(decks[0]["first_win_rate_class"], "text-green-500");
        assert_eq!(decks[0]["second_win_rate_class"], "text-red-500");
        assert_eq!(decks[1]["win_rate_class"], "text-red-500");
    }

    #[test]
    fn matchup_rows_carry_win_rate_class() {
        let records = vec![
            record("A", "X", MatchResult::Win),
            record("A", "Y", MatchResult::Loss),
        ];
        let matchups = compute_matchups(&records, Some("A"), SortKey::WinRate);
        let json = serde_json::to_value(
            matchups.iter().map(MatchupRowView::from).collect::<Vec<_>>(),
        )
        .unwrap();
        assert_eq!(json[0]["name"], "X");
        assert_eq!(json[0]["win_rate_class"], "text-green-500");
        assert_eq!(json[1]["name"], "Y");
        assert_eq!(json[1]["win_rate_class"], "text-red-500");
    }
}
