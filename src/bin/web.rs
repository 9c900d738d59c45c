//! Single binary web server: dashboard HTML from templates/, static from
//! /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Dataset source: DATA_URL (fetched once at startup, re-fetchable via
//! /api/dataset/reload) or DATA_CSV (local file path).
//! Broadcast snapshot file: BROADCAST_STATE_PATH (default
//! broadcast_state.json).

use actix_files::Files;
use actix_web::{
    get, post, put,
    web::{self, Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use league_broadcast_web::{
    aggregate, match_history, ranking, type_breakdown, with_ranks, BroadcastState, Dataset,
    MatchType, Side, TeamPatch, REGISTRY,
};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::RwLock;

/// Where the CSV dataset comes from.
#[derive(Clone, Debug)]
enum DataSource {
    Url(String),
    File(PathBuf),
}

impl DataSource {
    fn from_env() -> Option<Self> {
        if let Ok(url) = std::env::var("DATA_URL") {
            return Some(DataSource::Url(url));
        }
        std::env::var("DATA_CSV")
            .ok()
            .map(|p| DataSource::File(PathBuf::from(p)))
    }

    fn describe(&self) -> String {
        match self {
            DataSource::Url(u) => u.clone(),
            DataSource::File(p) => p.display().to_string(),
        }
    }
}

/// Dataset slot: present once a load succeeded, plus the last load error so
/// the UI can offer a retry.
struct DatasetEntry {
    dataset: Option<Dataset>,
    last_error: Option<String>,
    source: Option<DataSource>,
}

type DataState = Data<RwLock<DatasetEntry>>;

/// Broadcast state plus its snapshot path (persisted after every mutation).
struct BroadcastEntry {
    state: BroadcastState,
    snapshot_path: PathBuf,
}

type LiveState = Data<RwLock<BroadcastEntry>>;

impl BroadcastEntry {
    /// Write the snapshot; persistence failure is logged, never fails the
    /// operation (the in-memory state already changed atomically).
    fn persist(&self) {
        if let Err(e) = self.state.save(&self.snapshot_path) {
            log::warn!(
                "Could not persist broadcast snapshot to {}: {}",
                self.snapshot_path.display(),
                e
            );
        }
    }
}

fn fetch_dataset(source: &DataSource) -> Result<Dataset, String> {
    match source {
        DataSource::Url(url) => {
            let text = reqwest::blocking::get(url)
                .and_then(|r| r.error_for_status())
                .and_then(|r| r.text())
                .map_err(|e| format!("Fetch failed: {}", e))?;
            Dataset::from_csv_str(&text, url.clone()).map_err(|e| format!("CSV error: {}", e))
        }
        DataSource::File(path) => {
            Dataset::from_path(path).map_err(|e| format!("Read failed: {}", e))
        }
    }
}

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct StatsQuery {
    /// Round filter; absent or "all" means every round.
    round: Option<String>,
    /// Match type filter; absent or "all" means both formats.
    #[serde(rename = "type")]
    match_type: Option<String>,
}

#[derive(Deserialize)]
struct PlayerPath {
    name: String,
}

#[derive(Deserialize)]
struct SidePath {
    side: Side,
}

#[derive(Deserialize)]
struct RosterSlotPath {
    side: Side,
    index: usize,
}

#[derive(Deserialize)]
struct RoundPath {
    round_index: usize,
}

#[derive(Deserialize)]
struct RosterSlotBody {
    name: String,
}

#[derive(Deserialize)]
struct RoundWinnerBody {
    winner: Option<Side>,
}

#[derive(Deserialize)]
struct LiveBody {
    is_live: bool,
}

#[derive(Deserialize)]
struct TitleBody {
    title: String,
}

fn error_json(msg: impl std::fmt::Display) -> serde_json::Value {
    serde_json::json!({ "error": msg.to_string() })
}

/// 503 with the retryable fetch error when no dataset is loaded yet.
fn no_dataset(entry: &DatasetEntry) -> HttpResponse {
    let msg = entry
        .last_error
        .clone()
        .unwrap_or_else(|| "Dataset not loaded".to_string());
    HttpResponse::ServiceUnavailable().json(error_json(msg))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "league-broadcast-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// The full player registry (for filter dropdowns and roster pickers).
#[get("/api/registry")]
async fn api_registry() -> HttpResponse {
    HttpResponse::Ok().json(REGISTRY)
}

/// Ranked per-player aggregates over the filtered dataset. Ranks come from
/// the filtered snapshot; display ordering is the client's business.
#[get("/api/stats")]
async fn api_stats(data: DataState, query: Query<StatsQuery>) -> HttpResponse {
    let g = match data.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let dataset = match &g.dataset {
        Some(d) => d,
        None => return no_dataset(&g),
    };
    let round = query
        .round
        .as_deref()
        .filter(|r| !r.is_empty() && *r != "all")
        .and_then(|r| r.parse().ok());
    let match_type = match query.match_type.as_deref() {
        Some("individual") => Some(MatchType::Individual),
        Some("team") => Some(MatchType::Team),
        _ => None,
    };
    let records = dataset.filtered(round, match_type);
    let players = with_ranks(&aggregate(&records));
    HttpResponse::Ok().json(serde_json::json!({
        "players": players,
        "rounds": dataset.rounds(),
    }))
}

/// Full-dataset ranking, rating-descending.
#[get("/api/ranking")]
async fn api_ranking(data: DataState) -> HttpResponse {
    let g = match data.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match &g.dataset {
        Some(d) => HttpResponse::Ok().json(ranking(&d.records)),
        None => no_dataset(&g),
    }
}

/// One player's match history (rating trajectory) and per-format record.
/// A name with no matches returns empty lists, not an error.
#[get("/api/players/{name}/history")]
async fn api_player_history(data: DataState, path: Path<PlayerPath>) -> HttpResponse {
    let g = match data.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let dataset = match &g.dataset {
        Some(d) => d,
        None => return no_dataset(&g),
    };
    HttpResponse::Ok().json(serde_json::json!({
        "history": match_history(&dataset.records, &path.name),
        "breakdown": type_breakdown(&dataset.records, &path.name),
    }))
}

#[get("/api/dataset/status")]
async fn api_dataset_status(data: DataState) -> HttpResponse {
    let g = match data.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(serde_json::json!({
        "loaded": g.dataset.is_some(),
        "source": g.source.as_ref().map(|s| s.describe()),
        "loaded_at": g.dataset.as_ref().map(|d| d.loaded_at),
        "record_count": g.dataset.as_ref().map(|d| d.records.len()),
        "error": g.last_error,
    }))
}

/// Re-fetch the dataset from the configured source (the retry path for a
/// failed startup fetch).
#[post("/api/dataset/reload")]
async fn api_dataset_reload(data: DataState) -> HttpResponse {
    let source = {
        let g = match data.read() {
            Ok(guard) => guard,
            Err(_) => return HttpResponse::InternalServerError().body("lock error"),
        };
        match &g.source {
            Some(s) => s.clone(),
            None => {
                return HttpResponse::BadRequest()
                    .json(error_json("No dataset source configured (DATA_URL or DATA_CSV)"))
            }
        }
    };
    let fetched = web::block(move || fetch_dataset(&source)).await;
    let mut g = match data.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match fetched {
        Ok(Ok(dataset)) => {
            log::info!(
                "Reloaded dataset from {} ({} records)",
                dataset.source,
                dataset.records.len()
            );
            g.last_error = None;
            g.dataset = Some(dataset);
            HttpResponse::Ok().json(serde_json::json!({
                "loaded": true,
                "record_count": g.dataset.as_ref().map(|d| d.records.len()),
            }))
        }
        Ok(Err(msg)) => {
            g.last_error = Some(msg.clone());
            HttpResponse::BadGateway().json(error_json(msg))
        }
        Err(_) => HttpResponse::InternalServerError().json(error_json("reload task failed")),
    }
}

#[get("/api/broadcast")]
async fn api_get_broadcast(live: LiveState) -> HttpResponse {
    match live.read() {
        Ok(g) => HttpResponse::Ok().json(&g.state),
        Err(_) => HttpResponse::InternalServerError().body("lock error"),
    }
}

#[get("/api/broadcast/current-players")]
async fn api_current_players(live: LiveState) -> HttpResponse {
    match live.read() {
        Ok(g) => HttpResponse::Ok().json(g.state.current_players()),
        Err(_) => HttpResponse::InternalServerError().body("lock error"),
    }
}

/// Shallow-merge team name/roster for one side.
#[put("/api/broadcast/team/{side}")]
async fn api_set_team_info(
    live: LiveState,
    path: Path<SidePath>,
    body: Json<TeamPatch>,
) -> HttpResponse {
    let mut g = match live.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.state.set_team_info(path.side, body.into_inner());
    g.persist();
    HttpResponse::Ok().json(&g.state)
}

/// Set one 0-based roster slot.
#[put("/api/broadcast/team/{side}/roster/{index}")]
async fn api_set_roster_slot(
    live: LiveState,
    path: Path<RosterSlotPath>,
    body: Json<RosterSlotBody>,
) -> HttpResponse {
    let mut g = match live.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.state.set_roster_slot(path.side, path.index, body.into_inner().name) {
        Ok(()) => {
            g.persist();
            HttpResponse::Ok().json(&g.state)
        }
        Err(e) => HttpResponse::BadRequest().json(error_json(e)),
    }
}

/// Upsert or clear (winner: null) the result of a 0-based round index.
#[put("/api/broadcast/rounds/{round_index}")]
async fn api_record_round_winner(
    live: LiveState,
    path: Path<RoundPath>,
    body: Json<RoundWinnerBody>,
) -> HttpResponse {
    let mut g = match live.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.state.record_round_winner(path.round_index, body.winner);
    g.persist();
    HttpResponse::Ok().json(&g.state)
}

#[post("/api/broadcast/reset")]
async fn api_reset_broadcast(live: LiveState) -> HttpResponse {
    let mut g = match live.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.state.reset_all();
    g.persist();
    HttpResponse::Ok().json(&g.state)
}

#[put("/api/broadcast/live")]
async fn api_set_is_live(live: LiveState, body: Json<LiveBody>) -> HttpResponse {
    let mut g = match live.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.state.set_is_live(body.is_live);
    g.persist();
    HttpResponse::Ok().json(&g.state)
}

#[put("/api/broadcast/title")]
async fn api_set_match_title(live: LiveState, body: Json<TitleBody>) -> HttpResponse {
    let mut g = match live.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.state.set_match_title(body.into_inner().title);
    g.persist();
    HttpResponse::Ok().json(&g.state)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);

    let source = DataSource::from_env();
    // Startup fetch runs on a plain thread: reqwest's blocking client must
    // not run on the async runtime.
    let (dataset, last_error) = match &source {
        Some(src) => {
            let src_clone = src.clone();
            let fetched = std::thread::spawn(move || fetch_dataset(&src_clone))
                .join()
                .unwrap_or_else(|_| Err("dataset fetch thread panicked".to_string()));
            match fetched {
                Ok(d) => {
                    log::info!("Loaded {} match records from {}", d.records.len(), d.source);
                    (Some(d), None)
                }
                Err(msg) => {
                    log::warn!("Dataset load failed ({}); retry via /api/dataset/reload", msg);
                    (None, Some(msg))
                }
            }
        }
        None => {
            log::warn!("No DATA_URL or DATA_CSV set; analytics endpoints will return 503");
            (None, None)
        }
    };

    let snapshot_path = PathBuf::from(
        std::env::var("BROADCAST_STATE_PATH").unwrap_or_else(|_| "broadcast_state.json".into()),
    );
    let broadcast = BroadcastState::load_or_default(&snapshot_path);

    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let data_state = Data::new(RwLock::new(DatasetEntry {
        dataset,
        last_error,
        source,
    }));
    let live_state = Data::new(RwLock::new(BroadcastEntry {
        state: broadcast,
        snapshot_path,
    }));

    HttpServer::new(move || {
        App::new()
            .app_data(data_state.clone())
            .app_data(live_state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_registry)
            .service(api_stats)
            .service(api_ranking)
            .service(api_player_history)
            .service(api_dataset_status)
            .service(api_dataset_reload)
            .service(api_get_broadcast)
            .service(api_current_players)
            .service(api_set_team_info)
            .service(api_set_roster_slot)
            .service(api_record_round_winner)
            .service(api_reset_broadcast)
            .service(api_set_is_live)
            .service(api_set_match_title)
            .service(Files::new("/static", "static").show_files_listing())
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
