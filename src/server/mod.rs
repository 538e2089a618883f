use std::sync::Arc;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::config::Config;
use crate::data::aggregate::value_counts;
use crate::data::citations::extract_citations;
use crate::data::filter::matching_rows;
use crate::data::model::{self, Corpus};

// ---------------------------------------------------------------------------
// Shared state and request-time errors
// ---------------------------------------------------------------------------

/// Handle on the corpus shared by every worker. `None` only when serving
/// started without a successful load, which `main` never does.
pub struct ApiState {
    pub corpus: Option<Arc<Corpus>>,
}

/// Request-time failures, mapped onto `{"detail": …}` JSON bodies the way
/// the clients of this API expect them.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Aucune donnée chargée.")]
    NoData,
    #[error("{0}")]
    NotFound(String),
}

impl QueryError {
    fn to_response(&self) -> HttpResponse {
        let body = json!({ "detail": self.to_string() });
        match self {
            QueryError::NoData => HttpResponse::BadRequest().json(body),
            QueryError::NotFound(_) => HttpResponse::NotFound().json(body),
        }
    }
}

// ---------------------------------------------------------------------------
// Response records
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct PartieCount {
    pub partie: String,
    pub size: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SousPartieCount {
    pub sous_partie: String,
    pub size: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SujetList {
    pub sujets: Vec<String>,
}

// ---------------------------------------------------------------------------
// Routes
// ---------------------------------------------------------------------------

#[get("/parties")]
async fn parties(data: web::Data<ApiState>) -> impl Responder {
    let Some(corpus) = data.corpus.as_deref() else {
        return QueryError::NoData.to_response();
    };

    let records: Vec<PartieCount> = value_counts(corpus, &corpus.all_rows(), model::PARTIE)
        .into_iter()
        .map(|c| PartieCount {
            partie: c.value,
            size: c.count,
        })
        .collect();
    HttpResponse::Ok().json(records)
}

#[get("/parties/{partie}/sous-parties")]
async fn sous_parties(data: web::Data<ApiState>, path: web::Path<String>) -> impl Responder {
    let partie = path.into_inner();
    let not_found = || QueryError::NotFound(format!("Aucune sous-partie pour {partie}"));

    // A missing corpus behaves like an empty subset: this route answers 404
    // either way.
    let Some(corpus) = data.corpus.as_deref() else {
        return not_found().to_response();
    };

    let subset = matching_rows(corpus, &[(model::PARTIE, &partie)]);
    if subset.is_empty() {
        return not_found().to_response();
    }

    let records: Vec<SousPartieCount> = value_counts(corpus, &subset, model::SOUS_PARTIE)
        .into_iter()
        .map(|c| SousPartieCount {
            sous_partie: c.value,
            size: c.count,
        })
        .collect();
    HttpResponse::Ok().json(records)
}

#[get("/parties/{partie}/{sous_partie}/sujets")]
async fn sujets(data: web::Data<ApiState>, path: web::Path<(String, String)>) -> impl Responder {
    let (partie, sous_partie) = path.into_inner();
    let not_found = || QueryError::NotFound("Aucun sujet trouvé.".to_string());

    let Some(corpus) = data.corpus.as_deref() else {
        return not_found().to_response();
    };

    let subset = matching_rows(
        corpus,
        &[(model::PARTIE, &partie), (model::SOUS_PARTIE, &sous_partie)],
    );
    if subset.is_empty() {
        return not_found().to_response();
    }

    // Distinct sujets by descending frequency; the counts themselves are
    // not part of the response shape.
    let sujets = value_counts(corpus, &subset, model::SUJET)
        .into_iter()
        .map(|c| c.value)
        .collect();
    HttpResponse::Ok().json(SujetList { sujets })
}

#[get("/parties/{partie}/{sous_partie}/{sujet}/citations")]
async fn citations(
    data: web::Data<ApiState>,
    path: web::Path<(String, String, String)>,
) -> impl Responder {
    let (partie, sous_partie, sujet) = path.into_inner();
    let not_found = || QueryError::NotFound("Aucune citation trouvée.".to_string());

    let Some(corpus) = data.corpus.as_deref() else {
        return not_found().to_response();
    };

    let subset = matching_rows(
        corpus,
        &[
            (model::PARTIE, &partie),
            (model::SOUS_PARTIE, &sous_partie),
            (model::SUJET, &sujet),
        ],
    );
    if subset.is_empty() {
        return not_found().to_response();
    }

    // Matching rows whose citation cells are all blank are a legitimate
    // empty list, not a 404.
    HttpResponse::Ok().json(extract_citations(corpus, &subset))
}

// ---------------------------------------------------------------------------
// Server construction
// ---------------------------------------------------------------------------

/// Build and bind the HTTP server. CORS is fully permissive: the API is an
/// open read-only endpoint.
pub fn start_server(corpus: Option<Arc<Corpus>>, config: &Config) -> std::io::Result<Server> {
    let state = web::Data::new(ApiState { corpus });

    let server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .service(parties)
            .service(sous_parties)
            .service(sujets)
            .service(citations)
    })
    .bind((config.host.as_str(), config.port))?
    .run();

    Ok(server)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
