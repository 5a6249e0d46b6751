use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::http::StatusCode;
use actix_web::web;
use odk_decks::DeckError;
use odk_decks::Repository;
use odk_dto::*;

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}
pub async fn create(
    repo: web::Data<Repository>,
    query: web::Query<CardsQuery>,
    body: web::Bytes,
) -> impl Responder {
    let body = match body.iter().all(u8::is_ascii_whitespace) {
        true => CreateDeck::default(),
        false => match serde_json::from_slice::<CreateDeck>(&body) {
            Ok(body) => body,
            Err(e) => return malformed(e),
        },
    };
    let names = query.names();
    match repo.create(names.as_slice(), body.shuffled).await {
        Ok(deck) => HttpResponse::Created().json(ApiDeck::from(&deck)),
        Err(e) => reject(e),
    }
}
pub async fn open(repo: web::Data<Repository>, path: web::Path<String>) -> impl Responder {
    match repo.open(&path.into_inner()).await {
        Ok(deck) => HttpResponse::Ok().json(ApiOpenDeck::from(&deck)),
        Err(e) => reject(e),
    }
}
pub async fn shuffle(repo: web::Data<Repository>, path: web::Path<String>) -> impl Responder {
    match repo.shuffle(&path.into_inner()).await {
        Ok(deck) => HttpResponse::Ok().json(ApiDeck::from(&deck)),
        Err(e) => reject(e),
    }
}
pub async fn draw(
    repo: web::Data<Repository>,
    path: web::Path<String>,
    req: web::Json<DrawCards>,
) -> impl Responder {
    match repo.draw(&path.into_inner(), req.count).await {
        Ok(cards) => HttpResponse::Ok().json(ApiDraw::from(cards)),
        Err(e) => reject(e),
    }
}

/// A create body that is present but does not bind.
fn malformed(e: serde_json::Error) -> HttpResponse {
    log::debug!("[server] malformed body: {}", e);
    HttpResponse::BadRequest().json(ApiError {
        kind: "INVALID_REQUEST_BODY".to_string(),
        title: "malformed request body".to_string(),
        detail: e.to_string(),
    })
}

/// Maps a repository refusal onto a status code and an error body.
fn reject(e: DeckError) -> HttpResponse {
    let status = match e {
        DeckError::InvalidCardName(_) => StatusCode::BAD_REQUEST,
        DeckError::InvalidId(_) => StatusCode::BAD_REQUEST,
        DeckError::InvalidCount(_) => StatusCode::BAD_REQUEST,
        DeckError::InsufficientCards { .. } => StatusCode::BAD_REQUEST,
        DeckError::DeckNotFound(_) => StatusCode::NOT_FOUND,
        DeckError::IdGenerationFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    match status.is_server_error() {
        true => log::error!("[server] {}", e),
        false => log::debug!("[server] {}", e),
    }
    HttpResponse::build(status).json(ApiError::from(&e))
}
