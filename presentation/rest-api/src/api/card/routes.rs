use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, param::Query, payload::Json};
use uuid::Uuid;

use business::domain::card::use_cases::get_all::GetAllCardsUseCase;
use business::domain::card::use_cases::get_by_id::{GetCardByIdParams, GetCardByIdUseCase};
use business::domain::card::use_cases::search::{SearchCardsParams, SearchCardsUseCase};
use business::domain::card::use_cases::update_price::{
    UpdateCardPriceParams, UpdateCardPriceUseCase,
};

use crate::api::card::dto::{CardResponse, UpdateCardPriceRequest, UpdateCardPriceResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CardApi {
    get_all_use_case: Arc<dyn GetAllCardsUseCase>,
    get_by_id_use_case: Arc<dyn GetCardByIdUseCase>,
    search_use_case: Arc<dyn SearchCardsUseCase>,
    update_price_use_case: Arc<dyn UpdateCardPriceUseCase>,
}

impl CardApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllCardsUseCase>,
        get_by_id_use_case: Arc<dyn GetCardByIdUseCase>,
        search_use_case: Arc<dyn SearchCardsUseCase>,
        update_price_use_case: Arc<dyn UpdateCardPriceUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            search_use_case,
            update_price_use_case,
        }
    }
}

/// Card catalog API
///
/// Endpoints for browsing the catalog and managing card prices.
#[OpenApi]
impl CardApi {
    /// List all cards
    #[oai(path = "/cards", method = "get", tag = "ApiTags::Cards")]
    async fn get_all(&self) -> GetAllCardsResponse {
        match self.get_all_use_case.execute().await {
            Ok(cards) => {
                let responses: Vec<CardResponse> = cards.into_iter().map(|c| c.into()).collect();
                GetAllCardsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllCardsResponse::InternalError(json)
            }
        }
    }

    /// Search cards
    ///
    /// Case-insensitive substring match over card name, set number and
    /// rarity. An empty query returns an empty array.
    #[oai(path = "/cards/search", method = "get", tag = "ApiTags::Cards")]
    async fn search(&self, q: Query<Option<String>>) -> SearchCardsResponse {
        let params = SearchCardsParams {
            query: q.0.unwrap_or_default(),
        };

        match self.search_use_case.execute(params).await {
            Ok(cards) => {
                let responses: Vec<CardResponse> = cards.into_iter().map(|c| c.into()).collect();
                SearchCardsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                SearchCardsResponse::InternalError(json)
            }
        }
    }

    /// Get a card by id
    #[oai(path = "/cards/:id", method = "get", tag = "ApiTags::Cards")]
    async fn get_by_id(&self, id: Path<String>) -> GetCardResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetCardResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "card.invalid_id".to_string(),
                }));
            }
        };

        match self
            .get_by_id_use_case
            .execute(GetCardByIdParams { id: uuid })
            .await
        {
            Ok(card) => GetCardResponse::Ok(Json(card.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetCardResponse::NotFound(json),
                    _ => GetCardResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a card's price
    ///
    /// Overwrites the shop price of a single card.
    #[oai(path = "/cards/:id/price", method = "put", tag = "ApiTags::Cards")]
    async fn update_price(
        &self,
        id: Path<String>,
        body: Json<UpdateCardPriceRequest>,
    ) -> UpdateCardPriceApiResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateCardPriceApiResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "card.invalid_id".to_string(),
                }));
            }
        };

        let params = UpdateCardPriceParams {
            id: uuid,
            price: body.0.price,
        };

        match self.update_price_use_case.execute(params).await {
            Ok(()) => UpdateCardPriceApiResponse::Ok(Json(UpdateCardPriceResponse {
                success: true,
                message: "Card price updated successfully".to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateCardPriceApiResponse::BadRequest(json),
                    404 => UpdateCardPriceApiResponse::NotFound(json),
                    _ => UpdateCardPriceApiResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllCardsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CardResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SearchCardsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CardResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCardResponse {
    #[oai(status = 200)]
    Ok(Json<CardResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCardPriceApiResponse {
    #[oai(status = 200)]
    Ok(Json<UpdateCardPriceResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
