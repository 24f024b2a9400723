use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::pricing::use_cases::apply_rarity_pricing::{
    ApplyRarityPricingParams, ApplyRarityPricingUseCase,
};
use business::domain::pricing::use_cases::get_settings::GetPricingSettingsUseCase;
use business::domain::pricing::use_cases::update_settings::{
    UpdatePricingSettingsParams, UpdatePricingSettingsUseCase,
};

use crate::api::admin::dto::{
    ApplyRarityPricingRequest, ApplyRarityPricingResponse, PricingSettingsResponse,
    UpdatePricingSettingsRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct AdminApi {
    get_settings_use_case: Arc<dyn GetPricingSettingsUseCase>,
    update_settings_use_case: Arc<dyn UpdatePricingSettingsUseCase>,
    apply_rarity_pricing_use_case: Arc<dyn ApplyRarityPricingUseCase>,
}

impl AdminApi {
    pub fn new(
        get_settings_use_case: Arc<dyn GetPricingSettingsUseCase>,
        update_settings_use_case: Arc<dyn UpdatePricingSettingsUseCase>,
        apply_rarity_pricing_use_case: Arc<dyn ApplyRarityPricingUseCase>,
    ) -> Self {
        Self {
            get_settings_use_case,
            update_settings_use_case,
            apply_rarity_pricing_use_case,
        }
    }
}

/// Admin pricing console API
///
/// Endpoints for reading and updating the shop-wide pricing settings. The
/// admin area is unprotected by design.
#[OpenApi]
impl AdminApi {
    /// Get pricing settings
    #[oai(path = "/admin/pricing", method = "get", tag = "ApiTags::Admin")]
    async fn get_pricing(&self) -> GetPricingSettingsResponse {
        match self.get_settings_use_case.execute().await {
            Ok(settings) => GetPricingSettingsResponse::Ok(Json(settings.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetPricingSettingsResponse::NotFound(json),
                    _ => GetPricingSettingsResponse::InternalError(json),
                }
            }
        }
    }

    /// Update pricing settings
    ///
    /// Full overwrite of the settings document.
    #[oai(path = "/admin/pricing", method = "put", tag = "ApiTags::Admin")]
    async fn update_pricing(
        &self,
        body: Json<UpdatePricingSettingsRequest>,
    ) -> UpdatePricingSettingsResponse {
        let params = UpdatePricingSettingsParams {
            premium_pack_price: body.0.premium_pack_price,
            shipping_prices: body.0.shipping_prices,
            rarity_prices: body.0.rarity_prices,
        };

        match self.update_settings_use_case.execute(params).await {
            Ok(settings) => UpdatePricingSettingsResponse::Ok(Json(settings.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdatePricingSettingsResponse::BadRequest(json),
                    _ => UpdatePricingSettingsResponse::InternalError(json),
                }
            }
        }
    }

    /// Apply rarity pricing to the catalog
    ///
    /// Bulk-overwrites card prices by matching rarity name.
    #[oai(
        path = "/admin/apply-rarity-pricing",
        method = "post",
        tag = "ApiTags::Admin"
    )]
    async fn apply_rarity_pricing(
        &self,
        body: Json<ApplyRarityPricingRequest>,
    ) -> ApplyRarityPricingApiResponse {
        let params = ApplyRarityPricingParams {
            rarity_prices: body.0.rarity_prices,
        };

        match self.apply_rarity_pricing_use_case.execute(params).await {
            Ok(count) => ApplyRarityPricingApiResponse::Ok(Json(ApplyRarityPricingResponse {
                success: true,
                message: format!("Prices updated for {} cards based on rarity", count),
                updated_count: count,
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ApplyRarityPricingApiResponse::BadRequest(json),
                    _ => ApplyRarityPricingApiResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetPricingSettingsResponse {
    #[oai(status = 200)]
    Ok(Json<PricingSettingsResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdatePricingSettingsResponse {
    #[oai(status = 200)]
    Ok(Json<PricingSettingsResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ApplyRarityPricingApiResponse {
    #[oai(status = 200)]
    Ok(Json<ApplyRarityPricingResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
