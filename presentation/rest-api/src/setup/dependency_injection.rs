use std::sync::Arc;

use logger::TracingLogger;
use persistence::card::repository::CardRepositoryPostgres;
use persistence::pricing::repository::PricingSettingsRepositoryPostgres;

use business::application::card::get_all::GetAllCardsUseCaseImpl;
use business::application::card::get_by_id::GetCardByIdUseCaseImpl;
use business::application::card::search::SearchCardsUseCaseImpl;
use business::application::card::update_price::UpdateCardPriceUseCaseImpl;
use business::application::pricing::apply_rarity_pricing::ApplyRarityPricingUseCaseImpl;
use business::application::pricing::get_settings::GetPricingSettingsUseCaseImpl;
use business::application::pricing::update_settings::UpdatePricingSettingsUseCaseImpl;
use business::domain::pricing::repository::PricingSettingsRepository;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub card_api: crate::api::card::routes::CardApi,
    pub admin_api: crate::api::admin::routes::AdminApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let card_repository = Arc::new(CardRepositoryPostgres::new(pool.clone()));
        let pricing_repository = Arc::new(PricingSettingsRepositoryPostgres::new(pool));

        // Seed the default pricing settings on first startup
        pricing_repository.ensure_defaults().await?;

        // Card use cases
        let get_all_use_case = Arc::new(GetAllCardsUseCaseImpl {
            repository: card_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetCardByIdUseCaseImpl {
            repository: card_repository.clone(),
            logger: logger.clone(),
        });
        let search_use_case = Arc::new(SearchCardsUseCaseImpl {
            repository: card_repository.clone(),
            logger: logger.clone(),
        });
        let update_price_use_case = Arc::new(UpdateCardPriceUseCaseImpl {
            repository: card_repository.clone(),
            logger: logger.clone(),
        });

        // Pricing use cases
        let get_settings_use_case = Arc::new(GetPricingSettingsUseCaseImpl {
            repository: pricing_repository.clone(),
            logger: logger.clone(),
        });
        let update_settings_use_case = Arc::new(UpdatePricingSettingsUseCaseImpl {
            repository: pricing_repository,
            logger: logger.clone(),
        });
        let apply_rarity_pricing_use_case = Arc::new(ApplyRarityPricingUseCaseImpl {
            card_repository,
            logger,
        });

        let card_api = crate::api::card::routes::CardApi::new(
            get_all_use_case,
            get_by_id_use_case,
            search_use_case,
            update_price_use_case,
        );

        let admin_api = crate::api::admin::routes::AdminApi::new(
            get_settings_use_case,
            update_settings_use_case,
            apply_rarity_pricing_use_case,
        );

        Ok(Self {
            health_api,
            card_api,
            admin_api,
        })
    }
}
