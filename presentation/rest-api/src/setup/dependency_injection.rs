use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::list::ListProductsUseCaseImpl;
use business::application::product::remove::RemoveProductUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapter: the catalog holds the repository by
        // reference instead of inheriting the store client's interface.
        let repository = Arc::new(ProductRepositoryPostgres::new(pool));

        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let list_use_case = Arc::new(ListProductsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let remove_use_case = Arc::new(RemoveProductUseCaseImpl {
            repository,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            create_use_case,
            list_use_case,
            get_by_id_use_case,
            update_use_case,
            remove_use_case,
        );

        Self {
            health_api,
            product_api,
        }
    }
}
