use std::sync::Arc;

use logger::TracingLogger;
use persistence::storage::open_cart_repository;

use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::change_count::ChangeCartItemCountUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::init::InitCartUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::reset::ResetCartUseCaseImpl;
use business::application::cart::session::CartSession;
use business::domain::cart::use_cases::add_item::AddCartItemUseCase;
use business::domain::cart::use_cases::change_count::ChangeCartItemCountUseCase;
use business::domain::cart::use_cases::get::GetCartUseCase;
use business::domain::cart::use_cases::init::InitCartUseCase;
use business::domain::cart::use_cases::remove_item::RemoveCartItemUseCase;
use business::domain::cart::use_cases::reset::ResetCartUseCase;

use crate::config::app_config::AppConfig;

/// Cart use cases sharing one session and one storage backend.
pub struct DependencyContainer {
    pub init_cart: Arc<dyn InitCartUseCase>,
    pub reset_cart: Arc<dyn ResetCartUseCase>,
    pub add_cart_item: Arc<dyn AddCartItemUseCase>,
    pub remove_cart_item: Arc<dyn RemoveCartItemUseCase>,
    pub change_cart_item_count: Arc<dyn ChangeCartItemCountUseCase>,
    pub get_cart: Arc<dyn GetCartUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let repository = open_cart_repository(&config.storage)?;
        let session = Arc::new(CartSession::new());

        // Cart use cases
        let init_cart = Arc::new(InitCartUseCaseImpl {
            repository: repository.clone(),
            session: session.clone(),
            logger: logger.clone(),
        });
        let reset_cart = Arc::new(ResetCartUseCaseImpl {
            repository: repository.clone(),
            session: session.clone(),
            logger: logger.clone(),
        });
        let add_cart_item = Arc::new(AddCartItemUseCaseImpl {
            repository: repository.clone(),
            session: session.clone(),
            logger: logger.clone(),
        });
        let remove_cart_item = Arc::new(RemoveCartItemUseCaseImpl {
            repository: repository.clone(),
            session: session.clone(),
            logger: logger.clone(),
        });
        let change_cart_item_count = Arc::new(ChangeCartItemCountUseCaseImpl {
            repository,
            session: session.clone(),
            logger,
        });
        let get_cart = Arc::new(GetCartUseCaseImpl { session });

        Ok(Self {
            init_cart,
            reset_cart,
            add_cart_item,
            remove_cart_item,
            change_cart_item_count,
            get_cart,
        })
    }
}
