use business::domain::cart::model::CartItemPayload;
use business::domain::cart::outcome::CartOutcome;
use business::domain::cart::use_cases::add_item::AddCartItemParams;
use business::domain::cart::use_cases::change_count::ChangeCartItemCountParams;
use business::domain::cart::use_cases::init::InitCartParams;
use business::domain::cart::use_cases::remove_item::RemoveCartItemParams;
use business::domain::cart::use_cases::reset::ResetCartParams;
use business::domain::cart::value_objects::ProductId;
use business::domain::shared::value_objects::UserId;

use super::{CommandError, Commands};
use crate::setup::dependency_injection::DependencyContainer;

/// Loads the user's cart, then applies `command` to it.
pub fn run(command: Commands, container: &DependencyContainer) -> Result<CartOutcome, CommandError> {
    match command {
        Commands::Show { user } => {
            let loaded = init(container, &user)?;
            Ok(CartOutcome {
                state: container.get_cart.execute(),
                warning: loaded.warning,
            })
        }
        Commands::Add {
            user,
            id,
            title,
            price,
            count,
            description,
            category,
            image,
        } => {
            let user_id = signed_in(&user)?;
            load_for_update(container, &user)?;
            let outcome = container.add_cart_item.execute(AddCartItemParams {
                item: CartItemPayload {
                    id: ProductId::new(id),
                    title,
                    price,
                    description,
                    category_id: category,
                    image,
                },
                user_id,
                count,
            })?;
            Ok(outcome)
        }
        Commands::Remove { user, id } => {
            let user_id = signed_in(&user)?;
            load_for_update(container, &user)?;
            let outcome = container.remove_cart_item.execute(RemoveCartItemParams {
                item_id: ProductId::new(id),
                user_id,
            })?;
            Ok(outcome)
        }
        Commands::SetCount { user, id, count } => {
            let user_id = signed_in(&user)?;
            load_for_update(container, &user)?;
            let outcome = container
                .change_cart_item_count
                .execute(ChangeCartItemCountParams {
                    item_id: ProductId::new(id),
                    count,
                    user_id,
                })?;
            Ok(outcome)
        }
        Commands::Reset { user } => {
            let user_id = signed_in(&user)?;
            let outcome = container
                .reset_cart
                .execute(ResetCartParams { user_id })?;
            Ok(outcome)
        }
    }
}

fn init(container: &DependencyContainer, user: &str) -> Result<CartOutcome, CommandError> {
    let outcome = container.init_cart.execute(InitCartParams {
        user_id: Some(UserId::new(user)),
    })?;
    Ok(outcome)
}

/// Loads the stored cart before a mutation.
///
/// A mutation writes the whole list back, so it must not run over a cart that
/// failed to load.
fn load_for_update(container: &DependencyContainer, user: &str) -> Result<(), CommandError> {
    match init(container, user)?.warning {
        Some(warning) => Err(CommandError::StorageUnavailable(warning)),
        None => Ok(()),
    }
}

/// Mutations are keyed by user, so a blank id is refused up front.
fn signed_in(user: &str) -> Result<UserId, CommandError> {
    let user_id = UserId::new(user);
    if user_id.is_blank() {
        return Err(CommandError::UserRequired);
    }
    Ok(user_id)
}
