use std::process::ExitCode;

use serde::Serialize;

use business::domain::cart::errors::CartError;

use crate::commands::CommandError;

#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

pub trait IntoCliError {
    fn into_cli_error(self) -> (ExitCode, ErrorResponse);
}

const VALIDATION_EXIT: u8 = 2;
const FAILURE_EXIT: u8 = 1;

impl IntoCliError for CommandError {
    fn into_cli_error(self) -> (ExitCode, ErrorResponse) {
        let (code, name, message) = match &self {
            CommandError::UserRequired => (
                VALIDATION_EXIT,
                "ValidationError",
                "cart.user_required".to_string(),
            ),
            CommandError::StorageUnavailable(warning) => {
                (FAILURE_EXIT, "InternalError", warning.error.to_string())
            }
            CommandError::Cart(CartError::Repository(e)) => {
                (FAILURE_EXIT, "InternalError", e.to_string())
            }
            CommandError::Cart(e) => (VALIDATION_EXIT, "ValidationError", e.to_string()),
        };

        (
            ExitCode::from(code),
            ErrorResponse {
                name: name.to_string(),
                message,
            },
        )
    }
}
