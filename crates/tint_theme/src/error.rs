use thiserror::Error;

use crate::token::ColorToken;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("no color for token `{token}` in the palette or its fallback chain")]
    MissingToken { token: ColorToken },
}
