use thiserror::Error;

use crate::model::company::CompanyError;
use crate::model::form::FormError;
use crate::model::ids::ParseIdError;
use crate::model::question::ScoreError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Id(#[from] ParseIdError),
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error(transparent)]
    Company(#[from] CompanyError),
    #[error(transparent)]
    Form(#[from] FormError),
}
