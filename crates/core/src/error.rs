use crate::registration::RegistrationRejection;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A registration was refused by a business rule.
    #[error(transparent)]
    Rejected(#[from] RegistrationRejection),
}
