//! The configuration applied to the Anclora Private Estates workspace

mod contact;
mod deal;

pub use contact::contact_fields;
pub use deal::{deal_fields, deal_pipeline};

use crate::schema::Catalog;

impl Catalog {
    /// Contact fields, deal fields and the sales pipeline
    pub fn standard() -> Self {
        Self {
            contact_fields: contact_fields(),
            deal_fields: deal_fields(),
            pipeline: deal_pipeline(),
        }
    }
}
