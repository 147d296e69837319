use crate::{domain::profile::entities::Profile, entity::profiles};

impl From<&profiles::Model> for Profile {
    fn from(model: &profiles::Model) -> Self {
        Self {
            id: model.id,
            device_id: model.device_id.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<profiles::Model> for Profile {
    fn from(model: profiles::Model) -> Self {
        Self::from(&model)
    }
}
