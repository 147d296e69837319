use crate::{domain::tag::entities::Tag, entity::tags};

impl From<&tags::Model> for Tag {
    fn from(model: &tags::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            category: model.category.clone(),
            name: model.name.clone(),
            category_rank: model.category_rank,
            tag_rank: model.tag_rank,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<tags::Model> for Tag {
    fn from(model: tags::Model) -> Self {
        Self::from(&model)
    }
}
