//! sea-orm table models. Domain mappers in `infrastructure` convert these
//! to and from the domain entities.

pub mod daily_goals;
pub mod daily_logs;
pub mod ingredients;
pub mod products;
pub mod profiles;
pub mod recent_foods;
pub mod recipe_items;
pub mod recipes;
pub mod tags;
