/// Aggregate service implementing every domain service trait over the full
/// set of repository ports. Concrete repository types are chosen once, in
/// `application::create_service`.
#[derive(Clone)]
pub struct Service<I, P, R, D, G, RF, T, ST, H> {
    pub(crate) ingredient_repository: I,
    pub(crate) product_repository: P,
    pub(crate) recipe_repository: R,
    pub(crate) diary_repository: D,
    pub(crate) goal_repository: G,
    pub(crate) recent_foods_repository: RF,
    pub(crate) tag_repository: T,
    pub(crate) stats_repository: ST,
    pub(crate) health_check_repository: H,
}

impl<I, P, R, D, G, RF, T, ST, H> Service<I, P, R, D, G, RF, T, ST, H> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ingredient_repository: I,
        product_repository: P,
        recipe_repository: R,
        diary_repository: D,
        goal_repository: G,
        recent_foods_repository: RF,
        tag_repository: T,
        stats_repository: ST,
        health_check_repository: H,
    ) -> Self {
        Self {
            ingredient_repository,
            product_repository,
            recipe_repository,
            diary_repository,
            goal_repository,
            recent_foods_repository,
            tag_repository,
            stats_repository,
            health_check_repository,
        }
    }
}
