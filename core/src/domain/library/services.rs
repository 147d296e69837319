use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    diary::ports::{DiaryLogRepository, GoalRepository, RecentFoodsRepository},
    health::ports::HealthCheckRepository,
    library::{
        entities::{Ingredient, IngredientConfig, Product, ProductConfig},
        ports::{IngredientRepository, LibraryService, ProductRepository},
        value_objects::{
            CreateIngredientInput, CreateProductInput, GetLibraryFilter, UpdateIngredientInput,
            UpdateProductInput,
        },
    },
    recipe::ports::RecipeRepository,
    stats::ports::StatsRepository,
    tag::ports::TagRepository,
};

impl<I, P, R, D, G, RF, T, ST, H> LibraryService for Service<I, P, R, D, G, RF, T, ST, H>
where
    I: IngredientRepository,
    P: ProductRepository,
    R: RecipeRepository,
    D: DiaryLogRepository,
    G: GoalRepository,
    RF: RecentFoodsRepository,
    T: TagRepository,
    ST: StatsRepository,
    H: HealthCheckRepository,
{
    async fn create_ingredient(
        &self,
        user_id: Uuid,
        input: CreateIngredientInput,
    ) -> Result<Ingredient, CoreError> {
        if input.name.trim().is_empty() {
            return Err(CoreError::Invalid("name must not be empty".to_string()));
        }

        let ingredient = Ingredient::new(IngredientConfig {
            user_id,
            name: input.name,
            image_url: input.image_url,
            protein: input.protein,
            fat: input.fat,
            carbs: input.carbs,
        });

        self.ingredient_repository.create(ingredient).await
    }

    async fn get_ingredients(
        &self,
        user_id: Uuid,
        filter: GetLibraryFilter,
    ) -> Result<Vec<Ingredient>, CoreError> {
        self.ingredient_repository.get_by_user(user_id, filter).await
    }

    async fn get_ingredient(
        &self,
        user_id: Uuid,
        ingredient_id: Uuid,
    ) -> Result<Option<Ingredient>, CoreError> {
        self.ingredient_repository
            .get_by_id(ingredient_id, user_id)
            .await
    }

    async fn update_ingredient(
        &self,
        user_id: Uuid,
        ingredient_id: Uuid,
        input: UpdateIngredientInput,
    ) -> Result<Ingredient, CoreError> {
        let mut ingredient = self
            .ingredient_repository
            .get_by_id(ingredient_id, user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ingredient.update(
            input.name,
            input.image_url,
            input.protein,
            input.fat,
            input.carbs,
        );

        self.ingredient_repository.update(ingredient).await
    }

    async fn delete_ingredient(
        &self,
        user_id: Uuid,
        ingredient_id: Uuid,
    ) -> Result<(), CoreError> {
        self.ingredient_repository
            .delete(ingredient_id, user_id)
            .await
    }

    async fn create_product(
        &self,
        user_id: Uuid,
        input: CreateProductInput,
    ) -> Result<Product, CoreError> {
        if input.name.trim().is_empty() {
            return Err(CoreError::Invalid("name must not be empty".to_string()));
        }

        let product = Product::new(ProductConfig {
            user_id,
            name: input.name,
            image_url: input.image_url,
            unit: input.unit,
            unit_weight_g: input.unit_weight_g,
            protein: input.protein,
            fat: input.fat,
            carbs: input.carbs,
        });

        self.product_repository.create(product).await
    }

    async fn get_products(
        &self,
        user_id: Uuid,
        filter: GetLibraryFilter,
    ) -> Result<Vec<Product>, CoreError> {
        self.product_repository.get_by_user(user_id, filter).await
    }

    async fn get_product(
        &self,
        user_id: Uuid,
        product_id: Uuid,
    ) -> Result<Option<Product>, CoreError> {
        self.product_repository.get_by_id(product_id, user_id).await
    }

    async fn update_product(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        input: UpdateProductInput,
    ) -> Result<Product, CoreError> {
        let mut product = self
            .product_repository
            .get_by_id(product_id, user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        product.update(
            input.name,
            input.image_url,
            input.unit,
            input.unit_weight_g,
            input.protein,
            input.fat,
            input.carbs,
        );

        self.product_repository.update(product).await
    }

    async fn delete_product(&self, user_id: Uuid, product_id: Uuid) -> Result<(), CoreError> {
        self.product_repository.delete(product_id, user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        diary::ports::{MockDiaryLogRepository, MockGoalRepository, MockRecentFoodsRepository},
        health::ports::MockHealthCheckRepository,
        library::ports::{MockIngredientRepository, MockProductRepository},
        recipe::ports::MockRecipeRepository,
        stats::ports::MockStatsRepository,
        tag::ports::MockTagRepository,
    };

    type TestService = Service<
        MockIngredientRepository,
        MockProductRepository,
        MockRecipeRepository,
        MockDiaryLogRepository,
        MockGoalRepository,
        MockRecentFoodsRepository,
        MockTagRepository,
        MockStatsRepository,
        MockHealthCheckRepository,
    >;

    fn service(
        ingredients: MockIngredientRepository,
        products: MockProductRepository,
    ) -> TestService {
        Service::new(
            ingredients,
            products,
            MockRecipeRepository::new(),
            MockDiaryLogRepository::new(),
            MockGoalRepository::new(),
            MockRecentFoodsRepository::new(),
            MockTagRepository::new(),
            MockStatsRepository::new(),
            MockHealthCheckRepository::new(),
        )
    }

    #[tokio::test]
    async fn test_create_ingredient_derives_calories() {
        let mut ingredients = MockIngredientRepository::new();
        ingredients.expect_create().returning(Ok);

        let service = service(ingredients, MockProductRepository::new());
        let created = service
            .create_ingredient(
                Uuid::new_v4(),
                CreateIngredientInput {
                    name: "chicken breast".to_string(),
                    image_url: None,
                    protein: 31.0,
                    fat: 3.6,
                    carbs: 0.0,
                },
            )
            .await
            .unwrap();

        assert_eq!(created.per_100g.calories, 31.0 * 4.0 + 3.6 * 9.0);
    }

    #[tokio::test]
    async fn test_create_ingredient_rejects_blank_name() {
        let service = service(
            MockIngredientRepository::new(),
            MockProductRepository::new(),
        );
        let result = service
            .create_ingredient(
                Uuid::new_v4(),
                CreateIngredientInput {
                    name: "   ".to_string(),
                    image_url: None,
                    protein: 0.0,
                    fat: 0.0,
                    carbs: 0.0,
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_update_product_recomputes_calories() {
        let user_id = Uuid::new_v4();
        let product = Product::new(ProductConfig {
            user_id,
            name: "protein bar".to_string(),
            image_url: None,
            unit: crate::domain::nutrition::MeasureUnit::Piece,
            unit_weight_g: None,
            protein: 20.0,
            fat: 8.0,
            carbs: 25.0,
        });
        let product_id = product.id;

        let mut products = MockProductRepository::new();
        products
            .expect_get_by_id()
            .returning(move |_, _| Ok(Some(product.clone())));
        products.expect_update().returning(Ok);

        let service = service(MockIngredientRepository::new(), products);
        let updated = service
            .update_product(
                user_id,
                product_id,
                UpdateProductInput {
                    protein: Some(10.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.per_unit.protein, 10.0);
        assert_eq!(
            updated.per_unit.calories,
            10.0 * 4.0 + 25.0 * 4.0 + 8.0 * 9.0
        );
    }

    #[tokio::test]
    async fn test_update_missing_ingredient_is_not_found() {
        let mut ingredients = MockIngredientRepository::new();
        ingredients.expect_get_by_id().returning(|_, _| Ok(None));

        let service = service(ingredients, MockProductRepository::new());
        let result = service
            .update_ingredient(
                Uuid::new_v4(),
                Uuid::new_v4(),
                UpdateIngredientInput::default(),
            )
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }
}
