use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    diary::ports::{DiaryLogRepository, GoalRepository, RecentFoodsRepository},
    health::ports::HealthCheckRepository,
    library::{
        entities::{Ingredient, IngredientConfig},
        ports::{IngredientRepository, ProductRepository},
    },
    nutrition::{aggregate_contributions, density_per_100g},
    recipe::{
        entities::{
            Recipe, RecipeConfig, RecipeDetail, RecipeItem, RecipeItemDetail, RecipeNutrition,
        },
        ports::{RecipeRepository, RecipeService},
        value_objects::{CreateRecipeInput, GetRecipesFilter, RecipeItemInput, UpdateRecipeInput,
            normalize_steps},
    },
    stats::ports::StatsRepository,
    tag::ports::TagRepository,
};

/// Resolve item inputs into recipe items, creating library ingredients by
/// name where the client did not pick an existing one. Blank lines are
/// dropped; recipe forms routinely submit trailing empty rows.
async fn resolve_items<IR>(
    ingredient_repository: &IR,
    user_id: Uuid,
    recipe_id: Uuid,
    inputs: Vec<RecipeItemInput>,
) -> Result<Vec<RecipeItem>, CoreError>
where
    IR: IngredientRepository,
{
    let mut items = Vec::with_capacity(inputs.len());

    for input in inputs {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            continue;
        }

        let ingredient_id = match input.ingredient_id {
            Some(id) => id,
            None => match ingredient_repository
                .get_by_name(user_id, name.clone())
                .await?
            {
                Some(existing) => existing.id,
                None => {
                    let created = ingredient_repository
                        .create(Ingredient::new(IngredientConfig {
                            user_id,
                            name,
                            image_url: None,
                            protein: 0.0,
                            fat: 0.0,
                            carbs: 0.0,
                        }))
                        .await?;
                    created.id
                }
            },
        };

        items.push(RecipeItem::new(
            recipe_id,
            ingredient_id,
            input.amount_g,
            input.is_main,
        ));
    }

    Ok(items)
}

async fn build_detail<IR>(
    ingredient_repository: &IR,
    mut recipe: Recipe,
    items: Vec<RecipeItem>,
) -> Result<RecipeDetail, CoreError>
where
    IR: IngredientRepository,
{
    if let Some(steps) = recipe.steps.take() {
        recipe.steps = Some(normalize_steps(&steps));
    }

    let ingredient_ids: Vec<Uuid> = items.iter().map(|i| i.ingredient_id).collect();
    let ingredients = if ingredient_ids.is_empty() {
        Vec::new()
    } else {
        ingredient_repository.get_by_ids(ingredient_ids).await?
    };

    let details = items
        .into_iter()
        .filter_map(|item| {
            let ingredient = ingredients.iter().find(|i| i.id == item.ingredient_id)?;
            Some(RecipeItemDetail {
                id: item.id,
                ingredient_id: item.ingredient_id,
                name: ingredient.name.clone(),
                amount_g: item.amount_g,
                is_main: item.is_main,
                per_100g: ingredient.per_100g,
            })
        })
        .collect();

    Ok(RecipeDetail {
        recipe,
        items: details,
    })
}

impl<I, P, R, D, G, RF, T, ST, H> RecipeService for Service<I, P, R, D, G, RF, T, ST, H>
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
    async fn create_recipe(
        &self,
        user_id: Uuid,
        input: CreateRecipeInput,
    ) -> Result<RecipeDetail, CoreError> {
        if input.title.trim().is_empty() {
            return Err(CoreError::Invalid("title must not be empty".to_string()));
        }

        let recipe = Recipe::new(RecipeConfig {
            user_id,
            title: input.title,
            description: input.description,
            cover_image: input.cover_image,
            tags: input.tags,
            steps: input.steps,
        });

        let recipe = self.recipe_repository.create(recipe).await?;
        let items =
            resolve_items(&self.ingredient_repository, user_id, recipe.id, input.items).await?;
        let items = self.recipe_repository.replace_items(recipe.id, items).await?;

        build_detail(&self.ingredient_repository, recipe, items).await
    }

    async fn get_recipes(
        &self,
        user_id: Uuid,
        filter: GetRecipesFilter,
    ) -> Result<Vec<Recipe>, CoreError> {
        self.recipe_repository.get_by_user(user_id, filter).await
    }

    async fn get_recipe(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
    ) -> Result<Option<RecipeDetail>, CoreError> {
        let Some(recipe) = self.recipe_repository.get_by_id(recipe_id, user_id).await? else {
            return Ok(None);
        };

        let items = self.recipe_repository.get_items(recipe.id).await?;
        build_detail(&self.ingredient_repository, recipe, items)
            .await
            .map(Some)
    }

    async fn update_recipe(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
        input: UpdateRecipeInput,
    ) -> Result<RecipeDetail, CoreError> {
        let mut recipe = self
            .recipe_repository
            .get_by_id(recipe_id, user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if let Some(title) = &input.title
            && title.trim().is_empty()
        {
            return Err(CoreError::Invalid("title must not be empty".to_string()));
        }

        recipe.update(
            input.title,
            input.description,
            input.cover_image,
            input.tags,
            input.steps,
        );
        let recipe = self.recipe_repository.update(recipe).await?;

        let items = match input.items {
            Some(inputs) => {
                let items =
                    resolve_items(&self.ingredient_repository, user_id, recipe.id, inputs).await?;
                self.recipe_repository.replace_items(recipe.id, items).await?
            }
            None => self.recipe_repository.get_items(recipe.id).await?,
        };

        build_detail(&self.ingredient_repository, recipe, items).await
    }

    async fn delete_recipe(&self, user_id: Uuid, recipe_id: Uuid) -> Result<(), CoreError> {
        self.recipe_repository.delete(recipe_id, user_id).await
    }

    async fn recipe_nutrition(
        &self,
        user_id: Uuid,
        recipe_id: Uuid,
    ) -> Result<RecipeNutrition, CoreError> {
        let recipe = self
            .recipe_repository
            .get_by_id(recipe_id, user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let items = self.recipe_repository.get_items(recipe.id).await?;
        let main_items: Vec<&RecipeItem> = items.iter().filter(|i| i.is_main).collect();

        let ingredient_ids: Vec<Uuid> = main_items.iter().map(|i| i.ingredient_id).collect();
        let ingredients = if ingredient_ids.is_empty() {
            Vec::new()
        } else {
            self.ingredient_repository.get_by_ids(ingredient_ids).await?
        };

        let contributions = main_items.iter().filter_map(|item| {
            let ingredient = ingredients.iter().find(|i| i.id == item.ingredient_id)?;
            Some((&ingredient.per_100g, item.amount_g))
        });

        let (total, total_weight_g) = aggregate_contributions(contributions);

        Ok(RecipeNutrition {
            per_100g: density_per_100g(&total, total_weight_g),
            total,
            total_weight_g,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        diary::ports::{MockDiaryLogRepository, MockGoalRepository, MockRecentFoodsRepository},
        health::ports::MockHealthCheckRepository,
        library::ports::{MockIngredientRepository, MockProductRepository},
        nutrition::Macros,
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

    fn service(ingredients: MockIngredientRepository, recipes: MockRecipeRepository) -> TestService {
        Service::new(
            ingredients,
            MockProductRepository::new(),
            recipes,
            MockDiaryLogRepository::new(),
            MockGoalRepository::new(),
            MockRecentFoodsRepository::new(),
            MockTagRepository::new(),
            MockStatsRepository::new(),
            MockHealthCheckRepository::new(),
        )
    }

    fn ingredient(user_id: Uuid, name: &str, per_100g: Macros) -> Ingredient {
        let mut ing = Ingredient::new(IngredientConfig {
            user_id,
            name: name.to_string(),
            image_url: None,
            protein: per_100g.protein,
            fat: per_100g.fat,
            carbs: per_100g.carbs,
        });
        ing.per_100g = per_100g;
        ing
    }

    #[tokio::test]
    async fn test_create_recipe_rejects_blank_title() {
        let service = service(MockIngredientRepository::new(), MockRecipeRepository::new());
        let result = service
            .create_recipe(
                Uuid::new_v4(),
                CreateRecipeInput {
                    title: "".to_string(),
                    description: None,
                    cover_image: None,
                    tags: Vec::new(),
                    steps: None,
                    items: Vec::new(),
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_nutrition_counts_only_main_items() {
        let user_id = Uuid::new_v4();
        let recipe = Recipe::new(RecipeConfig {
            user_id,
            title: "fried rice".to_string(),
            description: None,
            cover_image: None,
            tags: Vec::new(),
            steps: None,
        });
        let recipe_id = recipe.id;

        let rice = ingredient(user_id, "rice", Macros::new(130.0, 2.7, 0.3, 28.0));
        let egg = ingredient(user_id, "egg", Macros::new(155.0, 13.0, 11.0, 1.1));
        let oil = ingredient(user_id, "oil", Macros::new(884.0, 0.0, 100.0, 0.0));

        let items = vec![
            RecipeItem::new(recipe_id, rice.id, 300.0, true),
            RecipeItem::new(recipe_id, egg.id, 100.0, true),
            // seasoning line, excluded from totals
            RecipeItem::new(recipe_id, oil.id, 10.0, false),
        ];

        let mut recipes = MockRecipeRepository::new();
        recipes
            .expect_get_by_id()
            .returning(move |_, _| Ok(Some(recipe.clone())));
        recipes
            .expect_get_items()
            .returning(move |_| Ok(items.clone()));

        let mut ingredients = MockIngredientRepository::new();
        let library = vec![rice.clone(), egg.clone()];
        ingredients
            .expect_get_by_ids()
            .returning(move |_| Ok(library.clone()));

        let service = service(ingredients, recipes);
        let nutrition = service.recipe_nutrition(user_id, recipe_id).await.unwrap();

        assert_eq!(nutrition.total_weight_g, 400.0);
        let expected_total = 130.0 * 3.0 + 155.0;
        assert!((nutrition.total.calories - expected_total).abs() < 1e-9);
        assert!((nutrition.per_100g.calories - expected_total * 100.0 / 400.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_nutrition_zero_weight_is_all_zero() {
        let user_id = Uuid::new_v4();
        let recipe = Recipe::new(RecipeConfig {
            user_id,
            title: "empty".to_string(),
            description: None,
            cover_image: None,
            tags: Vec::new(),
            steps: None,
        });
        let recipe_id = recipe.id;

        let mut recipes = MockRecipeRepository::new();
        recipes
            .expect_get_by_id()
            .returning(move |_, _| Ok(Some(recipe.clone())));
        recipes.expect_get_items().returning(|_| Ok(Vec::new()));

        let service = service(MockIngredientRepository::new(), recipes);
        let nutrition = service.recipe_nutrition(user_id, recipe_id).await.unwrap();

        assert_eq!(nutrition.total_weight_g, 0.0);
        assert_eq!(nutrition.per_100g, Macros::ZERO);
        assert_eq!(nutrition.total, Macros::ZERO);
    }

    #[tokio::test]
    async fn test_create_recipe_creates_unknown_ingredients_by_name() {
        let user_id = Uuid::new_v4();

        let mut recipes = MockRecipeRepository::new();
        recipes.expect_create().returning(Ok);
        recipes
            .expect_replace_items()
            .returning(|_, items| Ok(items));

        let mut ingredients = MockIngredientRepository::new();
        ingredients.expect_get_by_name().returning(|_, _| Ok(None));
        ingredients.expect_create().returning(Ok);
        ingredients.expect_get_by_ids().returning(|ids| {
            Ok(ids
                .into_iter()
                .map(|id| {
                    let mut ing = Ingredient::new(IngredientConfig {
                        user_id: Uuid::new_v4(),
                        name: "scallion".to_string(),
                        image_url: None,
                        protein: 0.0,
                        fat: 0.0,
                        carbs: 0.0,
                    });
                    ing.id = id;
                    ing
                })
                .collect())
        });

        let service = service(ingredients, recipes);
        let detail = service
            .create_recipe(
                user_id,
                CreateRecipeInput {
                    title: "scallion pancake".to_string(),
                    description: None,
                    cover_image: None,
                    tags: Vec::new(),
                    steps: None,
                    items: vec![
                        RecipeItemInput {
                            ingredient_id: None,
                            name: "scallion".to_string(),
                            amount_g: 50.0,
                            is_main: true,
                        },
                        // blank line dropped
                        RecipeItemInput {
                            ingredient_id: None,
                            name: "  ".to_string(),
                            amount_g: 0.0,
                            is_main: false,
                        },
                    ],
                },
            )
            .await
            .unwrap();

        assert_eq!(detail.items.len(), 1);
        assert!(detail.items[0].is_main);
    }
}
