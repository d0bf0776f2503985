use crate::{GenerateRecipeRequest, Recipe, RecipeCategory};

use std::str::FromStr;

#[test]
fn test_category_wire_names() {
    assert_eq!(
        serde_json::to_string(&RecipeCategory::Sweet).unwrap(),
        "\"dolce\""
    );
    assert_eq!(RecipeCategory::Quick.as_str(), "veloce");
    assert_eq!(RecipeCategory::default(), RecipeCategory::Savory);
}

#[test]
fn test_category_from_str_accepts_both_names() {
    assert_eq!(
        RecipeCategory::from_str("salato").unwrap(),
        RecipeCategory::Savory
    );
    assert_eq!(
        RecipeCategory::from_str("Quick").unwrap(),
        RecipeCategory::Quick
    );
    assert!(RecipeCategory::from_str("brunch").is_err());
}

#[test]
fn test_generate_request_body() {
    let ingredients = vec![String::from("pomodoro"), String::from("basilico")];
    let body = GenerateRecipeRequest {
        ingredients: &ingredients,
        category: RecipeCategory::Savory,
        servings: 2,
    };

    let json = serde_json::to_value(&body).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "ingredients": ["pomodoro", "basilico"],
            "category": "salato",
            "servings": 2
        })
    );
}

#[test]
fn test_recipe_from_backend_body() {
    let recipe: Recipe = serde_json::from_str(
        r#"{
            "id": "0b6a3c1e-52f4-4d0e-9a57-3f2b8c1d9e00",
            "title": "Bruschetta",
            "description": "Pane tostato con pomodoro.",
            "ingredients": ["4 fette di pane", "2 pomodori"],
            "instructions": ["Tostare il pane", "Condire"],
            "prep_time": "10 minuti",
            "cook_time": "5 minuti",
            "servings": 4,
            "category": "veloce",
            "tips": null,
            "created_at": "2024-03-01T10:15:30.123456+00:00",
            "user_id": "6f1c2a4e-8d3b-4c5a-9e7f-0a1b2c3d4e5f"
        }"#,
    )
    .unwrap();

    assert_eq!(recipe.title, "Bruschetta");
    assert_eq!(recipe.instructions.len(), 2);
    assert!(recipe.tips.is_none());
    assert!(recipe.substitutions.is_none());
}
