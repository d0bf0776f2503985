//! Request bodies sent to the backend.

use crate::RecipeCategory;

use serde::Serialize;

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub name: &'a str,
}

#[derive(Serialize)]
pub struct CheckoutRequest<'a> {
    pub origin_url: &'a str,
}

#[derive(Serialize)]
pub struct GenerateRecipeRequest<'a> {
    pub ingredients: &'a [String],
    pub category: RecipeCategory,
    pub servings: u32,
}
