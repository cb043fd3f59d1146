use mealfinder::{DetailError, MealFinder};
use mockito::Matcher;

fn finder(url: String) -> MealFinder {
    MealFinder::builder().base_url(url).build().unwrap()
}

#[tokio::test]
async fn test_known_id_returns_matching_recipe() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), "52772".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"meals": [{
                "idMeal": "52772",
                "strMeal": "Teriyaki Chicken Casserole",
                "strDrinkAlternate": null,
                "strCategory": "Chicken",
                "strArea": "Japanese",
                "strInstructions": "Preheat oven to 350° F. Spray a 9x13-inch baking pan with non-stick spray.",
                "strMealThumb": "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
                "strTags": "Meat,Casserole",
                "strYoutube": "https://www.youtube.com/watch?v=4aZr5hZXP_s",
                "strIngredient1": "soy sauce",
                "strIngredient2": "water",
                "strIngredient3": "brown sugar",
                "strIngredient4": "",
                "strMeasure1": "3/4 cup",
                "strMeasure2": "1/2 cup",
                "strMeasure3": "1/4 cup",
                "strMeasure4": "",
                "strSource": null,
                "strImageSource": null,
                "strCreativeCommonsConfirmed": null,
                "dateModified": null
            }]}"#,
        )
        .create_async()
        .await;

    let recipe = finder(server.url()).recipe("52772").await.unwrap();

    assert_eq!(recipe.id, "52772");
    assert_eq!(recipe.name, "Teriyaki Chicken Casserole");
    assert_eq!(recipe.category.as_deref(), Some("Chicken"));
    assert!(recipe.instructions.starts_with("Preheat oven"));
    assert_eq!(
        recipe.youtube.as_deref(),
        Some("https://www.youtube.com/watch?v=4aZr5hZXP_s")
    );
    assert_eq!(recipe.ingredients.len(), 3);
    assert_eq!(recipe.ingredients[2].ingredient, "brown sugar");
    assert_eq!(recipe.tags, vec!["Meat", "Casserole"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), "99999999".into()))
        .with_status(200)
        .with_body(r#"{"meals": null}"#)
        .create_async()
        .await;

    let result = finder(server.url()).recipe("99999999").await;
    match result {
        Err(DetailError::NotFound(id)) => assert_eq!(id, "99999999"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_is_fetch_failed_not_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::Any)
        .with_status(502)
        .create_async()
        .await;

    let result = finder(server.url()).recipe("52772").await;
    match result {
        Err(DetailError::FetchFailed { id, .. }) => assert_eq!(id, "52772"),
        other => panic!("expected FetchFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_catalog_is_fetch_failed() {
    // Nothing listens on port 9 on the loopback interface
    let result = finder("http://127.0.0.1:9".to_string()).recipe("52772").await;
    assert!(matches!(result, Err(DetailError::FetchFailed { .. })));
}
