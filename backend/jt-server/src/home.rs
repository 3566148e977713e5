use crate::views;

use axum::response::Html;

/// GET / - Landing page, also where failed operations send the browser
pub async fn home_page() -> Html<String> {
    Html(views::home::page())
}
