use axum::response::Redirect;

pub async fn home() -> Redirect {
    Redirect::temporary("/static/index.html")
}
