use askama::Template;
use axum::response::Html;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate;

#[derive(Template)]
#[template(path = "technology.html")]
pub struct TechnologyTemplate;

#[derive(Template)]
#[template(path = "adaptiq.html")]
pub struct AdaptIqDemoTemplate;

#[derive(Template)]
#[template(path = "lab.html")]
pub struct LabTemplate;

pub async fn home_handler() -> Html<String> {
    Html(HomeTemplate.render().unwrap())
}

pub async fn technology_handler() -> Html<String> {
    Html(TechnologyTemplate.render().unwrap())
}

pub async fn adaptiq_demo_handler() -> Html<String> {
    Html(AdaptIqDemoTemplate.render().unwrap())
}

pub async fn lab_handler() -> Html<String> {
    Html(LabTemplate.render().unwrap())
}
