use utoipa::OpenApi;

use crate::routes::{chat, evaluations, evaluators, health, login};

#[derive(OpenApi)]
#[openapi(info(
    title = "rageval-server",
    description = "Backend gateway for human evaluation of a RAG chat assistant",
    version = "0.1.0",
))]
pub struct ApiDoc;

pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut root = ApiDoc::openapi();
    root.merge(health::HealthApi::openapi());
    root.merge(evaluators::EvaluatorsApi::openapi());
    root.merge(login::LoginApi::openapi());
    root.merge(chat::ChatApi::openapi());
    root.merge(evaluations::EvaluationsApi::openapi());
    root
}
