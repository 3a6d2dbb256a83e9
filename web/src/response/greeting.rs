use serde::Serialize;
use utoipa::ToSchema;

/// Fixed payload returned by `GET /json`
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Greeting {
    #[schema(example = "hi")]
    pub text: String,
    pub numbers: Vec<u32>,
}

impl Default for Greeting {
    fn default() -> Self {
        Self {
            text: "hi".to_string(),
            numbers: vec![1, 2, 3],
        }
    }
}
