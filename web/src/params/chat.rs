use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub(crate) struct ChatParams {
    /// Chat message to broadcast to every open `/sse` stream.
    #[serde(default)]
    pub(crate) message: String,
}
