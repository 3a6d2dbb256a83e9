use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub(crate) struct EchoParams {
    /// Text to echo back. Defaults to the empty string.
    #[serde(default)]
    pub(crate) input: String,
}
