use serde::{Deserialize, Deserializer, Serialize};

/// One creation request as the proxy sees it. Values are forwarded verbatim;
/// `os` is empty when nothing was selected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreationRequest {
    pub os: String,
    pub name: String,
}

/// Wire shape accepted by `POST /api/build`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BuildPayload {
    #[serde(rename = "createOs", default, deserialize_with = "null_as_empty")]
    pub create_os: String,
    #[serde(rename = "createName", default, deserialize_with = "null_as_empty")]
    pub create_name: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<BuildPayload> for CreationRequest {
    fn from(p: BuildPayload) -> Self {
        CreationRequest {
            os: p.create_os,
            name: p.create_name,
        }
    }
}

impl From<&CreationRequest> for BuildPayload {
    fn from(r: &CreationRequest) -> Self {
        BuildPayload {
            create_os: r.os.clone(),
            create_name: r.name.clone(),
        }
    }
}
