use askama::Template;
use crate::models::OsOption;

#[derive(Template)]
#[template(path = "create.html")]
pub struct CreateTemplate {
    pub backend_hostname: String,
    pub os_options: Vec<OsOption>,
    pub name: String,
    pub has_result: bool,
    pub result_ok: bool,
    pub result_text: String,
}
