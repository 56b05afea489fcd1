pub mod create_template;

pub use create_template::CreateTemplate;
