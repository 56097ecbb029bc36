pub mod model;
pub mod resolver;

pub use model::{DEFAULT_TITLE, FieldSpec, FieldType, FormConfig};
pub use resolver::{ConfigResolver, ConfigSource, ENV_APP_CONFIG, ENV_GAS_URL, ResolvedConfig};
