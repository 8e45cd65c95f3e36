pub mod error;
pub mod models;
pub mod reconcile;
pub mod validation;

pub use error::{CoreError, ErrorLocation, Result};
pub use models::project::Project;
pub use models::project_status::ProjectStatus;
pub use reconcile::list_diff::ListDiff;
pub use reconcile::reconciler::{diff, reconcile};
pub use reconcile::rendered_list::RenderedList;
pub use validation::field::Field;
pub use validation::field_value::FieldValue;
pub use validation::sanitize::sanitize_string;
