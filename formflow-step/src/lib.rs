mod step;
pub use step::{StepConfig, StepEntry};

mod field;
pub use field::{FieldConfig, FieldOptions};
