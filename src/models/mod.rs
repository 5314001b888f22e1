// Plan inputs and outputs

pub mod plan_request;
pub mod week_plan;

pub use plan_request::*;
pub use week_plan::*;
