pub mod deploy;

pub use deploy::{DeployEngine, DeployOptions, DeployPlan};
