// Adapters layer: concrete deployers and artifact loading.

pub mod artifact;
pub mod dry_run;
pub mod rpc;

pub use artifact::load_artifact;
pub use dry_run::DryRunDeployer;
pub use rpc::RpcDeployer;
