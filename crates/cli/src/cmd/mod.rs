mod info;
mod manifest;
mod plan;
mod sync;

pub use info::cmd_info;
pub use manifest::cmd_manifest;
pub use plan::cmd_plan;
pub use sync::cmd_sync;
