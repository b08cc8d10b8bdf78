pub mod init_script;
pub mod tooling_connector;

pub use init_script::InitScript;
pub use tooling_connector::GradleToolingConnector;
