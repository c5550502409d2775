//! One module per subcommand, each exposing `execute`.

pub mod get;
pub mod init;
pub mod list;
pub mod set;
pub mod version;
