pub mod export;
pub mod init;
pub mod link;
pub mod tabs;

pub use export::{export, ExportArgs};
pub use init::{init, InitArgs};
pub use link::{link, LinkArgs};
pub use tabs::{tabs, TabsArgs};
