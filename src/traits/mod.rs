pub mod actors;
pub mod controller;
pub mod level;
pub mod store;
pub mod view;

pub use actors::*;
pub use controller::*;
pub use level::*;
pub use store::*;
pub use view::*;
