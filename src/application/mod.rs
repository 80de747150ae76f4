pub mod chart_host;
pub mod coordinator;
pub mod entrance;
pub mod view_selector;

pub use chart_host::*;
pub use coordinator::*;
pub use entrance::*;
pub use view_selector::*;
