pub mod debounce;
pub mod widget;

pub use debounce::{Debouncer, Ticket};
pub use widget::{Effect, LookupRequest, Rendered, SearchWidget};
