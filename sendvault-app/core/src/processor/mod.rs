//! View-model glue for the send list screen.

mod coordinator;
mod send_list;

pub use coordinator::{Alert, ErrorReporter, SendCoordinator, SendRoute, TracingErrorReporter};
pub use send_list::{SendListAction, SendListEffect, SendListProcessor, SendListState};
