mod dispatcher;

pub use dispatcher::{Dispatcher, DispatcherStats, HandlerError, PacketHandler};
