//! State Management
//!
//! Session store, remote-resource machine, notification buffer and the
//! WebSocket connection manager.

pub mod notifications;
pub mod remote;
pub mod session;
pub mod websocket;

pub use notifications::{provide_notifications, Notifications};
pub use remote::Remote;
pub use session::{provide_session, use_session, SessionStore};
pub use websocket::{SocketManager, WsEvent};
