pub mod controller;
pub mod state;
pub mod view;

pub use controller::SessionController;
pub use state::{Preview, Session};
pub use view::{ItemView, PersonView, SessionView};
