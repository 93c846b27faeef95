pub mod item;
pub mod money;
pub mod person;
pub mod split;

pub use item::BillItem;
pub use money::Money;
pub use person::{Person, PersonId, MIN_PEOPLE};
