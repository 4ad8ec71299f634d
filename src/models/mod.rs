mod room;
pub use room::*;

mod board_item;
pub use board_item::*;

mod chat_message;
pub use chat_message::*;

mod drawing;
pub use drawing::*;
