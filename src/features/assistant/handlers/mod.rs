mod assistant_handler;

pub use assistant_handler::{
    __path_chat, __path_get_greeting, __path_get_tips, chat, get_greeting, get_tips,
};
