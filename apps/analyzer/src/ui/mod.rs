// Server-rendered HTML page. Rendering takes the session explicitly.

pub mod handlers;
pub mod html;
pub mod page;
pub mod panels;
pub mod styles;
