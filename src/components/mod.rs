pub mod character_form;
pub mod character_list;
mod error;
pub mod guild_panel;
pub mod network_canvas;
mod upload;
mod widgets;
